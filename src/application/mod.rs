//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CrontabSync` - read, mutate and write back a crontab (add, enter,
//!   remove, clear, save)

pub mod sync;

pub use sync::{
    parse_env_pair, AddOptions, Change, CrontabSync, EnterOptions, RemoveOptions, SaveReport,
    SyncReport,
};
