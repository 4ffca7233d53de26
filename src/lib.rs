//! Cronbook - titled jobs inside a single crontab
//!
//! Cronbook reads a crontab in which jobs are grouped under `# [title]`
//! headers, each with its own environment assignments, and lets them be
//! added, replaced and removed by title without disturbing the rest of the
//! file.
//!
//! ```
//! use cronbook::{parse, serialize, Document, Environment};
//!
//! let mut doc = Document::new();
//! doc.enter_job("Manual", "5 4 3 2 1 echo hi", Environment::new()).unwrap();
//! let text = serialize(&doc);
//! assert_eq!(text, "# [Manual]\n5 4 3 2 1 echo hi\n");
//! assert_eq!(parse(&text).unwrap(), doc);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod parser;
pub mod serializer;

// Re-exports for convenience
pub use application::{CrontabSync, SyncReport};
pub use config::Config;
pub use domain::entities::{
    AddOutcome, Document, Entry, EnvVar, Environment, Job, ScheduleEntry, Timing,
};
pub use domain::ports::CrontabStore;
pub use domain::value_objects::Shorthand;
pub use error::{CronbookError, CronbookResult};
pub use infrastructure::{FileCrontab, MemoryCrontab, SystemCrontab};
pub use parser::{parse, parse_file};
pub use serializer::serialize;
