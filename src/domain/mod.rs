//! Domain Layer
//!
//! Pure crontab document model without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Document, Job, ScheduleEntry, Environment
//! - `value_objects/` - Line classification and schedule shorthands
//! - `ports/` - Interface to the crontab being managed
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or runs processes
//! 2. **Ports & Adapters** - Crontab access goes through the `CrontabStore` port

pub mod entities;
pub mod ports;
pub mod value_objects;
