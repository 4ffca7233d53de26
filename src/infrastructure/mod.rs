//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file access (atomic writes, home expansion)
//! - `crontab/` - `CrontabStore` implementations (system, file, memory)

pub mod crontab;
pub mod fs;

// Re-export for convenience
pub use crontab::{FileCrontab, MemoryCrontab, SystemCrontab};
pub use fs::LocalFs;
