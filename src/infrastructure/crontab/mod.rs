//! Crontab Store Implementations
//!
//! Concrete implementations of the `CrontabStore` port.

mod file;
mod memory;
mod system;

pub use file::FileCrontab;
pub use memory::MemoryCrontab;
pub use system::{SystemCrontab, DEFAULT_CRONTAB_COMMAND};
