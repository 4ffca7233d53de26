//! CrontabStore port - the crontab being managed
//!
//! The live system crontab is shared, unversioned state outside the
//! process. Reaching it only through this trait lets the sync use case run
//! against a plain file or an in-memory fake.
//!
//! Implementations:
//! - `SystemCrontab` - the user's crontab via the `crontab` binary
//! - `FileCrontab` - a file standing in for the crontab
//! - `MemoryCrontab` - in-memory, for tests

use crate::error::CronbookResult;

/// Source and sink of crontab text
pub trait CrontabStore {
    /// Read the whole crontab. A crontab that does not exist reads as "".
    fn read(&self) -> CronbookResult<String>;

    /// Replace the whole crontab with `text`.
    fn write(&self, text: &str) -> CronbookResult<()>;

    /// Human-readable name used in messages and diffs
    fn describe(&self) -> String;
}

impl<T: CrontabStore + ?Sized> CrontabStore for &T {
    fn read(&self) -> CronbookResult<String> {
        (**self).read()
    }

    fn write(&self, text: &str) -> CronbookResult<()> {
        (**self).write(text)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: CrontabStore + ?Sized> CrontabStore for Box<T> {
    fn read(&self) -> CronbookResult<String> {
        (**self).read()
    }

    fn write(&self, text: &str) -> CronbookResult<()> {
        (**self).write(text)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
