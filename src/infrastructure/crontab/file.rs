//! File-backed crontab
//!
//! Stands in for the system crontab: useful for managing a crontab file
//! that is installed by other means, and for testing the CLI without
//! touching the real one.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::ports::CrontabStore;
use crate::error::CronbookResult;
use crate::infrastructure::fs::LocalFs;

/// A crontab stored in a plain file
#[derive(Debug, Clone)]
pub struct FileCrontab {
    path: PathBuf,
    fs: LocalFs,
}

impl FileCrontab {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CrontabStore for FileCrontab {
    fn read(&self) -> CronbookResult<String> {
        debug!(path = %self.path.display(), "reading crontab file");
        self.fs.read_or_empty(&self.path)
    }

    fn write(&self, text: &str) -> CronbookResult<()> {
        info!(path = %self.path.display(), bytes = text.len(), "replacing crontab file");
        self.fs.write_atomic(&self.path, text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
