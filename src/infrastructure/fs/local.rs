//! Local File System Implementation
//!
//! Reads and atomic writes for crontab fragments, saved copies and
//! file-backed crontabs.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::home::cronbook_home_dir;
use crate::error::CronbookResult;

/// Local file system access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// Read file content
    pub fn read(&self, path: &Path) -> CronbookResult<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    /// Read file content, treating a missing file as empty
    pub fn read_or_empty(&self, path: &Path) -> CronbookResult<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write content atomically: temp file in the same directory, then rename.
    ///
    /// On any error the destination is left as it was.
    pub fn write_atomic(&self, path: &Path, content: &str) -> CronbookResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;

        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if s == "~" {
        return cronbook_home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = cronbook_home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
