//! Sync report types

use std::path::PathBuf;

use serde::Serialize;

/// One effect of a sync operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum Change {
    /// New job appended
    Added { title: String },
    /// Existing job replaced in place
    Replaced { title: String },
    Removed { title: String },
    /// Requested for removal but not present
    Skipped { title: String },
    /// Whole crontab emptied
    Cleared { jobs: usize },
}

impl Change {
    pub fn title(&self) -> Option<&str> {
        match self {
            Change::Added { title }
            | Change::Replaced { title }
            | Change::Removed { title }
            | Change::Skipped { title } => Some(title),
            Change::Cleared { .. } => None,
        }
    }
}

impl std::fmt::Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Change::Added { title } => write!(f, "added '{}'", title),
            Change::Replaced { title } => write!(f, "replaced '{}'", title),
            Change::Removed { title } => write!(f, "removed '{}'", title),
            Change::Skipped { title } => write!(f, "skipped '{}' (not present)", title),
            Change::Cleared { jobs } => write!(f, "cleared crontab ({} jobs)", jobs),
        }
    }
}

/// Result of a read-modify-write transaction
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Where the crontab lives
    pub target: String,
    /// Crontab text before the operation
    pub before: String,
    /// Crontab text after the operation (what was, or would be, written)
    pub after: String,
    pub changes: Vec<Change>,
    /// False for dry runs
    pub written: bool,
}

impl SyncReport {
    /// Whether the operation leaves the text as it was
    pub fn is_unchanged(&self) -> bool {
        self.before == self.after
    }
}

/// Result of saving the crontab to a file
#[derive(Debug, Clone, Serialize)]
pub struct SaveReport {
    pub path: PathBuf,
    pub jobs: usize,
    pub bytes: usize,
}
