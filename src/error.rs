//! Error types for Cronbook
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Cronbook operations
pub type CronbookResult<T> = Result<T, CronbookError>;

/// Main error type for Cronbook operations
#[derive(Error, Debug)]
pub enum CronbookError {
    /// Structurally invalid crontab text
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A job with this title already exists and overwrite was not requested
    #[error("job '{title}' already exists in the crontab")]
    TitleCollision { title: String },

    /// No job with this title
    #[error("job '{title}' does not exist in the crontab")]
    TitleNotFound { title: String },

    /// Title cannot be represented in a section header
    #[error("invalid job title {title:?}: {reason}")]
    InvalidTitle { title: String, reason: String },

    /// Request is inconsistent on its own (before touching any crontab)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The crontab binary could not be run or reported failure
    #[error("crontab command failed: {0}")]
    CrontabCommand(String),

    /// Malformed configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl CronbookError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        CronbookError::Parse {
            line,
            message: message.into(),
        }
    }

    /// 1-based line number for parse errors
    pub fn line(&self) -> Option<usize> {
        match self {
            CronbookError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Process exit status conventionally used for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            CronbookError::Parse { .. } => 3,
            CronbookError::TitleCollision { .. } => 4,
            CronbookError::TitleNotFound { .. } => 5,
            CronbookError::Io(_) => 6,
            CronbookError::CrontabCommand(_) => 7,
            CronbookError::Config { .. } => 8,
            CronbookError::InvalidTitle { .. } | CronbookError::InvalidRequest(_) => 9,
        }
    }

    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            CronbookError::Parse { .. } => "parse",
            CronbookError::TitleCollision { .. } => "title_collision",
            CronbookError::TitleNotFound { .. } => "title_not_found",
            CronbookError::InvalidTitle { .. } => "invalid_title",
            CronbookError::InvalidRequest(_) => "invalid_request",
            CronbookError::Io(_) => "io",
            CronbookError::CrontabCommand(_) => "crontab_command",
            CronbookError::Config { .. } => "config",
        }
    }
}
