//! Line classification for the titled crontab format
//!
//! Every raw line is classified exactly once; the parser consumes the
//! classification and the serializer produces lines that classify back to
//! the same kind.

use crate::domain::entities::EnvVar;

/// Prefix of a job section header
pub const HEADER_PREFIX: &str = "# [";
/// Suffix of a job section header
pub const HEADER_SUFFIX: char = ']';

/// Kind of a single crontab line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# [title]` - opens a job block
    Header(&'a str),
    /// Whitespace only
    Blank,
    /// `#` comment that is not a header
    Comment,
    /// `NAME=VALUE`
    Assignment(EnvVar),
    /// Anything else; inside a block this must be a schedule line
    Text,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim_end();
        if let Some(title) = trimmed
            .strip_prefix(HEADER_PREFIX)
            .and_then(|rest| rest.strip_suffix(HEADER_SUFFIX))
        {
            return LineKind::Header(title);
        }
        if trimmed.trim_start().is_empty() {
            return LineKind::Blank;
        }
        if trimmed.trim_start().starts_with('#') {
            return LineKind::Comment;
        }
        match EnvVar::parse(trimmed) {
            Some(var) => LineKind::Assignment(var),
            None => LineKind::Text,
        }
    }

    /// Lines that end a job block without belonging to it
    pub fn closes_block(&self) -> bool {
        matches!(self, LineKind::Blank | LineKind::Comment)
    }
}
