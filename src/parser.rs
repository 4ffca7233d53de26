//! Crontab parser
//!
//! Reads the titled crontab format into a `Document` in a single forward
//! pass:
//!
//! ```text
//! # [Nightly backup]
//! MAILTO=ops@example.com
//! PATH="/usr/local/bin:/usr/bin"
//! 0 3 * * * backup --full
//! 30 3 * * 0 backup --verify
//! ```
//!
//! A header opens a job block. Assignments directly after the header belong
//! to the job; every following line up to a blank line, a comment or the next
//! header is a schedule line. Lines outside blocks are kept verbatim.

use std::fs;
use std::path::Path;

use crate::domain::entities::{Document, EnvVar, Environment, Job, ScheduleEntry};
use crate::domain::value_objects::LineKind;
use crate::error::{CronbookError, CronbookResult};

/// A job block that has been opened but not yet closed
#[derive(Debug)]
struct OpenBlock {
    title: String,
    header_line: usize,
    environment: Environment,
    schedules: Vec<ScheduleEntry>,
}

impl OpenBlock {
    fn new(title: &str, header_line: usize) -> Self {
        Self {
            title: title.to_string(),
            header_line,
            environment: Environment::new(),
            schedules: Vec::new(),
        }
    }

    fn assign(&mut self, var: EnvVar, line: usize) -> CronbookResult<()> {
        if !self.schedules.is_empty() {
            return Err(CronbookError::parse(
                line,
                format!(
                    "environment assignment '{}' after schedule lines in job '{}'; \
                     assignments must come directly after the header",
                    var.name(),
                    self.title
                ),
            ));
        }
        self.environment
            .push(var)
            .map_err(|message| CronbookError::parse(line, message))
    }

    fn close(self) -> CronbookResult<Job> {
        if self.schedules.is_empty() {
            return Err(CronbookError::parse(
                self.header_line,
                format!("job '{}' has no schedule lines", self.title),
            ));
        }
        let header_line = self.header_line;
        Job::new(self.title, self.environment, self.schedules)
            .map_err(|e| CronbookError::parse(header_line, e.to_string()))
    }
}

/// Parse crontab text into a document.
///
/// Fails on the first structural problem; no partial document is returned.
pub fn parse(text: &str) -> CronbookResult<Document> {
    let mut doc = Document::new();
    let mut block: Option<OpenBlock> = None;

    for (i, line) in split_lines(text).enumerate() {
        let line_no = i + 1;
        let kind = LineKind::classify(line);

        if let LineKind::Header(title) = kind {
            if let Some(open) = block.take() {
                doc.add_job(open.close()?, false)?;
            }
            if title.is_empty() {
                return Err(CronbookError::parse(line_no, "job header has an empty title"));
            }
            if doc.contains(title) {
                return Err(CronbookError::parse(
                    line_no,
                    format!("duplicate job title '{}'", title),
                ));
            }
            block = Some(OpenBlock::new(title, line_no));
            continue;
        }

        let Some(open) = block.as_mut() else {
            doc.push_unparsed(line);
            continue;
        };

        match kind {
            LineKind::Blank | LineKind::Comment => {
                if let Some(open) = block.take() {
                    doc.add_job(open.close()?, false)?;
                }
                doc.push_unparsed(line);
            }
            LineKind::Assignment(var) => open.assign(var, line_no)?,
            LineKind::Text => {
                let entry = ScheduleEntry::parse(line)
                    .map_err(|message| CronbookError::parse(line_no, message))?;
                open.schedules.push(entry);
            }
            LineKind::Header(_) => unreachable!("headers are handled above"),
        }
    }

    if let Some(open) = block.take() {
        doc.add_job(open.close()?, false)?;
    }

    Ok(doc)
}

/// Parse a crontab file.
pub fn parse_file(path: &Path) -> CronbookResult<Document> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Split text into lines on `\n`, dropping trailing `\r`s from each line.
///
/// A final terminator does not produce an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    (!text.is_empty())
        .then(|| body.split('\n'))
        .into_iter()
        .flatten()
        .map(|line| line.trim_end_matches('\r'))
}
