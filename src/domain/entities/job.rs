//! Job entity - a titled group of schedule entries sharing an environment

use serde::Serialize;

use super::environment::Environment;
use super::schedule::ScheduleEntry;
use crate::error::{CronbookError, CronbookResult};

/// A titled job block
///
/// Always holds at least one schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    title: String,
    environment: Environment,
    schedules: Vec<ScheduleEntry>,
}

impl Job {
    pub fn new(
        title: impl Into<String>,
        environment: Environment,
        schedules: Vec<ScheduleEntry>,
    ) -> CronbookResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        if schedules.is_empty() {
            return Err(CronbookError::InvalidRequest(format!(
                "job '{}' needs at least one schedule entry",
                title
            )));
        }
        Ok(Self {
            title,
            environment,
            schedules,
        })
    }

    /// Convenience constructor for the common single-line job.
    pub fn single(title: impl Into<String>, schedule: ScheduleEntry) -> CronbookResult<Self> {
        Self::new(title, Environment::new(), vec![schedule])
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn schedules(&self) -> &[ScheduleEntry] {
        &self.schedules
    }

    /// Same job under a different title.
    pub fn retitled(mut self, title: impl Into<String>) -> CronbookResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(self)
    }

    /// Section header line for this job (`# [title]`)
    pub fn header(&self) -> String {
        format!("# [{}]", self.title)
    }
}

/// Check that a title can be written into a `# [title]` header and read back
/// unchanged.
pub fn validate_title(title: &str) -> CronbookResult<()> {
    let invalid = |reason: &str| CronbookError::InvalidTitle {
        title: title.to_string(),
        reason: reason.to_string(),
    };
    if title.is_empty() {
        return Err(invalid("title is empty"));
    }
    if title.contains(['\n', '\r']) {
        return Err(invalid("title must be a single line"));
    }
    Ok(())
}
