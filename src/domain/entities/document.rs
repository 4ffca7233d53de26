//! Document entity - an entire titled crontab
//!
//! A document is the ordered sequence of job blocks and verbatim lines that
//! make up one crontab. Order is significant and survives every mutation
//! except for the entry being added (appended) or removed.
//!
//! This is a pure data structure; reading and writing crontabs is handled by
//! `CrontabStore` implementations.

use std::collections::HashMap;

use serde::Serialize;

use super::environment::Environment;
use super::job::Job;
use super::schedule::ScheduleEntry;
use crate::domain::value_objects::LineKind;
use crate::error::{CronbookError, CronbookResult};

/// One top-level item of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Job(Job),
    /// A line outside any job block, kept byte for byte
    Unparsed { line: String },
}

impl Entry {
    pub fn as_job(&self) -> Option<&Job> {
        match self {
            Entry::Job(job) => Some(job),
            Entry::Unparsed { .. } => None,
        }
    }
}

/// What `add_job` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// New title, appended at the end
    Added,
    /// Existing title, content replaced at its original position
    Replaced,
}

/// Ordered crontab document with title lookup
#[derive(Debug, Clone, Default)]
pub struct Document {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Document {
    /// Empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from entries.
    ///
    /// Rejects duplicate titles, and verbatim lines that would read back as
    /// part of a job block.
    pub fn from_entries(entries: Vec<Entry>) -> CronbookResult<Self> {
        let mut doc = Self::new();
        for entry in entries {
            match entry {
                Entry::Job(job) => {
                    doc.add_job(job, false)?;
                }
                Entry::Unparsed { line } => {
                    let after_job = matches!(doc.entries.last(), Some(Entry::Job(_)));
                    check_unparsed(&line, after_job)?;
                    doc.push_unparsed(line);
                }
            }
        }
        Ok(doc)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Jobs in document order
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.entries.iter().filter_map(Entry::as_job)
    }

    /// Titles in document order (not sorted)
    pub fn titles(&self) -> Vec<&str> {
        self.jobs().map(Job::title).collect()
    }

    pub fn job_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// Look up a job by title.
    pub fn job(&self, title: &str) -> CronbookResult<&Job> {
        self.index
            .get(title)
            .and_then(|&i| self.entries[i].as_job())
            .ok_or_else(|| not_found(title))
    }

    /// Add a job.
    ///
    /// A new title is appended. An existing title fails with
    /// `TitleCollision` unless `overwrite` is set, in which case the job is
    /// replaced where it stands.
    pub fn add_job(&mut self, job: Job, overwrite: bool) -> CronbookResult<AddOutcome> {
        match self.index.get(job.title()) {
            Some(&i) if overwrite => {
                self.entries[i] = Entry::Job(job);
                Ok(AddOutcome::Replaced)
            }
            Some(_) => Err(CronbookError::TitleCollision {
                title: job.title().to_string(),
            }),
            None => {
                self.index.insert(job.title().to_string(), self.entries.len());
                self.entries.push(Entry::Job(job));
                Ok(AddOutcome::Added)
            }
        }
    }

    /// Remove a job, keeping every other entry in its relative order.
    pub fn remove_job(&mut self, title: &str) -> CronbookResult<Job> {
        let i = *self.index.get(title).ok_or_else(|| not_found(title))?;
        let removed = self.entries.remove(i);
        self.reindex();
        match removed {
            Entry::Job(job) => Ok(job),
            Entry::Unparsed { .. } => unreachable!("index only points at jobs"),
        }
    }

    /// Build a single-schedule job from a cron line and add it without
    /// overwriting.
    pub fn enter_job(
        &mut self,
        title: &str,
        schedule_line: &str,
        environment: Environment,
    ) -> CronbookResult<()> {
        let job = build_entered_job(title, schedule_line, environment)?;
        self.add_job(job, false)?;
        Ok(())
    }

    /// Rename a job in place.
    pub fn rename_job(&mut self, title: &str, new_title: &str) -> CronbookResult<()> {
        if title == new_title {
            self.job(title)?;
            return Ok(());
        }
        if self.contains(new_title) {
            return Err(CronbookError::TitleCollision {
                title: new_title.to_string(),
            });
        }
        let i = *self.index.get(title).ok_or_else(|| not_found(title))?;
        let job = self.job(title)?.clone().retitled(new_title)?;
        self.entries[i] = Entry::Job(job);
        self.index.remove(title);
        self.index.insert(new_title.to_string(), i);
        Ok(())
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub(crate) fn push_unparsed(&mut self, line: impl Into<String>) {
        self.entries.push(Entry::Unparsed { line: line.into() });
    }

    fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_job().map(|job| (job.title().to_string(), i)))
            .collect();
    }
}

/// Build the job `enter_job` would add, without touching a document.
pub fn build_entered_job(
    title: &str,
    schedule_line: &str,
    environment: Environment,
) -> CronbookResult<Job> {
    let schedule = ScheduleEntry::parse(schedule_line).map_err(|message| CronbookError::Parse {
        line: 1,
        message,
    })?;
    Job::new(title, environment, vec![schedule])
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Document {}

impl Serialize for Document {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

fn check_unparsed(line: &str, after_job: bool) -> CronbookResult<()> {
    if line.contains('\n') || line.ends_with('\r') {
        return Err(CronbookError::InvalidRequest(
            "verbatim line must not contain a line terminator".to_string(),
        ));
    }
    let kind = LineKind::classify(line);
    if matches!(kind, LineKind::Header(_)) {
        return Err(CronbookError::InvalidRequest(format!(
            "verbatim line '{}' would read back as a job header",
            line
        )));
    }
    if after_job && !kind.closes_block() {
        return Err(CronbookError::InvalidRequest(format!(
            "verbatim line '{}' would read back as part of the preceding job",
            line
        )));
    }
    Ok(())
}

fn not_found(title: &str) -> CronbookError {
    CronbookError::TitleNotFound {
        title: title.to_string(),
    }
}
