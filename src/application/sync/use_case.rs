//! Crontab Sync Use Case
//!
//! Orchestrates read, parse, mutate, serialize and write-back.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::entities::{build_entered_job, AddOutcome, Document, Job};
use crate::domain::ports::CrontabStore;
use crate::error::{CronbookError, CronbookResult};
use crate::infrastructure::fs::LocalFs;
use crate::parser::{parse, parse_file};
use crate::serializer::serialize;

use super::options::{AddOptions, EnterOptions, RemoveOptions};
use super::report::{Change, SaveReport, SyncReport};

/// Sync use case - applies one mutation per call to a crontab store
pub struct CrontabSync<S>
where
    S: CrontabStore,
{
    store: S,
    fs: LocalFs,
}

impl<S> CrontabSync<S>
where
    S: CrontabStore,
{
    /// Create a new sync use case
    pub fn new(store: S) -> Self {
        Self {
            store,
            fs: LocalFs::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read and parse the current crontab
    pub fn load(&self) -> CronbookResult<Document> {
        let text = self.store.read()?;
        let doc = parse(&text)?;
        debug!(target = %self.store.describe(), jobs = doc.job_count(), "loaded crontab");
        Ok(doc)
    }

    /// Merge the jobs of a fragment file into the crontab
    pub fn add_file(&self, path: &Path, options: &AddOptions) -> CronbookResult<SyncReport> {
        debug!(path = %path.display(), "reading fragment");
        let fragment = parse_file(path)?;
        self.add_fragment(&fragment, options)
    }

    /// Merge the jobs of an already parsed fragment into the crontab.
    ///
    /// Lines of the fragment outside job blocks are not carried over. Either
    /// every selected job is merged or none is.
    pub fn add_fragment(
        &self,
        fragment: &Document,
        options: &AddOptions,
    ) -> CronbookResult<SyncReport> {
        let jobs = select_jobs(fragment, options)?;
        self.transact(options.dry_run, |doc| {
            let mut changes = Vec::with_capacity(jobs.len());
            for job in jobs {
                let title = job.title().to_string();
                changes.push(match doc.add_job(job, options.overwrite)? {
                    AddOutcome::Added => Change::Added { title },
                    AddOutcome::Replaced => Change::Replaced { title },
                });
            }
            Ok(changes)
        })
    }

    /// Add a job with a single schedule line
    pub fn enter(
        &self,
        title: &str,
        schedule_line: &str,
        options: &EnterOptions,
    ) -> CronbookResult<SyncReport> {
        let job = build_entered_job(title, schedule_line, options.environment()?)?;
        self.transact(options.dry_run, |doc| {
            let title = job.title().to_string();
            let change = match doc.add_job(job, options.overwrite)? {
                AddOutcome::Added => Change::Added { title },
                AddOutcome::Replaced => Change::Replaced { title },
            };
            Ok(vec![change])
        })
    }

    /// Remove jobs by title in one transaction
    pub fn remove(&self, titles: &[String], options: &RemoveOptions) -> CronbookResult<SyncReport> {
        if titles.is_empty() {
            return Err(CronbookError::InvalidRequest(
                "no job titles given".to_string(),
            ));
        }
        let duplicates = duplicates(titles);
        if !duplicates.is_empty() {
            return Err(CronbookError::InvalidRequest(format!(
                "job titles given more than once: {}",
                quoted_list(&duplicates)
            )));
        }

        self.transact(options.dry_run, |doc| {
            let mut changes = Vec::with_capacity(titles.len());
            for title in titles {
                if options.ignore_missing && !doc.contains(title) {
                    debug!(title = %title, "job not present, skipping");
                    changes.push(Change::Skipped {
                        title: title.clone(),
                    });
                    continue;
                }
                doc.remove_job(title)?;
                changes.push(Change::Removed {
                    title: title.clone(),
                });
            }
            Ok(changes)
        })
    }

    /// Replace the crontab with empty text.
    ///
    /// The current content does not have to parse.
    pub fn clear(&self, dry_run: bool) -> CronbookResult<SyncReport> {
        let before = self.store.read()?;
        let jobs = parse(&before).map(|doc| doc.job_count()).unwrap_or(0);
        self.finish(before, String::new(), vec![Change::Cleared { jobs }], dry_run)
    }

    /// Write the current crontab, as parsed and re-serialized, to a file.
    pub fn save(&self, path: &Path) -> CronbookResult<SaveReport> {
        let doc = self.load()?;
        let text = serialize(&doc);
        self.fs.write_atomic(path, &text)?;
        info!(path = %path.display(), jobs = doc.job_count(), "saved crontab");
        Ok(SaveReport {
            path: path.to_path_buf(),
            jobs: doc.job_count(),
            bytes: text.len(),
        })
    }

    fn transact<F>(&self, dry_run: bool, mutate: F) -> CronbookResult<SyncReport>
    where
        F: FnOnce(&mut Document) -> CronbookResult<Vec<Change>>,
    {
        let before = self.store.read()?;
        let mut doc = parse(&before)?;
        let changes = mutate(&mut doc)?;
        let after = serialize(&doc);
        self.finish(before, after, changes, dry_run)
    }

    fn finish(
        &self,
        before: String,
        after: String,
        changes: Vec<Change>,
        dry_run: bool,
    ) -> CronbookResult<SyncReport> {
        let target = self.store.describe();
        if dry_run {
            debug!(target = %target, "dry run, crontab left untouched");
        } else {
            self.store.write(&after)?;
            info!(target = %target, changes = changes.len(), "crontab updated");
        }
        Ok(SyncReport {
            target,
            before,
            after,
            changes,
            written: !dry_run,
        })
    }
}

/// Pick the fragment jobs to merge, applying `--only` and `--title`.
fn select_jobs(fragment: &Document, options: &AddOptions) -> CronbookResult<Vec<Job>> {
    let mut jobs: Vec<Job> = if options.only.is_empty() {
        fragment.jobs().cloned().collect()
    } else {
        let duplicates = duplicates(&options.only);
        if !duplicates.is_empty() {
            return Err(CronbookError::InvalidRequest(format!(
                "job titles selected more than once: {}",
                quoted_list(&duplicates)
            )));
        }
        options
            .only
            .iter()
            .map(|title| fragment.job(title).cloned())
            .collect::<CronbookResult<_>>()?
    };

    if jobs.is_empty() {
        return Err(CronbookError::InvalidRequest(
            "fragment contains no jobs".to_string(),
        ));
    }

    if let Some(title) = &options.title {
        if jobs.len() != 1 {
            return Err(CronbookError::InvalidRequest(format!(
                "a title can only be given for a single job, but {} jobs were selected",
                jobs.len()
            )));
        }
        let job = jobs.remove(0);
        jobs.push(job.retitled(title.as_str())?);
    }

    Ok(jobs)
}

fn duplicates(titles: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    titles
        .iter()
        .map(String::as_str)
        .filter(|t| !seen.insert(*t) && reported.insert(*t))
        .collect()
}

fn quoted_list(titles: &[&str]) -> String {
    titles
        .iter()
        .map(|t| format!("'{}'", t))
        .collect::<Vec<_>>()
        .join(", ")
}
