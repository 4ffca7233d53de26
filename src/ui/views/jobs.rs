//! Read-only job views (`view`, `list`, `jobs`)
//!
//! Output is plain crontab text so it can be piped back into `add`.

use cronbook::serializer::{render_job, render_schedules};
use cronbook::{Document, Job};

/// One job: its schedule lines, or the whole block with `full`
pub fn render_job_view(job: &Job, full: bool) -> String {
    if full {
        render_job(job)
    } else {
        render_schedules(job)
    }
}

/// Every job, separated by blank lines
pub fn render_job_list(doc: &Document, full: bool) -> String {
    doc.jobs()
        .map(|job| {
            if full {
                render_job(job)
            } else {
                format!("{}\n{}", job.header(), render_schedules(job))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_titles(doc: &Document) -> String {
    doc.titles()
        .into_iter()
        .map(|title| format!("{}\n", title))
        .collect()
}
