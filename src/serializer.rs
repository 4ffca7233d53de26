//! Crontab serializer
//!
//! Structural inverse of the parser: verbatim lines are written back
//! byte for byte, jobs are written as header, assignments, schedule lines.

use crate::domain::entities::{Document, Entry, Job};

/// Render a document as crontab text.
///
/// Every line ends with `\n`; an empty document renders as "".
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    for entry in doc.entries() {
        match entry {
            Entry::Job(job) => write_job(&mut out, job),
            Entry::Unparsed { line } => push_line(&mut out, line),
        }
    }
    out
}

/// Render a single job block.
pub fn render_job(job: &Job) -> String {
    let mut out = String::new();
    write_job(&mut out, job);
    out
}

/// Render only the schedule lines of a job.
pub fn render_schedules(job: &Job) -> String {
    let mut out = String::new();
    for schedule in job.schedules() {
        push_line(&mut out, &schedule.to_string());
    }
    out
}

fn write_job(out: &mut String, job: &Job) {
    push_line(out, &job.header());
    for var in job.environment() {
        push_line(out, &var.to_string());
    }
    for schedule in job.schedules() {
        push_line(out, &schedule.to_string());
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
