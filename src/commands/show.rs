//! Read-only commands: `view`, `list`, `jobs`

use anyhow::Result;

use cronbook::Document;

use crate::ui::views::jobs::{render_job_list, render_job_view, render_titles};

use super::Session;

fn load(session: &Session) -> Result<Document> {
    session.sync.load().map_err(|e| session.crontab_error(e))
}

pub fn cmd_view(session: &Session, title: &str, full: bool) -> Result<()> {
    let doc = load(session)?;
    let job = doc.job(title)?;

    if session.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "job",
            "job": job,
        }))?;
    } else {
        print!("{}", render_job_view(job, full));
    }
    Ok(())
}

pub fn cmd_list(session: &Session, full: bool) -> Result<()> {
    let doc = load(session)?;

    if session.ui.json {
        let jobs: Vec<_> = doc.jobs().collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "jobs",
            "jobs": jobs,
        }))?;
    } else {
        print!("{}", render_job_list(&doc, full));
    }
    Ok(())
}

pub fn cmd_jobs(session: &Session) -> Result<()> {
    let doc = load(session)?;

    if session.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "titles",
            "titles": doc.titles(),
        }))?;
    } else {
        print!("{}", render_titles(&doc));
    }
    Ok(())
}
