use std::path::Path;

use anyhow::Result;

use cronbook::infrastructure::fs::expand_home;

use crate::ui::views::sync::render_save_report;

use super::Session;

pub fn cmd_save(session: &Session, path: &Path) -> Result<()> {
    let report = session
        .sync
        .save(&expand_home(path))
        .map_err(|e| session.crontab_error(e))?;

    if session.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "saved",
            "path": report.path.display().to_string(),
            "jobs": report.jobs,
            "bytes": report.bytes,
        }))?;
    } else {
        print!(
            "{}",
            render_save_report(&report, session.ui.color, session.ui.unicode)
        );
    }
    Ok(())
}
