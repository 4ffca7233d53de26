use anyhow::Result;

use cronbook::application::RemoveOptions;

use crate::ui::views::sync::{render_sync_report, sync_report_event};

use super::Session;

pub fn cmd_remove(session: &Session, titles: &[String], options: &RemoveOptions) -> Result<()> {
    let report = session
        .sync
        .remove(titles, options)
        .map_err(|e| session.crontab_error(e))?;

    if session.ui.json {
        crate::ui::json::emit(sync_report_event("remove", &report))?;
    } else {
        print!(
            "{}",
            render_sync_report(&report, session.ui.color, session.ui.unicode)
        );
    }
    Ok(())
}
