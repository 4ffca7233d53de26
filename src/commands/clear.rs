use anyhow::Result;

use crate::ui::views::sync::{render_sync_report, sync_report_event};

use super::Session;

pub fn cmd_clear(session: &Session, dry_run: bool) -> Result<()> {
    let report = session.sync.clear(dry_run)?;

    if session.ui.json {
        crate::ui::json::emit(sync_report_event("clear", &report))?;
    } else {
        print!(
            "{}",
            render_sync_report(&report, session.ui.color, session.ui.unicode)
        );
    }
    Ok(())
}
