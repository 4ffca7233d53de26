use anyhow::Result;

use cronbook::application::EnterOptions;
use cronbook::ScheduleEntry;

use crate::ui::error::with_parse_source;
use crate::ui::views::sync::{render_sync_report, sync_report_event};

use super::Session;

pub fn cmd_enter(
    session: &Session,
    title: &str,
    schedule: &str,
    options: &EnterOptions,
) -> Result<()> {
    let report = session
        .sync
        .enter(title, schedule, options)
        .map_err(|e| {
            // A bad cron line is reported against the argument, not the crontab
            if ScheduleEntry::parse(schedule).is_err() {
                with_parse_source(e, "schedule argument", || Some(schedule.to_string()))
            } else {
                session.crontab_error(e)
            }
        })?;

    if session.ui.json {
        crate::ui::json::emit(sync_report_event("enter", &report))?;
    } else {
        print!(
            "{}",
            render_sync_report(&report, session.ui.color, session.ui.unicode)
        );
    }
    Ok(())
}
