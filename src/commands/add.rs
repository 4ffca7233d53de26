//! Add command handler
//!
//! Merges the jobs of a fragment file into the crontab.

use std::path::Path;

use anyhow::Result;

use cronbook::application::AddOptions;
use cronbook::parse_file;

use crate::ui::error::with_parse_source;
use crate::ui::views::sync::{render_sync_report, sync_report_event};

use super::Session;

pub fn cmd_add(session: &Session, fragment: &Path, options: &AddOptions) -> Result<()> {
    let doc = parse_file(fragment).map_err(|e| {
        with_parse_source(e, fragment.display().to_string(), || {
            std::fs::read_to_string(fragment).ok()
        })
    })?;

    let report = session
        .sync
        .add_fragment(&doc, options)
        .map_err(|e| session.crontab_error(e))?;

    if session.ui.json {
        crate::ui::json::emit(sync_report_event("add", &report))?;
    } else {
        print!(
            "{}",
            render_sync_report(&report, session.ui.color, session.ui.unicode)
        );
    }
    Ok(())
}
