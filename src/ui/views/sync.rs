//! Output of mutating commands

use cronbook::application::{Change, SaveReport};
use cronbook::SyncReport;

use crate::ui::components::diff::render_crontab_diff;
use crate::ui::text::{ColoredText, Icon};

pub fn render_sync_report(
    report: &SyncReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if !report.written {
        if report.is_unchanged() {
            out.push_str(&ColoredText::dim("No changes to the crontab.").render(supports_color));
            out.push('\n');
        } else {
            out.push_str(&render_crontab_diff(
                &report.target,
                &report.before,
                &report.after,
                supports_color,
            ));
        }
        out.push('\n');
    }

    for change in &report.changes {
        let icon = match change {
            Change::Skipped { .. } => Icon::Skipped,
            _ => Icon::Success,
        };
        out.push_str(&format!(
            "{} {}\n",
            icon.colored(supports_color, supports_unicode),
            change
        ));
    }

    if !report.written {
        out.push_str(
            &ColoredText::warning(format!("Dry run: {} was not modified.", report.target))
                .render(supports_color),
        );
        out.push('\n');
    }

    out
}

pub fn sync_report_event(command: &str, report: &SyncReport) -> serde_json::Value {
    let mut event = serde_json::json!({
        "event": "sync",
        "command": command,
        "target": report.target,
        "dry_run": !report.written,
        "changes": report.changes,
    });
    if !report.written {
        event["crontab"] = report.after.clone().into();
    }
    event
}

pub fn render_save_report(
    report: &SaveReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} saved {} jobs to {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        report.jobs,
        report.path.display()
    )
}
