//! Crontab diff for dry runs
//!
//! Unified hunks with two lines of context. Each body line carries one line
//! number: the old one for removals, the new one otherwise.

use crossterm::style::Stylize;
use similar::{ChangeTag, DiffOp, TextDiff};

use crate::ui::theme;

const CONTEXT_LINES: usize = 2;

pub fn render_crontab_diff(name: &str, before: &str, after: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(before, after);
    let width = before.lines().count().max(after.lines().count()).max(1).to_string().len();
    let paint = |text: String, color| {
        if supports_color {
            format!("{}", text.with(color))
        } else {
            text
        }
    };

    let mut out = String::new();
    out.push_str(&paint(format!("--- {} (current)", name), theme::colors::INFO));
    out.push('\n');
    out.push_str(&paint(format!("+++ {} (new)", name), theme::colors::INFO));
    out.push('\n');

    for group in diff.grouped_ops(CONTEXT_LINES) {
        out.push_str(&paint(hunk_header(&group), theme::colors::INFO));
        out.push('\n');
        for op in &group {
            for change in diff.iter_changes(op) {
                let (number, sign, color) = match change.tag() {
                    ChangeTag::Delete => (change.old_index(), '-', theme::colors::ERROR),
                    ChangeTag::Insert => (change.new_index(), '+', theme::colors::SUCCESS),
                    ChangeTag::Equal => (change.new_index(), ' ', theme::colors::DIM),
                };
                let number = number.map_or(String::new(), |i| (i + 1).to_string());
                let value = change.value().trim_end_matches('\n');
                out.push_str(&paint(format!("{number:>width$} {sign} {value}"), color));
                out.push('\n');
            }
        }
    }

    out
}

/// `@@ -start,len +start,len @@`, with empty sides starting at 0
fn hunk_header(group: &[DiffOp]) -> String {
    let (Some(first), Some(last)) = (group.first(), group.last()) else {
        return "@@ @@".to_string();
    };
    let old = first.old_range().start..last.old_range().end;
    let new = first.new_range().start..last.new_range().end;
    let side = |range: std::ops::Range<usize>| {
        let len = range.len();
        let start = if len == 0 { range.start } else { range.start + 1 };
        format!("{},{}", start, len)
    };
    format!("@@ -{} +{} @@", side(old), side(new))
}
