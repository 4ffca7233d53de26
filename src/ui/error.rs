//! Error rendering
//!
//! Parse errors are shown with the offending line and a little context
//! when the command attached the text that failed to parse.

use std::fmt;

use cronbook::CronbookError;

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, Stream};
use crate::ui::text::{ColoredText, Icon};

/// Text that failed to parse, attached to the error as anyhow context
#[derive(Debug, Clone)]
pub struct ParseSource {
    pub origin: String,
    pub text: String,
}

impl fmt::Display for ParseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}", self.origin)
    }
}

/// Attach the parsed text to parse errors; other errors pass through.
pub fn with_parse_source(
    err: CronbookError,
    origin: impl Into<String>,
    text: impl FnOnce() -> Option<String>,
) -> anyhow::Error {
    if !matches!(err, CronbookError::Parse { .. }) {
        return err.into();
    }
    match text() {
        Some(text) => anyhow::Error::new(err).context(ParseSource {
            origin: origin.into(),
            text,
        }),
        None => err.into(),
    }
}

/// Exit status for an error that reached `main`
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CronbookError>()
        .map(CronbookError::exit_code)
        .unwrap_or(1)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let message = match err.downcast_ref::<CronbookError>() {
        Some(cronbook) => cronbook.to_string(),
        None => format!("{:#}", err),
    };

    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(message).bold().render(supports_color)
    );

    let line = err.downcast_ref::<CronbookError>().and_then(CronbookError::line);
    if let (Some(source), Some(line)) = (err.downcast_ref::<ParseSource>(), line) {
        out.push_str(&format!("  in {}\n", source.origin));
        for (no, text, highlight) in code_context(&source.text, line, 2, 1) {
            let prefix = if highlight {
                Icon::Pointer.colored(supports_color, supports_unicode)
            } else {
                " ".to_string()
            };
            let text = if highlight {
                ColoredText::error(text).render(supports_color)
            } else {
                ColoredText::dim(text).render(supports_color)
            };
            out.push_str(&format!("  {prefix} {:>4} | {}\n", no, text));
        }
    }

    out
}

/// Errors go to stderr, so color is decided for stderr; `--color` still wins.
pub fn print_error(err: &anyhow::Error, json: bool, color: Option<ColorWhen>) {
    if json {
        let mut event = serde_json::json!({
            "event": "error",
            "message": match err.downcast_ref::<CronbookError>() {
                Some(cronbook) => cronbook.to_string(),
                None => format!("{:#}", err),
            },
            "exit_code": exit_code(err),
        });
        if let Some(cronbook) = err.downcast_ref::<CronbookError>() {
            event["kind"] = cronbook.kind().into();
            if let Some(line) = cronbook.line() {
                event["line"] = line.into();
            }
        }
        if let Some(source) = err.downcast_ref::<ParseSource>() {
            event["origin"] = source.origin.clone().into();
        }
        let _ = crate::ui::json::emit(event);
        return;
    }

    let caps = detect_capabilities(Stream::Stderr);
    let color = match color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => caps.supports_color,
    };
    eprint!("{}", format_error(err, color, caps.supports_unicode));
}

fn code_context(
    text: &str,
    line: usize,
    before: usize,
    after: usize,
) -> Vec<(usize, String, bool)> {
    let lines: Vec<&str> = text.lines().collect();
    if line == 0 || line > lines.len() {
        return Vec::new();
    }

    let start = line.saturating_sub(before).saturating_sub(1);
    let end = (line + after).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let line_no = start + idx + 1;
            (line_no, (*text).to_string(), line_no == line)
        })
        .collect()
}
