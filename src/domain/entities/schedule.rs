//! Schedule entry - one cron line: timing plus command
//!
//! Timing fields are opaque tokens. They are checked only for the shape
//! needed to write them back out unambiguously (non-empty, no whitespace),
//! never for cron semantics.

use serde::Serialize;

use crate::domain::entities::EnvVar;
use crate::domain::value_objects::Shorthand;

/// Number of timing fields in an explicit schedule
pub const FIELD_COUNT: usize = 5;

/// Names of the five timing fields, in order
pub const FIELD_NAMES: [&str; FIELD_COUNT] =
    ["minute", "hour", "day-of-month", "month", "day-of-week"];

/// When a schedule entry fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    /// minute, hour, day-of-month, month, day-of-week
    Fields([String; FIELD_COUNT]),
    /// `@daily`, `@reboot`, ...
    Shorthand(Shorthand),
}

impl std::fmt::Display for Timing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timing::Fields(fields) => f.write_str(&fields.join(" ")),
            Timing::Shorthand(sh) => write!(f, "{}", sh),
        }
    }
}

/// A single schedule line of a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    timing: Timing,
    command: String,
}

impl ScheduleEntry {
    /// Build an entry from five explicit timing fields.
    ///
    /// Rejected when the written line would read back as a `NAME=VALUE`
    /// assignment, e.g. `PATH =x * * * run`.
    pub fn from_fields(
        fields: [&str; FIELD_COUNT],
        command: impl Into<String>,
    ) -> Result<Self, String> {
        for (name, field) in FIELD_NAMES.iter().zip(fields.iter()) {
            check_field(name, field)?;
        }
        let command = command.into();
        check_command(&command)?;
        let entry = Self {
            timing: Timing::Fields(fields.map(str::to_string)),
            command,
        };
        if EnvVar::parse(&entry.to_string()).is_some() {
            return Err(format!(
                "'{}' would be read back as an environment assignment",
                entry
            ));
        }
        Ok(entry)
    }

    /// Build an entry from a shorthand keyword.
    pub fn from_shorthand(
        shorthand: Shorthand,
        command: impl Into<String>,
    ) -> Result<Self, String> {
        let command = command.into();
        check_command(&command)?;
        Ok(Self {
            timing: Timing::Shorthand(shorthand),
            command,
        })
    }

    /// Parse a schedule line: five whitespace-delimited fields (or one
    /// `@keyword`) followed by the command.
    ///
    /// Everything after the whitespace that ends the timing is the command,
    /// kept byte for byte.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut rest = line.trim_start();

        if rest.starts_with('@') {
            let (keyword, tail) = split_token(rest);
            let shorthand: Shorthand = keyword.parse()?;
            let command = tail.trim_start();
            if command.is_empty() {
                return Err(format!("missing command after '{}'", keyword));
            }
            return Self::from_shorthand(shorthand, command);
        }

        let mut fields: [&str; FIELD_COUNT] = [""; FIELD_COUNT];
        for (i, slot) in fields.iter_mut().enumerate() {
            let (token, tail) = split_token(rest);
            if token.is_empty() {
                return Err(format!(
                    "expected {} schedule fields before the command, found {}",
                    FIELD_COUNT, i
                ));
            }
            *slot = token;
            rest = tail.trim_start();
        }

        if rest.is_empty() {
            return Err("missing command after the schedule fields".to_string());
        }

        Self::from_fields(fields, rest)
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// The five explicit fields, or `None` for shorthand schedules
    pub fn fields(&self) -> Option<&[String; FIELD_COUNT]> {
        match &self.timing {
            Timing::Fields(fields) => Some(fields),
            Timing::Shorthand(_) => None,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl std::fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.timing, self.command)
    }
}

/// Split off the first whitespace-delimited token.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}

fn check_field(name: &str, field: &str) -> Result<(), String> {
    if field.is_empty() {
        return Err(format!("{} field is empty", name));
    }
    if field.chars().any(char::is_whitespace) {
        return Err(format!("{} field '{}' contains whitespace", name, field));
    }
    if field.starts_with('#') || field.starts_with('@') {
        return Err(format!("{} field '{}' cannot start with '{}'", name, field, &field[..1]));
    }
    Ok(())
}

fn check_command(command: &str) -> Result<(), String> {
    if command.is_empty() {
        return Err("command is empty".to_string());
    }
    if command.starts_with(char::is_whitespace) {
        return Err("command cannot start with whitespace".to_string());
    }
    if command.contains(['\n', '\r']) {
        return Err("command must be a single line".to_string());
    }
    Ok(())
}
