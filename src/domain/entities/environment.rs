//! Per-job environment assignments
//!
//! Cron reads `NAME=VALUE` lines as environment settings for the lines that
//! follow. Values are stored exactly as written (quotes included) so that a
//! crontab reads back the way it was authored.

use std::collections::HashMap;

use serde::Serialize;

/// Well-known variables understood by cron implementations
pub const MAILTO: &str = "MAILTO";
pub const MAILFROM: &str = "MAILFROM";
pub const PATH: &str = "PATH";
pub const SHELL: &str = "SHELL";
pub const CRON_TZ: &str = "CRON_TZ";

/// One `NAME=VALUE` assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVar {
    name: String,
    value: String,
}

impl EnvVar {
    /// Create an assignment from a raw value, as it would appear in a crontab.
    pub fn new(name: impl Into<String>, raw_value: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let value = raw_value.into();
        if !is_valid_name(&name) {
            return Err(format!("invalid environment variable name '{}'", name));
        }
        if value.contains(['\n', '\r']) {
            return Err(format!("value of {} must be a single line", name));
        }
        if value.trim() != value {
            return Err(format!(
                "value of {} has surrounding whitespace; quote it instead",
                name
            ));
        }
        Ok(Self { name, value })
    }

    /// Create an assignment from a plain value, quoting it when cron would
    /// otherwise lose part of it.
    pub fn quoted(name: impl Into<String>, value: &str) -> Result<Self, String> {
        let needs_quotes = value.is_empty()
            || value.trim() != value
            || value.starts_with(['"', '\''])
            || value.contains(char::is_whitespace);
        if !needs_quotes {
            return Self::new(name, value);
        }
        let raw = if value.contains('"') {
            format!("'{}'", value)
        } else {
            format!("\"{}\"", value)
        };
        Self::new(name, raw)
    }

    /// Parse an assignment line. Returns `None` when the line does not have
    /// the `NAME=VALUE` shape.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        let (name, value) = trimmed.split_once('=')?;
        let name = name.trim_end();
        if !is_valid_name(name) {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            value: value.trim_start().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value as written, including any quotes
    pub fn raw_value(&self) -> &str {
        &self.value
    }

    /// Value with one pair of matching surrounding quotes removed
    pub fn value(&self) -> &str {
        let v = self.value.as_str();
        for quote in ['"', '\''] {
            if v.len() >= 2 && v.starts_with(quote) && v.ends_with(quote) {
                return &v[1..v.len() - 1];
            }
        }
        v
    }
}

impl std::fmt::Display for EnvVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Ordered set of assignments, unique by name
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Environment {
    vars: Vec<EnvVar>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an assignment. Fails if the name is already assigned.
    pub fn push(&mut self, var: EnvVar) -> Result<(), String> {
        if self.index.contains_key(var.name()) {
            return Err(format!("{} is assigned more than once", var.name()));
        }
        self.index.insert(var.name.clone(), self.vars.len());
        self.vars.push(var);
        Ok(())
    }

    /// Set a variable, replacing the value in place if it already exists.
    pub fn set(&mut self, var: EnvVar) {
        match self.index.get(var.name()) {
            Some(&i) => self.vars[i] = var,
            None => {
                self.index.insert(var.name.clone(), self.vars.len());
                self.vars.push(var);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&EnvVar> {
        self.index.get(name).map(|&i| &self.vars[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnvVar> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        self.vars == other.vars
    }
}

impl Eq for Environment {}

impl<'a> IntoIterator for &'a Environment {
    type Item = &'a EnvVar;
    type IntoIter = std::slice::Iter<'a, EnvVar>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
