//! System crontab via the `crontab` binary
//!
//! Reads with `crontab -l` and replaces with `crontab -`, feeding the new
//! table on stdin. There is no locking between the two calls; a concurrent
//! edit made by something else in between is overwritten.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::ports::CrontabStore;
use crate::error::{CronbookError, CronbookResult};

/// Default binary used to reach the system crontab
pub const DEFAULT_CRONTAB_COMMAND: &str = "crontab";

/// The user's crontab, managed through the `crontab` binary
#[derive(Debug, Clone)]
pub struct SystemCrontab {
    program: String,
    base_args: Vec<String>,
    user: Option<String>,
}

impl Default for SystemCrontab {
    fn default() -> Self {
        Self::new(DEFAULT_CRONTAB_COMMAND)
    }
}

impl SystemCrontab {
    /// `command` is the binary, optionally followed by extra arguments
    /// (split on whitespace).
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .unwrap_or_else(|| DEFAULT_CRONTAB_COMMAND.to_string());
        Self {
            program,
            base_args: parts.collect(),
            user: None,
        }
    }

    /// Manage another user's crontab (`crontab -u <user>`).
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    fn args(&self, op: &str) -> Vec<String> {
        let mut args = self.base_args.clone();
        if let Some(user) = &self.user {
            args.push("-u".to_string());
            args.push(user.clone());
        }
        args.push(op.to_string());
        args
    }

    fn display_command(&self, op: &str) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args(op));
        parts.join(" ")
    }
}

impl CrontabStore for SystemCrontab {
    fn read(&self) -> CronbookResult<String> {
        let shown = self.display_command("-l");
        debug!(command = %shown, "reading crontab");

        let output = Command::new(&self.program)
            .args(self.args("-l"))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(&shown, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if is_missing_crontab(&stderr) {
                debug!("no crontab installed, starting empty");
                return Ok(String::new());
            }
            return Err(CronbookError::CrontabCommand(format!(
                "'{}' exited with {}: {}",
                shown,
                exit_status_text(output.status.code()),
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|_| {
            CronbookError::CrontabCommand(format!("'{}' printed non UTF-8 output", shown))
        })
    }

    fn write(&self, text: &str) -> CronbookResult<()> {
        let shown = self.display_command("-");
        info!(command = %shown, bytes = text.len(), "replacing crontab");

        let mut child = Command::new(&self.program)
            .args(self.args("-"))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(&shown, e))?;

        // The binary may exit before reading all of stdin; its status and
        // stderr explain that better than the broken pipe does.
        let fed = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(CronbookError::CrontabCommand(format!(
                "'{}' exited with {}: {}",
                shown,
                exit_status_text(output.status.code()),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        fed.map_err(|e| {
            CronbookError::CrontabCommand(format!("failed to feed '{}': {}", shown, e))
        })
    }

    fn describe(&self) -> String {
        match &self.user {
            Some(user) => format!("crontab of {}", user),
            None => "user crontab".to_string(),
        }
    }
}

fn spawn_error(shown: &str, err: std::io::Error) -> CronbookError {
    CronbookError::CrontabCommand(format!("failed to run '{}': {}", shown, err))
}

/// `crontab -l` fails with "no crontab for <user>" when none is installed.
fn is_missing_crontab(stderr: &str) -> bool {
    stderr.to_lowercase().contains("no crontab")
}

fn exit_status_text(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}
