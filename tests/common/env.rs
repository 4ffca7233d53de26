//! Test environment for isolated Cronbook runs.
//!
//! Every run gets `--file <tmp>/crontab`, an isolated home and config
//! directory, and none of the caller's `CRONBOOK_*` variables.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const INHERITED_VARS: &[&str] = &[
    "CRONBOOK_CONFIG",
    "CRONBOOK_CRONTAB_COMMAND",
    "CRONBOOK_CRONTAB_USER",
    "CRONBOOK_FILE",
    "CRONBOOK_COLOR",
    "RUST_LOG",
    "LC_ALL",
    "LC_CTYPE",
];

/// Result of running a Cronbook CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not a JSON line ({}): {}", e, line))
            })
            .collect()
    }
}

/// Isolated environment with a file-backed crontab
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("home")).expect("Failed to create home");
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_cronbook")),
        }
    }

    /// Start with existing crontab text
    pub fn with_crontab(text: &str) -> Self {
        let env = Self::new();
        env.write_crontab(text);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn crontab_path(&self) -> PathBuf {
        self.path("crontab")
    }

    pub fn home_path(&self) -> PathBuf {
        self.path("home")
    }

    /// Current crontab text ("" when the file does not exist)
    pub fn crontab(&self) -> String {
        std::fs::read_to_string(self.crontab_path()).unwrap_or_default()
    }

    pub fn write_crontab(&self, text: &str) {
        std::fs::write(self.crontab_path(), text).expect("Failed to write crontab");
    }

    /// Write a file under the environment root and return its path
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write `config.toml` where Cronbook looks for it by default
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("home/.config/cronbook/config.toml", content)
    }

    /// Run with `--file` pointing at the environment's crontab
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let crontab = self.crontab_path();
        let mut full_args: Vec<&str> = vec!["--file", crontab.to_str().expect("utf-8 temp path")];
        full_args.extend_from_slice(args);
        self.run_raw(&full_args, env_vars)
    }

    /// Run without adding `--file`
    pub fn run_raw(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.home_path())
            .env("CRONBOOK_TEST_HOME", self.home_path())
            .env("XDG_CONFIG_HOME", self.home_path().join(".config"))
            .env("NO_COLOR", "1")
            .env("LANG", "C");
        for key in INHERITED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute cronbook");
        output_to_result(output)
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
