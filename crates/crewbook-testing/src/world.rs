//! TestWorld pattern for integration tests against the `crewbook` binary.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment: a temp root, a data directory inside it, and the
/// working directory commands run in (relative outputs such as CSV files and
/// default backup names land there).
///
/// # Example
/// ```no_run
/// use crewbook_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["company", "add", "Acme"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".crewbook");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Working directory of every command.
    pub fn cwd(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the live store under the default config.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("crewbook.db")
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point the command at this world's data dir, ask for JSON output and
    /// run it from the temp root.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg("json");

        cmd.current_dir(self.cwd());
        cmd.env_remove("CREWBOOK_PATH");
        cmd.env_remove("CREWBOOK_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute `crewbook` with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("crewbook")
            .map_err(|e| anyhow::anyhow!("Failed to find crewbook binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run a command that must succeed and return its JSON envelope.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let result = self.run(args)?;
        if !result.success() {
            anyhow::bail!(
                "crewbook {:?} failed: {}\nstdout: {}",
                args,
                result.stderr,
                result.stdout
            );
        }
        result
            .json()
            .with_context(|| format!("crewbook {:?} did not print JSON", args))
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
