//! Subprocess execution against the real system

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

use super::CommandRunner;

/// Result of a subprocess execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code
    pub exit_code: i32,

    /// Captured standard output (empty when io was inherited)
    pub stdout: String,

    /// Captured standard error (empty when io was inherited)
    pub stderr: String,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, stdout: String, stderr: String) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code().unwrap_or(-1),
            stdout,
            stderr,
        }
    }
}

/// [`CommandRunner`] backed by `std::process` and PATH lookup
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
        inherit_io: bool,
    ) -> Result<CommandResult> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        if inherit_io {
            // Stream install/git output straight to the user's terminal
            cmd.stdin(Stdio::inherit());
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());

            let status = cmd
                .status()
                .with_context(|| format!("Failed to execute {}", program))?;

            Ok(CommandResult::from_status(status, String::new(), String::new()))
        } else {
            let output = cmd
                .output()
                .with_context(|| format!("Failed to execute {}", program))?;

            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();

            Ok(CommandResult::from_status(output.status, stdout, stderr))
        }
    }

    fn check(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
