//! Package manager model and availability checks

use std::fmt;

use anyhow::Result;
use clap::ValueEnum;

use crate::error::{hints, CreateError};
use crate::exec::CommandRunner;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Choices for the interactive selection, in prompt order
    pub const CHOICES: &'static [PackageManager] =
        &[PackageManager::Yarn, PackageManager::Npm, PackageManager::Pnpm];

    /// Name of the executable on PATH
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Verify the chosen manager answers its version probe before using it.
///
/// An unavailable manager is fatal: the error names the tool and the run
/// terminates without reaching the finished state, so the cleanup guard
/// removes the folder.
pub fn ensure_available(runner: &dyn CommandRunner, manager: PackageManager) -> Result<()> {
    let available = matches!(
        runner.run(manager.binary(), &["--version"], None, false),
        Ok(result) if result.success
    );

    if available {
        Ok(())
    } else {
        Err(CreateError::missing_tool(
            manager.binary(),
            "installing project dependencies",
            hints::package_manager(manager.binary()),
        )
        .into())
    }
}
