//! Error types and helpers for user-friendly error messages
//!
//! Every fatal failure the user can hit carries a hint describing how to
//! get unstuck, printed by [`CreateError::display_with_hints`].

use thiserror::Error;

/// Fatal scaffolding failures surfaced to the user
#[derive(Error, Debug)]
pub enum CreateError {
    /// Project name rejected by validation
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Required executable not found or not responding
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// Template clone failed
    #[error("Failed to clone template '{template}'")]
    CloneFailure { template: String, output: String },

    /// Dependency installation failed
    #[error("Failed to install dependencies with {manager}")]
    InstallFailure { manager: String },
}

impl CreateError {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a clone failure with the captured git output
    pub fn clone_failure(template: impl Into<String>, output: impl Into<String>) -> Self {
        Self::CloneFailure {
            template: template.into(),
            output: output.into(),
        }
    }

    /// Create an install failure error
    pub fn install_failure(manager: impl Into<String>) -> Self {
        Self::InstallFailure {
            manager: manager.into(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            CreateError::InvalidName { .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hints::project_name());
            }
            CreateError::MissingTool { hint, required_for, .. } => {
                eprintln!("\n{} {}", style("REQUIRED FOR:").cyan().bold(), required_for);
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            CreateError::CloneFailure { output, .. } => {
                if !output.is_empty() {
                    eprintln!("\n{}", style("OUTPUT:").cyan().bold());
                    for line in output.lines() {
                        eprintln!("  {}", line);
                    }
                }
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hints::clone());
            }
            CreateError::InstallFailure { manager } => {
                eprintln!(
                    "\n{} Run '{} install' inside the project folder to inspect the failure.",
                    style("HINT:").yellow().bold(),
                    manager
                );
            }
        }

        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    /// Rules a project name must satisfy
    pub fn project_name() -> &'static str {
        "Project names may use letters, numbers, '-' and '_'.\n\
         They must not start with a digit, dot, '-' or '_',\n\
         and must not shadow a Node built-in module (fs, path, http, url)."
    }

    /// Get hint for missing Git
    pub fn git() -> &'static str {
        "Install Git from https://git-scm.com/ or use your package manager:\n\
         • macOS: brew install git\n\
         • Ubuntu: sudo apt install git\n\
         • Windows: winget install Git.Git"
    }

    /// Get hint for clone failures
    pub fn clone() -> &'static str {
        "Check that the template exists and that you are online.\n\
         A custom template can be passed with --template owner/repo\n\
         or --template https://example.com/repo.git"
    }

    /// Get hint for a missing package manager
    pub fn package_manager(tool: &str) -> String {
        format!(
            "{tool} not found. Make sure that {tool} is installed or pick another one:\n\
             • npm ships with Node.js: https://nodejs.org/\n\
             • yarn: npm install --global yarn\n\
             • pnpm: npm install --global pnpm"
        )
    }
}
