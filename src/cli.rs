//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::pm::PackageManager;
use crate::scaffold;
use crate::template;

/// create-ally - scaffold a new ally project
///
/// Clones the ally template, patches its package.json, installs
/// dependencies and creates an initial git commit.
#[derive(Parser, Debug)]
#[command(name = "create-ally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project name (prompted for interactively when omitted)
    pub project_name: Option<String>,

    /// Template source: GitHub `owner/repo` shorthand or a full git URL
    #[arg(long, default_value = template::DEFAULT_TEMPLATE)]
    pub template: String,

    /// Package manager to install with (skips the interactive selection)
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the scaffolding run
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        scaffold::run(self)
    }
}
