//! create-ally - scaffold a new ally project from the remote template
//!
//! The tool asks for a project name and a package manager, clones the
//! template repository, rewrites the manifest name, installs dependencies
//! and initializes a fresh git repository. An interrupted run leaves no
//! partial project folder behind.

mod cli;
mod error;
mod exec;
mod guard;
mod manifest;
mod name;
mod pm;
mod prompt;
mod scaffold;
mod template;
mod utils;

use clap::Parser;

use cli::Cli;
use error::CreateError;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        match err.downcast_ref::<CreateError>() {
            Some(create_err) => create_err.display_with_hints(),
            None => utils::terminal::print_error(&format!("{err:#}")),
        }
        std::process::exit(1);
    }
}
