//! Interactive prompts for the scaffolding flow

use anyhow::{Context, Result};
use dialoguer::{Input, Select};

use crate::name::validate_project_name;
use crate::pm::PackageManager;

/// Ask for a project name, re-prompting until it passes validation.
///
/// A cancelled or unusable prompt is fatal: without a name there is
/// nothing to scaffold.
pub fn ask_project_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Project name")
        .default("my-app".to_string())
        .validate_with(|input: &String| validate_project_name(input))
        .interact_text()
        .context("Project name prompt was cancelled")?;
    Ok(name)
}

/// Ask which package manager to install with.
///
/// Yarn is preselected to match the template's lockfile; a cancelled
/// selection falls back to npm.
pub fn ask_package_manager() -> PackageManager {
    let labels = ["Yarn", "npm", "pnpm"];

    match Select::new()
        .with_prompt("Which package manager do you want to use?")
        .items(&labels)
        .default(0)
        .interact_opt()
    {
        Ok(Some(index)) => PackageManager::CHOICES[index],
        _ => PackageManager::Npm,
    }
}
