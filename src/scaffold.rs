//! The provisioning pipeline: clone, patch, install, init
//!
//! Strictly sequential. Clone and manifest patch must both succeed before
//! anything else runs; the availability check and the install are each
//! independently fatal; the git step is best-effort. The cleanup guard
//! removes the folder on every path that stops before the final commit.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::Cli;
use crate::error::CreateError;
use crate::exec::{CommandRunner, SystemRunner};
use crate::guard::CleanupGuard;
use crate::manifest::patch_manifest;
use crate::name::validate_project_name;
use crate::pm::{ensure_available, PackageManager};
use crate::prompt;
use crate::template::{clone_template, resolve_template_url};
use crate::utils::terminal::{create_spinner, print_warning};

/// Run the whole scaffolding flow
pub fn run(cli: Cli) -> Result<()> {
    let runner = SystemRunner;

    let project_name = resolve_project_name(cli.project_name)?;
    let project_path = env::current_dir()
        .context("Failed to get current working directory")?
        .join(&project_name);

    if project_path.exists() {
        bail!("Destination '{}' already exists", project_path.display());
    }

    if cli.verbose {
        println!("Using template {}", resolve_template_url(&cli.template));
    }

    let guard = CleanupGuard::new(project_path.clone());
    guard.install_signal_handler()?;

    let spinner = create_spinner(&format!("Cloning template {}...", cli.template));
    let clone_result = clone_template(&runner, &cli.template, &project_path);
    spinner.finish_and_clear();
    clone_result?;
    guard.folder_created();
    println!("✅ Template cloned into {}", project_path.display());

    patch_manifest(&project_path, &project_name)?;

    let manager = match cli.package_manager {
        Some(manager) => manager,
        None => prompt::ask_package_manager(),
    };

    ensure_available(&runner, manager)?;

    reconcile_lockfile(&project_path, manager)?;

    install_dependencies(&runner, manager, &project_path)?;

    init_repository(&runner, &project_path);

    guard.finish();
    println!("✅ Done! cd {} && {} start", project_name, manager.binary());
    Ok(())
}

/// Names from the command line pass through the same rules as interactive
/// input; an omitted name is collected by the prompt.
fn resolve_project_name(arg: Option<String>) -> Result<String> {
    match arg {
        Some(name) => match validate_project_name(&name) {
            Ok(()) => Ok(name),
            Err(reason) => Err(CreateError::invalid_name(name, reason).into()),
        },
        None => prompt::ask_project_name(),
    }
}

/// A non-yarn install over the template's yarn lockfile would fail or
/// drift, so it is dropped. Yarn keeps it.
fn reconcile_lockfile(project_path: &Path, manager: PackageManager) -> Result<()> {
    if manager == PackageManager::Yarn {
        return Ok(());
    }
    let lockfile = project_path.join("yarn.lock");
    if lockfile.exists() {
        fs::remove_file(&lockfile)
            .with_context(|| format!("Failed to remove {}", lockfile.display()))?;
    }
    Ok(())
}

fn install_dependencies(
    runner: &dyn CommandRunner,
    manager: PackageManager,
    project_path: &Path,
) -> Result<()> {
    println!("📦 Installing dependencies with {}...", manager.binary());
    let result = runner.run(manager.binary(), &["install"], Some(project_path), true)?;
    if !result.success {
        return Err(CreateError::install_failure(manager.binary()).into());
    }
    Ok(())
}

/// Initialize a fresh repository with an initial commit.
///
/// Best-effort: a missing or misconfigured git must not fail the run, the
/// scaffolded project is still usable without history.
fn init_repository(runner: &dyn CommandRunner, project_path: &Path) {
    let steps: [&[&str]; 3] = [
        &["init"],
        &["add", "."],
        &["commit", "-m", "Initial commit", "--quiet"],
    ];

    for args in steps {
        match runner.run("git", args, Some(project_path), true) {
            Ok(result) if result.success => {}
            _ => {
                print_warning("Git initialization failed. Is git installed?");
                return;
            }
        }
    }
    println!("✅ Git repo initialized!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::testing::FakeRunner;

    #[test]
    fn non_yarn_manager_drops_the_yarn_lockfile() {
        let dir = tempfile::tempdir().unwrap();
        let lockfile = dir.path().join("yarn.lock");
        fs::write(&lockfile, "# stub").unwrap();

        reconcile_lockfile(dir.path(), PackageManager::Npm).unwrap();
        assert!(!lockfile.exists());
    }

    #[test]
    fn yarn_keeps_its_lockfile() {
        let dir = tempfile::tempdir().unwrap();
        let lockfile = dir.path().join("yarn.lock");
        fs::write(&lockfile, "# stub").unwrap();

        reconcile_lockfile(dir.path(), PackageManager::Yarn).unwrap();
        assert!(lockfile.exists());
    }

    #[test]
    fn absent_lockfile_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        reconcile_lockfile(dir.path(), PackageManager::Pnpm).unwrap();
    }

    #[test]
    fn install_failure_is_fatal_and_names_the_manager() {
        let dir = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new().fail_on("npm install");

        let err = install_dependencies(&runner, PackageManager::Npm, dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CreateError>(),
            Some(CreateError::InstallFailure { manager }) if manager == "npm"
        ));
    }

    #[test]
    fn init_runs_init_add_commit_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new();

        init_repository(&runner, dir.path());

        assert_eq!(
            runner.commands(),
            vec![
                "git init".to_string(),
                "git add .".to_string(),
                "git commit -m Initial commit --quiet".to_string(),
            ]
        );
    }

    #[test]
    fn init_failure_stops_early_and_does_not_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new().fail_on("git init");

        // Returns unit: a git failure is a warning, never an error.
        init_repository(&runner, dir.path());

        assert_eq!(runner.commands(), vec!["git init".to_string()]);
    }

    #[test]
    fn cli_names_are_validated_like_interactive_ones() {
        let err = resolve_project_name(Some("fs".to_string())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CreateError>(),
            Some(CreateError::InvalidName { name, .. }) if name == "fs"
        ));

        assert_eq!(
            resolve_project_name(Some("my-app".to_string())).unwrap(),
            "my-app"
        );
    }
}
