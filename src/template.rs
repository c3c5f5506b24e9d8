//! Template cloning via git

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::error::{hints, CreateError};
use crate::exec::CommandRunner;
use crate::utils::terminal::print_warning;

/// Template cloned when `--template` is not given
pub const DEFAULT_TEMPLATE: &str = "lucjastozek/ally-template";

/// Resolve a template source to a cloneable git URL.
///
/// Bare `owner/repo` shorthand resolves to GitHub; anything carrying an
/// explicit scheme, or an scp-style `git@` remote, passes through as-is.
pub fn resolve_template_url(source: &str) -> String {
    if source.contains("://") || source.starts_with("git@") {
        source.to_string()
    } else {
        format!("https://github.com/{source}.git")
    }
}

/// Clone the template into `dest` as a plain directory tree.
///
/// A shallow clone keeps the transfer small; the template's own `.git` is
/// stripped afterwards so the later init step starts a fresh history.
/// Failure is fatal; whatever a failed clone left behind is the cleanup
/// guard's problem.
pub fn clone_template(runner: &dyn CommandRunner, source: &str, dest: &Path) -> Result<()> {
    if !runner.check("git") {
        return Err(
            CreateError::missing_tool("git", "cloning the project template", hints::git()).into(),
        );
    }

    let url = resolve_template_url(source);
    let dest_str = dest.display().to_string();
    let result = runner.run(
        "git",
        &["clone", "--depth", "1", &url, &dest_str],
        None,
        false,
    )?;
    if !result.success {
        return Err(CreateError::clone_failure(source, result.stderr.trim()).into());
    }

    strip_git_history(dest);
    Ok(())
}

fn strip_git_history(dest: &Path) {
    let git_dir = dest.join(".git");
    if !git_dir.exists() {
        return;
    }
    if let Err(err) = fs::remove_dir_all(&git_dir) {
        print_warning(&format!("Could not remove template git history: {err}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::testing::FakeRunner;

    #[test]
    fn shorthand_resolves_to_github() {
        assert_eq!(
            resolve_template_url("lucjastozek/ally-template"),
            "https://github.com/lucjastozek/ally-template.git"
        );
    }

    #[test]
    fn explicit_urls_pass_through() {
        for url in [
            "https://example.com/repo.git",
            "ssh://git@example.com/repo.git",
            "git@github.com:owner/repo.git",
        ] {
            assert_eq!(resolve_template_url(url), url);
        }
    }

    #[test]
    fn clones_shallow_into_the_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("demo");
        let runner = FakeRunner::new();

        clone_template(&runner, DEFAULT_TEMPLATE, &dest).unwrap();

        let commands = runner.commands();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].starts_with("git clone --depth 1 https://github.com/"));
    }

    #[test]
    fn missing_git_is_fatal_before_any_clone_attempt() {
        let dir = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new().missing("git");

        let err = clone_template(&runner, DEFAULT_TEMPLATE, &dir.path().join("demo")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CreateError>(),
            Some(CreateError::MissingTool { tool, .. }) if tool == "git"
        ));
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn failed_clone_surfaces_the_git_output() {
        let dir = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new().fail_on("git clone");

        let err = clone_template(&runner, DEFAULT_TEMPLATE, &dir.path().join("demo")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CreateError>(),
            Some(CreateError::CloneFailure { output, .. }) if output == "simulated failure"
        ));
    }
}
