//! Project name validation and sanitization

use regex::Regex;

/// Node built-in module names a project must not shadow (exact match)
pub const RESERVED_NAMES: &[&str] = &["fs", "path", "http", "url"];

/// Validate a project name against the scaffolding rules.
///
/// Returns a rule-specific message for the first violated rule, suitable
/// for re-prompting. The same rules apply to names passed on the command
/// line and names entered interactively.
pub fn validate_project_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Project name cannot be empty".to_string());
    }

    let allowed = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
    if !allowed.is_match(name) {
        return Err("Only letters, numbers, '-' and '_' are allowed".to_string());
    }

    let bad_start = Regex::new(r"^[0-9.]").unwrap();
    if bad_start.is_match(name) {
        return Err("Cannot start with a number or dot".to_string());
    }

    if name.starts_with('-') || name.starts_with('_') {
        return Err("Cannot start with '-' or '_'".to_string());
    }

    if RESERVED_NAMES.contains(&name) {
        return Err("Cannot use a Node built-in module name".to_string());
    }

    Ok(())
}

/// Derive the manifest package name: filtered to `[A-Za-z0-9_-]`, lowercased
pub fn sanitize_package_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect::<String>()
        .to_lowercase()
}
