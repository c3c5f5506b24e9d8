//! Manifest (package.json) patching

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::name::sanitize_package_name;

/// Rewrite the cloned manifest's `name` field to the sanitized project
/// name, preserving every other field and the key order. Written back
/// pretty-printed with a trailing newline. There is no backup of a
/// partial write; a failure here
/// is fatal and the cleanup guard removes the folder.
pub fn patch_manifest(project_path: &Path, project_name: &str) -> Result<()> {
    let manifest_path = project_path.join("package.json");

    let raw = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let mut manifest: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in {}", manifest_path.display()))?;

    let Some(fields) = manifest.as_object_mut() else {
        bail!("{} is not a JSON object", manifest_path.display());
    };
    fields.insert(
        "name".to_string(),
        Value::String(sanitize_package_name(project_name)),
    );

    let mut pretty = serde_json::to_string_pretty(&manifest)?;
    pretty.push('\n');
    fs::write(&manifest_path, pretty)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    Ok(())
}
