//! # Validate Subcommand
//!
//! Manifest and property-editor form validation against their JSON schemas.
//!
//! Every discovered manifest is checked, and every failure reported, before
//! the exit code is decided; a build step can run this ahead of
//! `janus entries` to get the full list instead of the first error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use janus_entries::{validate_all_manifests, EntryConfig};
use janus_schema::SchemaValidator;

/// Arguments for the `janus validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Validate every part manifest under the activities directory.
    #[arg(long)]
    pub manifests: bool,

    /// Validate a property-editor form document against the part schema.
    #[arg(long, value_name = "FILE")]
    pub schema_model: Option<PathBuf>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when everything passed, 1 on any failure.
pub fn run_validate(args: &ValidateArgs, project_root: &Path, config: Option<&Path>) -> Result<u8> {
    if !args.manifests && args.schema_model.is_none() {
        println!("Usage: janus validate [--manifests] [--schema-model FILE]");
        return Ok(1);
    }

    let mut had_failures = false;

    if args.manifests {
        let config =
            EntryConfig::load(project_root, config).context("failed to load configuration")?;
        had_failures |= validate_manifests(project_root, &config)?;
    }

    if let Some(path) = &args.schema_model {
        had_failures |= validate_schema_model(path)?;
    }

    Ok(u8::from(had_failures))
}

fn validate_manifests(project_root: &Path, config: &EntryConfig) -> Result<bool> {
    let report = validate_all_manifests(project_root, config)
        .context("failed to scan part manifests")?;

    println!("Manifests: {}/{} passed", report.passed, report.total);

    for (path, error) in &report.failures {
        let rel = path.strip_prefix(project_root).unwrap_or(path);
        println!("  FAIL: {} — {}", rel.display(), error);
    }

    Ok(report.failed() > 0)
}

fn validate_schema_model(path: &Path) -> Result<bool> {
    let text = crate::read_input(Some(path))?;
    let document: Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            println!("FAIL: {} — JSON parse error: {e}", path.display());
            return Ok(true);
        }
    };

    let validator = SchemaValidator::for_parts().context("failed to compile part schema")?;
    match validator.read_schema_model(document) {
        Ok(model) => {
            println!("OK: {} ({} {})", path.display(), model.part_type, model.id);
            Ok(false)
        }
        Err(e) => {
            println!("FAIL: {} — {}", path.display(), e);
            Ok(true)
        }
    }
}
