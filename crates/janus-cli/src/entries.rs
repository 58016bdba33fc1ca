//! # Entries Subcommand
//!
//! Resolves the bundler's entry map and prints it (or writes it to a file)
//! for the build to consume. A naming collision aborts with exit code 1 and
//! no output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use janus_entries::{resolve_entries, EntryConfig, EntryError, EntryMap};

/// Output encodings for the entry map.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Arguments for the `janus entries` subcommand.
#[derive(Args, Debug)]
pub struct EntriesArgs {
    /// Encoding of the printed entry map.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the entry map to this file instead of stdout.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only check for collisions and report counts; print no map.
    #[arg(long)]
    pub check: bool,
}

/// Execute the entries subcommand.
///
/// Returns exit code: 0 on success, 1 on a naming collision.
pub fn run_entries(args: &EntriesArgs, project_root: &Path, config: Option<&Path>) -> Result<u8> {
    let config = EntryConfig::load(project_root, config).context("failed to load configuration")?;

    let map = match resolve_entries(project_root, &config) {
        Ok(map) => map,
        Err(e @ EntryError::NamingCollision { .. }) => {
            eprintln!("ERROR: {e}");
            eprintln!("Aborting: fix the colliding manifest ids or theme names.");
            return Ok(1);
        }
        Err(e) => return Err(e).context("entry resolution failed"),
    };

    if args.check {
        println!(
            "Entries: {} resolved ({} fixed, no collisions)",
            map.len(),
            config.initial_entries.len()
        );
        return Ok(0);
    }

    let text = render(&map, args.format)?;
    crate::write_output(&text, args.output.as_deref())?;
    Ok(0)
}

fn render(map: &EntryMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(map).context("failed to encode entry map as JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(map).context("failed to encode entry map as YAML"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, text: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    }

    fn add_part(root: &Path, dir: &str, id: &str) {
        write(
            &root.join("src/components/activities").join(dir).join("manifest.json"),
            &format!(
                r#"{{"id": "{id}", "authoring": {{"entry": "authoring-entry.ts"}}, "delivery": {{"entry": "delivery-entry.ts"}}}}"#
            ),
        );
    }

    fn args(output: Option<PathBuf>, format: OutputFormat) -> EntriesArgs {
        EntriesArgs {
            format,
            output,
            check: false,
        }
    }

    #[test]
    fn writes_json_entry_map() {
        let dir = tempfile::tempdir().unwrap();
        add_part(dir.path(), "janus-slider", "janus_slider");
        let out = dir.path().join("build/entries.json");

        let code = run_entries(&args(Some(out.clone()), OutputFormat::Json), dir.path(), None).unwrap();
        assert_eq!(code, 0);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        let obj = written.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        assert_eq!(
            written["janus_slider_delivery"],
            serde_json::json!(["./src/components/activities/janus-slider/delivery-entry.ts"])
        );
    }

    #[test]
    fn writes_yaml_entry_map() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("entries.yaml");
        let code = run_entries(&args(Some(out.clone()), OutputFormat::Yaml), dir.path(), None).unwrap();
        assert_eq!(code, 0);
        let written: serde_yaml::Value =
            serde_yaml::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(written.as_mapping().unwrap().len(), 6);
    }

    #[test]
    fn collision_exits_one_without_output() {
        let dir = tempfile::tempdir().unwrap();
        add_part(dir.path(), "a", "same");
        add_part(dir.path(), "b", "same");
        let out = dir.path().join("entries.json");

        let code = run_entries(&args(Some(out.clone()), OutputFormat::Json), dir.path(), None).unwrap();
        assert_eq!(code, 1);
        assert!(!out.exists());
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("src/components/activities/bad/manifest.json"),
            "[]",
        );
        let err = run_entries(&args(None, OutputFormat::Json), dir.path(), None).unwrap_err();
        assert!(format!("{err:#}").contains("entry resolution failed"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("other.yaml");
        let err = run_entries(&args(None, OutputFormat::Json), dir.path(), Some(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("configuration file not found"));
    }
}
