//! # janus-cli — CLI Tool for Janus Parts
//!
//! ## Subcommands
//!
//! - `janus entries` — resolve and print the bundler's entry map.
//! - `janus part` — part model ⇄ form transforms, part schema output.
//! - `janus validate` — manifest and form validation.
//!
//! ```bash
//! janus entries --format json --output build/entries.json
//! janus part to-schema part.json
//! janus validate --manifests --schema-model form.json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to the library crates and return an exit code:
//!   0 on success, 1 on a validation or collision failure.

pub mod entries;
pub mod part;
pub mod validate;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Walk up from the current directory to find the project root.
///
/// The project root holds either a `janus.yaml` or the default activities
/// directory.
pub fn find_project_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_project_root_from(&cwd)
}

/// [`find_project_root`] starting from `start`.
pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(janus_entries::CONFIG_FILE_NAME).is_file()
            || dir.join("src/components/activities").is_dir()
        {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Read a document from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_output(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}
