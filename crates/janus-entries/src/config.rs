//! # Resolver Configuration
//!
//! Where to look for manifests and themes, and which bundles exist
//! regardless of discovery. Defaults reproduce the standard project layout;
//! a project can override any field in a `janus.yaml` at its root:
//!
//! ```yaml
//! activities_dir: src/components/parts
//! themes:
//!   - dir: styles/themes/authoring
//!     prefix: authoring_theme_
//! initial_entries:
//!   app: [babel-polyfill, ./src/phoenix/app.ts]
//! ```
//!
//! Omitted fields keep their defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolve::EntrySource;

/// Configuration file looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "janus.yaml";

/// Error loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("cannot read configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration YAML.
    #[error("cannot parse configuration {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A directory of theme stylesheets and the entry-name prefix they get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSource {
    /// Directory relative to the project root.
    pub dir: PathBuf,
    /// Prepended to each stylesheet's file stem.
    pub prefix: String,
}

/// Entry-resolution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntryConfig {
    /// Directory whose immediate subdirectories hold part manifests.
    pub activities_dir: PathBuf,
    /// Manifest file name inside each part directory.
    pub manifest_file: String,
    /// Theme directories, scanned in order.
    pub themes: Vec<ThemeSource>,
    /// Stylesheet extension, without the dot.
    pub theme_extension: String,
    /// Bundles that exist regardless of discovery.
    pub initial_entries: BTreeMap<String, EntrySource>,
}

impl Default for EntryConfig {
    fn default() -> Self {
        let initial_entries = [
            ("app", vec!["babel-polyfill", "./src/phoenix/app.ts"]),
            ("components", vec!["./src/components.tsx"]),
            (
                "resourceeditor",
                vec!["./src/components/resource/ResourceEditorApp.tsx"],
            ),
            (
                "activityeditor",
                vec!["./src/components/activity/ActivityEditorApp.tsx"],
            ),
            ("authoring", vec!["./src/apps/AuthoringApp.tsx"]),
            ("delivery", vec!["./src/apps/DeliveryApp.tsx"]),
        ]
        .into_iter()
        .map(|(name, paths)| {
            (
                name.to_string(),
                EntrySource::Paths(paths.into_iter().map(String::from).collect()),
            )
        })
        .collect();

        Self {
            activities_dir: PathBuf::from("src/components/activities"),
            manifest_file: "manifest.json".to_string(),
            themes: vec![
                ThemeSource {
                    dir: PathBuf::from("styles/themes/authoring"),
                    prefix: "authoring_theme_".to_string(),
                },
                ThemeSource {
                    dir: PathBuf::from("styles/themes/delivery"),
                    prefix: "delivery_theme_".to_string(),
                },
            ],
            theme_extension: "scss".to_string(),
            initial_entries,
        }
    }
}

impl EntryConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        // An empty file is valid and means "all defaults".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text, path)
    }

    /// Load the configuration for a project.
    ///
    /// An explicit path must exist. Without one, `janus.yaml` at the project
    /// root is used when present, and the defaults otherwise.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading explicit configuration");
            return Self::from_yaml_file(path);
        }
        let candidate = project_root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading project configuration");
            Self::from_yaml_file(&candidate)
        } else {
            tracing::debug!("no project configuration; using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_declare_six_fixed_bundles() {
        let config = EntryConfig::default();
        let names: Vec<&str> = config.initial_entries.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["activityeditor", "app", "authoring", "components", "delivery", "resourceeditor"]
        );
        assert_eq!(
            config.initial_entries["app"],
            EntrySource::Paths(vec!["babel-polyfill".into(), "./src/phoenix/app.ts".into()])
        );
    }

    #[test]
    fn defaults_scan_two_theme_dirs() {
        let config = EntryConfig::default();
        let prefixes: Vec<&str> = config.themes.iter().map(|t| t.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["authoring_theme_", "delivery_theme_"]);
        assert_eq!(config.theme_extension, "scss");
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = EntryConfig::from_yaml_str(
            "activities_dir: src/components/parts\n",
            Path::new("janus.yaml"),
        )
        .unwrap();
        assert_eq!(config.activities_dir, PathBuf::from("src/components/parts"));
        assert_eq!(config.manifest_file, "manifest.json");
        assert_eq!(config.initial_entries.len(), 6);
    }

    #[test]
    fn yaml_initial_entries_accept_single_paths() {
        let config = EntryConfig::from_yaml_str(
            "initial_entries:\n  app: ./src/app.ts\n  vendor: [a.js, b.js]\n",
            Path::new("janus.yaml"),
        )
        .unwrap();
        assert_eq!(config.initial_entries.len(), 2);
        assert_eq!(config.initial_entries["app"], EntrySource::Path("./src/app.ts".into()));
    }

    #[test]
    fn empty_yaml_is_default() {
        let config = EntryConfig::from_yaml_str("  \n", Path::new("janus.yaml")).unwrap();
        assert_eq!(config, EntryConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = EntryConfig::from_yaml_str("activity_dir: x\n", Path::new("janus.yaml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_prefers_explicit_and_requires_it_to_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = EntryConfig::load(dir.path(), Some(&dir.path().join("missing.yaml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn load_reads_project_file_when_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "theme_extension: css\n").unwrap();
        let config = EntryConfig::load(dir.path(), None).unwrap();
        assert_eq!(config.theme_extension, "css");

        let empty = tempfile::tempdir().unwrap();
        assert_eq!(EntryConfig::load(empty.path(), None).unwrap(), EntryConfig::default());
    }
}
