//! # Discovery
//!
//! Glob-based scans for part manifests and theme stylesheets. Results are
//! sorted so that discovery order never depends on the filesystem. Hidden
//! files and directories (leading `.`) are never matched by a wildcard.
//!
//! Every discovered path is rendered the way the bundler expects it:
//! relative to the project root, `/`-separated, with a leading `./`.

use std::path::{Component, Path, PathBuf};

use glob::MatchOptions;

use crate::config::{EntryConfig, ThemeSource};
use crate::error::EntryError;
use crate::manifest::Manifest;
use crate::resolve::EntrySource;

/// A manifest found under the activities directory.
#[derive(Debug, Clone)]
pub struct DiscoveredManifest {
    /// The manifest file on disk.
    pub path: PathBuf,
    /// The manifest's directory, rendered for the bundler (`./src/.../slider`).
    pub dir: String,
    pub manifest: Manifest,
}

impl DiscoveredManifest {
    /// The part's two entries: `{id}_authoring` and `{id}_delivery`.
    pub fn entries(&self) -> [(String, EntrySource); 2] {
        let id = &self.manifest.id;
        [
            (
                format!("{id}_authoring"),
                EntrySource::Paths(vec![self.entry_path(&self.manifest.authoring.entry)]),
            ),
            (
                format!("{id}_delivery"),
                EntrySource::Paths(vec![self.entry_path(&self.manifest.delivery.entry)]),
            ),
        ]
    }

    fn entry_path(&self, entry: &str) -> String {
        format!("{}/{}", self.dir, entry.trim_start_matches("./"))
    }
}

/// A theme stylesheet found in one of the theme directories.
#[derive(Debug, Clone)]
pub struct DiscoveredTheme {
    /// Entry name: the source's prefix plus the file stem.
    pub name: String,
    /// The stylesheet, rendered for the bundler.
    pub path: String,
}

impl DiscoveredTheme {
    /// The theme's single entry.
    pub fn entry(&self) -> (String, EntrySource) {
        (self.name.clone(), EntrySource::Path(self.path.clone()))
    }
}

/// Paths of every `<activities>/*/<manifest_file>` under `root`, sorted.
pub fn manifest_paths(root: &Path, config: &EntryConfig) -> Result<Vec<PathBuf>, EntryError> {
    let pattern = pattern_under(root, &config.activities_dir, &format!("*/{}", config.manifest_file))?;
    glob_sorted(&pattern)
}

/// Read every manifest under the activities directory.
pub fn discover_manifests(
    root: &Path,
    config: &EntryConfig,
) -> Result<Vec<DiscoveredManifest>, EntryError> {
    let paths = manifest_paths(root, config)?;
    let mut found = Vec::with_capacity(paths.len());

    for path in paths {
        let manifest = Manifest::from_path(&path)?;
        let dir = render_path(root, path.parent().unwrap_or(root));
        tracing::debug!(id = %manifest.id, manifest = %path.display(), "discovered part manifest");
        found.push(DiscoveredManifest { path, dir, manifest });
    }

    Ok(found)
}

/// Find every stylesheet in the configured theme directories.
pub fn discover_themes(
    root: &Path,
    config: &EntryConfig,
) -> Result<Vec<DiscoveredTheme>, EntryError> {
    let mut found = Vec::new();
    for source in &config.themes {
        found.extend(discover_theme_dir(root, source, &config.theme_extension)?);
    }
    Ok(found)
}

fn discover_theme_dir(
    root: &Path,
    source: &ThemeSource,
    extension: &str,
) -> Result<Vec<DiscoveredTheme>, EntryError> {
    let pattern = pattern_under(root, &source.dir, &format!("*.{extension}"))?;
    let mut themes = Vec::new();

    for path in glob_sorted(&pattern)? {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| EntryError::NonUtf8Path(path.clone()))?;
        let theme = DiscoveredTheme {
            name: format!("{}{stem}", source.prefix),
            path: render_path(root, &path),
        };
        tracing::debug!(name = %theme.name, path = %theme.path, "discovered theme");
        themes.push(theme);
    }

    Ok(themes)
}

/// Build a glob pattern for `leaf` inside `root/dir`, escaping the
/// directory part so that bracketed or starred directory names match
/// literally.
fn pattern_under(root: &Path, dir: &Path, leaf: &str) -> Result<String, EntryError> {
    let base = root.join(dir);
    let base = base
        .to_str()
        .ok_or_else(|| EntryError::NonUtf8Path(base.clone()))?;
    let base = base.trim_end_matches(['/', '\\']);
    Ok(format!("{}/{leaf}", glob::Pattern::escape(base)))
}

fn glob_sorted(pattern: &str) -> Result<Vec<PathBuf>, EntryError> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let paths = glob::glob_with(pattern, options).map_err(|source| EntryError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let mut found = paths.collect::<Result<Vec<_>, _>>()?;
    found.sort();
    Ok(found)
}

/// Render `path` relative to `root` as `./a/b/c`.
fn render_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();
    format!("./{}", parts.join("/"))
}
