//! # Entry Map Resolution
//!
//! Merges fixed bundles, manifest entries and theme entries into one map
//! and enforces the collision invariant.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::EntryConfig;
use crate::discover::{discover_manifests, discover_themes, DiscoveredManifest, DiscoveredTheme};
use crate::error::{Collision, EntryError};

/// Origin label for entries declared in configuration.
const FIXED_ORIGIN: &str = "<fixed>";

/// Source file(s) for one bundle.
///
/// Serialized untagged, as the bundler takes either form: a single path
/// (themes) or a list (bundles and part entries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntrySource {
    Path(String),
    Paths(Vec<String>),
}

impl EntrySource {
    /// Every path of this source, in order.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            EntrySource::Path(p) => vec![p.as_str()],
            EntrySource::Paths(ps) => ps.iter().map(String::as_str).collect(),
        }
    }
}

/// The resolved entry map, sorted by bundle name.
///
/// Only produced by a successful resolution, so every name in it came from
/// exactly one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryMap(BTreeMap<String, EntrySource>);

impl EntryMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&EntrySource> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntrySource)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> BTreeMap<String, EntrySource> {
        self.0
    }
}

/// Discover manifests and themes under `root` and build the entry map.
pub fn resolve_entries(root: &Path, config: &EntryConfig) -> Result<EntryMap, EntryError> {
    let manifests = discover_manifests(root, config)?;
    let themes = discover_themes(root, config)?;
    let map = build_entry_map(&config.initial_entries, &manifests, &themes)?;

    tracing::info!(
        fixed = config.initial_entries.len(),
        manifests = manifests.len(),
        themes = themes.len(),
        entries = map.len(),
        "resolved bundle entry points"
    );

    Ok(map)
}

/// Merge fixed bundles with discovered manifests and themes.
///
/// Later sources overwrite earlier ones during the merge; the cardinality
/// check afterwards turns any overwrite into [`EntryError::NamingCollision`].
pub fn build_entry_map(
    initial: &BTreeMap<String, EntrySource>,
    manifests: &[DiscoveredManifest],
    themes: &[DiscoveredTheme],
) -> Result<EntryMap, EntryError> {
    let discovered: Vec<(String, EntrySource, String)> = manifests
        .iter()
        .flat_map(|m| {
            let origin = m.path.display().to_string();
            m.entries()
                .into_iter()
                .map(move |(name, source)| (name, source, origin.clone()))
        })
        .chain(themes.iter().map(|t| {
            let (name, source) = t.entry();
            (name, source, t.path.clone())
        }))
        .collect();

    let expected = initial.len() + 2 * manifests.len() + themes.len();

    let mut merged = initial.clone();
    merged.extend(
        discovered
            .iter()
            .map(|(name, source, _)| (name.clone(), source.clone())),
    );

    if merged.len() != expected {
        let collisions = find_collisions(initial, &discovered);
        tracing::error!(
            expected,
            actual = merged.len(),
            collisions = collisions.len(),
            "entry naming collision"
        );
        return Err(EntryError::NamingCollision {
            expected,
            actual: merged.len(),
            collisions,
        });
    }

    Ok(EntryMap(merged))
}

fn find_collisions(
    initial: &BTreeMap<String, EntrySource>,
    discovered: &[(String, EntrySource, String)],
) -> Vec<Collision> {
    let mut claims: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for name in initial.keys() {
        claims
            .entry(name.as_str())
            .or_default()
            .push(FIXED_ORIGIN.to_string());
    }
    for (name, _, origin) in discovered {
        claims.entry(name.as_str()).or_default().push(origin.clone());
    }
    claims
        .into_iter()
        .filter(|(_, origins)| origins.len() > 1)
        .map(|(name, origins)| Collision {
            name: name.to_string(),
            origins,
        })
        .collect()
}
