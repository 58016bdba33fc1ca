//! # Part Manifests
//!
//! Each part directory describes itself in a `manifest.json`:
//!
//! ```json
//! {
//!   "id": "janus_slider",
//!   "friendlyName": "Slider",
//!   "authoring": { "entry": "./authoring-entry.ts", "element": "janus-slider-authoring" },
//!   "delivery": { "entry": "./delivery-entry.ts", "element": "janus-slider" }
//! }
//! ```
//!
//! Only `id` and the two `entry` paths drive entry resolution. The custom
//! element names are read by the part's registration code; every other key
//! is carried through untouched.

use std::path::{Path, PathBuf};

use janus_schema::SchemaValidator;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::EntryConfig;
use crate::discover::manifest_paths;
use crate::error::EntryError;

/// Name the manifest schema is compiled under.
pub const MANIFEST_SCHEMA_NAME: &str = "manifest";

/// A part manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Part identifier; prefixes the part's entry names.
    pub id: String,
    pub authoring: ManifestEntry,
    pub delivery: ManifestEntry,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One side (authoring or delivery) of a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Entry file, relative to the manifest's directory.
    pub entry: String,
    /// Custom element tag the entry registers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Read and check a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, EntryError> {
        let text = std::fs::read_to_string(path).map_err(|source| EntryError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest =
            serde_json::from_str(&text).map_err(|source| EntryError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;
        manifest.check(path)?;
        Ok(manifest)
    }

    /// Reject manifests that cannot name their entries.
    fn check(&self, path: &Path) -> Result<(), EntryError> {
        let invalid = |reason: &str| EntryError::ManifestInvalid {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };
        if self.id.trim().is_empty() {
            return Err(invalid("id is empty"));
        }
        if self.authoring.entry.trim().is_empty() {
            return Err(invalid("authoring.entry is empty"));
        }
        if self.delivery.entry.trim().is_empty() {
            return Err(invalid("delivery.entry is empty"));
        }
        Ok(())
    }
}

/// JSON Schema for manifest documents.
pub fn manifest_schema() -> Value {
    let side = json!({
        "type": "object",
        "properties": {
            "entry": { "type": "string", "minLength": 1 },
            "element": { "type": "string" }
        },
        "required": ["entry"]
    });
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "id": { "type": "string", "minLength": 1 },
            "authoring": side,
            "delivery": side
        },
        "required": ["id", "authoring", "delivery"]
    })
}

/// Outcome of validating every discovered manifest.
#[derive(Debug, Default)]
pub struct ManifestReport {
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<(PathBuf, String)>,
}

impl ManifestReport {
    /// Number of manifests that failed.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Validate every manifest the resolver would discover against
/// [`manifest_schema`].
///
/// Unlike [`crate::resolve_entries`], this does not stop at the first bad
/// manifest: every failure is collected in the report.
pub fn validate_all_manifests(
    root: &Path,
    config: &EntryConfig,
) -> Result<ManifestReport, EntryError> {
    let validator = SchemaValidator::compile(MANIFEST_SCHEMA_NAME, &manifest_schema())?;
    let mut report = ManifestReport::default();

    for path in manifest_paths(root, config)? {
        report.total += 1;
        match validate_manifest_file(&validator, &path) {
            Ok(()) => report.passed += 1,
            Err(reason) => report.failures.push((path, reason)),
        }
    }

    tracing::info!(
        total = report.total,
        failed = report.failed(),
        "validated part manifests"
    );

    Ok(report)
}

fn validate_manifest_file(validator: &SchemaValidator, path: &Path) -> Result<(), String> {
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let value: Value = serde_json::from_str(&text).map_err(|e| format!("JSON parse error: {e}"))?;
    validator.validate(&value).map_err(|e| e.to_string())
}
