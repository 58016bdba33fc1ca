//! # janus-entries — Bundle Entry-Point Resolution
//!
//! Scans a project tree once per build and produces the bundler's entry
//! map: bundle name → source file(s).
//!
//! ## Sources
//!
//! - **Fixed bundles** from [`EntryConfig::initial_entries`] (the main app
//!   bundles: `app`, `components`, `resourceeditor`, `activityeditor`,
//!   `authoring`, `delivery`).
//! - **Part manifests** matched by `<activities>/*/manifest.json`. Each
//!   contributes `{id}_authoring` and `{id}_delivery`.
//! - **Themes** matched by `<theme dir>/*.scss`, contributing
//!   `authoring_theme_{name}` and `delivery_theme_{name}`.
//!
//! ## Collision Invariant
//!
//! The merged map must hold exactly `fixed + 2 * manifests + themes` keys.
//! Any shortfall means two sources chose the same name and one silently
//! replaced the other; [`resolve_entries`] fails with
//! [`EntryError::NamingCollision`] and returns no map.
//!
//! ## Crate Policy
//!
//! - Discovery is read-only and synchronous.
//! - Every failure is fatal for the build; nothing is retried or skipped.

pub mod config;
pub mod discover;
pub mod error;
pub mod manifest;
pub mod resolve;

pub use config::{ConfigError, EntryConfig, ThemeSource, CONFIG_FILE_NAME};
pub use discover::{discover_manifests, discover_themes, DiscoveredManifest, DiscoveredTheme};
pub use error::{Collision, EntryError};
pub use manifest::{manifest_schema, validate_all_manifests, Manifest, ManifestEntry, ManifestReport};
pub use resolve::{build_entry_map, resolve_entries, EntryMap, EntrySource};
