//! # janus-core — Foundational Types for Janus Parts
//!
//! Defines the two shapes a part's editable properties take as they move
//! between the authoring canvas and the property editor. Every other crate in
//! the workspace depends on `janus-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Typed required subset, open passthrough.** A part's `custom` bag is
//!    modelled as [`CustomProperties`]: the geometry every part carries is
//!    typed, everything widget-specific rides along in an explicit
//!    passthrough map and is serialized flat beside the known keys.
//!
//! 2. **Newtype wrappers for identifiers.** [`PartId`] and [`PartType`] are
//!    distinct types; you cannot pass one where the other is expected.
//!
//! 3. **JSON-shape fidelity.** [`Measure`] serializes integral values as JSON
//!    integers so a document read from the editor is written back in the
//!    same shape.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `janus-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod measure;
pub mod part;
pub mod schema;

// Re-export primary types for ergonomic imports.
pub use error::ModelError;
pub use identity::{PartId, PartType};
pub use measure::{BorderMeasure, Measure};
pub use part::{CustomProperties, PartModel, PartPalette};
pub use schema::{Position, SchemaModel, SchemaPalette, Size};
