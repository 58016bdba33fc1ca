//! # janus-schema — Property-Editor Schema Layer
//!
//! Everything the schema-driven property editor needs to edit a part.
//!
//! ## Transforms (`transform`)
//!
//! - [`to_schema`] — flat part model → nested schema model for the form.
//! - [`to_model`] — submitted schema model → part model, rebuilding the
//!   palette with its defaults.
//!
//! ## Part Schema (`part`)
//!
//! [`part_schema`] is the JSON Schema the form renders from, and
//! [`part_ui_schema`] the companion layout descriptor (field templates,
//! widgets, column classes). Widgets and templates are referenced by name;
//! the UI layer resolves the names to components.
//!
//! ## Validation (`validate`)
//!
//! [`SchemaValidator`] compiles a schema once (the part schema, or any other
//! document schema such as a part manifest's) and checks documents against
//! it, returning every violation with its path.

pub mod error;
pub mod part;
pub mod transform;
pub mod validate;

pub use error::{SchemaError, Violation};
pub use part::{part_schema, part_ui_schema};
pub use transform::{model_value_to_schema, schema_value_to_model, to_model, to_schema};
pub use validate::SchemaValidator;
