//! # Error Hierarchy
//!
//! Structured error types for the part data model, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.

use thiserror::Error;

/// A JSON document did not have the shape of the model it was read as.
///
/// Both model forms have a required subset (geometry on the part side,
/// `Position`/`Size` on the schema side). A document missing any of it is a
/// caller contract violation and is rejected here, at the boundary, rather
/// than producing a model with holes in it.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The document is not a valid part model.
    #[error("invalid part model: {0}")]
    InvalidPartModel(#[source] serde_json::Error),

    /// The document is not a valid schema model.
    #[error("invalid schema model: {0}")]
    InvalidSchemaModel(#[source] serde_json::Error),

    /// A model could not be serialized back to JSON.
    #[error("model serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
