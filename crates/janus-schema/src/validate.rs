//! # Schema Validation
//!
//! Runtime validation of JSON documents against JSON Schema definitions,
//! backed by the `jsonschema` crate.
//!
//! Validation is the boundary between the editor (or a hand-written
//! manifest) and the typed models: documents that fail are rejected with
//! every violation, each carrying the instance path, the schema path, and a
//! message. A [`SchemaValidator`] compiles its schema once and can be reused
//! across any number of documents.

use janus_core::SchemaModel;
use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::error::{SchemaError, Violation};
use crate::part::part_schema;

/// Name the part schema is registered under in error messages.
pub const PART_SCHEMA_NAME: &str = "part";

/// A compiled JSON Schema.
pub struct SchemaValidator {
    name: String,
    validator: Validator,
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Compile `schema` (draft-07) under `name`.
    pub fn compile(name: impl Into<String>, schema: &Value) -> Result<Self, SchemaError> {
        let name = name.into();
        let validator = jsonschema::options()
            .with_draft(Draft::Draft7)
            .build(schema)
            .map_err(|e| SchemaError::SchemaCompile {
                schema_name: name.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(schema = %name, "compiled schema");

        Ok(Self { name, validator })
    }

    /// Compile the part property-editor schema.
    pub fn for_parts() -> Result<Self, SchemaError> {
        Self::compile(PART_SCHEMA_NAME, &part_schema())
    }

    /// Name this schema was compiled under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `document` conforms, without collecting violations.
    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }

    /// Validate `document`, returning every violation on failure.
    pub fn validate(&self, document: &Value) -> Result<(), SchemaError> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(document)
            .map(|err| Violation {
                instance_path: err.instance_path.to_string(),
                schema_path: err.schema_path.to_string(),
                message: err.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema_name: self.name.clone(),
                count: violations.len(),
                violations,
            })
        }
    }

    /// Validate a submitted form document and read it as a schema model.
    ///
    /// Schema validation runs first so a malformed form is reported with
    /// every violation; the typed read then enforces the required
    /// `Position` and `Size` groups.
    pub fn read_schema_model(&self, document: Value) -> Result<SchemaModel, SchemaError> {
        self.validate(&document)?;
        Ok(SchemaModel::from_value(document)?)
    }
}
