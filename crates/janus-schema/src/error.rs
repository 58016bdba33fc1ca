//! Errors raised by the schema layer.

use std::fmt;

use janus_core::ModelError;
use thiserror::Error;

/// Error from the transform wrappers or schema validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The input document did not have the shape of the expected model.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A schema failed to compile.
    #[error("schema '{schema_name}' failed to compile: {reason}")]
    SchemaCompile {
        /// Name the schema was registered under.
        schema_name: String,
        /// Compiler message.
        reason: String,
    },

    /// The document did not conform to the schema.
    #[error("{count} violation(s) against schema '{schema_name}':\n{}", format_violations(.violations))]
    ValidationFailed {
        /// Name of the schema validated against.
        schema_name: String,
        /// Number of violations found.
        count: usize,
        /// Every violation, in the order the validator reported them.
        violations: Vec<Violation>,
    },
}

/// A single schema violation with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating value in the document.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that rejected it.
    pub schema_path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
