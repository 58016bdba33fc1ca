//! # Identity Newtypes
//!
//! Identifier newtypes shared by both model forms. Each is a distinct type:
//! you cannot pass a [`PartType`] where a [`PartId`] is expected.
//!
//! Both are copied verbatim between the part and schema forms, so neither
//! validates its contents; uniqueness of ids within a document is the
//! owning document's concern.

use serde::{Deserialize, Serialize};

/// Identifier of a part instance, unique within its containing document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(String);

impl PartId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Widget implementation that renders a part (e.g. `janus-slider`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartType(String);

impl PartType {
    /// Wrap a part type name.
    pub fn new(part_type: impl Into<String>) -> Self {
        Self(part_type.into())
    }

    /// Access the type name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
