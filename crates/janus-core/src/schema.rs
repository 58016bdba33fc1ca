//! # Schema Model
//!
//! The nested, editor-facing shape of a part: what the schema-driven
//! property form renders and submits.
//!
//! ```json
//! {
//!   "id": "p1",
//!   "type": "janus-slider",
//!   "Position": { "x": 10, "y": 20, "z": 0 },
//!   "Size": { "width": 100, "height": 30 },
//!   "palette": { "backgroundColor": "red" },
//!   "custom": { "x": 10, "y": 20, "z": 0, "width": 100, "height": 30, "label": "Volume" }
//! }
//! ```
//!
//! `Position` and `Size` are required: a submitted form without them is a
//! contract violation and fails to deserialize.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::identity::{PartId, PartType};
use crate::measure::{BorderMeasure, Measure};

/// A part as the property editor sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaModel {
    pub id: PartId,
    #[serde(rename = "type")]
    pub part_type: PartType,
    #[serde(rename = "Position")]
    pub position: Position,
    #[serde(rename = "Size")]
    pub size: Size,
    /// Omitted entirely from the document when the part has no palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<SchemaPalette>,
    /// Passthrough copy of the part's `custom` bag.
    #[serde(default)]
    pub custom: Map<String, Value>,
}

impl SchemaModel {
    /// Read a schema model from a submitted form document.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        serde_json::from_value(value).map_err(ModelError::InvalidSchemaModel)
    }

    /// Write the schema model as a form document.
    pub fn to_value(&self) -> Result<Value, ModelError> {
        serde_json::to_value(self).map_err(ModelError::Serialization)
    }
}

/// Canvas position of a part.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: Measure,
    pub y: Measure,
    pub z: Measure,
}

/// Canvas size of a part.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: Measure,
    pub height: Measure,
}

/// The editor's flat palette: five style fields, no `useHtmlProps`.
///
/// Unknown keys submitted by the form are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaPalette {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderMeasure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<BorderMeasure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
}
