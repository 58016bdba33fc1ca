//! # Part Model
//!
//! The flat, runtime-facing shape of a part: the form the authoring canvas
//! stores and renders.
//!
//! ```json
//! {
//!   "id": "p1",
//!   "type": "janus-slider",
//!   "custom": {
//!     "x": 10, "y": 20, "z": 0, "width": 100, "height": 30,
//!     "palette": { "useHtmlProps": true, "backgroundColor": "red" },
//!     "label": "Volume", "maximum": 11
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::identity::{PartId, PartType};
use crate::measure::{BorderMeasure, Measure};

/// Default for `backgroundColor` and `borderColor`.
pub const DEFAULT_COLOR: &str = "transparent";

/// Default for `borderStyle`.
pub const DEFAULT_BORDER_STYLE: &str = "none";

/// A part instance as stored on the authoring canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartModel {
    pub id: PartId,
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub custom: CustomProperties,
}

impl PartModel {
    /// Read a part model from a JSON document.
    ///
    /// Fails with [`ModelError::InvalidPartModel`] when the document lacks
    /// `id`, `type`, or any of the required geometry fields.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        serde_json::from_value(value).map_err(ModelError::InvalidPartModel)
    }

    /// Write the part model as a JSON document.
    pub fn to_value(&self) -> Result<Value, ModelError> {
        serde_json::to_value(self).map_err(ModelError::Serialization)
    }
}

/// The `custom` property bag of a part.
///
/// Geometry is required and typed. Everything else a widget defines
/// (`label`, `maximum`, `customCssClass`, ...) is kept in [`extra`] and
/// serialized flat alongside the typed keys.
///
/// A `palette` that does not read as a [`PartPalette`] is not an error: it
/// stays in [`extra`] as raw JSON and is written back unchanged.
///
/// [`extra`]: CustomProperties::extra
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCustomProperties")]
pub struct CustomProperties {
    pub x: Measure,
    pub y: Measure,
    pub z: Measure,
    pub width: Measure,
    pub height: Measure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<PartPalette>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomProperties {
    /// Geometry-only properties with no palette and no widget fields.
    pub fn with_geometry(
        x: impl Into<Measure>,
        y: impl Into<Measure>,
        z: impl Into<Measure>,
        width: impl Into<Measure>,
        height: impl Into<Measure>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            width: width.into(),
            height: height.into(),
            palette: None,
            extra: Map::new(),
        }
    }

    /// The whole bag as an open JSON map, typed keys included.
    ///
    /// Typed keys win over same-named entries in `extra`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra.clone();
        map.insert("x".into(), self.x.into());
        map.insert("y".into(), self.y.into());
        map.insert("z".into(), self.z.into());
        map.insert("width".into(), self.width.into());
        map.insert("height".into(), self.height.into());
        if let Some(palette) = &self.palette {
            map.insert("palette".into(), Value::Object(palette.to_map()));
        }
        map
    }
}

#[derive(Deserialize)]
struct RawCustomProperties {
    x: Measure,
    y: Measure,
    z: Measure,
    width: Measure,
    height: Measure,
    #[serde(default)]
    palette: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawCustomProperties> for CustomProperties {
    fn from(raw: RawCustomProperties) -> Self {
        let mut extra = raw.extra;
        let palette = match raw.palette {
            None | Some(Value::Null) => None,
            Some(value) => match PartPalette::from_value(&value) {
                Ok(palette) => Some(palette),
                Err(_) => {
                    extra.insert("palette".into(), value);
                    None
                }
            },
        };
        Self {
            x: raw.x,
            y: raw.y,
            z: raw.z,
            width: raw.width,
            height: raw.height,
            palette,
            extra,
        }
    }
}

/// Visual palette of a part, in part-model form.
///
/// Every field is optional on input; `null` is read as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartPalette {
    /// Render the palette through HTML style props. Only present in part
    /// form; always `true` on a palette rebuilt from the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_html_props: Option<bool>,
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
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartPalette {
    /// Read a palette from a raw `custom.palette` value.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    /// The palette as an open JSON map, absent fields omitted.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra.clone();
        if let Some(flag) = self.use_html_props {
            map.insert("useHtmlProps".into(), Value::Bool(flag));
        }
        if let Some(color) = &self.background_color {
            map.insert("backgroundColor".into(), Value::String(color.clone()));
        }
        if let Some(color) = &self.border_color {
            map.insert("borderColor".into(), Value::String(color.clone()));
        }
        if let Some(radius) = &self.border_radius {
            map.insert("borderRadius".into(), radius.into());
        }
        if let Some(width) = &self.border_width {
            map.insert("borderWidth".into(), width.into());
        }
        if let Some(style) = &self.border_style {
            map.insert("borderStyle".into(), Value::String(style.clone()));
        }
        map
    }
}
