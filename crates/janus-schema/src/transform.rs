//! # Part Model ⇄ Schema Model
//!
//! Converts between the flat part model the canvas stores and the nested
//! schema model the property editor renders.
//!
//! ## Palette defaults
//!
//! A palette rebuilt from the editor always carries `useHtmlProps: true`.
//! Fields the editor left absent (or `null`) take fixed defaults:
//!
//! | field             | default         |
//! |-------------------|-----------------|
//! | `backgroundColor` | `"transparent"` |
//! | `borderColor`     | `"transparent"` |
//! | `borderRadius`    | `0`             |
//! | `borderWidth`     | `0`             |
//! | `borderStyle`     | `"none"`        |
//!
//! Present values are kept as submitted, including `""` and `0`.

use janus_core::part::{DEFAULT_BORDER_STYLE, DEFAULT_COLOR};
use janus_core::{
    BorderMeasure, CustomProperties, PartModel, PartPalette, Position, SchemaModel, SchemaPalette,
    Size,
};
use serde_json::{Map, Value};

use crate::error::SchemaError;

/// Keys of `custom` that `to_model` overwrites from `Position` and `Size`.
const GEOMETRY_KEYS: [&str; 5] = ["x", "y", "z", "width", "height"];

/// Build the editor's schema model from a part model.
///
/// `palette` is set only when the part has one; otherwise the key is left
/// out of the document altogether.
pub fn to_schema(model: &PartModel) -> SchemaModel {
    let custom = &model.custom;
    let result = SchemaModel {
        id: model.id.clone(),
        part_type: model.part_type.clone(),
        position: Position {
            x: custom.x,
            y: custom.y,
            z: custom.z,
        },
        size: Size {
            width: custom.width,
            height: custom.height,
        },
        palette: custom.palette.as_ref().map(flatten_palette),
        custom: custom.to_map(),
    };

    tracing::trace!(?model, ?result, "PART [to_schema]");

    result
}

/// Build a part model from a schema model submitted by the editor.
///
/// `custom` starts from the schema's passthrough copy and is overlaid with
/// the geometry from `Position` and `Size`. When the schema has a palette it
/// replaces any palette in the passthrough copy.
pub fn to_model(schema: &SchemaModel) -> PartModel {
    let mut extra = schema.custom.clone();
    for key in GEOMETRY_KEYS {
        extra.remove(key);
    }
    let carried = take_carried_palette(&mut extra);

    let palette = match &schema.palette {
        Some(palette) => Some(rebuild_palette(palette)),
        None => carried,
    };

    let result = PartModel {
        id: schema.id.clone(),
        part_type: schema.part_type.clone(),
        custom: CustomProperties {
            x: schema.position.x,
            y: schema.position.y,
            z: schema.position.z,
            width: schema.size.width,
            height: schema.size.height,
            palette,
            extra,
        },
    };

    tracing::trace!(?schema, ?result, "PART [to_model]");

    result
}

/// [`to_schema`] over raw JSON documents.
pub fn model_value_to_schema(model: Value) -> Result<Value, SchemaError> {
    let model = PartModel::from_value(model)?;
    Ok(to_schema(&model).to_value()?)
}

/// [`to_model`] over raw JSON documents.
pub fn schema_value_to_model(schema: Value) -> Result<Value, SchemaError> {
    let schema = SchemaModel::from_value(schema)?;
    Ok(to_model(&schema).to_value()?)
}

fn flatten_palette(palette: &PartPalette) -> SchemaPalette {
    SchemaPalette {
        background_color: palette.background_color.clone(),
        border_color: palette.border_color.clone(),
        border_radius: palette.border_radius.clone(),
        border_width: palette.border_width.clone(),
        border_style: palette.border_style.clone(),
    }
}

fn rebuild_palette(palette: &SchemaPalette) -> PartPalette {
    PartPalette {
        use_html_props: Some(true),
        background_color: Some(
            palette
                .background_color
                .clone()
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        ),
        border_color: Some(
            palette
                .border_color
                .clone()
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        ),
        border_radius: Some(palette.border_radius.clone().unwrap_or_else(BorderMeasure::zero)),
        border_width: Some(palette.border_width.clone().unwrap_or_else(BorderMeasure::zero)),
        border_style: Some(
            palette
                .border_style
                .clone()
                .unwrap_or_else(|| DEFAULT_BORDER_STYLE.to_string()),
        ),
        extra: Map::new(),
    }
}

/// Lift a palette out of the passthrough bag.
///
/// A value that does not read as a palette stays in the bag untouched.
fn take_carried_palette(extra: &mut Map<String, Value>) -> Option<PartPalette> {
    match extra.remove("palette") {
        None | Some(Value::Null) => None,
        Some(raw) => match PartPalette::from_value(&raw) {
            Ok(palette) => Some(palette),
            Err(e) => {
                tracing::warn!(error = %e, "custom.palette is not a palette; passing it through as-is");
                extra.insert("palette".to_string(), raw);
                None
            }
        },
    }
}
