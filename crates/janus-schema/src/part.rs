//! # Part Schema
//!
//! The JSON Schema (draft-07) the property editor renders a part's form
//! from, and the layout descriptor that arranges it.

use serde_json::{json, Value};

/// Object-field template used for the grouped sections of the form.
pub const FIELD_TEMPLATE: &str = "CustomFieldTemplate";

/// Widget used for colour fields.
pub const COLOR_PICKER_WIDGET: &str = "ColorPickerWidget";

/// JSON Schema for a part's schema model.
///
/// `borderRadius` and `borderWidth` accept a string or a number: the form
/// edits them as text, but palettes rebuilt with defaults carry `0`.
pub fn part_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "id": { "type": "string", "title": "Id" },
            "type": { "type": "string", "title": "Type" },
            "Position": {
                "type": "object",
                "title": "Dimensions",
                "properties": {
                    "x": { "type": "number" },
                    "y": { "type": "number" },
                    "z": { "type": "number" }
                }
            },
            "Size": {
                "type": "object",
                "title": "Dimensions",
                "properties": {
                    "width": { "type": "number", "title": "Width" },
                    "height": { "type": "number", "title": "Height" }
                }
            },
            "palette": {
                "type": "object",
                "properties": {
                    "backgroundColor": { "type": "string", "title": "Background Color" },
                    "borderColor": { "type": "string", "title": "Border Color" },
                    "borderRadius": { "type": ["string", "number"], "title": "Border Radius" },
                    "borderStyle": { "type": "string", "title": "Border Style" },
                    "borderWidth": { "type": ["string", "number"], "title": "Border Width" }
                }
            },
            "custom": {
                "type": "object",
                "additionalProperties": true
            }
        },
        "required": ["id"]
    })
}

/// Layout descriptor for the part form: titles, templates, widgets and
/// column classes per field.
pub fn part_ui_schema() -> Value {
    json!({
        "type": {
            "ui:title": "Part Type",
            "ui:readonly": true
        },
        "Position": {
            "ui:ObjectFieldTemplate": FIELD_TEMPLATE,
            "ui:title": "Position",
            "x": { "classNames": "col-4" },
            "y": { "classNames": "col-4" },
            "z": { "classNames": "col-4" }
        },
        "Size": {
            "ui:ObjectFieldTemplate": FIELD_TEMPLATE,
            "ui:title": "Dimensions",
            "width": { "classNames": "col-6" },
            "height": { "classNames": "col-6" }
        },
        "palette": {
            "ui:ObjectFieldTemplate": FIELD_TEMPLATE,
            "ui:title": "Palette",
            "backgroundColor": { "ui:widget": COLOR_PICKER_WIDGET },
            "borderColor": { "ui:widget": COLOR_PICKER_WIDGET },
            "borderStyle": { "classNames": "col-6" },
            "borderWidth": { "classNames": "col-6" }
        }
    })
}
