//! # Part Subcommand
//!
//! Converts part documents between the canvas form and the property-editor
//! form, and prints the editor's JSON Schema and layout descriptor.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use janus_schema::{model_value_to_schema, part_schema, part_ui_schema, schema_value_to_model};

/// Arguments for the `janus part` subcommand.
#[derive(Args, Debug)]
pub struct PartArgs {
    #[command(subcommand)]
    pub command: PartCommand,
}

#[derive(Subcommand, Debug)]
pub enum PartCommand {
    /// Convert a part model into a property-editor form document.
    ToSchema(TransformArgs),

    /// Convert a submitted property-editor form back into a part model.
    ToModel(TransformArgs),

    /// Print the part JSON Schema, or its UI layout descriptor.
    Schema {
        /// Print the UI layout descriptor instead of the JSON Schema.
        #[arg(long)]
        ui: bool,
    },
}

/// Input and output for a transform.
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// JSON document to convert. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the converted document to this file instead of stdout.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Execute the part subcommand.
pub fn run_part(args: &PartArgs) -> Result<u8> {
    match &args.command {
        PartCommand::ToSchema(t) => transform(t, "part model", |v| Ok(model_value_to_schema(v)?)),
        PartCommand::ToModel(t) => transform(t, "schema model", |v| Ok(schema_value_to_model(v)?)),
        PartCommand::Schema { ui } => {
            let doc = if *ui { part_ui_schema() } else { part_schema() };
            crate::write_output(&serde_json::to_string_pretty(&doc)?, None)?;
            Ok(0)
        }
    }
}

fn transform(
    args: &TransformArgs,
    what: &str,
    convert: impl FnOnce(Value) -> Result<Value>,
) -> Result<u8> {
    let text = crate::read_input(args.input.as_deref())?;
    let input: Value = serde_json::from_str(&text)
        .with_context(|| format!("{what} input is not JSON ({})", source_label(args.input.as_deref())))?;
    let output = convert(input).with_context(|| format!("cannot convert {what}"))?;
    crate::write_output(&serde_json::to_string_pretty(&output)?, args.output.as_deref())?;
    Ok(0)
}

fn source_label(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run_transform(command: fn(TransformArgs) -> PartCommand, input: Value) -> Result<Value> {
        let dir = tempfile::tempdir().unwrap();
        let in_path = dir.path().join("in.json");
        let out_path = dir.path().join("out.json");
        std::fs::write(&in_path, input.to_string()).unwrap();
        let args = PartArgs {
            command: command(TransformArgs {
                input: Some(in_path),
                output: Some(out_path.clone()),
            }),
        };
        run_part(&args)?;
        Ok(serde_json::from_str(&std::fs::read_to_string(out_path).unwrap()).unwrap())
    }

    #[test]
    fn to_schema_groups_geometry() {
        let out = run_transform(
            PartCommand::ToSchema,
            json!({"id": "p1", "type": "slider", "custom": {"x": 1, "y": 2, "z": 3, "width": 10, "height": 20}}),
        )
        .unwrap();
        assert_eq!(out["Position"], json!({"x": 1, "y": 2, "z": 3}));
        assert_eq!(out["Size"], json!({"width": 10, "height": 20}));
        assert!(out.get("palette").is_none());
    }

    #[test]
    fn to_model_rebuilds_palette() {
        let out = run_transform(
            PartCommand::ToModel,
            json!({
                "id": "p1",
                "type": "slider",
                "Position": {"x": 1, "y": 2, "z": 3},
                "Size": {"width": 10, "height": 20},
                "custom": {},
                "palette": {"backgroundColor": "red"}
            }),
        )
        .unwrap();
        assert_eq!(out["custom"]["palette"]["useHtmlProps"], json!(true));
        assert_eq!(out["custom"]["palette"]["borderStyle"], json!("none"));
    }

    #[test]
    fn to_model_without_size_fails_with_context() {
        let err = run_transform(
            PartCommand::ToModel,
            json!({"id": "p1", "type": "slider", "Position": {"x": 0, "y": 0, "z": 0}}),
        )
        .unwrap_err();
        let text = format!("{err:#}");
        assert!(text.contains("cannot convert schema model"));
        assert!(text.contains("Size"));
    }
}
