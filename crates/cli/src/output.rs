//! Output formatting for CLI

use clap::ValueEnum;
use schema_extract_core::{InferenceStats, Schema, SchemaSource};

use crate::error::CliError;

/// Document format for the emitted schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

/// Render the schema document
pub fn render_schema(schema: &Schema, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(schema).map_err(|e| CliError::Output(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(schema).map_err(|e| CliError::Output(e.to_string()))
        }
    }
}

/// Format the inference summary shown on stderr
pub fn format_summary(schema: &Schema, stats: &InferenceStats) -> String {
    let mut output = String::new();

    output.push_str("Inference complete:\n");
    match stats.source {
        SchemaSource::Catalog => {
            output.push_str("  Source: native column metadata\n");
        }
        SchemaSource::RowRecords => {
            output.push_str(&format!("  Rows sampled: {}\n", stats.rows_scanned));
        }
    }
    output.push_str(&format!("  Fields discovered: {}\n", stats.fields_discovered));

    let nullable = schema.fields.iter().filter(|f| f.nullable).count();
    if nullable > 0 {
        output.push_str(&format!("  Nullable fields: {}\n", nullable));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_extract_core::{Field, PrimitiveType};

    fn sample_schema() -> Schema {
        Schema::new(
            "users",
            vec![
                Field::new("id", PrimitiveType::Int64, false),
                Field::new("email", PrimitiveType::String, true),
            ],
        )
    }

    #[test]
    fn test_render_json() {
        let text = render_schema(&sample_schema(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["type"], "record");
        assert_eq!(value["fields"][1]["type"], serde_json::json!(["null", "string"]));
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_render_yaml() {
        let text = render_schema(&sample_schema(), OutputFormat::Yaml).unwrap();
        assert!(text.starts_with("name: users\n"));
        assert!(text.contains("type: record"));
    }

    #[test]
    fn test_summary_for_rows() {
        let stats = InferenceStats {
            rows_scanned: 3,
            fields_discovered: 2,
            ..InferenceStats::default()
        };
        let summary = format_summary(&sample_schema(), &stats);

        assert!(summary.contains("Rows sampled: 3"));
        assert!(summary.contains("Nullable fields: 1"));
    }
}
