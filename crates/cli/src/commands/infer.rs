//! CLI command for schema inference

use std::path::{Path, PathBuf};

use schema_extract_core::{
    InferenceConfig, ReaderConfig, Schema, SchemaInferrer, SourceFormat, open_reader,
};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{OutputFormat, format_summary, render_schema};

/// Arguments for the `infer` command
#[derive(Debug, Clone, Default)]
pub struct InferArgs {
    /// Source file to sample
    pub input: PathBuf,
    /// Source format (detected from the extension if not provided)
    pub format: Option<String>,
    /// Maximum records to sample (0 = all)
    pub sample_size: Option<usize>,
    /// Field delimiter for delimited text
    pub delimiter: Option<String>,
    /// Schema name
    pub name: Option<String>,
    /// Mark every field nullable
    pub assume_nullable: bool,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// Output document format
    pub output_format: OutputFormat,
    /// TOML config file
    pub config: Option<PathBuf>,
}

/// Handle the `infer` command
pub fn handle_infer(args: &InferArgs) -> Result<(), CliError> {
    let file_config = match args.config {
        Some(ref path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    let format = resolve_format(args.format.as_deref(), &args.input)?;
    let reader_config = resolve_reader_config(args, &file_config.reader, &args.input)?;
    let inference_config = resolve_inference_config(args, &file_config.inference);

    tracing::info!(
        input = %args.input.display(),
        format = %format,
        sample_size = reader_config.sample_size,
        "Inferring schema"
    );

    let (schema, summary) = infer_file(format, &args.input, &reader_config, inference_config)?;
    eprint!("{}", summary);

    let document = render_schema(&schema, args.output_format)?;

    if let Some(ref output_path) = args.output {
        std::fs::write(output_path, format!("{}\n", document))?;
        eprintln!("Wrote schema to {}", output_path.display());
    } else {
        println!("{}", document);
    }

    Ok(())
}

/// Read and infer a single file, returning the schema and a summary
fn infer_file(
    format: SourceFormat,
    path: &Path,
    reader_config: &ReaderConfig,
    inference_config: InferenceConfig,
) -> Result<(Schema, String), CliError> {
    let reader = open_reader(format, path, reader_config)?;
    let chunks = reader.read_chunks()?;

    let inferrer = SchemaInferrer::with_config(inference_config);
    #[cfg(feature = "parallel")]
    let (schema, stats) = inferrer.infer_parallel_with_stats(&chunks)?;
    #[cfg(not(feature = "parallel"))]
    let (schema, stats) = inferrer.infer_with_stats(&chunks)?;

    if schema.is_empty() {
        tracing::warn!(input = %path.display(), "No fields found in sample");
    }

    let summary = format_summary(&schema, &stats);
    Ok((schema, summary))
}

/// Explicit `--format`, else the file extension, else CSV
fn resolve_format(explicit: Option<&str>, input: &Path) -> Result<SourceFormat, CliError> {
    match explicit {
        Some(name) => Ok(name.parse::<SourceFormat>()?),
        None => Ok(SourceFormat::from_path(input).unwrap_or_else(|| {
            tracing::debug!(input = %input.display(), "Unknown extension, reading as CSV");
            SourceFormat::Csv
        })),
    }
}

fn resolve_reader_config(
    args: &InferArgs,
    file: &ReaderConfig,
    input: &Path,
) -> Result<ReaderConfig, CliError> {
    let mut builder = ReaderConfig::builder()
        .sample_size(args.sample_size.unwrap_or(file.sample_size))
        .delimiter(file.delimiter);

    match args.delimiter.as_deref() {
        Some(text) => builder = builder.delimiter(parse_delimiter(text)?),
        None if is_tsv(input) && file.delimiter == ',' => builder = builder.delimiter('\t'),
        None => {}
    }

    Ok(builder.build())
}

fn resolve_inference_config(args: &InferArgs, file: &InferenceConfig) -> InferenceConfig {
    InferenceConfig::builder()
        .schema_name(args.name.clone().unwrap_or_else(|| file.schema_name.clone()))
        .assume_nullable(args.assume_nullable || file.assume_nullable)
        .build()
}

/// Accept a single character, or `\t` / `tab` for tab
fn parse_delimiter(text: &str) -> Result<char, CliError> {
    if text == "\\t" || text.eq_ignore_ascii_case("tab") {
        return Ok('\t');
    }

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(CliError::InvalidArgument(format!(
            "--delimiter must be a single ASCII character, got '{}'",
            text
        ))),
    }
}

fn is_tsv(input: &Path) -> bool {
    input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("tsv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_extract_core::PrimitiveType;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(
            resolve_format(None, Path::new("a.ndjson")).unwrap(),
            SourceFormat::Jsonl
        );
        assert_eq!(
            resolve_format(None, Path::new("data.txt")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            resolve_format(Some("PARQUET"), Path::new("a.csv")).unwrap(),
            SourceFormat::Parquet
        );
        assert_eq!(
            resolve_format(Some("xml"), Path::new("a.csv"))
                .unwrap_err()
                .exit_code(),
            5
        );
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";").unwrap(), ';');
        assert_eq!(parse_delimiter("\\t").unwrap(), '\t');
        assert_eq!(parse_delimiter("tab").unwrap(), '\t');
        assert!(matches!(
            parse_delimiter("::"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_flags_override_file_config() {
        let args = InferArgs {
            input: PathBuf::from("t.csv"),
            sample_size: Some(10),
            name: Some("flag".into()),
            ..InferArgs::default()
        };
        let file = CliConfig {
            inference: InferenceConfig::builder()
                .schema_name("file")
                .assume_nullable(true)
                .build(),
            reader: ReaderConfig::builder().sample_size(99).delimiter(';').build(),
        };

        let reader = resolve_reader_config(&args, &file.reader, &args.input).unwrap();
        assert_eq!(reader.sample_size, 10);
        assert_eq!(reader.delimiter, ';');

        let inference = resolve_inference_config(&args, &file.inference);
        assert_eq!(inference.schema_name, "flag");
        assert!(inference.assume_nullable);
    }

    #[test]
    fn test_tsv_extension_defaults_to_tab() {
        let args = InferArgs {
            input: PathBuf::from("t.TSV"),
            ..InferArgs::default()
        };
        let reader =
            resolve_reader_config(&args, &ReaderConfig::default(), &args.input).unwrap();
        assert_eq!(reader.delimiter, '\t');
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_infer_file_csv() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "t.csv", "a,b\n1,2\n3,\n,5\n");

        let (schema, summary) = infer_file(
            SourceFormat::Csv,
            &path,
            &ReaderConfig::default(),
            InferenceConfig::default(),
        )
        .unwrap();

        assert_eq!(schema.field("a").unwrap().field_type, PrimitiveType::Int64);
        assert!(schema.field("b").unwrap().nullable);
        assert!(summary.contains("Rows sampled: 3"));
    }

    #[test]
    fn test_infer_file_matches_sequential_engine() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "m.jsonl",
            "{\"a\":1}\n{\"b\":null,\"a\":2.5}\n\n{\"c\":true}\n",
        );

        let (schema, summary) = infer_file(
            SourceFormat::Jsonl,
            &path,
            &ReaderConfig::default(),
            InferenceConfig::default(),
        )
        .unwrap();

        let chunks = open_reader(SourceFormat::Jsonl, &path, &ReaderConfig::default())
            .unwrap()
            .read_chunks()
            .unwrap();
        let (expected, stats) = SchemaInferrer::new().infer_with_stats(&chunks).unwrap();

        assert_eq!(schema, expected);
        assert_eq!(summary, format_summary(&expected, &stats));
    }

    #[test]
    fn test_handle_infer_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = write(
            &dir,
            "u.jsonl",
            "{\"id\":1,\"name\":\"a\"}\n{\"id\":2,\"name\":\"b\"}\n",
        );
        let output = dir.path().join("schema.json");

        let args = InferArgs {
            input,
            name: Some("users".into()),
            output: Some(output.clone()),
            ..InferArgs::default()
        };
        handle_infer(&args).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({
                "name": "users",
                "type": "record",
                "fields": [
                    {"name": "id", "type": "int64"},
                    {"name": "name", "type": "string"}
                ]
            })
        );
    }

    #[test]
    fn test_handle_infer_missing_input() {
        let args = InferArgs {
            input: PathBuf::from("/nonexistent/input.jsonl"),
            ..InferArgs::default()
        };
        let err = handle_infer(&args).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
