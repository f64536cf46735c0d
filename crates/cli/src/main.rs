//! schema-extract - infer record schemas from sampled data files

mod commands;
mod config;
mod error;
mod logging;
mod output;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::commands::infer::{InferArgs, handle_infer};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "schema-extract",
    version,
    about = "Infer record schemas from CSV, JSONL and Parquet samples"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer a schema from a data file
    Infer(InferCommand),
}

#[derive(Args)]
struct InferCommand {
    /// Data file to sample
    input: PathBuf,

    /// Source format: csv, jsonl or parquet (default: from extension)
    #[arg(short, long)]
    format: Option<String>,

    /// Maximum records to sample, 0 for all [default: 1000]
    #[arg(short, long)]
    sample_size: Option<usize>,

    /// Field delimiter for delimited text (`\t` or `tab` for tab)
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Schema name [default: inferred]
    #[arg(short, long)]
    name: Option<String>,

    /// Mark every field nullable
    #[arg(long)]
    assume_nullable: bool,

    /// Write the schema to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output document format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    output_format: OutputFormat,

    /// TOML config file with [inference] and [reader] tables
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl From<InferCommand> for InferArgs {
    fn from(cmd: InferCommand) -> Self {
        InferArgs {
            input: cmd.input,
            format: cmd.format,
            sample_size: cmd.sample_size,
            delimiter: cmd.delimiter,
            name: cmd.name,
            assume_nullable: cmd.assume_nullable,
            output: cmd.output,
            output_format: cmd.output_format,
            config: cmd.config,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let result = match cli.command {
        Commands::Infer(cmd) => handle_infer(&cmd.into()),
    };

    if let Err(err) = result {
        tracing::debug!(error = ?err, "Command failed");
        eprintln!("Error: {}", err.user_message());
        std::process::exit(err.exit_code());
    }

    Ok(())
}
