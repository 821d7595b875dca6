//! CLI command definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use taxoslice::{ClassIri, ExtractOptions, ExtractionSummary, Extractor};
use tracing::info;

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "taxoslice")]
#[command(about = "Extract a sub-taxonomy from an OWL functional-syntax file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Input ontology (functional syntax)
    pub input: PathBuf,

    /// Output ontology (functional syntax)
    pub output: PathBuf,

    /// One or more class IRIs to seed the extraction
    #[arg(required = true, num_args = 1..)]
    pub classes: Vec<String>,

    /// Fail on body lines that are not Prefix, SubClassOf or EquivalentClasses
    #[arg(long)]
    pub strict: bool,

    /// Also write the sub-taxonomy as a Graphviz graph
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,

    /// Write output files in place instead of through a temporary file
    #[arg(long)]
    pub no_atomic: bool,

    /// Confirmation format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    pub fn options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::default().with_atomic_write(!self.no_atomic);
        if self.strict {
            options = options.strict();
        }
        if let Some(dot) = &self.dot {
            options = options.with_dot_output(dot);
        }
        options
    }

    pub fn seeds(&self) -> Vec<ClassIri> {
        self.classes.iter().map(|c| ClassIri::new(c.as_str())).collect()
    }
}

/// Output format options
#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    JsonPretty,
}

/// Command execution result
pub struct CommandResult {
    /// Confirmation text in the requested format
    pub message: String,
    pub summary: ExtractionSummary,
}

/// Execute CLI commands
#[derive(Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Run one extraction described by `cli`
    pub fn execute(&self, cli: &Cli) -> Result<CommandResult> {
        let extractor = Extractor::new(cli.options());
        let seeds = cli.seeds();

        let summary = extractor.run(&cli.input, &cli.output, &seeds).with_context(|| {
            format!(
                "failed to extract sub-taxonomy from {} into {}",
                cli.input.display(),
                cli.output.display()
            )
        })?;

        if summary.skipped_lines > 0 {
            info!("Ignored {} unrecognized lines", summary.skipped_lines);
        }

        let message = match cli.format {
            OutputFormat::Text => confirmation(&summary),
            OutputFormat::Json => serde_json::to_string(&summary)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(&summary)?,
        };

        Ok(CommandResult { message, summary })
    }
}

/// `Wrote sub-taxonomy for [:A, :B] to out.ofn`
pub fn confirmation(summary: &ExtractionSummary) -> String {
    let seeds: Vec<&str> = summary.seeds.iter().map(ClassIri::as_str).collect();
    format!(
        "Wrote sub-taxonomy for [{}] to {}",
        seeds.join(", "),
        summary.output.display()
    )
}
