//! Process command implementation

use crate::error::CliError;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use romduol_core::{Input, Transliterator};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files ("-" reads stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Script inventory to tokenize with
    #[arg(short, long, default_value = "km")]
    pub script: String,

    /// Suppress logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One token per line: text, kind, series, transliteration
    Text,
    /// JSON array of tokens
    Json,
    /// Markdown token table
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("starting processing with script '{}'", self.script);

        let transliterator = Transliterator::with_script(&self.script)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("cannot create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let mut formatter = make_formatter(self.format, writer);

        for source in &self.input {
            let input = if source == "-" {
                Input::from_reader(io::stdin())
            } else {
                let path = Path::new(source);
                if !path.exists() {
                    return Err(CliError::FileNotFound(source.clone()).into());
                }
                Input::from_file(path)
            };

            let output = transliterator
                .process(input)
                .map_err(|e| CliError::ProcessingError(e.to_string()))?;
            log::debug!(
                "{}: {} tokens ({} unknown) in {} ms",
                source,
                output.metadata.token_count,
                output.metadata.unknown_count,
                output.metadata.processing_time_ms,
            );

            for token in &output.tokens {
                formatter.format_token(token)?;
            }
        }

        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn make_formatter(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
