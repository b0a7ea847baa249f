//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize and transliterate Khmer text
    Process(process::ProcessArgs),

    /// Validate a custom script inventory file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}
