//! romduol command-line interface

use clap::Parser;
use romduol_cli::commands::Commands;

/// Khmer script tokenizer and transliterator
#[derive(Debug, Parser)]
#[command(name = "romduol", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
