//! skimstat command-line entry point

use clap::Parser;
use skimstat_cli::commands::Commands;

/// Streaming median and word-frequency statistics over line-oriented corpora
#[derive(Debug, Parser)]
#[command(name = "skimstat", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
