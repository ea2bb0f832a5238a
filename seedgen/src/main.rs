//! `seedgen` binary: BIP-39 mnemonic and BIP-32 master key generator.

use clap::Parser;
use seedgen::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries the console output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute(std::io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
