//! Taxoslice CLI main entry point

use anyhow::Result;
use clap::Parser;
use taxoslice_cli::commands::{Cli, CommandExecutor};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing; quiet unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let executor = CommandExecutor::new();
    let result = executor.execute(&cli)?;

    if !result.message.is_empty() {
        println!("{}", result.message);
    }

    Ok(())
}
