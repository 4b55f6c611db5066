use anyhow::{Context, Result};
use clap::Parser;

mod cli;

use cli::{execute, Cli};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sysadmin_menu=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    execute(&cli).with_context(|| "menu session failed")
}
