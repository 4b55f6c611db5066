use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;

use sysadmin_menu::{run_menu, Config, Console, Palette, Session, SystemRunner};

// CLI arguments parsing structure
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short = 'c', long, env = "SYSADMIN_MENU_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the report files are written to
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

// Build the session from flags and config, then hand over to the menu
pub fn execute(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(dir) = &cli.report_dir {
        config.report_dir.clone_from(dir);
    }
    if cli.no_color {
        config.color = false;
    }
    info!(report_dir = %config.report_dir.display(), "starting interactive menu");

    let runner = SystemRunner::new();
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout(), Palette::new(config.color));
    let mut session = Session::new(&config, &runner, console);

    run_menu(&mut session).context("terminal i/o failed")
}
