use std::path::PathBuf;

use anyhow::Context;
use bootconf::{init_logging, ConfigLoader, LoggingConfig, ProjectLayout, APP_NAME, VERSION};
use clap::Parser;
use tracing::info;

/// Resolve a project's configuration and print it with secrets redacted
#[derive(Parser, Debug)]
#[command(name = "bootconf", version, about)]
struct Cli {
    /// Project root; defaults to BOOTCONF_PROJECT_ROOT or the current directory
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    init_logging(&logging)?;

    info!(app_name = APP_NAME, version = VERSION, "Resolving project configuration");

    let layout = match cli.root {
        Some(root) => ProjectLayout::new(root),
        None => ProjectLayout::from_env()?,
    };
    let config = ConfigLoader::new(layout).load().context("Failed to load configuration")?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
