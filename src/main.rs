use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing::{Level, debug};

use futsal_ism::cli::Cli;
use futsal_ism::config::Config;
use futsal_ism::utils::{AppError, report_error};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<AppError>() {
            Some(app_err) => report_error(app_err),
            None => eprintln!("❌ {:#}", err),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Missing files are created with defaults
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    let config = Config::load_custom(&config_path)?;
    debug!(app = %config.app.name, version = %config.app.version, "configuration loaded");

    if !config.general.color {
        colored::control::set_override(false);
    }

    cli.command
        .execute(config, &config_path, cli.interactive)
        .await
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
