// src/main.rs
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use clap::Parser;

use rust_passcheck::cli::{self, Args, CliCommand};
use rust_passcheck::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.to_string()),
    )
    .format_timestamp_secs()
    .init();

    log::info!("🔒 Starting PassCheck - Password Security Analyzer");
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Analyze { password }) => {
            cli::handlers::handle_analyze(&config, password, args.json)
                .map_err(|e| anyhow::anyhow!("analyze failed: {e}"))?;
        }
        Some(CliCommand::Generate { length }) => {
            cli::handlers::handle_generate(&config, length, args.json)
                .map_err(|e| anyhow::anyhow!("generate failed: {e}"))?;
        }
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("🔴 Ctrl+C received. Initiating shutdown...");
                    should_exit.store(true, Ordering::SeqCst);
                })?;
            }

            cli::menu::run_cli_menu(&config, should_exit)
                .map_err(|e| anyhow::anyhow!("menu error: {e}"))?;
        }
    }

    log::info!("✅ PassCheck shutdown complete.");
    Ok(())
}
