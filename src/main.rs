use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod analysis;
mod app;
mod cli;
mod db;
mod generators;
mod logging;
mod models;
mod utils;

use crate::app::{Config, PassGuard};
use crate::cli::Args;
use crate::db::{KeyValueStore, MemoryStore, SqliteStore};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(db) = &args.db {
        config.db_path = db.clone();
    }
    config.ensure_directories_exist();

    if let Err(e) = logging::init(&config) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }
    log::info!("Starting PassGuard");
    log::debug!("Loaded config: {:?}", config);

    let result = if args.ephemeral {
        run(PassGuard::new(MemoryStore::new(), &config), args)
    } else {
        let store = SqliteStore::open(&config.db_path)
            .with_context(|| format!("Failed to open store at {}", config.db_path.display()))?;
        run(PassGuard::new(store, &config), args)
    };

    if let Err(e) = &result {
        log::error!("{:#}", e);
    }
    log::info!("PassGuard shutdown complete");
    result
}

fn run<S: KeyValueStore>(app: PassGuard<S>, args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(command) => cli::handlers::run_command(&app, command, args.json),
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received. Shutting down...");
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\n👋 Goodbye!");
                    std::process::exit(0);
                })
                .context("Failed to set Ctrl+C handler")?;
            }
            cli::menu::run_cli_menu(&app, should_exit)
        }
    }
}
