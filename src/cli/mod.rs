// src/cli/mod.rs
use std::path::PathBuf;
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password generator and strength checker", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the local store (overrides PASSGUARD_DB)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Keep history and presets in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
