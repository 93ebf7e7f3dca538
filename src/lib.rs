//! household library root.
//! Exposes the CLI parser, the dispatcher and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod genai;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use genai::{GeminiClient, TextGenerator};

/// Central command dispatcher.
///
/// `generator` is only used by the commands that talk to the text service
/// (`days add`, `recipe generate`).
pub fn dispatch(cli: &Cli, cfg: &Config, generator: &dyn TextGenerator) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Days { action } => commands::days::handle(action, cfg, generator),
        Commands::Shop { action } => commands::shop::handle(action, cfg),
        Commands::Inventory { action } => commands::inventory::handle(action, cfg),
        Commands::Todo { action } => commands::todo::handle(action, cfg),
        Commands::Recipe { action } => commands::recipe::handle(action, cfg, generator),
        Commands::Notebook { action } => commands::notebook::handle(action, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    let generator = GeminiClient::from_config(&cfg.gemini);

    dispatch(&cli, &cfg, &generator)
}
