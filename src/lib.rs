//! tablat library root.
//! Exposes the table renderer, column file I/O, CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod table;
pub mod ui;
pub mod utils;

pub use table::{Alignment, ColumnFilter, ColumnMap, Rendered, Style, Table, TableView};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ config path: --config override or the platform default
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // 3️⃣ load config once
    let cfg = Config::load_from(&config_path)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
