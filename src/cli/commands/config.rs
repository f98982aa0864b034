use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::bold;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        // ---- INIT CONFIG ----
        if *init {
            Config::init(path)?;
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("{}  {}\n", bold("Current configuration:"), path.display());
            print!("{}", serde_yaml::to_string(cfg)?);
        }

        if !*init && !*print_config {
            info("Nothing to do: use --print or --init");
        }
    }
    Ok(())
}
