use crate::errors::{AppError, AppResult};
use crate::export::ColumnFormat;
use crate::table::Style;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_borders")]
    pub borders: bool,
    #[serde(default)]
    pub row_separators: bool,
    #[serde(default)]
    pub column_separators: bool,
    #[serde(default = "default_format")]
    pub default_format: ColumnFormat,
}

fn default_borders() -> bool {
    true
}
fn default_format() -> ColumnFormat {
    ColumnFormat::Json
}

impl Default for Config {
    fn default() -> Self {
        Self {
            borders: default_borders(),
            row_separators: false,
            column_separators: false,
            default_format: default_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tablat")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tablat")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tablat.conf")
    }

    /// Load `path`, or defaults if it does not exist.
    /// Fields missing from the file take their default value.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write a default config file at `path`, creating parent directories.
    pub fn init(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(path, yaml)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }

    /// Table style described by this config.
    pub fn style(&self) -> Style {
        Style::new(self.borders, self.row_separators, self.column_separators)
    }
}
