use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::core::utils::{config_file_in, ledger_file_in};
use crate::errors::ConfigError;
use crate::utils::persistence::write_atomic;

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: [&str; 3] = ["ledger_file", "currency_symbol", "color_enabled"];

/// User preferences for the command-line front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ledger snapshot location. Defaults to `ledger.json` in the app directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_color_enabled")]
    pub color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: None,
            currency_symbol: Self::default_currency_symbol(),
            color_enabled: Self::default_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_color_enabled() -> bool {
        true
    }

    pub fn resolve_ledger_file(&self, base: &Path) -> PathBuf {
        self.ledger_file
            .clone()
            .unwrap_or_else(|| ledger_file_in(base))
    }

    /// Applies one `key value` pair. `none` (or an empty value) resets
    /// `ledger_file` to the default location.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.to_lowercase().as_str() {
            "ledger_file" => {
                self.ledger_file = if value.is_empty() || value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "currency_symbol" => {
                if value.is_empty() {
                    return Err(ConfigError::invalid(key, "symbol must not be empty"));
                }
                self.currency_symbol = value.to_string();
            }
            "color_enabled" => {
                self.color_enabled = parse_flag(value)
                    .ok_or_else(|| ConfigError::invalid(key, format!("`{value}` is not on/off")))?;
            }
            other => {
                return Err(ConfigError::invalid(
                    other,
                    format!("unknown key; expected one of {}", CONFIG_KEYS.join(", ")),
                ))
            }
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(config_file_in(base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file yields defaults; any other read failure is an error.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }
}
