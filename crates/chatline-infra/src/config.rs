//! Configuration loader for chatline.
//!
//! Reads `config.toml` (`~/.chatline/config.toml` by default) and
//! deserializes it into [`ChatConfig`]. Falls back to defaults when the file
//! is missing or malformed.

use std::path::{Path, PathBuf};

use chatline_types::config::ChatConfig;
use chatline_types::error::ConfigError;

/// Directory under the home directory that holds chatline's files.
const DATA_DIR_NAME: &str = ".chatline";

/// Resolve `~/.chatline/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home.join(DATA_DIR_NAME).join("config.toml"))
}

/// Read and parse the config file at `path`.
///
/// A missing file is not an error: it yields [`ChatConfig::default()`].
pub async fn try_load_config(path: &Path) -> Result<ChatConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return Ok(ChatConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    toml::from_str::<ChatConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Load configuration from `path`, or the default location when `None`.
///
/// - If the file does not exist, returns [`ChatConfig::default()`].
/// - If the file cannot be read or parsed, logs a warning and returns the default.
pub async fn load_config(path: Option<&Path>) -> ChatConfig {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!("{err}, using default config");
                return ChatConfig::default();
            }
        },
    };

    match try_load_config(&path).await {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            ChatConfig::default()
        }
    }
}
