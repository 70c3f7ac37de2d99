//! Database location configuration.
//!
//! Resolution order: the `GAME_SHELF_DB` environment variable, then the
//! `database.path` key of `game-shelf/settings.toml` under the user config
//! directory, then `game-shelf/collection.db` under the user data
//! directory. A config file that exists but cannot be read or parsed is a
//! hard error so a misconfigured setup fails at startup instead of silently
//! opening a fresh database somewhere else.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the database file location.
pub const DB_ENV_VAR: &str = "GAME_SHELF_DB";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a data directory for the collection database")]
    NoDataDir,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// TOML config file format.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    database: DatabaseSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct DatabaseSection {
    path: Option<PathBuf>,
}

/// Returns `~/.config/game-shelf/settings.toml` (platform equivalent).
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("game-shelf").join("settings.toml"))
}

/// Resolve the collection database path.
///
/// Priority: env var > config file > platform data directory.
pub fn database_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var(DB_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    if let Some(path) = config_path()
        && path.exists()
    {
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        if let Some(db_path) = config.database.path {
            return Ok(db_path);
        }
    }

    dirs::data_dir()
        .map(|d| d.join("game-shelf").join("collection.db"))
        .ok_or(ConfigError::NoDataDir)
}
