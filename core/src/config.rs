//! Session configuration loaded from `~/.stateful/config.toml`.
//!
//! ```toml
//! [session]
//! flatten_order = "by_name"   # or "insertion" (default)
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use stateful_types::FlattenOrder;
use thiserror::Error;
use toml::de;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "STATEFUL_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct StatefulConfig {
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Order in which inputs are flattened into results.
    #[serde(default)]
    pub flatten_order: FlattenOrder,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl StatefulConfig {
    /// Load the config file if one exists. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// The `[session]` section, or defaults when it is absent.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        self.session.unwrap_or_default()
    }
}

/// `$STATEFUL_CONFIG` if set, otherwise `~/.stateful/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_PATH_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".stateful").join("config.toml"))
}
