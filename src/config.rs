use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::clock::{self, SystemClock};

/// Errors from reading or validating the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid date format {0:?}")]
    InvalidDateFormat(String),

    #[error("tick_rate_ms must be greater than zero")]
    ZeroTickRate,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub todo: TodoConfig,
    pub log: LogConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
}

/// Initial state and record formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Name shown in the heading at startup.
    pub initial_name: String,
    /// `strftime` pattern for record dates.
    pub date_format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Override the default log directory.
    pub dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 50 }
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            initial_name: "Kevin".to_string(),
            date_format: clock::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/todo-tui/config.toml`.
    ///
    /// A missing file yields `Default`. Read, parse and validation failures
    /// are returned so the caller can report them once logging is up.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !clock::is_valid_format(&self.todo.date_format) {
            return Err(ConfigError::InvalidDateFormat(self.todo.date_format.clone()));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Clock for new records, falling back to the default pattern.
    pub fn clock(&self) -> SystemClock {
        SystemClock::with_format(&self.todo.date_format).unwrap_or_default()
    }

    /// Resolved log directory (override or XDG data dir).
    pub fn log_dir(&self) -> PathBuf {
        self.log.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("todo-tui").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("todo-tui").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
