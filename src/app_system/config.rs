use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at a TOML config file.
pub const CONFIG_ENV_VAR: &str = "REPORT_SYNC_CONFIG";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
channel_buffer = 32
event_capacity = 64
log_filter = "info"
"#;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SystemConfig {
    /// Request buffer of each resource actor.
    pub channel_buffer: usize,
    /// Sync events kept for slow subscribers before they lag.
    pub event_capacity: usize,
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            event_capacity: 64,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0} must be greater than zero")]
    Zero(&'static str),
}

impl SystemConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SystemConfig = toml::from_str(contents)?;
        config.validate()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or the embedded defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Self::from_toml_str(DEFAULT_CONFIG),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Zero("channel_buffer"));
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::Zero("event_capacity"));
        }
        Ok(self)
    }
}
