use crate::error::{DirectoryError, Result};
use crate::page::DEFAULT_PAGE_SIZE;
use crate::store::LoadPolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "phone_directory.json";
const DEFAULT_LOG_FILE: &str = "phone_directory.log";
const DEFAULT_LOG_LEVEL: &str = "debug";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "PHONEDIR_CONFIG_DIR";

/// Configuration for phonedir, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Directory file; relative paths resolve against the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Page size used when `--records_per_page` is not given
    #[serde(default = "default_records_per_page")]
    pub records_per_page: NonZeroUsize,

    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub load_policy: LoadPolicy,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_records_per_page() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            records_per_page: default_records_per_page(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            load_policy: LoadPolicy::default(),
        }
    }
}

/// Settable configuration keys, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DataFile,
    RecordsPerPage,
    LogFile,
    LogLevel,
    LoadPolicy,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::DataFile,
        ConfigKey::RecordsPerPage,
        ConfigKey::LogFile,
        ConfigKey::LogLevel,
        ConfigKey::LoadPolicy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::DataFile => "data-file",
            ConfigKey::RecordsPerPage => "records-per-page",
            ConfigKey::LogFile => "log-file",
            ConfigKey::LogLevel => "log-level",
            ConfigKey::LoadPolicy => "load-policy",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DirectoryError::Config(format!("Unknown config key: {}", s)))
    }
}

impl DirectoryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DirectoryError::Io)?;
        let config: DirectoryConfig =
            serde_json::from_str(&content).map_err(DirectoryError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DirectoryError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DirectoryError::Serialization)?;
        fs::write(config_path, content).map_err(DirectoryError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DataFile => self.data_file.display().to_string(),
            ConfigKey::RecordsPerPage => self.records_per_page.to_string(),
            ConfigKey::LogFile => self.log_file.display().to_string(),
            ConfigKey::LogLevel => self.log_level.clone(),
            ConfigKey::LoadPolicy => self.load_policy.to_string(),
        }
    }

    /// Parses and applies `value`; the config is left untouched on error.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::DataFile => self.data_file = non_empty_path(key, value)?,
            ConfigKey::LogFile => self.log_file = non_empty_path(key, value)?,
            ConfigKey::RecordsPerPage => {
                self.records_per_page = value.parse().map_err(|_| {
                    DirectoryError::Config(format!(
                        "{} must be a positive integer, got '{}'",
                        key, value
                    ))
                })?
            }
            ConfigKey::LogLevel => {
                let level = value.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(DirectoryError::Config(format!(
                        "{} must be one of {}, got '{}'",
                        key,
                        LOG_LEVELS.join(", "),
                        value
                    )));
                }
                self.log_level = level;
            }
            ConfigKey::LoadPolicy => {
                self.load_policy = value.parse().map_err(DirectoryError::Config)?
            }
        }
        Ok(())
    }
}

fn non_empty_path(key: ConfigKey, value: &str) -> Result<PathBuf> {
    if value.trim().is_empty() {
        return Err(DirectoryError::Config(format!("{} cannot be empty", key)));
    }
    Ok(PathBuf::from(value))
}

/// `$PHONEDIR_CONFIG_DIR` if set, else the platform configuration directory.
pub fn default_config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "phonedir", "phonedir")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DirectoryError::Config("Could not determine config dir".to_string()))
}
