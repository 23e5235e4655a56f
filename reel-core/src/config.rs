//! Application configuration
//!
//! Dev mode loads from `.env` (via dotenvy); production reads
//! `~/.reel/config.yaml`. The TMDB API key is the only secret; it is
//! supplied by the user and never written back by the app.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("No TMDB API key configured (set REEL_TMDB_API_KEY or api_key in {0})")]
    MissingApiKey(String),
}

/// YAML config file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigYaml {
    pub api_key: String,
    /// Override for where the favorites store lives. Defaults to the
    /// config file's own directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    /// Directory holding the favorites store.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let dev_mode = std::env::var("REEL_DEV_MODE").is_ok() || dotenvy::dotenv().is_ok();
        if dev_mode {
            info!("Dev mode activated - loading from environment");
            Self::from_env()
        } else {
            info!("Production mode - loading from config.yaml");
            Self::load_from_dir(&Self::default_app_dir())
        }
    }

    fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("REEL_TMDB_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(".env".to_string()))?;
        let data_dir = std::env::var("REEL_DATA_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_app_dir);
        Ok(Self { api_key, data_dir })
    }

    fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join("config.yaml");
        let display = config_path.display().to_string();
        let content = std::fs::read_to_string(&config_path)
            .map_err(|_| ConfigError::MissingApiKey(display.clone()))?;
        let yaml: ConfigYaml = serde_yaml::from_str(&content)?;
        if yaml.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey(display));
        }
        Ok(Self {
            api_key: yaml.api_key,
            data_dir: yaml.data_dir.unwrap_or_else(|| dir.to_path_buf()),
        })
    }

    fn default_app_dir() -> PathBuf {
        dirs::home_dir()
            .expect("Failed to get home directory")
            .join(".reel")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_from_dir_reads_yaml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.yaml"),
            "api_key: abc-123\n",
        )
        .unwrap();

        let config = Config::load_from_dir(tmp.path()).unwrap();
        assert_eq!(config.api_key, "abc-123");
        assert_eq!(config.data_dir, tmp.path());
    }

    #[test]
    fn data_dir_override_wins() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.yaml"),
            "api_key: abc-123\ndata_dir: /tmp/elsewhere\n",
        )
        .unwrap();

        let config = Config::load_from_dir(tmp.path()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn missing_config_file_reports_missing_key() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load_from_dir(tmp.path());
        assert!(matches!(result, Err(ConfigError::MissingApiKey(_))));
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.yaml"), "api_key: \"\"\n").unwrap();
        let result = Config::load_from_dir(tmp.path());
        assert!(matches!(result, Err(ConfigError::MissingApiKey(_))));
    }
}
