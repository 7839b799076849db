use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{CONFIG_DIR, CONFIG_FILE, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENTRIES_PATH};

/// Client settings, read from `~/.tagboard/config.yaml`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Host and port of the entry service, e.g. `http://localhost:8000`
    pub base_url: String,
    pub timeout_secs: u64,
    /// Shown once at startup when set. Never blocks.
    pub startup_notice: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            startup_notice: None,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load from the default location, falling back to defaults if there is no file
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_yaml::from_str::<Config>(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Full URL of the entries collection
    pub fn entries_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ENTRIES_PATH)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.entries_url(), "http://localhost:8000/entries/");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.startup_notice.is_none());
    }

    #[test]
    fn test_entries_url_trims_trailing_slash() {
        let config = Config {
            base_url: "http://example.test:9000/".into(),
            ..Config::default()
        };
        assert_eq!(config.entries_url(), "http://example.test:9000/entries/");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "base_url: http://10.0.0.2:8000\nstartup_notice: hello\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:8000");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.startup_notice.as_deref(), Some("hello"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "timeout_secs: [not, a, number]\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "base_url: http://pantry.local:8000/\ntimeout_secs: 5\nstartup_notice: null\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config,
            Config {
                base_url: "http://pantry.local:8000/".into(),
                timeout_secs: 5,
                startup_notice: None,
            }
        );
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.entries_url(), "http://pantry.local:8000/entries/");
    }
}
