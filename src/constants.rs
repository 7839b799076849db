//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the entry service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the entries collection, relative to the base URL
pub const ENTRIES_PATH: &str = "/entries/";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory under $HOME holding the config file
pub const CONFIG_DIR: &str = ".tagboard";

/// Config file name inside CONFIG_DIR
pub const CONFIG_FILE: &str = "config.yaml";

/// Log file written by the binary
pub const LOG_FILE: &str = "tagboard.log";

/// Application name
pub const APP_NAME: &str = "Tagboard";
