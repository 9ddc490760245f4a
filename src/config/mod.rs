//! Configuration management.
//!
//! Settings come from an optional TOML file overlaid with `PAPER_FINDER_*`
//! environment variables (nested keys use `__`, e.g.
//! `PAPER_FINDER_HTTP__TIMEOUT_SECS=10`). Every value has a default.
//!
//! ```toml
//! [source]
//! local_path = "paperdata.xlsx"
//! sheet_url = "https://docs.google.com/spreadsheets/d/<id>/edit?gid=0"
//!
//! [search]
//! default_strategy = "binary"
//! default_field = "title"
//!
//! [http]
//! timeout_secs = 30
//! max_attempts = 3
//!
//! [logging]
//! level = "warn"
//! format = "json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::{SearchField, SearchStrategy};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "paper-finder.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where data is loaded from
    #[serde(default)]
    pub source: SourceConfig,

    /// Search defaults for the non-interactive command
    #[serde(default)]
    pub search: SearchConfig,

    /// HTTP settings for online sheets
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data source defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Local spreadsheet offered by default
    #[serde(default = "default_local_path")]
    pub local_path: PathBuf,

    /// Google Sheets sharing URL offered by default
    #[serde(default)]
    pub sheet_url: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            local_path: default_local_path(),
            sheet_url: None,
        }
    }
}

fn default_local_path() -> PathBuf {
    PathBuf::from("paperdata.xlsx")
}

/// Search defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub default_strategy: SearchStrategy,

    #[serde(default)]
    pub default_field: SearchField,
}

/// HTTP configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Attempts per download, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl HttpConfig {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    3
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level used when no `-v` flag or `RUST_LOG` is given
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `"json"` for JSON lines, anything else for human-readable text
    #[serde(default)]
    pub format: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: None,
        }
    }
}

impl LoggingConfig {
    /// Whether JSON log lines were requested
    pub fn is_json(&self) -> bool {
        self.format
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Load configuration from an optional file plus the environment
pub fn load_config(path: Option<&Path>) -> Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix("PAPER_FINDER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Find a configuration file in the working directory or the user config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("paper-finder").join("config.toml"))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.local_path, PathBuf::from("paperdata.xlsx"));
        assert_eq!(config.search.default_strategy, SearchStrategy::Linear);
        assert_eq!(config.search.default_field, SearchField::Title);
        assert_eq!(config.http.timeout(), Duration::from_secs(30));
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_config_file_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let toml_content = r#"
[source]
local_path = "/data/papers.csv"
sheet_url = "https://docs.google.com/spreadsheets/d/abc/edit?gid=1"

[search]
default_strategy = "binary"
default_field = "author"

[http]
timeout_secs = 5
max_attempts = 5

[logging]
level = "debug"
format = "JSON"
"#;

        let mut file = File::create(&path).unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(Some(path.as_path())).unwrap();

        assert_eq!(config.source.local_path, PathBuf::from("/data/papers.csv"));
        assert!(config.source.sheet_url.is_some());
        assert_eq!(config.search.default_strategy, SearchStrategy::Binary);
        assert_eq!(config.search.default_field, SearchField::Author);
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.max_attempts, 5);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_http_attempts_default() {
        let config: Config = toml::from_str("[http]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.http.max_attempts, 3);
        assert_eq!(config.http.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/config.toml");
        assert!(load_config(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_config_file_invalid_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.toml");
        std::fs::write(&path, "[search]\ndefault_strategy = \"hash\"\n").unwrap();

        assert!(load_config(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let mut config = Config::default();
        config.search.default_strategy = SearchStrategy::Binary;

        let rendered = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
