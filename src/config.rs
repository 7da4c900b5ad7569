//! Explorer configuration.
//!
//! Configuration is an optional TOML file. Every key has a default, so an
//! empty or missing file yields [`Config::default`]. Unknown keys are rejected
//! to surface typos early.
//!
//! ```toml
//! # ~/.config/spacex-explorer/config.toml
//! api_base_url = "https://api.spacexdata.com/v4"
//! data_dir = "~/.local/share/spacex-explorer"
//! search_debounce_ms = 300
//! launches_ttl_secs = 300
//! rocket_ttl_secs = 600
//! request_timeout_secs = 10
//! theme = "catppuccin-mocha"
//! trace_level = "debug"
//! ```

use crate::domain::error::{ExplorerError, Result};
use crate::infrastructure::paths;
use crate::source::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime configuration for the explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the launch API, without trailing slash.
    pub api_base_url: String,

    /// Directory holding the favorites file and the log file.
    ///
    /// `None` selects the platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Quiet period before typed search text is applied.
    pub search_debounce_ms: u64,

    /// How long a fetched launch list stays fresh.
    pub launches_ttl_secs: u64,

    /// How long a fetched rocket stays fresh.
    pub rocket_ttl_secs: u64,

    /// Per-request timeout for the launch API.
    pub request_timeout_secs: u64,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `spacex_explorer=trace`.
    ///
    /// `RUST_LOG` and `--log-level` take precedence.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            data_dir: None,
            search_debounce_ms: 300,
            launches_ttl_secs: 5 * 60,
            rocket_ttl_secs: 10 * 60,
            request_timeout_secs: 10,
            theme: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the platform config file is
    /// read when present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if the file cannot be read or is not
    /// valid configuration TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => Some(paths::expand_tilde(path)),
            None => paths::default_config_file().filter(|p| p.is_file()),
        };

        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(&path).map_err(|e| {
            ExplorerError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::from_toml(&contents)
            .map_err(|e| ExplorerError::Config(format!("{}: {e}", path.display())))
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] on invalid TOML, unknown keys or
    /// mistyped values.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacex_explorer::Config;
    ///
    /// let config = Config::from_toml("search_debounce_ms = 150")?;
    /// assert_eq!(config.search_debounce_ms, 150);
    /// assert_eq!(config.request_timeout_secs, 10);
    /// # Ok::<(), spacex_explorer::ExplorerError>(())
    /// ```
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| ExplorerError::Config(e.to_string()))?;

        config.data_dir = config.data_dir.map(paths::expand_tilde);
        config.theme_file = config.theme_file.map(paths::expand_tilde);
        Ok(config)
    }

    /// Data directory to use, falling back to the platform default.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(paths::default_data_dir)
    }

    /// Search debounce delay.
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").expect("empty config parses");
        assert_eq!(config, Config::default());
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.launches_ttl_secs, 300);
        assert_eq!(config.rocket_ttl_secs, 600);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("scan_depth = 4").expect_err("unknown key");
        assert!(matches!(err, ExplorerError::Config(_)));
    }

    #[test]
    fn mistyped_values_are_rejected() {
        let err = Config::from_toml("search_debounce_ms = \"fast\"").expect_err("bad type");
        assert!(matches!(err, ExplorerError::Config(_)));
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "api_base_url = \"http://localhost:9000/v4\"\ndata_dir = \"/srv/launches\"\ntheme = \"catppuccin-latte\""
        )
        .expect("write config");

        let config = Config::load(Some(file.path())).expect("config loads");
        assert_eq!(config.api_base_url, "http://localhost:9000/v4");
        assert_eq!(config.data_dir(), PathBuf::from("/srv/launches"));
        assert_eq!(config.theme.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Config::load(Some(&dir.path().join("absent.toml"))).expect_err("missing file");
        assert!(matches!(err, ExplorerError::Config(_)));
    }
}
