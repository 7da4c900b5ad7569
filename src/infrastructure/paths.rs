//! Platform directory lookup and path normalization.
//!
//! The explorer keeps two things on disk: the favorites file and the log file,
//! both under the data directory. Configuration is read from the platform
//! config directory. Directory names come from `dirs`; when the platform has
//! no answer the current directory is used so the tool still runs.

use std::path::{Path, PathBuf};

/// Directory name used under the platform data and config directories.
pub const APP_DIR_NAME: &str = "spacex-explorer";

/// File name of the favorites store inside the data directory.
pub const FAVORITES_FILE: &str = "favorites.json";

/// File name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Returns the default data directory, e.g. `~/.local/share/spacex-explorer`.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Returns the default config file path, e.g. `~/.config/spacex-explorer/config.toml`.
///
/// `None` when the platform has no config directory.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE))
}

/// Path of the favorites file under `data_dir`.
#[must_use]
pub fn favorites_file(data_dir: &Path) -> PathBuf {
    data_dir.join(FAVORITES_FILE)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and every path when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use spacex_explorer::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/var/lib/launches"), PathBuf::from("/var/lib/launches"));
/// assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
/// ```
#[must_use]
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("~/launches"), home.join("launches"));
    }

    #[test]
    fn tilde_inside_a_name_is_left_alone() {
        assert_eq!(expand_tilde("~backup/x"), PathBuf::from("~backup/x"));
        assert_eq!(expand_tilde("/tmp/~"), PathBuf::from("/tmp/~"));
    }

    #[test]
    fn data_paths_are_namespaced() {
        assert!(default_data_dir().ends_with(APP_DIR_NAME));
        assert_eq!(
            favorites_file(Path::new("/data")),
            PathBuf::from("/data/favorites.json")
        );
    }
}
