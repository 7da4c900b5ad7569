//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the explorer keeps its favorites, log and configuration
//! files on the current platform.

pub mod paths;

pub use paths::{
    default_config_file, default_data_dir, expand_tilde, favorites_file, APP_DIR_NAME,
};
