//! Structured logging to a rotating file.
//!
//! The explorer never logs to the terminal it draws on. Everything goes
//! through `tracing` macros and ends up as JSON lines in the data directory:
//!
//! ```text
//! tracing macros → EnvFilter → fmt::layer().json() → FileWriter → spacex-explorer.log
//! ```
//!
//! # Filter Resolution
//!
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `--log-level` flag, folded into `trace_level` by the binary
//! 3. `trace_level` in the config file
//! 4. Default: `"info"`

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
