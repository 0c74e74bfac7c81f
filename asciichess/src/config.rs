//! Configuration for the asciichess runtime.
//!
//! Every value has a compile-time default and can be overridden via an
//! environment variable. Command-line flags take precedence over both.

use std::path::PathBuf;

use asciichess_core::STARTING_PLACEMENT;

/// Default directory for the rolling log files.
const DEFAULT_LOG_DIR: &str = "logs";

/// Prefix of the daily log file name inside the log directory.
pub const LOG_FILE_PREFIX: &str = "asciichess";

/// Get the directory log files are written to.
///
/// Priority:
/// 1. `ASCIICHESS_LOG_DIR` env variable if set
/// 2. `logs` relative to the working directory
pub fn get_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ASCIICHESS_LOG_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Get the FEN the board starts from.
///
/// Priority:
/// 1. `ASCIICHESS_START_FEN` env variable if set and not blank
/// 2. the standard starting placement
pub fn get_start_fen() -> String {
    match std::env::var("ASCIICHESS_START_FEN") {
        Ok(fen) if !fen.trim().is_empty() => fen,
        _ => STARTING_PLACEMENT.to_string(),
    }
}

/// Get the path of a JSON color scheme, if one is configured.
///
/// Reads `ASCIICHESS_COLOR_SCHEME`. When unset, the built-in scheme is used.
pub fn get_scheme_path() -> Option<PathBuf> {
    std::env::var_os("ASCIICHESS_COLOR_SCHEME").map(PathBuf::from)
}
