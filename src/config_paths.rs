//! Where csvpad keeps its own files
//!
//! Everything lives under one directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME/csvpad/`, else `~/.config/csvpad/`
//! - Windows: `%APPDATA%\csvpad\`
//!
//! ```text
//! csvpad/
//! ├── config.yaml
//! └── logs/
//!     └── csvpad.log.YYYY-MM-DD   (one per day)
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "csvpad";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// File name prefix of the daily log files
pub const LOG_FILE_PREFIX: &str = "csvpad.log";

/// Base directory for csvpad's config and logs
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|base| base.join(APP_DIR))
    }
}

/// Default config file, used when `--config` is not given
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs dir (and its parents), returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}

/// Most recent daily log file, if logging has written one yet
pub fn latest_log_file() -> Option<PathBuf> {
    latest_log_in(&logs_dir()?)
}

/// Most recent `csvpad.log*` file in `dir`
///
/// Rotated names end in an ISO date, so the greatest name is the newest.
pub fn latest_log_in(dir: &Path) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX))
        })
        .map(|entry| entry.path())
        .max()
}
