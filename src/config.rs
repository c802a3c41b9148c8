//! User configuration
//!
//! Stores preferences in `~/.config/csvpad/config.yaml`:
//!
//! ```yaml
//! default_headers:
//!   - ID
//!   - Name
//! view:
//!   max_rows: 50
//!   max_column_width: 30
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Headers given to documents created with `csvpad new`
pub const DEFAULT_HEADERS: [&str; 8] = [
    "Type Parent Requirement",
    "ID",
    "Name",
    "Text",
    "Traced To",
    "Verified By",
    "Class",
    "Story",
];

/// Settings for the plain-text table view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Data rows shown before the "more rows" trailer
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
    /// Characters per column before truncation
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,
}

fn default_max_rows() -> usize {
    20
}

fn default_max_column_width() -> usize {
    20
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
            max_column_width: default_max_column_width(),
        }
    }
}

/// Configuration that persists across invocations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Header row for newly created documents
    #[serde(default = "default_headers")]
    pub default_headers: Vec<String>,
    /// Table view settings
    #[serde(default)]
    pub view: ViewConfig,
}

fn default_headers() -> Vec<String> {
    DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_headers: default_headers(),
            view: ViewConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the standard location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize to the YAML stored on disk
    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// Save config to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = self.to_yaml()?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
