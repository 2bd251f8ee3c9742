//! Plugin settings.
//!
//! The only state that outlives a single export: the endpoint URL.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default endpoint value used when nothing has been stored yet.
pub const DEFAULT_URL: &str = "url";

/// Persisted plugin settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Destination endpoint for uploads.
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

/// Settings as found in storage; any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialSettings {
    #[serde(default)]
    pub url: Option<String>,
}

impl Settings {
    /// Merge stored values over the defaults.
    #[must_use]
    pub fn merged(stored: Option<PartialSettings>) -> Self {
        let mut settings = Self::default();
        if let Some(url) = stored.and_then(|s| s.url) {
            settings.url = url;
        }
        settings
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("note-uploader")
    }

    /// Path of the settings file inside a data directory.
    #[must_use]
    pub fn data_file(data_dir: &std::path::Path) -> PathBuf {
        data_dir.join("data.json")
    }
}
