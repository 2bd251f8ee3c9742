//! Settings file management.
//!
//! Persists plugin settings as a JSON object in `data.json`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::{AppError, PartialSettings, Result, Settings, SettingsStore};

/// Settings store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Store at `data.json` inside `data_dir`.
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: Settings::data_file(data_dir),
        }
    }

    /// Get the path to the settings file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn load(&self) -> Result<Option<PartialSettings>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::io(
                    format!("Failed to read settings file: {}", self.path.display()),
                    e,
                ))
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(AppError::json_parse)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::io("Failed to create settings directory", e))?;
        }

        let content = serde_json::to_string_pretty(settings).map_err(AppError::json_parse)?;

        tokio::fs::write(&self.path, content).await.map_err(|e| {
            AppError::io(
                format!("Failed to write settings file: {}", self.path.display()),
                e,
            )
        })?;

        tracing::info!(path = %self.path.display(), "Settings saved");

        Ok(())
    }
}
