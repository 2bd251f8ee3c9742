//! Plugin lifecycle, ribbon action and settings tab.
//!
//! [`NoteUploaderPlugin`] owns the settings and their store. Settings are
//! loaded on activation and handed by reference to each export.

use async_trait::async_trait;

use crate::domain::{
    ActivationLifecycle, ExportOutcome, Result, Settings, SettingsPanel, SettingsStore,
};

use super::exporter::{HostContext, NoteExporter};
use super::prompt::DialogSurface;

/// A user-triggerable action registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RibbonIcon {
    pub icon: &'static str,
    pub title: &'static str,
}

/// The note upload extension.
pub struct NoteUploaderPlugin {
    settings: Settings,
    store: Box<dyn SettingsStore>,
    exporter: NoteExporter,
}

impl NoteUploaderPlugin {
    pub const RIBBON: RibbonIcon = RibbonIcon {
        icon: "upload",
        title: "Upload to Very Simple Notes",
    };

    /// Create an inactive plugin with default settings.
    #[must_use]
    pub fn new(store: Box<dyn SettingsStore>, exporter: NoteExporter) -> Self {
        Self {
            settings: Settings::default(),
            store,
            exporter,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Reload settings, merging what is stored over the defaults.
    ///
    /// A failed or corrupt load counts as nothing stored.
    pub async fn load_settings(&mut self) {
        let stored = match self.store.load().await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable settings");
                None
            }
        };
        self.settings = Settings::merged(stored);
        tracing::debug!(url = %self.settings.url, "Settings loaded");
    }

    /// Persist the current settings.
    ///
    /// # Errors
    /// Returns error if the store cannot write.
    pub async fn save_settings(&self) -> Result<()> {
        self.store.save(&self.settings).await
    }

    /// The action to register with the host ribbon.
    #[must_use]
    pub const fn ribbon_icon(&self) -> RibbonIcon {
        Self::RIBBON
    }

    /// Handler for the ribbon action: runs one export.
    ///
    /// # Errors
    /// Returns error if the note cannot be read or the dialog fails.
    pub async fn on_ribbon_click(
        &self,
        host: HostContext<'_>,
        dialog: &mut dyn DialogSurface,
    ) -> Result<ExportOutcome> {
        self.exporter.export(host, &self.settings, dialog).await
    }

    /// Settings screen bound to this plugin.
    pub fn settings_tab(&mut self) -> SettingsTab<'_> {
        SettingsTab { plugin: self }
    }
}

#[async_trait]
impl ActivationLifecycle for NoteUploaderPlugin {
    async fn on_activate(&mut self) -> Result<()> {
        self.load_settings().await;
        let ribbon = self.ribbon_icon();
        tracing::info!(icon = ribbon.icon, title = ribbon.title, "Plugin activated");
        Ok(())
    }

    async fn on_deactivate(&mut self) -> Result<()> {
        tracing::debug!("Plugin deactivated");
        Ok(())
    }
}

/// Settings screen with a single "Upload url" field.
pub struct SettingsTab<'a> {
    plugin: &'a mut NoteUploaderPlugin,
}

impl SettingsTab<'_> {
    pub const URL_LABEL: &'static str = "Upload url";

    /// Applies an edit to the url field and saves it right away.
    ///
    /// The value is not validated.
    ///
    /// # Errors
    /// Returns error if the settings cannot be saved.
    pub async fn on_url_change(&mut self, value: impl Into<String>) -> Result<()> {
        self.plugin.settings.url = value.into();
        self.plugin.save_settings().await?;
        tracing::info!(url = %self.plugin.settings.url, "Upload url updated");
        Ok(())
    }
}

impl SettingsPanel for SettingsTab<'_> {
    fn display(&self) -> Vec<(String, String)> {
        vec![(Self::URL_LABEL.to_string(), self.plugin.settings.url.clone())]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::exporter::tests::FakeHost;
    use crate::application::prompt::PresetDialog;
    use crate::application::Uploader;
    use crate::domain::{AppError, PartialSettings, UploadOutcome};

    /// Store that keeps the last saved value in memory.
    #[derive(Default, Clone)]
    struct MemoryStore {
        saved: Arc<Mutex<Option<Settings>>>,
        broken: bool,
    }

    #[async_trait]
    impl SettingsStore for MemoryStore {
        async fn load(&self) -> Result<Option<PartialSettings>> {
            if self.broken {
                let err = serde_json::from_str::<Settings>("{corrupt").unwrap_err();
                return Err(AppError::json_parse(err));
            }
            Ok(self.saved.lock().unwrap().as_ref().map(|s| PartialSettings {
                url: Some(s.url.clone()),
            }))
        }

        async fn save(&self, settings: &Settings) -> Result<()> {
            *self.saved.lock().unwrap() = Some(settings.clone());
            Ok(())
        }
    }

    fn plugin(store: MemoryStore) -> NoteUploaderPlugin {
        NoteUploaderPlugin::new(
            Box::new(store),
            NoteExporter::new(Uploader::new().unwrap()),
        )
    }

    #[tokio::test]
    async fn test_activate_without_stored_settings() {
        let mut plugin = plugin(MemoryStore::default());
        plugin.on_activate().await.unwrap();

        assert_eq!(plugin.settings().url, "url");
    }

    #[tokio::test]
    async fn test_broken_store_falls_back_to_default() {
        let mut plugin = plugin(MemoryStore {
            broken: true,
            ..MemoryStore::default()
        });
        plugin.on_activate().await.unwrap();

        assert_eq!(plugin.settings().url, "url");
    }

    #[tokio::test]
    async fn test_url_edit_persists_immediately() {
        let store = MemoryStore::default();
        let mut first = plugin(store.clone());
        first.on_activate().await.unwrap();
        first
            .settings_tab()
            .on_url_change("https://example.com/x")
            .await
            .unwrap();

        assert_eq!(
            store.saved.lock().unwrap().as_ref().map(|s| s.url.clone()),
            Some("https://example.com/x".to_string())
        );

        let mut second = plugin(store);
        second.on_activate().await.unwrap();
        assert_eq!(second.settings().url, "https://example.com/x");
        assert_eq!(
            second.settings_tab().display(),
            vec![("Upload url".to_string(), "https://example.com/x".to_string())]
        );
    }

    #[tokio::test]
    async fn test_ribbon_click_uses_loaded_url() {
        let store = MemoryStore::default();
        let mut plugin = plugin(store);
        plugin.on_activate().await.unwrap();

        assert_eq!(plugin.ribbon_icon().icon, "upload");

        let host = FakeHost::with_note("body", vec![]);
        let outcome = plugin
            .on_ribbon_click(host.context(), &mut PresetDialog::new("g"))
            .await
            .unwrap();

        // The default url is not a valid endpoint.
        assert!(matches!(
            outcome,
            ExportOutcome::Submitted(UploadOutcome::TransportFailed(_))
        ));
        plugin.on_deactivate().await.unwrap();
    }
}
