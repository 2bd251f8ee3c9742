//! Capabilities the exporter needs from its host application.
//!
//! Each trait is one collaborator the export flow talks to. The CLI binary
//! provides filesystem and terminal implementations; tests provide fakes.
//! The dialog capability lives next to the modal it drives, in
//! `application::prompt`.

use async_trait::async_trait;

use super::{ActiveNote, NoteMetadata, PartialSettings, Result, Settings};

/// Gives access to the note the user is looking at.
pub trait Workspace: Send + Sync {
    fn active_file(&self) -> Option<ActiveNote>;
}

/// Reads note contents.
#[async_trait]
pub trait Vault: Send + Sync {
    /// Full raw text of the note.
    async fn cached_read(&self, note: &ActiveNote) -> Result<String>;
}

/// Parsed metadata for notes.
pub trait MetadataCache: Send + Sync {
    fn file_cache(&self, note: &ActiveNote) -> Option<NoteMetadata>;
}

/// Durable key-value storage for [`Settings`].
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Stored settings, or `None` when nothing has been saved.
    async fn load(&self) -> Result<Option<PartialSettings>>;

    async fn save(&self, settings: &Settings) -> Result<()>;
}

/// Short-lived messages to the user.
pub trait Notifier: Send + Sync {
    fn notice(&self, message: &str);
}

/// Extension lifecycle hooks.
#[async_trait]
pub trait ActivationLifecycle {
    async fn on_activate(&mut self) -> Result<()>;

    async fn on_deactivate(&mut self) -> Result<()>;
}

/// A settings screen.
pub trait SettingsPanel {
    /// Rows shown to the user as `(label, value)`.
    fn display(&self) -> Vec<(String, String)>;
}
