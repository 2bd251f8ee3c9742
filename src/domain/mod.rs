//! Domain layer - core types, settings and host capabilities.
//!
//! This layer contains plain data models, error types and the traits
//! the host application has to provide, without any concrete IO.

pub mod error;
pub mod host;
pub mod models;
pub mod settings;

pub use error::{AppError, Result};
pub use host::{
    ActivationLifecycle, MetadataCache, Notifier, SettingsPanel, SettingsStore,
    Vault, Workspace,
};
pub use models::{
    ActiveNote, ExportOutcome, ExportRecord, NoteMetadata, TagDescriptor, UploadOutcome,
    UPLOAD_FAILURE_NOTICE, UPLOAD_SUCCESS_NOTICE,
};
pub use settings::{PartialSettings, Settings};
