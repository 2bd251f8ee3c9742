//! Application layer - use cases and orchestration.
//!
//! This layer contains the export flow: reading the active note,
//! transforming it, prompting for a group and uploading the result.

pub mod exporter;
pub mod extractor;
pub mod plugin;
pub mod prompt;
pub mod transform;
pub mod uploader;

pub use exporter::{HostContext, NoteExporter};
pub use extractor::build_record;
pub use plugin::NoteUploaderPlugin;
pub use prompt::{DialogSurface, PresetDialog, UploadModal};
pub use uploader::Uploader;
