//! Domain models for note exports.
//!
//! These models describe what is read from the host (notes, tag metadata)
//! and what is sent over the wire (the export record).

use std::path::PathBuf;

use serde::Serialize;

/// Notice shown when the endpoint answered with status 200.
pub const UPLOAD_SUCCESS_NOTICE: &str = "Note successfully uploaded.";

/// Notice shown for any other status or a transport failure.
pub const UPLOAD_FAILURE_NOTICE: &str = "Something went wrong when uploading!";

/// The payload posted to the remote endpoint.
///
/// Serializes to exactly `name`, `tags`, `content` and `group`; absent
/// values become JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    /// File name of the active note.
    pub name: Option<String>,
    /// Tag labels with their leading marker removed.
    pub tags: Vec<String>,
    /// Note body with the tag header stripped.
    pub content: Option<String>,
    /// Group label, only set once the upload prompt is confirmed.
    pub group: Option<String>,
}

impl ExportRecord {
    /// Record used when no note is open.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Handle to the note currently open in the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNote {
    /// File name including extension, e.g. `meeting.md`.
    pub name: String,
    /// Location of the note inside the vault.
    pub path: PathBuf,
}

impl ActiveNote {
    /// Create a handle from a note path, deriving the display name.
    ///
    /// Bytes that are not valid UTF-8 are replaced, never dropped.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self { name, path }
    }
}

/// One tag occurrence as reported by the metadata cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
    /// Tag text including its marker, e.g. `#work`.
    pub tag: String,
}

impl TagDescriptor {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

/// Cached metadata for a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMetadata {
    /// Tag occurrences; `None` when the cache has no tag section at all.
    pub tags: Option<Vec<TagDescriptor>>,
}

/// Result of a single submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The endpoint answered with status 200.
    Uploaded,
    /// The endpoint answered with any other status.
    Rejected(u16),
    /// No response was obtained.
    TransportFailed(String),
}

impl UploadOutcome {
    /// The notice to show the user for this outcome.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::Uploaded => UPLOAD_SUCCESS_NOTICE,
            Self::Rejected(_) | Self::TransportFailed(_) => UPLOAD_FAILURE_NOTICE,
        }
    }
}

impl std::fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uploaded => write!(f, "uploaded"),
            Self::Rejected(status) => write!(f, "rejected with status {status}"),
            Self::TransportFailed(reason) => write!(f, "transport failure: {reason}"),
        }
    }
}

/// How an export action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The prompt was dismissed; nothing was sent.
    Cancelled,
    /// The prompt was confirmed and one upload was attempted.
    Submitted(UploadOutcome),
}
