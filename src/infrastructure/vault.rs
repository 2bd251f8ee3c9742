//! Filesystem-backed note host.
//!
//! Treats a markdown file on disk as the active note. The note is read
//! once when the vault is opened; contents and tag metadata both come
//! from that single read.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::domain::{
    ActiveNote, AppError, MetadataCache, NoteMetadata, Result, TagDescriptor, Vault, Workspace,
};

// A tag starts a line or follows whitespace; `#` must be followed directly
// by tag characters, so `# Heading` is not a tag.
#[allow(clippy::expect_used)]
static INLINE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:^|\s)(#[\p{L}\p{N}_/-]+)").expect("inline tag pattern")
});

/// The loaded active note.
#[derive(Debug, Clone)]
struct LoadedNote {
    path: PathBuf,
    text: String,
}

/// A note on disk, or nothing when no note is open.
#[derive(Debug, Clone, Default)]
pub struct FsVault {
    active: Option<LoadedNote>,
}

impl FsVault {
    /// Open `note` as the active note and read its contents.
    ///
    /// A path that is not an existing file leaves the vault with no active
    /// note.
    ///
    /// # Errors
    /// Returns error if the note exists but cannot be read.
    pub async fn open(note: Option<&Path>) -> Result<Self> {
        let Some(path) = note else {
            return Ok(Self::default());
        };

        let is_file = tokio::fs::metadata(path)
            .await
            .is_ok_and(|meta| meta.is_file());
        if !is_file {
            tracing::warn!(path = %path.display(), "Note not found, nothing is active");
            return Ok(Self::default());
        }

        let text = read_note(path).await?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "Note loaded");

        Ok(Self {
            active: Some(LoadedNote {
                path: path.to_path_buf(),
                text,
            }),
        })
    }

    fn loaded(&self, note: &ActiveNote) -> Option<&LoadedNote> {
        self.active.as_ref().filter(|loaded| loaded.path == note.path)
    }
}

async fn read_note(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::io(format!("Failed to read note: {}", path.display()), e))
}

impl Workspace for FsVault {
    fn active_file(&self) -> Option<ActiveNote> {
        self.active
            .as_ref()
            .map(|loaded| ActiveNote::from_path(loaded.path.clone()))
    }
}

#[async_trait]
impl Vault for FsVault {
    async fn cached_read(&self, note: &ActiveNote) -> Result<String> {
        match self.loaded(note) {
            Some(loaded) => Ok(loaded.text.clone()),
            None => read_note(&note.path).await,
        }
    }
}

impl MetadataCache for FsVault {
    fn file_cache(&self, note: &ActiveNote) -> Option<NoteMetadata> {
        self.loaded(note).map(|loaded| scan_metadata(&loaded.text))
    }
}

/// Builds note metadata from raw text.
///
/// Notes without tags get no tag section, matching what note hosts report.
pub fn scan_metadata(text: &str) -> NoteMetadata {
    let tags = find_inline_tags(text);
    NoteMetadata {
        tags: (!tags.is_empty()).then_some(tags),
    }
}

/// All inline tag occurrences in order of appearance.
///
/// Fenced code blocks are skipped and purely numeric tags like `#123`
/// are ignored.
pub fn find_inline_tags(text: &str) -> Vec<TagDescriptor> {
    let mut tags = Vec::new();
    // Marker of the open fence; a fence only closes on the same marker.
    let mut fence: Option<&str> = None;

    for line in text.lines() {
        let trimmed = line.trim_start();
        if let Some(marker) = ["```", "~~~"].into_iter().find(|m| trimmed.starts_with(*m)) {
            match fence {
                None => fence = Some(marker),
                Some(open) if open == marker => fence = None,
                Some(_) => {}
            }
            continue;
        }
        if fence.is_some() {
            continue;
        }

        for caps in INLINE_TAG_RE.captures_iter(line) {
            let tag = &caps[1];
            if tag[1..].chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            tags.push(TagDescriptor::new(tag));
        }
    }

    tags
}
