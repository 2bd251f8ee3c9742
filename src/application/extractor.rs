//! Note extraction.
//!
//! Reads the active note from the host and builds the record that the
//! upload prompt will complete.

use crate::domain::{ExportRecord, MetadataCache, Result, Vault, Workspace};

use super::transform::{extract_content_after_tags, strip_tag_markers};

/// Builds an export record for whatever note is active.
///
/// With no active note the record is empty: no name, no content, no tags.
/// The group is always left unset.
///
/// # Errors
/// Returns error if the host cannot read the note contents.
pub async fn build_record(
    workspace: &dyn Workspace,
    vault: &dyn Vault,
    metadata_cache: &dyn MetadataCache,
) -> Result<ExportRecord> {
    let Some(note) = workspace.active_file() else {
        tracing::info!("No active note, exporting an empty record");
        return Ok(ExportRecord::empty());
    };

    let raw = vault.cached_read(&note).await?;
    let content = extract_content_after_tags(&raw);

    let tags = metadata_cache
        .file_cache(&note)
        .and_then(|meta| meta.tags)
        .map(|descriptors| strip_tag_markers(&descriptors))
        .unwrap_or_default();

    tracing::debug!(
        name = %note.name,
        tags = tags.len(),
        bytes = content.len(),
        "Extracted note"
    );

    Ok(ExportRecord {
        name: Some(note.name),
        tags,
        content: Some(content),
        group: None,
    })
}
