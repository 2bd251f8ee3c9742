//! The export flow: extract, prompt, submit, notify.

use tokio::sync::oneshot;

use crate::domain::{
    ExportOutcome, MetadataCache, Notifier, Result, Settings, Vault, Workspace,
};

use super::extractor::build_record;
use super::prompt::{DialogSurface, UploadModal};
use super::uploader::Uploader;

/// Host services the export flow reads from and reports to.
#[derive(Clone, Copy)]
pub struct HostContext<'a> {
    pub workspace: &'a dyn Workspace,
    pub vault: &'a dyn Vault,
    pub metadata_cache: &'a dyn MetadataCache,
    pub notifier: &'a dyn Notifier,
}

/// Runs one export per call.
#[derive(Debug, Clone)]
pub struct NoteExporter {
    uploader: Uploader,
}

impl NoteExporter {
    #[must_use]
    pub const fn new(uploader: Uploader) -> Self {
        Self { uploader }
    }

    /// Exports the active note.
    ///
    /// Opens a fresh upload prompt on `dialog`. If the prompt is dismissed
    /// nothing is sent. If it is confirmed the record is posted once to
    /// `settings.url` and exactly one notice reports the result.
    ///
    /// # Errors
    /// Returns error if the note cannot be read or the dialog fails.
    pub async fn export(
        &self,
        host: HostContext<'_>,
        settings: &Settings,
        dialog: &mut dyn DialogSurface,
    ) -> Result<ExportOutcome> {
        let note = build_record(host.workspace, host.vault, host.metadata_cache).await?;

        let (tx, rx) = oneshot::channel();
        let mut modal = UploadModal::new(note, move |record| {
            // The receiver lives until this flow ends.
            let _ = tx.send(record);
        });

        dialog.present(&mut modal).await?;
        if modal.is_open() {
            modal.dismiss();
        }
        drop(modal);

        let Ok(record) = rx.await else {
            tracing::info!("Upload cancelled");
            return Ok(ExportOutcome::Cancelled);
        };

        let outcome = self.uploader.upload_note(&settings.url, &record).await;
        host.notifier.notice(outcome.notice());
        tracing::debug!(%outcome, "Export finished");

        Ok(ExportOutcome::Submitted(outcome))
    }
}
