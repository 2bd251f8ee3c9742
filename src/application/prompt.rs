//! Upload prompt.
//!
//! [`UploadModal`] is the group-label dialog as a small state machine. A
//! [`DialogSurface`] renders it and turns user input into `on_change`,
//! `confirm` and `dismiss` calls.

use async_trait::async_trait;

use crate::domain::{ExportRecord, Result};

/// Continuation run once the user confirms the prompt.
pub type SubmitFn = Box<dyn FnOnce(ExportRecord) + Send>;

/// Lifecycle of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Open,
    Closed,
}

/// What a surface should draw for the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub heading: &'static str,
    pub field_label: &'static str,
    pub button_text: &'static str,
    /// Text typed so far, if any.
    pub value: Option<String>,
}

/// Dialog collecting the group label for one export.
///
/// A modal is used once: after `confirm` or `dismiss` it stays closed and
/// ignores further input.
pub struct UploadModal {
    state: ModalState,
    note: Option<ExportRecord>,
    result: Option<String>,
    on_submit: Option<SubmitFn>,
}

impl UploadModal {
    pub const HEADING: &'static str = "Uploading note";
    pub const FIELD_LABEL: &'static str = "Group";
    pub const BUTTON_TEXT: &'static str = "Submit";

    /// Opens a modal for `note`; `on_submit` runs only on confirm.
    pub fn new(note: ExportRecord, on_submit: impl FnOnce(ExportRecord) + Send + 'static) -> Self {
        Self {
            state: ModalState::Open,
            note: Some(note),
            result: None,
            on_submit: Some(Box::new(on_submit)),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    #[must_use]
    pub fn render(&self) -> ModalView {
        ModalView {
            heading: Self::HEADING,
            field_label: Self::FIELD_LABEL,
            button_text: Self::BUTTON_TEXT,
            value: self.result.clone(),
        }
    }

    /// Buffers the latest text of the group field.
    pub fn on_change(&mut self, value: impl Into<String>) {
        if self.is_open() {
            self.result = Some(value.into());
        }
    }

    /// Closes the modal and hands the completed record to the continuation.
    ///
    /// An untouched field submits an empty group.
    pub fn confirm(&mut self) {
        if !self.is_open() {
            return;
        }
        self.state = ModalState::Closed;

        let (Some(mut note), Some(on_submit)) = (self.note.take(), self.on_submit.take()) else {
            return;
        };
        note.group = Some(self.result.take().unwrap_or_default());
        tracing::debug!(group = ?note.group, "Upload prompt confirmed");
        on_submit(note);
    }

    /// Closes the modal without submitting.
    pub fn dismiss(&mut self) {
        if !self.is_open() {
            return;
        }
        self.state = ModalState::Closed;
        self.on_submit = None;
        self.note = None;
        self.result = None;
        tracing::debug!("Upload prompt dismissed");
    }
}

impl std::fmt::Debug for UploadModal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadModal")
            .field("state", &self.state)
            .field("note", &self.note)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

/// Something that can show an [`UploadModal`] to the user.
#[async_trait]
pub trait DialogSurface: Send {
    /// Drive the modal until it is closed, by confirm or by dismiss.
    ///
    /// # Errors
    /// Returns error if user input cannot be read.
    async fn present(&mut self, modal: &mut UploadModal) -> Result<()>;
}

/// Surface that answers the prompt with a fixed group, without user input.
#[derive(Debug, Clone)]
pub struct PresetDialog {
    group: String,
}

impl PresetDialog {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
        }
    }
}

#[async_trait]
impl DialogSurface for PresetDialog {
    async fn present(&mut self, modal: &mut UploadModal) -> Result<()> {
        let view = modal.render();
        tracing::debug!(field = view.field_label, value = %self.group, "Answering prompt");

        modal.on_change(self.group.clone());
        modal.confirm();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recording_modal() -> (UploadModal, Arc<Mutex<Vec<ExportRecord>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let note = ExportRecord {
            name: Some("a.md".into()),
            ..ExportRecord::default()
        };
        let modal = UploadModal::new(note, move |record| sink.lock().unwrap().push(record));
        (modal, calls)
    }

    #[test]
    fn test_render_layout() {
        let (modal, _) = recording_modal();
        let view = modal.render();

        assert_eq!(view.heading, "Uploading note");
        assert_eq!(view.field_label, "Group");
        assert_eq!(view.button_text, "Submit");
        assert_eq!(view.value, None);
    }

    #[test]
    fn test_confirm_uses_last_value() {
        let (mut modal, calls) = recording_modal();
        modal.on_change("w");
        modal.on_change("work");
        modal.on_change("work-2");
        modal.confirm();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].group.as_deref(), Some("work-2"));
        assert_eq!(calls[0].name.as_deref(), Some("a.md"));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_confirm_runs_once() {
        let (mut modal, calls) = recording_modal();
        modal.on_change("g");
        modal.confirm();
        modal.confirm();
        modal.on_change("late");
        modal.dismiss();

        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_untouched_field_submits_empty_group() {
        let (mut modal, calls) = recording_modal();
        modal.confirm();

        assert_eq!(calls.lock().unwrap()[0].group.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_string_is_valid() {
        let (mut modal, calls) = recording_modal();
        modal.on_change("something");
        modal.on_change("");
        modal.confirm();

        assert_eq!(calls.lock().unwrap()[0].group.as_deref(), Some(""));
    }

    #[test]
    fn test_dismiss_never_submits() {
        let (mut modal, calls) = recording_modal();
        modal.on_change("work");
        modal.dismiss();
        modal.confirm();

        assert!(calls.lock().unwrap().is_empty());
        assert!(!modal.is_open());
    }

    #[tokio::test]
    async fn test_preset_dialog_confirms() {
        let (mut modal, calls) = recording_modal();
        PresetDialog::new("inbox").present(&mut modal).await.unwrap();

        assert_eq!(calls.lock().unwrap()[0].group.as_deref(), Some("inbox"));
    }
}
