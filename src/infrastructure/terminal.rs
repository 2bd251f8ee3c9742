//! Terminal surfaces: the interactive upload prompt and notices.

use async_trait::async_trait;
use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::application::{DialogSurface, UploadModal};
use crate::domain::{AppError, Notifier, Result, UPLOAD_SUCCESS_NOTICE};

/// Upload prompt read from a line-oriented input.
///
/// Entering a line types it into the group field and presses Submit.
/// End of input (Ctrl-D) dismisses the prompt.
pub struct TerminalDialog<R> {
    input: R,
}

impl TerminalDialog<BufReader<tokio::io::Stdin>> {
    /// Prompt on standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R> TerminalDialog<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub const fn new(input: R) -> Self {
        Self { input }
    }
}

#[async_trait]
impl<R> DialogSurface for TerminalDialog<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn present(&mut self, modal: &mut UploadModal) -> Result<()> {
        let view = modal.render();
        eprintln!("{}", view.heading.bold());
        eprint!(
            "{} {} ",
            format!("{}:", view.field_label).cyan(),
            format!("[Enter to {}, Ctrl-D to cancel]", view.button_text).dimmed()
        );

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .await
            .map_err(|e| AppError::io("Failed to read group", e))?;

        if read == 0 {
            eprintln!();
            modal.dismiss();
            return Ok(());
        }

        let value = line.trim_end_matches(['\r', '\n']);
        if !value.is_empty() {
            modal.on_change(value);
        }
        modal.confirm();
        Ok(())
    }
}

/// Prints notices to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notice(&self, message: &str) {
        if message == UPLOAD_SUCCESS_NOTICE {
            println!("{} {}", "✓".green().bold(), message);
        } else {
            println!("{} {}", "✗".red().bold(), message);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::ExportRecord;

    fn modal() -> (UploadModal, Arc<Mutex<Option<ExportRecord>>>) {
        let submitted = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&submitted);
        let modal = UploadModal::new(ExportRecord::empty(), move |record| {
            *sink.lock().unwrap() = Some(record);
        });
        (modal, submitted)
    }

    #[tokio::test]
    async fn test_line_confirms_with_group() {
        let (mut modal, submitted) = modal();
        let mut dialog = TerminalDialog::new(BufReader::new(&b"projects\r\n"[..]));
        dialog.present(&mut modal).await.unwrap();

        let record = submitted.lock().unwrap().clone().unwrap();
        assert_eq!(record.group.as_deref(), Some("projects"));
    }

    #[tokio::test]
    async fn test_empty_line_confirms_with_empty_group() {
        let (mut modal, submitted) = modal();
        let mut dialog = TerminalDialog::new(BufReader::new(&b"\n"[..]));
        dialog.present(&mut modal).await.unwrap();

        let record = submitted.lock().unwrap().clone().unwrap();
        assert_eq!(record.group.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_end_of_input_dismisses() {
        let (mut modal, submitted) = modal();
        let mut dialog = TerminalDialog::new(BufReader::new(&b""[..]));
        dialog.present(&mut modal).await.unwrap();

        assert!(submitted.lock().unwrap().is_none());
        assert!(!modal.is_open());
    }
}
