//! Submission of export records.

use reqwest::StatusCode;

use crate::domain::{AppError, ExportRecord, Result, UploadOutcome};

/// Posts export records to the configured endpoint.
///
/// One request per call: no retry, no timeout.
#[derive(Debug, Clone)]
pub struct Uploader {
    client: reqwest::Client,
}

impl Uploader {
    /// Create an uploader with a fresh HTTP client.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("note-uploader/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppError::http)?;

        Ok(Self { client })
    }

    /// POSTs `record` as JSON to `url` and classifies the response.
    ///
    /// Only the status code is inspected. Status 200 is success; any other
    /// status is a rejection; no response at all is a transport failure.
    pub async fn upload_note(&self, url: &str, record: &ExportRecord) -> UploadOutcome {
        let response = match self.client.post(url).json(record).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(url, error = %e, "Upload failed before a response arrived");
                return UploadOutcome::TransportFailed(e.to_string());
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            tracing::info!(url, name = ?record.name, "Note uploaded");
            UploadOutcome::Uploaded
        } else {
            tracing::warn!(url, status = status.as_u16(), "Upload rejected");
            UploadOutcome::Rejected(status.as_u16())
        }
    }
}
