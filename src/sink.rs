//! Destinations for submitted forms

use crate::state::SubmissionResult;
use thiserror::Error;

/// Errors raised while delivering a submission
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("could not encode submission: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Receives every successful submission
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;

    fn deliver(&mut self, result: &SubmissionResult) -> Result<(), SinkError>;
}

/// Writes the submission record to the log
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    fn deliver(&mut self, result: &SubmissionResult) -> Result<(), SinkError> {
        let record = serde_json::to_string(result)?;
        tracing::info!(target: "contact_form::submission", %record, "form data");
        Ok(())
    }
}

/// Copies the submission record to the system clipboard
#[derive(Debug, Default)]
pub struct ClipboardSink;

impl SubmissionSink for ClipboardSink {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn deliver(&mut self, result: &SubmissionResult) -> Result<(), SinkError> {
        copy_to_clipboard(&result.to_json()?)
    }
}

/// Put `text` on the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<(), SinkError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
