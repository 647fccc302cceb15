//! Workflow state and pure transition functions.
//!
//! All client state lives in [`WorkflowState`]; every user-visible
//! operation is a transition method that mutates the state and hands back
//! the [`Notification`] the UI should toast, if any. The module knows
//! nothing about egui, reqwest or the filesystem, which is what keeps the
//! whole contract testable without a server.

mod types;

use std::time::Duration;

pub use types::{Notification, Severity, UploadedImage};

use crate::error::WorkflowError;

/// Strict upper bound: a file of exactly 5 MiB is still accepted.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

const SUCCESS_TOAST: Duration = Duration::from_secs(2);
const ERROR_TOAST: Duration = Duration::from_secs(3);
const EXTRACT_ERROR_TOAST: Duration = Duration::from_secs(4);

/// Outcome of asking the workflow to start an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionGate {
    /// Request may go out; the loading flag is already set.
    Proceed { data_uri: String },
    /// Nothing selected yet; the error is set and a toast is due.
    NoImage(Notification),
    /// A request is already outstanding. New calls are ignored.
    Busy,
}

#[derive(Debug, Default)]
pub struct WorkflowState {
    pub image: Option<UploadedImage>,
    pub extracted_text: Option<String>,
    pub error: Option<WorkflowError>,
    pub is_extracting: bool,
}

impl WorkflowState {
    /// First half of image selection: clears any stale error, then
    /// validates size and type in that order. `Ok` means the caller should
    /// go read and encode the file; `Err` carries the toast to show.
    ///
    /// Clearing the error happens before validation, so a fresh selection
    /// never inherits a stale message, only one produced by this call.
    pub fn begin_selection(&mut self, size: u64, mime_type: &str) -> Result<(), Notification> {
        self.error = None;

        if size > MAX_IMAGE_BYTES {
            self.error = Some(WorkflowError::FileTooLarge);
            return Err(Notification::error(
                "File too large",
                Some("Please select an image under 5MB".to_string()),
                ERROR_TOAST,
            ));
        }

        if !mime_type.starts_with("image/") {
            self.error = Some(WorkflowError::InvalidFileType);
            return Err(Notification::error(
                "Invalid file type",
                Some("Please select an image file".to_string()),
                ERROR_TOAST,
            ));
        }

        Ok(())
    }

    /// Second half of selection: the file was read and encoded. Replaces
    /// the previous image wholesale.
    pub fn image_decoded(&mut self, image: UploadedImage) {
        self.image = Some(image);
        self.error = None;
    }

    /// The accepted file could not be read after all.
    pub fn decode_failed(&mut self) -> Notification {
        self.error = Some(WorkflowError::FileRead);
        Notification::error(
            "Error reading file",
            Some("Please try again with a different image".to_string()),
            ERROR_TOAST,
        )
    }

    /// Gate for `extract_text`. Refuses to start without an image, and
    /// ignores re-entrant calls while a request is outstanding.
    pub fn begin_extraction(&mut self) -> ExtractionGate {
        if self.is_extracting {
            return ExtractionGate::Busy;
        }

        let Some(image) = &self.image else {
            self.error = Some(WorkflowError::NoImageSelected);
            return ExtractionGate::NoImage(Notification::error(
                "No image selected",
                None,
                ERROR_TOAST,
            ));
        };

        self.error = None;
        self.is_extracting = true;
        ExtractionGate::Proceed {
            data_uri: image.data_uri.clone(),
        }
    }

    /// Applies a settled extraction outcome. The loading flag drops on
    /// every path; a failure clears any stale extracted text.
    pub fn extraction_settled(
        &mut self,
        outcome: Result<String, WorkflowError>,
    ) -> Notification {
        self.is_extracting = false;

        match outcome {
            Ok(text) => {
                self.extracted_text = Some(text);
                self.error = None;
                Notification::success("Text extracted successfully", SUCCESS_TOAST)
            }
            Err(err) => {
                self.extracted_text = None;
                let description = err.to_string();
                self.error = Some(err);
                Notification::error(
                    "Error extracting text",
                    Some(description),
                    EXTRACT_ERROR_TOAST,
                )
            }
        }
    }

    /// Gate for `download_text`: hands out the text to export, or the
    /// toast for the nothing-to-download case.
    pub fn request_download(&mut self) -> Result<String, Notification> {
        match &self.extracted_text {
            Some(text) if !text.is_empty() => Ok(text.clone()),
            _ => {
                self.error = Some(WorkflowError::NothingToDownload);
                Err(Notification::error("No text to download", None, ERROR_TOAST))
            }
        }
    }

    /// Applies the export outcome. Export failures never touch the
    /// in-memory extracted text.
    pub fn download_finished(&mut self, result: Result<(), WorkflowError>) -> Notification {
        match result {
            Ok(()) => Notification::success("Text downloaded successfully", SUCCESS_TOAST),
            Err(err) => {
                self.error = Some(err);
                Notification::error(
                    "Error downloading text",
                    Some("Please try again".to_string()),
                    ERROR_TOAST,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> UploadedImage {
        UploadedImage {
            file_name: "photo.png".to_string(),
            mime_type: "image/png".to_string(),
            size: 1024,
            data_uri: "data:image/png;base64,aGVsbG8=".to_string(),
        }
    }

    #[test]
    fn selection_clears_stale_error_before_validating() {
        let mut state = WorkflowState::default();
        state.error = Some(WorkflowError::NoImageSelected);

        assert!(state.begin_selection(1024, "image/png").is_ok());
        assert_eq!(state.error, None);
    }

    #[test]
    fn exactly_five_mib_is_accepted() {
        let mut state = WorkflowState::default();
        assert!(state.begin_selection(MAX_IMAGE_BYTES, "image/png").is_ok());
        assert!(state
            .begin_selection(MAX_IMAGE_BYTES + 1, "image/png")
            .is_err());
    }

    #[test]
    fn size_is_checked_before_type() {
        let mut state = WorkflowState::default();
        // Oversized *and* wrong type reports the size error.
        let _ = state.begin_selection(MAX_IMAGE_BYTES + 1, "text/plain");
        assert_eq!(state.error, Some(WorkflowError::FileTooLarge));
    }

    #[test]
    fn busy_gate_ignores_reentrant_extraction() {
        let mut state = WorkflowState::default();
        state.image_decoded(sample_image());

        assert!(matches!(
            state.begin_extraction(),
            ExtractionGate::Proceed { .. }
        ));
        assert_eq!(state.begin_extraction(), ExtractionGate::Busy);
    }

    #[test]
    fn failed_extraction_keeps_workflow_continuable() {
        let mut state = WorkflowState::default();
        state.image_decoded(sample_image());
        let _ = state.begin_extraction();

        state.extraction_settled(Err(WorkflowError::Network));
        assert!(!state.is_extracting);
        assert_eq!(state.extracted_text, None);

        // A new attempt can start right away.
        assert!(matches!(
            state.begin_extraction(),
            ExtractionGate::Proceed { .. }
        ));
    }

    #[test]
    fn export_failure_preserves_extracted_text() {
        let mut state = WorkflowState::default();
        state.extracted_text = Some("Hello".to_string());

        let toast = state.download_finished(Err(WorkflowError::Export));
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(state.error, Some(WorkflowError::Export));
        assert_eq!(state.extracted_text.as_deref(), Some("Hello"));
    }
}
