//! Local file export of the extracted text.

use std::path::Path;

use crate::error::WorkflowError;

/// Pre-filled name in the save dialog.
pub const DEFAULT_FILE_NAME: &str = "extracted-text.txt";

/// Writes the text verbatim, no trailing-newline normalization. Failures
/// map to the export error message; the cause only goes to the log.
pub fn write_text(path: &Path, text: &str) -> Result<(), WorkflowError> {
    std::fs::write(path, text).map_err(|err| {
        tracing::error!(error = %err, path = %path.display(), "failed to write extracted text");
        WorkflowError::Export
    })
}
