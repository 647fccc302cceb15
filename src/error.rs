use thiserror::Error;

/// The single active user-facing error for the current workflow state.
///
/// Every variant's `Display` output is shown to the user verbatim, either
/// in the inline alert box or in a toast description, so the strings here
/// are part of the UI contract and must not change casually.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("File size must be less than 5MB")]
    FileTooLarge,

    #[error("Please select a valid image file")]
    InvalidFileType,

    #[error("Error reading file")]
    FileRead,

    #[error("Please select an image first")]
    NoImageSelected,

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("Network error. Please check if the server is running.")]
    Network,

    /// Error message supplied by the extraction server, or the generic
    /// fallback when the server did not include one.
    #[error("{0}")]
    Server(String),

    #[error("No text found in image")]
    NoTextFound,

    #[error("No text available to download")]
    NothingToDownload,

    #[error("Error downloading text")]
    Export,
}
