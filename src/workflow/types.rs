use std::time::Duration;

/// An image the user has selected and that has been decoded into the
/// wire representation. Replaced wholesale on each new selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
    /// `data:<mime>;base64,<payload>` string sent to the extraction server.
    pub data_uri: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// An ephemeral status message for the toast stack. Workflow transitions
/// produce these; the UI layer decides how and where to draw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub severity: Severity,
    pub duration: Duration,
}

impl Notification {
    pub fn success(title: &str, duration: Duration) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            severity: Severity::Success,
            duration,
        }
    }

    pub fn error(title: &str, description: Option<String>, duration: Duration) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity: Severity::Error,
            duration,
        }
    }
}
