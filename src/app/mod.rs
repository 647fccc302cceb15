mod ui;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use eframe::egui;

use crate::error::WorkflowError;
use crate::export;
use crate::extract::{self, ExtractionClient};
use crate::notify::ToastStack;
use crate::utils::data_uri;
use crate::workflow::{ExtractionGate, UploadedImage, WorkflowState};

/// eframe shell around the workflow: runs the two asynchronous operations
/// (file decode, HTTP call) on worker threads and feeds their single
/// completion message back into the state at the top of each frame.
pub struct ImageToTextApp {
    workflow: WorkflowState,
    toasts: ToastStack,
    server_url: String,
    decode_receiver: Option<Receiver<Result<UploadedImage, WorkflowError>>>,
    extract_receiver: Option<Receiver<Result<String, WorkflowError>>>,
}

impl ImageToTextApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let server_url = extract::default_server_url();
        tracing::info!(%server_url, "starting image-to-text client");

        Self {
            workflow: WorkflowState::default(),
            toasts: ToastStack::default(),
            server_url,
            decode_receiver: None,
            extract_receiver: None,
        }
    }

    pub fn pick_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(
                "Images",
                &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"],
            )
            .pick_file()
        else {
            return;
        };

        self.select_image(path);
    }

    fn select_image(&mut self, path: PathBuf) {
        let size = match std::fs::metadata(&path) {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "could not stat selected file");
                let toast = self.workflow.decode_failed();
                self.toasts.push(toast);
                return;
            }
        };

        let mime_type = data_uri::mime_for_path(&path).unwrap_or(data_uri::UNKNOWN_MIME);

        if let Err(toast) = self.workflow.begin_selection(size, mime_type) {
            self.toasts.push(toast);
            return;
        }

        // Read and encode off the UI thread. Replacing the receiver drops
        // any still-pending decode along with its eventual message.
        let (sender, receiver) = mpsc::channel();
        self.decode_receiver = Some(receiver);
        let mime_type = mime_type.to_string();

        std::thread::spawn(move || {
            let result = std::fs::read(&path)
                .map(|bytes| UploadedImage {
                    file_name: path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    mime_type: mime_type.clone(),
                    size: bytes.len() as u64,
                    data_uri: data_uri::encode(&mime_type, &bytes),
                })
                .map_err(|err| {
                    tracing::warn!(error = %err, "failed to read selected image");
                    WorkflowError::FileRead
                });
            let _ = sender.send(result);
        });
    }

    pub fn extract_text(&mut self) {
        let data_uri = match self.workflow.begin_extraction() {
            ExtractionGate::Proceed { data_uri } => data_uri,
            ExtractionGate::NoImage(toast) => {
                self.toasts.push(toast);
                return;
            }
            ExtractionGate::Busy => return,
        };

        let (sender, receiver) = mpsc::channel();
        self.extract_receiver = Some(receiver);
        let client = ExtractionClient::new(self.server_url.clone());

        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracing::error!(error = %err, "failed to start tokio runtime");
                    let _ = sender.send(Err(WorkflowError::Network));
                    return;
                }
            };
            let result = runtime.block_on(client.extract(&data_uri));
            let _ = sender.send(result);
        });
    }

    pub fn download_text(&mut self) {
        let text = match self.workflow.request_download() {
            Ok(text) => text,
            Err(toast) => {
                self.toasts.push(toast);
                return;
            }
        };

        // Cancelling the save dialog is a plain no-op, not an error.
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(export::DEFAULT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        let toast = self
            .workflow
            .download_finished(export::write_text(&path, &text));
        self.toasts.push(toast);
    }

    /// Drains worker completions into the workflow. Each receiver carries
    /// exactly one message, so the loading flag cannot stay stuck.
    pub fn poll_jobs(&mut self, ctx: &egui::Context) {
        if self.decode_receiver.is_some() || self.workflow.is_extracting {
            ctx.request_repaint();
        } else if !self.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        if let Some(receiver) = &self.decode_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.decode_receiver = None;
                match result {
                    Ok(image) => {
                        tracing::info!(
                            file = %image.file_name,
                            size = image.size,
                            mime = %image.mime_type,
                            "image selected"
                        );
                        self.workflow.image_decoded(image);
                    }
                    Err(_) => {
                        let toast = self.workflow.decode_failed();
                        self.toasts.push(toast);
                    }
                }
            }
        }

        if let Some(receiver) = &self.extract_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.extract_receiver = None;
                let toast = self.workflow.extraction_settled(result);
                self.toasts.push(toast);
            }
        }

        self.toasts.prune();
    }
}

impl eframe::App for ImageToTextApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_jobs(ctx);
        self.render(ctx);
    }
}
