use image_to_text::app::ImageToTextApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 680.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    if let Err(err) = eframe::run_native(
        "Image to Text Converter",
        options,
        Box::new(|cc| Box::new(ImageToTextApp::new(cc))),
    ) {
        tracing::error!(error = %err, "failed to start the application");
    }
}
