use eframe::egui::{self, Align, Color32, RichText};

use super::ImageToTextApp;
use crate::utils::file_size;
use crate::workflow::Severity;

const SUCCESS_GREEN: Color32 = Color32::from_rgb(0, 180, 0);
const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);

impl ImageToTextApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("Image to Text Converter");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Extract text from an image and save it as a file")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);

                    if let Some(error) = &self.workflow.error {
                        let message = error.to_string();
                        egui::Frame::none()
                            .fill(ui.style().visuals.extreme_bg_color)
                            .inner_margin(egui::Margin::same(8.0))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label("⚠");
                                    ui.colored_label(ERROR_RED, message);
                                });
                            });
                        ui.add_space(10.0);
                    }

                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            if ui.button("🖼 Select Image").clicked() {
                                self.pick_image();
                            }
                            if let Some(image) = &self.workflow.image {
                                ui.label(format!(
                                    "Selected: {} ({})",
                                    image.file_name,
                                    file_size::format_size(image.size)
                                ));
                            }
                        });
                    });

                    ui.add_space(20.0);

                    ui.vertical_centered(|ui| {
                        let label = if self.workflow.is_extracting {
                            "⏳ Extracting..."
                        } else {
                            "Extract Text"
                        };
                        let button =
                            egui::Button::new(label).min_size(egui::vec2(200.0, 40.0));

                        ui.add_enabled_ui(!self.workflow.is_extracting, |ui| {
                            if ui.add(button).clicked() {
                                self.extract_text();
                            }
                        });
                    });

                    if let Some(text) = self.workflow.extracted_text.clone() {
                        ui.add_space(20.0);
                        ui.label(RichText::new("Extracted Text:").strong());
                        ui.add_space(5.0);

                        egui::ScrollArea::vertical()
                            .max_height(200.0)
                            .show(ui, |ui| {
                                let mut display = text;
                                ui.add_sized(
                                    [ui.available_width(), 200.0],
                                    egui::TextEdit::multiline(&mut display)
                                        .font(egui::TextStyle::Monospace)
                                        .interactive(false),
                                );
                            });

                        ui.add_space(10.0);
                        ui.vertical_centered(|ui| {
                            if ui.button("💾 Download Text").clicked() {
                                self.download_text();
                            }
                        });
                    }

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
                self.render_toasts(ui);
            });
        });
    }

    fn render_toasts(&self, ui: &mut egui::Ui) {
        for toast in self.toasts.iter() {
            egui::Frame::none()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(egui::Margin::same(8.0))
                .show(ui, |ui| {
                    let color = match toast.severity {
                        Severity::Success => SUCCESS_GREEN,
                        Severity::Error => ERROR_RED,
                    };
                    ui.vertical_centered(|ui| {
                        ui.colored_label(color, RichText::new(&toast.title).strong());
                        if let Some(description) = &toast.description {
                            ui.label(description);
                        }
                    });
                });
            ui.add_space(4.0);
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("Server: {}", self.server_url))
                    .color(Color32::from_gray(120))
                    .size(11.0),
            );
        });
    }
}
