use egui::{Color32, Context, RichText, Ui};

use quill_core::{GenerationResult, View, samples};

use crate::ui::{UiComponent, UiContext, UiEvent};

const ACCENT: Color32 = Color32::from_rgb(150, 130, 255);

/// The main view area: an exhaustive match over the session's view tag.
pub struct CentralPanel {
    gallery: Vec<GenerationResult>,
    comparison: [GenerationResult; 2],
}

impl Default for CentralPanel {
    fn default() -> Self {
        Self {
            gallery: samples::gallery(),
            comparison: samples::comparison(),
        }
    }
}

impl CentralPanel {
    fn show_gallery(&self, ui: &mut Ui, ui_ctx: &UiContext) {
        ui.heading(RichText::new("Sample Gallery & Inspiration").color(ACCENT));
        ui.label(
            "Explore what's possible. Pick any sample to view the full text and load \
             its settings into the form.",
        );
        ui.add_space(10.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for sample in &self.gallery {
                    self.show_sample_card(ui, ui_ctx, sample);
                }
            });
    }

    fn show_sample_card(&self, ui: &mut Ui, ui_ctx: &UiContext, sample: &GenerationResult) {
        egui::Frame::new()
            .fill(Color32::from_gray(30))
            .corner_radius(5)
            .inner_margin(10)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(60)))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&sample.title).strong().size(16.0));
                        ui.label(
                            RichText::new(&sample.summary)
                                .small()
                                .italics()
                                .color(Color32::GRAY),
                        );
                        ui.horizontal(|ui| {
                            tag(ui, sample.metadata.piece_type.label());
                            tag(ui, sample.metadata.genre.label());
                            tag(ui, sample.metadata.tone.label());
                        });
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📖 View & Load Settings").clicked() {
                            ui_ctx.send_event(UiEvent::SelectSample(sample.clone()));
                        }
                    });
                });
            });

        ui.add_space(5.0);
    }

    fn show_result(&self, ui: &mut Ui, ui_ctx: &UiContext) {
        let session = &ui_ctx.session;

        if session.loading {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.spinner();
                ui.heading("Conjuring Creativity...");
                ui.label("The model is weaving its magic. This may take a moment.");
            });
            return;
        }

        if let Some(error) = &session.error {
            egui::Frame::new()
                .fill(Color32::from_rgb(60, 20, 20))
                .corner_radius(5)
                .inner_margin(15)
                .show(ui, |ui| {
                    ui.heading(RichText::new("An Error Occurred").color(Color32::from_rgb(255, 100, 100)));
                    ui.label(RichText::new(error).color(Color32::from_rgb(255, 150, 150)));
                });
            return;
        }

        let Some(result) = &session.current else {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.heading("Your masterpiece awaits");
                ui.label(
                    RichText::new(
                        "Fill out the form to generate a unique piece of creative writing.",
                    )
                    .color(Color32::GRAY),
                );
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.heading(RichText::new(&result.title).color(ACCENT));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("💾 Save PDF").clicked() {
                    ui_ctx.send_event(UiEvent::ExportPdf);
                }
                if ui.button("📋 Copy JSON").clicked() {
                    ui_ctx.send_event(UiEvent::CopyJson);
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.label(RichText::new(&result.content).size(15.0));
                ui.add_space(10.0);
                ui.separator();

                ui.label(RichText::new("Summary").strong().color(ACCENT));
                ui.label(RichText::new(&result.summary).italics().color(Color32::GRAY));
                ui.add_space(8.0);

                let meta = &result.metadata;
                let tokens = match meta.token_usage {
                    Some(count) => count.to_string(),
                    None => "N/A".to_string(),
                };
                ui.horizontal_wrapped(|ui| {
                    for text in [
                        format!("Type: {}", meta.piece_type.label()),
                        format!("Genre: {}", meta.genre.label()),
                        format!("Tone: {}", meta.tone.label()),
                        format!("Length: {}", meta.word_count.id()),
                        format!("Tokens: {tokens}"),
                        format!("Time: {}s", meta.generation_time),
                    ] {
                        ui.label(RichText::new(text).small().color(Color32::GRAY));
                        ui.add_space(8.0);
                    }
                });
            });
    }

    fn show_comparison(&self, ui: &mut Ui) {
        ui.heading(RichText::new("Prompt Comparison").color(ACCENT));
        ui.label(
            "The same parameters, generated twice with only the tone changed. \
             Small knobs, very different stories.",
        );
        ui.add_space(10.0);

        ui.columns(2, |columns| {
            for (column, sample) in columns.iter_mut().zip(&self.comparison) {
                egui::Frame::new()
                    .fill(Color32::from_gray(30))
                    .corner_radius(5)
                    .inner_margin(10)
                    .stroke(egui::Stroke::new(1.0, Color32::from_gray(60)))
                    .show(column, |ui| {
                        ui.label(RichText::new(&sample.title).strong().size(16.0));
                        tag(ui, &format!("Tone: {}", sample.metadata.tone.label()));
                        ui.separator();
                        egui::ScrollArea::vertical()
                            .id_salt(sample.id.as_str())
                            .auto_shrink([false; 2])
                            .show(ui, |ui| {
                                ui.label(&sample.content);
                            });
                    });
            }
        });
    }
}

fn tag(ui: &mut Ui, text: &str) {
    egui::Frame::new()
        .fill(Color32::from_gray(50))
        .corner_radius(8)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

impl UiComponent for CentralPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        egui::CentralPanel::default().show(ctx, |ui| match ui_ctx.session.view {
            View::Gallery => self.show_gallery(ui, ui_ctx),
            View::Result => self.show_result(ui, ui_ctx),
            View::Comparison => self.show_comparison(ui),
        });
    }
}
