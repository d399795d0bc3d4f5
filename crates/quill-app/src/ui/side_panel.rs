use egui::{Color32, ComboBox, Context, RichText, TextEdit, Ui};

use quill_core::{Field, Genre, Length, ParamChange, PieceType, Tone};

use crate::events::AppEvent;
use crate::ui::{UiComponent, UiContext, UiEvent};

/// The parameter form. Enum fields render straight from the session;
/// free-text fields keep local edit buffers that resync when a sample is
/// loaded.
#[derive(Default)]
pub struct SidePanel {
    title_text: String,
    prompt_text: String,
}

impl SidePanel {
    fn error_label(ui: &mut Ui, ui_ctx: &UiContext, field: Field) {
        if let Some(message) = ui_ctx.session.errors.get(field) {
            ui.label(
                RichText::new(message)
                    .small()
                    .color(Color32::from_rgb(255, 100, 100)),
            );
        }
    }
}

impl UiComponent for SidePanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        egui::SidePanel::left("side_panel")
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.heading("Customize Your Creation");
                ui.separator();

                let params = &ui_ctx.session.params;
                let loading = ui_ctx.session.loading;

                // === Type ===
                ui.label(RichText::new("Type").strong());
                ui.horizontal(|ui| {
                    for piece_type in PieceType::all() {
                        let selected = params.piece_type == Some(piece_type);
                        let label = format!("{} {}", piece_type.icon(), piece_type.label());
                        if ui.selectable_label(selected, label).clicked() {
                            ui_ctx.send_event(UiEvent::Param(ParamChange::Type(piece_type)));
                        }
                    }
                });
                Self::error_label(ui, ui_ctx, Field::Type);
                ui.add_space(8.0);

                // === Genre ===
                ui.label(RichText::new("Genre").strong());
                ui.horizontal_wrapped(|ui| {
                    for genre in Genre::all() {
                        let selected = params.genre == Some(genre);
                        let label = format!("{} {}", genre.icon(), genre.label());
                        if ui.selectable_label(selected, label).clicked() {
                            ui_ctx.send_event(UiEvent::Param(ParamChange::Genre(genre)));
                        }
                    }
                });
                Self::error_label(ui, ui_ctx, Field::Genre);
                ui.add_space(8.0);

                // === Tone ===
                ui.label(RichText::new("Tone").strong());
                let tone_text = params
                    .tone
                    .map(|tone| tone.label().to_string())
                    .unwrap_or_else(|| "Select a tone".to_string());
                ComboBox::from_id_salt("tone_select")
                    .selected_text(tone_text)
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for tone in Tone::all() {
                            if ui
                                .selectable_label(params.tone == Some(tone), tone.label())
                                .clicked()
                            {
                                ui_ctx.send_event(UiEvent::Param(ParamChange::Tone(tone)));
                            }
                        }
                    });
                Self::error_label(ui, ui_ctx, Field::Tone);
                ui.add_space(8.0);

                // === Length ===
                ui.label(RichText::new("Length").strong());
                let length_text = params
                    .length
                    .map(|length| length.label().to_string())
                    .unwrap_or_else(|| "Select a length".to_string());
                ComboBox::from_id_salt("length_select")
                    .selected_text(length_text)
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for length in Length::all() {
                            if ui
                                .selectable_label(params.length == Some(length), length.label())
                                .clicked()
                            {
                                ui_ctx.send_event(UiEvent::Param(ParamChange::Length(length)));
                            }
                        }
                    });
                Self::error_label(ui, ui_ctx, Field::Length);
                ui.add_space(12.0);

                // === Your Title (Optional) ===
                ui.label(RichText::new("Your Title (Optional)").strong());
                let title_edit = ui.add(
                    TextEdit::singleline(&mut self.title_text)
                        .desired_width(f32::INFINITY)
                        .hint_text("e.g., 'The Last Dragon's Secret'"),
                );
                if title_edit.changed() {
                    ui_ctx.send_event(UiEvent::Param(ParamChange::Title(self.title_text.clone())));
                }
                ui.add_space(8.0);

                // === Add Your Spark (Optional) ===
                ui.label(RichText::new("Add Your Spark (Optional)").strong());
                let prompt_edit = ui.add(
                    TextEdit::multiline(&mut self.prompt_text)
                        .desired_width(f32::INFINITY)
                        .desired_rows(3)
                        .hint_text("e.g., 'a story about a dragon who loves to bake...'"),
                );
                if prompt_edit.changed() {
                    ui_ctx.send_event(UiEvent::Param(ParamChange::Prompt(
                        self.prompt_text.clone(),
                    )));
                }
                ui.add_space(12.0);

                // === Submit ===
                let button_text = if loading {
                    "Generating..."
                } else if ui_ctx.session.is_variation() {
                    "Generate Variation"
                } else {
                    "Generate"
                };

                let submit = ui.add_enabled(
                    !loading,
                    egui::Button::new(RichText::new(format!("✨ {button_text}")).size(14.0))
                        .min_size(egui::vec2(ui.available_width(), 30.0)),
                );
                if submit.clicked() {
                    ui_ctx.send_event(UiEvent::Submit);
                }

                if loading {
                    ui.add_space(5.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            RichText::new("This may take a moment.")
                                .small()
                                .color(Color32::GRAY),
                        );
                    });
                }
            });
    }

    fn on_app_event(&mut self, event: &AppEvent) {
        if let AppEvent::ParamsLoaded(params) = event {
            self.title_text = params.custom_title.clone();
            self.prompt_text = params.custom_prompt.clone();
        }
    }
}
