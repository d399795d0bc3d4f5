use egui::{Color32, Context, RichText};

use quill_core::View;

use crate::ui::{UiComponent, UiContext, UiEvent};

#[derive(Default)]
pub struct TopPanel {}

impl UiComponent for TopPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🖋 Quill");
                ui.label(
                    RichText::new("Craft stories and poems with Gemini")
                        .small()
                        .color(Color32::GRAY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let view = ui_ctx.session.view;

                    if ui
                        .selectable_label(view == View::Comparison, "⚖ Comparison")
                        .clicked()
                    {
                        ui_ctx.send_event(UiEvent::Navigate(View::Comparison));
                    }
                    if ui
                        .selectable_label(view == View::Gallery, "🖼 Gallery")
                        .clicked()
                    {
                        ui_ctx.send_event(UiEvent::Navigate(View::Gallery));
                    }

                    if let Some(status) = &ui_ctx.status {
                        ui.add_space(10.0);
                        ui.label(RichText::new(status).small().color(Color32::LIGHT_BLUE));
                    }
                });
            });
        });
    }
}
