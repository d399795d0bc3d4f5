mod central_panel;
mod side_panel;
mod top_panel;

pub use central_panel::CentralPanel;
pub use side_panel::SidePanel;
pub use top_panel::TopPanel;

use std::sync::Arc;

use egui::Context;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use quill_core::{GenerationResult, ParamChange, Session, View};

use crate::events::{AppEvent, QuillEvent};
use crate::gfx::GfxState;

#[derive(Debug, Clone)]
pub enum UiEvent {
    Param(ParamChange),
    Submit,
    SelectSample(GenerationResult),
    Navigate(View),
    CopyJson,
    ExportPdf,
}

/// Shared state the panels render from: the session plus transient header
/// feedback. Mutated only by the app-state event handlers.
pub struct UiContext {
    pub session: Session,
    pub status: Option<String>,
    pub event_loop_proxy: Arc<EventLoopProxy<QuillEvent>>,
}

impl UiContext {
    pub fn new(event_loop_proxy: Arc<EventLoopProxy<QuillEvent>>) -> Self {
        Self {
            session: Session::new(),
            status: None,
            event_loop_proxy,
        }
    }

    pub fn send_event(&self, event: UiEvent) {
        self.event_loop_proxy
            .send_event(QuillEvent::Ui(event))
            .unwrap();
    }
}

pub struct UiState {
    pub(crate) egui_state: egui_winit::State,
    pub(crate) egui_ctx: egui::Context,
    pub(crate) egui_renderer: egui_wgpu::Renderer,

    components: Vec<Box<dyn UiComponent>>,
    pub(crate) ui_ctx: UiContext,
}

impl UiState {
    pub fn new(
        gfx: &GfxState,
        window: Arc<Window>,
        event_loop_proxy: Arc<EventLoopProxy<QuillEvent>>,
    ) -> Self {
        let egui_ctx = egui::Context::default();

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &gfx.device,
            gfx.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            egui_ctx,
            egui_state,
            egui_renderer,
            components: Vec::new(),
            ui_ctx: UiContext::new(event_loop_proxy),
        }
    }

    pub fn draw(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        self.egui_ctx.run(raw_input, |ctx| {
            for component in self.components.iter_mut() {
                component.show(ctx, &self.ui_ctx);
            }
        })
    }

    pub fn add_component(&mut self, component: Box<dyn UiComponent>) {
        self.components.push(component);
    }

    pub fn on_app_event(&mut self, event: &AppEvent) {
        for component in self.components.iter_mut() {
            component.on_app_event(event);
        }
    }
}

pub trait UiComponent: Send + Sync {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext);

    fn on_app_event(&mut self, _event: &AppEvent) {}
}
