use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy};
use winit::window::{WindowAttributes, WindowId};

use crate::events::QuillEvent;
use crate::state::AppState;

pub struct App {
    event_loop_proxy: Arc<EventLoopProxy<QuillEvent>>,
    state: Option<AppState>,
    needs_redraw: bool,
}

impl App {
    pub fn new(event_loop: &mut EventLoop<QuillEvent>) -> Self {
        let event_loop_proxy = Arc::new(event_loop.create_proxy());

        Self {
            event_loop_proxy,
            state: None,
            needs_redraw: false,
        }
    }
}

impl ApplicationHandler<QuillEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window_attributes = WindowAttributes::default()
            .with_title("Quill - Creative Writing Studio")
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 860.0));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        let state =
            pollster::block_on(AppState::new(window, self.event_loop_proxy.clone())).unwrap();
        self.state = Some(state);
        self.needs_redraw = true;
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: QuillEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            QuillEvent::Ui(e) => state.on_ui_event(e),
            QuillEvent::App(e) => state.on_app_event(e),
            QuillEvent::Gen(e) => state.on_gen_event(e),
        }

        self.needs_redraw = true;
        state.window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        if state.window.id() != window_id {
            return;
        }

        // Let egui handle the event first
        let response = state.ui.egui_state.on_window_event(&state.window, &event);

        if response.repaint {
            self.needs_redraw = true;
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                state.resize(physical_size);
                self.needs_redraw = true;
            }
            WindowEvent::RedrawRequested => {
                let _ = state.render();
                self.needs_redraw = false;
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            // Keep repainting while a request is in flight so the spinner
            // animates.
            if self.needs_redraw || state.is_loading() {
                state.window.request_redraw();
            }
        }
    }
}
