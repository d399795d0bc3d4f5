use std::sync::Arc;

use egui_wgpu::wgpu;
use egui_wgpu::wgpu::StoreOp;
use log::{error, info};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::config::GeminiConfig;
use crate::events::{AppEvent, GenEvent, QuillEvent};
use crate::export;
use crate::generator::GenerationClient;
use crate::gfx::GfxState;
use crate::ui;
use crate::ui::{UiEvent, UiState};

pub struct AppState {
    pub(crate) window: Arc<Window>,
    event_loop_proxy: Arc<EventLoopProxy<QuillEvent>>,

    pub gfx: GfxState,
    pub ui: UiState,

    client: GenerationClient,
}

impl AppState {
    pub async fn new(
        window: Arc<Window>,
        event_loop_proxy: Arc<EventLoopProxy<QuillEvent>>,
    ) -> anyhow::Result<Self> {
        let client = GenerationClient::new(GeminiConfig::load());

        let gfx = GfxState::new(window.clone()).await?;
        let mut ui_state = UiState::new(&gfx, window.clone(), event_loop_proxy.clone());

        ui_state.add_component(Box::new(ui::TopPanel::default()));
        ui_state.add_component(Box::new(ui::SidePanel::default()));
        // The central panel fills the remaining space, so it goes last.
        ui_state.add_component(Box::new(ui::CentralPanel::default()));

        Ok(Self {
            window,
            event_loop_proxy,
            gfx,
            ui: ui_state,
            client,
        })
    }

    pub fn push_event(&self, event: AppEvent) {
        self.event_loop_proxy
            .send_event(QuillEvent::App(event))
            .unwrap();
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.gfx.resize(new_size);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.ui.ui_ctx.session.loading
    }

    pub fn on_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Param(change) => {
                self.ui.ui_ctx.session.apply(change);
            }
            UiEvent::Submit => {
                self.start_generation();
            }
            UiEvent::SelectSample(sample) => {
                let params = sample.metadata.params.clone();
                self.ui.ui_ctx.session.select_sample(sample);
                self.push_event(AppEvent::ParamsLoaded(params));
            }
            UiEvent::Navigate(view) => {
                self.ui.ui_ctx.session.navigate(view);
            }
            UiEvent::CopyJson => {
                self.copy_result_json();
            }
            UiEvent::ExportPdf => {
                self.export_pdf();
            }
        }
    }

    pub fn on_gen_event(&mut self, event: GenEvent) {
        match event {
            GenEvent::Finished(outcome) => {
                match &outcome {
                    Ok(result) => info!(
                        "Generation complete: {} in {}s",
                        result.id, result.metadata.generation_time
                    ),
                    Err(e) => error!("Generation failed: {e}"),
                }
                self.ui
                    .ui_ctx
                    .session
                    .finish_submit(outcome.map_err(|e| e.to_string()));
            }
        }
    }

    pub fn on_app_event(&mut self, event: AppEvent) {
        if let AppEvent::Status(status) = &event {
            self.ui.ui_ctx.status = Some(status.clone());
        }
        self.ui.on_app_event(&event);
    }

    /// Validates the form and, if submittable, spawns the single in-flight
    /// generation task. The outcome comes back through the event loop
    /// proxy as a `GenEvent`.
    fn start_generation(&mut self) {
        if !self.ui.ui_ctx.session.begin_submit() {
            return;
        }

        let params = self.ui.ui_ctx.session.params.clone();
        let client = self.client.clone();
        let proxy = self.event_loop_proxy.clone();

        info!("Submitting generation request");
        tokio::spawn(async move {
            let outcome = client.generate(&params).await;
            let _ = proxy.send_event(QuillEvent::Gen(GenEvent::Finished(outcome)));
        });
    }

    fn copy_result_json(&mut self) {
        let Some(result) = self.ui.ui_ctx.session.current.clone() else {
            return;
        };
        match export::result_json(&result) {
            Ok(json) => {
                self.ui.egui_ctx.copy_text(json);
                self.push_event(AppEvent::Status("Copied result as JSON".into()));
            }
            Err(e) => error!("Failed to serialize result: {e}"),
        }
    }

    fn export_pdf(&mut self) {
        let Some(result) = self.ui.ui_ctx.session.current.clone() else {
            return;
        };
        match export::save_pdf(&result) {
            Ok(Some(path)) => {
                info!("Saved PDF to {}", path.display());
                self.push_event(AppEvent::Status(format!("Saved PDF to {}", path.display())));
            }
            Ok(None) => {}
            Err(e) => {
                error!("PDF export failed: {e}");
                self.push_event(AppEvent::Status("PDF export failed".into()));
            }
        }
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let size = self.window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        let output = self.gfx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gfx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let _ = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Clear Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.08,
                        g: 0.08,
                        b: 0.1,
                        a: 1.0,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        // UI
        let full_output = self.ui.draw(&self.window);

        let platform_output = full_output.platform_output.clone();
        self.ui
            .egui_state
            .handle_platform_output(&self.window, platform_output);

        let shapes = full_output.shapes.clone();
        let pixels_per_point = full_output.pixels_per_point;
        let paint_jobs = self.ui.egui_ctx.tessellate(shapes, pixels_per_point);

        let screen_desc = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        for (id, delta) in &full_output.textures_delta.set {
            self.ui
                .egui_renderer
                .update_texture(&self.gfx.device, &self.gfx.queue, *id, delta);
        }

        self.ui.egui_renderer.update_buffers(
            &self.gfx.device,
            &self.gfx.queue,
            &mut encoder,
            &paint_jobs,
            &screen_desc,
        );

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            self.ui
                .egui_renderer
                .render(&mut rpass.forget_lifetime(), &paint_jobs, &screen_desc);
        }

        for id in &full_output.textures_delta.free {
            self.ui.egui_renderer.free_texture(id);
        }

        self.gfx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
