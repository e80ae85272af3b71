//! The application window: winit window, wgpu surface and egui renderer.
//!
//! Owns everything needed to turn one egui frame into pixels. The UI itself
//! is supplied per frame by the caller through [`EguiWindow::render`].

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use wgpu::SurfaceError as GpuSurfaceError;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

/// Backends tried for the window surface on this platform
fn gpu_backends() -> wgpu::Backends {
    if cfg!(target_os = "windows") {
        wgpu::Backends::DX12
    } else if cfg!(target_os = "macos") {
        wgpu::Backends::METAL
    } else {
        wgpu::Backends::VULKAN | wgpu::Backends::GL
    }
}

/// A single egui window with its own wgpu device
pub struct EguiWindow {
    /// The winit window
    window: Arc<Window>,
    /// wgpu surface
    gpu_surface: wgpu::Surface<'static>,
    /// wgpu device
    device: wgpu::Device,
    /// wgpu queue
    queue: wgpu::Queue,
    /// Surface configuration
    surface_config: wgpu::SurfaceConfiguration,
    /// egui context
    egui_ctx: egui::Context,
    /// egui-winit state
    egui_state: egui_winit::State,
    /// egui-wgpu renderer
    egui_renderer: egui_wgpu::Renderer,
    /// Color the frame is cleared to before egui paints
    clear_color: wgpu::Color,
}

impl EguiWindow {
    /// Create the window and initialise GPU and egui state
    pub async fn new(
        event_loop: &ActiveEventLoop,
        window_attrs: WindowAttributes,
        background: [u8; 3],
    ) -> Result<Self> {
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("Failed to create window")?,
        );
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: gpu_backends(),
            ..Default::default()
        });
        let gpu_surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&gpu_surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await?;

        let surface_caps = gpu_surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .context("GPU surface reports no texture formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        gpu_surface.configure(&device, &surface_config);

        // Initialize egui
        let scale_factor = window.scale_factor() as f32;
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(scale_factor),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            surface_format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                predictable_texture_filtering: false,
            },
        );

        // The surface format is sRGB, so convert the 8-bit color to linear
        let to_linear = |c: u8| {
            let c = c as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        let clear_color = wgpu::Color {
            r: to_linear(background[0]),
            g: to_linear(background[1]),
            b: to_linear(background[2]),
            a: 1.0,
        };

        Ok(Self {
            window,
            gpu_surface,
            device,
            queue,
            surface_config,
            egui_ctx,
            egui_state,
            egui_renderer,
            clear_color,
        })
    }

    /// Get the window ID
    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    /// The underlying winit window
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The egui context used for every frame
    pub fn egui_ctx(&self) -> &egui::Context {
        &self.egui_ctx
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Feed a window event to egui and handle resizes.
    ///
    /// Returns whether egui wants a repaint because of the event.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(&self.window, event);

        if let WindowEvent::Resized(new_size) = event
            && new_size.width > 0
            && new_size.height > 0
        {
            self.surface_config.width = new_size.width;
            self.surface_config.height = new_size.height;
            self.gpu_surface.configure(&self.device, &self.surface_config);
            return true;
        }

        response.repaint
    }

    /// Run one egui frame with `run_ui` and present it.
    ///
    /// Returns how long egui wants to wait before the next repaint
    /// (`None` when it has no pending repaint).
    pub fn render(&mut self, run_ui: impl FnMut(&egui::Context)) -> Option<Duration> {
        let output = match self.gpu_surface.get_current_texture() {
            Ok(output) => output,
            Err(GpuSurfaceError::Lost | GpuSurfaceError::Outdated) => {
                self.gpu_surface.configure(&self.device, &self.surface_config);
                return Some(Duration::ZERO);
            }
            Err(GpuSurfaceError::Timeout) => {
                log::warn!("Window surface timeout");
                return Some(Duration::ZERO);
            }
            Err(e) => {
                log::error!("Window surface error: {:?}", e);
                return None;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_output = self.egui_ctx.run(raw_input, run_ui);

        // Manually handle clipboard copy as a fallback for platforms where
        // egui-winit's clipboard integration is unavailable.
        for cmd in &egui_output.platform_output.commands {
            if let egui::OutputCommand::CopyText(text) = cmd
                && let Ok(mut clipboard) = arboard::Clipboard::new()
                && let Err(e) = clipboard.set_text(text)
            {
                log::warn!("Failed to copy to clipboard: {}", e);
            }
        }
        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output.clone());

        let paint_jobs = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        for (id, delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Window Encoder"),
            });

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Window Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        self.window.pre_present_notify();
        output.present();

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map(|viewport| viewport.repaint_delay)
            .filter(|delay| *delay != Duration::MAX)
    }
}
