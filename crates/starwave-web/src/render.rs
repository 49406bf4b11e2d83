use glam::Mat4;
use starwave_core::constants::CLEAR_COLOR;
use starwave_core::{Camera, GalaxyMotion, StarVertex, WaveGrid, WaveUniformState};
use web_sys as web;

mod galaxy;
mod sprites;
mod wave;

/// Camera matrices and viewport shared by both layers for one frame.
pub(crate) struct FrameCamera {
    pub(crate) view: Mat4,
    pub(crate) proj: Mat4,
    pub(crate) viewport: [f32; 2],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    galaxy: galaxy::GalaxyLayer,
    wave: wave::WaveLayer,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// Acquire the canvas surface and upload both point clouds.
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        stars: &[StarVertex],
        grid: &WaveGrid,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Shader colours are written as-is, so prefer a linear (non-sRGB) target
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let galaxy = galaxy::GalaxyLayer::new(&device, format, stars);
        let wave = wave::WaveLayer::new(&device, format, grid);
        log::info!(
            "[gpu] surface {}x{} {:?}; stars={} wave particles={}",
            width,
            height,
            format,
            stars.len(),
            grid.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            galaxy,
            wave,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Re-apply the surface configuration, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        galaxy: &GalaxyMotion,
        wave: &WaveUniformState,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame_camera = FrameCamera {
            view: camera.view_matrix(),
            proj: camera.projection_matrix(),
            viewport: [self.width as f32, self.height as f32],
        };
        self.galaxy.write_uniforms(&self.queue, &frame_camera, galaxy);
        self.wave.write_uniforms(&self.queue, &frame_camera, wave);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // Mount order: background first, wave on top
            self.galaxy.draw(&mut rpass);
            self.wave.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
