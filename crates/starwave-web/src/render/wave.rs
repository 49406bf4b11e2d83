use super::sprites;
use super::FrameCamera;
use glam::Mat4;
use starwave_core::{WaveGrid, WaveParticle, WaveUniformState};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct WaveUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    viewport: [f32; 2],
    time: f32,
    amplitude: f32,
    frequency: f32,
    speed: f32,
    mouse: [f32; 2],
    detail: f32,
    _pad: [f32; 3],
}

const PARTICLE_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32];

pub(crate) struct WaveLayer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    particles: wgpu::Buffer,
    particle_count: u32,
}

impl WaveLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        grid: &WaveGrid,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("wave_shader"),
            source: wgpu::ShaderSource::Wgsl(starwave_core::WAVE_WGSL.into()),
        });
        let bgl = sprites::uniform_layout(device, "wave_bgl");
        let uniform_buffer =
            sprites::uniform_buffer(device, "wave_uniforms", std::mem::size_of::<WaveUniforms>());
        let bind_group = sprites::uniform_bind_group(device, "wave_bg", &bgl, &uniform_buffer);
        let pipeline = sprites::make_sprite_pipeline(
            device,
            "wave_pipeline",
            &bgl,
            &shader,
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<WaveParticle>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &PARTICLE_ATTRIBUTES,
            },
            color_format,
        );
        let particle_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("wave_particles"),
            contents: bytemuck::cast_slice(&grid.particles),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            particles: particle_buffer,
            particle_count: grid.len() as u32,
        }
    }

    pub(crate) fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        camera: &FrameCamera,
        state: &WaveUniformState,
    ) {
        let u = WaveUniforms {
            view: camera.view.to_cols_array_2d(),
            proj: camera.proj.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            viewport: camera.viewport,
            time: state.time,
            amplitude: state.amplitude,
            frequency: state.frequency,
            speed: state.speed,
            mouse: state.pointer,
            detail: state.detail.as_uniform(),
            _pad: [0.0; 3],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.particle_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.particles.slice(..));
        rpass.draw(0..sprites::QUAD_VERTICES, 0..self.particle_count);
    }
}
