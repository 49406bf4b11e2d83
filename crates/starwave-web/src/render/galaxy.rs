use super::sprites;
use super::FrameCamera;
use starwave_core::constants::STAR_POINT_SCALE;
use starwave_core::{GalaxyMotion, StarVertex};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GalaxyUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    viewport: [f32; 2],
    point_scale: f32,
    _pad: f32,
}

const STAR_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32];

pub(crate) struct GalaxyLayer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    stars: wgpu::Buffer,
    star_count: u32,
}

impl GalaxyLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        stars: &[StarVertex],
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("galaxy_shader"),
            source: wgpu::ShaderSource::Wgsl(starwave_core::GALAXY_WGSL.into()),
        });
        let bgl = sprites::uniform_layout(device, "galaxy_bgl");
        let uniform_buffer = sprites::uniform_buffer(
            device,
            "galaxy_uniforms",
            std::mem::size_of::<GalaxyUniforms>(),
        );
        let bind_group = sprites::uniform_bind_group(device, "galaxy_bg", &bgl, &uniform_buffer);
        let pipeline = sprites::make_sprite_pipeline(
            device,
            "galaxy_pipeline",
            &bgl,
            &shader,
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<StarVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &STAR_ATTRIBUTES,
            },
            color_format,
        );
        let star_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("galaxy_stars"),
            contents: bytemuck::cast_slice(stars),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            stars: star_buffer,
            star_count: stars.len() as u32,
        }
    }

    pub(crate) fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        camera: &FrameCamera,
        motion: &GalaxyMotion,
    ) {
        let u = GalaxyUniforms {
            view: camera.view.to_cols_array_2d(),
            proj: camera.proj.to_cols_array_2d(),
            model: motion.model_matrix().to_cols_array_2d(),
            viewport: camera.viewport,
            point_scale: STAR_POINT_SCALE,
            _pad: 0.0,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.star_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.stars.slice(..));
        rpass.draw(0..sprites::QUAD_VERTICES, 0..self.star_count);
    }
}
