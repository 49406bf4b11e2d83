use crate::animation::AnimationLoop;
use crate::render;
use instant::Instant;
use starwave_core::{Camera, GalaxyMotion, PointerSmoother, WaveUniformState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Per-frame state of the scene. Only the frame callback writes to it.
pub struct FrameContext {
    pub gpu: render::GpuState,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerSmoother>>,
    pub camera: Camera,
    pub galaxy: GalaxyMotion,
    pub wave: WaveUniformState,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();

        // Galaxy first, then the wave, matching mount order
        self.galaxy.advance(elapsed);
        // Skip one sample rather than jump if a listener holds the borrow
        let pointer = self.pointer.try_borrow_mut().ok().map(|mut p| p.step());
        self.wave.advance_sampled(elapsed, pointer);

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        self.camera.set_viewport(w, h);

        match self.gpu.render(&self.camera, &self.galaxy, &self.wave) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {}
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub fn start_loop(mut frame_ctx: FrameContext) -> AnimationLoop {
    AnimationLoop::start(move |_ts| {
        frame_ctx.frame();
        true
    })
}
