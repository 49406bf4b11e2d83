use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

/// One star in the background cloud, laid out for a per-instance vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct GalaxyConfig {
    pub count: usize,
    pub radius_max: f32,
    pub radius_exponent: f32,
    pub band_height: f32,
    pub color_jitter: f32,
    pub size_range: (f32, f32),
    pub palette: &'static [[f32; 3]],
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            radius_max: STAR_RADIUS_MAX,
            radius_exponent: STAR_RADIUS_EXPONENT,
            band_height: STAR_BAND_HEIGHT,
            color_jitter: STAR_COLOR_JITTER,
            size_range: (STAR_SIZE_MIN, STAR_SIZE_MAX),
            palette: &STAR_PALETTE,
        }
    }
}

/// Build the flattened spiral star cloud. Always returns exactly `config.count` stars.
pub fn generate_starfield<R: Rng + ?Sized>(config: &GalaxyConfig, rng: &mut R) -> Vec<StarVertex> {
    let (size_min, size_max) = config.size_range;
    let stars = (0..config.count)
        .map(|_| {
            let angle = rng.gen::<f32>() * TAU;
            let radius = rng.gen::<f32>().powf(config.radius_exponent) * config.radius_max;
            let y = (rng.gen::<f32>() - 0.5) * config.band_height;

            let base = config
                .palette
                .choose(&mut *rng)
                .copied()
                .unwrap_or([1.0, 1.0, 1.0]);
            let mut color = [0.0; 3];
            for (out, channel) in color.iter_mut().zip(base) {
                let jitter = (rng.gen::<f32>() - 0.5) * 2.0 * config.color_jitter;
                *out = (channel + jitter).clamp(0.0, 1.0);
            }

            StarVertex {
                position: [angle.cos() * radius, y, angle.sin() * radius],
                color,
                size: size_min + rng.gen::<f32>() * (size_max - size_min),
            }
        })
        .collect::<Vec<_>>();
    log::debug!("[galaxy] generated {} stars", stars.len());
    stars
}

/// Per-frame transform of the star cloud: a slow two-axis spin plus a breathing scale.
#[derive(Clone, Debug)]
pub struct GalaxyMotion {
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub scale: f32,
}

impl Default for GalaxyMotion {
    fn default() -> Self {
        Self {
            rotation_y: 0.0,
            rotation_z: 0.0,
            scale: pulse_scale(0.0),
        }
    }
}

impl GalaxyMotion {
    /// Advance by one rendered frame. Rotation is per frame, the pulse follows wall-clock time.
    pub fn advance(&mut self, elapsed_sec: f32) {
        self.rotation_z += GALAXY_SPIN_Z_PER_FRAME;
        self.rotation_y += GALAXY_SPIN_Y_PER_FRAME;
        self.scale = pulse_scale(elapsed_sec);
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, 0.0, self.rotation_y, self.rotation_z);
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            rotation,
            Vec3::from(GALAXY_OFFSET),
        )
    }
}

#[inline]
pub fn pulse_scale(elapsed_sec: f32) -> f32 {
    GALAXY_PULSE_BASE + GALAXY_PULSE_DEPTH * (elapsed_sec * GALAXY_PULSE_RATE).sin()
}
