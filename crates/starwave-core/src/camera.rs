//! Fixed scene camera and render-surface sizing.
//!
//! These types avoid platform-specific APIs so both the renderer and the host
//! tests can build matrices and backing-store sizes from plain numbers.

use crate::constants::{
    CAMERA_EYE, CAMERA_FOV_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, DPR_MAX, DPR_MIN,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Update the aspect ratio from a backing-store size. Zero heights are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[inline]
pub fn clamp_device_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}

/// Backing-store pixel size for a CSS box, never smaller than 1x1.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = clamp_device_pixel_ratio(dpr);
    let px = |css: f64| {
        if css.is_finite() && css > 0.0 {
            ((css * dpr) as u32).max(1)
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}
