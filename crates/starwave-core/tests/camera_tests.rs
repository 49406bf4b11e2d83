// Host-side tests for camera setup and backing-store sizing.

use glam::Vec3;
use starwave_core::{backing_size, clamp_device_pixel_ratio, Camera};

#[test]
fn device_pixel_ratio_is_clamped() {
    assert_eq!(clamp_device_pixel_ratio(0.5), 1.0);
    assert_eq!(clamp_device_pixel_ratio(1.5), 1.5);
    assert_eq!(clamp_device_pixel_ratio(3.0), 2.0);
    assert_eq!(clamp_device_pixel_ratio(f64::NAN), 1.0);
}

#[test]
fn backing_size_scales_and_never_hits_zero() {
    assert_eq!(backing_size(800.0, 600.0, 3.0), (1600, 1200));
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(0.0, -5.0, 2.0), (1, 1));
}

#[test]
fn default_camera_looks_at_origin_from_above_front() {
    let cam = Camera::default();
    assert_eq!(cam.eye, Vec3::new(0.0, 2.5, 7.0));
    assert!((cam.fovy_radians - 45f32.to_radians()).abs() < 1e-6);
    let origin_view = cam.view_matrix().transform_point3(Vec3::ZERO);
    // Right-handed view space: the target sits straight ahead on -Z
    assert!(origin_view.x.abs() < 1e-5 && origin_view.y.abs() < 1e-5);
    assert!(origin_view.z < 0.0);
}

#[test]
fn viewport_updates_aspect_and_ignores_zero() {
    let mut cam = Camera::default();
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.set_viewport(0, 1080);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
}
