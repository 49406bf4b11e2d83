// Host-side tests for starfield generation and motion.

use rand::rngs::StdRng;
use rand::SeedableRng;
use starwave_core::constants::*;
use starwave_core::{generate_starfield, pulse_scale, GalaxyConfig, GalaxyMotion};

#[test]
fn starfield_has_fixed_count_for_any_seed() {
    let config = GalaxyConfig::default();
    for seed in [0_u64, 1, 42, 9_999] {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = generate_starfield(&config, &mut rng);
        assert_eq!(stars.len(), STAR_COUNT, "seed {seed}");
    }
}

#[test]
fn starfield_stays_within_disk_and_band() {
    let config = GalaxyConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let half_band = STAR_BAND_HEIGHT * 0.5;
    for s in generate_starfield(&config, &mut rng) {
        let [x, y, z] = s.position;
        let r = (x * x + z * z).sqrt();
        assert!(r <= STAR_RADIUS_MAX + 1e-3, "radius {r} out of range");
        assert!((-half_band..=half_band).contains(&y), "y {y} outside band");
    }
}

#[test]
fn starfield_colors_and_sizes_in_range() {
    let config = GalaxyConfig::default();
    let mut rng = StdRng::seed_from_u64(11);
    for s in generate_starfield(&config, &mut rng) {
        for c in s.color {
            assert!((0.0..=1.0).contains(&c), "channel {c}");
        }
        assert!(s.size >= STAR_SIZE_MIN && s.size <= STAR_SIZE_MAX, "size {}", s.size);
    }
}

#[test]
fn starfield_density_biased_toward_center() {
    let config = GalaxyConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let stars = generate_starfield(&config, &mut rng);
    let inner = stars
        .iter()
        .filter(|s| {
            let [x, _, z] = s.position;
            (x * x + z * z).sqrt() < STAR_RADIUS_MAX * 0.5
        })
        .count();
    // u^0.6 < 0.5 for u < 0.5^(1/0.6) ~= 0.315
    let share = inner as f32 / stars.len() as f32;
    assert!(share > 0.25 && share < 0.38, "inner share {share}");
}

#[test]
fn same_seed_generates_same_cloud() {
    let config = GalaxyConfig::default();
    let a = generate_starfield(&config, &mut StdRng::seed_from_u64(5));
    let b = generate_starfield(&config, &mut StdRng::seed_from_u64(5));
    assert_eq!(a, b);
}

#[test]
fn motion_rotates_slowly_per_frame() {
    let mut motion = GalaxyMotion::default();
    for frame in 0..600 {
        motion.advance(frame as f32 / 60.0);
    }
    assert!((motion.rotation_z - 600.0 * GALAXY_SPIN_Z_PER_FRAME).abs() < 1e-5);
    assert!((motion.rotation_y - 600.0 * GALAXY_SPIN_Y_PER_FRAME).abs() < 1e-5);
    // Ten seconds of frames is far from a full turn
    assert!(motion.rotation_z < 0.1);
}

#[test]
fn pulse_breathes_between_bounds() {
    for i in 0..1000 {
        let s = pulse_scale(i as f32 * 0.05);
        assert!(s >= 0.2 - 1e-5 && s <= 1.2 + 1e-5, "scale {s}");
    }
    assert!((pulse_scale(0.0) - 0.7).abs() < 1e-6);
}

#[test]
fn model_matrix_places_cloud_behind_scene() {
    let motion = GalaxyMotion::default();
    let m = motion.model_matrix();
    let origin = m.transform_point3(glam::Vec3::ZERO);
    assert!((origin - glam::Vec3::from(GALAXY_OFFSET)).length() < 1e-6);
}
