// Host-side tests for the glow particle field.

use folio_core::constants::*;
use folio_core::ParticleField;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(count: usize, w: f32, h: f32) -> ParticleField {
    ParticleField::new(count, w, h, &mut StdRng::seed_from_u64(7))
}

#[test]
fn produces_exactly_the_requested_count() {
    for n in [0, 1, PARTICLE_COUNT_MOBILE, PARTICLE_COUNT_DESKTOP, 200] {
        let mut f = field(n, 800.0, 600.0);
        assert_eq!(f.len(), n);
        assert_eq!(f.frame().len(), n);
    }
}

#[test]
fn particle_attributes_stay_in_range() {
    let f = field(500, 800.0, 600.0);
    for p in f.particles() {
        assert!(p.size == 1.0 || p.size == 1.5);
        assert!((0.3..=0.6).contains(&p.speed));
        assert!((0.2..=0.5).contains(&p.opacity));
        assert!((0.0..=std::f32::consts::TAU).contains(&p.phase_x));
        assert!((0.0..=std::f32::consts::TAU).contains(&p.phase_y));
    }
}

#[test]
fn dots_stay_near_the_surface_forever() {
    let (w, h) = (320.0, 240.0);
    let mut f = field(60, w, h);
    let m = PARTICLE_WRAP_MARGIN;
    for _ in 0..5000 {
        f.step(PARTICLE_MAX_DT);
        for dot in f.frame() {
            assert!(dot.x >= -m - PARTICLE_DRIFT_X && dot.x <= w + m + PARTICLE_DRIFT_X);
            assert!(dot.y >= -m - PARTICLE_DRIFT_Y && dot.y <= h + m + PARTICLE_DRIFT_Y);
        }
    }
}

#[test]
fn pulse_keeps_opacity_within_sixty_to_hundred_percent() {
    let mut f = field(40, 800.0, 600.0);
    let base: Vec<f32> = f.particles().iter().map(|p| p.opacity).collect();
    for _ in 0..200 {
        f.step(0.016);
        for (dot, o) in f.frame().iter().zip(&base) {
            assert!(dot.opacity >= o * 0.6 - 1e-5);
            assert!(dot.opacity <= o * 1.0 + 1e-5);
        }
    }
}

#[test]
fn glow_and_core_radii_follow_size() {
    let mut f = field(20, 800.0, 600.0);
    let sizes: Vec<f32> = f.particles().iter().map(|p| p.size).collect();
    for (dot, size) in f.frame().iter().zip(sizes) {
        assert_eq!(dot.glow_radius, size * PARTICLE_GLOW_SCALE);
        assert_eq!(dot.core_radius, size * PARTICLE_CORE_SCALE);
    }
}

#[test]
fn long_frames_are_clamped() {
    let mut f = field(5, 100.0, 100.0);
    f.step(10.0);
    assert_eq!(f.elapsed(), PARTICLE_MAX_DT);
    f.step(-1.0);
    assert_eq!(f.elapsed(), PARTICLE_MAX_DT);
}

#[test]
fn resize_rescales_positions() {
    let mut f = field(30, 100.0, 100.0);
    let before: Vec<(f32, f32)> = f.particles().iter().map(|p| (p.x, p.base_y)).collect();
    f.resize(200.0, 50.0);
    assert_eq!(f.size(), (200.0, 50.0));
    for (p, (x, y)) in f.particles().iter().zip(before) {
        assert!((p.x - x * 2.0).abs() < 1e-3);
        assert!((p.base_y - y * 0.5).abs() < 1e-3);
    }
}
