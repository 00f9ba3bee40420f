// Host-side tests for the scroll-driven starfield.

use folio_core::constants::*;
use folio_core::{DiveState, Starfield};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn depths(field: &Starfield) -> Vec<f32> {
    field.stars().iter().map(|s| s.z).collect()
}

fn assert_in_range(field: &Starfield) {
    for s in field.stars() {
        assert!(
            (STAR_NEAR..=STAR_FAR).contains(&s.z),
            "star left the depth range: z = {}",
            s.z
        );
    }
}

#[test]
fn new_field_has_count_stars_in_range() {
    let mut rng = StdRng::seed_from_u64(1);
    let field = Starfield::new(STAR_COUNT_DESKTOP, 1280.0, 720.0, &mut rng);
    assert_eq!(field.stars().len(), STAR_COUNT_DESKTOP);
    assert_in_range(&field);
    assert_eq!(field.state(), DiveState::Idle);
}

#[test]
fn depth_stays_in_range_under_random_scrolling() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut field = Starfield::new(300, 800.0, 600.0, &mut rng);
    let mut progress_rng = StdRng::seed_from_u64(3);
    for _ in 0..2000 {
        let p = match progress_rng.gen_range(0..4) {
            0 => field.progress(),
            1 => 0.0,
            2 => 1.0,
            _ => progress_rng.gen::<f32>(),
        };
        field.update(p, &mut rng);
        assert_in_range(&field);
    }
}

#[test]
fn idle_frames_drift_slowly_toward_the_camera() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut field = Starfield::new(200, 800.0, 600.0, &mut rng);
    let before = depths(&field);
    assert_eq!(field.update(0.0, &mut rng), DiveState::Idle);
    for (z0, z1) in before.iter().zip(depths(&field)) {
        if z0 - STAR_IDLE_DRIFT >= STAR_NEAR {
            assert!((z1 - (z0 - STAR_IDLE_DRIFT)).abs() < 1e-3);
        } else {
            assert_eq!(z1, STAR_FAR);
        }
    }
}

#[test]
fn scrolling_moves_depth_by_accelerated_progress_delta() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = Starfield::new(200, 800.0, 600.0, &mut rng);
    let before = depths(&field);
    assert_eq!(field.update(0.1, &mut rng), DiveState::Scrolling);
    let dz = 0.1 * STAR_Z_PER_PROGRESS * (1.0 + 0.1 * STAR_ACCEL);
    for (z0, z1) in before.iter().zip(depths(&field)) {
        if z0 - dz >= STAR_NEAR {
            assert!((z1 - (z0 - dz)).abs() < 1e-2);
        } else {
            assert_eq!(z1, STAR_FAR);
        }
    }
}

#[test]
fn scrolling_back_respawns_stars_near_the_camera() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut field = Starfield::new(200, 800.0, 600.0, &mut rng);
    field.update(1.0, &mut rng);
    field.update(0.0, &mut rng);
    assert_eq!(field.state(), DiveState::Scrolling);
    assert_in_range(&field);
    assert!(field.stars().iter().any(|s| s.z == STAR_NEAR));
}

#[test]
fn sprites_grow_and_brighten_as_stars_approach() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = Starfield::new(100, 800.0, 600.0, &mut rng);
    for (star, sprite) in field.stars().iter().zip(field.frame()) {
        let t = 1.0 - star.z / STAR_FAR;
        assert!((sprite.size - t * STAR_MAX_SIZE).abs() < 1e-4);
        assert!(sprite.brightness <= 1.0);
        assert!((sprite.brightness - t.min(1.0)).abs() < 1e-4);
    }
}

#[test]
fn trails_only_while_scrolling_fast() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut field = Starfield::new(200, 800.0, 600.0, &mut rng);
    field.update(0.0, &mut rng);
    assert!(field.frame().iter().all(|s| s.trail_from.is_none()));

    field.update(0.05, &mut rng);
    assert!(field.frame().iter().any(|s| s.trail_from.is_some()));

    field.update(0.05, &mut rng);
    assert_eq!(field.state(), DiveState::Idle);
    assert!(field.frame().iter().all(|s| s.trail_from.is_none()));
}
