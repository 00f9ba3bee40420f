// Host-side tests for marquee rows and the velocity controller.

use folio_core::constants::*;
use folio_core::{build_rows, Direction, LoopRow, MarqueeController, ProjectCatalog};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn settle(c: &mut MarqueeController) {
    for _ in 0..400 {
        c.step();
    }
}

#[test]
fn starts_at_baseline() {
    let c = MarqueeController::new(3, 0.0, 0.0);
    assert_eq!(c.row_count(), 3);
    assert_eq!(c.target_speed(), MARQUEE_BASE_SPEED);
    assert_eq!(c.current_speed(), MARQUEE_BASE_SPEED);
    assert_eq!(c.idle_deadline(), None);
}

#[test]
fn scroll_velocity_boosts_target_up_to_cap() {
    let mut c = MarqueeController::new(2, 0.0, 0.0);
    // 0.5 px/ms -> boost 0.75
    let t = c.on_scroll(50.0, 100.0);
    assert!((t - (MARQUEE_BASE_SPEED + 0.75)).abs() < 1e-5);

    // 20 px/ms would be a 30x boost; capped.
    let t = c.on_scroll(2050.0, 200.0);
    assert!((t - (MARQUEE_BASE_SPEED + MARQUEE_BOOST_CAP)).abs() < 1e-5);
}

#[test]
fn short_sample_intervals_use_minimum_dt() {
    let mut c = MarqueeController::new(1, 0.0, 0.0);
    // 8 px over 2 ms is measured over 16 ms: 0.5 px/ms.
    let t = c.on_scroll(8.0, 2.0);
    assert!((t - (MARQUEE_BASE_SPEED + 0.75)).abs() < 1e-5);
}

#[test]
fn speed_decays_to_baseline_after_idle_timeout() {
    let mut c = MarqueeController::new(2, 0.0, 0.0);
    c.on_scroll(400.0, 100.0);
    assert_eq!(c.idle_deadline(), Some(100.0 + MARQUEE_IDLE_TIMEOUT_MS));
    settle(&mut c);
    assert!(c.current_speed() > 1.0);

    c.tick(100.0 + MARQUEE_IDLE_TIMEOUT_MS - 1.0);
    assert!(c.target_speed() > MARQUEE_BASE_SPEED);

    c.tick(100.0 + MARQUEE_IDLE_TIMEOUT_MS);
    assert_eq!(c.target_speed(), MARQUEE_BASE_SPEED);
    assert_eq!(c.idle_deadline(), None);

    let mut last = c.current_speed();
    for _ in 0..400 {
        c.step();
        assert!(c.current_speed() <= last);
        assert!(c.current_speed() >= MARQUEE_BASE_SPEED);
        last = c.current_speed();
    }
    assert!((last - MARQUEE_BASE_SPEED).abs() < 1e-3);
}

#[test]
fn new_scroll_rearms_the_deadline() {
    let mut c = MarqueeController::new(1, 0.0, 0.0);
    c.on_scroll(10.0, 100.0);
    c.on_scroll(20.0, 250.0);
    c.tick(320.0);
    assert!(c.target_speed() > MARQUEE_BASE_SPEED);
    c.on_idle();
    assert_eq!(c.target_speed(), MARQUEE_BASE_SPEED);
}

#[test]
fn hover_slows_only_that_row() {
    let mut c = MarqueeController::new(3, 0.0, 0.0);
    c.hover_enter(1);
    settle(&mut c);
    let rates = c.step();
    assert_eq!(rates.len(), 3);
    assert!((rates[0] - MARQUEE_BASE_SPEED).abs() < 1e-4);
    assert!((rates[1] - MARQUEE_BASE_SPEED * MARQUEE_HOVER_FACTOR).abs() < 1e-4);
    assert!((c.playback_rate(1) - rates[1]).abs() < 1e-6);

    c.hover_leave(1);
    settle(&mut c);
    assert!((c.playback_rate(1) - MARQUEE_BASE_SPEED).abs() < 1e-4);
}

#[test]
fn unknown_rows_are_ignored() {
    let mut c = MarqueeController::new(1, 0.0, 0.0);
    c.hover_enter(7);
    c.hover_leave(7);
    assert_eq!(c.playback_rate(7), c.current_speed());
}

#[test]
fn loop_row_repeats_content_four_times() {
    let row = LoopRow::new(vec!['a', 'b', 'c', 'd', 'e'], 0);
    assert_eq!(row.repeated().len(), 5 * MARQUEE_REPEAT);
    for i in 0..row.repeated().len() - 5 {
        assert_eq!(row.repeated()[i], row.repeated()[i + 5]);
    }
    for i in 0..50 {
        assert_eq!(row.item_at(i), row.item_at(i + 5));
    }
    assert_eq!(row.seam_fraction(), 0.25);
}

#[test]
fn rows_alternate_direction_and_pick_durations() {
    let left = LoopRow::new(vec![1, 2], 0);
    let right = LoopRow::new(vec![1, 2], 3);
    let overflow = LoopRow::new(vec![1, 2], 12);

    assert_eq!(left.direction, Direction::Left);
    assert_eq!(left.keyframes(), (0.0, -25.0));
    assert_eq!(left.duration_secs, MARQUEE_ROW_SECS[0]);

    assert_eq!(right.direction, Direction::Right);
    assert_eq!(right.keyframes(), (-25.0, 0.0));
    assert_eq!(right.duration_secs, MARQUEE_ROW_SECS[3]);

    assert_eq!(overflow.duration_secs, MARQUEE_FALLBACK_SECS);
}

#[test]
fn offset_wraps_at_the_seam() {
    let row = LoopRow::new(vec![1, 2, 3], 0);
    assert_eq!(row.offset_at(0.0), 0.0);
    assert!((row.offset_at(0.5) + 12.5).abs() < 1e-5);
    assert_eq!(row.offset_at(1.0), row.offset_at(0.0));
}

#[test]
fn empty_row_has_no_items() {
    let row: LoopRow<u8> = LoopRow::new(Vec::new(), 0);
    assert!(row.repeated().is_empty());
    assert_eq!(row.item_at(3), None);
}

#[test]
fn rows_use_every_featured_project_once() {
    let catalog = ProjectCatalog::embedded().unwrap();
    let featured = catalog.featured();
    let rows = build_rows(&featured, &mut StdRng::seed_from_u64(11));

    let total: usize = rows.iter().map(|r| r.items().len()).sum();
    assert_eq!(total, featured.len());
    assert_eq!(rows.len(), (featured.len() / MARQUEE_MIN_PER_ROW).max(1));
    assert!(rows.iter().all(|r| r.items().len() >= MARQUEE_MIN_PER_ROW));

    let mut ids: Vec<&str> = rows
        .iter()
        .flat_map(|r| r.items().iter().map(|p| p.id.as_str()))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), featured.len());
}
