// Host-side tests for scroll ownership and scroll-linked timelines.

use folio_core::constants::*;
use folio_core::{
    horizontal_offset, panel_reveal, parallax_timeline_len, ParallaxLayer, PinnedRegion,
    ScrubbedProgress, SmoothScroller,
};

#[test]
fn pinned_progress_is_clamped() {
    let region = PinnedRegion::new(100.0, 200.0);
    assert_eq!(region.progress(0.0), 0.0);
    assert_eq!(region.progress(100.0), 0.0);
    assert_eq!(region.progress(200.0), 0.5);
    assert_eq!(region.progress(300.0), 1.0);
    assert_eq!(region.progress(5000.0), 1.0);
    assert_eq!(region.end(), 300.0);
}

#[test]
fn zero_length_region_is_a_step() {
    let region = PinnedRegion::new(100.0, 0.0);
    assert_eq!(region.progress(99.0), 0.0);
    assert_eq!(region.progress(100.0), 1.0);
    assert_eq!(PinnedRegion::new(0.0, -5.0).distance, 0.0);
}

#[test]
fn region_follows_viewport_on_recompute() {
    let mut region = PinnedRegion::for_viewport(500.0, 800.0, DIVE_DISTANCE_DESKTOP);
    assert_eq!(region.distance, 1600.0);
    region.recompute(400.0, 600.0, DIVE_DISTANCE_MOBILE);
    assert_eq!(region.start, 400.0);
    assert!((region.distance - 720.0).abs() < 1e-3);
}

#[test]
fn scrubbed_progress_trails_without_overshoot() {
    let mut scrub = ScrubbedProgress::new(1.0);
    let mut last = 0.0;
    for _ in 0..600 {
        let v = scrub.step(0.8, 1.0 / 60.0);
        assert!(v >= last && v <= 0.8);
        last = v;
    }
    assert!((last - 0.8).abs() < 1e-3);
    assert!(scrub.step(5.0, 10.0) <= 1.0);
}

#[test]
fn later_regions_follow_a_taller_section_above() {
    // A pinned section sizes itself to vh + distance and the next pinned
    // section starts where it ends. A toolbar collapse grows the viewport.
    let top = 900.0;
    let above = PinnedRegion::for_viewport(top, 700.0, 2.0);
    let mut below = PinnedRegion::for_viewport(top + 700.0 + above.distance, 700.0, PARALLAX_DISTANCE);
    let stale = below;

    let above = PinnedRegion::for_viewport(top, 800.0, 2.0);
    below.recompute(top + 800.0 + above.distance, 800.0, PARALLAX_DISTANCE);

    assert_eq!(below.start, 3300.0);
    assert!(below.start > stale.start);
    // Without the relayout the section would already be part-way through
    // when it reaches the top of the viewport.
    assert!(stale.progress(below.start) > 0.0);
    assert_eq!(below.progress(below.start), 0.0);
    assert_eq!(below.distance, 800.0 * PARALLAX_DISTANCE as f64);
}

#[test]
fn smooth_scroll_glides_to_target() {
    let mut s = SmoothScroller::new(0.0, 1000.0);
    s.wheel(300.0);
    assert_eq!(s.target(), 300.0 * WHEEL_MULTIPLIER);
    assert!(s.is_animating());

    let mut last = s.position();
    let mut frames = 0;
    while s.is_animating() {
        let y = s.step(1.0 / 60.0);
        assert!(y >= last && y <= s.target());
        last = y;
        frames += 1;
        assert!(frames < 200);
    }
    assert_eq!(s.position(), s.target());
    assert!(frames as f32 >= SMOOTH_SCROLL_SECS * 60.0 - 1.0);
}

#[test]
fn input_is_clamped_to_scroll_range() {
    let mut s = SmoothScroller::new(0.0, 500.0);
    s.wheel(-100.0);
    assert_eq!(s.target(), 0.0);
    s.wheel(10_000.0);
    assert_eq!(s.target(), 500.0);
    s.scroll_to(-3.0);
    assert_eq!(s.target(), 0.0);
    s.set_max(200.0);
    s.scroll_to(400.0);
    assert_eq!(s.target(), 200.0);
}

#[test]
fn touch_uses_its_multiplier() {
    let mut s = SmoothScroller::new(0.0, 1000.0);
    s.touch(50.0);
    assert_eq!(s.target(), 50.0 * TOUCH_MULTIPLIER);
}

#[test]
fn sync_adopts_external_position() {
    let mut s = SmoothScroller::new(0.0, 1000.0);
    s.wheel(400.0);
    s.sync(250.0);
    assert!(!s.is_animating());
    assert_eq!(s.position(), 250.0);
    assert_eq!(s.target(), 250.0);
    assert_eq!(s.step(0.1), 250.0);
}

#[test]
fn page_growth_never_pulls_the_page_back() {
    // Mounted against a shorter page; content was appended since.
    let mut s = SmoothScroller::new(0.0, 1000.0);
    s.sync(1500.0);
    assert_eq!(s.position(), 1500.0);

    s.wheel(100.0);
    let mut frames = 0;
    while s.is_animating() {
        let y = s.step(1.0 / 60.0);
        assert!(y >= 1500.0, "wheel down moved the page up to {y}");
        frames += 1;
        assert!(frames < 200);
    }
}

#[test]
fn wheel_reaches_content_added_after_mount() {
    let mut s = SmoothScroller::new(0.0, 1000.0);
    s.set_max(2400.0);
    s.sync(1500.0);
    s.wheel(100.0);
    assert_eq!(s.target(), 1500.0 + 100.0 * WHEEL_MULTIPLIER);
    while s.is_animating() {
        s.step(1.0 / 60.0);
    }
    assert_eq!(s.position(), s.target());

    s.wheel(10_000.0);
    assert_eq!(s.target(), 2400.0);
}

#[test]
fn horizontal_strip_offsets() {
    assert_eq!(horizontal_offset(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(horizontal_offset(0.5, 3000.0, 1000.0), -1000.0);
    assert_eq!(horizontal_offset(1.0, 3000.0, 1000.0), -2000.0);
    assert_eq!(horizontal_offset(2.0, 3000.0, 1000.0), -2000.0);
    assert_eq!(horizontal_offset(0.7, 800.0, 1000.0), 0.0);
}

#[test]
fn panels_fade_in_as_they_slide_into_view() {
    let vw = 1000.0;
    assert_eq!(panel_reveal(1200.0, 400.0, vw), 0.0);
    assert_eq!(panel_reveal(vw, 400.0, vw), 0.0);
    assert_eq!(panel_reveal(500.0, 400.0, vw), 1.0);
    assert_eq!(panel_reveal(-300.0, 400.0, vw), 1.0);
    let mid = panel_reveal(750.0, 400.0, vw);
    assert!((mid - 0.5).abs() < 1e-5);
    assert_eq!(panel_reveal(0.0, 100.0, 0.0), 1.0);
}

#[test]
fn parallax_layers_rise_through_the_viewport() {
    let vh = 1000.0;
    let layer = ParallaxLayer::new(0, vh, false, PARALLAX_STAGGER_DESKTOP);
    assert_eq!(layer.speed, PARALLAX_SPEEDS[0]);
    assert_eq!(layer.start_y, 1500.0);
    assert!((layer.end_y + vh * (1.0 + PARALLAX_SPEEDS[0] * 0.3)).abs() < 1e-3);
    assert_eq!(layer.start_time, PARALLAX_LEAD_IN);

    let before = layer.pose(0.0);
    assert_eq!(before.opacity, 0.0);
    assert_eq!(before.y, layer.start_y);

    let mid = layer.pose(layer.start_time + layer.duration * 0.5);
    assert_eq!(mid.opacity, 1.0);
    assert!(mid.y < layer.start_y && mid.y > layer.end_y);

    let after = layer.pose(layer.end_time() + 1.0);
    assert_eq!(after.opacity, 0.0);
    assert!((after.y - layer.end_y).abs() < 1e-3);
}

#[test]
fn mobile_layers_travel_less_and_stagger_tighter() {
    let vh = 800.0;
    let desktop = ParallaxLayer::new(3, vh, false, PARALLAX_STAGGER_DESKTOP);
    let mobile = ParallaxLayer::new(3, vh, true, PARALLAX_STAGGER_MOBILE);
    assert!(mobile.start_y < desktop.start_y);
    assert!(mobile.end_y > desktop.end_y);
    assert!(mobile.start_time < desktop.start_time);
    assert_eq!(ParallaxLayer::new(12, vh, false, 0.1).speed, PARALLAX_SPEEDS[0]);
}

#[test]
fn timeline_covers_every_layer() {
    let layers: Vec<ParallaxLayer> = (0..12)
        .map(|i| ParallaxLayer::new(i, 900.0, false, PARALLAX_STAGGER_DESKTOP))
        .collect();
    let len = parallax_timeline_len(&layers);
    assert!(layers.iter().all(|l| l.end_time() <= len));
    assert!(layers.iter().any(|l| l.end_time() == len));
    assert_eq!(parallax_timeline_len(&[]), PARALLAX_LEAD_IN);

    let text = ParallaxLayer::text(900.0);
    assert_eq!(text.start_time, 0.0);
    assert_eq!(text.pose(0.0).y, text.start_y);
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn parallax_slide_length_scales_with_speed() {
    for i in 0..PARALLAX_SPEEDS.len() {
        let layer = ParallaxLayer::new(i, 1000.0, false, PARALLAX_STAGGER_DESKTOP);
        assert!(close(layer.duration, PARALLAX_SLIDE / PARALLAX_SPEEDS[i]));
    }
    let first = ParallaxLayer::new(0, 1000.0, false, PARALLAX_STAGGER_DESKTOP);
    assert!(close(first.duration, 2.5 / 1.8));
}

#[test]
fn parallax_fades_use_fixed_timeline_units() {
    let layer = ParallaxLayer::new(0, 1000.0, false, PARALLAX_STAGGER_DESKTOP);
    let start = layer.start_time;
    let slide_end = start + layer.duration;

    assert!(close(layer.pose(start + PARALLAX_FADE * 0.5).opacity, 0.5));
    assert!(close(layer.pose(start + PARALLAX_FADE).opacity, 1.0));

    assert!(close(layer.fade_out_at, slide_end - 0.5));
    assert!(close(layer.pose(layer.fade_out_at - 0.01).opacity, 1.0));
    assert!(close(layer.pose(layer.fade_out_at + PARALLAX_FADE * 0.5).opacity, 0.5));
    // Desktop images are gone before they finish sliding.
    assert_eq!(layer.pose(slide_end).opacity, 0.0);
    assert!(close(layer.end_time(), slide_end));
}

#[test]
fn mobile_fade_out_runs_past_the_slide() {
    let layer = ParallaxLayer::new(0, 800.0, true, PARALLAX_STAGGER_MOBILE);
    let slide_end = layer.start_time + layer.duration;
    assert!(close(layer.fade_out_at, slide_end - 0.2));
    assert!(close(layer.pose(slide_end).opacity, 1.0 - 0.2 / PARALLAX_FADE));
    assert!(close(layer.end_time(), slide_end + 0.1));
    assert!(close(layer.pose(layer.end_time()).opacity, 0.0));
}

#[test]
fn headline_fades_out_before_its_slide_ends() {
    let text = ParallaxLayer::text(900.0);
    assert!(close(text.duration, 1.8));
    assert!(close(text.fade_out_at, 1.4));
    assert!(close(text.pose(0.3).opacity, 1.0));
    assert!(close(text.pose(1.4).opacity, 1.0));
    assert!(close(text.pose(1.55).opacity, 0.5));
    assert!(close(text.pose(1.7).opacity, 0.0));
    assert!(close(text.end_time(), 1.8));
}
