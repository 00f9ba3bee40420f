//! Marquee rows and their playback-rate controller.
//!
//! The controller owns an arena of per-row motion parameters indexed by
//! [`RowId`]. The front-end reads playback rates from it every frame and writes
//! them straight onto the row animations, so none of this lives in any
//! render state.

use crate::constants::*;
use crate::easing::Eased;
use crate::projects::{marquee_rows, shuffled, Project};
use rand::Rng;
use smallvec::SmallVec;

pub type RowId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn for_row(row: RowId) -> Self {
        if row % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RowMotion {
    pub hover: Eased,
}

impl Default for RowMotion {
    fn default() -> Self {
        Self {
            hover: Eased::new(1.0, MARQUEE_HOVER_EASE),
        }
    }
}

pub struct MarqueeController {
    speed: Eased,
    rows: Vec<RowMotion>,
    last_scroll_y: f64,
    last_scroll_ms: f64,
    idle_deadline_ms: Option<f64>,
}

impl MarqueeController {
    pub fn new(row_count: usize, scroll_y: f64, now_ms: f64) -> Self {
        Self {
            speed: Eased::new(MARQUEE_BASE_SPEED, MARQUEE_SPEED_EASE),
            rows: vec![RowMotion::default(); row_count],
            last_scroll_y: scroll_y,
            last_scroll_ms: now_ms,
            idle_deadline_ms: None,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn target_speed(&self) -> f32 {
        self.speed.target
    }

    pub fn current_speed(&self) -> f32 {
        self.speed.current
    }

    pub fn idle_deadline(&self) -> Option<f64> {
        self.idle_deadline_ms
    }

    /// Record a scroll sample and boost the target speed by the observed
    /// velocity. Re-arms the idle deadline.
    pub fn on_scroll(&mut self, scroll_y: f64, now_ms: f64) -> f32 {
        let dy = (scroll_y - self.last_scroll_y).abs();
        let dt = (now_ms - self.last_scroll_ms).max(MARQUEE_MIN_SAMPLE_MS);
        self.last_scroll_y = scroll_y;
        self.last_scroll_ms = now_ms;

        let velocity = (dy / dt) as f32;
        let boost = (velocity * MARQUEE_VELOCITY_GAIN).min(MARQUEE_BOOST_CAP);
        self.speed.set_target(MARQUEE_BASE_SPEED + boost);
        self.idle_deadline_ms = Some(now_ms + MARQUEE_IDLE_TIMEOUT_MS);
        self.speed.target
    }

    /// Scrolling stopped: fall back to the baseline target.
    pub fn on_idle(&mut self) {
        self.speed.set_target(MARQUEE_BASE_SPEED);
        self.idle_deadline_ms = None;
    }

    /// Apply the idle fallback if its deadline has passed.
    pub fn tick(&mut self, now_ms: f64) {
        if matches!(self.idle_deadline_ms, Some(deadline) if now_ms >= deadline) {
            self.on_idle();
        }
    }

    pub fn hover_enter(&mut self, row: RowId) {
        if let Some(r) = self.rows.get_mut(row) {
            r.hover.set_target(MARQUEE_HOVER_FACTOR);
        }
    }

    pub fn hover_leave(&mut self, row: RowId) {
        if let Some(r) = self.rows.get_mut(row) {
            r.hover.set_target(1.0);
        }
    }

    pub fn playback_rate(&self, row: RowId) -> f32 {
        let hover = self.rows.get(row).map_or(1.0, |r| r.hover.current);
        self.speed.current * hover
    }

    /// Ease global speed and every row's hover factor one frame, returning the
    /// resulting playback rate per row.
    pub fn step(&mut self) -> SmallVec<[f32; 4]> {
        let speed = self.speed.step();
        self.rows
            .iter_mut()
            .map(|r| speed * r.hover.step())
            .collect()
    }
}

/// One looping row: the source items repeated [`MARQUEE_REPEAT`] times so
/// translating by exactly one copy (25%) lands on identical content.
#[derive(Clone, Debug)]
pub struct LoopRow<T> {
    items: Vec<T>,
    repeated: Vec<T>,
    pub duration_secs: f32,
    pub direction: Direction,
}

impl<T: Clone> LoopRow<T> {
    pub fn new(items: Vec<T>, row: RowId) -> Self {
        let repeated = items
            .iter()
            .cloned()
            .cycle()
            .take(items.len() * MARQUEE_REPEAT)
            .collect();
        Self {
            items,
            repeated,
            duration_secs: MARQUEE_ROW_SECS
                .get(row)
                .copied()
                .unwrap_or(MARQUEE_FALLBACK_SECS),
            direction: Direction::for_row(row),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn repeated(&self) -> &[T] {
        &self.repeated
    }

    pub fn item_at(&self, i: usize) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(i % self.items.len())
    }
}

impl<T> LoopRow<T> {
    /// Fraction of the row width covered by one copy of the content.
    pub fn seam_fraction(&self) -> f32 {
        1.0 / MARQUEE_REPEAT as f32
    }

    /// Start and end `translateX` percentages of one loop iteration.
    pub fn keyframes(&self) -> (f32, f32) {
        let seam = -100.0 * self.seam_fraction();
        match self.direction {
            Direction::Left => (0.0, seam),
            Direction::Right => (seam, 0.0),
        }
    }

    /// `translateX` percentage at loop phase `t` in \[0, 1).
    pub fn offset_at(&self, t: f32) -> f32 {
        let (from, to) = self.keyframes();
        from + (to - from) * t.rem_euclid(1.0)
    }
}

/// Shuffle the featured projects and lay them out as looping rows.
pub fn build_rows<'a, R: Rng + ?Sized>(
    featured: &[&'a Project],
    rng: &mut R,
) -> Vec<LoopRow<&'a Project>> {
    let mixed = shuffled(featured, rng);
    marquee_rows(&mixed, MARQUEE_MIN_PER_ROW)
        .into_iter()
        .enumerate()
        .map(|(i, items)| LoopRow::new(items, i))
        .collect()
}
