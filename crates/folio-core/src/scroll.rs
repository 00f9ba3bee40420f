//! Scroll position ownership and scroll-linked timelines.

use crate::constants::*;
use crate::easing::{scrub_alpha, smooth_scroll};

/// A section pinned to the viewport while the page scrolls `distance` px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedRegion {
    pub start: f64,
    pub distance: f64,
}

impl PinnedRegion {
    pub fn new(start: f64, distance: f64) -> Self {
        Self {
            start,
            distance: distance.max(0.0),
        }
    }

    /// Region whose length is `factor` viewport heights.
    pub fn for_viewport(section_top: f64, viewport_h: f64, factor: f32) -> Self {
        Self::new(section_top, viewport_h * factor as f64)
    }

    pub fn recompute(&mut self, section_top: f64, viewport_h: f64, factor: f32) {
        *self = Self::for_viewport(section_top, viewport_h, factor);
    }

    pub fn progress(&self, scroll_y: f64) -> f32 {
        if self.distance <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / self.distance).clamp(0.0, 1.0) as f32
    }

    pub fn end(&self) -> f64 {
        self.start + self.distance
    }
}

/// Progress that trails the raw scroll progress with a fixed lag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubbedProgress {
    pub value: f32,
    pub lag_secs: f32,
}

impl ScrubbedProgress {
    pub fn new(lag_secs: f32) -> Self {
        Self {
            value: 0.0,
            lag_secs,
        }
    }

    pub fn step(&mut self, raw: f32, dt_secs: f32) -> f32 {
        let a = scrub_alpha(dt_secs, self.lag_secs);
        self.value += (raw.clamp(0.0, 1.0) - self.value) * a;
        self.value
    }
}

/// Owns the page scroll position: input only moves the target, and the
/// position glides to it over [`SMOOTH_SCROLL_SECS`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroller {
    position: f32,
    from: f32,
    target: f32,
    elapsed: f32,
    max: f32,
}

impl SmoothScroller {
    pub fn new(position: f32, max: f32) -> Self {
        let max = max.max(0.0);
        let position = position.clamp(0.0, max);
        Self {
            position,
            from: position,
            target: position,
            elapsed: SMOOTH_SCROLL_SECS,
            max,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.elapsed < SMOOTH_SCROLL_SECS
    }

    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.target = self.target.min(self.max);
        self.position = self.position.min(self.max);
    }

    fn retarget(&mut self, target: f32) {
        self.from = self.position;
        self.target = target.clamp(0.0, self.max);
        self.elapsed = 0.0;
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.retarget(self.target + delta_y * WHEEL_MULTIPLIER);
    }

    pub fn touch(&mut self, delta_y: f32) {
        self.retarget(self.target + delta_y * TOUCH_MULTIPLIER);
    }

    pub fn scroll_to(&mut self, y: f32) {
        self.retarget(y);
    }

    /// Re-sync after the browser moved the page on its own (keyboard,
    /// anchor links, scrollbar drag). The browser's position is trusted: if it
    /// lies past `max` the page has grown since `max` was measured.
    pub fn sync(&mut self, y: f32) {
        let y = y.max(0.0);
        self.max = self.max.max(y);
        self.position = y;
        self.from = y;
        self.target = y;
        self.elapsed = SMOOTH_SCROLL_SECS;
    }

    pub fn step(&mut self, dt_secs: f32) -> f32 {
        if !self.is_animating() {
            return self.position;
        }
        self.elapsed = (self.elapsed + dt_secs.max(0.0)).min(SMOOTH_SCROLL_SECS);
        let t = smooth_scroll(self.elapsed / SMOOTH_SCROLL_SECS);
        self.position = self.from + (self.target - self.from) * t;
        if !self.is_animating() {
            self.position = self.target;
        }
        self.position
    }
}

/// Fade-in of a narrative panel whose left edge is at `screen_left`:
/// 0 while it is fully off to the right, 1 once its left edge reaches the
/// middle of the viewport. Wide panels travel further before they are fully
/// shown.
pub fn panel_reveal(screen_left: f32, panel_w: f32, viewport_w: f32) -> f32 {
    if viewport_w <= 0.0 {
        return 1.0;
    }
    let hidden_at = viewport_w;
    let shown_at = (viewport_w * 0.5).min(viewport_w - panel_w.max(0.0) * 0.5);
    if hidden_at <= shown_at {
        return 1.0;
    }
    ((hidden_at - screen_left) / (hidden_at - shown_at)).clamp(0.0, 1.0)
}

/// `translateX` in px for a horizontally scrolling strip.
pub fn horizontal_offset(progress: f32, content_w: f32, viewport_w: f32) -> f32 {
    -progress.clamp(0.0, 1.0) * (content_w - viewport_w).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxPose {
    pub y: f32,
    pub opacity: f32,
}

/// One image of the parallax reveal: rises from below the viewport to above
/// it on a shared, scroll-scrubbed timeline. Fades are in timeline units and
/// do not stretch with the slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub speed: f32,
    pub start_y: f32,
    pub end_y: f32,
    pub start_time: f32,
    pub duration: f32,
    /// Timeline time at which the fade-out begins.
    pub fade_out_at: f32,
}

impl ParallaxLayer {
    pub fn new(index: usize, viewport_h: f32, mobile: bool, stagger: f32) -> Self {
        let speed = PARALLAX_SPEEDS[index % PARALLAX_SPEEDS.len()];
        let (start_y, end_y, fade_lead) = if mobile {
            (
                viewport_h * 1.2,
                -viewport_h * (0.7 + speed * 0.2),
                PARALLAX_FADE_OUT_LEAD_MOBILE,
            )
        } else {
            (
                viewport_h * 1.5,
                -viewport_h * (1.0 + speed * 0.3),
                PARALLAX_FADE_OUT_LEAD_DESKTOP,
            )
        };
        let start_time = PARALLAX_LEAD_IN + index as f32 * stagger;
        let duration = PARALLAX_SLIDE / speed;
        Self {
            speed,
            start_y,
            end_y,
            start_time,
            duration,
            fade_out_at: start_time + duration - fade_lead,
        }
    }

    /// Pose at timeline time `t` (in timeline units, not seconds).
    pub fn pose(&self, t: f32) -> ParallaxPose {
        let local = ((t - self.start_time) / self.duration).clamp(0.0, 1.0);
        let opacity = if t <= self.start_time {
            0.0
        } else {
            let fade_in = (t - self.start_time) / PARALLAX_FADE;
            let fade_out = 1.0 - (t - self.fade_out_at) / PARALLAX_FADE;
            fade_in.min(fade_out).clamp(0.0, 1.0)
        };
        ParallaxPose {
            y: self.start_y + (self.end_y - self.start_y) * local,
            opacity,
        }
    }

    /// The headline that rises through the image stack, starting at t = 0.
    pub fn text(viewport_h: f32) -> Self {
        Self {
            speed: 1.0,
            start_y: viewport_h * 1.2,
            end_y: -viewport_h * 0.8,
            start_time: 0.0,
            duration: PARALLAX_TEXT_SLIDE,
            fade_out_at: PARALLAX_TEXT_SLIDE - PARALLAX_TEXT_FADE_OUT_LEAD,
        }
    }

    /// End of the later of the slide and the fade-out.
    pub fn end_time(&self) -> f32 {
        (self.start_time + self.duration).max(self.fade_out_at + PARALLAX_FADE)
    }
}

/// Timeline length covering every layer, used to map scroll progress onto
/// timeline time.
pub fn parallax_timeline_len(layers: &[ParallaxLayer]) -> f32 {
    layers
        .iter()
        .map(ParallaxLayer::end_time)
        .fold(PARALLAX_LEAD_IN, f32::max)
}
