/// Move `current` toward `target` by `factor` of the remaining distance.
///
/// `factor` is clamped to \[0, 1\], so the result always lies between the two
/// inputs and the gap never grows.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor.clamp(0.0, 1.0)
}

/// A value that eases toward a target once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eased {
    pub current: f32,
    pub target: f32,
    pub factor: f32,
}

impl Eased {
    pub fn new(value: f32, factor: f32) -> Self {
        Self {
            current: value,
            target: value,
            factor,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    #[inline]
    pub fn step(&mut self) -> f32 {
        self.current = approach(self.current, self.target, self.factor);
        self.current
    }

    #[inline]
    pub fn settled(&self, eps: f32) -> bool {
        (self.current - self.target).abs() <= eps
    }
}

// powerN curves are polynomials of degree N + 1.
#[inline]
pub fn power2_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

#[inline]
pub fn power3_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

#[inline]
pub fn power4_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(5)
}

/// Exponential-out curve used by the smooth scroller.
#[inline]
pub fn smooth_scroll(t: f32) -> f32 {
    (1.001 - 2f32.powf(-10.0 * t.max(0.0))).min(1.0)
}

/// Blend factor for a value trailing its input with time constant `lag_secs`.
#[inline]
pub fn scrub_alpha(dt_secs: f32, lag_secs: f32) -> f32 {
    if lag_secs <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt_secs.max(0.0) / lag_secs).exp()
}
