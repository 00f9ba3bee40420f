//! Scroll-driven page theme.
//!
//! The light "projects" section fades the whole page from dark to light and
//! back. The colours are a pure function of the section's scroll progress;
//! the front-end owns a single place that applies the result.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const PAPER: Rgb = Rgb(0xfa, 0xfa, 0xfa);

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Theme {
    pub const DARK: Theme = Theme {
        background: Rgb::BLACK,
        foreground: Rgb::WHITE,
    };
    pub const LIGHT: Theme = Theme {
        background: Rgb::PAPER,
        foreground: Rgb::BLACK,
    };

    pub fn lerp(self, other: Theme, t: f32) -> Theme {
        Theme {
            background: self.background.lerp(other.background, t),
            foreground: self.foreground.lerp(other.foreground, t),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::DARK
    }
}

/// Progress thresholds of a dark -> light -> dark section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeTransition {
    pub outside: Theme,
    pub inside: Theme,
    pub enter_start: f32,
    pub enter_end: f32,
    pub leave_start: f32,
}

impl ThemeTransition {
    pub fn light_section() -> Self {
        Self {
            outside: Theme::DARK,
            inside: Theme::LIGHT,
            enter_start: 0.15,
            enter_end: 0.25,
            leave_start: 0.85,
        }
    }

    pub fn at(&self, progress: f32) -> Theme {
        let p = progress.clamp(0.0, 1.0);
        if p < self.enter_start {
            self.outside
        } else if p < self.enter_end {
            let t = (p - self.enter_start) / (self.enter_end - self.enter_start);
            self.outside.lerp(self.inside, t)
        } else if p > self.leave_start {
            let t = (p - self.leave_start) / (1.0 - self.leave_start);
            self.inside.lerp(self.outside, t)
        } else {
            self.inside
        }
    }
}
