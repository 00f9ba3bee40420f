//! Intro loader: a short sequence of flash frames, then a welcome screen.
//! The hero animations only start once the visitor scrolls past the welcome.

use crate::constants::{LOADER_FRAME_MS, LOADER_REVEAL_SCROLL_PX};

pub const FLASH_FRAMES: [&str; 2] = ["Hello there", "Crafting your experience"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Flash(usize),
    Welcome,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderSequence {
    elapsed_ms: f64,
    revealed: bool,
}

impl Default for LoaderSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderSequence {
    pub fn new() -> Self {
        Self {
            elapsed_ms: 0.0,
            revealed: false,
        }
    }

    /// Each flash frame advances after one frame period. The last frame is
    /// noticed one period after it appears and stays up for one more before
    /// the welcome, so it is held twice as long as the others.
    pub fn welcome_at_ms() -> f64 {
        (FLASH_FRAMES.len() + 1) as f64 * LOADER_FRAME_MS
    }

    pub fn phase(&self) -> LoaderPhase {
        if self.revealed {
            LoaderPhase::Revealed
        } else if self.elapsed_ms >= Self::welcome_at_ms() {
            LoaderPhase::Welcome
        } else {
            let idx = (self.elapsed_ms / LOADER_FRAME_MS) as usize;
            LoaderPhase::Flash(idx.min(FLASH_FRAMES.len() - 1))
        }
    }

    pub fn advance(&mut self, elapsed_ms: f64) -> LoaderPhase {
        self.elapsed_ms += elapsed_ms.max(0.0);
        self.phase()
    }

    /// Move to an absolute time since the loader started. Never rewinds.
    pub fn advance_to(&mut self, since_start_ms: f64) -> LoaderPhase {
        self.elapsed_ms = self.elapsed_ms.max(since_start_ms);
        self.phase()
    }

    /// Times since start at which the phase changes on its own: each later
    /// flash frame, then the welcome.
    pub fn change_points() -> impl Iterator<Item = f64> {
        (1..FLASH_FRAMES.len())
            .map(|i| i as f64 * LOADER_FRAME_MS)
            .chain(std::iter::once(Self::welcome_at_ms()))
    }

    /// Scroll past the threshold while the welcome is showing reveals the
    /// rest of the page. Earlier scrolls are ignored.
    pub fn on_scroll(&mut self, scroll_y: f64) -> LoaderPhase {
        if self.phase() == LoaderPhase::Welcome && scroll_y > LOADER_REVEAL_SCROLL_PX {
            self.revealed = true;
        }
        self.phase()
    }

    pub fn frame_text(&self) -> Option<&'static str> {
        match self.phase() {
            LoaderPhase::Flash(i) => FLASH_FRAMES.get(i).copied(),
            _ => None,
        }
    }
}
