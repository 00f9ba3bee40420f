//! Pointer follower: a ring and a dot easing toward the last pointer
//! position. Hidden until the pointer has moved at least once.

use crate::easing::approach;
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct CursorTrail {
    target: Option<Vec2>,
    ring: Vec2,
    dot: Vec2,
    ring_ease: f32,
    dot_ease: f32,
}

fn ease(from: Vec2, to: Vec2, factor: f32) -> Vec2 {
    Vec2::new(approach(from.x, to.x, factor), approach(from.y, to.y, factor))
}

impl CursorTrail {
    pub fn new(ring_ease: f32, dot_ease: f32) -> Self {
        Self {
            target: None,
            ring: Vec2::ZERO,
            dot: Vec2::ZERO,
            ring_ease,
            dot_ease,
        }
    }

    /// Record a pointer position. Returns `true` on the first move, when the
    /// follower should be shown; both markers start under the pointer.
    pub fn pointer_moved(&mut self, at: Vec2) -> bool {
        let first = self.target.is_none();
        if first {
            self.ring = at;
            self.dot = at;
        }
        self.target = Some(at);
        first
    }

    pub fn is_shown(&self) -> bool {
        self.target.is_some()
    }

    /// Ease one frame. `None` until the pointer has moved.
    pub fn step(&mut self) -> Option<(Vec2, Vec2)> {
        let to = self.target?;
        self.ring = ease(self.ring, to, self.ring_ease);
        self.dot = ease(self.dot, to, self.dot_ease);
        Some((self.ring, self.dot))
    }
}
