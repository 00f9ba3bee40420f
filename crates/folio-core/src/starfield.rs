//! Scroll-driven "fly through the stars" dive.
//!
//! Star depth is driven by the change in pinned scroll progress; the further
//! into the section, the larger the depth step per unit of progress. Stars
//! leaving the depth range respawn at the opposite bound, so every star stays
//! inside \[`STAR_NEAR`, `STAR_FAR`\] for the lifetime of the field.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiveState {
    Idle,
    Scrolling,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarSprite {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub brightness: f32,
    /// Screen position the star occupied last frame, when moving fast enough
    /// to draw a streak.
    pub trail_from: Option<Vec2>,
}

pub struct Starfield {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    progress: f32,
    last_progress: f32,
    last_dz: f32,
    speed: f32,
    state: DiveState,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f32, height: f32, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| {
                let (x, y) = lateral(width, height, rng);
                Star {
                    x,
                    y,
                    z: rng.gen_range(STAR_NEAR..=STAR_FAR),
                }
            })
            .collect();
        Self {
            stars,
            width,
            height,
            progress: 0.0,
            last_progress: 0.0,
            last_dz: 0.0,
            speed: 0.0,
            state: DiveState::Idle,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn state(&self) -> DiveState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance one frame toward scroll progress `progress` in \[0, 1\].
    pub fn update<R: Rng + ?Sized>(&mut self, progress: f32, rng: &mut R) -> DiveState {
        let progress = progress.clamp(0.0, 1.0);
        let delta = progress - self.last_progress;
        let accel = 1.0 + progress * STAR_ACCEL;

        let dz = if delta.abs() > f32::EPSILON {
            self.state = DiveState::Scrolling;
            delta * STAR_Z_PER_PROGRESS * accel
        } else {
            self.state = DiveState::Idle;
            STAR_IDLE_DRIFT
        };
        self.speed = delta.abs() * 100.0 * accel;

        for star in &mut self.stars {
            star.z -= dz;
            if star.z < STAR_NEAR {
                respawn(star, STAR_FAR, self.width, self.height, rng);
            } else if star.z > STAR_FAR {
                respawn(star, STAR_NEAR, self.width, self.height, rng);
            }
        }

        self.last_dz = dz;
        self.last_progress = progress;
        self.progress = progress;
        self.state
    }

    pub fn project(&self, star: &Star) -> StarSprite {
        let center = Vec2::new(self.width * 0.5, self.height * 0.5);
        let depth_t = 1.0 - star.z / STAR_FAR;
        let pos = screen(star.x, star.y, star.z, center);

        let trail_from = if self.state == DiveState::Scrolling && self.speed > STAR_TRAIL_MIN_SPEED
        {
            let prev_z = star.z + self.last_dz;
            (prev_z > 0.0 && prev_z < STAR_FAR).then(|| screen(star.x, star.y, prev_z, center))
        } else {
            None
        };

        StarSprite {
            x: pos.x,
            y: pos.y,
            size: depth_t * STAR_MAX_SIZE,
            brightness: (depth_t * (1.0 + self.progress)).min(1.0),
            trail_from,
        }
    }

    pub fn frame(&self) -> Vec<StarSprite> {
        self.stars.iter().map(|s| self.project(s)).collect()
    }
}

#[inline]
fn screen(x: f32, y: f32, z: f32, center: Vec2) -> Vec2 {
    let scale = STAR_FOCAL / z;
    Vec2::new(x * scale + center.x, y * scale + center.y)
}

fn lateral<R: Rng + ?Sized>(width: f32, height: f32, rng: &mut R) -> (f32, f32) {
    (
        rng.gen::<f32>() * width - width * 0.5,
        rng.gen::<f32>() * height - height * 0.5,
    )
}

fn respawn<R: Rng + ?Sized>(star: &mut Star, z: f32, width: f32, height: f32, rng: &mut R) {
    let (x, y) = lateral(width, height, rng);
    star.x = x;
    star.y = y;
    star.z = z;
}
