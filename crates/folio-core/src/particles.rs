//! Floating glow particles layered behind hero and section content.
//!
//! Purely decorative: each particle bobs on its own sine phase, pulses its
//! opacity, and wraps around the surface edges. No pairwise interaction.

use crate::constants::*;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub base_y: f32,
    pub size: f32,
    pub speed: f32,
    pub phase_x: f32,
    pub phase_y: f32,
    pub opacity: f32,
}

/// One particle as it should be drawn this frame: an outer glow disc and an
/// inner core disc sharing a centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowDot {
    pub x: f32,
    pub y: f32,
    pub glow_radius: f32,
    pub core_radius: f32,
    pub opacity: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    elapsed: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f32, height: f32, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| {
                let y = rng.gen::<f32>() * height;
                Particle {
                    x: rng.gen::<f32>() * width,
                    base_y: y,
                    size: if rng.gen_bool(0.5) { 1.5 } else { 1.0 },
                    speed: 0.3 + rng.gen::<f32>() * 0.3,
                    phase_x: rng.gen::<f32>() * TAU,
                    phase_y: rng.gen::<f32>() * TAU,
                    opacity: 0.2 + rng.gen::<f32>() * 0.3,
                }
            })
            .collect();
        Self {
            particles,
            width,
            height,
            elapsed: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Rescale particle anchors to a new surface size.
    pub fn resize(&mut self, width: f32, height: f32) {
        let sx = if self.width > 0.0 { width / self.width } else { 1.0 };
        let sy = if self.height > 0.0 { height / self.height } else { 1.0 };
        for p in &mut self.particles {
            p.x *= sx;
            p.base_y *= sy;
        }
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self, dt_secs: f32) {
        self.elapsed += dt_secs.clamp(0.0, PARTICLE_MAX_DT);
    }

    /// Compute this frame's draw list, wrapping particles that drifted out.
    pub fn frame(&mut self) -> Vec<GlowDot> {
        let t = self.elapsed;
        let (w, h) = (self.width, self.height);
        let m = PARTICLE_WRAP_MARGIN;
        let mut out = Vec::with_capacity(self.particles.len());
        for p in &mut self.particles {
            let float_y = (t * p.speed + p.phase_y).sin() * PARTICLE_DRIFT_Y;
            let float_x = (t * p.speed * 0.5 + p.phase_x).sin() * PARTICLE_DRIFT_X;
            let cx = p.x + float_x;
            let cy = p.base_y + float_y;

            if cx < -m {
                p.x = w + m;
            } else if cx > w + m {
                p.x = -m;
            }
            if cy < -m {
                p.base_y = h + m;
            } else if cy > h + m {
                p.base_y = -m;
            }

            let pulse = p.opacity * (0.8 + (t * p.speed * 2.0).sin() * 0.2);
            out.push(GlowDot {
                x: cx,
                y: cy,
                glow_radius: p.size * PARTICLE_GLOW_SCALE,
                core_radius: p.size * PARTICLE_CORE_SCALE,
                opacity: pulse,
            });
        }
        out
    }
}
