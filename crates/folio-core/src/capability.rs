//! Device capability detection.
//!
//! Every renderer reads its budget (particle counts, rotation mode, pinned
//! scroll distances) from one [`Capabilities`] value computed at startup,
//! rather than re-checking the viewport width on its own.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

/// How the hero sphere picks its rotation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationMode {
    /// Follow the normalized pointer position.
    Pointer,
    /// Slow constant spin, used where there is no hover pointer.
    Autoplay,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capabilities {
    pub device: DeviceClass,
    pub particle_count: usize,
    pub star_count: usize,
    pub sphere_points: usize,
    pub rotation: RotationMode,
    pub dive_distance_factor: f32,
    pub parallax_stagger: f32,
    pub marquee_particles: usize,
}

impl Capabilities {
    pub fn detect(viewport_width: f64, coarse_pointer: bool) -> Self {
        if viewport_width < NARROW_VIEWPORT_PX || coarse_pointer {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }

    pub fn desktop() -> Self {
        Self {
            device: DeviceClass::Desktop,
            particle_count: PARTICLE_COUNT_DESKTOP,
            star_count: STAR_COUNT_DESKTOP,
            sphere_points: SPHERE_POINTS_DESKTOP,
            rotation: RotationMode::Pointer,
            dive_distance_factor: DIVE_DISTANCE_DESKTOP,
            parallax_stagger: PARALLAX_STAGGER_DESKTOP,
            marquee_particles: MARQUEE_PARTICLES_DESKTOP,
        }
    }

    pub fn mobile() -> Self {
        Self {
            device: DeviceClass::Mobile,
            particle_count: PARTICLE_COUNT_MOBILE,
            star_count: STAR_COUNT_MOBILE,
            sphere_points: SPHERE_POINTS_MOBILE,
            rotation: RotationMode::Autoplay,
            dive_distance_factor: DIVE_DISTANCE_MOBILE,
            parallax_stagger: PARALLAX_STAGGER_MOBILE,
            marquee_particles: MARQUEE_PARTICLES_MOBILE,
        }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.device == DeviceClass::Mobile
    }
}
