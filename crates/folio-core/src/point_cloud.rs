//! Rotating point-cloud sphere for the hero section.

use crate::capability::RotationMode;
use crate::constants::*;
use crate::easing::approach;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Evenly distributed points on a sphere (golden-angle spiral).
pub fn fibonacci_sphere(count: usize, radius: f32) -> Vec<Vec3> {
    let golden = PI * (3.0 - 5f32.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - (i as f32 + 0.5) / count as f32 * 2.0;
            let r = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden * i as f32;
            Vec3::new(theta.cos() * r, y, theta.sin() * r) * radius
        })
        .collect()
}

/// Eased yaw/pitch driven either by the pointer or by a slow autoplay spin.
///
/// `x` is yaw (about Y), `y` is pitch (about X), both in radians.
#[derive(Clone, Copy, Debug)]
pub struct RotationController {
    pub mode: RotationMode,
    pub target: Vec2,
    pub current: Vec2,
    pub ease: f32,
}

impl RotationController {
    pub fn new(mode: RotationMode) -> Self {
        Self {
            mode,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            ease: SPHERE_EASE,
        }
    }

    /// `nx`, `ny` are pointer coordinates normalized to \[-1, 1\].
    pub fn set_pointer(&mut self, nx: f32, ny: f32) {
        if self.mode != RotationMode::Pointer {
            return;
        }
        self.target = Vec2::new(
            nx.clamp(-1.0, 1.0) * SPHERE_MAX_YAW,
            ny.clamp(-1.0, 1.0) * SPHERE_MAX_PITCH,
        );
    }

    pub fn step(&mut self, dt_secs: f32) -> Vec2 {
        if self.mode == RotationMode::Autoplay {
            self.target.x += SPHERE_AUTOPLAY_RATE * dt_secs.max(0.0);
        }
        self.current = Vec2::new(
            approach(self.current.x, self.target.x, self.ease),
            approach(self.current.y, self.target.y, self.ease),
        );
        self.current
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub scale: f32,
    pub alpha: f32,
}

/// A connection between two entries of [`CloudFrame::points`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

#[derive(Clone, Debug, Default)]
pub struct CloudFrame {
    /// Sorted back-to-front.
    pub points: Vec<ProjectedPoint>,
    pub links: Vec<Link>,
}

#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub center: Vec2,
    pub focal: f32,
    pub camera_z: f32,
    pub min_scale: f32,
    pub link_distance: f32,
    pub max_links: usize,
}

impl Projection {
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(width * 0.5, height * 0.5),
            focal: SPHERE_FOCAL,
            camera_z: SPHERE_CAMERA_Z,
            min_scale: SPHERE_MIN_SCALE,
            link_distance: SPHERE_LINK_DISTANCE,
            max_links: SPHERE_MAX_LINKS,
        }
    }
}

#[inline]
fn rotate(p: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    let (sy, cy) = yaw.sin_cos();
    let x1 = p.x * cy + p.z * sy;
    let z1 = -p.x * sy + p.z * cy;
    let (sp, cp) = pitch.sin_cos();
    let y2 = p.y * cp - z1 * sp;
    let z2 = p.y * sp + z1 * cp;
    Vec3::new(x1, y2, z2)
}

/// Rotate (Y then X), project and link the cloud for one frame.
pub fn project(points: &[Vec3], rotation: Vec2, proj: &Projection, radius: f32) -> CloudFrame {
    let span = (2.0 * radius).max(f32::EPSILON);
    let mut projected: Vec<ProjectedPoint> = points
        .iter()
        .filter_map(|&p| {
            let r = rotate(p, rotation.x, rotation.y);
            let depth = r.z + proj.camera_z;
            if depth <= 0.0 {
                return None;
            }
            let scale = proj.focal / depth;
            if scale < proj.min_scale {
                return None;
            }
            let nearness = ((proj.camera_z + radius - depth) / span).clamp(0.0, 1.0);
            Some(ProjectedPoint {
                x: proj.center.x + r.x * scale,
                y: proj.center.y + r.y * scale,
                depth,
                scale,
                alpha: 0.2 + 0.8 * nearness,
            })
        })
        .collect();
    projected.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let mut links = Vec::new();
    let max_d2 = proj.link_distance * proj.link_distance;
    'outer: for i in 0..projected.len() {
        for j in (i + 1)..projected.len() {
            if links.len() >= proj.max_links {
                break 'outer;
            }
            let (a, b) = (&projected[i], &projected[j]);
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            let d2 = dx * dx + dy * dy;
            if d2 < max_d2 {
                let closeness = 1.0 - d2.sqrt() / proj.link_distance;
                links.push(Link {
                    a: i,
                    b: j,
                    alpha: closeness * a.alpha.min(b.alpha) * 0.5,
                });
            }
        }
    }

    CloudFrame {
        points: projected,
        links,
    }
}
