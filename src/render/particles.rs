use super::helpers::{radial_disc, rgba};
use super::Surface;
use folio_core::constants::{PARTICLE_COLOR, PARTICLE_CORE_COLOR};
use folio_core::GlowDot;

const OUTER: (u8, u8, u8) = (PARTICLE_COLOR[0], PARTICLE_COLOR[1], PARTICLE_COLOR[2]);
const CORE: (u8, u8, u8) = (
    PARTICLE_CORE_COLOR[0],
    PARTICLE_CORE_COLOR[1],
    PARTICLE_CORE_COLOR[2],
);
const CORE_EDGE: (u8, u8, u8) = (80, 150, 255);

pub fn draw(surface: &Surface, dots: &[GlowDot]) {
    surface.clear();
    let ctx = &surface.ctx;
    for d in dots {
        radial_disc(
            ctx,
            d.x,
            d.y,
            d.glow_radius,
            &[
                (0.0, rgba(OUTER, d.opacity * 0.4)),
                (0.5, rgba(OUTER, d.opacity * 0.2)),
                (1.0, rgba(OUTER, 0.0)),
            ],
        );
        radial_disc(
            ctx,
            d.x,
            d.y,
            d.core_radius,
            &[
                (0.0, rgba(CORE, d.opacity)),
                (0.6, rgba(OUTER, d.opacity * 0.8)),
                (1.0, rgba(CORE_EDGE, d.opacity * 0.3)),
            ],
        );
    }
}
