use super::helpers::{line, rgba, set_stroke, solid_disc};
use super::Surface;
use crate::constants::{SPHERE_LINK_RGB, SPHERE_POINT_RGB};
use folio_core::CloudFrame;

pub fn draw(surface: &Surface, frame: &CloudFrame) {
    surface.clear();
    let ctx = &surface.ctx;

    for link in &frame.links {
        let (a, b) = (&frame.points[link.a], &frame.points[link.b]);
        set_stroke(ctx, &rgba(SPHERE_LINK_RGB, link.alpha));
        line(ctx, (a.x, a.y), (b.x, b.y), 0.6);
    }

    // Points are sorted far to near, so nearer ones are painted last.
    for p in &frame.points {
        solid_disc(ctx, p.x, p.y, 1.2 * p.scale, &rgba(SPHERE_POINT_RGB, p.alpha));
    }
}
