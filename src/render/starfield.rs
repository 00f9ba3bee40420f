use super::helpers::{line, radial_disc, rgba};
use super::Surface;
use crate::constants::STARFIELD_BACKDROP;
use folio_core::StarSprite;

const WHITE: (u8, u8, u8) = (255, 255, 255);
const ICE: (u8, u8, u8) = (160, 230, 255);
const ICE_EDGE: (u8, u8, u8) = (140, 210, 255);

pub fn draw(surface: &Surface, sprites: &[StarSprite]) {
    // Translucent fill leaves a faint afterimage of the previous frame.
    surface.fill(STARFIELD_BACKDROP);
    let ctx = &surface.ctx;
    for s in sprites {
        radial_disc(
            ctx,
            s.x,
            s.y,
            s.size * 2.0,
            &[
                (0.0, rgba(WHITE, s.brightness)),
                (0.4, rgba(ICE, s.brightness * 0.6)),
                (1.0, rgba(ICE_EDGE, 0.0)),
            ],
        );

        if let Some(from) = s.trail_from {
            let gradient =
                ctx.create_linear_gradient(from.x as f64, from.y as f64, s.x as f64, s.y as f64);
            _ = gradient.add_color_stop(0.0, &rgba(ICE, 0.0));
            _ = gradient.add_color_stop(1.0, &rgba(ICE, s.brightness * 0.3));
            ctx.set_stroke_style(&gradient);
            line(ctx, (from.x, from.y), (s.x, s.y), s.size * 0.5);
        }
    }
}
