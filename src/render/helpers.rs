use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn rgba(rgb: (u8, u8, u8), alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb.0,
        rgb.1,
        rgb.2,
        alpha.clamp(0.0, 1.0)
    )
}

#[inline]
pub fn set_fill(ctx: &web::CanvasRenderingContext2d, css: &str) {
    ctx.set_fill_style(&JsValue::from_str(css));
}

#[inline]
pub fn set_stroke(ctx: &web::CanvasRenderingContext2d, css: &str) {
    ctx.set_stroke_style(&JsValue::from_str(css));
}

/// Fill a disc with a radial gradient through `stops` (offset, css colour).
pub fn radial_disc(
    ctx: &web::CanvasRenderingContext2d,
    x: f32,
    y: f32,
    radius: f32,
    stops: &[(f32, String)],
) {
    if radius <= 0.0 {
        return;
    }
    let (x, y, r) = (x as f64, y as f64, radius as f64);
    let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
        return;
    };
    for (offset, color) in stops {
        _ = gradient.add_color_stop(*offset, color);
    }
    ctx.set_fill_style(&gradient);
    ctx.begin_path();
    _ = ctx.arc(x, y, r, 0.0, TAU);
    ctx.fill();
}

pub fn solid_disc(ctx: &web::CanvasRenderingContext2d, x: f32, y: f32, radius: f32, css: &str) {
    if radius <= 0.0 {
        return;
    }
    set_fill(ctx, css);
    ctx.begin_path();
    _ = ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
    ctx.fill();
}

pub fn line(ctx: &web::CanvasRenderingContext2d, from: (f32, f32), to: (f32, f32), width: f32) {
    ctx.set_line_width(width as f64);
    ctx.begin_path();
    ctx.move_to(from.0 as f64, from.1 as f64);
    ctx.line_to(to.0 as f64, to.1 as f64);
    ctx.stroke();
}
