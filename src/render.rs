use crate::dom;
use anyhow::anyhow;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

mod helpers;
pub mod particles;
pub mod sphere;
pub mod starfield;

/// A 2D canvas and its context, drawn in CSS pixels.
pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    size: Cell<(f32, f32)>,
}

impl Surface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Rc<Self>> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("2d context has unexpected type"))?;
        let surface = Rc::new(Self {
            canvas,
            ctx,
            size: Cell::new((0.0, 0.0)),
        });
        surface.resize();
        Ok(surface)
    }

    /// Resync backing store and transform to the current CSS box and DPR.
    pub fn resize(&self) -> (f32, f32) {
        let dpr = dom::capped_dpr();
        let size = dom::sync_canvas_backing_size(&self.canvas, dpr);
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.size.set(size);
        size
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        self.size.get()
    }

    pub fn clear(&self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    pub fn fill(&self, css: &str) {
        let (w, h) = self.size();
        helpers::set_fill(&self.ctx, css);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    }
}
