use crate::constants::{DIVE_CANVAS_ID, DIVE_SCRUB_SECS, DIVE_TEXT_MAX_SCALE, DIVE_TEXT_ID};
use crate::dom;
use crate::frame::{start_gated_loop, LoopHandle};
use crate::render::{self, Surface};
use crate::visibility::{self, VisibilityWatch};
use folio_core::{power2_in, Capabilities, PinnedRegion, ScrubbedProgress, Starfield};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Layout {
    section: web::HtmlElement,
    region: PinnedRegion,
    factor: f32,
}

impl Layout {
    /// Pin for `factor` viewport heights: the section is one viewport of
    /// sticky stage plus the scroll distance.
    fn recompute(&mut self) {
        let (_, vh) = dom::viewport_size();
        self.region
            .recompute(dom::document_top(&self.section), vh, self.factor);
        dom::set_style(
            &self.section,
            "height",
            &format!("{}px", vh + self.region.distance),
        );
    }
}

/// Scroll-scrubbed flight through a starfield, with the headline zooming
/// past the camera.
pub struct StarDive {
    frames: LoopHandle,
    _watch: VisibilityWatch,
    _resize: Vec<EventListener>,
}

impl Drop for StarDive {
    fn drop(&mut self) {
        self.frames.shutdown();
    }
}

impl StarDive {
    pub fn mount(
        document: &web::Document,
        section: web::HtmlElement,
        caps: &Capabilities,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, DIVE_CANVAS_ID)?;
        let text: Option<web::HtmlElement> = dom::element_by_id(document, DIVE_TEXT_ID).ok();
        let surface = Surface::new(canvas)?;
        let (w, h) = surface.size();
        let stars = Rc::new(RefCell::new(Starfield::new(
            caps.star_count,
            w,
            h,
            &mut rand::thread_rng(),
        )));

        let layout = Rc::new(RefCell::new(Layout {
            section: section.clone(),
            region: PinnedRegion::new(0.0, 0.0),
            factor: caps.dive_distance_factor,
        }));
        layout.borrow_mut().recompute();

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let resize = {
            let surface = surface.clone();
            let stars = stars.clone();
            let layout = layout.clone();
            dom::on_resize(&window, move || {
                let (w, h) = surface.resize();
                stars.borrow_mut().resize(w, h);
                layout.borrow_mut().recompute();
            })
        };

        let frames = {
            let surface = surface.clone();
            let mut scrub = ScrubbedProgress::new(DIVE_SCRUB_SECS);
            let mut rng = rand::thread_rng();
            start_gated_loop(move |dt| {
                let raw = layout.borrow().region.progress(dom::scroll_y());
                let p = scrub.step(raw, dt);
                let mut stars = stars.borrow_mut();
                stars.update(p, &mut rng);
                render::starfield::draw(&surface, &stars.frame());
                if let Some(text) = &text {
                    let scale = 1.0 + (DIVE_TEXT_MAX_SCALE - 1.0) * power2_in(p);
                    dom::set_style(text, "transform", &format!("scale({scale:.4})"));
                    dom::set_style(text, "opacity", &format!("{:.4}", 1.0 - p));
                }
            })
        };

        let watch = {
            let frames = frames.clone();
            visibility::watch(&section, move |visible| {
                log::debug!("[dive] visible={visible}");
                frames.set_visible(visible);
            })?
        };

        log::info!(
            "[dive] {} stars over {}x viewport",
            caps.star_count,
            caps.dive_distance_factor
        );
        Ok(Self {
            frames,
            _watch: watch,
            _resize: resize,
        })
    }
}
