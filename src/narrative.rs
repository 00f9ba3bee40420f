use crate::constants::{ABOUT_SCRUB_SECS, ABOUT_TRACK_ID};
use crate::dom;
use crate::frame::{start_gated_loop, LoopHandle};
use crate::visibility::{self, VisibilityWatch};
use folio_core::{horizontal_offset, panel_reveal, power3_out, PinnedRegion, ScrubbedProgress};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Strip {
    section: web::HtmlElement,
    track: web::HtmlElement,
    region: PinnedRegion,
    content_w: f32,
    viewport_w: f32,
}

impl Strip {
    /// The section stays pinned for exactly as long as the track needs to
    /// slide its overflow past the viewport.
    fn recompute(&mut self) {
        let (vw, vh) = dom::viewport_size();
        self.viewport_w = vw as f32;
        self.content_w = self.track.scroll_width() as f32;
        let overflow = (self.content_w - self.viewport_w).max(0.0) as f64;
        self.region = PinnedRegion::new(dom::document_top(&self.section), overflow);
        dom::set_style(&self.section, "height", &format!("{}px", vh + overflow));
    }
}

/// Horizontal story strip: panels slide in from the right and a connecting
/// line draws itself as the page scrolls.
pub struct Narrative {
    frames: LoopHandle,
    _watch: VisibilityWatch,
    _resize: Vec<EventListener>,
}

impl Drop for Narrative {
    fn drop(&mut self) {
        self.frames.shutdown();
    }
}

impl Narrative {
    pub fn mount(document: &web::Document, section: web::HtmlElement) -> anyhow::Result<Self> {
        let track: web::HtmlElement = dom::element_by_id(document, ABOUT_TRACK_ID)?;
        let panels: Vec<web::HtmlElement> = dom::query_all(&track, ".about-panel");
        let lines: Vec<(web::SvgGeometryElement, f32)> =
            dom::query_all::<web::SvgGeometryElement>(&track, "path[data-draw]")
                .into_iter()
                .map(|path| {
                    let len = path.get_total_length();
                    let dash = format!("{len}");
                    _ = path.style().set_property("stroke-dasharray", &dash);
                    _ = path.style().set_property("stroke-dashoffset", &dash);
                    (path, len)
                })
                .collect();

        let strip = Rc::new(RefCell::new(Strip {
            section: section.clone(),
            track,
            region: PinnedRegion::new(0.0, 0.0),
            content_w: 0.0,
            viewport_w: 0.0,
        }));
        strip.borrow_mut().recompute();

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let resize = {
            let strip = strip.clone();
            dom::on_resize(&window, move || strip.borrow_mut().recompute())
        };

        let panel_count = panels.len();
        let frames = {
            let mut scrub = ScrubbedProgress::new(ABOUT_SCRUB_SECS);
            start_gated_loop(move |dt| {
                let strip = strip.borrow();
                let p = scrub.step(strip.region.progress(dom::scroll_y()), dt);
                let x = horizontal_offset(p, strip.content_w, strip.viewport_w);
                dom::set_style(
                    &strip.track,
                    "transform",
                    &format!("translate3d({x:.1}px, 0, 0)"),
                );
                for panel in &panels {
                    let rect = panel.get_bounding_client_rect();
                    let shown = power3_out(panel_reveal(
                        rect.left() as f32,
                        rect.width() as f32,
                        strip.viewport_w,
                    ));
                    dom::set_style(panel, "opacity", &format!("{shown:.3}"));
                    dom::set_style(
                        panel,
                        "transform",
                        &format!("translateY({:.1}px)", (1.0 - shown) * 40.0),
                    );
                }
                for (path, len) in &lines {
                    _ = path
                        .style()
                        .set_property("stroke-dashoffset", &format!("{:.1}", len * (1.0 - p)));
                }
            })
        };

        let watch = {
            let frames = frames.clone();
            visibility::watch(&section, move |visible| {
                log::debug!("[about] visible={visible}");
                frames.set_visible(visible);
            })?
        };

        log::info!("[about] {panel_count} panels");
        Ok(Self {
            frames,
            _watch: watch,
            _resize: resize,
        })
    }
}
