use crate::constants::{REVEAL_IMAGES_ID, REVEAL_MAX_IMAGES, REVEAL_SCRUB_SECS, REVEAL_TEXT_ID};
use crate::dom;
use crate::frame::{start_gated_loop, LoopHandle};
use crate::visibility::{self, VisibilityWatch};
use folio_core::constants::PARALLAX_DISTANCE;
use folio_core::{
    parallax_timeline_len, shuffled, Capabilities, ParallaxLayer, ParallaxPose, PinnedRegion,
    Project, ScrubbedProgress,
};
use gloo::events::EventListener;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Timeline {
    section: web::HtmlElement,
    region: PinnedRegion,
    images: Vec<ParallaxLayer>,
    text: ParallaxLayer,
    len: f32,
    mobile: bool,
    stagger: f32,
}

impl Timeline {
    fn recompute(&mut self) {
        let (_, vh) = dom::viewport_size();
        let vh_f = vh as f32;
        for (i, layer) in self.images.iter_mut().enumerate() {
            *layer = ParallaxLayer::new(i, vh_f, self.mobile, self.stagger);
        }
        self.text = ParallaxLayer::text(vh_f);
        self.len = parallax_timeline_len(&self.images).max(self.text.end_time());
        self.region
            .recompute(dom::document_top(&self.section), vh, PARALLAX_DISTANCE);
        dom::set_style(
            &self.section,
            "height",
            &format!("{}px", vh + self.region.distance),
        );
    }
}

fn apply(el: &web::HtmlElement, pose: ParallaxPose) {
    dom::set_style(el, "transform", &format!("translate3d(0, {:.1}px, 0)", pose.y));
    dom::set_style(el, "opacity", &format!("{:.3}", pose.opacity));
}

/// Project images rising past each other at different speeds while the
/// section is pinned.
pub struct ParallaxReveal {
    frames: LoopHandle,
    _watch: VisibilityWatch,
    _resize: Vec<EventListener>,
}

impl Drop for ParallaxReveal {
    fn drop(&mut self) {
        self.frames.shutdown();
    }
}

impl ParallaxReveal {
    pub fn mount(
        document: &web::Document,
        section: web::HtmlElement,
        projects: &[&Project],
        caps: &Capabilities,
    ) -> anyhow::Result<Self> {
        let stage: web::HtmlElement = dom::element_by_id(document, REVEAL_IMAGES_ID)?;
        let text: Option<web::HtmlElement> = dom::element_by_id(document, REVEAL_TEXT_ID).ok();

        let mut rng = rand::thread_rng();
        let picked: Vec<&Project> = shuffled(projects, &mut rng)
            .into_iter()
            .take(REVEAL_MAX_IMAGES)
            .collect();

        stage.set_inner_html("");
        let mut images = Vec::with_capacity(picked.len());
        for project in &picked {
            let img: web::HtmlImageElement = dom::create(document, "img", "reveal-image")?;
            img.set_src(&project.image);
            img.set_alt(&project.title);
            dom::set_style(&img, "left", &format!("{:.1}%", rng.gen_range(5.0..70.0)));
            dom::set_style(&img, "opacity", "0");
            _ = stage.append_child(&img);
            images.push(img);
        }

        let timeline = Rc::new(RefCell::new(Timeline {
            section: section.clone(),
            region: PinnedRegion::new(0.0, 0.0),
            images: vec![ParallaxLayer::text(0.0); images.len()],
            text: ParallaxLayer::text(0.0),
            len: 0.0,
            mobile: caps.is_mobile(),
            stagger: caps.parallax_stagger,
        }));
        timeline.borrow_mut().recompute();

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let resize = {
            let timeline = timeline.clone();
            dom::on_resize(&window, move || timeline.borrow_mut().recompute())
        };

        let frames = {
            let mut scrub = ScrubbedProgress::new(REVEAL_SCRUB_SECS);
            start_gated_loop(move |dt| {
                let timeline = timeline.borrow();
                let p = scrub.step(timeline.region.progress(dom::scroll_y()), dt);
                let t = p * timeline.len;
                for (img, layer) in images.iter().zip(&timeline.images) {
                    apply(img, layer.pose(t));
                }
                if let Some(text) = &text {
                    apply(text, timeline.text.pose(t));
                }
            })
        };

        let watch = {
            let frames = frames.clone();
            visibility::watch(&section, move |visible| {
                log::debug!("[reveal] visible={visible}");
                frames.set_visible(visible);
            })?
        };

        log::info!("[reveal] {} images", picked.len());
        Ok(Self {
            frames,
            _watch: watch,
            _resize: resize,
        })
    }
}
