use crate::cards::project_card;
use crate::dom;
use crate::frame::{start_gated_loop, LoopHandle};
use crate::visibility::{self, VisibilityWatch};
use folio_core::constants::MARQUEE_BASE_SPEED;
use folio_core::{build_rows, LoopRow, MarqueeController, Project, RowId};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const IDLE_TIMEOUT_MS: u32 = folio_core::constants::MARQUEE_IDLE_TIMEOUT_MS as u32;

/// Endless project rows whose speed follows scroll velocity and slows under
/// the pointer.
pub struct Marquee {
    animations: Rc<Vec<web::Animation>>,
    frames: LoopHandle,
    _idle: Rc<RefCell<Option<Timeout>>>,
    _watch: VisibilityWatch,
    _scroll: EventListener,
    _hover: Vec<EventListener>,
}

impl Drop for Marquee {
    fn drop(&mut self) {
        self.frames.shutdown();
        for a in self.animations.iter() {
            a.cancel();
        }
    }
}

fn translate(pct: f32) -> JsValue {
    dom::js_object(&[(
        "transform",
        JsValue::from_str(&format!("translateX({pct}%)")),
    )])
    .into()
}

fn start_row_animation(
    track: &web::HtmlElement,
    row: &LoopRow<&Project>,
) -> anyhow::Result<web::Animation> {
    let (from, to) = row.keyframes();
    let keyframes = js_sys::Array::of2(&translate(from), &translate(to));
    let options: web::KeyframeAnimationOptions = dom::js_object(&[
        ("duration", JsValue::from_f64(row.duration_secs as f64 * 1000.0)),
        ("iterations", JsValue::from_f64(f64::INFINITY)),
        ("easing", JsValue::from_str("linear")),
    ])
    .unchecked_into();
    let keyframes: &js_sys::Object = keyframes.unchecked_ref();
    let anim = track
        .animate_with_keyframe_animation_options(Some(keyframes), &options)
        .map_err(|e| anyhow::anyhow!("animate: {:?}", e))?;
    anim.set_playback_rate(MARQUEE_BASE_SPEED as f64);
    Ok(anim)
}

impl Marquee {
    pub fn mount(
        document: &web::Document,
        section: &web::Element,
        container: &web::Element,
        featured: &[&Project],
    ) -> anyhow::Result<Self> {
        let rows = build_rows(featured, &mut rand::thread_rng());
        let controller = Rc::new(RefCell::new(MarqueeController::new(
            rows.len(),
            dom::scroll_y(),
            js_sys::Date::now(),
        )));

        container.set_inner_html("");
        let mut animations = Vec::with_capacity(rows.len());
        let mut hover = Vec::with_capacity(rows.len() * 2);
        for (id, row) in rows.iter().enumerate() {
            let row_el: web::HtmlElement = dom::create(document, "div", "marquee-row")?;
            let track: web::HtmlElement = dom::create(document, "div", "marquee-track")?;
            for project in row.repeated() {
                track.append_child(&project_card(document, project, "marquee-item")?)
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            }
            _ = row_el.append_child(&track);
            _ = container.append_child(&row_el);
            animations.push(start_row_animation(&track, row)?);
            hover.extend(hover_listeners(&row_el, id, &controller));
        }
        let animations = Rc::new(animations);

        let idle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let scroll = {
            let controller = controller.clone();
            let idle = idle.clone();
            EventListener::new(&window, "scroll", move |_| {
                controller
                    .borrow_mut()
                    .on_scroll(dom::scroll_y(), js_sys::Date::now());
                let controller = controller.clone();
                // Replacing the pending timeout drops (and cancels) it.
                *idle.borrow_mut() = Some(Timeout::new(IDLE_TIMEOUT_MS, move || {
                    controller.borrow_mut().on_idle();
                }));
            })
        };

        let frames = {
            let animations = animations.clone();
            start_gated_loop(move |_dt| {
                let mut controller = controller.borrow_mut();
                controller.tick(js_sys::Date::now());
                for (anim, rate) in animations.iter().zip(controller.step()) {
                    anim.set_playback_rate(rate as f64);
                }
            })
        };

        let watch = {
            let frames = frames.clone();
            let animations = animations.clone();
            visibility::watch(section, move |visible| {
                log::debug!("[marquee] visible={visible}");
                for a in animations.iter() {
                    _ = if visible { a.play() } else { a.pause() };
                }
                frames.set_visible(visible);
            })?
        };

        log::info!(
            "[marquee] {} rows from {} featured projects",
            rows.len(),
            featured.len()
        );
        Ok(Self {
            animations,
            frames,
            _idle: idle,
            _watch: watch,
            _scroll: scroll,
            _hover: hover,
        })
    }
}

fn hover_listeners(
    row_el: &web::HtmlElement,
    id: RowId,
    controller: &Rc<RefCell<MarqueeController>>,
) -> [EventListener; 2] {
    let enter = {
        let controller = controller.clone();
        EventListener::new(row_el, "mouseenter", move |_| {
            controller.borrow_mut().hover_enter(id)
        })
    };
    let leave = {
        let controller = controller.clone();
        EventListener::new(row_el, "mouseleave", move |_| {
            controller.borrow_mut().hover_leave(id)
        })
    };
    [enter, leave]
}
