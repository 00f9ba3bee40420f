use crate::dom;
use crate::frame::{start_gated_loop, LoopHandle};
use crate::input::wheel_delta_px;
use folio_core::SmoothScroller;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const LINE_PX: f64 = 16.0;

fn max_scroll(document: &web::Document) -> f32 {
    let (_, vh) = dom::viewport_size();
    let height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    (height - vh).max(0.0) as f32
}

/// Smooth scrolling: wheel, touch and in-page anchor input only move the
/// target, and one frame loop writes the page position. The loop runs only
/// while a glide is in progress.
pub struct SmoothScroll {
    frames: LoopHandle,
    parked: Rc<RefCell<Option<LoopHandle>>>,
    root: Option<web::Element>,
    _listeners: Vec<EventListener>,
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        self.frames.shutdown();
        // Break the loop's reference to itself.
        self.parked.borrow_mut().take();
        if let Some(root) = &self.root {
            _ = root.class_list().remove_1("smooth-scroll");
        }
    }
}

impl SmoothScroll {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let scroller = Rc::new(RefCell::new(SmoothScroller::new(
            dom::scroll_y() as f32,
            max_scroll(document),
        )));
        let root = document.document_element();
        if let Some(root) = &root {
            _ = root.class_list().add_1("smooth-scroll");
        }

        // The loop parks itself once the glide settles; input wakes it.
        let parked: Rc<RefCell<Option<LoopHandle>>> = Rc::default();
        let frames = {
            let window = window.clone();
            let scroller = scroller.clone();
            let parked = parked.clone();
            start_gated_loop(move |dt| {
                let glide = {
                    let mut scroller = scroller.borrow_mut();
                    scroller.is_animating().then(|| scroller.step(dt))
                };
                match glide {
                    Some(y) => window.scroll_to_with_x_and_y(0.0, y as f64),
                    None => {
                        if let Some(frames) = parked.borrow().as_ref() {
                            frames.set_visible(false);
                        }
                    }
                }
            })
        };
        *parked.borrow_mut() = Some(frames.clone());

        let active = EventListenerOptions::enable_prevent_default();
        let mut listeners = Vec::with_capacity(6);

        listeners.push({
            let scroller = scroller.clone();
            let frames = frames.clone();
            let document = document.clone();
            EventListener::new_with_options(window, "wheel", active, move |event| {
                let Some(ev) = event.dyn_ref::<web::WheelEvent>() else {
                    return;
                };
                if ev.ctrl_key() {
                    return; // pinch-zoom
                }
                event.prevent_default();
                let (_, vh) = dom::viewport_size();
                let dy = wheel_delta_px(ev.delta_y(), ev.delta_mode(), LINE_PX, vh);
                let mut scroller = scroller.borrow_mut();
                scroller.set_max(max_scroll(&document));
                scroller.wheel(dy as f32);
                frames.set_visible(true);
            })
        });

        let last_touch_y = Rc::new(Cell::new(None::<f64>));
        listeners.push({
            let last_touch_y = last_touch_y.clone();
            EventListener::new(window, "touchstart", move |event| {
                let y = event
                    .dyn_ref::<web::TouchEvent>()
                    .and_then(|ev| ev.touches().get(0))
                    .map(|t| t.client_y() as f64);
                last_touch_y.set(y);
            })
        });
        listeners.push({
            let scroller = scroller.clone();
            let frames = frames.clone();
            let document = document.clone();
            EventListener::new_with_options(window, "touchmove", active, move |event| {
                let Some(y) = event
                    .dyn_ref::<web::TouchEvent>()
                    .and_then(|ev| ev.touches().get(0))
                    .map(|t| t.client_y() as f64)
                else {
                    return;
                };
                if let Some(prev) = last_touch_y.replace(Some(y)) {
                    event.prevent_default();
                    let mut scroller = scroller.borrow_mut();
                    scroller.set_max(max_scroll(&document));
                    scroller.touch((prev - y) as f32);
                    frames.set_visible(true);
                }
            })
        });

        // Keyboard, scrollbar drags and find-in-page move the page without
        // us; adopt their position once no glide is in progress. Content
        // appended since mount (more project cards) shows up here first.
        listeners.push({
            let scroller = scroller.clone();
            let document = document.clone();
            EventListener::new(window, "scroll", move |_| {
                let mut scroller = scroller.borrow_mut();
                if !scroller.is_animating() {
                    scroller.set_max(max_scroll(&document));
                    scroller.sync(dom::scroll_y() as f32);
                }
            })
        });

        listeners.push({
            let scroller = scroller.clone();
            let document = document.clone();
            EventListener::new(window, "resize", move |_| {
                scroller.borrow_mut().set_max(max_scroll(&document));
            })
        });

        listeners.push({
            let scroller = scroller.clone();
            let frames = frames.clone();
            let doc = document.clone();
            EventListener::new_with_options(document, "click", active, move |event| {
                let Some(anchor) = event
                    .target()
                    .and_then(|t| t.dyn_into::<web::Element>().ok())
                    .and_then(|el| el.closest("a[href^='#']").ok().flatten())
                else {
                    return;
                };
                let Some(id) = anchor
                    .get_attribute("href")
                    .and_then(|h| h.strip_prefix('#').map(str::to_owned))
                else {
                    return;
                };
                let Some(target) = doc.get_element_by_id(&id) else {
                    return;
                };
                event.prevent_default();
                let mut scroller = scroller.borrow_mut();
                scroller.set_max(max_scroll(&doc));
                scroller.scroll_to(dom::document_top(&target) as f32);
                frames.set_visible(true);
            })
        });

        log::info!("[scroll] smooth scrolling on");
        Ok(Self {
            frames,
            parked,
            root,
            _listeners: listeners,
        })
    }
}
