use crate::constants::{
    CURSOR_DOT_EASE, CURSOR_DOT_HALF, CURSOR_DOT_ID, CURSOR_RING_EASE, CURSOR_RING_HALF,
    CURSOR_RING_ID,
};
use crate::dom;
use crate::frame::{start_gated_loop, LoopHandle};
use crate::input::is_interactive;
use folio_core::CursorTrail;
use gloo::events::EventListener;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn place(el: &web::HtmlElement, at: Vec2, half: f32) {
    dom::set_style(
        el,
        "transform",
        &format!("translate3d({:.1}px, {:.1}px, 0)", at.x - half, at.y - half),
    );
}

/// A ring and dot trailing the pointer. The ring grows over links and
/// buttons.
pub struct CursorFollower {
    frames: LoopHandle,
    body: Option<web::HtmlElement>,
    _listeners: [EventListener; 4],
}

impl Drop for CursorFollower {
    fn drop(&mut self) {
        self.frames.shutdown();
        if let Some(body) = &self.body {
            _ = body.class_list().remove_1("has-cursor");
        }
    }
}

impl CursorFollower {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let ring: web::HtmlElement = dom::element_by_id(document, CURSOR_RING_ID)?;
        let dot: web::HtmlElement = dom::element_by_id(document, CURSOR_DOT_ID)?;
        let trail = Rc::new(RefCell::new(CursorTrail::new(
            CURSOR_RING_EASE,
            CURSOR_DOT_EASE,
        )));
        let body = document.body();

        let frames = {
            let trail = trail.clone();
            let ring = ring.clone();
            start_gated_loop(move |_dt| {
                if let Some((ring_at, dot_at)) = trail.borrow_mut().step() {
                    place(&ring, ring_at, CURSOR_RING_HALF);
                    place(&dot, dot_at, CURSOR_DOT_HALF);
                }
            })
        };

        let moved = {
            let frames = frames.clone();
            let body = body.clone();
            EventListener::new(window, "pointermove", move |event| {
                if let Some(ev) = event.dyn_ref::<web::PointerEvent>() {
                    let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                    if trail.borrow_mut().pointer_moved(at) {
                        if let Some(body) = &body {
                            _ = body.class_list().add_1("has-cursor");
                        }
                    }
                    frames.set_visible(true);
                }
            })
        };

        // Stop the loop while the pointer is outside the page.
        let left = {
            let frames = frames.clone();
            EventListener::new(document, "mouseleave", move |_| frames.set_visible(false))
        };
        let entered = {
            let frames = frames.clone();
            EventListener::new(document, "mouseenter", move |_| frames.set_visible(true))
        };

        let hovered = {
            let window = window.clone();
            EventListener::new(document, "mouseover", move |event| {
                let Some(el) = event.target().and_then(|t| t.dyn_into::<web::Element>().ok())
                else {
                    return;
                };
                let cursor = window
                    .get_computed_style(&el)
                    .ok()
                    .flatten()
                    .and_then(|s| s.get_property_value("cursor").ok())
                    .unwrap_or_default();
                let on = is_interactive(&el.tag_name(), &el.class_name(), &cursor);
                _ = ring.class_list().toggle_with_force("is-pointer", on);
            })
        };

        log::info!("[cursor] follower on");
        Ok(Self {
            frames,
            body,
            _listeners: [moved, left, entered, hovered],
        })
    }
}
