use anyhow::anyhow;
use folio_core::constants::MAX_DEVICE_PIXEL_RATIO;
use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow!("#{id} has an unexpected element type"))
}

pub fn query_all<T: JsCast>(root: &web::Element, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<T>().ok())
        .collect()
}

pub fn create<T: JsCast>(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<T> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{tag}>: {:?}", e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<T>()
        .map_err(|_| anyhow!("<{tag}> has an unexpected element type"))
}

/// Build a plain JS object from key/value pairs, for dictionary-style
/// arguments (observer init, animation options, keyframes).
pub fn js_object(entries: &[(&str, JsValue)]) -> js_sys::Object {
    let obj = js_sys::Object::new();
    for (k, v) in entries {
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(k), v);
    }
    obj
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Top of `el` in document coordinates.
#[inline]
pub fn document_top(el: &web::Element) -> f64 {
    el.get_bounding_client_rect().top() + scroll_y()
}

#[inline]
pub fn capped_dpr() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
}

/// Match the canvas backing store to its CSS box times `dpr`. Returns the
/// CSS size, which is the coordinate space drawing code works in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, dpr: f64) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (rect.width() as f32, rect.height() as f32)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn coarse_pointer(window: &web::Window) -> bool {
    window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Call `on_resize` on window resizes and on visual-viewport resizes. Mobile
/// browsers only resize the visual viewport when their toolbars collapse.
/// Sections relayout in mount order, so pinned regions further down the page
/// see the heights of the ones above.
pub fn on_resize(window: &web::Window, on_resize: impl Fn() + 'static) -> Vec<EventListener> {
    let on_resize = Rc::new(on_resize);
    let mut listeners = Vec::with_capacity(2);
    listeners.push({
        let on_resize = on_resize.clone();
        EventListener::new(window, "resize", move |_| on_resize())
    });
    if let Some(viewport) = window.visual_viewport() {
        listeners.push(EventListener::new(&viewport, "resize", move |_| on_resize()));
    }
    listeners
}
