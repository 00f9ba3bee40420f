use crate::constants::{OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Live IntersectionObserver subscription. Disconnects on drop.
pub struct VisibilityWatch {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_change(is_intersecting)` whenever `target` enters or leaves the
/// (slightly enlarged) viewport.
pub fn watch(
    target: &web::Element,
    mut on_change: impl FnMut(bool) + 'static,
) -> anyhow::Result<VisibilityWatch> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                on_change(entry.is_intersecting());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let init: web::IntersectionObserverInit = dom::js_object(&[
        ("threshold", JsValue::from_f64(OBSERVER_THRESHOLD)),
        ("rootMargin", JsValue::from_str(OBSERVER_ROOT_MARGIN)),
    ])
    .unchecked_into();
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
    observer.observe(target);

    Ok(VisibilityWatch {
        observer,
        _callback: callback,
    })
}
