use crate::constants::{FIRST_FRAME_DT, MAX_FRAME_DT};
use folio_core::{FrameGate, GateAction};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a requestAnimationFrame loop that only runs while its host is
/// visible. Clones share the same loop; the owner calls [`shutdown`] on
/// teardown.
///
/// [`shutdown`]: LoopHandle::shutdown
#[derive(Clone)]
pub struct LoopHandle {
    gate: Rc<RefCell<FrameGate>>,
    tick: Tick,
}

impl LoopHandle {
    pub fn set_visible(&self, visible: bool) {
        let action = self.gate.borrow_mut().set_visible(visible);
        if action == GateAction::Start {
            request_frame(&self.tick);
        }
    }

    pub fn shutdown(&self) {
        self.gate.borrow_mut().shutdown();
    }
}

fn request_frame(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Create a gated loop calling `on_frame(dt_secs)` once per display refresh.
/// The loop is idle until the first `set_visible(true)`.
pub fn start_gated_loop(mut on_frame: impl FnMut(f32) + 'static) -> LoopHandle {
    let gate = Rc::new(RefCell::new(FrameGate::new()));
    let tick: Tick = Rc::new(RefCell::new(None));

    let gate_tick = gate.clone();
    let tick_clone = tick.clone();
    let mut last: Option<Instant> = None;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !gate_tick.borrow_mut().should_continue() {
            last = None;
            return;
        }
        let now = Instant::now();
        let dt = match last {
            Some(prev) => (now - prev).as_secs_f32().min(MAX_FRAME_DT),
            None => FIRST_FRAME_DT,
        };
        last = Some(now);
        on_frame(dt);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));

    LoopHandle { gate, tick }
}
