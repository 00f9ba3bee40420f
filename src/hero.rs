use crate::frame::{start_gated_loop, LoopHandle};
use crate::input::normalized_in_rect;
use crate::render::{self, Surface};
use crate::visibility::{self, VisibilityWatch};
use folio_core::constants::SPHERE_RADIUS;
use folio_core::{
    fibonacci_sphere, project, Capabilities, Projection, RotationController, RotationMode,
};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rotating point-cloud sphere behind the hero title.
pub struct HeroSphere {
    frames: LoopHandle,
    _watch: VisibilityWatch,
    _resize: EventListener,
    _pointer: Option<EventListener>,
}

impl Drop for HeroSphere {
    fn drop(&mut self) {
        self.frames.shutdown();
    }
}

impl HeroSphere {
    pub fn mount(canvas: web::HtmlCanvasElement, caps: &Capabilities) -> anyhow::Result<Self> {
        let surface = Surface::new(canvas.clone())?;
        let points = fibonacci_sphere(caps.sphere_points, SPHERE_RADIUS);
        let rotation = Rc::new(RefCell::new(RotationController::new(caps.rotation)));
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

        let pointer = (caps.rotation == RotationMode::Pointer).then(|| {
            let rotation = rotation.clone();
            let canvas = canvas.clone();
            EventListener::new(&window, "pointermove", move |event| {
                let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
                    return;
                };
                let rect = canvas.get_bounding_client_rect();
                let [nx, ny] = normalized_in_rect(
                    ev.client_x() as f32,
                    ev.client_y() as f32,
                    rect.left() as f32,
                    rect.top() as f32,
                    rect.width() as f32,
                    rect.height() as f32,
                );
                rotation.borrow_mut().set_pointer(nx, ny);
            })
        });

        let resize = {
            let surface = surface.clone();
            EventListener::new(&window, "resize", move |_| {
                surface.resize();
            })
        };

        let frames = {
            let surface = surface.clone();
            start_gated_loop(move |dt| {
                let current = rotation.borrow_mut().step(dt);
                let (w, h) = surface.size();
                let frame = project(&points, current, &Projection::centered(w, h), SPHERE_RADIUS);
                render::sphere::draw(&surface, &frame);
            })
        };

        let watch = {
            let frames = frames.clone();
            visibility::watch(&canvas, move |visible| frames.set_visible(visible))?
        };

        log::info!(
            "[hero] sphere with {} points, rotation {:?}",
            caps.sphere_points,
            caps.rotation
        );
        Ok(Self {
            frames,
            _watch: watch,
            _resize: resize,
            _pointer: pointer,
        })
    }
}
