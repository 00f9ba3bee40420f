use crate::constants::PARTICLES_ATTR;
use crate::frame::{start_gated_loop, LoopHandle};
use crate::render::{self, Surface};
use crate::visibility::{self, VisibilityWatch};
use folio_core::{Capabilities, ParticleField};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Floating glow particles on a transparent canvas.
pub struct ParticleLayer {
    frames: LoopHandle,
    _watch: VisibilityWatch,
    _resize: EventListener,
}

impl Drop for ParticleLayer {
    fn drop(&mut self) {
        self.frames.shutdown();
    }
}

/// Particle budget for a canvas, picked by its `data-particles` value.
pub fn count_for(canvas: &web::HtmlCanvasElement, caps: &Capabilities) -> usize {
    match canvas.get_attribute(PARTICLES_ATTR).as_deref() {
        Some("marquee") => caps.marquee_particles,
        Some(n) => n.parse().unwrap_or(caps.particle_count),
        None => caps.particle_count,
    }
}

impl ParticleLayer {
    pub fn mount(canvas: web::HtmlCanvasElement, count: usize) -> anyhow::Result<Self> {
        let surface = Surface::new(canvas.clone())?;
        let (w, h) = surface.size();
        let field = Rc::new(RefCell::new(ParticleField::new(
            count,
            w,
            h,
            &mut rand::thread_rng(),
        )));

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let resize = {
            let surface = surface.clone();
            let field = field.clone();
            EventListener::new(&window, "resize", move |_| {
                let (w, h) = surface.resize();
                field.borrow_mut().resize(w, h);
            })
        };

        let frames = {
            let surface = surface.clone();
            start_gated_loop(move |dt| {
                let mut field = field.borrow_mut();
                field.step(dt);
                let dots = field.frame();
                render::particles::draw(&surface, &dots);
            })
        };

        let watch = {
            let frames = frames.clone();
            visibility::watch(&canvas, move |visible| frames.set_visible(visible))?
        };

        log::debug!("[particles] mounted {} on #{}", count, canvas.id());
        Ok(Self {
            frames,
            _watch: watch,
            _resize: resize,
        })
    }
}
