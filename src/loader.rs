use crate::constants::{HERO_ID, LOADER_ID, LOADER_TEXT_ID};
use crate::dom;
use folio_core::{LoaderPhase, LoaderSequence};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Nodes {
    loader: web::Element,
    text: Option<web::Element>,
    hero: Option<web::Element>,
    body: Option<web::HtmlElement>,
}

impl Nodes {
    fn show(&self, seq: &LoaderSequence) {
        match seq.phase() {
            LoaderPhase::Flash(_) => {
                if let (Some(el), Some(text)) = (&self.text, seq.frame_text()) {
                    if el.text_content().as_deref() != Some(text) {
                        el.set_text_content(Some(text));
                    }
                }
            }
            LoaderPhase::Welcome => {
                _ = self.loader.class_list().add_1("is-done");
                if let Some(body) = &self.body {
                    _ = body.class_list().add_1("loaded");
                }
            }
            LoaderPhase::Revealed => {
                if let Some(hero) = &self.hero {
                    _ = hero.class_list().add_1("revealed");
                }
            }
        }
    }
}

/// Intro flash frames, the welcome screen and the scroll-to-reveal unlock.
pub struct Loader {
    _steps: Vec<Timeout>,
    _scroll: EventListener,
}

impl Loader {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let nodes = Rc::new(Nodes {
            loader: dom::element_by_id(document, LOADER_ID)?,
            text: document.get_element_by_id(LOADER_TEXT_ID),
            hero: document.get_element_by_id(HERO_ID),
            body: document.body(),
        });
        let seq = Rc::new(RefCell::new(LoaderSequence::new()));
        nodes.show(&seq.borrow());

        // One timer per phase change; none are left running after the welcome.
        let started = js_sys::Date::now();
        let steps = LoaderSequence::change_points()
            .map(|at| {
                let nodes = nodes.clone();
                let seq = seq.clone();
                Timeout::new(at.ceil() as u32, move || {
                    let since = (js_sys::Date::now() - started).max(at);
                    let phase = seq.borrow_mut().advance_to(since);
                    nodes.show(&seq.borrow());
                    if !matches!(phase, LoaderPhase::Flash(_)) {
                        log::info!("[loader] {:?}", phase);
                    }
                })
            })
            .collect();

        let scroll = EventListener::new(window, "scroll", move |_| {
            let mut seq = seq.borrow_mut();
            if seq.phase() == LoaderPhase::Revealed {
                return;
            }
            if seq.on_scroll(dom::scroll_y()) == LoaderPhase::Revealed {
                log::info!("[loader] revealed");
                nodes.show(&seq);
            }
        });

        Ok(Self {
            _steps: steps,
            _scroll: scroll,
        })
    }
}
