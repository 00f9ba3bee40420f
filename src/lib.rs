#![cfg(target_arch = "wasm32")]
use folio_core::{Capabilities, ProjectCatalog};
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod cards;
mod constants;
mod contact;
mod cursor;
mod dive;
mod dom;
mod frame;
mod hero;
mod input;
mod loader;
mod marquee;
mod narrative;
mod parallax;
mod particles;
mod projects;
mod render;
mod scroll;
mod theme;
mod visibility;

use constants::*;

/// Every live section of the page. Sections are torn down in reverse mount
/// order so later sections never outlive what they were laid out against.
#[derive(Default)]
struct Page {
    sections: Vec<(&'static str, Box<dyn Any>)>,
}

impl Page {
    fn keep<T: 'static>(&mut self, name: &'static str, mounted: anyhow::Result<T>) {
        match mounted {
            Ok(section) => self.sections.push((name, Box::new(section))),
            Err(e) => log::warn!("[{name}] not mounted: {e:#}"),
        }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        while let Some((name, section)) = self.sections.pop() {
            drop(section);
            log::debug!("[{name}] torn down");
        }
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    match init() {
        Ok(page) => {
            log::info!("{} sections mounted", page.sections.len());
            PAGE.with(|p| *p.borrow_mut() = Some(page));
        }
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Remove every listener, observer and frame loop the page installed.
#[wasm_bindgen]
pub fn teardown() {
    PAGE.with(|p| p.borrow_mut().take());
    log::info!("folio-web stopped");
}

fn init() -> anyhow::Result<Page> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (width, _) = dom::viewport_size();
    let caps = Capabilities::detect(width, dom::coarse_pointer(&window));
    log::info!("[caps] {:?}", caps);

    let catalog = match ProjectCatalog::embedded() {
        Ok(catalog) => Some(Rc::new(catalog)),
        Err(e) => {
            log::error!("[projects] {e}; project sections disabled");
            None
        }
    };

    let mut page = Page::default();
    page.keep("loader", loader::Loader::mount(&window, &document));

    if let Ok(canvas) = dom::element_by_id(&document, HERO_SPHERE_ID) {
        page.keep("hero", hero::HeroSphere::mount(canvas, &caps));
    }
    if let Some(body) = document.body() {
        for canvas in dom::query_all::<web::HtmlCanvasElement>(&body, PARTICLES_SELECTOR) {
            let count = particles::count_for(&canvas, &caps);
            page.keep("particles", particles::ParticleLayer::mount(canvas, count));
        }
    }

    if let Ok(section) = dom::element_by_id(&document, DIVE_SECTION_ID) {
        page.keep("dive", dive::StarDive::mount(&document, section, &caps));
    }

    if let Some(catalog) = &catalog {
        if let (Ok(section), Ok(rows)) = (
            dom::element_by_id::<web::Element>(&document, MARQUEE_SECTION_ID),
            dom::element_by_id::<web::Element>(&document, MARQUEE_ROWS_ID),
        ) {
            let featured = catalog.featured();
            page.keep(
                "marquee",
                marquee::Marquee::mount(&document, &section, &rows, &featured),
            );
        }
        if let Ok(section) = dom::element_by_id(&document, REVEAL_SECTION_ID) {
            let images = catalog.with_image_assets();
            page.keep(
                "reveal",
                parallax::ParallaxReveal::mount(&document, section, &images, &caps),
            );
        }
    }

    if let Ok(section) = dom::element_by_id(&document, ABOUT_SECTION_ID) {
        page.keep("about", narrative::Narrative::mount(&document, section));
    }

    if let Ok(section) = dom::element_by_id::<web::Element>(&document, PROJECTS_SECTION_ID) {
        if let Some(catalog) = &catalog {
            page.keep(
                "projects",
                projects::ProjectsGrid::mount(&document, catalog.clone()),
            );
        }
        if let Some(root) = document.document_element() {
            let root: web::HtmlElement = wasm_bindgen::JsCast::unchecked_into(root);
            let provider = theme::ThemeProvider::new(root);
            page.keep("theme", theme::ThemeSection::mount(section, provider));
        }
    }

    if let Ok(form) = dom::element_by_id(&document, CONTACT_FORM_ID) {
        page.keep("contact", contact::Contact::mount(form, &document));
    }

    if !caps.is_mobile() {
        page.keep("cursor", cursor::CursorFollower::mount(&window, &document));
    }
    // Last: the scrollable height is only final once the pinned sections
    // have sized themselves.
    page.keep("scroll", scroll::SmoothScroll::mount(&window, &document));

    Ok(page)
}
