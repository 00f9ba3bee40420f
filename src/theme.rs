use crate::dom;
use folio_core::{Theme, ThemeTransition};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Single owner of the page colours. Every theme change goes through
/// [`ThemeProvider::set`], which writes the CSS variables once.
pub struct ThemeProvider {
    current: RefCell<Theme>,
    root: web::HtmlElement,
}

impl ThemeProvider {
    pub fn new(root: web::HtmlElement) -> Rc<Self> {
        let provider = Rc::new(Self {
            current: RefCell::new(Theme::default()),
            root,
        });
        provider.apply(Theme::default());
        provider
    }

    pub fn set(&self, theme: Theme) {
        if *self.current.borrow() == theme {
            return;
        }
        *self.current.borrow_mut() = theme;
        self.apply(theme);
    }

    fn apply(&self, theme: Theme) {
        dom::set_style(&self.root, "--bg", &theme.background.to_css());
        dom::set_style(&self.root, "--fg", &theme.foreground.to_css());
    }
}

/// Fades the page theme to light while the projects section scrolls through.
pub struct ThemeSection {
    _scroll: EventListener,
}

fn section_progress(section: &web::Element) -> f32 {
    let (_, vh) = dom::viewport_size();
    let rect = section.get_bounding_client_rect();
    // 0 when the top enters from below, 1 when the bottom leaves at the top.
    let travelled = vh - rect.top();
    let total = rect.height() + vh;
    if total <= 0.0 {
        return 0.0;
    }
    (travelled / total).clamp(0.0, 1.0) as f32
}

impl ThemeSection {
    pub fn mount(section: web::Element, provider: Rc<ThemeProvider>) -> anyhow::Result<Self> {
        let transition = ThemeTransition::light_section();
        provider.set(transition.at(section_progress(&section)));
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let scroll = EventListener::new(&window, "scroll", move |_| {
            provider.set(transition.at(section_progress(&section)));
        });
        Ok(Self { _scroll: scroll })
    }
}
