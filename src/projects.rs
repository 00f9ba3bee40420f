use crate::cards::project_card;
use crate::constants::{PROJECTS_GRID_ID, PROJECTS_MORE_ID, PROJECTS_PAGE_SIZE};
use crate::dom;
use folio_core::ProjectCatalog;
use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn render_page(
    document: &web::Document,
    grid: &web::Element,
    catalog: &ProjectCatalog,
    page: usize,
) -> anyhow::Result<()> {
    for project in catalog.page(page, PROJECTS_PAGE_SIZE) {
        grid.append_child(&project_card(document, project, "project-card")?)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// The project grid, rendered a page at a time behind a "Show more" button
/// that hides itself after the last page.
pub struct ProjectsGrid {
    _more: Option<EventListener>,
}

impl ProjectsGrid {
    pub fn mount(document: &web::Document, catalog: Rc<ProjectCatalog>) -> anyhow::Result<Self> {
        let grid: web::Element = dom::element_by_id(document, PROJECTS_GRID_ID)?;
        grid.set_inner_html("");
        render_page(document, &grid, &catalog, 0)?;

        let pages = catalog.page_count(PROJECTS_PAGE_SIZE);
        let more = match dom::element_by_id::<web::HtmlElement>(document, PROJECTS_MORE_ID) {
            Ok(button) if pages > 1 => {
                let next = Cell::new(1usize);
                let document = document.clone();
                let hide = button.clone();
                Some(EventListener::new(&button, "click", move |_| {
                    let page = next.get();
                    if let Err(e) = render_page(&document, &grid, &catalog, page) {
                        log::warn!("[projects] page {page}: {e:#}");
                    }
                    next.set(page + 1);
                    if page + 1 >= pages {
                        dom::set_style(&hide, "display", "none");
                    }
                }))
            }
            Ok(button) => {
                dom::set_style(&button, "display", "none");
                None
            }
            Err(_) => None,
        };

        log::info!("[projects] {pages} pages of {PROJECTS_PAGE_SIZE}");
        Ok(Self { _more: more })
    }
}
