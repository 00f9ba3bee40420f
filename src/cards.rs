use crate::dom;
use folio_core::Project;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `<a class="{class}">` with the project's image, title and tags.
pub fn project_card(
    document: &web::Document,
    project: &Project,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let card: web::HtmlAnchorElement = dom::create(document, "a", class)?;
    card.set_href(&project.link);
    card.set_target("_blank");
    card.set_rel("noopener noreferrer");
    _ = card.set_attribute("data-project", &project.id);

    let img: web::HtmlImageElement = dom::create(document, "img", "card-image")?;
    img.set_src(&project.image);
    img.set_alt(&project.title);
    _ = img.set_attribute("loading", "lazy");
    _ = card.append_child(&img);

    let title: web::HtmlElement = dom::create(document, "span", "card-title")?;
    title.set_text_content(Some(&project.title));
    _ = card.append_child(&title);

    if !project.tags.is_empty() {
        let tags: web::HtmlElement = dom::create(document, "span", "card-tags")?;
        tags.set_text_content(Some(&project.tags.join(" · ")));
        _ = card.append_child(&tags);
    }

    Ok(card.unchecked_into())
}
