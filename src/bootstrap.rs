//! Page start-up: favicon, body styling, then one composition into the root

use crate::config::PageConfig;
use crate::dom::Dom;
use crate::page::compose_page;
use crate::style::{apply_style, style_for, Role};
use crate::{Error, Result};

/// Selector for the favicon `<link>` in the host page
pub const FAVICON_SELECTOR: &str = "link[rel~='icon']";

fn favicon_link<D: Dom>(dom: &D) -> Result<D::Node> {
    dom.query_selector(FAVICON_SELECTOR)
        .ok_or_else(|| Error::MissingElement(FAVICON_SELECTOR.to_string()))
}

fn page_body<D: Dom>(dom: &D) -> Result<D::Node> {
    dom.body()
        .ok_or_else(|| Error::MissingElement("body".to_string()))
}

/// Point the favicon link at `href`
pub fn set_favicon<D: Dom>(dom: &mut D, href: &str) -> Result<()> {
    let link = favicon_link(dom)?;
    dom.set_property(&link, "href", href);
    Ok(())
}

/// Apply the page-wide body style
pub fn style_body<D: Dom>(dom: &mut D) -> Result<()> {
    let body = page_body(dom)?;
    apply_style(dom, &body, &style_for(Role::PageBody));
    Ok(())
}

/// Prepare the host page and compose `config` into it.
///
/// The configuration is validated and the favicon link, body and root are
/// all looked up before the first write, so a missing element or a bad
/// record leaves the host page exactly as it was.
pub fn bootstrap<D: Dom>(dom: &mut D, config: &PageConfig) -> Result<()> {
    config.validate()?;

    let link = favicon_link(dom)?;
    let body = page_body(dom)?;
    let root = dom
        .get_element_by_id(&config.root_id)
        .ok_or_else(|| Error::MissingElement(format!("#{}", config.root_id)))?;

    dom.set_property(&link, "href", &config.favicon);
    log::debug!("favicon set to {}", config.favicon);

    apply_style(dom, &body, &style_for(Role::PageBody));
    log::debug!("body styled");

    compose_page(dom, &root, &config.content())?;
    log::info!(
        "composed {} with {} content and {} demo links",
        config.title,
        config.content_links.len(),
        config.demo_links.len()
    );
    Ok(())
}
