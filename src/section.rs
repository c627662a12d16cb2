//! Sections: a centered container of tiles for one link group

use crate::dom::Dom;
use crate::link::LinkGroup;
use crate::style::{apply_style, style_for, Role};
use crate::tile::make_tile;
use crate::Result;

/// Class name carried by every section container
pub const SECTION_CLASS: &str = "icons-social";

/// Build the section for `group`, one tile per record in stored order.
///
/// Every tile is built before any is appended, so an invalid record leaves
/// the container empty. The container is returned detached.
pub fn make_section<D: Dom>(dom: &mut D, group: &LinkGroup) -> Result<D::Node> {
    let tiles = group
        .iter()
        .map(|record| make_tile(dom, record))
        .collect::<Result<Vec<_>>>()?;

    let div = dom.create_element("div");
    dom.set_property(&div, "className", SECTION_CLASS);
    apply_style(dom, &div, &style_for(Role::SectionContainer));

    for tile in &tiles {
        dom.append_child(&div, tile);
    }
    log::debug!("section {} built with {} tiles", group.name(), tiles.len());

    Ok(div)
}
