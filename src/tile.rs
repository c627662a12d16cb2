//! Link tiles: one anchor holding an icon glyph and a text label

use crate::dom::Dom;
use crate::link::LinkRecord;
use crate::style::{apply_style, style_for, Role};
use crate::Result;

/// Build the tile for `record`.
///
/// The anchor opens in a new browsing context and wraps an `<i>` glyph and a
/// `<span>` label. The tile is returned detached; attaching it is up to the
/// caller. Invalid records are rejected before any element is created.
pub fn make_tile<D: Dom>(dom: &mut D, record: &LinkRecord) -> Result<D::Node> {
    record.validate()?;

    let a = dom.create_element("a");
    dom.set_property(&a, "target", "_blank");
    dom.set_property(&a, "href", &record.href());
    apply_style(dom, &a, &style_for(Role::Link));

    let icon = dom.create_element("i");
    dom.set_property(&icon, "className", record.icon_class());
    apply_style(dom, &icon, &style_for(Role::Icon));

    let label = dom.create_element("span");
    dom.set_property(&label, "textContent", record.display_label());
    apply_style(dom, &label, &style_for(Role::Label));

    dom.append_child(&a, &icon);
    dom.append_child(&a, &label);

    Ok(a)
}
