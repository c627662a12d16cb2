//! Inline styles for every element role on the page

use crate::dom::Dom;

const MONOSPACE: &str = "'Ubuntu Mono',monospace";
const FOREGROUND: &str = "#FAFAFA";

/// The element roles the page is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The clickable anchor wrapping one tile
    Link,
    /// Icon-font glyph inside a tile
    Icon,
    /// Text label under the icon
    Label,
    TitleBlock,
    TaglineBlock,
    SectionContainer,
    PageBody,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Link,
        Role::Icon,
        Role::Label,
        Role::TitleBlock,
        Role::TaglineBlock,
        Role::SectionContainer,
        Role::PageBody,
    ];
}

/// Ordered CSS declarations, in the order they are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap(Vec<(&'static str, &'static str)>);

impl StyleMap {
    pub fn get(&self, property: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(k, _)| *k == property)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this map with `property` set to `value`. An existing
    /// declaration keeps its position; a new one goes last.
    pub fn with(&self, property: &'static str, value: &'static str) -> StyleMap {
        let mut decls = self.0.clone();
        match decls.iter_mut().find(|(k, _)| *k == property) {
            Some(slot) => slot.1 = value,
            None => decls.push((property, value)),
        }
        StyleMap(decls)
    }
}

/// Inline style for `role`
pub fn style_for(role: Role) -> StyleMap {
    let decls: &[(&'static str, &'static str)] = match role {
        Role::Link => &[
            ("display", "inline-block"),
            ("padding", "50px"),
            ("color", FOREGROUND),
        ],
        Role::Icon => &[("font-size", "3em"), ("padding", "10px")],
        Role::Label => &[("display", "block")],
        Role::TitleBlock => &[("font-size", "3.75em"), ("font-weight", "600")],
        Role::TaglineBlock => &[
            ("font-size", "1.5rem"),
            ("font-weight", "100"),
            ("margin", "1.5rem 0"),
        ],
        Role::SectionContainer => &[("text-align", "center"), ("font-family", MONOSPACE)],
        Role::PageBody => &[
            ("font-family", MONOSPACE),
            ("background-color", "#7e9733"),
            ("color", FOREGROUND),
            ("display", "flex"),
            ("flex-direction", "column"),
            ("min-height", "100vh"),
            ("justify-content", "center"),
            ("padding", "0 30px"),
            ("margin-bottom", "-8%"),
            ("text-align", "center"),
        ],
    };
    StyleMap(decls.to_vec())
}

/// Set every declaration of `style` on `node`
pub fn apply_style<D: Dom>(dom: &mut D, node: &D::Node, style: &StyleMap) {
    for (property, value) in style.iter() {
        dom.set_style(node, property, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;

    #[test]
    fn every_role_has_declarations() {
        for role in Role::ALL {
            assert!(!style_for(role).is_empty(), "{:?} has no style", role);
        }
    }

    #[test]
    fn link_tile_values() {
        let s = style_for(Role::Link);
        assert_eq!(s.get("display"), Some("inline-block"));
        assert_eq!(s.get("padding"), Some("50px"));
        assert_eq!(s.get("color"), Some("#FAFAFA"));
    }

    #[test]
    fn body_values() {
        let s = style_for(Role::PageBody);
        assert_eq!(s.len(), 10);
        assert_eq!(s.get("background-color"), Some("#7e9733"));
        assert_eq!(s.get("padding"), Some("0 30px"));
        assert_eq!(s.get("margin-bottom"), Some("-8%"));
        assert_eq!(s.get("min-height"), Some("100vh"));
    }

    #[test]
    fn tagline_and_section_values() {
        let t = style_for(Role::TaglineBlock);
        assert_eq!(t.get("margin"), Some("1.5rem 0"));
        assert_eq!(t.get("font-weight"), Some("100"));
        let c = style_for(Role::SectionContainer);
        assert_eq!(c.get("font-family"), Some("'Ubuntu Mono',monospace"));
    }

    #[test]
    fn with_appends_or_replaces() {
        let base = style_for(Role::TaglineBlock);
        let appended = base.with("margin-bottom", "-4%");
        assert_eq!(appended.len(), base.len() + 1);
        assert_eq!(appended.iter().last(), Some(("margin-bottom", "-4%")));

        let replaced = base.with("font-weight", "600");
        assert_eq!(replaced.len(), base.len());
        assert_eq!(replaced.iter().nth(1), Some(("font-weight", "600")));
        // base untouched
        assert_eq!(base.get("font-weight"), Some("100"));
    }

    #[test]
    fn apply_sets_declarations_in_order() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element("a");
        apply_style(&mut doc, &a, &style_for(Role::Link));
        let props: Vec<String> = doc.styles(a).into_iter().map(|(k, _)| k).collect();
        assert_eq!(props, vec!["display", "padding", "color"]);
    }
}
