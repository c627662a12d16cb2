//! In-memory document used for headless composition.
//!
//! The document is a `scraper::Html` grown node by node instead of parsed.
//! Element handles wrap ego-tree ids. Nodes are never freed: a detached
//! element stays addressable and can be appended again later.

use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node, Selector};
use sha2::{Digest, Sha256};

use super::Dom;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
const DOCTYPE: &str = "<!DOCTYPE html>";

/// Handle to an element inside a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(ego_tree::NodeId);

/// A scraper element tree rooted at `<html>`
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    html: Html,
    head: NodeId,
    body: NodeId,
}

impl MemoryDocument {
    /// A bare `html > head + body` document
    pub fn new() -> Self {
        let mut html = Html::new_document();
        let mut document = html.tree.root_mut();
        let mut root = document.append(element_node("html"));
        let head = root.append(element_node("head")).id();
        let body = root.append(element_node("body")).id();
        Self {
            html,
            head: NodeId(head),
            body: NodeId(body),
        }
    }

    /// The host shell the landing page is served in: a favicon link in the
    /// head and an empty `div#main` mount point in the body
    pub fn with_shell() -> Self {
        let mut doc = Self::new();

        let icon = doc.create_element("link");
        doc.set_property(&icon, "rel", "icon");
        doc.set_property(&icon, "href", "");
        let head = doc.head;
        doc.append_child(&head, &icon);

        let main = doc.create_element("div");
        doc.set_property(&main, "id", "main");
        let body = doc.body;
        doc.append_child(&body, &main);

        doc
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.html.tree.get(node.0)?.value().as_element()
    }

    fn element_ref(&self, node: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(node.0).and_then(ElementRef::wrap)
    }

    pub fn tag(&self, node: NodeId) -> &str {
        self.element(node).map(Element::name).unwrap_or("")
    }

    /// Read a property back; `className` reads the `class` attribute
    pub fn property(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attr(attribute_for_property(name))
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.styles(node)
            .into_iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v)
    }

    /// All inline style declarations in the order they were first set
    pub fn styles(&self, node: NodeId) -> Vec<(String, String)> {
        self.property(node, "style")
            .map(parse_declarations)
            .unwrap_or_default()
    }

    /// Element children, in order
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        match self.html.tree.get(node.0) {
            Some(n) => n
                .children()
                .filter(|c| c.value().is_element())
                .map(|c| NodeId(c.id()))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.html
            .tree
            .get(node.0)?
            .parent()
            .filter(|p| p.value().is_element())
            .map(|p| NodeId(p.id()))
    }

    /// Concatenated text of the element and its descendants
    pub fn text_content(&self, node: NodeId) -> String {
        self.element_ref(node)
            .map(|el| el.text().collect())
            .unwrap_or_default()
    }

    fn attached_elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
    }

    /// All attached elements matching `selector`, in document order
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let Ok(sel) = Selector::parse(selector) else {
            log::debug!("unsupported selector {:?}", selector);
            return Vec::new();
        };
        self.attached_elements()
            .filter(|el| sel.matches(el))
            .map(|el| NodeId(el.id()))
            .collect()
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        match self.html.tree.get(of.0) {
            Some(n) => n.id() == candidate.0 || n.ancestors().any(|a| a.id() == candidate.0),
            None => false,
        }
    }

    /// Serialize the whole document as HTML.
    ///
    /// Attributes are emitted in the order they were first set, so the output
    /// is a pure function of the build sequence.
    pub fn to_html(&self) -> String {
        let mut out = String::from(DOCTYPE);
        for el in self
            .html
            .tree
            .root()
            .children()
            .filter_map(ElementRef::wrap)
        {
            out.push_str(&el.html());
        }
        out
    }

    /// Serialize one element and its subtree
    pub fn outer_html(&self, node: NodeId) -> String {
        self.element_ref(node)
            .map(|el| el.html())
            .unwrap_or_default()
    }

    /// Lowercase hex SHA-256 of [`MemoryDocument::to_html`]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_html().as_bytes());
        hex::encode(hasher.finalize())
    }

    // Element caches its id and classes, so an attribute change rebuilds it.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(mut n) = self.html.tree.get_mut(node.0) else {
            return;
        };
        if let Node::Element(el) = n.value() {
            let key = QualName::new(None, Namespace::from(""), LocalName::from(name));
            let mut attrs: Vec<Attribute> = el
                .attrs
                .iter()
                .map(|(k, v)| Attribute {
                    name: k.clone(),
                    value: v.clone(),
                })
                .collect();
            match attrs.iter_mut().find(|a| a.name == key) {
                Some(slot) => slot.value = StrTendril::from_slice(value),
                None => attrs.push(Attribute {
                    name: key,
                    value: StrTendril::from_slice(value),
                }),
            }
            *el = Element::new(el.name.clone(), attrs);
        }
    }

    // textContent drops every child and leaves a single text node.
    fn set_text(&mut self, node: NodeId, value: &str) {
        let kids: Vec<ego_tree::NodeId> = match self.html.tree.get(node.0) {
            Some(n) => n.children().map(|c| c.id()).collect(),
            None => return,
        };
        for id in kids {
            if let Some(mut kid) = self.html.tree.get_mut(id) {
                kid.detach();
            }
        }
        if value.is_empty() {
            return;
        }
        if let Some(mut n) = self.html.tree.get_mut(node.0) {
            n.append(Node::Text(Text {
                text: StrTendril::from_slice(value),
            }));
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for MemoryDocument {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        NodeId(self.html.tree.orphan(element_node(tag)).id())
    }

    fn set_property(&mut self, node: &NodeId, name: &str, value: &str) {
        match name {
            "textContent" => self.set_text(*node, value),
            other => self.set_attribute(*node, attribute_for_property(other), value),
        }
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        let mut decls = self.styles(*node);
        match decls.iter_mut().find(|(k, _)| k == property) {
            Some(slot) => slot.1 = value.to_string(),
            None => decls.push((property.to_string(), value.to_string())),
        }
        let style = decls
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ");
        self.set_attribute(*node, "style", &style);
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        if self.html.tree.get(child.0).is_none() {
            return;
        }
        if self.is_ancestor_or_self(*child, *parent) {
            log::warn!("refusing to append {:?} under its own descendant {:?}", child, parent);
            return;
        }

        let Some(mut p) = self.html.tree.get_mut(parent.0) else {
            return;
        };
        // Already the last child: re-appending is a no-op.
        if p.last_child().map(|c| c.id()) == Some(child.0) {
            return;
        }
        // An attached child moves to its new parent.
        p.append_id(child.0);
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.attached_elements()
            .find(|el| el.value().id() == Some(id))
            .map(|el| NodeId(el.id()))
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }
}

fn element_node(tag: &str) -> Node {
    let name = QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from(tag.to_ascii_lowercase()),
    );
    Node::Element(Element::new(name, Vec::new()))
}

fn attribute_for_property(name: &str) -> &str {
    match name {
        "className" => "class",
        other => other,
    }
}

fn parse_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_has_icon_link_and_main() {
        let doc = MemoryDocument::with_shell();
        let icon = doc.query_selector("link[rel~='icon']").expect("icon link");
        assert_eq!(doc.parent(icon), Some(doc.head()));
        let main = doc.get_element_by_id("main").expect("main");
        assert_eq!(doc.tag(main), "div");
        assert_eq!(doc.body(), doc.parent(main));
    }

    #[test]
    fn detached_elements_are_not_queryable() {
        let mut doc = MemoryDocument::new();
        let div = doc.create_element("div");
        doc.set_property(&div, "id", "floating");
        let span = doc.create_element("span");
        doc.set_property(&span, "className", "inner");
        doc.append_child(&div, &span);
        assert!(doc.get_element_by_id("floating").is_none());
        assert!(doc.query_selector(".inner").is_none());

        let body = doc.body().unwrap();
        doc.append_child(&body, &div);
        assert_eq!(doc.get_element_by_id("floating"), Some(div));
        assert_eq!(doc.query_selector(".inner"), Some(span));
    }

    #[test]
    fn id_lookup_takes_ids_that_are_not_css_identifiers() {
        let mut doc = MemoryDocument::new();
        let body = doc.body().unwrap();
        for id in ["page.root", "1st", "a:b"] {
            let div = doc.create_element("div");
            doc.set_property(&div, "id", id);
            doc.append_child(&body, &div);
            assert_eq!(doc.get_element_by_id(id), Some(div), "{}", id);
        }
        assert!(doc.get_element_by_id("page").is_none());
    }

    #[test]
    fn set_property_overwrites_and_refreshes_id() {
        let mut doc = MemoryDocument::with_shell();
        let main = doc.get_element_by_id("main").unwrap();
        doc.set_property(&main, "id", "app");
        assert!(doc.get_element_by_id("main").is_none());
        assert_eq!(doc.get_element_by_id("app"), Some(main));
        assert_eq!(doc.property(main, "id"), Some("app"));
    }

    #[test]
    fn set_style_replaces_in_place() {
        let mut doc = MemoryDocument::new();
        let div = doc.create_element("div");
        doc.set_style(&div, "margin", "1.5rem 0");
        doc.set_style(&div, "color", "red");
        doc.set_style(&div, "margin", "0");
        assert_eq!(
            doc.styles(div),
            vec![
                ("margin".to_string(), "0".to_string()),
                ("color".to_string(), "red".to_string())
            ]
        );
        assert_eq!(doc.property(div, "style"), Some("margin: 0; color: red"));
    }

    #[test]
    fn append_moves_attached_child() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let child = doc.create_element("span");
        doc.append_child(&a, &child);
        doc.append_child(&b, &child);
        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), vec![child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn append_to_same_parent_moves_to_end() {
        let mut doc = MemoryDocument::new();
        let list = doc.create_element("div");
        let first = doc.create_element("span");
        let second = doc.create_element("span");
        doc.append_child(&list, &first);
        doc.append_child(&list, &second);
        doc.append_child(&list, &second);
        assert_eq!(doc.children(list), vec![first, second]);
        doc.append_child(&list, &first);
        assert_eq!(doc.children(list), vec![second, first]);
    }

    #[test]
    fn append_refuses_cycles() {
        let mut doc = MemoryDocument::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");
        doc.append_child(&outer, &inner);
        doc.append_child(&inner, &outer);
        assert_eq!(doc.parent(outer), None);
        assert_eq!(doc.children(inner).len(), 0);
    }

    #[test]
    fn text_content_replaces_children() {
        let mut doc = MemoryDocument::new();
        let div = doc.create_element("div");
        let span = doc.create_element("span");
        doc.append_child(&div, &span);
        doc.set_property(&div, "textContent", "hello");
        assert!(doc.children(div).is_empty());
        assert_eq!(doc.parent(span), None);
        assert_eq!(doc.text_content(div), "hello");

        doc.set_property(&div, "textContent", "again");
        assert_eq!(doc.text_content(div), "again");
    }

    #[test]
    fn serializes_attributes_text_and_style() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element("a");
        doc.set_property(&a, "target", "_blank");
        doc.set_property(&a, "href", "https://cert.ist");
        doc.set_style(&a, "font-family", "'Ubuntu Mono',monospace");
        let span = doc.create_element("span");
        doc.set_property(&span, "className", "label");
        doc.set_property(&span, "textContent", "a < b & \"c\"");
        doc.append_child(&a, &span);

        assert_eq!(
            doc.outer_html(a),
            "<a target=\"_blank\" href=\"https://cert.ist\" style=\"font-family: 'Ubuntu Mono',monospace\">\
             <span class=\"label\">a &lt; b &amp; \"c\"</span></a>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let doc = MemoryDocument::with_shell();
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html><html><head><link rel=\"icon\" href=\"\"></head>"));
        assert!(!html.contains("</link>"));
    }

    #[test]
    fn serialized_document_parses_back() {
        let doc = MemoryDocument::with_shell();
        let parsed = Html::parse_document(&doc.to_html());
        let sel = Selector::parse("body > div#main").unwrap();
        assert_eq!(parsed.select(&sel).count(), 1);
    }

    #[test]
    fn class_selector_matches_any_listed_class() {
        let mut doc = MemoryDocument::new();
        let i = doc.create_element("i");
        doc.set_property(&i, "className", "fas fa-code");
        let body = doc.body().unwrap();
        doc.append_child(&body, &i);
        assert_eq!(doc.query_selector(".fa-code"), Some(i));
        assert_eq!(doc.query_selector("i[class~=fas]"), Some(i));
        assert_eq!(doc.query_selector("i[class=fas]"), None);
        assert_eq!(doc.query_selector("i[["), None);
    }

    #[test]
    fn digest_tracks_structure() {
        let a = MemoryDocument::with_shell();
        let b = MemoryDocument::with_shell();
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 64);

        let mut c = MemoryDocument::with_shell();
        let main = c.get_element_by_id("main").unwrap();
        let div = c.create_element("div");
        c.append_child(&main, &div);
        assert_ne!(a.digest(), c.digest());
    }
}
