//! Page assembly: the fixed top-level block sequence appended to the root

use crate::dom::Dom;
use crate::link::LinkGroup;
use crate::section::make_section;
use crate::style::{apply_style, style_for, Role, StyleMap};
use crate::Result;

/// Bottom margin of the tagline that introduces the demo section
pub const SECONDARY_TAGLINE_MARGIN_BOTTOM: &str = "-4%";

/// Inputs to [`compose_page`]
#[derive(Debug, Clone, Copy)]
pub struct PageContent<'a> {
    pub title: &'a str,
    pub tagline: &'a str,
    pub content_links: &'a LinkGroup,
    pub secondary_tagline: Option<&'a str>,
    pub demo_links: &'a LinkGroup,
}

/// One top-level block of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Title,
    Tagline,
    ContentLinks,
    SecondaryTagline,
    DemoLinks,
}

/// The ordered top-level blocks for a given page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSkeleton {
    blocks: Vec<Block>,
}

impl PageSkeleton {
    pub fn for_content(content: &PageContent<'_>) -> Self {
        let mut blocks = vec![Block::Title, Block::Tagline, Block::ContentLinks];
        if content.secondary_tagline.is_some() {
            blocks.push(Block::SecondaryTagline);
        }
        blocks.push(Block::DemoLinks);
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// `div.intro` holding the page title
pub fn make_title_block<D: Dom>(dom: &mut D, title: &str) -> D::Node {
    text_block(dom, "intro", title, &style_for(Role::TitleBlock))
}

/// `div.tagline` holding one line of tagline text
pub fn make_tagline_block<D: Dom>(dom: &mut D, tagline: &str) -> D::Node {
    text_block(dom, "tagline", tagline, &style_for(Role::TaglineBlock))
}

fn make_secondary_tagline_block<D: Dom>(dom: &mut D, tagline: &str) -> D::Node {
    let style = style_for(Role::TaglineBlock).with("margin-bottom", SECONDARY_TAGLINE_MARGIN_BOTTOM);
    text_block(dom, "tagline", tagline, &style)
}

fn text_block<D: Dom>(dom: &mut D, class: &str, text: &str, style: &StyleMap) -> D::Node {
    let div = dom.create_element("div");
    dom.set_property(&div, "className", class);
    dom.set_property(&div, "textContent", text);
    apply_style(dom, &div, style);
    div
}

/// Build the page and append it under `root`.
///
/// Blocks are appended in skeleton order: title, tagline, content links,
/// the secondary tagline when there is one, then demo links. Everything is
/// built before the first append, so a failure leaves `root` untouched.
/// Each call appends a fresh set of blocks; call it once per document.
pub fn compose_page<D: Dom>(dom: &mut D, root: &D::Node, content: &PageContent<'_>) -> Result<()> {
    let skeleton = PageSkeleton::for_content(content);

    let mut nodes = Vec::with_capacity(skeleton.len());
    for block in skeleton.blocks() {
        let node = match block {
            Block::Title => make_title_block(dom, content.title),
            Block::Tagline => make_tagline_block(dom, content.tagline),
            Block::ContentLinks => make_section(dom, content.content_links)?,
            Block::SecondaryTagline => match content.secondary_tagline {
                Some(text) => make_secondary_tagline_block(dom, text),
                None => continue,
            },
            Block::DemoLinks => make_section(dom, content.demo_links)?,
        };
        nodes.push(node);
    }

    for node in &nodes {
        dom.append_child(root, node);
    }
    log::debug!("page composed with {} top-level blocks", nodes.len());

    Ok(())
}
