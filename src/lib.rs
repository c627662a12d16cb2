//! jbird.dev landing page composer
//!
//! Builds the jbird.dev landing page (a title, a tagline and two sections of
//! icon-labelled links) by creating and styling elements directly in a host
//! document, rather than by loading pre-rendered markup.
//!
//! # Layout
//!
//! - [`style`]: inline style per element role
//! - [`tile`]: one link tile (anchor, icon glyph, label)
//! - [`section`]: an ordered group of tiles
//! - [`page`]: the fixed top-level block sequence
//! - [`bootstrap`]: favicon, body style and the single composition pass
//! - [`dom`]: the host document trait and the in-memory document
//!
//! # Example
//!
//! ```
//! use jbirddev::{bootstrap, MemoryDocument, PageConfig};
//! use jbirddev::dom::Dom;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = MemoryDocument::with_shell();
//! bootstrap(&mut doc, &PageConfig::classic())?;
//!
//! let main = doc.get_element_by_id("main").expect("shell has #main");
//! assert_eq!(doc.children(main).len(), 4);
//! println!("{}", doc.to_html());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod link;
pub mod page;
pub mod section;
pub mod style;
pub mod tile;

pub use bootstrap::bootstrap;
pub use config::PageConfig;
pub use dom::{Dom, MemoryDocument, NodeId};
pub use link::{Label, LinkGroup, LinkRecord, LinkTarget};
pub use page::{compose_page, Block, PageContent, PageSkeleton};
pub use section::make_section;
pub use style::{style_for, Role, StyleMap};
pub use tile::make_tile;

/// Bootstrap `config` into a fresh host shell and return the document
pub fn render_document(config: &PageConfig) -> Result<MemoryDocument> {
    let mut doc = MemoryDocument::with_shell();
    bootstrap(&mut doc, config)?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_deterministic() {
        let a = render_document(&PageConfig::classic()).unwrap();
        let b = render_document(&PageConfig::classic()).unwrap();
        assert_eq!(a.to_html(), b.to_html());
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn variants_render_differently() {
        let classic = render_document(&PageConfig::classic()).unwrap();
        let demo = render_document(&PageConfig::with_demo_tagline()).unwrap();
        assert_ne!(classic.digest(), demo.digest());
    }
}
