//! Host document surface: the minimal element-tree API the composer needs
//!
//! Composition code only talks to the page through [`Dom`]. Backends decide
//! what a node handle is; the in-memory [`MemoryDocument`] is the one shipped
//! with the crate and is what the CLI and the tests compose into.

pub mod memory;

pub use memory::{MemoryDocument, NodeId};

/// The page-manipulation capability consumed by the composer.
///
/// Property names follow DOM naming (`className`, `textContent`, `href`).
/// Style property names follow CSS naming (`font-size`, `background-color`).
pub trait Dom {
    /// Handle to an element owned by the document
    type Node: Clone;

    /// Create a detached element with the given tag name
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Set a property on an element (`href`, `className`, `textContent`, ...)
    fn set_property(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Set one inline style property; an existing property keeps its position
    /// and gets the new value
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// First attached element matching `selector`, in document order
    fn query_selector(&self, selector: &str) -> Option<Self::Node>;

    /// Attached element whose `id` equals `id` exactly. Any string is a
    /// valid id here, including ones that are not CSS identifiers.
    fn get_element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// The document body
    fn body(&self) -> Option<Self::Node> {
        self.query_selector("body")
    }
}
