//! Environment capability the factory builds against
//!
//! The factory never touches nodes directly; everything goes through this
//! trait, so a test double can stand in for the real [`Document`].

use dom::{Document, NodeId, NodeType, Properties, Result};

/// Document-like node factory and mutator
pub trait Environment {
    /// Fails with `DomError::InvalidTagName` for malformed names
    fn create_element(&mut self, tag: &str) -> Result<NodeId>;

    fn create_text_node(&mut self, text: &str) -> Result<NodeId>;

    /// Empty container node (document fragment)
    fn create_fragment(&mut self) -> Result<NodeId>;

    /// Node-category marker
    fn node_type(&self, node: NodeId) -> Result<NodeType>;

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> Result<()>;

    fn remove_attribute(&mut self, element: NodeId, name: &str) -> Result<()>;

    /// Returns the appended node
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId>;

    /// Property bag of a node
    fn properties_mut(&mut self, node: NodeId) -> Result<&mut Properties>;
}

impl Environment for Document {
    fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        Document::create_element(self, tag)
    }

    fn create_text_node(&mut self, text: &str) -> Result<NodeId> {
        Document::create_text_node(self, text)
    }

    fn create_fragment(&mut self) -> Result<NodeId> {
        Document::create_fragment(self)
    }

    fn node_type(&self, node: NodeId) -> Result<NodeType> {
        Document::node_type(self, node)
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> Result<()> {
        Document::set_attribute(self, element, name, value)
    }

    fn remove_attribute(&mut self, element: NodeId, name: &str) -> Result<()> {
        Document::remove_attribute(self, element, name)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId> {
        Document::append_child(self, parent, child)
    }

    fn properties_mut(&mut self, node: NodeId) -> Result<&mut Properties> {
        Document::properties_mut(self, node)
    }
}
