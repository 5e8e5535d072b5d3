//! Core type definitions for the document tree
//!
//! Key design principles:
//! 1. Use u32 for indices (4 bytes vs 8 bytes pointer)
//! 2. Use SmallVec for small arrays (avoid heap allocation)
//! 3. Keep attributes in insertion order, like a live DOM does

use indexmap::IndexMap;
use serde_json::{Map, Value};
use smallvec::SmallVec;

/// Node identifier (index into arena)
/// u32 allows 4 billion nodes, enough for any document
pub type NodeId = u32;

/// Arbitrary named properties attached to a node, bypassing attribute serialization
pub type Properties = Map<String, Value>;

/// Node type matching DOM specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Attribute = 2,
    Text = 3,
    CdataSection = 4,
    EntityReference = 5,
    Entity = 6,
    ProcessingInstruction = 7,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
    Notation = 12,
}

/// The main document tree node structure
///
/// Design philosophy:
/// - Small fixed-size fields first (better packing)
/// - Use indices instead of pointers
/// - Properties live next to attributes but are never stringified
#[derive(Debug, Clone)]
pub struct DomNode {
    pub node_id: NodeId,
    pub node_type: NodeType,

    // Navigation indices
    pub parent_id: Option<NodeId>,
    pub children_ids: SmallVec<[NodeId; 4]>, // Most nodes have <4 children

    /// Uppercase tag name for elements, `#text` / `#document-fragment` otherwise
    pub node_name: String,
    pub node_value: String,
    pub attributes: IndexMap<String, String>,
    pub properties: Properties,
}

impl DomNode {
    /// Create a new node with required fields
    pub fn new(node_id: NodeId, node_type: NodeType, node_name: String) -> Self {
        Self {
            node_id,
            node_type,
            node_name,
            node_value: String::new(),
            attributes: IndexMap::new(),
            properties: Properties::new(),
            parent_id: None,
            children_ids: SmallVec::new(),
        }
    }

    /// Element node; `tag` is stored in its canonical uppercase form
    pub fn element(node_id: NodeId, tag: &str) -> Self {
        Self::new(node_id, NodeType::Element, tag.to_ascii_uppercase())
    }

    pub fn text(node_id: NodeId, value: &str) -> Self {
        let mut node = Self::new(node_id, NodeType::Text, "#text".to_string());
        node.node_value = value.to_string();
        node
    }

    pub fn fragment(node_id: NodeId) -> Self {
        Self::new(
            node_id,
            NodeType::DocumentFragment,
            "#document-fragment".to_string(),
        )
    }

    /// Get tag name for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        if self.node_type == NodeType::Element {
            Some(&self.node_name)
        } else {
            None
        }
    }

    /// Check if node is an element
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_fragment(&self) -> bool {
        self.node_type == NodeType::DocumentFragment
    }

    /// Only elements, fragments and documents hold children
    pub fn can_have_children(&self) -> bool {
        matches!(
            self.node_type,
            NodeType::Element | NodeType::DocumentFragment | NodeType::Document
        )
    }

    /// Get attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }
}

/// Elements that never have a closing tag when serialized
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_name_is_uppercased() {
        let node = DomNode::element(0, "section");
        assert_eq!(node.tag_name(), Some("SECTION"));
        assert!(node.is_element());
        assert!(node.can_have_children());
    }

    #[test]
    fn test_text_node_has_no_tag() {
        let node = DomNode::text(3, "hello");
        assert_eq!(node.tag_name(), None);
        assert_eq!(node.node_name, "#text");
        assert_eq!(node.node_value, "hello");
        assert!(!node.can_have_children());
    }
}
