//! Document - Main entry point for DOM operations
//!
//! A `Document` is the node factory and the only place nodes are mutated:
//! - Node creation (elements, text, fragments)
//! - Tag and attribute name validation
//! - Attribute and property access
//! - Tree mutation with DOM `appendChild` semantics

use crate::arena::DomArena;
use crate::error::{DomError, Result};
use crate::types::*;
use crate::utils;

/// Configuration for a document
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    /// Node slots reserved up front
    pub initial_capacity: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 256,
        }
    }
}

/// Arena-backed document
#[derive(Debug)]
pub struct Document {
    config: DocumentConfig,
    arena: DomArena,
}

impl Document {
    /// Create new document with default config
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    /// Create document with custom config
    pub fn with_config(config: DocumentConfig) -> Self {
        let arena = DomArena::with_capacity(config.initial_capacity);
        Self { config, arena }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Get reference to internal arena
    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Result<&DomNode> {
        self.arena.get(node_id)
    }

    /// Create an element; `tag` must satisfy the XML `Name` production
    pub fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        if !utils::is_valid_name(tag) {
            return Err(DomError::InvalidTagName(tag.to_string()));
        }
        Ok(self.arena.add_node(DomNode::element(0, tag)))
    }

    pub fn create_text_node(&mut self, text: &str) -> Result<NodeId> {
        Ok(self.arena.add_node(DomNode::text(0, text)))
    }

    /// Create an empty document fragment (node type 11)
    pub fn create_fragment(&mut self) -> Result<NodeId> {
        Ok(self.arena.add_node(DomNode::fragment(0)))
    }

    pub fn node_type(&self, node_id: NodeId) -> Result<NodeType> {
        Ok(self.arena.get(node_id)?.node_type)
    }

    /// Uppercase tag name, `None` for non-element nodes
    pub fn tag_name(&self, node_id: NodeId) -> Result<Option<&str>> {
        Ok(self.arena.get(node_id)?.tag_name())
    }

    pub fn attribute(&self, node_id: NodeId, name: &str) -> Result<Option<&str>> {
        Ok(self.arena.get(node_id)?.attr(name))
    }

    /// Set an attribute; re-setting an existing name keeps its position
    pub fn set_attribute(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        if !utils::is_valid_name(name) {
            return Err(DomError::InvalidAttributeName(name.to_string()));
        }
        let node = self.element_mut(node_id)?;
        node.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Remove an attribute; removing a missing attribute is a no-op
    pub fn remove_attribute(&mut self, node_id: NodeId, name: &str) -> Result<()> {
        let node = self.element_mut(node_id)?;
        node.attributes.shift_remove(name);
        Ok(())
    }

    pub fn properties(&self, node_id: NodeId) -> Result<&Properties> {
        Ok(&self.arena.get(node_id)?.properties)
    }

    pub fn properties_mut(&mut self, node_id: NodeId) -> Result<&mut Properties> {
        Ok(&mut self.arena.get_mut(node_id)?.properties)
    }

    /// Append `child` to `parent`, returning `child`
    ///
    /// The child is detached from its previous parent first. Appending a
    /// fragment moves the fragment's children instead, leaving it empty.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId> {
        if !self.arena.get(parent)?.can_have_children() {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        let child_node = self.arena.get(child)?;
        if child_node.node_type == NodeType::Document
            || self.arena.is_inclusive_ancestor(child, parent)?
        {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        if child_node.is_fragment() {
            let moved = std::mem::take(&mut self.arena.get_mut(child)?.children_ids);
            for id in moved {
                self.arena.get_mut(id)?.parent_id = Some(parent);
                self.arena.get_mut(parent)?.children_ids.push(id);
            }
            return Ok(child);
        }

        self.detach(child)?;
        self.arena.get_mut(child)?.parent_id = Some(parent);
        self.arena.get_mut(parent)?.children_ids.push(child);
        Ok(child)
    }

    /// Remove a node from its parent's child list (no-op if it has none)
    pub fn detach(&mut self, node_id: NodeId) -> Result<()> {
        let Some(parent) = self.arena.get(node_id)?.parent_id else {
            return Ok(());
        };
        self.arena
            .get_mut(parent)?
            .children_ids
            .retain(|id| *id != node_id);
        self.arena.get_mut(node_id)?.parent_id = None;
        Ok(())
    }

    pub fn children(&self, node_id: NodeId) -> Result<&[NodeId]> {
        Ok(self.arena.get(node_id)?.children_ids.as_slice())
    }

    pub fn parent(&self, node_id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.arena.get(node_id)?.parent_id)
    }

    /// Concatenated text of the node and its descendants
    pub fn text_content(&self, node_id: NodeId) -> Result<String> {
        utils::get_text_content(&self.arena, node_id)
    }

    fn element_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        let node = self.arena.get_mut(node_id)?;
        if node.node_type != NodeType::Element {
            return Err(DomError::InvalidNodeType {
                expected: "Element".to_string(),
                actual: format!("{:?}", node.node_type),
            });
        }
        Ok(node)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
