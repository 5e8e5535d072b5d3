//! DOM Serializer - Convert a subtree to HTML text
//!
//! Used for snapshots in tests and for debug output. Attributes come out in
//! insertion order; properties are never serialized.

use ahash::AHashSet;

use crate::arena::DomArena;
use crate::error::Result;
use crate::types::*;
use crate::utils::{escape_attribute, escape_text};

/// Serializer configuration
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    /// Lowercase tag names written without a closing tag
    pub void_elements: AHashSet<String>,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            void_elements: VOID_ELEMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// DOM Tree Serializer
pub struct DomSerializer {
    config: SerializerConfig,
}

impl DomSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Serialize a node including its own tag
    pub fn outer_html(&self, arena: &DomArena, node_id: NodeId) -> Result<String> {
        let mut output = String::with_capacity(256);
        self.serialize_node(arena, node_id, &mut output)?;
        Ok(output)
    }

    /// Serialize only the children of a node
    pub fn inner_html(&self, arena: &DomArena, node_id: NodeId) -> Result<String> {
        let mut output = String::with_capacity(256);
        for &child_id in &arena.get(node_id)?.children_ids {
            self.serialize_node(arena, child_id, &mut output)?;
        }
        Ok(output)
    }

    /// Serialize a single node recursively
    fn serialize_node(&self, arena: &DomArena, node_id: NodeId, output: &mut String) -> Result<()> {
        let node = arena.get(node_id)?;

        match node.node_type {
            NodeType::Element => {
                let tag = node.node_name.to_ascii_lowercase();

                // Format: <tag id="123" class="foo">
                output.push('<');
                output.push_str(&tag);
                for (name, value) in &node.attributes {
                    output.push(' ');
                    output.push_str(name);
                    output.push_str("=\"");
                    output.push_str(&escape_attribute(value));
                    output.push('"');
                }
                output.push('>');

                if self.config.void_elements.contains(&tag) {
                    return Ok(());
                }

                for &child_id in &node.children_ids {
                    self.serialize_node(arena, child_id, output)?;
                }

                output.push_str("</");
                output.push_str(&tag);
                output.push('>');
            }
            NodeType::Text => {
                output.push_str(&escape_text(&node.node_value));
            }
            NodeType::DocumentFragment | NodeType::Document => {
                for &child_id in &node.children_ids {
                    self.serialize_node(arena, child_id, output)?;
                }
            }
            _ => {
                // Other node kinds are never created by a Document
            }
        }

        Ok(())
    }
}

impl Default for DomSerializer {
    fn default() -> Self {
        Self::new()
    }
}
