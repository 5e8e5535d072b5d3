//! Arena-based node storage
//!
//! Every node a [`Document`](crate::Document) creates lives here, in
//! creation order. Links between nodes are `NodeId` slots, never pointers,
//! and nodes are never freed: a detached node just has no parent.

use crate::error::{DomError, Result};
use crate::types::{DomNode, NodeId};

#[derive(Debug)]
pub struct DomArena {
    nodes: Vec<DomNode>,
}

impl DomArena {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Store `node` in the next slot; its `node_id` is overwritten with that slot
    pub fn add_node(&mut self, mut node: DomNode) -> NodeId {
        let slot = self.nodes.len() as NodeId;
        node.node_id = slot;
        self.nodes.push(node);
        slot
    }

    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when `ancestor` is `node_id` itself or sits on its parent chain
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node_id: NodeId) -> Result<bool> {
        let mut cursor = Some(node_id);
        while let Some(id) = cursor {
            if id == ancestor {
                return Ok(true);
            }
            cursor = self.get(id)?.parent_id;
        }
        Ok(false)
    }

    /// Visit `root` and its descendants in document order, without recursion
    pub fn traverse_df<F>(&self, root: NodeId, mut visit: F) -> Result<()>
    where
        F: FnMut(&DomNode) -> Result<()>,
    {
        let mut pending = vec![root];

        while let Some(id) = pending.pop() {
            let node = self.get(id)?;
            visit(node)?;
            // reversed so the first child is popped first
            pending.extend(node.children_ids.iter().rev().copied());
        }

        Ok(())
    }

    /// Every node id matching `predicate`, in creation order
    pub fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&DomNode) -> bool,
    {
        self.nodes
            .iter()
            .filter(|node| predicate(node))
            .map(|node| node.node_id)
            .collect()
    }

    pub fn find_one<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&DomNode) -> bool,
    {
        self.nodes
            .iter()
            .find(|node| predicate(node))
            .map(|node| node.node_id)
    }

    /// Elements whose tag matches `tag`, ignoring ASCII case
    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.find(|node| node.is_element() && node.node_name.eq_ignore_ascii_case(tag))
    }

    /// First element whose `id` attribute equals `id`
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_one(|node| node.is_element() && node.attr("id") == Some(id))
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_assigns_slot() {
        let mut arena = DomArena::new();

        let id = arena.add_node(DomNode::element(42, "div"));
        assert_eq!(id, 0);
        assert_eq!(arena.len(), 1);

        let node = arena.get(id).unwrap();
        assert_eq!(node.node_name, "DIV");
        assert_eq!(node.node_id, 0);
        assert!(matches!(arena.get(7), Err(DomError::NodeNotFound(7))));
    }

    #[test]
    fn test_traverse_df_is_document_order() {
        let mut arena = DomArena::new();

        // div -> [span -> [b], "hi"]
        let b = arena.add_node(DomNode::element(0, "b"));
        let mut span = DomNode::element(0, "span");
        span.children_ids.push(b);
        let span = arena.add_node(span);
        let text = arena.add_node(DomNode::text(0, "hi"));
        let mut div = DomNode::element(0, "div");
        div.children_ids.extend([span, text]);
        let div = arena.add_node(div);

        let mut visited = Vec::new();
        arena
            .traverse_df(div, |node| {
                visited.push(node.node_name.clone());
                Ok(())
            })
            .unwrap();

        assert_eq!(visited, vec!["DIV", "SPAN", "B", "#text"]);
    }

    #[test]
    fn test_find_by_tag_ignores_case() {
        let mut arena = DomArena::new();
        arena.add_node(DomNode::element(0, "li"));
        arena.add_node(DomNode::text(0, "li"));
        arena.add_node(DomNode::element(0, "LI"));

        assert_eq!(arena.find_by_tag("li"), vec![0, 2]);
    }

    #[test]
    fn test_find_by_id_skips_text() {
        let mut arena = DomArena::new();
        arena.add_node(DomNode::text(0, "x"));
        let mut el = DomNode::element(0, "p");
        el.attributes.insert("id".to_string(), "x".to_string());
        let el = arena.add_node(el);

        assert_eq!(arena.find_by_id("x"), Some(el));
        assert_eq!(arena.find_by_id("y"), None);
    }

    #[test]
    fn test_inclusive_ancestor() {
        let mut arena = DomArena::new();
        let parent = arena.add_node(DomNode::element(0, "ul"));
        let mut child = DomNode::element(0, "li");
        child.parent_id = Some(parent);
        let child = arena.add_node(child);

        assert!(arena.is_inclusive_ancestor(parent, child).unwrap());
        assert!(arena.is_inclusive_ancestor(child, child).unwrap());
        assert!(!arena.is_inclusive_ancestor(child, parent).unwrap());
    }
}
