//! Argument classification
//!
//! Two questions decide what a call does:
//! - what is the tag: a component, an element to mutate, or a name to create?
//! - is the argument after the tag an attributes value or the first child?

use dom::{NodeId, NodeType};

use crate::env::Environment;
use crate::error::Result;
use crate::value::{Component, Value, NODE_TYPE_KEY};

/// Role of the argument right after the tag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument<'a> {
    Attributes(&'a Value),
    Child(&'a Value),
}

/// What the tag argument selects
#[derive(Debug, Clone, PartialEq)]
pub enum Tag<'a> {
    /// Delegate the whole call
    Component(&'a Component),
    /// Mutate this element instead of creating one
    Existing(NodeId),
    /// Create an element with this name
    Name(String),
}

/// Whether `value` is applied as attributes rather than appended as a child
///
/// `Null` means "no attributes" explicitly, while `Undefined` (nothing was
/// passed) falls through to the children. A plain mapping carrying the
/// `nodeType` marker is node-shaped, so it is a child.
pub fn is_attributes(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Undefined => false,
        Value::Object(map) => !map.contains_key(NODE_TYPE_KEY),
        Value::Map(_) => true,
        Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::List(_)
        | Value::Node(_)
        | Value::Component(_) => false,
    }
}

pub fn classify_argument(value: &Value) -> Argument<'_> {
    if is_attributes(value) {
        Argument::Attributes(value)
    } else {
        Argument::Child(value)
    }
}

/// Resolve the tag argument
///
/// Order matters: callables win, then falsy values fall back to
/// `default_tag`, then element nodes are reused, and anything else is
/// string-coerced (an empty result also falls back to `default_tag`).
pub fn classify_tag<'a>(
    env: &dyn Environment,
    tag: &'a Value,
    default_tag: &str,
) -> Result<Tag<'a>> {
    if let Value::Component(component) = tag {
        return Ok(Tag::Component(component));
    }

    if tag.is_falsy() {
        return Ok(Tag::Name(default_tag.to_string()));
    }

    if let Value::Node(id) = tag {
        if env.node_type(*id)? == NodeType::Element {
            return Ok(Tag::Existing(*id));
        }
    }

    let name = tag.to_text();
    if name.is_empty() {
        Ok(Tag::Name(default_tag.to_string()))
    } else {
        Ok(Tag::Name(name))
    }
}
