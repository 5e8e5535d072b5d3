//! Child normalization
//!
//! Children arrive as arbitrarily nested lists of loose values. They are
//! flattened depth-first, in order, and everything that isn't already a node
//! becomes a text node before it is appended.

use dom::NodeId;

use crate::env::Environment;
use crate::error::{MakeError, Result};
use crate::value::{Value, NODE_TYPE_KEY};

/// Append `item` to `element`, returning `element`
///
/// Rules, in order:
/// 1. `Undefined` / `Null` are skipped
/// 2. lists recurse over their entries
/// 3. nodes are appended as-is
/// 4. anything else becomes a text node
///
/// A plain mapping with a `nodeType` key looks like a node but has no handle
/// in the environment; appending it fails with [`MakeError::NotANode`].
pub fn attach(env: &mut dyn Environment, element: NodeId, item: &Value) -> Result<NodeId> {
    match item {
        Value::Undefined | Value::Null => Ok(element),
        Value::List(items) => items
            .iter()
            .try_fold(element, |element, item| attach(env, element, item)),
        Value::Node(node) => {
            env.append_child(element, *node)?;
            Ok(element)
        }
        Value::Object(map) if map.contains_key(NODE_TYPE_KEY) => Err(MakeError::NotANode),
        other => {
            let text = env.create_text_node(&other.to_text())?;
            env.append_child(element, text)?;
            Ok(element)
        }
    }
}

/// Append every entry of `children` in order
pub fn attach_all(
    env: &mut dyn Environment,
    element: NodeId,
    children: &[Value],
) -> Result<NodeId> {
    children
        .iter()
        .try_fold(element, |element, item| attach(env, element, item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use dom::{Document, DomSerializer};

    fn html(doc: &Document, id: NodeId) -> String {
        DomSerializer::new().outer_html(doc.arena(), id).unwrap()
    }

    #[test]
    fn test_skips_nullish() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();

        attach(&mut doc, div, &Value::Null).unwrap();
        attach(&mut doc, div, &Value::Undefined).unwrap();

        assert!(doc.children(div).unwrap().is_empty());
    }

    #[test]
    fn test_scalars_become_text() {
        let mut doc = Document::new();
        let p = doc.create_element("p").unwrap();

        let items = [Value::from("a"), Value::from(1), Value::from(2.5), Value::from(false)];
        attach_all(&mut doc, p, &items).unwrap();

        assert_eq!(doc.children(p).unwrap().len(), 4);
        assert_eq!(doc.text_content(p).unwrap(), "a12.5false");
    }

    #[test]
    fn test_flattens_nested_lists_in_order() {
        let mut doc = Document::new();
        let ul = doc.create_element("ul").unwrap();
        let li: Vec<NodeId> = (0..3).map(|_| doc.create_element("li").unwrap()).collect();

        let nested = Value::List(vec![
            Value::Node(li[0]),
            Value::List(vec![Value::Null, Value::List(vec![Value::Node(li[1])])]),
            Value::List(vec![]),
            Value::Node(li[2]),
        ]);
        assert_eq!(attach(&mut doc, ul, &nested).unwrap(), ul);

        assert_eq!(doc.children(ul).unwrap(), li.as_slice());
    }

    #[test]
    fn test_unmarked_object_child_is_text() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();

        attach(&mut doc, div, &Value::Object(attrs! { "a" => 1 })).unwrap();

        assert_eq!(html(&doc, div), "<div>[object Object]</div>");
    }

    #[test]
    fn test_marked_object_child_is_rejected() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();
        let first = Value::from("kept");

        attach(&mut doc, div, &first).unwrap();
        let err = attach(&mut doc, div, &Value::Object(attrs! { "nodeType" => 1 })).unwrap_err();

        assert!(matches!(err, MakeError::NotANode));
        // no rollback: earlier children stay
        assert_eq!(doc.text_content(div).unwrap(), "kept");
    }
}
