//! Maker - the element factory
//!
//! `make(tag, ...rest)` is the runtime target of a JSX transform and a
//! shorthand for building trees by hand:
//! - a component in tag position receives the rest of the call
//! - a falsy tag means `div`
//! - an element in tag position is mutated instead of a new one created
//! - the first rest argument is attributes when it is shaped like them
//! - everything else is flattened into children

use dom::NodeId;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::children;
use crate::classify::{classify_argument, classify_tag, Argument, Tag};
use crate::env::Environment;
use crate::error::{MakeError, Result};
use crate::props;
use crate::value::{Attrs, Value};

/// What to do with a map-like container in attributes position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributesPolicy {
    /// Accept it as attributes but apply nothing
    #[default]
    Skip,
    /// Apply its entries like a plain mapping
    Apply,
    /// Fail with `UnsupportedAttributesType`
    Reject,
}

/// Factory configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakerConfig {
    /// Tag used for falsy or empty tags
    pub default_tag: String,
    /// Attribute key whose value is deep-merged into the property bag
    pub property_key: String,
    pub attributes_policy: AttributesPolicy,
}

impl Default for MakerConfig {
    fn default() -> Self {
        Self {
            default_tag: "div".to_string(),
            property_key: "$".to_string(),
            attributes_policy: AttributesPolicy::Skip,
        }
    }
}

impl MakerConfig {
    /// Load from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Element factory bound to one environment
pub struct Maker<'env> {
    env: &'env mut dyn Environment,
    config: MakerConfig,
}

impl<'env> Maker<'env> {
    /// Create a factory with default config
    pub fn new(env: &'env mut dyn Environment) -> Self {
        Self::with_config(env, MakerConfig::default())
    }

    /// Create a factory with custom config
    pub fn with_config(env: &'env mut dyn Environment, config: MakerConfig) -> Self {
        Self { env, config }
    }

    pub fn config(&self) -> &MakerConfig {
        &self.config
    }

    pub fn env(&self) -> &dyn Environment {
        &*self.env
    }

    pub fn env_mut(&mut self) -> &mut dyn Environment {
        &mut *self.env
    }

    /// Build or mutate an element from a JSX-style argument list
    ///
    /// Returns whatever a component returns when `tag` is one. Otherwise the
    /// returned node is either `tag` itself (an existing element) or a newly
    /// created element. Errors from the environment, such as an invalid tag
    /// name, propagate unchanged. Nothing is rolled back: children attached
    /// before a failure stay attached.
    pub fn make(&mut self, tag: Value, mut rest: Vec<Value>) -> Result<NodeId> {
        let element = match classify_tag(&*self.env, &tag, &self.config.default_tag)? {
            Tag::Component(component) => {
                let component = component.clone();
                debug!(component = component.name(), args = rest.len(), "delegating to component");
                return component.call(self, rest);
            }
            Tag::Existing(id) => {
                trace!(node = id, "mutating existing element");
                id
            }
            Tag::Name(name) => self.create_element(&name)?,
        };

        if let Some(first) = rest.first_mut() {
            let is_attributes = matches!(classify_argument(first), Argument::Attributes(_));
            if is_attributes {
                // leave a skippable hole so it is never read as a child
                let attrs = std::mem::take(first);
                trace!(kind = attrs.kind(), "first argument is attributes");
                self.apply_attributes(element, &attrs)?;
            }
        }

        children::attach_all(&mut *self.env, element, &rest)
    }

    /// Hand-written API: attributes are explicit, so every child is a child
    pub fn element(
        &mut self,
        tag: &str,
        attrs: Option<&Attrs>,
        children: Vec<Value>,
    ) -> Result<NodeId> {
        let tag = if tag.is_empty() {
            self.config.default_tag.clone()
        } else {
            tag.to_string()
        };
        let element = self.create_element(&tag)?;

        if let Some(attrs) = attrs {
            self.apply_entries(element, attrs.iter())?;
        }

        children::attach_all(&mut *self.env, element, &children)
    }

    /// Create a fragment holding `children`
    ///
    /// Appending the fragment to an element moves the children over.
    pub fn fragment(&mut self, children: Vec<Value>) -> Result<NodeId> {
        let fragment = self.env.create_fragment()?;
        children::attach_all(&mut *self.env, fragment, &children)
    }

    /// Apply an attributes-classified value to `element`
    ///
    /// `Null` and `Undefined` apply nothing. A map-like container follows
    /// [`AttributesPolicy`]; so does any other non-mapping value.
    pub fn apply_attributes(&mut self, element: NodeId, attrs: &Value) -> Result<()> {
        match attrs {
            Value::Null | Value::Undefined => Ok(()),
            Value::Object(map) => self.apply_entries(element, map.iter()),
            Value::Map(map) => match self.config.attributes_policy {
                AttributesPolicy::Skip => {
                    debug!(entries = map.len(), "skipping map-like attributes");
                    Ok(())
                }
                AttributesPolicy::Apply => self.apply_entries(element, map.iter()),
                AttributesPolicy::Reject => Err(MakeError::UnsupportedAttributesType(attrs.kind())),
            },
            other => match self.config.attributes_policy {
                AttributesPolicy::Reject => Err(MakeError::UnsupportedAttributesType(other.kind())),
                AttributesPolicy::Skip | AttributesPolicy::Apply => {
                    debug!(kind = other.kind(), "ignoring non-mapping attributes");
                    Ok(())
                }
            },
        }
    }

    fn apply_entries<'a, I>(&mut self, element: NodeId, entries: I) -> Result<()>
    where
        I: Iterator<Item = (&'a String, &'a Value)>,
    {
        for (name, value) in entries {
            if *name == self.config.property_key {
                props::merge_properties(self.env.properties_mut(element)?, value)?;
            } else if value.is_nullish() {
                self.env.remove_attribute(element, name)?;
            } else {
                self.env.set_attribute(element, name, &value.to_text())?;
            }
        }
        Ok(())
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        let element = self.env.create_element(tag).inspect_err(|err| {
            warn!(tag, error = %err, "environment rejected tag");
        })?;
        trace!(tag, node = element, "created element");
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args, attrs};
    use dom::{Document, DomError, DomSerializer};
    use serde_json::json;
    use std::collections::HashMap;

    fn html(doc: &Document, id: NodeId) -> String {
        DomSerializer::new().outer_html(doc.arena(), id).unwrap()
    }

    #[test]
    fn test_make_simple_element() {
        let mut doc = Document::new();
        let mut h = Maker::new(&mut doc);

        let a = h
            .make("a".into(), args![attrs! { "href" => "/", "id" => "x" }, "home"])
            .unwrap();

        assert_eq!(html(&doc, a), r#"<a href="/" id="x">home</a>"#);
    }

    #[test]
    fn test_first_child_is_not_attributes() {
        let mut doc = Document::new();
        let mut h = Maker::new(&mut doc);

        let p = h.make("p".into(), args!["one", attrs! { "id" => "x" }]).unwrap();

        assert_eq!(html(&doc, p), "<p>one[object Object]</p>");
    }

    #[test]
    fn test_null_attributes_are_skipped() {
        let mut doc = Document::new();
        let mut h = Maker::new(&mut doc);

        let p = h.make("p".into(), args![Value::Null, "text"]).unwrap();

        assert_eq!(html(&doc, p), "<p>text</p>");
    }

    #[test]
    fn test_attribute_values_are_stringified() {
        let mut doc = Document::new();
        let mut h = Maker::new(&mut doc);

        let input = h
            .make(
                "input".into(),
                args![attrs! { "tabindex" => 2, "checked" => true, "step" => 0.5 }],
            )
            .unwrap();

        assert_eq!(
            html(&doc, input),
            r#"<input tabindex="2" checked="true" step="0.5">"#
        );
    }

    #[test]
    fn test_property_key_bypasses_attributes() {
        let mut doc = Document::new();
        let mut h = Maker::new(&mut doc);

        let div = h
            .make(
                "div".into(),
                args![attrs! { "$" => attrs! { "style" => attrs! { "color" => "grey" } } }],
            )
            .unwrap();

        assert!(doc.node(div).unwrap().attributes.is_empty());
        assert_eq!(doc.properties(div).unwrap()["style"], json!({"color": "grey"}));
    }

    #[test]
    fn test_custom_property_key() {
        let mut doc = Document::new();
        let config = MakerConfig {
            property_key: "props".to_string(),
            ..MakerConfig::default()
        };
        let mut h = Maker::with_config(&mut doc, config);

        let div = h
            .make(
                "div".into(),
                args![attrs! { "props" => attrs! { "value" => 3 }, "title" => "t" }],
            )
            .unwrap();

        let props = doc.properties(div).unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props["value"], json!(3));
        assert_eq!(doc.attribute(div, "title").unwrap(), Some("t"));
        assert_eq!(doc.attribute(div, "props").unwrap(), None);
    }

    #[test]
    fn test_map_attributes_policy() {
        let mut map = HashMap::new();
        map.insert("id".to_string(), Value::from("m"));
        let map = Value::Map(map);

        let mut doc = Document::new();
        let skipped = Maker::new(&mut doc)
            .make("div".into(), vec![map.clone(), "child".into()])
            .unwrap();
        assert_eq!(html(&doc, skipped), "<div>child</div>");

        let apply = MakerConfig {
            attributes_policy: AttributesPolicy::Apply,
            ..MakerConfig::default()
        };
        let applied = Maker::with_config(&mut doc, apply)
            .make("div".into(), vec![map.clone()])
            .unwrap();
        assert_eq!(html(&doc, applied), r#"<div id="m"></div>"#);

        let reject = MakerConfig {
            attributes_policy: AttributesPolicy::Reject,
            ..MakerConfig::default()
        };
        let err = Maker::with_config(&mut doc, reject)
            .make("div".into(), vec![map])
            .unwrap_err();
        assert!(matches!(err, MakeError::UnsupportedAttributesType("map")));
    }

    #[test]
    fn test_element_api_never_classifies() {
        let mut doc = Document::new();
        let mut h = Maker::new(&mut doc);

        let attrs = attrs! { "class" => "list" };
        let ul = h
            .element("ul", Some(&attrs), args![Value::Null, "a", vec!["b", "c"]])
            .unwrap();
        let div = h.element("", None, args![]).unwrap();

        assert_eq!(html(&doc, ul), r#"<ul class="list">abc</ul>"#);
        assert_eq!(html(&doc, div), "<div></div>");
    }

    #[test]
    fn test_fragment_children_move_on_append() {
        let mut doc = Document::new();
        let mut h = Maker::new(&mut doc);

        let li1 = h.make("li".into(), args!["1"]).unwrap();
        let li2 = h.make("li".into(), args!["2"]).unwrap();
        let frag = h.fragment(args![li1, li2]).unwrap();
        let ol = h.make("ol".into(), args![Value::Null, frag]).unwrap();

        assert_eq!(html(&doc, ol), "<ol><li>1</li><li>2</li></ol>");
        assert!(doc.children(frag).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_tag_propagates() {
        let mut doc = Document::new();
        let mut h = Maker::new(&mut doc);

        let err = h.make("not a tag".into(), args![]).unwrap_err();

        assert!(err.is_invalid_tag());
        assert!(matches!(
            err,
            MakeError::Dom(DomError::InvalidTagName(ref name)) if name == "not a tag"
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config =
            MakerConfig::from_json(r#"{"default_tag": "span", "attributes_policy": "reject"}"#)
                .unwrap();

        assert_eq!(config.default_tag, "span");
        assert_eq!(config.property_key, "$");
        assert_eq!(config.attributes_policy, AttributesPolicy::Reject);
        assert!(matches!(
            MakerConfig::from_json("{"),
            Err(MakeError::Config(_))
        ));
    }

    #[test]
    fn test_default_tag_from_config() {
        let mut doc = Document::new();
        let config = MakerConfig {
            default_tag: "span".to_string(),
            ..MakerConfig::default()
        };
        let span = Maker::with_config(&mut doc, config)
            .make(Value::Null, args![])
            .unwrap();

        assert_eq!(doc.tag_name(span).unwrap(), Some("SPAN"));
    }
}
