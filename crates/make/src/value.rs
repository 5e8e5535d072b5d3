//! Loosely-typed arguments of the JSX calling convention
//!
//! A compiled `<a href="/">home</a>` turns into `make("a", {href: "/"}, "home")`:
//! every position is an arbitrary value. `Value` is that value, made explicit.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use dom::NodeId;
use indexmap::IndexMap;

use crate::error::Result;
use crate::maker::Maker;

/// Key that marks a plain mapping as node-shaped
pub const NODE_TYPE_KEY: &str = "nodeType";

/// Plain key-value mapping, iterated in insertion order
pub type Attrs = IndexMap<String, Value>;

/// One positional argument
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No argument at all
    #[default]
    Undefined,
    /// An explicit "nothing"
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Nested sequence; flattened when used as children
    List(Vec<Value>),
    /// Plain mapping
    Object(Attrs),
    /// Map-like container
    Map(HashMap<String, Value>),
    /// A node that already lives in the environment
    Node(NodeId),
    /// A callable used as tag
    Component(Component),
}

impl Value {
    /// Falsy values select the default tag
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => *n == 0.0 || n.is_nan(),
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Object(_) | Value::Map(_) | Value::Node(_) | Value::Component(_) => false,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Plain mapping or map-like container
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Map(_))
    }

    /// Short name of the variant, for logs and errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::Map(_) => "map",
            Value::Node(_) => "node",
            Value::Component(_) => "component",
        }
    }

    /// String coercion used for tag names, attribute values and text nodes
    pub fn to_text(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_text(*n),
            Value::String(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(|item| {
                    if item.is_nullish() {
                        String::new()
                    } else {
                        item.to_text()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) | Value::Map(_) => "[object Object]".to_string(),
            Value::Node(_) => "[object Node]".to_string(),
            Value::Component(c) => format!("[component {}]", c.name()),
        }
    }

    /// Convert parsed JSON; objects become plain mappings
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}

fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // covers -0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form with an explicit sign: 1e+21, 1.5e-7
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        format!("{}", n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// `NodeId` is a `u32`, so `u32` converts to a node reference, not a number
impl From<NodeId> for Value {
    fn from(id: NodeId) -> Self {
        Value::Node(id)
    }
}

impl From<Attrs> for Value {
    fn from(map: Attrs) -> Self {
        Value::Object(map)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl From<Component> for Value {
    fn from(c: Component) -> Self {
        Value::Component(c)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(json)
    }
}

/// Signature of a component: receives the factory and the remaining arguments
pub type ComponentFn = dyn Fn(&mut Maker<'_>, Vec<Value>) -> Result<NodeId>;

/// A named callable passed in tag position
#[derive(Clone)]
pub struct Component {
    name: Rc<str>,
    func: Rc<ComponentFn>,
}

impl Component {
    pub fn new<F>(name: &str, func: F) -> Self
    where
        F: Fn(&mut Maker<'_>, Vec<Value>) -> Result<NodeId> + 'static,
    {
        Self {
            name: Rc::from(name),
            func: Rc::new(func),
        }
    }

    /// The factory itself as a component: `make(maker, tag, ...rest)`
    /// behaves exactly like `make(tag, ...rest)`
    pub fn maker() -> Self {
        Self::new("make", |maker, mut args| {
            if args.is_empty() {
                return maker.make(Value::Undefined, args);
            }
            let tag = args.remove(0);
            maker.make(tag, args)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, maker: &mut Maker<'_>, args: Vec<Value>) -> Result<NodeId> {
        (self.func)(maker, args)
    }
}

/// Components are equal when they share the same callable
impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("name", &self.name).finish()
    }
}

/// Build a `Vec<Value>` from heterogeneous expressions
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}

/// Build an insertion-ordered [`Attrs`] mapping: `attrs! { "id" => "x" }`
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Attrs::new();
        $(map.insert(::std::string::String::from($key), $crate::Value::from($value));)+
        map
    }};
}
