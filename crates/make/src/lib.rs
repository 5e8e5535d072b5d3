//! Element factory
//!
//! Builds or mutates document nodes from a terse call: a tag, an optional
//! attributes value, and any number of (possibly nested) children. It is the
//! runtime target of a JSX-like transform and a hand-written shorthand.
//!
//! ## Core Design
//!
//! ```text
//! make(tag, rest..)
//!   ├─ classify_tag      → Component | Existing(NodeId) | Name
//!   ├─ classify_argument → Attributes | Child   (first of rest)
//!   │     └─ "$" key     → props::merge_properties
//!   └─ children::attach  → flatten, skip nullish, text-ify scalars
//!            ↓
//!      Environment (dom::Document, or any test double)
//! ```
//!
//! ```ignore
//! let mut doc = Document::new();
//! let mut h = Maker::new(&mut doc);
//! let link = h.make("a".into(), args![attrs! { "href" => "/" }, "home"])?;
//! ```

pub mod children;
pub mod classify;
pub mod env;
pub mod error;
pub mod maker;
pub mod props;
pub mod value;

pub use classify::{classify_argument, classify_tag, is_attributes, Argument, Tag};
pub use env::Environment;
pub use error::{MakeError, Result};
pub use maker::{AttributesPolicy, Maker, MakerConfig};
pub use value::{Attrs, Component, ComponentFn, Value, NODE_TYPE_KEY};
