//! Arena-backed document model
//!
//! The node environment the element factory builds into: it creates
//! elements, text nodes and fragments, owns their attributes and
//! properties, and mutates the tree with DOM semantics.
//!
//! ## Core Design
//!
//! ```text
//! Document ─ create_element / create_text_node / create_fragment
//!    │
//!    └─ DomArena: Vec<DomNode> ─ NodeId (u32) ─ DomSerializer → HTML
//! ```

pub mod arena;
pub mod document;
pub mod error;
pub mod serializer;
pub mod types;
pub mod utils;

pub use arena::DomArena;
pub use document::{Document, DocumentConfig};
pub use error::{DomError, Result};
pub use serializer::DomSerializer;
pub use types::*;
