//! Error types for element construction

use dom::DomError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MakeError>;

#[derive(Debug, Error)]
pub enum MakeError {
    /// Raised by the environment, passed through untouched
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("Unsupported attributes type: {0}")]
    UnsupportedAttributesType(&'static str),

    #[error("Node-shaped object is not a node in this environment")]
    NotANode,

    #[error("Unsupported property value at {path}")]
    UnsupportedPropertyValue { path: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Component {name} failed: {message}")]
    Component { name: String, message: String },
}

impl MakeError {
    /// The environment refused the tag name
    pub fn is_invalid_tag(&self) -> bool {
        matches!(self, MakeError::Dom(DomError::InvalidTagName(_)))
    }
}
