//! Error types for document loading and writing.

use thiserror::Error;

/// Errors that can occur while reading or writing scientist documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// XML parsing or serialization error.
    #[error("XML error at position {position}: {message}")]
    Xml { message: String, position: u64 },

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required element.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// Structurally invalid document.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },
}

impl DocumentError {
    /// Create an XML error at a byte position in the input.
    pub fn xml(message: impl Into<String>, position: u64) -> Self {
        Self::Xml {
            message: message.into(),
            position,
        }
    }

    /// Create a serialization error, which has no input position.
    pub fn write(message: impl Into<String>) -> Self {
        Self::xml(format!("Write error: {}", message.into()), 0)
    }

    /// Create a missing element error.
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "element",
            name: name.into(),
        }
    }

    /// Create an invalid element error.
    pub fn invalid_element(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "element",
            message: message.into(),
        }
    }
}
