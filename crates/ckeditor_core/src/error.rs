//! Error types for option access, value construction, and binding.
use thiserror::Error;

/// Top-level error type for the editor binding layer.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("The CKEditor behavior needs a textarea, found <{found}>")]
    UnsupportedElement { found: String },

    #[error("Option '{name}' holds {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid option value: {0}")]
    InvalidValue(String),

    #[error("Unknown HTML tag: {0}")]
    UnknownTag(String),

    #[error("Unknown editor command: {0}")]
    UnknownCommand(String),

    #[error("Behavior is not bound to a component")]
    Unbound,

    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EditorError>;
