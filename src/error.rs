//! Error types for binding generation.

use thiserror::Error;

/// Result alias for binding generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Error during binding generation.
///
/// An unsupported type is fatal: generating a guessed or approximate mapping
/// would produce bindings that corrupt memory at call time, so the whole run
/// aborts instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported C type: {detail}")]
    UnsupportedType { detail: String },
}

impl Error {
    /// An unsupported-type error with a description of the offending shape.
    pub fn unsupported(detail: impl Into<String>) -> Self {
        Error::UnsupportedType {
            detail: detail.into(),
        }
    }
}
