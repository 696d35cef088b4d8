//! Error types for the termvec library.
//!
//! All failures are represented by the [`TermVecError`] enum. Decoding is
//! all-or-nothing: the first error aborts the whole parse call and no partial
//! result is returned.
//!
//! # Examples
//!
//! ```
//! use termvec::error::{TermVecError, Result};
//!
//! fn example_operation() -> Result<i64> {
//!     Err(TermVecError::malformed_numeric("tf", "abc"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for termvec operations.
#[derive(Error, Debug)]
pub enum TermVecError {
    /// A node expected to hold an integer or float has non-numeric text.
    #[error("Malformed numeric value: {0}")]
    MalformedNumericValue(String),

    /// An offset `start` marker has no following sibling to serve as its end.
    #[error("Malformed offset pair: {0}")]
    MalformedOffsetPair(String),

    /// A node that must carry a `name` attribute lacks one.
    #[error("Missing required attribute: {0}")]
    MissingRequiredAttribute(String),

    /// I/O errors while reading a response
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TermVecError.
pub type Result<T> = std::result::Result<T, TermVecError>;

impl TermVecError {
    /// Create a new malformed numeric value error for the node `name`.
    pub fn malformed_numeric<S: AsRef<str>>(name: S, value: &str) -> Self {
        TermVecError::MalformedNumericValue(format!("{} = {value:?}", name.as_ref()))
    }

    /// Create a new malformed offset pair error.
    pub fn malformed_offset<S: Into<String>>(msg: S) -> Self {
        TermVecError::MalformedOffsetPair(msg.into())
    }

    /// Create a new missing attribute error.
    pub fn missing_attribute<S: Into<String>>(msg: S) -> Self {
        TermVecError::MissingRequiredAttribute(msg.into())
    }
}
