//! Error types for the Neurospell library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`NeurospellError`] enum.
//!
//! # Examples
//!
//! ```
//! use neurospell::error::{NeurospellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NeurospellError::invalid_pair("a"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Neurospell operations.
#[derive(Error, Debug)]
pub enum NeurospellError {
    /// I/O errors outside of dictionary loading.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The dictionary source could not be opened or read.
    #[error("Dictionary source error ({}): {source}", path.display())]
    DictionarySource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Pair lookup input with fewer than two characters.
    #[error("Invalid pair: '{0}'")]
    InvalidPair(String),

    /// Invalid corrector configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with NeurospellError.
pub type Result<T> = std::result::Result<T, NeurospellError>;

impl NeurospellError {
    /// Create a new dictionary source error.
    pub fn dictionary_source<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        NeurospellError::DictionarySource {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid pair error.
    pub fn invalid_pair<S: Into<String>>(input: S) -> Self {
        NeurospellError::InvalidPair(input.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        NeurospellError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NeurospellError::Other(msg.into())
    }
}
