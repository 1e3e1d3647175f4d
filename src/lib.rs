//! # Neurospell
//!
//! A spelling corrector built on an associative index from adjacent
//! character pairs to the dictionary words containing them.
//!
//! ## Features
//!
//! - Case-insensitive 28-symbol alphabet with word boundary markers
//! - Pair index built once per dictionary
//! - Ranked corrections with optional strict length matching
//! - Lock-free concurrent querying through caller-owned scratch buffers
//!
//! ```
//! use neurospell::spelling::{Dictionary, SpellingCorrector};
//!
//! let corrector = SpellingCorrector::new(Dictionary::from_words(["apple", "ape"]));
//! let correction = corrector.correct("ap");
//! assert_eq!(correction.suggestions[0].display_word(), "ape");
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{NeurospellError, Result};
    pub use crate::spelling::{
        Correction, CorrectorConfig, Dictionary, DictionaryBuilder, QueryScratch,
        SpellingCorrector, Suggestion,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
