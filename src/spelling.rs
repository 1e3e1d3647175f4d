//! Spelling correction over an associative character-pair index.
//!
//! Words are indexed by the adjacent character pairs they contain. A query
//! is scored against every word sharing at least one pair with it, and the
//! best scoring words are returned as suggestions.

pub mod alphabet;
pub mod corrector;
pub mod dictionary;
pub mod pair_index;
pub mod scratch;

pub use corrector::*;
pub use dictionary::*;
pub use pair_index::*;
pub use scratch::*;
