//! Character classes used by the pair index.
//!
//! Every character maps to one of [`ALPHABET_SIZE`] symbols: the 26 ASCII
//! letters (case folded), the word boundary marker and a catch-all class for
//! everything else (digits, apostrophes, non-ASCII letters, ...).

use std::fmt;

/// Number of distinct symbols.
pub const ALPHABET_SIZE: usize = 28;

/// Character prepended and appended to every word.
pub const BOUNDARY: char = '_';

/// Character used to render [`Symbol::OTHER`]; it has no real inverse.
const OTHER_CHAR: char = '?';

/// A character class in `0..ALPHABET_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// The word boundary marker.
    pub const BOUNDARY: Symbol = Symbol(26);

    /// Anything that is neither a letter nor the boundary marker.
    pub const OTHER: Symbol = Symbol(27);

    /// Map a character to its symbol. Total: never fails.
    pub fn of(ch: char) -> Symbol {
        match ch {
            'a'..='z' => Symbol(ch as u8 - b'a'),
            'A'..='Z' => Symbol(ch as u8 - b'A'),
            BOUNDARY => Symbol::BOUNDARY,
            _ => Symbol::OTHER,
        }
    }

    /// Build a symbol from its index, if in range.
    pub fn from_index(index: usize) -> Option<Symbol> {
        if index < ALPHABET_SIZE {
            Some(Symbol(index as u8))
        } else {
            None
        }
    }

    /// Position of this symbol in `0..ALPHABET_SIZE`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Render the symbol for diagnostics.
    ///
    /// Letters render lowercase. [`Symbol::OTHER`] renders as `?` and does
    /// not round-trip.
    pub fn to_char(self) -> char {
        match self {
            Symbol::BOUNDARY => BOUNDARY,
            Symbol::OTHER => OTHER_CHAR,
            Symbol(n) => (b'a' + n) as char,
        }
    }

    /// Iterate over every symbol in index order.
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..ALPHABET_SIZE as u8).map(Symbol)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Remove every whitespace character from `word`.
pub fn strip_whitespace(word: &str) -> String {
    word.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Surround `word` with boundary markers: `cat` becomes `_cat_`.
pub fn wrap(word: &str) -> String {
    let mut wrapped = String::with_capacity(word.len() + 2);
    wrapped.push(BOUNDARY);
    wrapped.push_str(word);
    wrapped.push(BOUNDARY);
    wrapped
}

/// Wrap `word` unless it already starts with a boundary marker.
///
/// Only the first character is inspected, so `_cat` is taken as already
/// wrapped.
pub fn ensure_wrapped(word: &str) -> String {
    if word.starts_with(BOUNDARY) {
        word.to_string()
    } else {
        wrap(word)
    }
}

/// Strip one boundary marker from each end, if present.
pub fn unwrap(word: &str) -> &str {
    let word = word.strip_prefix(BOUNDARY).unwrap_or(word);
    word.strip_suffix(BOUNDARY).unwrap_or(word)
}

/// Adjacent symbol pairs of `word`, in order.
pub fn symbol_pairs(word: &str) -> impl Iterator<Item = (Symbol, Symbol)> + '_ {
    word.chars()
        .zip(word.chars().skip(1))
        .map(|(a, b)| (Symbol::of(a), Symbol::of(b)))
}

/// Length of `word` in characters.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_fold_case() {
        assert_eq!(Symbol::of('a').index(), 0);
        assert_eq!(Symbol::of('z').index(), 25);
        assert_eq!(Symbol::of('Q'), Symbol::of('q'));
    }

    #[test]
    fn test_boundary_and_other() {
        assert_eq!(Symbol::of('_'), Symbol::BOUNDARY);
        assert_eq!(Symbol::of('\''), Symbol::OTHER);
        assert_eq!(Symbol::of('7'), Symbol::OTHER);
        assert_eq!(Symbol::of('é'), Symbol::OTHER);
        assert_eq!(Symbol::BOUNDARY.index(), 26);
        assert_eq!(Symbol::OTHER.index(), 27);
    }

    #[test]
    fn test_to_char() {
        for ch in 'a'..='z' {
            assert_eq!(Symbol::of(ch).to_char(), ch);
        }
        assert_eq!(Symbol::BOUNDARY.to_char(), '_');
        assert_eq!(Symbol::OTHER.to_char(), '?');
        assert_eq!(Symbol::all().count(), ALPHABET_SIZE);
        assert!(Symbol::from_index(ALPHABET_SIZE).is_none());
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(wrap("cat"), "_cat_");
        assert_eq!(wrap(""), "__");
        assert_eq!(ensure_wrapped("cat"), "_cat_");
        assert_eq!(ensure_wrapped("_cat_"), "_cat_");
        // Only the leading marker is checked.
        assert_eq!(ensure_wrapped("_cat"), "_cat");
        assert_eq!(unwrap("_cat_"), "cat");
        assert_eq!(unwrap("cat"), "cat");
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" c a\tt\r\n"), "cat");
        assert_eq!(strip_whitespace("   "), "");
    }

    #[test]
    fn test_symbol_pairs() {
        let pairs: Vec<_> = symbol_pairs("_ab_").collect();
        assert_eq!(
            pairs,
            vec![
                (Symbol::BOUNDARY, Symbol::of('a')),
                (Symbol::of('a'), Symbol::of('b')),
                (Symbol::of('b'), Symbol::BOUNDARY),
            ]
        );
        assert_eq!(symbol_pairs("a").count(), 0);
    }
}
