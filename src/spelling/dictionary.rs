//! Dictionary management for spelling correction.
//!
//! A [`Dictionary`] holds the sorted, boundary-wrapped known words together
//! with the [`PairIndex`] built from them. It is only obtainable through
//! [`DictionaryBuilder::build`], which sorts the words after every insertion,
//! so binary search over it is always valid.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::error::{NeurospellError, Result};
use crate::spelling::alphabet::{self, ensure_wrapped, strip_whitespace, wrap};
use crate::spelling::pair_index::PairIndex;

/// Words between two build progress messages.
const PROGRESS_INTERVAL: usize = 1000;

/// Accumulates raw words, then produces a sorted [`Dictionary`].
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    words: Vec<Arc<str>>,
    pair_index: PairIndex,
}

impl DictionaryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a raw word and register it.
    ///
    /// Whitespace is stripped and the result wrapped in boundary markers. An
    /// empty or all-whitespace line becomes `__`. Duplicates are not
    /// rejected.
    pub fn add_word(&mut self, raw: &str) -> &mut Self {
        let word: Arc<str> = Arc::from(wrap(&strip_whitespace(raw)));
        self.pair_index.insert(&word);
        self.words.push(word);

        if self.words.len() % PROGRESS_INTERVAL == 0 {
            trace!("{} words indexed", self.words.len());
        }
        self
    }

    /// Register every word of `words`.
    pub fn add_words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
        self
    }

    /// Number of words added so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no word was added.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sort the words and freeze the dictionary.
    pub fn build(self) -> Dictionary {
        let DictionaryBuilder {
            mut words,
            pair_index,
        } = self;
        words.sort();
        Dictionary { words, pair_index }
    }
}

/// Summary figures about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Number of words.
    pub word_count: usize,
    /// Number of pair cells holding at least one word.
    pub populated_cells: usize,
    /// Size of the largest pair cell.
    pub max_cell_size: usize,
}

/// Sorted known words plus their pair index. Immutable once built.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Arc<str>>,
    pair_index: PairIndex,
}

impl Dictionary {
    /// Build a dictionary from raw words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = DictionaryBuilder::new();
        builder.add_words(words);
        builder.build()
    }

    /// Build a dictionary from a reader with one raw word per line.
    ///
    /// A read error aborts the build.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut builder = DictionaryBuilder::new();
        for line in reader.lines() {
            builder.add_word(&line?);
        }
        Ok(builder.build())
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| NeurospellError::dictionary_source(path, e))?;

        let dictionary = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            NeurospellError::Io(source) => NeurospellError::dictionary_source(path, source),
            other => other,
        })?;

        info!(
            "{} words in dictionary loaded from {}",
            dictionary.word_count(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Save the words, without boundary markers, one per line in sorted order.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for word in &self.words {
            writeln!(writer, "{}", alphabet::unwrap(word))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// The sorted, boundary-wrapped words.
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// Get the total number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The pair index built alongside the words.
    pub fn pair_index(&self) -> &PairIndex {
        &self.pair_index
    }

    /// Position of a boundary-wrapped word, by binary search.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.words.binary_search_by(|w| (**w).cmp(word)).ok()
    }

    /// Check whether `word` is a known word. Wrapping is optional.
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(&ensure_wrapped(&strip_whitespace(word)))
            .is_some()
    }

    /// Candidate list for the first two characters of `input`.
    ///
    /// Whitespace is ignored. Fewer than two remaining characters is an
    /// [`NeurospellError::InvalidPair`].
    pub fn pair_candidates(&self, input: &str) -> Result<&[Arc<str>]> {
        let stripped = strip_whitespace(input);
        let mut chars = stripped.chars();
        match (chars.next(), chars.next()) {
            (Some(ch1), Some(ch2)) => Ok(self.pair_index.cell_for(ch1, ch2)),
            _ => Err(NeurospellError::invalid_pair(stripped)),
        }
    }

    /// Summary figures for diagnostics.
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            word_count: self.word_count(),
            populated_cells: self.pair_index.populated_cells(),
            max_cell_size: self.pair_index.max_cell_size(),
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        DictionaryBuilder::new().build()
    }
}
