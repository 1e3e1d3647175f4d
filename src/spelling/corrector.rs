//! Correction engine: scores dictionary words against a query through the
//! pair index and ranks the best matches.
//!
//! Every adjacent pair of the boundary-wrapped query contributes
//! `1 / pair_count` to each word listed under that pair. A word sharing
//! every pair of the query therefore scores exactly [`PERFECT_SCORE`].
//! The words sharing the best score are returned, closest length first.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{NeurospellError, Result};
use crate::spelling::alphabet::{self, char_len, ensure_wrapped, symbol_pairs};
use crate::spelling::dictionary::{Dictionary, DictionaryStats};
use crate::spelling::scratch::QueryScratch;

/// Score of a word explaining every pair of the query.
pub const PERFECT_SCORE: f64 = 1.0;

/// Scores this close to [`PERFECT_SCORE`] are snapped onto it.
const SNAP_EPSILON: f64 = 1e-10;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Keep only candidates of exactly the query's length.
    pub strict_length: bool,
    /// Maximum number of suggestions to return (all ties when `None`).
    pub max_results: Option<usize>,
    /// Tolerance when selecting candidates tied with the best score.
    /// `0.0` requires bit-exact equality.
    pub tie_epsilon: f64,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            strict_length: false,
            max_results: None,
            tie_epsilon: 0.0,
        }
    }
}

impl CorrectorConfig {
    /// Set the strict length option.
    pub fn with_strict_length(mut self, strict_length: bool) -> Self {
        self.strict_length = strict_length;
        self
    }

    /// Limit the number of suggestions.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the tie selection tolerance.
    pub fn with_tie_epsilon(mut self, tie_epsilon: f64) -> Self {
        self.tie_epsilon = tie_epsilon;
        self
    }

    /// Reject settings the engine cannot honor.
    pub fn validate(&self) -> Result<()> {
        if !self.tie_epsilon.is_finite() || self.tie_epsilon < 0.0 {
            return Err(NeurospellError::invalid_config(format!(
                "tie_epsilon must be a finite, non-negative number (got {})",
                self.tie_epsilon
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CorrectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn is_tie(&self, score: f64, best: f64) -> bool {
        if self.tie_epsilon == 0.0 {
            score == best
        } else {
            (score - best).abs() <= self.tie_epsilon
        }
    }
}

/// A ranked candidate word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The boundary-wrapped dictionary word.
    pub word: String,
    /// Accumulated pair score.
    pub score: f64,
    /// Absolute length difference from the query.
    pub length_difference: usize,
}

impl Suggestion {
    /// The word without its boundary markers.
    pub fn display_word(&self) -> &str {
        alphabet::unwrap(&self.word)
    }

    fn distance_from_perfect(&self) -> f64 {
        distance_from_perfect(self.score)
    }
}

/// Outcome of one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// The query as scored, boundary-wrapped.
    pub query: String,
    /// Words tied for the best score, best ranked first.
    pub suggestions: Vec<Suggestion>,
    /// Number of distinct words sharing at least one pair with the query.
    pub words_touched: usize,
}

impl Correction {
    /// Check if any suggestion was found.
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// The top ranked suggestion.
    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

fn distance_from_perfect(score: f64) -> f64 {
    (score - PERFECT_SCORE).abs()
}

fn snap_to_perfect(score: f64) -> f64 {
    if distance_from_perfect(score) < SNAP_EPSILON {
        PERFECT_SCORE
    } else {
        score
    }
}

/// Correct `query` against `dictionary`, using `scratch` as working memory.
///
/// The query is wrapped in boundary markers unless it already starts with
/// one. `scratch` is reset first, so it may be reused across calls.
pub fn correct(
    dictionary: &Dictionary,
    query: &str,
    config: &CorrectorConfig,
    scratch: &mut QueryScratch,
) -> Correction {
    let word_count = dictionary.word_count();
    scratch.reset(word_count);

    let query = ensure_wrapped(query);
    let query_len = char_len(&query);
    let pair_count = query_len.saturating_sub(1);

    if pair_count > 0 {
        let contribution = 1.0 / pair_count as f64;
        let pair_index = dictionary.pair_index();
        for (first, second) in symbol_pairs(&query) {
            for candidate in pair_index.cell(first, second) {
                let Some(position) = dictionary.index_of(candidate) else {
                    continue;
                };
                let len_diff = char_len(candidate).abs_diff(query_len);
                scratch.accumulate(position, contribution, len_diff);
            }
        }
    }

    let mut words_touched = 0;
    let mut best_score = 0.0;
    for position in 0..word_count {
        let score = scratch.score(position);
        if score != 0.0 {
            scratch.set_score(position, snap_to_perfect(score));
            words_touched += 1;
        }
        let score = scratch.score(position);
        if distance_from_perfect(best_score) > distance_from_perfect(score) {
            best_score = score;
        }
    }

    let mut suggestions = Vec::new();
    if words_touched > 0 {
        for (position, &score) in scratch.scores().iter().enumerate() {
            if score == 0.0 || !config.is_tie(score, best_score) {
                continue;
            }
            let length_difference = scratch.len_diff(position);
            if config.strict_length && length_difference != 0 {
                continue;
            }
            suggestions.push(Suggestion {
                word: dictionary.words()[position].to_string(),
                score,
                length_difference,
            });
        }
    }

    // Stable: equal keys keep dictionary order.
    suggestions.sort_by(|a, b| {
        a.length_difference
            .cmp(&b.length_difference)
            .then_with(|| {
                a.distance_from_perfect()
                    .partial_cmp(&b.distance_from_perfect())
                    .unwrap_or(Ordering::Equal)
            })
    });
    if let Some(limit) = config.max_results {
        suggestions.truncate(limit);
    }

    debug!(
        "'{}': {} words touched, best score {:.4}, {} suggestions",
        query,
        words_touched,
        best_score,
        suggestions.len()
    );

    Correction {
        query,
        suggestions,
        words_touched,
    }
}

/// A dictionary bundled with a correction configuration.
///
/// Queries only borrow the corrector, so one instance can serve many
/// threads at once.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    dictionary: Dictionary,
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a corrector with the default configuration.
    pub fn new(dictionary: Dictionary) -> Self {
        SpellingCorrector {
            dictionary,
            config: CorrectorConfig::default(),
        }
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(dictionary: Dictionary, config: CorrectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(SpellingCorrector { dictionary, config })
    }

    /// Update the corrector configuration.
    pub fn set_config(&mut self, config: CorrectorConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Correct a single word with a freshly allocated scratch buffer.
    pub fn correct(&self, word: &str) -> Correction {
        let mut scratch = QueryScratch::with_capacity(self.dictionary.word_count());
        self.correct_with(word, &mut scratch)
    }

    /// Correct a single word reusing the caller's scratch buffer.
    pub fn correct_with(&self, word: &str, scratch: &mut QueryScratch) -> Correction {
        correct(&self.dictionary, word, &self.config, scratch)
    }

    /// Correct many words in parallel, in input order.
    pub fn correct_batch<S>(&self, words: &[S]) -> Vec<Correction>
    where
        S: AsRef<str> + Sync,
    {
        let word_count = self.dictionary.word_count();
        words
            .par_iter()
            .map_init(
                || QueryScratch::with_capacity(word_count),
                |scratch, word| self.correct_with(word.as_ref(), scratch),
            )
            .collect()
    }

    /// Check if a word is in the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Get statistics about the underlying dictionary.
    pub fn stats(&self) -> DictionaryStats {
        self.dictionary.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_of(correction: &Correction) -> Vec<&str> {
        correction
            .suggestions
            .iter()
            .map(Suggestion::display_word)
            .collect()
    }

    fn run(dictionary: &Dictionary, query: &str, config: &CorrectorConfig) -> Correction {
        let mut scratch = QueryScratch::new();
        correct(dictionary, query, config, &mut scratch)
    }

    #[test]
    fn test_known_word_is_perfect_match() {
        let dict = Dictionary::from_words(["cat", "bat", "hat", "banana", "apple"]);
        for word in ["cat", "bat", "hat", "banana", "apple"] {
            let correction = run(&dict, word, &CorrectorConfig::default());
            let best = correction.best().unwrap();
            assert_eq!(best.display_word(), word);
            assert_eq!(best.score, PERFECT_SCORE);
            assert_eq!(best.length_difference, 0);
        }
    }

    #[test]
    fn test_perfect_score_is_snapped() {
        // Ten pairs of 0.1 do not sum to exactly 1.0 in floating point.
        let dict = Dictionary::from_words(["abcdefghi"]);
        let correction = run(&dict, "abcdefghi", &CorrectorConfig::default());
        assert_eq!(correction.suggestions[0].score, 1.0);
    }

    #[test]
    fn test_single_best_match() {
        let dict = Dictionary::from_words(["cat", "bat", "hat"]);
        let correction = run(&dict, "cot", &CorrectorConfig::default());

        // `_cot_` shares `_c` and `t_` with cat, only `t_` with the others.
        assert_eq!(words_of(&correction), vec!["cat"]);
        assert_eq!(correction.suggestions[0].score, 0.5);
        assert_eq!(correction.words_touched, 3);
    }

    #[test]
    fn test_ties_are_all_returned() {
        let dict = Dictionary::from_words(["cat", "bat", "hat"]);
        let correction = run(&dict, "xat", &CorrectorConfig::default());

        assert_eq!(words_of(&correction), vec!["bat", "cat", "hat"]);
        assert!(
            correction
                .suggestions
                .iter()
                .all(|s| s.score == 0.5 && s.length_difference == 0)
        );
        assert_eq!(correction.words_touched, 3);
    }

    #[test]
    fn test_closer_length_ranks_first() {
        let dict = Dictionary::from_words(["apple", "ape"]);
        let correction = run(&dict, "ap", &CorrectorConfig::default());

        assert_eq!(words_of(&correction), vec!["ape", "apple"]);
        assert_eq!(correction.suggestions[0].length_difference, 1);
        assert_eq!(correction.suggestions[1].length_difference, 3);
    }

    #[test]
    fn test_strict_length_filters_after_selection() {
        let dict = Dictionary::from_words(["ape", "apple", "apt"]);

        let loose = run(&dict, "apx", &CorrectorConfig::default());
        assert_eq!(words_of(&loose), vec!["ape", "apt", "apple"]);

        let strict = run(
            &dict,
            "apx",
            &CorrectorConfig::default().with_strict_length(true),
        );
        assert_eq!(words_of(&strict), vec!["ape", "apt"]);
        assert_eq!(strict.words_touched, loose.words_touched);
        assert!(strict.suggestions.iter().all(|s| s.length_difference == 0));
    }

    #[test]
    fn test_strict_length_can_empty_results() {
        let dict = Dictionary::from_words(["apple", "ape"]);
        let correction = run(
            &dict,
            "ap",
            &CorrectorConfig::default().with_strict_length(true),
        );
        assert!(!correction.has_suggestions());
        assert_eq!(correction.words_touched, 2);
    }

    #[test]
    fn test_no_shared_pairs() {
        let dict = Dictionary::from_words(["cat", "dog"]);
        let correction = run(&dict, "xyz", &CorrectorConfig::default());
        assert!(correction.suggestions.is_empty());
        assert_eq!(correction.words_touched, 0);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::from_words(Vec::<&str>::new());
        let correction = run(&dict, "cat", &CorrectorConfig::default());
        assert!(correction.suggestions.is_empty());
        assert_eq!(correction.words_touched, 0);
    }

    #[test]
    fn test_empty_query_matches_blank_entry() {
        let dict = Dictionary::from_words(["", "cat"]);
        let correction = run(&dict, "", &CorrectorConfig::default());
        assert_eq!(correction.query, "__");
        assert_eq!(words_of(&correction), vec![""]);
        assert_eq!(correction.words_touched, 1);
    }

    #[test]
    fn test_prewrapped_query() {
        let dict = Dictionary::from_words(["cat", "bat"]);
        let plain = run(&dict, "cat", &CorrectorConfig::default());
        let wrapped = run(&dict, "_cat_", &CorrectorConfig::default());
        assert_eq!(plain, wrapped);

        // A lone marker is taken as wrapped and has no pairs.
        let marker = run(&dict, "_", &CorrectorConfig::default());
        assert!(marker.suggestions.is_empty());
        assert_eq!(marker.words_touched, 0);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let dict = Dictionary::from_words(["cat"]);
        let correction = run(&dict, "CAT", &CorrectorConfig::default());
        assert_eq!(correction.suggestions[0].score, PERFECT_SCORE);
        assert_eq!(correction.suggestions[0].display_word(), "cat");
    }

    #[test]
    fn test_tie_epsilon_widens_selection() {
        let dict = Dictionary::from_words(["cat", "cart", "dog"]);

        let exact = run(&dict, "cat", &CorrectorConfig::default());
        assert_eq!(words_of(&exact), vec!["cat"]);

        let loose = run(
            &dict,
            "cat",
            &CorrectorConfig::default().with_tie_epsilon(0.3),
        );
        assert_eq!(words_of(&loose), vec!["cat", "cart"]);
        assert_eq!(loose.suggestions[1].score, 0.75);
    }

    #[test]
    fn test_max_results() {
        let dict = Dictionary::from_words(["cat", "bat", "hat"]);
        let correction = run(
            &dict,
            "xat",
            &CorrectorConfig::default().with_max_results(2),
        );
        assert_eq!(words_of(&correction), vec!["bat", "cat"]);
        assert_eq!(correction.words_touched, 3);
    }

    #[test]
    fn test_scratch_reuse_does_not_leak() {
        let dict = Dictionary::from_words(["cat", "bat", "hat"]);
        let config = CorrectorConfig::default();
        let mut scratch = QueryScratch::new();

        let first = correct(&dict, "xat", &config, &mut scratch);
        let second = correct(&dict, "xat", &config, &mut scratch);
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_validation() {
        assert!(CorrectorConfig::default().validate().is_ok());
        assert!(
            CorrectorConfig::default()
                .with_tie_epsilon(-1.0)
                .validate()
                .is_err()
        );
        assert!(
            CorrectorConfig::default()
                .with_tie_epsilon(f64::NAN)
                .validate()
                .is_err()
        );

        let dict = Dictionary::from_words(["cat"]);
        let result = SpellingCorrector::with_config(
            dict,
            CorrectorConfig::default().with_tie_epsilon(-0.5),
        );
        assert!(matches!(result, Err(NeurospellError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: CorrectorConfig = serde_json::from_str(r#"{"strict_length": true}"#).unwrap();
        assert!(config.strict_length);
        assert_eq!(config.max_results, None);
        assert_eq!(config.tie_epsilon, 0.0);
    }

    #[test]
    fn test_spelling_corrector() {
        let dict = Dictionary::from_words(["cat", "bat", "hat"]);
        let mut corrector = SpellingCorrector::new(dict);

        assert!(corrector.is_correct("cat"));
        assert!(!corrector.is_correct("cot"));
        assert_eq!(corrector.stats().word_count, 3);

        corrector
            .set_config(CorrectorConfig::default().with_max_results(1))
            .unwrap();
        assert_eq!(corrector.correct("xat").suggestions.len(), 1);
    }

    #[test]
    fn test_correct_batch_matches_single_queries() {
        let dict = Dictionary::from_words(["cat", "bat", "hat", "apple", "ape"]);
        let corrector = SpellingCorrector::new(dict);
        let queries = ["cot", "xat", "ap", "zzz", ""];

        let batch = corrector.correct_batch(&queries);
        assert_eq!(batch.len(), queries.len());
        for (query, correction) in queries.iter().zip(&batch) {
            assert_eq!(&corrector.correct(query), correction);
        }
    }
}
