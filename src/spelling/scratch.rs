//! Per-query working memory for the correction engine.

/// Score and length-difference accumulators, one slot per dictionary word.
///
/// Owned by the caller rather than the dictionary, so any number of queries
/// can run against one shared dictionary. Reused across queries; every
/// query starts by calling [`QueryScratch::reset`].
#[derive(Debug, Clone, Default)]
pub struct QueryScratch {
    scores: Vec<f64>,
    len_diffs: Vec<usize>,
}

impl QueryScratch {
    /// Create an empty buffer. It grows on first reset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer already sized for `word_count` words.
    pub fn with_capacity(word_count: usize) -> Self {
        QueryScratch {
            scores: vec![0.0; word_count],
            len_diffs: vec![0; word_count],
        }
    }

    /// Zero every slot and resize to `word_count`.
    pub fn reset(&mut self, word_count: usize) {
        self.scores.clear();
        self.scores.resize(word_count, 0.0);
        self.len_diffs.clear();
        self.len_diffs.resize(word_count, 0);
    }

    /// Add `contribution` to a word's score and record its length difference.
    pub(crate) fn accumulate(&mut self, position: usize, contribution: f64, len_diff: usize) {
        self.scores[position] += contribution;
        self.len_diffs[position] = len_diff;
    }

    pub(crate) fn score(&self, position: usize) -> f64 {
        self.scores[position]
    }

    pub(crate) fn set_score(&mut self, position: usize, score: f64) {
        self.scores[position] = score;
    }

    pub(crate) fn len_diff(&self, position: usize) -> usize {
        self.len_diffs[position]
    }

    pub(crate) fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when the buffer has no slot.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_previous_query() {
        let mut scratch = QueryScratch::with_capacity(3);
        scratch.accumulate(1, 0.5, 2);
        scratch.accumulate(1, 0.25, 2);
        assert_eq!(scratch.score(1), 0.75);
        assert_eq!(scratch.len_diff(1), 2);

        scratch.reset(3);
        assert!(scratch.scores().iter().all(|&s| s == 0.0));
        assert_eq!(scratch.len_diff(1), 0);
    }

    #[test]
    fn test_reset_resizes() {
        let mut scratch = QueryScratch::new();
        assert!(scratch.is_empty());
        scratch.reset(5);
        assert_eq!(scratch.len(), 5);
        scratch.reset(2);
        assert_eq!(scratch.len(), 2);
    }
}
