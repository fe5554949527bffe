//! In-memory mapping from word to aggregate sentiment evidence.
//!
//! [`SentimentIndex`] is built once by the corpus loader and read-only
//! afterwards. Every stored entry has `frequency >= 1`; a word that never
//! occurred in the corpus is absent from the map, not present with a zero
//! count.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Aggregate sentiment evidence for one distinct word.
///
/// Only the review count and the score sum are stored; the average is derived
/// on demand. This keeps updates O(1) per occurrence, at the cost of not
/// being able to recompute a median or variance later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WordStat {
    /// Number of reviews the word occurred in.
    pub frequency: u64,
    /// Sum of the per-review scores attributed to the word.
    pub total_score: f64,
}

impl WordStat {
    /// The average score of this word.
    ///
    /// Defined for any entry stored in a [`SentimentIndex`], since stored
    /// entries always have `frequency >= 1`.
    pub fn average(&self) -> f64 {
        self.total_score / self.frequency as f64
    }
}

/// Mapping from word (case-sensitive, exactly as tokenized) to [`WordStat`].
#[derive(Debug, Clone, Default)]
pub struct SentimentIndex {
    stats: AHashMap<String, WordStat>,
}

impl SentimentIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word` in a review with the given score.
    pub(crate) fn observe(&mut self, word: &str, score: f64) {
        let entry = self.stats.entry(word.to_string()).or_default();
        entry.frequency += 1;
        entry.total_score += score;
    }

    /// The stored statistic for `word`, or `None` if the word never occurred.
    pub fn stat(&self, word: &str) -> Option<&WordStat> {
        self.stats.get(word)
    }

    /// The average score of `word`, or `None` if the word never occurred.
    ///
    /// Absence is communicated explicitly rather than through a sentinel
    /// score, so the caller can always distinguish "known, score X" from
    /// "unknown" regardless of the corpus score domain.
    pub fn average_score(&self, word: &str) -> Option<f64> {
        self.stats.get(word).map(WordStat::average)
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Whether the index contains no words.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterate over the distinct words in the index. No ordering guarantee.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }

    /// Merge another index into this one by summing per-word statistics.
    ///
    /// Summing `frequency` and `total_score` is associative and commutative,
    /// so folding corpus shards separately and merging yields the same final
    /// statistics as a single sequential fold.
    pub fn merge(&mut self, other: SentimentIndex) {
        for (word, stat) in other.stats {
            let entry = self.stats.entry(word).or_default();
            entry.frequency += stat.frequency;
            entry.total_score += stat.total_score;
        }
    }
}
