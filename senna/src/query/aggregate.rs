//! File-level sentiment aggregation.

use std::fmt;

use serde::Serialize;

use crate::config::Thresholds;
use crate::error::{Result, SennaError};
use crate::index::SentimentIndex;

/// Categorical sentiment label for a file-level mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// Result of averaging the known word scores of a word file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSentiment {
    /// Arithmetic mean of the per-word average scores of all known words.
    pub mean_score: f64,
    /// `Positive` when `mean_score >= thresholds.positive_mean`.
    pub label: SentimentLabel,
    /// Number of input words found in the index.
    pub known_words: usize,
    /// Number of input words absent from the index.
    pub unknown_words: usize,
}

/// Average the per-word scores of a word sequence and label the result.
///
/// Unknown words are excluded entirely from the mean. If no input word is
/// known, returns [`SennaError::EmptyAggregate`] rather than a meaningless
/// division-by-zero value.
pub fn file_sentiment<I, S>(
    index: &SentimentIndex,
    words: I,
    thresholds: &Thresholds,
) -> Result<FileSentiment>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = 0.0;
    let mut known_words = 0usize;
    let mut unknown_words = 0usize;

    for word in words {
        let word = word.as_ref().trim();
        if word.is_empty() {
            continue;
        }
        match index.average_score(word) {
            Some(score) => {
                total += score;
                known_words += 1;
            }
            None => unknown_words += 1,
        }
    }

    if known_words == 0 {
        return Err(SennaError::empty_aggregate(
            "no word in the input appears in the corpus",
        ));
    }

    let mean_score = total / known_words as f64;
    let label = if mean_score >= thresholds.positive_mean {
        SentimentLabel::Positive
    } else {
        SentimentLabel::Negative
    };

    Ok(FileSentiment {
        mean_score,
        label,
        known_words,
        unknown_words,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::loader::load_reader;

    fn sample_index() -> SentimentIndex {
        // good -> 3.0, film -> 2.0, terrible -> 1.0
        load_reader(Cursor::new("3 good great film\n1 bad terrible film")).unwrap()
    }

    #[test]
    fn test_mean_over_known_words() {
        let index = sample_index();
        let result =
            file_sentiment(&index, ["good", "terrible"], &Thresholds::default()).unwrap();

        assert_eq!(result.mean_score, 2.0);
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.known_words, 2);
        assert_eq!(result.unknown_words, 0);
    }

    #[test]
    fn test_unknown_words_are_excluded_not_zeroed() {
        let index = sample_index();
        let result =
            file_sentiment(&index, ["good", "unseen", "mystery"], &Thresholds::default()).unwrap();

        // The mean is 3.0, not dragged down by the two unknown words.
        assert_eq!(result.mean_score, 3.0);
        assert_eq!(result.known_words, 1);
        assert_eq!(result.unknown_words, 2);
    }

    #[test]
    fn test_negative_label_below_cut() {
        let index = sample_index();
        let result = file_sentiment(&index, ["terrible"], &Thresholds::default()).unwrap();

        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_empty_lines_are_ignored() {
        let index = sample_index();
        let result = file_sentiment(&index, ["", "good", ""], &Thresholds::default()).unwrap();

        assert_eq!(result.known_words, 1);
        assert_eq!(result.unknown_words, 0);
    }

    #[test]
    fn test_all_unknown_is_an_empty_aggregate() {
        let index = sample_index();
        let result = file_sentiment(&index, ["unseen", "mystery"], &Thresholds::default());

        assert!(matches!(
            result,
            Err(SennaError::EmptyAggregate { .. })
        ));
    }

    #[test]
    fn test_positive_cut_is_configurable() {
        let index = sample_index();
        let thresholds = Thresholds {
            positive_mean: 3.5,
            ..Thresholds::default()
        };
        let result = file_sentiment(&index, ["good"], &thresholds).unwrap();

        assert_eq!(result.label, SentimentLabel::Negative);
    }
}
