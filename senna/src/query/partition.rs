//! Threshold-based partitioning of a word sequence into positive and
//! negative streams.

use serde::Serialize;

use crate::config::Thresholds;
use crate::index::SentimentIndex;

/// The two output streams of a partition, in input order.
///
/// No deduplication is performed; a repeated input word produces a repeated
/// output word.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Partition {
    /// Words whose average score is strictly above `partition_high`.
    pub positive: Vec<String>,
    /// Words whose average score is strictly below `partition_low`.
    pub negative: Vec<String>,
}

/// Partition a word sequence by average score.
///
/// Known words scoring strictly above `thresholds.partition_high` go to the
/// positive stream, strictly below `thresholds.partition_low` to the negative
/// stream. Words in the dead zone between the cuts, and unknown words, go to
/// neither.
pub fn partition<I, S>(index: &SentimentIndex, words: I, thresholds: &Thresholds) -> Partition
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = Partition::default();

    for word in words {
        let word = word.as_ref().trim();
        if word.is_empty() {
            continue;
        }
        let Some(score) = index.average_score(word) else {
            continue;
        };

        if score > thresholds.partition_high {
            result.positive.push(word.to_string());
        }
        if score < thresholds.partition_low {
            result.negative.push(word.to_string());
        }
    }

    result
}
