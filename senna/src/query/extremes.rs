//! Extremal-word scan: the highest and lowest scoring words of a sequence.

use serde::Serialize;

use crate::index::SentimentIndex;

/// A word paired with its average score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredWord {
    pub word: String,
    pub score: f64,
}

/// The extremal words of a scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremes {
    /// The first-seen word achieving the maximal average score.
    pub highest: ScoredWord,
    /// The first-seen word achieving the minimal average score.
    pub lowest: ScoredWord,
}

/// Scan a word sequence for the highest and lowest known average scores.
///
/// Running extremes are seeded from the first known word and updated with
/// strict comparisons, so the first-seen word wins ties. Returns `None` when
/// no input word is known; there is no numeric seed that could mask the
/// no-data case as a spurious answer.
pub fn extremes<I, S>(index: &SentimentIndex, words: I) -> Option<Extremes>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut highest: Option<ScoredWord> = None;
    let mut lowest: Option<ScoredWord> = None;

    for word in words {
        let word = word.as_ref().trim();
        if word.is_empty() {
            continue;
        }
        let Some(score) = index.average_score(word) else {
            continue;
        };

        match &highest {
            Some(current) if score <= current.score => {}
            _ => {
                highest = Some(ScoredWord {
                    word: word.to_string(),
                    score,
                });
            }
        }
        match &lowest {
            Some(current) if score >= current.score => {}
            _ => {
                lowest = Some(ScoredWord {
                    word: word.to_string(),
                    score,
                });
            }
        }
    }

    match (highest, lowest) {
        (Some(highest), Some(lowest)) => Some(Extremes { highest, lowest }),
        _ => None,
    }
}
