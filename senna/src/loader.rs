//! Corpus ingestion: folds scored review lines into a [`SentimentIndex`].
//!
//! Corpus format: one review per line, `<score><whitespace><review text>`,
//! where the score parses as a floating-point literal. Lines that do not
//! split into at least two whitespace-separated fields, or whose leading
//! field fails numeric parsing, are skipped without aborting the load. I/O
//! failures abort the load; a partially folded index is never returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::index::SentimentIndex;

/// Load a corpus file from disk and build a [`SentimentIndex`] from it.
pub fn load_path(path: impl AsRef<Path>) -> Result<SentimentIndex> {
    let file = File::open(path)?;
    load_reader(BufReader::new(file))
}

/// Build a [`SentimentIndex`] from any buffered line source.
pub fn load_reader<R: BufRead>(reader: R) -> Result<SentimentIndex> {
    let mut index = SentimentIndex::new();
    let mut folded = 0u64;
    let mut skipped = 0u64;

    for line in reader.lines() {
        let line = line?;
        if fold_line(&mut index, &line) {
            folded += 1;
        } else {
            skipped += 1;
        }
    }

    log::info!(
        "corpus loaded: {folded} lines folded, {skipped} skipped, {} distinct words",
        index.len()
    );
    Ok(index)
}

/// Fold one corpus line into the index. Returns `false` if the line was
/// skipped as malformed or empty.
fn fold_line(index: &mut SentimentIndex, line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    let Some(score_token) = tokens.next() else {
        return false;
    };
    let mut words = tokens.peekable();
    if words.peek().is_none() {
        return false;
    }

    let Ok(score) = score_token.parse::<f64>() else {
        log::debug!("skipping corpus line with unparseable score {score_token:?}");
        return false;
    };

    for word in words {
        index.observe(word, score);
    }
    true
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn load_lines(lines: &[&str]) -> SentimentIndex {
        load_reader(Cursor::new(lines.join("\n"))).unwrap()
    }

    #[test]
    fn test_fold_concrete_corpus() {
        let index = load_lines(&["3 good great film", "1 bad terrible film"]);

        let good = index.stat("good").unwrap();
        assert_eq!(good.frequency, 1);
        assert_eq!(good.average(), 3.0);

        let film = index.stat("film").unwrap();
        assert_eq!(film.frequency, 2);
        assert_eq!(film.average(), 2.0);

        let terrible = index.stat("terrible").unwrap();
        assert_eq!(terrible.frequency, 1);
        assert_eq!(terrible.average(), 1.0);
    }

    #[test]
    fn test_unparseable_score_is_skipped() {
        let index = load_lines(&["notanumber some words", "2 fine"]);

        assert!(index.stat("some").is_none());
        assert!(index.stat("words").is_none());
        assert_eq!(index.average_score("fine"), Some(2.0));
    }

    #[test]
    fn test_short_and_empty_lines_are_skipped() {
        let index = load_lines(&["", "3", "   ", "4 solid"]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.average_score("solid"), Some(4.0));
    }

    #[test]
    fn test_fractional_scores_accumulate() {
        let index = load_lines(&["2.5 okay", "3.5 okay"]);

        let stat = index.stat("okay").unwrap();
        assert_eq!(stat.frequency, 2);
        assert_eq!(stat.average(), 3.0);
    }

    #[test]
    fn test_load_is_permutation_invariant() {
        let lines = ["3 good great film", "1 bad terrible film", "2 fine film"];
        let reversed: Vec<&str> = lines.iter().rev().copied().collect();

        let forward = load_lines(&lines);
        let backward = load_lines(&reversed);

        assert_eq!(forward.len(), backward.len());
        for word in forward.words() {
            assert_eq!(forward.stat(word), backward.stat(word), "word {word:?}");
        }
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_path("/nonexistent/corpus.txt");
        assert!(matches!(result, Err(crate::SennaError::Io(_))));
    }
}
