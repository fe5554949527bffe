use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use senna::{Partition, SentimentIndex, Thresholds};

/// Load the corpus at the given path into a sentiment index.
pub fn load_index(corpus: &Path) -> Result<SentimentIndex> {
    if !corpus.exists() {
        bail!(
            "No corpus found at {}. Pass --corpus or set SENNA_CORPUS.",
            corpus.display()
        );
    }
    senna::load_path(corpus)
        .with_context(|| format!("Failed to load corpus at {}", corpus.display()))
}

/// Load thresholds from a TOML file, or fall back to the defaults.
pub fn load_thresholds(path: Option<&Path>) -> Result<Thresholds> {
    let Some(path) = path else {
        return Ok(Thresholds::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read thresholds file {}", path.display()))?;
    let thresholds: Thresholds =
        toml::from_str(&content).context("Failed to parse thresholds TOML")?;
    thresholds.validate()?;
    Ok(thresholds)
}

/// Read a query-word file: one word per line, empty lines kept for the
/// library to ignore.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word file {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Write the two partition streams to their output files, one word per line,
/// in input order.
pub fn write_partition(
    partition: &Partition,
    positive_out: &Path,
    negative_out: &Path,
) -> Result<()> {
    write_words(positive_out, &partition.positive)?;
    write_words(negative_out, &partition.negative)?;
    Ok(())
}

fn write_words(path: &Path, words: &[String]) -> Result<()> {
    let mut content = String::new();
    for word in words {
        content.push_str(word);
        content.push('\n');
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_thresholds_without_a_file() {
        let thresholds = load_thresholds(None).unwrap();
        assert_eq!(thresholds, Thresholds::default());
    }

    #[test]
    fn test_thresholds_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("thresholds.toml");
        fs::write(&path, "positive_mean = 2.5\npartition_high = 3.0\n").unwrap();

        let thresholds = load_thresholds(Some(&path)).unwrap();
        assert_eq!(thresholds.positive_mean, 2.5);
        assert_eq!(thresholds.partition_high, 3.0);
        // Unspecified keys keep their defaults.
        assert_eq!(thresholds.partition_low, 1.9);
    }

    #[test]
    fn test_inverted_thresholds_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("thresholds.toml");
        fs::write(&path, "partition_high = 1.0\npartition_low = 2.0\n").unwrap();

        assert!(load_thresholds(Some(&path)).is_err());
    }

    #[test]
    fn test_partition_files_are_one_word_per_line() {
        let temp_dir = TempDir::new().unwrap();
        let positive_out = temp_dir.path().join("positive.txt");
        let negative_out = temp_dir.path().join("negative.txt");

        let partition = Partition {
            positive: vec!["wonderful".to_string(), "wonderful".to_string()],
            negative: vec!["awful".to_string()],
        };
        write_partition(&partition, &positive_out, &negative_out).unwrap();

        assert_eq!(
            fs::read_to_string(&positive_out).unwrap(),
            "wonderful\nwonderful\n"
        );
        assert_eq!(fs::read_to_string(&negative_out).unwrap(), "awful\n");
    }
}
