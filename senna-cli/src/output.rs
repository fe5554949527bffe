use std::path::Path;

use clap::ValueEnum;
use senna::{Extremes, FileSentiment, Partition, SentimentIndex, WordStat};
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// JSON output.
    Json,
}

/// Print the lookup result for a single word.
pub fn print_word(word: &str, stat: Option<&WordStat>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let output = match stat {
                Some(stat) => json!({
                    "word": word,
                    "known": true,
                    "frequency": stat.frequency,
                    "average_score": stat.average(),
                }),
                None => json!({
                    "word": word,
                    "known": false,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Table => match stat {
            Some(stat) => {
                let rows = vec![WordRow {
                    word: word.to_string(),
                    reviews: stat.frequency,
                    average: format!("{:.4}", stat.average()),
                }];
                let table = Table::new(&rows).with(Style::rounded()).to_string();
                println!("{table}");
            }
            None => {
                println!("The word '{word}' does not appear in the corpus.");
            }
        },
    }
}

/// Print the file-level sentiment result.
pub fn print_file_sentiment(path: &Path, sentiment: &FileSentiment, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "file": path.display().to_string(),
                "label": sentiment.label,
                "mean_score": sentiment.mean_score,
                "known_words": sentiment.known_words,
                "unknown_words": sentiment.unknown_words,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Table => {
            println!(
                "The sentiment of {} is {}, with a score of {:.4}.",
                path.display(),
                sentiment.label,
                sentiment.mean_score
            );
            if sentiment.unknown_words > 0 {
                println!(
                    "({} known words, {} unknown words excluded)",
                    sentiment.known_words, sentiment.unknown_words
                );
            }
        }
    }
}

/// Print the extremal-word scan result.
pub fn print_extremes(extremes: &Extremes, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(extremes).unwrap());
        }
        OutputFormat::Table => {
            let rows = vec![
                ExtremeRow {
                    extreme: "Most positive".to_string(),
                    word: extremes.highest.word.clone(),
                    score: format!("{:.4}", extremes.highest.score),
                },
                ExtremeRow {
                    extreme: "Most negative".to_string(),
                    word: extremes.lowest.word.clone(),
                    score: format!("{:.4}", extremes.lowest.score),
                },
            ];
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
}

/// Print a summary of a written partition.
pub fn print_partition(
    partition: &Partition,
    positive_out: &Path,
    negative_out: &Path,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "positive_out": positive_out.display().to_string(),
                "positive_words": partition.positive.len(),
                "negative_out": negative_out.display().to_string(),
                "negative_words": partition.negative.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Table => {
            println!(
                "Wrote {} positive words to {} and {} negative words to {}.",
                partition.positive.len(),
                positive_out.display(),
                partition.negative.len(),
                negative_out.display()
            );
        }
    }
}

/// Print corpus index statistics.
pub fn print_stats(corpus: &Path, index: &SentimentIndex, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "corpus": corpus.display().to_string(),
                "distinct_words": index.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Table => {
            println!("Corpus: {}", corpus.display());
            println!("Distinct words: {}", index.len());
        }
    }
}

// --- Helper types ---

#[derive(Tabled)]
struct WordRow {
    #[tabled(rename = "Word")]
    word: String,
    #[tabled(rename = "Reviews")]
    reviews: u64,
    #[tabled(rename = "Average")]
    average: String,
}

#[derive(Tabled)]
struct ExtremeRow {
    #[tabled(rename = "Extreme")]
    extreme: String,
    #[tabled(rename = "Word")]
    word: String,
    #[tabled(rename = "Score")]
    score: String,
}
