use std::path::{Path, PathBuf};

use anyhow::Result;
use rustyline::DefaultEditor;
use senna::{SennaError, SentimentIndex, Thresholds};

use crate::context;
use crate::output::{self, OutputFormat};

/// Run the interactive REPL against an already-loaded index.
pub fn run(index: &SentimentIndex, thresholds: &Thresholds, format: OutputFormat) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Senna REPL (type 'help' for commands, 'quit' to exit)");

    loop {
        let line = match rl.readline("senna> ") {
            Ok(line) => line,
            Err(
                rustyline::error::ReadlineError::Interrupted | rustyline::error::ReadlineError::Eof,
            ) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let result = match command {
            "help" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" => break,
            "word" => {
                if rest.is_empty() {
                    eprintln!("Usage: word <word>");
                    continue;
                }
                output::print_word(rest, index.stat(rest), format);
                Ok(())
            }
            "file" => {
                if rest.is_empty() {
                    eprintln!("Usage: file <path>");
                    continue;
                }
                handle_file(index, thresholds, Path::new(rest), format)
            }
            "extremes" => {
                if rest.is_empty() {
                    eprintln!("Usage: extremes <path>");
                    continue;
                }
                handle_extremes(index, Path::new(rest), format)
            }
            "partition" => {
                if rest.is_empty() {
                    eprintln!("Usage: partition <path> [positive_out negative_out]");
                    continue;
                }
                handle_partition(index, thresholds, rest, format)
            }
            "stats" => {
                println!("Distinct words: {}", index.len());
                Ok(())
            }
            _ => {
                eprintln!("Unknown command: '{command}'. Type 'help' for available commands.");
                Ok(())
            }
        };

        if let Err(e) = result {
            eprintln!("Error: {e:#}");
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn print_help() {
    println!(
        "\
Available commands:
  word <word>                            Look up the average score of a word
  file <path>                            Average sentiment of a word file
  extremes <path>                        Highest/lowest scoring words in a file
  partition <path> [pos_out neg_out]     Split a word file by score thresholds
  stats                                  Show index statistics
  help                                   Show this help
  quit                                   Exit the REPL"
    );
}

fn handle_file(
    index: &SentimentIndex,
    thresholds: &Thresholds,
    path: &Path,
    format: OutputFormat,
) -> Result<()> {
    let words = context::read_words(path)?;
    match senna::file_sentiment(index, &words, thresholds) {
        Ok(sentiment) => {
            output::print_file_sentiment(path, &sentiment, format);
            Ok(())
        }
        Err(SennaError::EmptyAggregate { .. }) => {
            eprintln!(
                "None of the words in {} appear in the corpus; no sentiment can be computed.",
                path.display()
            );
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_extremes(index: &SentimentIndex, path: &Path, format: OutputFormat) -> Result<()> {
    let words = context::read_words(path)?;
    match senna::extremes(index, &words) {
        Some(extremes) => output::print_extremes(&extremes, format),
        None => eprintln!(
            "None of the words in {} appear in the corpus; no extremal words exist.",
            path.display()
        ),
    }
    Ok(())
}

fn handle_partition(
    index: &SentimentIndex,
    thresholds: &Thresholds,
    rest: &str,
    format: OutputFormat,
) -> Result<()> {
    let mut args = rest.split_whitespace();
    // First argument is the word file; the output paths are optional.
    let Some(path) = args.next() else {
        eprintln!("Usage: partition <path> [positive_out negative_out]");
        return Ok(());
    };
    let positive_out = PathBuf::from(args.next().unwrap_or("positive.txt"));
    let negative_out = PathBuf::from(args.next().unwrap_or("negative.txt"));

    let path = Path::new(path);
    let words = context::read_words(path)?;
    let partition = senna::partition(index, &words, thresholds);
    context::write_partition(&partition, &positive_out, &negative_out)?;
    output::print_partition(&partition, &positive_out, &negative_out, format);
    Ok(())
}
