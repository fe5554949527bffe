mod cli;
mod commands;
mod context;
mod output;

use anyhow::{Result, bail};
use clap::Parser;
use senna::SennaError;

use crate::cli::{Cli, Command};
use crate::commands::repl;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let format = cli.format;

    let thresholds = context::load_thresholds(cli.thresholds.as_deref())?;
    let index = context::load_index(&cli.corpus)?;

    match cli.command {
        Command::Word { word } => {
            output::print_word(&word, index.stat(&word), format);
            Ok(())
        }
        Command::File { path } => {
            let words = context::read_words(&path)?;
            match senna::file_sentiment(&index, &words, &thresholds) {
                Ok(sentiment) => {
                    output::print_file_sentiment(&path, &sentiment, format);
                    Ok(())
                }
                Err(SennaError::EmptyAggregate { .. }) => {
                    bail!(
                        "None of the words in {} appear in the corpus; no sentiment can be computed.",
                        path.display()
                    )
                }
                Err(err) => Err(err.into()),
            }
        }
        Command::Extremes { path } => {
            let words = context::read_words(&path)?;
            match senna::extremes(&index, &words) {
                Some(extremes) => {
                    output::print_extremes(&extremes, format);
                    Ok(())
                }
                None => bail!(
                    "None of the words in {} appear in the corpus; no extremal words exist.",
                    path.display()
                ),
            }
        }
        Command::Partition {
            path,
            positive_out,
            negative_out,
        } => {
            let words = context::read_words(&path)?;
            let partition = senna::partition(&index, &words, &thresholds);
            context::write_partition(&partition, &positive_out, &negative_out)?;
            output::print_partition(&partition, &positive_out, &negative_out, format);
            Ok(())
        }
        Command::Stats => {
            output::print_stats(&cli.corpus, &index, format);
            Ok(())
        }
        Command::Repl => repl::run(&index, &thresholds, format),
    }
}
