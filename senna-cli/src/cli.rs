use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Senna - lexical sentiment index CLI
#[derive(Parser)]
#[command(name = "senna", version, about)]
pub struct Cli {
    /// Path to the scored review corpus.
    #[arg(long, env = "SENNA_CORPUS", default_value = "./movieReviews.txt")]
    pub corpus: PathBuf,

    /// Optional thresholds TOML file overriding the default score cuts.
    #[arg(long)]
    pub thresholds: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up the average score of a single word.
    Word {
        /// The word to look up, exactly as it appears in the corpus.
        word: String,
    },
    /// Average the scores of the words in a file (one word per line).
    File {
        /// Path to the word file.
        path: PathBuf,
    },
    /// Find the highest and lowest scoring words in a file.
    Extremes {
        /// Path to the word file.
        path: PathBuf,
    },
    /// Partition the words in a file into positive and negative output files.
    Partition {
        /// Path to the word file.
        path: PathBuf,

        /// Output file for words above the high cut.
        #[arg(long, default_value = "positive.txt")]
        positive_out: PathBuf,

        /// Output file for words below the low cut.
        #[arg(long, default_value = "negative.txt")]
        negative_out: PathBuf,
    },
    /// Show corpus index statistics.
    Stats,
    /// Start an interactive session.
    Repl,
}
