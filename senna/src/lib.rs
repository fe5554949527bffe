//! # Senna
//!
//! A lexical sentiment index over scored review corpora.
//!
//! Senna ingests a corpus of scored text reviews (one `<score> <review text>`
//! line per review), folds it into a per-word aggregate statistic, and answers
//! derived queries against the resulting index:
//!
//! - Single-word lookup
//! - Whole-file average sentiment with a categorical label
//! - Extremal-word scan (highest/lowest scoring words)
//! - Threshold-based partitioning into positive/negative word streams
//!
//! The index is built once by the [`loader`] and is read-only afterwards, so
//! it can be shared freely across readers.

// Core modules
pub mod config;
mod error;
pub mod index;
pub mod loader;
pub mod query;

// Re-exports for the public API
pub use config::Thresholds;
pub use error::{Result, SennaError};
pub use index::{SentimentIndex, WordStat};
pub use loader::{load_path, load_reader};
pub use query::{
    Extremes, FileSentiment, Partition, ScoredWord, SentimentLabel, extremes, file_sentiment,
    partition,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
