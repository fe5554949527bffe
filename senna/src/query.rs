//! Query operations over a built [`SentimentIndex`](crate::SentimentIndex).
//!
//! All operations here are pure functions over a shared reference to the
//! index plus a sequence of word lines (one word per line, empty lines
//! ignored). Words absent from the index are excluded from every aggregate;
//! they never count as zero.

pub mod aggregate;
pub mod extremes;
pub mod partition;

// Re-exports
pub use aggregate::{FileSentiment, SentimentLabel, file_sentiment};
pub use extremes::{Extremes, ScoredWord, extremes};
pub use partition::{Partition, partition};
