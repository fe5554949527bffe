//! Score thresholds for sentiment categorization.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SennaError};

/// File-level mean at or above which a word file is labeled positive.
pub const DEFAULT_POSITIVE_MEAN: f64 = 2.0;
/// Average score above which a word is emitted to the positive partition.
pub const DEFAULT_PARTITION_HIGH: f64 = 2.1;
/// Average score below which a word is emitted to the negative partition.
pub const DEFAULT_PARTITION_LOW: f64 = 1.9;

/// Configurable score cuts for the query engine.
///
/// The defaults reproduce the source corpus's 1-4 integer scoring convention.
/// The partition cuts are asymmetric around the file-level cut on purpose;
/// they are carried as-is rather than re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Cut for labeling a file-level mean as positive (inclusive).
    pub positive_mean: f64,
    /// Strict lower bound of the positive partition stream.
    pub partition_high: f64,
    /// Strict upper bound of the negative partition stream.
    pub partition_low: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive_mean: DEFAULT_POSITIVE_MEAN,
            partition_high: DEFAULT_PARTITION_HIGH,
            partition_low: DEFAULT_PARTITION_LOW,
        }
    }
}

impl Thresholds {
    /// Check that the partition cuts leave a well-formed (possibly empty)
    /// dead zone, i.e. `partition_high >= partition_low`.
    pub fn validate(&self) -> Result<()> {
        if self.partition_high < self.partition_low {
            return Err(SennaError::invalid_config(format!(
                "partition_high ({}) must be >= partition_low ({})",
                self.partition_high, self.partition_low
            )));
        }
        Ok(())
    }
}
