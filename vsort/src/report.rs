//! Summary of a completed run

use std::time::Duration;

/// Outcome of a successful [`BitmapSort::run`](crate::BitmapSort::run)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunReport {
    /// Input entries recorded
    pub entries: usize,
    /// Distinct values written to the sink
    pub emitted: usize,
    /// Configured universe size
    pub capacity: usize,
    /// Addressable bits after rounding to whole words
    pub max_bits: usize,
    /// Wall time for populate and emit together
    pub elapsed: Duration,
}

impl RunReport {
    /// Serialize the report as a single-line JSON object
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "vectorsort took {:.2?} processing {} entries.",
            self.elapsed, self.entries
        )
    }
}
