//! Configuration for a bitmap sort run

#[cfg(feature = "serde")]
use std::path::Path;

/// Default universe size: values in `[0, 10_000_000)`
pub const DEFAULT_CAPACITY: usize = 10_000_000;

/// How repeated input values are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DuplicatePolicy {
    /// A repeated value aborts the run
    #[default]
    Reject,
    /// A repeated value is counted and emitted once
    Ignore,
}

/// Configuration for a bitmap sort run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortConfig {
    /// Exclusive upper bound on accepted values
    pub capacity: usize,
    /// Treatment of repeated values
    pub duplicates: DuplicatePolicy,
}

impl SortConfig {
    /// Create config with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            duplicates: DuplicatePolicy::Reject,
        }
    }

    /// Set the duplicate policy
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Get the capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the duplicate policy
    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Bytes of bitmap storage a run with this config allocates
    pub fn bitmap_bytes(&self) -> usize {
        vsort_core::words_for_bits(self.capacity) * std::mem::size_of::<vsort_core::Word>()
    }

    /// Load a config from a JSON file; missing fields take their defaults
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse a config from JSON text
    #[cfg(feature = "serde")]
    pub fn from_json_str(text: &str) -> std::io::Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
