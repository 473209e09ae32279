//! vsort - Bitmap Sort for Bounded Integer Streams
//!
//! This library sorts and de-duplicates a stream of non-negative integers
//! below a known bound by recording each value as one bit, then scanning the
//! bitmap in ascending order. It runs in linear time with storage
//! proportional to the bound, not the input size.
//!
//! ## Architecture
//!
//! - **vsort-core**: the [`BitVector`], word arithmetic and value parsing (no I/O)
//! - **vsort**: the populate/emit pipeline, file stream adapters, configuration
//!   and the `vsort` command-line driver
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vsort::{create_sink, open_lines, BitmapSort, SortConfig};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut sort = BitmapSort::new(SortConfig::with_capacity(10_000_000));
//!     let report = sort.run(open_lines("input.txt")?, create_sink("output.txt")?)?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use vsort_core::{BitVector, Error as BitError, ErrorCategory, Ones, Word, WORD_BITS};

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod stream;

pub use config::{DuplicatePolicy, SortConfig, DEFAULT_CAPACITY};
pub use error::{PopulateError, RunError, SortError};
pub use pipeline::{emit, populate, populate_with, BitmapSort, PipelineState, Populated};
pub use report::RunReport;
pub use stream::{create_sink, open_lines, MmapLines};

#[cfg(feature = "mmap")]
pub use stream::MmapInput;
