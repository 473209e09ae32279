//! Populate-then-emit bitmap sort pipeline
//!
//! A run reads one decimal value per line into a [`BitVector`], then writes
//! the set bits back out in ascending order. The first failure of any kind
//! ends the run; nothing after it is processed.

use std::io::{self, Write};
use std::time::Instant;

use vsort_core::{parse_value, BitVector};

use crate::config::{DuplicatePolicy, SortConfig};
use crate::error::{PopulateError, Result, RunError, SortError};
use crate::report::RunReport;

/// Vector filled from a source, with the number of entries recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Populated {
    /// Entries recorded
    pub count: usize,
    /// Bitmap holding every recorded value
    pub vector: BitVector,
}

/// Fill a new vector of `capacity` bits from `source`, rejecting duplicates
///
/// Stops at the first line that fails to parse, falls outside
/// `[0, capacity)`, repeats an earlier value, or fails to read.
pub fn populate<I, S>(source: I, capacity: usize) -> std::result::Result<Populated, PopulateError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    populate_with(source, &SortConfig::with_capacity(capacity))
}

/// Fill a new vector from `source` according to `config`
pub fn populate_with<I, S>(
    source: I,
    config: &SortConfig,
) -> std::result::Result<Populated, PopulateError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut vector = BitVector::new(config.capacity());
    let mut processed = 0;

    for (index, line) in source.into_iter().enumerate() {
        record(&mut vector, line, index + 1, config)
            .map_err(|error| PopulateError { processed, error })?;
        processed += 1;
    }

    Ok(Populated {
        count: processed,
        vector,
    })
}

/// Parse one line and set its bit
fn record<S: AsRef<str>>(
    vector: &mut BitVector,
    line: io::Result<S>,
    line_number: usize,
    config: &SortConfig,
) -> Result<()> {
    let line = line?;
    let text = line.as_ref();

    let value = parse_value(text).map_err(|kind| SortError::Parse {
        line: line_number,
        text: text.to_owned(),
        kind,
    })?;

    let capacity = config.capacity();
    if value >= capacity {
        return Err(SortError::Range { value, capacity });
    }

    let outcome = match config.duplicates() {
        DuplicatePolicy::Reject => vector.set_bit(value),
        DuplicatePolicy::Ignore => vector.insert(value).map(|_| ()),
    };

    outcome.map_err(|e| match e {
        vsort_core::Error::AlreadySet { bit } => SortError::Duplicate { value: bit },
        _ => SortError::Range { value, capacity },
    })
}

/// Write every set bit of `vector` to `sink` as one decimal line, ascending
///
/// Returns the number of lines written. The first write or flush failure
/// aborts the scan.
pub fn emit<W: Write>(vector: &BitVector, mut sink: W) -> Result<usize> {
    let mut written = 0;

    for value in vector.iter_ones() {
        writeln!(sink, "{value}")?;
        written += 1;
    }

    sink.flush()?;
    Ok(written)
}

/// Stage of a [`BitmapSort`] run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Populating,
    Populated,
    Emitting,
    Done,
    Failed,
}

impl PipelineState {
    /// Check whether no further stage can run
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }
}

/// Single bitmap sort run: populate once, then emit once
///
/// # Examples
///
/// ```
/// use std::io::BufRead;
/// use vsort::{BitmapSort, PipelineState, SortConfig};
///
/// let mut sort = BitmapSort::new(SortConfig::with_capacity(16));
/// let input = std::io::Cursor::new("2\n0\n5\n");
/// let mut output = Vec::new();
///
/// let report = sort.run(input.lines(), &mut output).unwrap();
/// assert_eq!(report.entries, 3);
/// assert_eq!(output, b"0\n2\n5\n");
/// assert_eq!(sort.state(), PipelineState::Done);
/// ```
#[derive(Debug)]
pub struct BitmapSort {
    config: SortConfig,
    state: PipelineState,
    vector: Option<BitVector>,
    processed: usize,
}

impl BitmapSort {
    /// Create an idle run
    pub fn new(config: SortConfig) -> Self {
        Self {
            config,
            state: PipelineState::Idle,
            vector: None,
            processed: 0,
        }
    }

    /// Get the current stage
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Get the entries recorded so far
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Get the run configuration
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Get the populated vector, if population succeeded
    pub fn vector(&self) -> Option<&BitVector> {
        self.vector.as_ref()
    }

    /// Fill the vector from `source`; only valid while idle
    pub fn populate<I, S>(&mut self, source: I) -> std::result::Result<usize, PopulateError>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        if self.state != PipelineState::Idle {
            return Err(PopulateError {
                processed: self.processed,
                error: SortError::InvalidState {
                    action: "populate",
                    state: self.state,
                },
            });
        }

        self.state = PipelineState::Populating;
        match populate_with(source, &self.config) {
            Ok(populated) => {
                self.processed = populated.count;
                self.vector = Some(populated.vector);
                self.state = PipelineState::Populated;
                Ok(self.processed)
            }
            Err(e) => {
                self.processed = e.processed;
                self.state = PipelineState::Failed;
                Err(e)
            }
        }
    }

    /// Write the sorted values to `sink`; only valid once populated
    pub fn emit<W: Write>(&mut self, sink: W) -> Result<usize> {
        let vector = match (self.state, &self.vector) {
            (PipelineState::Populated, Some(vector)) => vector,
            (state, _) => {
                return Err(SortError::InvalidState {
                    action: "emit",
                    state,
                })
            }
        };

        self.state = PipelineState::Emitting;
        match emit(vector, sink) {
            Ok(written) => {
                self.state = PipelineState::Done;
                Ok(written)
            }
            Err(e) => {
                self.state = PipelineState::Failed;
                Err(e)
            }
        }
    }

    /// Populate from `source` and emit to `sink`
    pub fn run<I, S, W>(&mut self, source: I, sink: W) -> std::result::Result<RunReport, RunError>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
        W: Write,
    {
        let start = Instant::now();

        self.populate(source)?;
        let emitted = self.emit(sink).map_err(|error| RunError {
            processed: self.processed,
            error,
        })?;

        Ok(RunReport {
            entries: self.processed,
            emitted,
            capacity: self.config.capacity(),
            max_bits: self.vector.as_ref().map_or(0, BitVector::max_bits),
            elapsed: start.elapsed(),
        })
    }
}
