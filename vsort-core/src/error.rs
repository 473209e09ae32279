//! Error types for bit vector and value parsing operations

/// Errors that can occur during bit vector and parsing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Bit index is not below the vector's capacity
    OutOfRange { bit: usize, capacity: usize },
    /// Bit was already set by an earlier insertion
    AlreadySet { bit: usize },
    /// Value text is empty
    EmptyValue,
    /// Value text contains a non-digit character
    InvalidDigit,
    /// Value text carries a minus sign
    NegativeValue,
    /// Value does not fit in a machine word
    ValueOverflow,
}

/// Coarse classification of [`Error`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Index bounds violations
    Bounds,
    /// Duplicate insertions
    Duplicate,
    /// Malformed value text
    Parse,
}

impl Error {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Error::OutOfRange { .. } => ErrorCategory::Bounds,
            Error::AlreadySet { .. } => ErrorCategory::Duplicate,
            Error::EmptyValue
            | Error::InvalidDigit
            | Error::NegativeValue
            | Error::ValueOverflow => ErrorCategory::Parse,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::OutOfRange { bit, capacity } => {
                write!(f, "bit {bit} falls outside vector range (capacity {capacity})")
            }
            Error::AlreadySet { bit } => write!(f, "bit {bit} already set"),
            Error::EmptyValue => write!(f, "empty value"),
            Error::InvalidDigit => write!(f, "invalid digit in value"),
            Error::NegativeValue => write!(f, "negative value"),
            Error::ValueOverflow => write!(f, "value too large for a machine word"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, Error>;
