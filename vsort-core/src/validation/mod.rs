//! Bounds and parsing validation for packed bit storage
//!
//! This module contains pure functions with no I/O dependencies: word/offset
//! arithmetic and decimal value parsing.

pub mod bounds;
pub mod parsing;

pub use bounds::{bit_mask, locate, validate_bit, words_for_bits, Word, WORD_BITS};
pub use parsing::parse_value;
