#![no_std]

//! vsort-core - Bit Vector Definitions for Bitmap Sorting
//!
//! This crate provides the fixed-capacity [`BitVector`] used to sort and
//! de-duplicate bounded integer sets, plus the pure validation and parsing
//! functions it relies on. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod bit_vector;
pub mod error;
pub mod validation;

#[cfg(feature = "alloc")]
pub use bit_vector::{BitVector, Ones};
pub use error::*;
pub use validation::*;
