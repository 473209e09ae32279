//! Word and bit-offset arithmetic for packed bit storage
//!
//! This module provides pure mathematical functions mapping bit indices
//! onto machine words, with no allocation or I/O.

use crate::Error;

/// Storage unit for packed bits: the native machine word
pub type Word = usize;

/// Number of bits held by one [`Word`]
pub const WORD_BITS: usize = Word::BITS as usize;

/// Compute the number of words needed to hold `num_bits` bits
///
/// Rounds up so that a partial trailing word still gets storage.
pub const fn words_for_bits(num_bits: usize) -> usize {
    num_bits.div_ceil(WORD_BITS)
}

/// Map a bit index to its `(word_index, bit_offset)` pair
#[inline]
pub const fn locate(bit: usize) -> (usize, usize) {
    (bit / WORD_BITS, bit % WORD_BITS)
}

/// Single-bit mask for an offset within a word
///
/// `offset` must be below [`WORD_BITS`].
#[inline]
pub const fn bit_mask(offset: usize) -> Word {
    debug_assert!(offset < WORD_BITS);
    1 << offset
}

/// Validate that a bit index falls below `capacity`
pub const fn validate_bit(bit: usize, capacity: usize) -> Result<(), Error> {
    if bit >= capacity {
        return Err(Error::OutOfRange { bit, capacity });
    }
    Ok(())
}
