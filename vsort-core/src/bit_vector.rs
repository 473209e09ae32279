//! Fixed-capacity bit vector used as a sorting and de-duplication set
//!
//! Values are recorded as single bits packed into machine words. Scanning
//! the words from low to high yields every recorded value in ascending
//! order, which is the whole sort.

use alloc::vec;
use alloc::vec::Vec;

use crate::validation::bounds::{bit_mask, locate, validate_bit, words_for_bits, Word, WORD_BITS};
use crate::{Error, Result};

/// Packed bit array with a capacity fixed at construction
///
/// Capacity is always a whole number of words, so it may exceed the
/// requested bit count. Bits are only ever set, never cleared.
///
/// # Examples
///
/// ```
/// use vsort_core::BitVector;
///
/// let mut bv = BitVector::new(16);
/// bv.set_bit(5).unwrap();
/// bv.set_bit(2).unwrap();
/// bv.set_bit(0).unwrap();
///
/// assert!(bv.max_bits() >= 16);
/// assert_eq!(bv.iter_ones().collect::<Vec<_>>(), vec![0, 2, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVector {
    /// Backing words, all zero at construction
    words: Vec<Word>,
}

impl BitVector {
    /// Create a vector able to hold at least `num_bits` bits
    ///
    /// `num_bits == 0` yields an empty vector with zero capacity.
    pub fn new(num_bits: usize) -> Self {
        Self {
            words: vec![0; words_for_bits(num_bits)],
        }
    }

    /// Get the number of addressable bits
    #[inline]
    pub fn max_bits(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Check whether `bit` is set
    pub fn test_bit(&self, bit: usize) -> Result<bool> {
        validate_bit(bit, self.max_bits())?;

        let (word_index, bit_offset) = locate(bit);
        Ok(self.words[word_index] & bit_mask(bit_offset) != 0)
    }

    /// Set `bit`, failing if it is out of range or was already set
    ///
    /// A repeated value is reported as [`Error::AlreadySet`] rather than
    /// ignored so callers can detect duplicates in their input.
    pub fn set_bit(&mut self, bit: usize) -> Result<()> {
        if self.insert(bit)? {
            Ok(())
        } else {
            Err(Error::AlreadySet { bit })
        }
    }

    /// Set `bit`, returning `true` if it was not set before
    ///
    /// Bounds are still checked; only the duplicate case is absorbed.
    pub fn insert(&mut self, bit: usize) -> Result<bool> {
        validate_bit(bit, self.max_bits())?;

        let (word_index, bit_offset) = locate(bit);
        let mask = bit_mask(bit_offset);
        let word = &mut self.words[word_index];
        if *word & mask != 0 {
            return Ok(false);
        }

        *word |= mask;
        Ok(true)
    }

    /// Count the set bits
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check whether no bit is set
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Get the backing words
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterate over set bit indices in ascending order
    ///
    /// Each call starts a fresh scan from bit 0.
    pub fn iter_ones(&self) -> Ones<'_> {
        Ones::new(&self.words)
    }
}

/// Ascending iterator over set bit indices, created by [`BitVector::iter_ones`]
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [Word],
    /// Index of the word held in `current`
    word_index: usize,
    /// Remaining set bits of the current word
    current: Word,
}

impl<'a> Ones<'a> {
    fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            word_index: 0,
            current: words.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }

        let offset = self.current.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.current &= self.current - 1;
        Some(self.word_index * WORD_BITS + offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_bits = self.words.len().saturating_sub(self.word_index) * WORD_BITS;
        (0, Some(remaining_bits))
    }
}

impl core::iter::FusedIterator for Ones<'_> {}
