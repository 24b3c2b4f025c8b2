//! BitField - Fixed-capacity bit array packed into 32-bit words.
//!
//! This module provides the bitfield value type: indexed get/set/clear,
//! two equality relations, and union/intersection/complement across
//! bitfields whose lengths may differ.
//!
//! # Design
//!
//! - Uses `Vec<u32>` for storage (32-bit words, LSB-first within a word)
//! - Bit indexing: word_idx = bit_idx / 32, bit_offset = bit_idx % 32
//! - Word count is `bit_length / 32 + 1`, so index `bit_length` itself is
//!   always backed by storage
//! - Binary operators zero-extend the shorter operand
//!
//! # Index bound
//!
//! Accessors accept `0 <= n <= length()`. The upper bound is inclusive: index
//! `length()` addresses the first padding bit, which is outside the logical
//! length but inside storage. Writing it is visible to word-level equality
//! (`==`) and invisible to [`BitField::bits_differ`].
//!
//! # Examples
//!
//! ```
//! use packed_bitfield::BitField;
//!
//! let mut bf = BitField::new(1024)?;
//! bf.set_bit(5)?;
//! bf.set_bit(10)?;
//! assert_eq!(bf.num_set(), 2);
//! assert_eq!(bf.get_acts(), vec![5, 10]);
//! # Ok::<(), packed_bitfield::BitFieldError>(())
//! ```

use crate::error::{BitFieldError, Result};
use log::debug;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Not};

/// Word type for bit storage (32-bit unsigned integer)
pub type Word = u32;

/// Number of bits per word
pub const BITS_PER_WORD: usize = 32;

/// Maximum word value
pub const WORD_MAX: Word = Word::MAX;

/// Get word index from bit position
#[inline(always)]
const fn get_word_idx(bit_pos: usize) -> usize {
    bit_pos >> 5 // bit_pos / 32
}

/// Get bit index within word from bit position
#[inline(always)]
const fn get_bit_idx(bit_pos: usize) -> usize {
    bit_pos & 31 // bit_pos % 32
}

/// Get single-bit mask for bit position within its word
#[inline(always)]
const fn get_bit_mask(bit_pos: usize) -> Word {
    1 << get_bit_idx(bit_pos)
}

/// Create bitmask with n bits set (from LSB)
#[inline(always)]
const fn bitmask(n: usize) -> Word {
    if n == 0 {
        0
    } else if n >= BITS_PER_WORD {
        WORD_MAX
    } else {
        WORD_MAX >> (BITS_PER_WORD - n)
    }
}

/// Number of storage words for a bitfield of `num_bits` bits.
///
/// Always one more than `num_bits / 32`, never zero.
#[inline(always)]
const fn num_words_for(num_bits: usize) -> usize {
    num_bits / BITS_PER_WORD + 1
}

/// Fixed-capacity bit array using 32-bit word storage.
///
/// All bit indices are 0-based. The storage is exclusively owned; cloning
/// deep-copies it.
///
/// Two equality relations exist and are deliberately kept apart:
///
/// - `==` / `!=` ([`PartialEq`]) compare lengths and storage words, padding
///   included.
/// - [`BitField::bits_differ`] / [`BitField::bits_eq`] compare the length and
///   the live bits only.
#[derive(Debug)]
pub struct BitField {
    /// Storage words (32-bit), `bit_length / 32 + 1` of them
    words: Vec<Word>,
    /// Logical number of bits
    bit_length: usize,
}

impl BitField {
    /// Create a new BitField with `length` bits, all initialized to 0.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::InvalidLength`] if `length` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitfield::BitField;
    ///
    /// let bf = BitField::new(100)?;
    /// assert_eq!(bf.length(), 100);
    /// assert_eq!(bf.num_words(), 4);
    /// assert!(BitField::new(-3).is_err());
    /// # Ok::<(), packed_bitfield::BitFieldError>(())
    /// ```
    pub fn new(length: isize) -> Result<Self> {
        let bit_length = usize::try_from(length).map_err(|_| {
            debug!("rejected bitfield construction with length {}", length);
            BitFieldError::InvalidLength(length)
        })?;
        Ok(Self::zeroed(bit_length))
    }

    /// Create a new BitField of a length known to be valid.
    pub fn zeroed(length: usize) -> Self {
        Self {
            words: vec![0; num_words_for(length)],
            bit_length: length,
        }
    }

    /// Get the logical number of bits.
    #[inline(always)]
    pub fn length(&self) -> usize {
        self.bit_length
    }

    /// Get number of storage words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Get direct read-only access to word storage, padding included.
    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Replace this bitfield with a deep copy of `other`.
    ///
    /// Length and word count follow `other`; the previous contents are
    /// discarded.
    pub fn assign(&mut self, other: &BitField) {
        self.clone_from(other);
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Validate `n` against the inclusive range `0..=length()`.
    fn check_index(&self, n: isize) -> Result<usize> {
        match usize::try_from(n) {
            Ok(b) if b <= self.bit_length => Ok(b),
            _ => {
                debug!(
                    "rejected bit index {} (length: {})",
                    n, self.bit_length
                );
                Err(BitFieldError::IndexOutOfRange {
                    index: n,
                    length: self.bit_length,
                })
            }
        }
    }

    /// Write bit `b` without range checking against the public bound.
    #[inline]
    pub(crate) fn write_bit(&mut self, b: usize, val: bool) {
        debug_assert!(
            b <= self.bit_length,
            "bit index {} out of bounds (length: {})",
            b,
            self.bit_length
        );
        if val {
            self.words[get_word_idx(b)] |= get_bit_mask(b);
        } else {
            self.words[get_word_idx(b)] &= !get_bit_mask(b);
        }
    }

    /// Read bit `b` without range checking against the public bound.
    #[inline]
    pub(crate) fn read_bit(&self, b: usize) -> bool {
        debug_assert!(
            b <= self.bit_length,
            "bit index {} out of bounds (length: {})",
            b,
            self.bit_length
        );
        self.words[get_word_idx(b)] & get_bit_mask(b) != 0
    }

    /// Set bit at position `n` to 1.
    ///
    /// Accepts `0 <= n <= length()`; see the module docs for the inclusive
    /// upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfRange`] if `n < 0` or
    /// `n > length()`.
    #[inline]
    pub fn set_bit(&mut self, n: isize) -> Result<()> {
        let b = self.check_index(n)?;
        self.write_bit(b, true);
        Ok(())
    }

    /// Clear bit at position `n` (set to 0).
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfRange`] if `n < 0` or
    /// `n > length()`.
    #[inline]
    pub fn clear_bit(&mut self, n: isize) -> Result<()> {
        let b = self.check_index(n)?;
        self.write_bit(b, false);
        Ok(())
    }

    /// Get bit at position `n` (returns 0 or 1 as u8).
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfRange`] if `n < 0` or
    /// `n > length()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitfield::BitField;
    ///
    /// let mut bf = BitField::new(10)?;
    /// bf.set_bit(3)?;
    /// assert_eq!(bf.get_bit(3)?, 1);
    /// assert_eq!(bf.get_bit(10)?, 0); // inclusive upper bound
    /// assert!(bf.get_bit(11).is_err());
    /// # Ok::<(), packed_bitfield::BitFieldError>(())
    /// ```
    #[inline]
    pub fn get_bit(&self, n: isize) -> Result<u8> {
        let b = self.check_index(n)?;
        Ok(u8::from(self.read_bit(b)))
    }

    /// Toggle bit at position `n` (0 -> 1, 1 -> 0).
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfRange`] if `n < 0` or
    /// `n > length()`.
    #[inline]
    pub fn toggle_bit(&mut self, n: isize) -> Result<()> {
        let b = self.check_index(n)?;
        self.words[get_word_idx(b)] ^= get_bit_mask(b);
        Ok(())
    }

    /// Assign bit at position `n` to given value (0 or 1).
    ///
    /// Any non-zero value is treated as 1.
    #[inline]
    pub fn assign_bit(&mut self, n: isize, val: u8) -> Result<()> {
        if val > 0 {
            self.set_bit(n)
        } else {
            self.clear_bit(n)
        }
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Word `i` restricted to live bits (padding masked off).
    #[inline]
    fn live_word(&self, i: usize) -> Word {
        let last = get_word_idx(self.bit_length);
        if i < last {
            self.words[i]
        } else if i == last {
            self.words[i] & bitmask(get_bit_idx(self.bit_length))
        } else {
            0
        }
    }

    /// Count number of set live bits (population count).
    pub fn num_set(&self) -> usize {
        (0..self.words.len())
            .map(|i| self.live_word(i).count_ones() as usize)
            .sum()
    }

    /// Get indices of all set live bits, in ascending order.
    pub fn get_acts(&self) -> Vec<usize> {
        let mut acts = Vec::with_capacity(self.num_set());

        for word_idx in 0..self.words.len() {
            let mut word = self.live_word(word_idx);
            let base = word_idx * BITS_PER_WORD;

            // Pop lowest set bit until the word is empty
            while word != 0 {
                acts.push(base + word.trailing_zeros() as usize);
                word &= word - 1;
            }
        }

        acts
    }

    // =========================================================================
    // Semantic Comparison
    // =========================================================================

    /// Semantic inequality: lengths differ, or some live bit differs.
    ///
    /// Padding bits are ignored. This is a separate relation from `!=`,
    /// which compares whole storage words.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitfield::BitField;
    ///
    /// let mut a = BitField::new(10)?;
    /// let b = BitField::new(10)?;
    /// a.set_bit(10)?; // padding bit
    /// assert!(!a.bits_differ(&b));
    /// assert_ne!(a, b);
    /// # Ok::<(), packed_bitfield::BitFieldError>(())
    /// ```
    pub fn bits_differ(&self, other: &BitField) -> bool {
        self.bit_length != other.bit_length
            || (0..self.words.len()).any(|i| self.live_word(i) != other.live_word(i))
    }

    /// Semantic equality: same length and every live bit matches.
    #[inline]
    pub fn bits_eq(&self, other: &BitField) -> bool {
        !self.bits_differ(other)
    }

    // =========================================================================
    // Boolean Set Operations
    // =========================================================================

    /// Union with zero extension of the shorter operand.
    ///
    /// The result has length `max(self.length(), other.length())`. Words
    /// present in only one operand are copied as-is, padding included.
    pub fn bitwise_or(&self, other: &BitField) -> BitField {
        let mut result = BitField::zeroed(self.bit_length.max(other.bit_length));

        for (i, word) in result.words.iter_mut().enumerate() {
            *word = match (self.words.get(i), other.words.get(i)) {
                (Some(a), Some(b)) => a | b,
                (Some(a), None) => *a,
                (None, Some(b)) => *b,
                (None, None) => 0,
            };
        }

        result
    }

    /// Intersection with zero extension of the shorter operand.
    ///
    /// The result has length `max(self.length(), other.length())`. Words
    /// beyond either operand's storage are 0.
    pub fn bitwise_and(&self, other: &BitField) -> BitField {
        let mut result = BitField::zeroed(self.bit_length.max(other.bit_length));

        for (word, (a, b)) in result
            .words
            .iter_mut()
            .zip(self.words.iter().zip(other.words.iter()))
        {
            *word = a & b;
        }

        result
    }

    /// Complement of every live bit.
    ///
    /// The result has the same length; its padding bits are 0 whatever the
    /// padding of `self`.
    pub fn bitwise_not(&self) -> BitField {
        let mut result = BitField::zeroed(self.bit_length);

        for (dst, src) in result.words.iter_mut().zip(self.words.iter()) {
            *dst = !*src;
        }

        // Last word always holds the boundary; clear everything from bit_length up
        let last_idx = result.words.len() - 1;
        result.words[last_idx] &= bitmask(get_bit_idx(self.bit_length));

        result
    }
}

impl Clone for BitField {
    fn clone(&self) -> Self {
        Self {
            words: self.words.clone(),
            bit_length: self.bit_length,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.words.clone_from(&source.words);
        self.bit_length = source.bit_length;
    }
}

// =============================================================================
// Bitwise Operators
// =============================================================================

impl BitAnd for BitField {
    type Output = BitField;

    fn bitand(self, rhs: Self) -> Self::Output {
        &self & &rhs
    }
}

impl BitAnd for &BitField {
    type Output = BitField;

    /// Bitwise AND, see [`BitField::bitwise_and`].
    fn bitand(self, rhs: Self) -> Self::Output {
        self.bitwise_and(rhs)
    }
}

impl BitOr for BitField {
    type Output = BitField;

    fn bitor(self, rhs: Self) -> Self::Output {
        &self | &rhs
    }
}

impl BitOr for &BitField {
    type Output = BitField;

    /// Bitwise OR, see [`BitField::bitwise_or`].
    fn bitor(self, rhs: Self) -> Self::Output {
        self.bitwise_or(rhs)
    }
}

impl Not for BitField {
    type Output = BitField;

    fn not(self) -> Self::Output {
        !&self
    }
}

impl Not for &BitField {
    type Output = BitField;

    /// Bitwise NOT, see [`BitField::bitwise_not`].
    fn not(self) -> Self::Output {
        self.bitwise_not()
    }
}

// =============================================================================
// Word-Level Comparison
// =============================================================================

impl PartialEq for BitField {
    /// Compare lengths, storage word counts and every storage word.
    ///
    /// Padding bits and the reserved word take part, so bitfields with the
    /// same live bits can still compare unequal.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bit_length == other.bit_length && self.words == other.words
    }
}

impl Eq for BitField {}

impl Hash for BitField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bit_length.hash(state);
        self.words.hash(state);
    }
}
