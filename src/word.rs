//! Fixed-width binary word used to walk the universe of binary strings.
//!
//! A [`BitWord`] holds exactly `n` bits packed into `u64` words and behaves like an
//! `n`-bit unsigned counter: [`BitWord::increment`] moves to the next combination in
//! numeric order, and the number of set bits is maintained incrementally so that
//! reading [`BitWord::ones`] is O(1).
//!
//! Rendering (via [`Display`][std::fmt::Display]) prints the most significant bit first,
//! so the textual form of the `i`-th combination is the `n`-digit binary expansion of `i`.

use std::fmt::{self, Write};

/// An `n`-bit unsigned counter backed by a vector of u64 words.
///
/// Word `0` stores the least significant 64 bits. Bits above `len` in the last word
/// are always clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitWord {
    /// Storage: each u64 holds 64 bits, least significant word first
    words: Vec<u64>,
    /// Width in bits
    len: usize,
    /// Number of set bits (cached for O(1) ones())
    ones: usize,
}

impl BitWord {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates the all-zeros word of the given width.
    pub fn zero(len: usize) -> Self {
        let num_words = len.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
            len,
            ones: 0,
        }
    }

    /// Returns the width in bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true for the zero-width word.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn ones(&self) -> usize {
        self.ones
    }

    /// Returns the bit at the given position, where position `0` is the least significant bit.
    #[inline]
    pub fn bit(&self, position: usize) -> bool {
        if position >= self.len {
            return false;
        }
        let word = position / Self::BITS_PER_WORD;
        let bit = position % Self::BITS_PER_WORD;
        (self.words[word] >> bit) & 1 == 1
    }

    /// Mask of the valid bits in the word at `index`.
    #[inline]
    fn mask(&self, index: usize) -> u64 {
        let rem = self.len % Self::BITS_PER_WORD;
        if index + 1 == self.words.len() && rem != 0 {
            (1u64 << rem) - 1
        } else {
            u64::MAX
        }
    }

    /// Advances to the next value in numeric order.
    ///
    /// Returns `false` when the counter wraps around from all-ones back to all-zeros
    /// (for the zero-width word this happens on every call).
    pub fn increment(&mut self) -> bool {
        for index in 0..self.words.len() {
            let mask = self.mask(index);
            let word = self.words[index];
            if word == mask {
                // Carry: every valid bit of this word flips to zero.
                self.words[index] = 0;
                self.ones -= mask.count_ones() as usize;
                continue;
            }
            // `word + 1` clears the trailing ones and sets the first zero bit.
            let trailing = word.trailing_ones() as usize;
            self.words[index] = word + 1;
            self.ones = self.ones + 1 - trailing;
            return true;
        }
        false
    }

    /// Returns the numeric value of the word if it fits into a `u64`.
    pub fn value(&self) -> Option<u64> {
        if self.words.iter().skip(1).any(|&w| w != 0) {
            return None;
        }
        Some(self.words.first().copied().unwrap_or(0))
    }

    /// Returns `(2^len - 1) - value`, the number of increments left before wrap-around,
    /// if it fits into a `u64`.
    pub fn distance_to_max(&self) -> Option<u64> {
        for index in 1..self.words.len() {
            if self.words[index] != self.mask(index) {
                return None;
            }
        }
        match self.words.first() {
            Some(&low) => Some(self.mask(0) & !low),
            None => Some(0),
        }
    }
}

impl fmt::Display for BitWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in (0..self.len).rev() {
            f.write_char(if self.bit(position) { '1' } else { '0' })?;
        }
        Ok(())
    }
}
