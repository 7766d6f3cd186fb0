//! Lazy producer of every binary string of a given length.
//!
//! The universe Σ^n over the alphabet `{0, 1}` is walked in numeric order: the `i`-th
//! emitted string is the `n`-digit binary expansion of `i` (most significant bit first),
//! which coincides with the lexicographic order of the strings.
//!
//! # Example
//!
//! ```
//! use binary_universe::producer::BinaryStrings;
//!
//! let strings: Vec<String> = BinaryStrings::new(2).collect();
//! assert_eq!(strings, ["00", "01", "10", "11"]);
//!
//! // The empty universe still contains the empty string.
//! assert_eq!(BinaryStrings::new(0).collect::<Vec<_>>(), [""]);
//! ```
//!
//! # Performance
//!
//! Nothing but the current combination is kept in memory. The cursor API
//! ([`BinaryStrings::advance`]) hands out a borrowed [`BitWord`] and never allocates;
//! the [`Iterator`] implementation allocates one `String` per item and is meant for
//! small universes.
//!
//! Note: the universe has `2^n` elements, so full enumeration is only feasible for
//! `n` up to a few tens.

use crate::word::BitWord;

/// Position of the cursor within the universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing emitted yet
    Fresh,
    /// The current word has been emitted
    Active,
    /// All `2^n` strings have been emitted
    Exhausted,
}

/// A cursor over all binary strings of length `n`.
///
/// Finite and non-restartable: once exhausted, it stays exhausted.
#[derive(Debug, Clone)]
pub struct BinaryStrings {
    current: BitWord,
    emitted: u64,
    state: State,
}

impl BinaryStrings {
    /// Creates a producer for strings of length `n`.
    pub fn new(n: usize) -> Self {
        Self {
            current: BitWord::zero(n),
            emitted: 0,
            state: State::Fresh,
        }
    }

    /// Length of the produced strings.
    pub fn width(&self) -> usize {
        self.current.len()
    }

    /// Number of strings emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Moves to the next combination and returns it, or `None` once the universe is exhausted.
    ///
    /// The emission index of the returned word is `emitted() - 1`.
    pub fn advance(&mut self) -> Option<&BitWord> {
        match self.state {
            State::Fresh => {
                self.state = State::Active;
            }
            State::Active => {
                if !self.current.increment() {
                    self.state = State::Exhausted;
                    return None;
                }
            }
            State::Exhausted => return None,
        }
        self.emitted += 1;
        Some(&self.current)
    }

    /// Number of strings still to be produced, if it fits into a `u64`.
    fn remaining(&self) -> Option<u64> {
        match self.state {
            State::Fresh => (self.width() < 64).then(|| 1u64 << self.width()),
            State::Active => self.current.distance_to_max(),
            State::Exhausted => Some(0),
        }
    }
}

impl Iterator for BinaryStrings {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|word| word.to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for BinaryStrings {}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_n2_order() {
        let strings: Vec<_> = BinaryStrings::new(2).collect();
        assert_eq!(strings, vec!["00", "01", "10", "11"]);
    }

    #[test]
    fn test_n0_single_empty() {
        let mut producer = BinaryStrings::new(0);
        assert_eq!(producer.next().as_deref(), Some(""));
        assert_eq!(producer.next(), None);
        assert_eq!(producer.emitted(), 1);
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut producer = BinaryStrings::new(1);
        assert_eq!(producer.next().as_deref(), Some("0"));
        assert_eq!(producer.next().as_deref(), Some("1"));
        assert_eq!(producer.next(), None);
        assert_eq!(producer.next(), None);
        assert_eq!(producer.emitted(), 2);
    }

    #[test]
    fn test_matches_binary_expansion() {
        let n = 7;
        for (i, s) in BinaryStrings::new(n).enumerate() {
            assert_eq!(s, format!("{:0width$b}", i, width = n));
        }
    }

    #[test]
    fn test_count_and_size_hint() {
        let producer = BinaryStrings::new(10);
        assert_eq!(producer.size_hint(), (1024, Some(1024)));
        assert_eq!(producer.count(), 1024);

        let mut producer = BinaryStrings::new(3);
        producer.next();
        producer.next();
        assert_eq!(producer.size_hint(), (6, Some(6)));
    }

    #[test]
    fn test_wide_universe_starts_correctly() {
        let mut producer = BinaryStrings::new(70);
        let first = producer.next().unwrap();
        let second = producer.next().unwrap();
        assert_eq!(first, "0".repeat(70));
        assert_eq!(second, format!("{}1", "0".repeat(69)));
        assert_eq!(producer.size_hint(), (usize::MAX, None));
    }
}
