//! # binary-universe: the universe of binary strings Σ^n
//!
//! **`binary-universe`** enumerates every binary string of a given length `n`, tallies how
//! many ones each string has, writes a sample of the strings together with the
//! resulting statistics to a text file, and renders charts of the distribution.
//!
//! ## How it works
//!
//! The universe Σ^n has `2^n` strings, far too many to keep in memory for anything but
//! small `n`. The strings are therefore produced lazily by a cursor that behaves like an
//! `n`-bit counter, and consumed in a single pass that updates a histogram of
//! ones-counts. Only a bounded sample (the first and last `M` strings) and, for small
//! universes, the ones-count of every string are retained.
//!
//! The histogram is the binomial row: exactly `C(n, k)` strings have `k` ones, and the
//! buckets add up to `2^n`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use binary_universe::accumulator::accumulate;
//! use binary_universe::config::RunConfig;
//!
//! // Sweep all strings of length 3, discarding the sample stream.
//! let acc = accumulate(3, &RunConfig::default(), &mut ()).unwrap();
//!
//! assert_eq!(acc.distribution.counts(), &[1, 3, 3, 1]);
//! assert_eq!(acc.sample.len(), 8);
//! assert!(acc.ones.is_some());
//! ```
//!
//! ## Core Components
//!
//! - **[`producer`]**: lazy cursor over Σ^n in numeric order.
//! - **[`accumulator`]**: single-pass histogram, sample window and ones trace.
//! - **[`writer`]**: the `cadenas_binarias_n{n}.txt` artifact.
//! - **[`chart`]**: PNG charts (with the `charts` feature).
//! - **[`driver`]**: the interactive menu.
//! - **[`theory`]**: exact `2^n` and `C(n, k)` for any `n`.

pub mod accumulator;
pub mod chart;
pub mod config;
pub mod driver;
pub mod error;
pub mod pipeline;
pub mod producer;
pub mod theory;
pub mod word;
pub mod writer;
