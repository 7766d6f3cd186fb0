//! Single-pass accumulation of the ones-count distribution.
//!
//! [`accumulate`] walks the whole universe Σ^n once, pulling one combination at a time
//! from [`BinaryStrings`], and for each string:
//!
//! - forwards it to a [`SampleSink`] and keeps it in the [`SampleWindow`] if it is among
//!   the first or last `M` strings,
//! - increments the histogram bucket of its ones-count,
//! - appends its ones-count to the [`OnesTrace`] when the universe is small enough.
//!
//! Memory use is the `n + 1` histogram buckets plus the bounded sample window and,
//! for universes of at most `retain_limit` strings, the ones trace.

use std::io;

use log::{debug, info};
use num_bigint::BigUint;

use crate::config::RunConfig;
use crate::error::Result;
use crate::producer::BinaryStrings;
use crate::theory;
use crate::word::BitWord;

/// Receiver of the sampled strings, in emission order.
pub trait SampleSink {
    fn sample(&mut self, index: u64, text: &str) -> io::Result<()>;
}

/// Discards every sample.
impl SampleSink for () {
    fn sample(&mut self, _index: u64, _text: &str) -> io::Result<()> {
        Ok(())
    }
}

impl<S: SampleSink + ?Sized> SampleSink for &mut S {
    fn sample(&mut self, index: u64, text: &str) -> io::Result<()> {
        (**self).sample(index, text)
    }
}

/// Histogram of ones-counts over the strings of length `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    n: usize,
    counts: Vec<u64>,
    total: u64,
}

impl Distribution {
    /// Empty histogram with buckets `0..=n`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            counts: vec![0; n + 1],
            total: 0,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Bucket counts, indexed by ones-count.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of strings with exactly `ones` ones.
    pub fn count(&self, ones: usize) -> u64 {
        self.counts.get(ones).copied().unwrap_or(0)
    }

    /// Number of strings recorded.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Records one string with the given ones-count.
    #[inline]
    pub fn record(&mut self, ones: usize) {
        self.counts[ones] += 1;
        self.total += 1;
    }

    /// Share of the strings with exactly `ones` ones, in percent.
    pub fn percentage(&self, ones: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(ones) as f64 / self.total as f64 * 100.0
    }

    /// Iterates over `(ones, count)` pairs in increasing ones order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }

    /// Sum of all buckets, computed exactly.
    pub fn sum(&self) -> BigUint {
        self.counts.iter().map(|&c| BigUint::from(c)).sum()
    }

    /// Returns true if the buckets cover the whole universe, i.e. they sum to `2^n`.
    pub fn is_complete(&self) -> bool {
        self.sum() == theory::universe_size(self.n) && BigUint::from(self.total) == self.sum()
    }
}

/// The first and last `half` strings of the universe, each kept once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleWindow {
    half: u64,
    entries: Vec<String>,
}

impl SampleWindow {
    pub fn new(half: u64) -> Self {
        Self {
            half,
            entries: Vec::new(),
        }
    }

    /// Whether the given combination belongs to the window.
    ///
    /// Head: index `< half`. Tail: fewer than `half` combinations come after it.
    /// Both tests look at the word itself, so a combination that is in both is still
    /// selected exactly once.
    #[inline]
    pub fn selects(&self, word: &BitWord) -> bool {
        let in_head = word.value().is_some_and(|index| index < self.half);
        let in_tail = word.distance_to_max().is_some_and(|rest| rest < self.half);
        in_head || in_tail
    }

    pub fn push(&mut self, text: String) {
        self.entries.push(text);
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

/// Per-string ones-counts, retained only for small universes.
///
/// The variant is chosen once, before the sweep starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnesTrace {
    Retained(Vec<u16>),
    Unavailable,
}

impl OnesTrace {
    /// Selects [`OnesTrace::Retained`] if `2^n <= limit`.
    pub fn select(n: usize, limit: u64) -> Self {
        match universe_len(n) {
            Some(size) if size <= limit => Self::Retained(Vec::with_capacity(size as usize)),
            _ => Self::Unavailable,
        }
    }

    pub fn is_retained(&self) -> bool {
        matches!(self, Self::Retained(_))
    }

    #[inline]
    fn record(&mut self, ones: usize) {
        if let Self::Retained(trace) = self {
            trace.push(ones as u16);
        }
    }

    pub fn into_option(self) -> Option<Vec<u16>> {
        match self {
            Self::Retained(trace) => Some(trace),
            Self::Unavailable => None,
        }
    }
}

/// `2^n` if it fits into a `u64`.
fn universe_len(n: usize) -> Option<u64> {
    (n < 64).then(|| 1u64 << n)
}

/// Everything gathered by one sweep over the universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulation {
    pub distribution: Distribution,
    pub sample: Vec<String>,
    /// Ones-count of every string in emission order; `None` for large universes.
    pub ones: Option<Vec<u16>>,
}

/// Sweeps the universe of strings of length `n` once.
///
/// Sampled strings are handed to `sink` as they are produced; a sink error aborts the
/// sweep and is propagated.
pub fn accumulate<S: SampleSink + ?Sized>(n: usize, config: &RunConfig, sink: &mut S) -> Result<Accumulation> {
    let mut producer = BinaryStrings::new(n);
    let mut distribution = Distribution::new(n);
    let mut window = SampleWindow::new(config.sample_size);
    let mut trace = OnesTrace::select(n, config.retain_limit);
    let report_progress = n > config.progress_min_n && config.progress_interval > 0;

    debug!(
        "Sweeping n={} (sample half-size {}, ones trace {})",
        n,
        config.sample_size,
        if trace.is_retained() { "retained" } else { "unavailable" }
    );

    while let Some(word) = producer.advance() {
        // Nothing recorded yet for this word, so the running total is its emission index.
        let index = distribution.total();
        if window.selects(word) {
            let text = word.to_string();
            sink.sample(index, &text)?;
            window.push(text);
        }

        let ones = word.ones();
        distribution.record(ones);
        trace.record(ones);

        if report_progress && distribution.total() % config.progress_interval == 0 {
            info!("Processed {} strings...", distribution.total());
        }
    }

    debug_assert!(distribution.is_complete());
    let sample = window.into_entries();
    debug!(
        "Sweep done: {} strings, {} sampled",
        distribution.total(),
        sample.len()
    );

    Ok(Accumulation {
        distribution,
        sample,
        ones: trace.into_option(),
    })
}
