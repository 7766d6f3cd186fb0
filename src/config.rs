//! Run configuration.

use std::path::PathBuf;

/// Parameters of an analysis run.
///
/// Use `RunConfig::default()` for the standard settings; the binary overrides a few
/// of them from the command line.
///
/// # Examples
///
/// ```
/// use binary_universe::config::RunConfig;
///
/// let config = RunConfig {
///     sample_size: 10,
///     charts: false,
///     ..RunConfig::default()
/// };
/// assert_eq!(config.retain_limit, 1_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Half-size M of the sample window: first M and last M strings are kept (default: 100)
    pub sample_size: u64,
    /// The per-string ones sequence is kept only if `2^n <= retain_limit` (default: 1,000,000)
    pub retain_limit: u64,
    /// Progress notices are emitted only for `n > progress_min_n` (default: 24)
    pub progress_min_n: usize,
    /// Strings between two progress notices (default: 10,000,000)
    pub progress_interval: u64,
    /// Length analysed by the automatic mode (default: 29)
    pub auto_n: usize,
    /// Largest length accepted in manual mode (default: 1000)
    pub max_n: usize,
    /// Manual runs with `n <= detailed_chart_max_n` request all charts (default: 20)
    pub detailed_chart_max_n: usize,
    /// Directory receiving the text artifact and the charts (default: ".")
    pub output_dir: PathBuf,
    /// Whether charts are rendered at all (default: true)
    pub charts: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sample_size: 100,
            retain_limit: 1_000_000,
            progress_min_n: 24,
            progress_interval: 10_000_000,
            auto_n: 29,
            max_n: 1000,
            detailed_chart_max_n: 20,
            output_dir: PathBuf::from("."),
            charts: true,
        }
    }
}
