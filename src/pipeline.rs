//! One analysis run: sweep, artifact, charts.

use std::path::PathBuf;
use std::time::Instant;

use log::debug;

use crate::accumulator::{accumulate, Distribution};
use crate::chart;
use crate::config::RunConfig;
use crate::error::Result;
use crate::writer::{artifact_path, ArtifactWriter};

/// Which charts to request for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSelection {
    /// Only the histogram bar chart.
    DistributionOnly,
    /// The histogram plus the per-string charts, when the ones sequence was retained.
    Detailed,
}

/// Result of [`analyze`].
#[derive(Debug, Clone)]
pub struct Report {
    pub n: usize,
    pub distribution: Distribution,
    pub sample: Vec<String>,
    pub ones: Option<Vec<u16>>,
    /// Path of the text artifact.
    pub artifact: PathBuf,
}

/// Sweeps the universe for `n` and writes `cadenas_binarias_n{n}.txt` into the output directory.
///
/// The sample is streamed to the file during the sweep; the statistics are appended
/// at the end. Any I/O failure aborts the run.
pub fn analyze(n: usize, config: &RunConfig) -> Result<Report> {
    let time_total = Instant::now();
    let artifact = artifact_path(&config.output_dir, n);

    let mut writer = ArtifactWriter::create(&artifact, n)?;
    let accumulation = accumulate(n, config, &mut writer)?;
    let lines = writer.lines();
    writer.finish(&accumulation.distribution)?;

    debug!(
        "Analysis of n={} done in {:.3} s ({} sample lines in {})",
        n,
        time_total.elapsed().as_secs_f64(),
        lines,
        artifact.display()
    );

    Ok(Report {
        n,
        distribution: accumulation.distribution,
        sample: accumulation.sample,
        ones: accumulation.ones,
        artifact,
    })
}

/// Renders the selected charts from the in-memory report.
///
/// Returns the written paths; empty when charts are disabled in `config`.
pub fn render_charts(report: &Report, config: &RunConfig, selection: ChartSelection) -> Result<Vec<PathBuf>> {
    if !config.charts {
        debug!("Charts disabled, skipping");
        return Ok(Vec::new());
    }
    let ones = match selection {
        ChartSelection::Detailed => report.ones.as_deref(),
        ChartSelection::DistributionOnly => None,
    };
    let prefix = chart::chart_prefix(&config.output_dir, report.n);
    chart::render(&prefix, report.n, &report.distribution, ones)
}
