//! PNG charts of the accumulated statistics.
//!
//! Up to three charts are produced for a run, all named after a common prefix:
//!
//! - `{prefix}_lineal.png`: ones-count of every string against its index,
//! - `{prefix}_logaritmica.png`: `ln(ones + 1)` against the index,
//! - `{prefix}_distribucion.png`: bar chart of the ones-count histogram.
//!
//! The first two need the per-string ones sequence and are skipped without it.
//! Existing files are overwritten.
//!
//! Rendering uses [`plotters`] with the bitmap backend and is compiled only with the
//! `charts` feature; see [`AVAILABLE`].

use std::path::{Path, PathBuf};

use crate::accumulator::Distribution;
use crate::error::Result;

/// Whether chart rendering was compiled in.
pub const AVAILABLE: bool = cfg!(feature = "charts");

/// Chart resolution in pixels.
const SIZE: (u32, u32) = (1500, 700);

/// The charts a run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Linear,
    Logarithmic,
    Distribution,
}

impl ChartKind {
    pub fn suffix(self) -> &'static str {
        match self {
            ChartKind::Linear => "lineal",
            ChartKind::Logarithmic => "logaritmica",
            ChartKind::Distribution => "distribucion",
        }
    }
}

/// Common prefix of the charts for strings of length `n`: `<dir>/resultados_n{n}`.
pub fn chart_prefix(dir: &Path, n: usize) -> PathBuf {
    dir.join(format!("resultados_n{}", n))
}

/// Path of one chart: `{prefix}_{suffix}.png`.
pub fn chart_path(prefix: &Path, kind: ChartKind) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!("_{}.png", kind.suffix()));
    PathBuf::from(name)
}

/// Renders the charts for a run and returns the paths written, in the order
/// linear, logarithmic, distribution.
pub fn render(prefix: &Path, n: usize, distribution: &Distribution, ones: Option<&[u16]>) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if let Some(ones) = ones {
        let path = chart_path(prefix, ChartKind::Linear);
        let points = ones.iter().enumerate().map(|(i, &k)| (i as f64, k as f64));
        backend::draw_trace(
            &path,
            &format!("Número de unos por cadena (n={})", n),
            "Número de unos",
            points.collect(),
        )?;
        written.push(path);

        let path = chart_path(prefix, ChartKind::Logarithmic);
        let points = ones.iter().enumerate().map(|(i, &k)| (i as f64, (k as f64 + 1.0).ln()));
        backend::draw_trace(
            &path,
            &format!("Logaritmo del número de unos por cadena (n={})", n),
            "ln(Número de unos + 1)",
            points.collect(),
        )?;
        written.push(path);
    }

    let path = chart_path(prefix, ChartKind::Distribution);
    backend::draw_histogram(
        &path,
        &format!("Distribución teórica de unos (n={})", n),
        distribution.counts(),
    )?;
    written.push(path);

    log::debug!("Rendered {} chart(s) with prefix {}", written.len(), prefix.display());
    Ok(written)
}

#[cfg(feature = "charts")]
mod backend {
    use std::path::Path;

    use plotters::prelude::*;

    use super::SIZE;
    use crate::error::{Error, Result};

    fn chart_err(e: impl std::fmt::Display) -> Error {
        Error::Chart(e.to_string())
    }

    /// Line plot of `(index, value)` points.
    pub fn draw_trace(path: &Path, title: &str, y_desc: &str, points: Vec<(f64, f64)>) -> Result<()> {
        let root = BitMapBackend::new(path, SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let x_max = (points.len().saturating_sub(1) as f64).max(1.0);
        let y_max = points.iter().map(|&(_, y)| y).fold(0.0f64, f64::max).max(1.0) * 1.05;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Índice de cadena binaria")
            .y_desc(y_desc)
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(LineSeries::new(points, BLUE.mix(0.5)))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        Ok(())
    }

    /// Bar chart with one bar per ones-count.
    pub fn draw_histogram(path: &Path, title: &str, counts: &[u64]) -> Result<()> {
        let root = BitMapBackend::new(path, SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let x_max = counts.len() as f64 - 0.5;
        let y_max = counts.iter().copied().max().unwrap_or(0).max(1) as f64 * 1.05;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(110)
            .build_cartesian_2d(-0.5..x_max, 0.0..y_max)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Número de unos")
            .y_desc("Cantidad de cadenas")
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(counts.iter().enumerate().map(|(k, &count)| {
                let k = k as f64;
                Rectangle::new([(k - 0.4, 0.0), (k + 0.4, count as f64)], BLUE.mix(0.7).filled())
            }))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        Ok(())
    }
}

#[cfg(not(feature = "charts"))]
mod backend {
    use std::path::Path;

    use crate::error::{Error, Result};

    pub fn draw_trace(_path: &Path, _title: &str, _y_desc: &str, _points: Vec<(f64, f64)>) -> Result<()> {
        Err(Error::ChartsUnavailable)
    }

    pub fn draw_histogram(_path: &Path, _title: &str, _counts: &[u64]) -> Result<()> {
        Err(Error::ChartsUnavailable)
    }
}
