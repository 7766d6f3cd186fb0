//! Text artifact with the sample window and the final statistics.
//!
//! The sample is streamed while the universe is swept, so the artifact is written in
//! two phases: [`ArtifactWriter`] opens the listing and receives sample lines as a
//! [`SampleSink`], then [`ArtifactWriter::finish`] closes it and appends the
//! statistics block.
//!
//! # Format
//!
//! ```text
//! {
//!     '000',
//!     '001',
//!     ...
//! }
//!
//! /* Estadísticas completas para n=3 */
//! Total de cadenas: 8
//! Distribución de unos:
//!   - 0 unos: 1 cadenas (12.5000%)
//!   - 1 unos: 3 cadenas (37.5000%)
//!   ...
//! ```
//!
//! The bracketed listing is meant for human inspection only.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::accumulator::{Distribution, SampleSink};

/// Path of the artifact for strings of length `n`: `<dir>/cadenas_binarias_n{n}.txt`.
pub fn artifact_path(dir: &Path, n: usize) -> PathBuf {
    dir.join(format!("cadenas_binarias_n{}.txt", n))
}

/// Formats a percentage with four decimals, e.g. `12.5000%`.
pub fn format_percentage(percent: f64) -> String {
    format!("{:.4}%", percent)
}

/// Streaming writer of the text artifact.
pub struct ArtifactWriter<W: Write> {
    out: W,
    n: usize,
    lines: usize,
}

impl ArtifactWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path, n: usize) -> io::Result<Self> {
        debug!("Writing artifact to {}", path.display());
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), n)
    }
}

impl<W: Write> ArtifactWriter<W> {
    /// Starts the sample listing on `out`.
    pub fn new(mut out: W, n: usize) -> io::Result<Self> {
        writeln!(out, "{{")?;
        Ok(Self { out, n, lines: 0 })
    }

    /// Number of sample lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Appends one sample line.
    pub fn write_sample(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "    '{}',", text)?;
        self.lines += 1;
        Ok(())
    }

    /// Closes the listing, appends the statistics and flushes.
    ///
    /// Returns the underlying writer.
    pub fn finish(mut self, distribution: &Distribution) -> io::Result<W> {
        let total = distribution.total();
        writeln!(self.out, "}}")?;
        writeln!(self.out)?;
        writeln!(self.out, "/* Estadísticas completas para n={} */", self.n)?;
        writeln!(self.out, "Total de cadenas: {}", total)?;
        writeln!(self.out, "Distribución de unos:")?;
        for (ones, count) in distribution.iter() {
            writeln!(
                self.out,
                "  - {} unos: {} cadenas ({})",
                ones,
                count,
                format_percentage(distribution.percentage(ones))
            )?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> SampleSink for ArtifactWriter<W> {
    fn sample(&mut self, _index: u64, text: &str) -> io::Result<()> {
        self.write_sample(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::accumulate;
    use crate::config::RunConfig;

    fn render(n: usize, config: &RunConfig) -> String {
        let mut writer = ArtifactWriter::new(Vec::new(), n).unwrap();
        let acc = accumulate(n, config, &mut writer).unwrap();
        let bytes = writer.finish(&acc.distribution).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(12.5), "12.5000%");
        assert_eq!(format_percentage(100.0 / 3.0), "33.3333%");
        assert_eq!(format_percentage(100.0), "100.0000%");
        assert_eq!(format_percentage(0.0), "0.0000%");
    }

    #[test]
    fn test_artifact_n3() {
        let text = render(3, &RunConfig::default());
        let expected = "\
{
    '000',
    '001',
    '010',
    '011',
    '100',
    '101',
    '110',
    '111',
}

/* Estadísticas completas para n=3 */
Total de cadenas: 8
Distribución de unos:
  - 0 unos: 1 cadenas (12.5000%)
  - 1 unos: 3 cadenas (37.5000%)
  - 2 unos: 3 cadenas (37.5000%)
  - 3 unos: 1 cadenas (12.5000%)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_artifact_n0() {
        let text = render(0, &RunConfig::default());
        assert!(text.starts_with("{\n    '',\n}\n"));
        assert!(text.contains("Total de cadenas: 1\n"));
        assert!(text.contains("  - 0 unos: 1 cadenas (100.0000%)\n"));
    }

    #[test]
    fn test_artifact_sample_lines_bounded() {
        let config = RunConfig {
            sample_size: 5,
            ..RunConfig::default()
        };
        let mut writer = ArtifactWriter::new(Vec::new(), 12).unwrap();
        accumulate(12, &config, &mut writer).unwrap();
        assert_eq!(writer.lines(), 10);

        let text = render(12, &config);
        let sample_lines = text.lines().filter(|l| l.starts_with("    '")).count();
        assert_eq!(sample_lines, 10);
        assert!(text.contains("Total de cadenas: 4096\n"));
        assert!(text.contains("  - 6 unos: 924 cadenas (22.5586%)\n"));
    }

    #[test]
    fn test_artifact_path() {
        assert_eq!(
            artifact_path(Path::new("out"), 7),
            Path::new("out").join("cadenas_binarias_n7.txt")
        );
    }
}
