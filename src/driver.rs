//! Interactive text menu.
//!
//! The [`Driver`] reads answers line by line from any [`BufRead`] and writes prompts
//! and reports to any [`Write`], so the same state machine serves the terminal and
//! the tests.
//!
//! ```text
//! MENU PRINCIPAL
//! 1. Modo automático (n=29)
//! 2. Modo manual (elige n)
//! 3. Salir
//! ```
//!
//! Bad input (unknown menu option, non-numeric or out-of-range length) is reported
//! and asked again. End of input behaves like choosing to exit. Failures while
//! writing artifacts or charts are propagated to the caller.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use std::path::PathBuf;

use log::debug;

use crate::config::RunConfig;
use crate::error::Result;
use crate::pipeline::{analyze, render_charts, ChartSelection, Report};

/// Top-level menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Automatic,
    Manual,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Automatic),
            "2" => Some(MenuChoice::Manual),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// An answer to the length prompt of the manual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthInput {
    /// `0`: leave the manual mode
    Exit,
    /// A length in `1..=max`
    Length(usize),
    /// Not an integer
    NotANumber,
    /// An integer outside `0..=max`
    OutOfRange,
}

/// Interprets an answer to the length prompt.
pub fn parse_length(input: &str, max: usize) -> LengthInput {
    match input.trim().parse::<i64>() {
        Ok(0) => LengthInput::Exit,
        Ok(n) if n > 0 && (n as u64) <= max as u64 => LengthInput::Length(n as usize),
        Ok(_) => LengthInput::OutOfRange,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => LengthInput::OutOfRange,
            _ => LengthInput::NotANumber,
        },
    }
}

pub struct Driver<R, W> {
    input: R,
    output: W,
    config: RunConfig,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(input: R, output: W, config: RunConfig) -> Self {
        Self { input, output, config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Consumes the driver and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the main menu until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "UNIVERSO DE CADENAS BINARIAS (Σ^n)")?;
        writeln!(self.output, "=================================")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "MENU PRINCIPAL")?;
            writeln!(self.output, "1. Modo automático (n={})", self.config.auto_n)?;
            writeln!(self.output, "2. Modo manual (elige n)")?;
            writeln!(self.output, "3. Salir")?;

            let Some(line) = self.prompt("Seleccione una opción (1-3): ")? else {
                debug!("Input closed, leaving menu");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Automatic) => self.automatic()?,
                Some(MenuChoice::Manual) => self.manual()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "¡Hasta luego!")?;
                    break;
                }
                None => {
                    writeln!(self.output, "Opción no válida. Por favor seleccione 1, 2 o 3.")?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Analyses the fixed automatic length and renders the distribution chart.
    pub fn automatic(&mut self) -> Result<()> {
        let n = self.config.auto_n;
        writeln!(self.output)?;
        writeln!(self.output, "Modo automático: Analizando n={} (esto puede tomar tiempo)...", n)?;
        writeln!(self.output, "Generando y guardando cadenas (muestra) y estadísticas...")?;
        self.output.flush()?;

        let report = analyze(n, &self.config)?;

        let charts = if self.config.charts {
            writeln!(self.output, "Generando gráficas...")?;
            self.output.flush()?;
            render_charts(&report, &self.config, ChartSelection::DistributionOnly)?
        } else {
            Vec::new()
        };

        writeln!(self.output, "¡Análisis completado! Resultados guardados en:")?;
        writeln!(self.output, "- Archivo de texto: {}", report.artifact.display())?;
        if !charts.is_empty() {
            writeln!(self.output, "- Gráficas: {}", join_paths(&charts, ", "))?;
        }
        Ok(())
    }

    /// Asks for lengths until `0` (or end of input) and analyses each accepted one.
    pub fn manual(&mut self) -> Result<()> {
        loop {
            let question = format!("\nLongitud de cadenas binarias (0-{}, 0 para salir): ", self.config.max_n);
            let Some(line) = self.prompt(&question)? else {
                return Ok(());
            };

            match parse_length(&line, self.config.max_n) {
                LengthInput::Exit => return Ok(()),
                LengthInput::Length(n) => {
                    self.run_once(n)?;
                }
                LengthInput::OutOfRange => {
                    writeln!(
                        self.output,
                        "Por favor ingrese un valor entre 0 y {}.",
                        self.config.max_n
                    )?;
                }
                LengthInput::NotANumber => {
                    writeln!(self.output, "Entrada inválida. Por favor ingrese un número.")?;
                }
            }
        }
    }

    /// Analyses one length the way the manual mode does: all charts for small `n`,
    /// only the distribution otherwise.
    pub fn run_once(&mut self, n: usize) -> Result<Report> {
        writeln!(self.output, "Generando y guardando cadenas para n={}...", n)?;
        self.output.flush()?;

        let report = analyze(n, &self.config)?;

        if self.config.charts {
            let detailed = n <= self.config.detailed_chart_max_n;
            if detailed {
                writeln!(self.output, "Generando gráficas detalladas...")?;
            } else {
                writeln!(
                    self.output,
                    "Generando gráfica de distribución (para n>{} sólo se genera esta gráfica)...",
                    self.config.detailed_chart_max_n
                )?;
            }
            self.output.flush()?;

            let selection = if detailed {
                ChartSelection::Detailed
            } else {
                ChartSelection::DistributionOnly
            };
            let charts = render_charts(&report, &self.config, selection)?;
            if charts.len() == 1 {
                writeln!(self.output, "Gráfica generada: {}", join_paths(&charts, ""))?;
            } else {
                writeln!(self.output, "Gráficas generadas: {}", join_paths(&charts, ", "))?;
            }
        } else {
            writeln!(self.output, "Gráficas omitidas.")?;
        }

        writeln!(
            self.output,
            "¡Análisis completado! Resultados guardados en {}",
            report.artifact.display()
        )?;
        Ok(report)
    }

    /// Prints `question` and reads one line; `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn join_paths(paths: &[PathBuf], separator: &str) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use test_log::test;

    use super::*;

    fn run_session(input: &str, config: RunConfig) -> String {
        let mut driver = Driver::new(Cursor::new(input.as_bytes()), Vec::new(), config);
        driver.run().unwrap();
        String::from_utf8(driver.into_output()).unwrap()
    }

    fn config_in(dir: &Path) -> RunConfig {
        RunConfig {
            output_dir: dir.to_path_buf(),
            charts: false,
            ..RunConfig::default()
        }
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("0\n", 1000), LengthInput::Exit);
        assert_eq!(parse_length(" 17 \n", 1000), LengthInput::Length(17));
        assert_eq!(parse_length("1000", 1000), LengthInput::Length(1000));
        assert_eq!(parse_length("1001", 1000), LengthInput::OutOfRange);
        assert_eq!(parse_length("-1", 1000), LengthInput::OutOfRange);
        assert_eq!(parse_length("99999999999999999999999", 1000), LengthInput::OutOfRange);
        assert_eq!(parse_length("abc", 1000), LengthInput::NotANumber);
        assert_eq!(parse_length("", 1000), LengthInput::NotANumber);
        assert_eq!(parse_length("2.5", 1000), LengthInput::NotANumber);
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(MenuChoice::parse("1\n"), Some(MenuChoice::Automatic));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::Manual));
        assert_eq!(MenuChoice::parse("3\r\n"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse("salir"), None);
    }

    #[test]
    fn test_exit() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_session("3\n", config_in(dir.path()));
        assert!(out.starts_with("UNIVERSO DE CADENAS BINARIAS (Σ^n)\n"));
        assert!(out.contains("MENU PRINCIPAL"));
        assert!(out.ends_with("¡Hasta luego!\n"));
    }

    #[test]
    fn test_end_of_input_terminates() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_session("", config_in(dir.path()));
        assert!(!out.contains("¡Hasta luego!"));
        assert_eq!(out.matches("MENU PRINCIPAL").count(), 1);
    }

    #[test]
    fn test_invalid_option_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_session("9\nx\n3\n", config_in(dir.path()));
        assert_eq!(out.matches("Opción no válida").count(), 2);
        assert_eq!(out.matches("MENU PRINCIPAL").count(), 3);
    }

    #[test]
    fn test_manual_non_numeric_then_exit() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_session("2\nabc\n0\n3\n", config_in(dir.path()));
        assert!(out.contains("Entrada inválida. Por favor ingrese un número."));
        assert!(out.ends_with("¡Hasta luego!\n"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_manual_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_session("2\n1001\n-5\n0\n3\n", config_in(dir.path()));
        assert_eq!(out.matches("Por favor ingrese un valor entre 0 y 1000.").count(), 2);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_manual_runs_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_session("2\n3\n5\n0\n3\n", config_in(dir.path()));
        assert!(out.contains("Generando y guardando cadenas para n=3..."));
        assert!(out.contains("Generando y guardando cadenas para n=5..."));
        assert!(out.contains("Gráficas omitidas."));
        assert!(dir.path().join("cadenas_binarias_n3.txt").exists());
        assert!(dir.path().join("cadenas_binarias_n5.txt").exists());
    }

    #[test]
    fn test_manual_end_of_input_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_session("2\n4\n", config_in(dir.path()));
        assert!(dir.path().join("cadenas_binarias_n4.txt").exists());
        assert_eq!(out.matches("MENU PRINCIPAL").count(), 2);
    }

    #[test]
    fn test_automatic_mode() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            auto_n: 6,
            ..config_in(dir.path())
        };
        let out = run_session("1\n3\n", config);
        assert!(out.contains("1. Modo automático (n=6)"));
        assert!(out.contains("Modo automático: Analizando n=6"));
        assert!(out.contains("- Archivo de texto: "));
        let text = std::fs::read_to_string(dir.path().join("cadenas_binarias_n6.txt")).unwrap();
        assert!(text.contains("Total de cadenas: 64\n"));
    }

    #[test]
    fn test_run_once_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut driver = Driver::new(Cursor::new(&b""[..]), Vec::new(), config_in(dir.path()));
        let report = driver.run_once(3).unwrap();
        assert_eq!(report.distribution.counts(), &[1, 3, 3, 1]);
        assert_eq!(report.sample.len(), 8);
        assert!(report.ones.is_some());
    }

    #[cfg(feature = "charts")]
    #[test]
    fn test_manual_chart_selection_by_length() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            charts: true,
            ..config_in(dir.path())
        };
        let out = run_session("2\n4\n20\n0\n3\n", config);

        assert_eq!(out.matches("Generando gráficas detalladas...").count(), 2);
        assert!(out.contains("Gráficas generadas: "));
        assert!(dir.path().join("resultados_n4_lineal.png").exists());
        assert!(dir.path().join("resultados_n4_logaritmica.png").exists());
        assert!(dir.path().join("resultados_n4_distribucion.png").exists());

        // n = 20 asks for the detailed charts, but 2^20 strings are too many to keep a ones trace.
        assert!(out.contains("Gráfica generada: "));
        assert!(dir.path().join("resultados_n20_distribucion.png").exists());
        assert!(!dir.path().join("resultados_n20_lineal.png").exists());
        assert!(!dir.path().join("resultados_n20_logaritmica.png").exists());
    }
}
