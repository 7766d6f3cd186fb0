use std::io;
use std::path::PathBuf;

use clap::Parser;

use binary_universe::chart;
use binary_universe::config::RunConfig;
use binary_universe::driver::Driver;
use binary_universe::error::Error;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Analyse this string length once and exit, instead of showing the menu.
    #[arg(long, value_name = "INT")]
    n: Option<usize>,

    /// Number of strings kept from each end of the universe in the text artifact.
    #[arg(long, value_name = "INT", default_value = "100")]
    sample_size: u64,

    /// Directory for the text artifact and the charts.
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Do not render charts.
    #[arg(long)]
    no_charts: bool,

    /// Increase logging verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    log::debug!("args = {:?}", args);

    if !chart::AVAILABLE && !args.no_charts {
        println!();
        println!("¡Advertencia! El soporte de gráficas no está compilado. Las gráficas no se generarán.");
        println!("Por favor recompile con: cargo build --features charts");
        println!();
    }

    let config = RunConfig {
        sample_size: args.sample_size,
        output_dir: args.output_dir,
        charts: !args.no_charts,
        ..RunConfig::default()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut driver = Driver::new(stdin.lock(), stdout.lock(), config);

    match args.n {
        Some(n) if n > driver.config().max_n => {
            return Err(Error::InvalidLength {
                n,
                max: driver.config().max_n,
            }
            .into());
        }
        Some(n) => {
            driver.run_once(n)?;
        }
        None => driver.run()?,
    }

    Ok(())
}
