use thiserror::Error;

/// Errors raised while producing artifacts.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render chart: {0}")]
    Chart(String),

    #[error("Chart rendering is not available (built without the `charts` feature)")]
    ChartsUnavailable,

    #[error("String length {n} is outside the accepted range 0..={max}")]
    InvalidLength { n: usize, max: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
