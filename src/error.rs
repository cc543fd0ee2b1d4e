//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and image errors, and provides the `ConfigError`
//! taxonomy for parameter validation failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input error: {0}")]
    Input(#[from] crate::io::InputError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("preview encode error: {0}")]
    Encode(String),
}

/// Validation failures for pipeline parameters and source geometry.
/// Raised before any output file is created.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("record budget must be greater than 0")]
    ZeroBudget,

    #[error("raster has zero area: {width}x{height}")]
    EmptyRaster { width: usize, height: usize },
}

impl Error {
    pub fn encode<E: std::fmt::Display>(e: E) -> Self {
        Error::Encode(e.to_string())
    }
}
