use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Record budget must be greater than 0, got: {budget}")]
    ZeroBudget { budget: usize },

    #[error("Cannot read params file {path:?}: {source}")]
    ParamsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot parse params file {path:?}: {source}")]
    ParamsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
