use crate::types::{Amount, Month};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Invalid configuration: {invariant}")]
    Configuration { invariant: &'static str },

    #[error(
        "Target {target:.2} not reachable: balance {balance:.2} after {months} months"
    )]
    NonConvergence {
        months: Month,
        balance: Amount,
        target: Amount,
    },

    #[error("Chart series length mismatch: expected {expected}, got {actual}")]
    ChartLength { expected: usize, actual: usize },

    #[error("Cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProjectionError {
    pub fn config(invariant: &'static str) -> Self {
        Self::Configuration { invariant }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;
