//! Error types for point evaluation.

use gt_core::error::GtError;
use gt_mixture::MixtureError;
use thiserror::Error;

/// Errors that can occur while configuring or running evaluators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Setup-time problem: bad species constants, count mismatch, index out of range.
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    /// Non-positive or non-finite input fed to a formula that requires it.
    #[error("Numerical error: {what} (value={value})")]
    Numerical { what: &'static str, value: f64 },

    /// Evaluator used out of order (e.g. properties read before refresh).
    #[error("State error: {what}")]
    State { what: &'static str },

    /// Configuration file could not be read or parsed.
    #[error("Config file error: {message}")]
    ConfigFile { message: String },
}

pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    pub(crate) fn config(what: impl Into<String>) -> Self {
        EvalError::Configuration { what: what.into() }
    }
}

impl From<MixtureError> for EvalError {
    fn from(e: MixtureError) -> Self {
        match e {
            MixtureError::Configuration { what } => EvalError::Configuration { what },
            MixtureError::Numerical { what, value } => EvalError::Numerical { what, value },
        }
    }
}

impl From<serde_yaml::Error> for EvalError {
    fn from(e: serde_yaml::Error) -> Self {
        EvalError::ConfigFile {
            message: e.to_string(),
        }
    }
}

impl From<std::io::Error> for EvalError {
    fn from(e: std::io::Error) -> Self {
        EvalError::ConfigFile {
            message: e.to_string(),
        }
    }
}

impl From<EvalError> for GtError {
    fn from(e: EvalError) -> Self {
        match e {
            EvalError::Configuration { what } => GtError::InvalidArg { what },
            EvalError::Numerical { what, value } => GtError::OutOfDomain { what, value },
            EvalError::State { what } => GtError::Invariant { what },
            EvalError::ConfigFile { message } => GtError::InvalidArg { what: message },
        }
    }
}
