//! Gas mixture errors.

use gt_core::GtError;
use thiserror::Error;

/// Result type for mixture operations.
pub type MixtureResult<T> = Result<T, MixtureError>;

/// Errors that can occur while configuring or evaluating a gas mixture.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixtureError {
    /// Malformed or missing species constants, length mismatches, bad species index.
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    /// A formula received a value outside its domain (non-positive T or P, NaN, ...).
    #[error("Numerical error: {what} (value={value})")]
    Numerical { what: &'static str, value: f64 },
}

impl MixtureError {
    pub(crate) fn config(what: impl Into<String>) -> Self {
        MixtureError::Configuration { what: what.into() }
    }
}

/// Domain-check failures from `gt_core` keep their value and label.
impl From<GtError> for MixtureError {
    fn from(err: GtError) -> Self {
        match err {
            GtError::OutOfDomain { what, value } => MixtureError::Numerical { what, value },
            GtError::InvalidArg { what } => MixtureError::Configuration { what },
            GtError::Invariant { what } => MixtureError::Configuration {
                what: what.to_string(),
            },
        }
    }
}
