use thiserror::Error;

pub type GtResult<T> = Result<T, GtError>;

/// Workspace-level error. Crate errors convert into it with `From`.
#[derive(Error, Debug)]
pub enum GtError {
    /// A value is NaN, infinite or outside the domain of a gas-law formula.
    #[error("Value out of domain for {what}: {value}")]
    OutOfDomain { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    /// An evaluator or model was used in a way its state does not allow.
    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
