//! Extractor trait shared by every per-point output.

use crate::error::EvalResult;
use crate::evaluator::GasPropertyEvaluator;
use crate::point::FieldPoint;

/// One scalar output per evaluation point, read from the shared property set.
///
/// Implementors hold only setup-time parameters (species index, geometry,
/// correlation choice). The mutable evaluator is passed in per call, so an
/// extractor can be shared across threads while each thread owns its own
/// [`GasPropertyEvaluator`].
pub trait PointEvaluator: Send + Sync {
    /// Short label for logs and tabular output.
    fn label(&self) -> String;

    /// Bind `point`, refresh the mixture state and extract this output.
    fn evaluate(&self, gas: &mut GasPropertyEvaluator, point: &FieldPoint<'_>)
    -> EvalResult<f64>;
}

/// Setup-time species index check shared by the per-species extractors.
pub(crate) fn check_species_index(index: usize, species_count: usize) -> EvalResult<()> {
    if index >= species_count {
        return Err(crate::error::EvalError::config(format!(
            "species index {index} out of range ({species_count} species configured)"
        )));
    }
    Ok(())
}
