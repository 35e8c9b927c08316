//! Molecular diffusivity of one species.

use crate::error::{EvalError, EvalResult};
use crate::evaluator::GasPropertyEvaluator;
use crate::point::FieldPoint;
use crate::traits::{PointEvaluator, check_species_index};

/// Outputs the mixture-averaged molecular diffusivity [m²/s] of one species.
///
/// Degenerate points (zero total concentration) evaluate to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesDiffusionEvaluator {
    index: usize,
}

impl SpeciesDiffusionEvaluator {
    /// Fails with a configuration error unless `index < species_count`.
    pub fn new(index: usize, species_count: usize) -> EvalResult<Self> {
        check_species_index(index, species_count)?;
        Ok(Self { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl PointEvaluator for SpeciesDiffusionEvaluator {
    fn label(&self) -> String {
        format!("diffusion[{}]", self.index)
    }

    fn evaluate(
        &self,
        gas: &mut GasPropertyEvaluator,
        point: &FieldPoint<'_>,
    ) -> EvalResult<f64> {
        gas.bind(point)?;
        let props = gas.refresh()?;
        props
            .species_molecular_diffusivity(self.index)
            .ok_or_else(|| {
                EvalError::config(format!(
                    "species index {} not present in evaluator with {} species",
                    self.index,
                    props.species_count()
                ))
            })
    }
}
