//! Evaluation of many independent points.
//!
//! Every worker thread gets its own [`GasPropertyEvaluator`] via
//! [`GasPropertyEvaluator::fresh_instance`]; instances are never shared
//! between concurrently evaluated points.

use crate::error::EvalResult;
use crate::evaluator::GasPropertyEvaluator;
use crate::point::FieldPoint;
use crate::traits::PointEvaluator;
use rayon::prelude::*;
use tracing::debug;

/// Evaluate `points` in parallel, one result per point in input order.
///
/// A failure at one point is reported in its slot and does not affect others.
pub fn evaluate_batch<E>(
    evaluator: &E,
    template: &GasPropertyEvaluator,
    points: &[FieldPoint<'_>],
) -> Vec<EvalResult<f64>>
where
    E: PointEvaluator + ?Sized,
{
    debug!(
        output = %evaluator.label(),
        points = points.len(),
        "evaluating batch"
    );
    points
        .par_iter()
        .map_init(
            || template.fresh_instance(),
            |gas, point| evaluator.evaluate(gas, point),
        )
        .collect()
}

/// Single-threaded counterpart of [`evaluate_batch`], reusing one instance.
pub fn evaluate_batch_sequential<E>(
    evaluator: &E,
    template: &GasPropertyEvaluator,
    points: &[FieldPoint<'_>],
) -> Vec<EvalResult<f64>>
where
    E: PointEvaluator + ?Sized,
{
    let mut gas = template.fresh_instance();
    points
        .iter()
        .map(|point| evaluator.evaluate(&mut gas, point))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffusion::SpeciesDiffusionEvaluator;
    use crate::dispersion::{DispersionCorrelation, SpeciesDispersionEvaluator};
    use crate::error::EvalError;
    use gt_core::units::{k, m, mps, pa};
    use gt_mixture::{GasMixtureModel, KnownGas};

    fn template() -> GasPropertyEvaluator {
        GasPropertyEvaluator::new(
            GasMixtureModel::configure(vec![
                KnownGas::N2.constants(),
                KnownGas::NH3.constants(),
                KnownGas::H2O.constants(),
            ])
            .unwrap(),
        )
    }

    fn concentrations() -> Vec<[f64; 3]> {
        (0..64)
            .map(|i| {
                let x = i as f64 / 64.0;
                [0.03 * (1.0 - x), 0.001 + 0.002 * x, 0.002]
            })
            .collect()
    }

    #[test]
    fn parallel_matches_sequential_in_order() {
        let conc = concentrations();
        let points: Vec<FieldPoint<'_>> = conc
            .iter()
            .enumerate()
            .map(|(i, c)| {
                FieldPoint::new(c, pa(101_325.0), k(400.0 + 5.0 * i as f64))
                    .with_velocity(mps(0.5), mps(0.0), mps(0.0))
                    .with_char_length(m(1.0e-3))
            })
            .collect();

        let dispersion =
            SpeciesDispersionEvaluator::new(1, 3, DispersionCorrelation::TaylorAris, None).unwrap();
        let parallel = evaluate_batch(&dispersion, &template(), &points);
        let sequential = evaluate_batch_sequential(&dispersion, &template(), &points);
        assert_eq!(parallel, sequential);
        assert!(parallel.iter().all(|r| r.is_ok()));
    }

    #[test]
    fn failed_points_stay_in_their_slot() {
        let good = [0.03, 0.001, 0.002];
        let points = vec![
            FieldPoint::new(&good, pa(101_325.0), k(300.0)),
            FieldPoint::new(&good, pa(101_325.0), k(0.0)),
            FieldPoint::new(&good, pa(101_325.0), k(300.0)),
        ];
        let diffusion = SpeciesDiffusionEvaluator::new(0, 3).unwrap();
        let results = evaluate_batch(&diffusion, &template(), &points);

        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(EvalError::Numerical { .. })));
        assert_eq!(results[0], results[2]);
    }

    #[test]
    fn works_through_trait_objects() {
        let good = [0.03, 0.001, 0.002];
        let points = vec![FieldPoint::new(&good, pa(101_325.0), k(300.0))];
        let boxed: Box<dyn PointEvaluator> = Box::new(SpeciesDiffusionEvaluator::new(2, 3).unwrap());
        let results = evaluate_batch(boxed.as_ref(), &template(), &points);
        assert_eq!(results.len(), 1);
        assert!(results[0].as_ref().is_ok_and(|d| *d > 0.0));
    }
}
