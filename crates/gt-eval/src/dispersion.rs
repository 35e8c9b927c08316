//! Axial dispersion of one species.

use crate::error::{EvalError, EvalResult};
use crate::evaluator::GasPropertyEvaluator;
use crate::point::FieldPoint;
use crate::traits::{PointEvaluator, check_species_index};
use gt_core::units::Length;
use serde::{Deserialize, Serialize};

/// Wall-effect coefficient of the packed-bed correlation.
const WALL_COEFFICIENT: f64 = 19.4;

/// Correlation turning molecular diffusivity into axial dispersion.
///
/// With `Pe = |v|·L/D_m`, where `L` is the characteristic length:
///
/// ```text
/// PackedBed:   D_ax = D_m·(1 + Pe·w/2),   w = 1 + 19.4·(L/d_c)²  (w = 1 without a column diameter)
/// TaylorAris:  D_ax = D_m·(1 + Pe²/192)
/// ```
///
/// Both reduce to `D_m` exactly at zero velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispersionCorrelation {
    /// Packed column, with optional wall correction from the column diameter
    #[default]
    PackedBed,
    /// Laminar flow in a straight channel (monolith)
    TaylorAris,
}

impl DispersionCorrelation {
    /// Name as written in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            DispersionCorrelation::PackedBed => "packed_bed",
            DispersionCorrelation::TaylorAris => "taylor_aris",
        }
    }

    /// Ratio D_ax/D_m for a given Péclet number and wall factor.
    fn enhancement(self, peclet: f64, wall_factor: f64) -> f64 {
        match self {
            DispersionCorrelation::PackedBed => 1.0 + 0.5 * peclet * wall_factor,
            DispersionCorrelation::TaylorAris => 1.0 + peclet * peclet / 192.0,
        }
    }
}

/// Outputs the axial dispersion coefficient [m²/s] of one species.
///
/// Degenerate points (zero total concentration) evaluate to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesDispersionEvaluator {
    index: usize,
    correlation: DispersionCorrelation,
    column_diameter_m: Option<f64>,
}

impl SpeciesDispersionEvaluator {
    /// Fails with a configuration error if `index` is out of range or the column
    /// diameter is not positive and finite.
    pub fn new(
        index: usize,
        species_count: usize,
        correlation: DispersionCorrelation,
        column_diameter: Option<Length>,
    ) -> EvalResult<Self> {
        check_species_index(index, species_count)?;
        let column_diameter_m = match column_diameter {
            Some(d) if !d.value.is_finite() || d.value <= 0.0 => {
                return Err(EvalError::config(format!(
                    "column diameter must be positive and finite (got {} m)",
                    d.value
                )));
            }
            Some(d) => Some(d.value),
            None => None,
        };
        Ok(Self {
            index,
            correlation,
            column_diameter_m,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn correlation(&self) -> DispersionCorrelation {
        self.correlation
    }

    fn wall_factor(&self, char_length_m: f64) -> f64 {
        match self.column_diameter_m {
            Some(d_c) => {
                let ratio = char_length_m / d_c;
                1.0 + WALL_COEFFICIENT * ratio * ratio
            }
            None => 1.0,
        }
    }
}

impl PointEvaluator for SpeciesDispersionEvaluator {
    fn label(&self) -> String {
        format!("dispersion.{}[{}]", self.correlation.as_str(), self.index)
    }

    fn evaluate(
        &self,
        gas: &mut GasPropertyEvaluator,
        point: &FieldPoint<'_>,
    ) -> EvalResult<f64> {
        gas.bind(point)?;
        let props = gas.refresh()?;
        let (d_m, peclet) = match (
            props.species_molecular_diffusivity(self.index),
            props.peclet(self.index),
        ) {
            (Some(d), Some(pe)) => (d, pe),
            _ => {
                return Err(EvalError::config(format!(
                    "species index {} not present in evaluator with {} species",
                    self.index,
                    props.species_count()
                )));
            }
        };

        if props.is_degenerate() {
            return Ok(0.0);
        }

        let wall = self.wall_factor(props.char_length_m());
        let d_ax = d_m * self.correlation.enhancement(peclet, wall);
        if !d_ax.is_finite() {
            return Err(EvalError::Numerical {
                what: "axial dispersion",
                value: d_ax,
            });
        }
        Ok(d_ax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffusion::SpeciesDiffusionEvaluator;
    use gt_core::numeric::{Tolerances, nearly_equal};
    use gt_core::units::{k, m, mps, pa};
    use gt_mixture::{GasMixtureModel, KnownGas};

    fn gas() -> GasPropertyEvaluator {
        GasPropertyEvaluator::new(
            GasMixtureModel::configure(vec![
                KnownGas::N2.constants(),
                KnownGas::O2.constants(),
                KnownGas::CO.constants(),
            ])
            .unwrap(),
        )
    }

    const CONC: [f64; 3] = [0.030, 0.004, 0.0005];

    #[test]
    fn rejects_bad_setup() {
        let err =
            SpeciesDispersionEvaluator::new(3, 3, DispersionCorrelation::PackedBed, None).unwrap_err();
        assert!(matches!(err, EvalError::Configuration { .. }));

        let err = SpeciesDispersionEvaluator::new(0, 3, DispersionCorrelation::PackedBed, Some(m(0.0)))
            .unwrap_err();
        assert!(matches!(err, EvalError::Configuration { .. }));
    }

    #[test]
    fn zero_velocity_reduces_to_molecular_diffusion() {
        let diffusion = SpeciesDiffusionEvaluator::new(2, 3).unwrap();
        let point = FieldPoint::new(&CONC, pa(101_325.0), k(600.0)).with_char_length(m(1.0e-3));
        let d_m = diffusion.evaluate(&mut gas(), &point).unwrap();

        for correlation in [DispersionCorrelation::PackedBed, DispersionCorrelation::TaylorAris] {
            let dispersion =
                SpeciesDispersionEvaluator::new(2, 3, correlation, Some(m(0.05))).unwrap();
            let d_ax = dispersion.evaluate(&mut gas(), &point).unwrap();
            assert_eq!(d_ax, d_m, "{correlation:?}");
        }
    }

    #[test]
    fn packed_bed_matches_correlation() {
        let mut gas = gas();
        let point = FieldPoint::new(&CONC, pa(101_325.0), k(600.0))
            .with_velocity(mps(0.3), mps(0.0), mps(0.4))
            .with_char_length(m(2.0e-3));
        let dispersion =
            SpeciesDispersionEvaluator::new(1, 3, DispersionCorrelation::PackedBed, Some(m(0.02)))
                .unwrap();
        let d_ax = dispersion.evaluate(&mut gas, &point).unwrap();

        let d_m = gas.properties().unwrap().species_molecular_diffusivity(1).unwrap();
        let wall = 1.0 + 19.4 * (2.0e-3_f64 / 0.02).powi(2);
        let expected = d_m + 0.5 * 0.5 * 2.0e-3 * wall;
        assert!(nearly_equal(d_ax, expected, Tolerances {
            abs: 1e-15,
            rel: 1e-9
        }));
    }

    #[test]
    fn taylor_aris_matches_correlation() {
        let mut gas = gas();
        let point = FieldPoint::new(&CONC, pa(101_325.0), k(450.0))
            .with_velocity(mps(1.0), mps(0.0), mps(0.0))
            .with_char_length(m(1.0e-3));
        let dispersion =
            SpeciesDispersionEvaluator::new(0, 3, DispersionCorrelation::TaylorAris, None).unwrap();
        let d_ax = dispersion.evaluate(&mut gas, &point).unwrap();

        let d_m = gas.properties().unwrap().species_molecular_diffusivity(0).unwrap();
        let expected = d_m + (1.0e-3_f64 * 1.0).powi(2) / (192.0 * d_m);
        assert!(nearly_equal(d_ax, expected, Tolerances {
            abs: 1e-15,
            rel: 1e-9
        }));
    }

    #[test]
    fn wall_correction_increases_dispersion() {
        let point = FieldPoint::new(&CONC, pa(101_325.0), k(600.0))
            .with_velocity(mps(0.5), mps(0.0), mps(0.0))
            .with_char_length(m(5.0e-3));
        let open = SpeciesDispersionEvaluator::new(0, 3, DispersionCorrelation::PackedBed, None)
            .unwrap()
            .evaluate(&mut gas(), &point)
            .unwrap();
        let walled =
            SpeciesDispersionEvaluator::new(0, 3, DispersionCorrelation::PackedBed, Some(m(0.02)))
                .unwrap()
                .evaluate(&mut gas(), &point)
                .unwrap();
        assert!(walled > open);
    }

    #[test]
    fn degenerate_point_returns_zero() {
        let conc = [0.0; 3];
        let point = FieldPoint::new(&conc, pa(101_325.0), k(600.0))
            .with_velocity(mps(1.0), mps(0.0), mps(0.0))
            .with_char_length(m(1.0e-3));
        let dispersion =
            SpeciesDispersionEvaluator::new(0, 3, DispersionCorrelation::PackedBed, None).unwrap();
        assert_eq!(dispersion.evaluate(&mut gas(), &point).unwrap(), 0.0);
    }

    #[test]
    fn label_names_the_correlation() {
        let packed =
            SpeciesDispersionEvaluator::new(4, 6, DispersionCorrelation::PackedBed, None).unwrap();
        let taylor =
            SpeciesDispersionEvaluator::new(4, 6, DispersionCorrelation::TaylorAris, None).unwrap();
        assert_eq!(packed.label(), "dispersion.packed_bed[4]");
        assert_eq!(taylor.label(), "dispersion.taylor_aris[4]");
    }
}
