//! Parameter sweeps over one scalar of an evaluation point.
//!
//! Used to tabulate an output across temperature, pressure or flow speed
//! while holding the rest of the point fixed.

use crate::batch::evaluate_batch;
use crate::error::{EvalError, EvalResult};
use crate::evaluator::GasPropertyEvaluator;
use crate::point::FieldPoint;
use crate::traits::PointEvaluator;
use gt_core::units::{k, mps, pa};
use std::fmt;
use tracing::info;

/// Scalar varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweptQuantity {
    /// Temperature [K]
    Temperature,
    /// Pressure [Pa]
    Pressure,
    /// Velocity magnitude [m/s], along the base point's flow direction (x if at rest)
    VelocityMagnitude,
}

/// Point spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepType {
    Linear,
    /// Evenly spaced in ln(x)
    Logarithmic,
}

/// Definition of a single parameter sweep, bounds in SI units.
///
/// Only constructed through [`SweepDefinition::new`], so every instance has at
/// least two points and distinct finite bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    quantity: SweptQuantity,
    start: f64,
    end: f64,
    num_points: usize,
    sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        quantity: SweptQuantity,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> EvalResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(EvalError::config("sweep bounds must be finite"));
        }
        if num_points < 2 {
            return Err(EvalError::config("sweep must have at least 2 points"));
        }
        if (start - end).abs() < 1e-12 {
            return Err(EvalError::config("sweep start and end must differ"));
        }
        if sweep_type == SweepType::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(EvalError::config(
                "logarithmic sweep requires positive bounds",
            ));
        }

        Ok(Self {
            quantity,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    pub fn quantity(&self) -> SweptQuantity {
        self.quantity
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }

    /// Swept values from `start` to `end`, endpoints exact.
    pub fn generate_points(&self) -> Vec<f64> {
        let n = self.num_points;
        let mut points: Vec<f64> = match self.sweep_type {
            SweepType::Linear => {
                let delta = (self.end - self.start) / (n - 1) as f64;
                (0..n).map(|i| self.start + i as f64 * delta).collect()
            }
            SweepType::Logarithmic => {
                let (log_start, log_end) = (self.start.ln(), self.end.ln());
                let log_delta = (log_end - log_start) / (n - 1) as f64;
                (0..n)
                    .map(|i| (log_start + i as f64 * log_delta).exp())
                    .collect()
            }
        };

        // Ensure exact endpoints
        points[0] = self.start;
        points[n - 1] = self.end;
        points
    }

    /// Copy of `base` with the swept scalar set to `value`.
    fn apply<'a>(&self, base: &FieldPoint<'a>, value: f64) -> FieldPoint<'a> {
        let mut point = *base;
        match self.quantity {
            SweptQuantity::Temperature => point.state.temperature = k(value),
            SweptQuantity::Pressure => point.state.pressure = pa(value),
            SweptQuantity::VelocityMagnitude => {
                let speed = base.state.velocity_magnitude();
                point.state.velocity = if speed > 0.0 {
                    base.state
                        .velocity
                        .map(|v| mps(v.value / speed * value))
                } else {
                    [mps(value), mps(0.0), mps(0.0)]
                };
            }
        }
        point
    }
}

impl fmt::Display for SweptQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "T [K]"),
            Self::Pressure => write!(f, "P [Pa]"),
            Self::VelocityMagnitude => write!(f, "|v| [m/s]"),
        }
    }
}

/// Result of a sweep: one optional value per swept point.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub label: String,
    pub quantity: SweptQuantity,
    pub independent_values: Vec<f64>,
    /// `None` where evaluation failed
    pub values: Vec<Option<f64>>,
    pub num_successful: usize,
    pub num_failed: usize,
    /// First failure encountered, if any
    pub first_error: Option<EvalError>,
}

impl SweepResult {
    /// (independent, value) pairs for successful points.
    pub fn successful(&self) -> Vec<(f64, f64)> {
        self.independent_values
            .iter()
            .zip(&self.values)
            .filter_map(|(x, y)| y.map(|y| (*x, y)))
            .collect()
    }
}

/// Run `sweep` for one output around `base`, evaluating points in parallel.
pub fn execute_sweep<E>(
    evaluator: &E,
    template: &GasPropertyEvaluator,
    base: &FieldPoint<'_>,
    sweep: &SweepDefinition,
) -> SweepResult
where
    E: PointEvaluator + ?Sized,
{
    let independent_values = sweep.generate_points();
    let points: Vec<FieldPoint<'_>> = independent_values
        .iter()
        .map(|&x| sweep.apply(base, x))
        .collect();

    let mut values = Vec::with_capacity(points.len());
    let mut first_error = None;
    for result in evaluate_batch(evaluator, template, &points) {
        match result {
            Ok(v) => values.push(Some(v)),
            Err(e) => {
                values.push(None);
                first_error.get_or_insert(e);
            }
        }
    }

    let num_successful = values.iter().filter(|v| v.is_some()).count();
    let num_failed = values.len() - num_successful;
    info!(
        output = %evaluator.label(),
        quantity = %sweep.quantity,
        num_successful,
        num_failed,
        "sweep finished"
    );

    SweepResult {
        label: evaluator.label(),
        quantity: sweep.quantity,
        independent_values,
        values,
        num_successful,
        num_failed,
        first_error,
    }
}
