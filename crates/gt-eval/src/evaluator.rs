//! Stateful per-point gas property evaluator.

use crate::error::{EvalError, EvalResult};
use crate::point::FieldPoint;
use gt_mixture::{Composition, GasMixtureModel, MixtureProperties, ScalarState};
use tracing::{debug, trace};

/// Lifecycle of a [`GasPropertyEvaluator`] within one evaluation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalStage {
    /// No field values bound yet (or the last bind failed).
    Unbound,
    /// Field values bound; properties not computed for them yet.
    Bound,
    /// Properties are current for the bound field values.
    Refreshed,
}

/// Single source of truth for the mixture state at the current evaluation point.
///
/// Usage per point: [`bind`](Self::bind), then [`refresh`](Self::refresh), then
/// read [`properties`](Self::properties). Reading before a successful refresh of
/// the current binding is a [`EvalError::State`].
///
/// One instance must not serve concurrent points; clone it (or call
/// [`fresh_instance`](Self::fresh_instance)) per worker instead.
#[derive(Debug, Clone)]
pub struct GasPropertyEvaluator {
    model: GasMixtureModel,
    concentrations: Vec<f64>,
    state: Option<ScalarState>,
    composition: Composition,
    properties: MixtureProperties,
    stage: EvalStage,
}

impl GasPropertyEvaluator {
    pub fn new(model: GasMixtureModel) -> Self {
        let n = model.species_count();
        Self {
            model,
            concentrations: Vec::with_capacity(n),
            state: None,
            composition: Composition::with_species_count(n),
            properties: MixtureProperties::with_species_count(n),
            stage: EvalStage::Unbound,
        }
    }

    pub fn model(&self) -> &GasMixtureModel {
        &self.model
    }

    pub fn species_count(&self) -> usize {
        self.model.species_count()
    }

    pub fn stage(&self) -> EvalStage {
        self.stage
    }

    /// A new Unbound evaluator sharing this one's species table.
    pub fn fresh_instance(&self) -> Self {
        Self::new(self.model.clone())
    }

    /// Bind the field values of the current point.
    ///
    /// Only the species count is checked here; the values themselves are
    /// validated by [`refresh`](Self::refresh). Any previously refreshed
    /// properties become unreadable.
    pub fn bind(&mut self, point: &FieldPoint<'_>) -> EvalResult<()> {
        let expected = self.model.species_count();
        if point.concentrations.len() != expected {
            self.unbind();
            return Err(EvalError::config(format!(
                "expected {expected} species concentrations, got {}",
                point.concentrations.len()
            )));
        }

        self.concentrations.clear();
        self.concentrations.extend_from_slice(point.concentrations);
        self.state = Some(point.state);
        self.stage = EvalStage::Bound;
        Ok(())
    }

    /// Recompute the full property set for the bound values.
    ///
    /// Idempotent for an unchanged binding. A zero total concentration yields
    /// the degenerate property set rather than an error. On failure the
    /// evaluator stays Bound with no readable properties.
    pub fn refresh(&mut self) -> EvalResult<&MixtureProperties> {
        let state = match (self.stage, self.state) {
            (EvalStage::Bound | EvalStage::Refreshed, Some(state)) => state,
            _ => {
                return Err(EvalError::State {
                    what: "refresh called before bind",
                });
            }
        };
        self.stage = EvalStage::Bound;

        if let Err(e) = self.recompute(&state) {
            debug!(error = %e, "gas property refresh failed");
            return Err(e);
        }

        if self.properties.is_degenerate() {
            debug!(
                t_k = state.temperature_k(),
                p_pa = state.pressure_pa(),
                "zero total concentration, using degenerate mixture properties"
            );
        } else {
            trace!(props = %self.properties.summary(), "gas properties refreshed");
        }

        self.stage = EvalStage::Refreshed;
        Ok(&self.properties)
    }

    fn recompute(&mut self, state: &ScalarState) -> EvalResult<()> {
        state.validate()?;
        self.composition.update(&self.concentrations)?;
        self.model
            .compute_properties(&self.composition, state, &mut self.properties)?;
        Ok(())
    }

    /// Properties from the last successful refresh of the current binding.
    pub fn properties(&self) -> EvalResult<&MixtureProperties> {
        match self.stage {
            EvalStage::Refreshed => Ok(&self.properties),
            EvalStage::Bound => Err(EvalError::State {
                what: "properties read before refresh",
            }),
            EvalStage::Unbound => Err(EvalError::State {
                what: "properties read before bind and refresh",
            }),
        }
    }

    /// Bind `point` and refresh in one step.
    pub fn evaluate_point(&mut self, point: &FieldPoint<'_>) -> EvalResult<&MixtureProperties> {
        self.bind(point)?;
        self.refresh()
    }

    fn unbind(&mut self) {
        self.concentrations.clear();
        self.state = None;
        self.stage = EvalStage::Unbound;
    }
}
