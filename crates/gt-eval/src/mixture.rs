//! Mixture-wide outputs (viscosity, density, specific heat, ...).

use crate::error::EvalResult;
use crate::evaluator::GasPropertyEvaluator;
use crate::point::FieldPoint;
use crate::traits::PointEvaluator;
use gt_mixture::MixtureProperties;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mixture-level quantity reported by [`MixturePropertyEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixtureProperty {
    /// Dynamic viscosity [Pa·s]
    Viscosity,
    /// Ideal-gas density [kg/m³]
    Density,
    /// Specific heat [J/(g·K)]
    SpecificHeat,
    /// Mean molecular weight [g/mol]
    MolecularWeight,
    /// Reynolds number based on the characteristic length
    Reynolds,
    /// Total concentration [mol/L]
    TotalConcentration,
}

impl MixtureProperty {
    fn read(self, props: &MixtureProperties) -> f64 {
        match self {
            MixtureProperty::Viscosity => props.mixture_viscosity_si().value,
            MixtureProperty::Density => props.density().value,
            MixtureProperty::SpecificHeat => props.mixture_specific_heat(),
            MixtureProperty::MolecularWeight => props.mixture_molecular_weight(),
            MixtureProperty::Reynolds => props.reynolds(),
            MixtureProperty::TotalConcentration => props.total_concentration(),
        }
    }
}

impl fmt::Display for MixtureProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MixtureProperty::Viscosity => "viscosity",
            MixtureProperty::Density => "density",
            MixtureProperty::SpecificHeat => "specific_heat",
            MixtureProperty::MolecularWeight => "molecular_weight",
            MixtureProperty::Reynolds => "reynolds",
            MixtureProperty::TotalConcentration => "total_concentration",
        };
        write!(f, "{name}")
    }
}

/// Outputs one mixture-level quantity per point. Degenerate points give 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixturePropertyEvaluator {
    property: MixtureProperty,
}

impl MixturePropertyEvaluator {
    pub fn new(property: MixtureProperty) -> Self {
        Self { property }
    }

    pub fn property(&self) -> MixtureProperty {
        self.property
    }
}

impl PointEvaluator for MixturePropertyEvaluator {
    fn label(&self) -> String {
        format!("mixture.{}", self.property)
    }

    fn evaluate(
        &self,
        gas: &mut GasPropertyEvaluator,
        point: &FieldPoint<'_>,
    ) -> EvalResult<f64> {
        gas.bind(point)?;
        let props = gas.refresh()?;
        Ok(self.property.read(props))
    }
}
