//! Per-species physical constants.

use crate::error::{MixtureError, MixtureResult};
use serde::{Deserialize, Serialize};

/// Physical constants for one gas species.
///
/// Units follow the usual Sutherland tables: viscosity in g/(cm·s) (poise),
/// specific heat in J/(g·K).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesConstants {
    /// Display name, also used for lookups by name
    pub name: String,
    /// Molecular weight [g/mol]
    pub molecular_weight: f64,
    /// Sutherland reference temperature [K]
    pub sutherland_temperature: f64,
    /// Sutherland constant [K]
    pub sutherland_constant: f64,
    /// Sutherland reference viscosity [g/(cm·s)]
    pub sutherland_viscosity: f64,
    /// Specific heat [J/(g·K)]
    pub specific_heat: f64,
}

impl SpeciesConstants {
    pub fn new(
        name: impl Into<String>,
        molecular_weight: f64,
        sutherland_temperature: f64,
        sutherland_constant: f64,
        sutherland_viscosity: f64,
        specific_heat: f64,
    ) -> Self {
        Self {
            name: name.into(),
            molecular_weight,
            sutherland_temperature,
            sutherland_constant,
            sutherland_viscosity,
            specific_heat,
        }
    }

    /// Check that every constant is physically meaningful.
    ///
    /// Molecular weight, reference temperature and reference viscosity must be
    /// strictly positive; the Sutherland constant and specific heat may be zero.
    pub fn validate(&self) -> MixtureResult<()> {
        let strictly_positive = [
            ("molecular_weight", self.molecular_weight),
            ("sutherland_temperature", self.sutherland_temperature),
            ("sutherland_viscosity", self.sutherland_viscosity),
        ];
        for (field, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(MixtureError::config(format!(
                    "species '{}': {field} must be positive and finite (got {value})",
                    self.name
                )));
            }
        }

        let non_negative = [
            ("sutherland_constant", self.sutherland_constant),
            ("specific_heat", self.specific_heat),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(MixtureError::config(format!(
                    "species '{}': {field} must be non-negative and finite (got {value})",
                    self.name
                )));
            }
        }

        Ok(())
    }

    /// Sutherland viscosity [g/(cm·s)] at `t_k`. Callers validate `t_k > 0`.
    ///
    /// ```text
    /// μ(T) = μ0 · (T/T0)^1.5 · (T0 + C) / (T + C)
    /// ```
    pub(crate) fn sutherland_viscosity_at(&self, t_k: f64) -> f64 {
        let t0 = self.sutherland_temperature;
        let c = self.sutherland_constant;
        // ratios first so T == T0 returns μ0 bit-for-bit
        self.sutherland_viscosity * (t_k / t0).powf(1.5) * ((t0 + c) / (t_k + c))
    }
}
