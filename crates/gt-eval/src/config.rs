//! YAML transport configuration.
//!
//! ```yaml
//! species:
//!   - preset: N2
//!   - preset: CO2
//!     sutherland_constant: 233.0
//!   - name: Tracer
//!     molecular_weight: 146.06
//!     sutherland_temperature: 293.15
//!     sutherland_constant: 150.0
//!     sutherland_viscosity: 1.5e-4
//!     specific_heat: 0.66
//! column_diameter_m: 0.02
//! dispersion: packed_bed
//! outputs:
//!   - kind: diffusion
//!     species: CO2
//!   - kind: dispersion
//!     species: 2
//!   - kind: mixture
//!     quantity: viscosity
//! ```

use crate::diffusion::SpeciesDiffusionEvaluator;
use crate::dispersion::{DispersionCorrelation, SpeciesDispersionEvaluator};
use crate::error::{EvalError, EvalResult};
use crate::evaluator::GasPropertyEvaluator;
use crate::mixture::{MixtureProperty, MixturePropertyEvaluator};
use crate::traits::PointEvaluator;
use gt_core::units::m;
use gt_mixture::{GasMixtureModel, SpeciesConstants, find_gas};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One configured species: a catalog preset or explicit constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeciesEntry {
    Preset(PresetSpecies),
    Explicit(SpeciesConstants),
}

/// Catalog preset with optional per-constant overrides.
///
/// Unknown keys are rejected, so a misspelled override never silently falls
/// back to the preset value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetSpecies {
    pub preset: String,
    /// Replaces the preset id as the species name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecular_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sutherland_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sutherland_constant: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sutherland_viscosity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_heat: Option<f64>,
}

impl PresetSpecies {
    fn resolve(&self) -> EvalResult<SpeciesConstants> {
        let gas = find_gas(&self.preset).ok_or_else(|| {
            EvalError::config(format!("unknown gas preset '{}'", self.preset))
        })?;
        let mut c = gas.constants();
        if let Some(name) = &self.name {
            c.name = name.clone();
        }
        let overrides = [
            (&mut c.molecular_weight, self.molecular_weight),
            (&mut c.sutherland_temperature, self.sutherland_temperature),
            (&mut c.sutherland_constant, self.sutherland_constant),
            (&mut c.sutherland_viscosity, self.sutherland_viscosity),
            (&mut c.specific_heat, self.specific_heat),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }
        c.validate()?;
        Ok(c)
    }
}

impl SpeciesEntry {
    fn resolve(&self) -> EvalResult<SpeciesConstants> {
        match self {
            SpeciesEntry::Preset(preset) => preset.resolve(),
            SpeciesEntry::Explicit(constants) => Ok(constants.clone()),
        }
    }
}

/// Species reference by list index or by name (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeciesRef {
    Index(usize),
    Name(String),
}

impl SpeciesRef {
    fn resolve(&self, model: &GasMixtureModel) -> EvalResult<usize> {
        match self {
            SpeciesRef::Index(i) => Ok(*i),
            SpeciesRef::Name(name) => model
                .index_of(name)
                .ok_or_else(|| EvalError::config(format!("unknown species '{name}'"))),
        }
    }
}

/// One requested output scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputDef {
    Diffusion {
        species: SpeciesRef,
    },
    Dispersion {
        species: SpeciesRef,
        /// Overrides the top-level correlation for this output
        #[serde(default, skip_serializing_if = "Option::is_none")]
        correlation: Option<DispersionCorrelation>,
    },
    Mixture {
        quantity: MixtureProperty,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportConfig {
    pub species: Vec<SpeciesEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_diameter_m: Option<f64>,
    #[serde(default)]
    pub dispersion: DispersionCorrelation,
    /// Empty means molecular diffusivity of every species
    #[serde(default)]
    pub outputs: Vec<OutputDef>,
}

/// Validated configuration: a template evaluator and the output extractors.
pub struct TransportSetup {
    pub gas: GasPropertyEvaluator,
    pub outputs: Vec<Box<dyn PointEvaluator>>,
}

impl TransportSetup {
    pub fn labels(&self) -> Vec<String> {
        self.outputs.iter().map(|o| o.label()).collect()
    }

    /// Output whose label equals `label`.
    pub fn output(&self, label: &str) -> Option<&dyn PointEvaluator> {
        self.outputs
            .iter()
            .find(|o| o.label() == label)
            .map(|o| &**o)
    }
}

impl TransportConfig {
    pub fn from_yaml_str(s: &str) -> EvalResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> EvalResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml_string(&self) -> EvalResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Resolve presets and species references and construct the evaluators.
    pub fn build(&self) -> EvalResult<TransportSetup> {
        let constants = self
            .species
            .iter()
            .map(SpeciesEntry::resolve)
            .collect::<EvalResult<Vec<_>>>()?;

        for (i, a) in constants.iter().enumerate() {
            if constants[..i]
                .iter()
                .any(|b| b.name.eq_ignore_ascii_case(&a.name))
            {
                return Err(EvalError::config(format!(
                    "duplicate species name '{}'",
                    a.name
                )));
            }
        }

        let model = GasMixtureModel::configure(constants)?;
        let n = model.species_count();
        let column_diameter = self.column_diameter_m.map(m);

        let mut outputs: Vec<Box<dyn PointEvaluator>> = Vec::new();
        if self.outputs.is_empty() {
            for i in 0..n {
                outputs.push(Box::new(SpeciesDiffusionEvaluator::new(i, n)?));
            }
        }
        for def in &self.outputs {
            let output: Box<dyn PointEvaluator> = match def {
                OutputDef::Diffusion { species } => Box::new(SpeciesDiffusionEvaluator::new(
                    species.resolve(&model)?,
                    n,
                )?),
                OutputDef::Dispersion {
                    species,
                    correlation,
                } => Box::new(SpeciesDispersionEvaluator::new(
                    species.resolve(&model)?,
                    n,
                    correlation.unwrap_or(self.dispersion),
                    column_diameter,
                )?),
                OutputDef::Mixture { quantity } => {
                    Box::new(MixturePropertyEvaluator::new(*quantity))
                }
            };
            if outputs.iter().any(|o| o.label() == output.label()) {
                return Err(EvalError::config(format!(
                    "duplicate output '{}'",
                    output.label()
                )));
            }
            outputs.push(output);
        }

        info!(
            species = n,
            outputs = outputs.len(),
            dispersion = ?self.dispersion,
            "transport configuration built"
        );

        Ok(TransportSetup {
            gas: GasPropertyEvaluator::new(model),
            outputs,
        })
    }
}
