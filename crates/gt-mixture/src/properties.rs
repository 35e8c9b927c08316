//! The full property set computed for one evaluation point.

use gt_core::units::constants::POISE_TO_PA_S;
use gt_core::units::{Density, DynVisc, Pressure, Temperature, k, kgpm3, pa, pa_s};

/// Cached gas properties for one evaluation point.
///
/// Filled in full by [`GasMixtureModel::compute_properties`]; buffers are
/// reused from point to point, so a refresh never leaves a field from the
/// previous point behind.
///
/// When the point is degenerate (zero total concentration) the species
/// viscosities still hold their Sutherland values, while every mixture-level
/// quantity, diffusivity and Schmidt number is exactly zero.
///
/// [`GasMixtureModel::compute_properties`]: crate::GasMixtureModel::compute_properties
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureProperties {
    pub(crate) temperature_k: f64,
    pub(crate) pressure_pa: f64,
    pub(crate) total_concentration: f64,
    pub(crate) mole_fractions: Vec<f64>,
    pub(crate) partial_pressures_pa: Vec<f64>,
    /// [g/(cm·s)]
    pub(crate) species_viscosities: Vec<f64>,
    /// [g/(cm·s)]
    pub(crate) mixture_viscosity: f64,
    /// [J/(g·K)]
    pub(crate) mixture_specific_heat: f64,
    /// [g/mol]
    pub(crate) mixture_molecular_weight: f64,
    /// [kg/m³]
    pub(crate) density: f64,
    pub(crate) velocity_magnitude: f64,
    pub(crate) char_length_m: f64,
    pub(crate) reynolds: f64,
    /// [m²/s]
    pub(crate) molecular_diffusivities: Vec<f64>,
    pub(crate) schmidt: Vec<f64>,
    pub(crate) degenerate: bool,
}

impl MixtureProperties {
    /// Zeroed property set for `n` species.
    pub fn with_species_count(n: usize) -> Self {
        Self {
            temperature_k: 0.0,
            pressure_pa: 0.0,
            total_concentration: 0.0,
            mole_fractions: vec![0.0; n],
            partial_pressures_pa: vec![0.0; n],
            species_viscosities: vec![0.0; n],
            mixture_viscosity: 0.0,
            mixture_specific_heat: 0.0,
            mixture_molecular_weight: 0.0,
            density: 0.0,
            velocity_magnitude: 0.0,
            char_length_m: 0.0,
            reynolds: 0.0,
            molecular_diffusivities: vec![0.0; n],
            schmidt: vec![0.0; n],
            degenerate: true,
        }
    }

    /// Zero every per-point value and size the per-species buffers for `n` species.
    pub(crate) fn reset(&mut self, n: usize) {
        for buf in [
            &mut self.mole_fractions,
            &mut self.partial_pressures_pa,
            &mut self.species_viscosities,
            &mut self.molecular_diffusivities,
            &mut self.schmidt,
        ] {
            buf.clear();
            buf.resize(n, 0.0);
        }
        self.temperature_k = 0.0;
        self.pressure_pa = 0.0;
        self.total_concentration = 0.0;
        self.mixture_viscosity = 0.0;
        self.mixture_specific_heat = 0.0;
        self.mixture_molecular_weight = 0.0;
        self.density = 0.0;
        self.velocity_magnitude = 0.0;
        self.char_length_m = 0.0;
        self.reynolds = 0.0;
        self.degenerate = true;
    }

    pub fn species_count(&self) -> usize {
        self.mole_fractions.len()
    }

    pub fn temperature(&self) -> Temperature {
        k(self.temperature_k)
    }

    /// Total system pressure.
    pub fn total_pressure(&self) -> Pressure {
        pa(self.pressure_pa)
    }

    /// Total concentration [mol/L].
    pub fn total_concentration(&self) -> f64 {
        self.total_concentration
    }

    pub fn mole_fractions(&self) -> &[f64] {
        &self.mole_fractions
    }

    pub fn mole_fraction(&self, i: usize) -> Option<f64> {
        self.mole_fractions.get(i).copied()
    }

    /// Partial pressures [Pa].
    pub fn partial_pressures(&self) -> &[f64] {
        &self.partial_pressures_pa
    }

    /// Sutherland viscosities [g/(cm·s)].
    pub fn species_viscosities(&self) -> &[f64] {
        &self.species_viscosities
    }

    pub fn species_viscosity(&self, i: usize) -> Option<f64> {
        self.species_viscosities.get(i).copied()
    }

    /// Wilke mixture viscosity [g/(cm·s)].
    pub fn mixture_viscosity(&self) -> f64 {
        self.mixture_viscosity
    }

    /// Mixture viscosity in SI units.
    pub fn mixture_viscosity_si(&self) -> DynVisc {
        pa_s(self.mixture_viscosity * POISE_TO_PA_S)
    }

    /// Mole-fraction weighted specific heat [J/(g·K)].
    pub fn mixture_specific_heat(&self) -> f64 {
        self.mixture_specific_heat
    }

    /// Mean molecular weight [g/mol].
    pub fn mixture_molecular_weight(&self) -> f64 {
        self.mixture_molecular_weight
    }

    /// Ideal-gas density.
    pub fn density(&self) -> Density {
        kgpm3(self.density)
    }

    /// Velocity magnitude [m/s].
    pub fn velocity_magnitude(&self) -> f64 {
        self.velocity_magnitude
    }

    /// Characteristic length [m].
    pub fn char_length_m(&self) -> f64 {
        self.char_length_m
    }

    /// Re = ρ·|v|·L/μ
    pub fn reynolds(&self) -> f64 {
        self.reynolds
    }

    /// Molecular diffusivities of every species in the mixture [m²/s].
    pub fn molecular_diffusivities(&self) -> &[f64] {
        &self.molecular_diffusivities
    }

    /// Molecular diffusivity of species `i` in the mixture [m²/s].
    pub fn species_molecular_diffusivity(&self, i: usize) -> Option<f64> {
        self.molecular_diffusivities.get(i).copied()
    }

    /// Sc_i = μ/(ρ·D_i)
    pub fn schmidt(&self, i: usize) -> Option<f64> {
        self.schmidt.get(i).copied()
    }

    /// Pe_i = Re·Sc_i = |v|·L/D_i, zero when D_i is zero.
    pub fn peclet(&self, i: usize) -> Option<f64> {
        let d = self.species_molecular_diffusivity(i)?;
        if d > 0.0 {
            Some(self.velocity_magnitude * self.char_length_m / d)
        } else {
            Some(0.0)
        }
    }

    /// True when the point had zero total concentration.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Return a summary string of the mixture-level properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Mix(P={:.0}Pa,T={:.1}K,C={:.4e}mol/L,μ={:.4e}g/cm·s,ρ={:.4}kg/m³,cp={:.3}J/g·K,Re={:.3}{})",
            self.pressure_pa,
            self.temperature_k,
            self.total_concentration,
            self.mixture_viscosity,
            self.density,
            self.mixture_specific_heat,
            self.reynolds,
            if self.degenerate { ",degenerate" } else { "" }
        )
    }
}
