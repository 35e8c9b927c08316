//! Kinetic-theory gas mixture model.

use crate::composition::Composition;
use crate::error::{MixtureError, MixtureResult};
use crate::properties::MixtureProperties;
use crate::species::SpeciesConstants;
use crate::state::ScalarState;
use gt_core::units::constants::{CM2_TO_M2, G_TO_KG, POISE_TO_PA_S, R_J_PER_MOL_K};
use gt_core::units::{Density, Pressure, Temperature, kgpm3};

/// Ratio ρ·D_self/μ used to infer collision diameters from viscosity.
const SELF_DIFFUSION_FACTOR: f64 = 1.38;

/// Pure computation of gas-mixture properties from composition and scalar state.
///
/// Holds the ordered species constant table and nothing else; it is immutable
/// after [`GasMixtureModel::configure`] and safe to share between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct GasMixtureModel {
    species: Vec<SpeciesConstants>,
}

impl GasMixtureModel {
    /// Build a model from an ordered species list.
    ///
    /// Fails if the list is empty or any species has invalid constants.
    pub fn configure(species: Vec<SpeciesConstants>) -> MixtureResult<Self> {
        if species.is_empty() {
            return Err(MixtureError::config("species list is empty"));
        }
        for s in &species {
            s.validate()?;
        }
        Ok(Self { species })
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn species(&self) -> &[SpeciesConstants] {
        &self.species
    }

    /// Index of the species called `name` (case-insensitive).
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.species
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    fn constants(&self, i: usize) -> MixtureResult<&SpeciesConstants> {
        self.species.get(i).ok_or_else(|| {
            MixtureError::config(format!(
                "species index {i} out of range ({} species configured)",
                self.species.len()
            ))
        })
    }

    fn check_fractions(&self, mole_fractions: &[f64]) -> MixtureResult<()> {
        if mole_fractions.len() != self.species.len() {
            return Err(MixtureError::config(format!(
                "expected {} mole fractions, got {}",
                self.species.len(),
                mole_fractions.len()
            )));
        }
        for &y in mole_fractions {
            if !y.is_finite() || y < 0.0 {
                return Err(MixtureError::Numerical {
                    what: "mole fraction must be non-negative and finite",
                    value: y,
                });
            }
        }
        Ok(())
    }

    /// Sutherland viscosity of species `i` [g/(cm·s)].
    pub fn species_viscosity(&self, i: usize, t: Temperature) -> MixtureResult<f64> {
        let s = self.constants(i)?;
        let t_k = positive(t.value, "temperature must be positive and finite")?;
        Ok(s.sutherland_viscosity_at(t_k))
    }

    /// Wilke mixture viscosity [g/(cm·s)]; zero for an all-zero composition.
    pub fn mixture_viscosity(&self, mole_fractions: &[f64], t: Temperature) -> MixtureResult<f64> {
        self.check_fractions(mole_fractions)?;
        let t_k = positive(t.value, "temperature must be positive and finite")?;
        let mu = self.sutherland_all(t_k);
        Ok(self.wilke_viscosity(mole_fractions, &mu))
    }

    /// Σ y_i·cp_i [J/(g·K)]
    pub fn mixture_specific_heat(&self, mole_fractions: &[f64]) -> MixtureResult<f64> {
        self.check_fractions(mole_fractions)?;
        Ok(self.weighted_sum(mole_fractions, |s| s.specific_heat))
    }

    /// Σ y_i·M_i [g/mol]
    pub fn mixture_molecular_weight(&self, mole_fractions: &[f64]) -> MixtureResult<f64> {
        self.check_fractions(mole_fractions)?;
        Ok(self.weighted_sum(mole_fractions, |s| s.molecular_weight))
    }

    /// Ideal-gas density ρ = P·M_mix/(R·T).
    pub fn gas_density(
        &self,
        mole_fractions: &[f64],
        t: Temperature,
        p: Pressure,
    ) -> MixtureResult<Density> {
        let mw = self.mixture_molecular_weight(mole_fractions)?;
        let t_k = positive(t.value, "temperature must be positive and finite")?;
        let p_pa = positive(p.value, "pressure must be positive and finite")?;
        Ok(kgpm3(ideal_gas_density(p_pa, mw, t_k)))
    }

    /// Binary diffusivity of species `i` through species `j` [m²/s].
    ///
    /// Collision diameters are inferred from the Sutherland viscosity and the
    /// pure-component ideal-gas density:
    ///
    /// ```text
    /// D_ij = (4/√2)·√(1/M_i + 1/M_j) / (a_i + a_j)²      [cm²/s]
    /// a_k  = √(ρ_k / (1.38·μ_k·√M_k))                     ρ_k in g/cm³, μ_k in g/(cm·s)
    /// ```
    ///
    /// For `i == j` this reduces to the self-diffusivity 1.38·μ/ρ.
    pub fn binary_diffusivity(
        &self,
        i: usize,
        j: usize,
        t: Temperature,
        p: Pressure,
    ) -> MixtureResult<f64> {
        let si = self.constants(i)?;
        let sj = self.constants(j)?;
        let t_k = positive(t.value, "temperature must be positive and finite")?;
        let p_pa = positive(p.value, "pressure must be positive and finite")?;
        let d = binary_from_parts(
            si.molecular_weight,
            sj.molecular_weight,
            si.sutherland_viscosity_at(t_k),
            sj.sutherland_viscosity_at(t_k),
            t_k,
            p_pa,
        );
        finite(d, "binary diffusivity")
    }

    /// Molecular diffusivity of species `i` in the mixture [m²/s].
    ///
    /// ```text
    /// D_i = (1 - y_i) / Σ_{j≠i} y_j/D_ij
    /// ```
    ///
    /// Returns 0 for an all-zero composition. When only species `i` is present
    /// the result is the harmonic mean of D_ij over j≠i (D_ij itself for a
    /// binary model), the limit as the other fractions vanish together. A
    /// single-species model gives the self-diffusivity D_ii.
    pub fn species_molecular_diffusivity(
        &self,
        i: usize,
        mole_fractions: &[f64],
        t: Temperature,
        p: Pressure,
    ) -> MixtureResult<f64> {
        self.constants(i)?;
        self.check_fractions(mole_fractions)?;
        let t_k = positive(t.value, "temperature must be positive and finite")?;
        let p_pa = positive(p.value, "pressure must be positive and finite")?;
        let mu = self.sutherland_all(t_k);
        let d = self.mixture_diffusivity(i, mole_fractions, &mu, t_k, p_pa);
        finite(d, "molecular diffusivity")
    }

    /// Fill `out` with the complete property set for one point.
    ///
    /// `out` is fully overwritten. On error it is left reset (degenerate, zeroed).
    pub fn compute_properties(
        &self,
        composition: &Composition,
        state: &ScalarState,
        out: &mut MixtureProperties,
    ) -> MixtureResult<()> {
        let n = self.species.len();
        out.reset(n);

        if composition.len() != n {
            return Err(MixtureError::config(format!(
                "composition has {} species, model has {n}",
                composition.len()
            )));
        }
        state.validate()?;

        let t_k = state.temperature_k();
        let p_pa = state.pressure_pa();

        out.temperature_k = t_k;
        out.pressure_pa = p_pa;
        out.velocity_magnitude = state.velocity_magnitude();
        out.char_length_m = state.char_length_m();
        for (mu, s) in out.species_viscosities.iter_mut().zip(&self.species) {
            *mu = s.sutherland_viscosity_at(t_k);
        }

        if composition.is_degenerate() {
            return Ok(());
        }

        let y = composition.mole_fractions();
        out.total_concentration = composition.total_concentration();
        out.mole_fractions.copy_from_slice(y);
        for (pp, &yi) in out.partial_pressures_pa.iter_mut().zip(y) {
            *pp = yi * p_pa;
        }

        let mu_mix = self.wilke_viscosity(y, &out.species_viscosities);
        let mw = self.weighted_sum(y, |s| s.molecular_weight);
        let rho = ideal_gas_density(p_pa, mw, t_k);
        let mu_si = mu_mix * POISE_TO_PA_S;

        out.mixture_viscosity = finite(mu_mix, "mixture viscosity")?;
        out.mixture_specific_heat = self.weighted_sum(y, |s| s.specific_heat);
        out.mixture_molecular_weight = mw;
        out.density = finite(rho, "gas density")?;
        out.reynolds = finite(
            rho * out.velocity_magnitude * out.char_length_m / mu_si,
            "Reynolds number",
        )?;

        for i in 0..n {
            let d = self.mixture_diffusivity(i, y, &out.species_viscosities, t_k, p_pa);
            out.molecular_diffusivities[i] = finite(d, "molecular diffusivity")?;
            out.schmidt[i] = if d > 0.0 { mu_si / (rho * d) } else { 0.0 };
        }

        out.degenerate = false;
        Ok(())
    }

    fn sutherland_all(&self, t_k: f64) -> Vec<f64> {
        self.species
            .iter()
            .map(|s| s.sutherland_viscosity_at(t_k))
            .collect()
    }

    fn weighted_sum(&self, y: &[f64], prop: impl Fn(&SpeciesConstants) -> f64) -> f64 {
        y.iter()
            .zip(&self.species)
            .filter(|(yi, _)| **yi > 0.0)
            .map(|(yi, s)| yi * prop(s))
            .sum()
    }

    /// μ_mix = Σ_i y_i·μ_i / Σ_j y_j·Φ_ij, skipping absent species.
    fn wilke_viscosity(&self, y: &[f64], mu: &[f64]) -> f64 {
        let mut total = 0.0;
        for i in 0..self.species.len() {
            if y[i] <= 0.0 {
                continue;
            }
            let mw_i = self.species[i].molecular_weight;
            let mut denom = 0.0;
            for j in 0..self.species.len() {
                if y[j] <= 0.0 {
                    continue;
                }
                let mw_j = self.species[j].molecular_weight;
                let phi = (1.0 + (mu[i] / mu[j]).sqrt() * (mw_j / mw_i).powf(0.25)).powi(2)
                    / (8.0 * (1.0 + mw_i / mw_j)).sqrt();
                denom += y[j] * phi;
            }
            total += y[i] * mu[i] / denom;
        }
        total
    }

    fn mixture_diffusivity(&self, i: usize, y: &[f64], mu: &[f64], t_k: f64, p_pa: f64) -> f64 {
        if y.iter().all(|&yj| yj <= 0.0) {
            return 0.0;
        }

        let mw_i = self.species[i].molecular_weight;
        // Σ_{j≠i} y_j equals 1 - y_i without cancellation at trace amounts
        let mut others = 0.0;
        let mut denom = 0.0;
        for (j, s) in self.species.iter().enumerate() {
            if j == i || y[j] <= 0.0 {
                continue;
            }
            let d_ij = binary_from_parts(mw_i, s.molecular_weight, mu[i], mu[j], t_k, p_pa);
            others += y[j];
            denom += y[j] / d_ij;
        }

        if denom > 0.0 {
            return others / denom;
        }

        // Pure species i: limit as the other fractions vanish evenly
        let n = self.species.len();
        if n == 1 {
            return binary_from_parts(mw_i, mw_i, mu[i], mu[i], t_k, p_pa);
        }
        let inverse_sum: f64 = self
            .species
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(j, s)| {
                1.0 / binary_from_parts(mw_i, s.molecular_weight, mu[i], mu[j], t_k, p_pa)
            })
            .sum();
        (n - 1) as f64 / inverse_sum
    }
}

/// ρ [kg/m³] from P [Pa], M [g/mol], T [K].
fn ideal_gas_density(p_pa: f64, mw: f64, t_k: f64) -> f64 {
    p_pa * mw * G_TO_KG / (R_J_PER_MOL_K * t_k)
}

/// See [`GasMixtureModel::binary_diffusivity`]; result in m²/s.
fn binary_from_parts(mw_i: f64, mw_j: f64, mu_i: f64, mu_j: f64, t_k: f64, p_pa: f64) -> f64 {
    // g/m³ -> g/cm³
    let rho_i = p_pa * mw_i / (R_J_PER_MOL_K * t_k) * 1.0e-6;
    let rho_j = p_pa * mw_j / (R_J_PER_MOL_K * t_k) * 1.0e-6;
    let a_i = (rho_i / (SELF_DIFFUSION_FACTOR * mu_i * mw_i.sqrt())).sqrt();
    let a_j = (rho_j / (SELF_DIFFUSION_FACTOR * mu_j * mw_j.sqrt())).sqrt();
    let d_cm2 = (4.0 / 2.0_f64.sqrt()) * (1.0 / mw_i + 1.0 / mw_j).sqrt() / (a_i + a_j).powi(2);
    d_cm2 * CM2_TO_M2
}

fn positive(v: f64, what: &'static str) -> MixtureResult<f64> {
    Ok(gt_core::ensure_positive(v, what)?)
}

fn finite(v: f64, what: &'static str) -> MixtureResult<f64> {
    Ok(gt_core::ensure_finite(v, what)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KnownGas;
    use gt_core::numeric::{Tolerances, nearly_equal};
    use gt_core::units::{k, m, mps, pa};

    const TOL: Tolerances = Tolerances {
        abs: 1e-14,
        rel: 1e-9,
    };

    fn co2_scenario() -> SpeciesConstants {
        SpeciesConstants::new("CO2", 44.0, 300.0, 240.0, 1.37e-4, 0.844)
    }

    fn n2_co2() -> GasMixtureModel {
        GasMixtureModel::configure(vec![KnownGas::N2.constants(), KnownGas::CO2.constants()])
            .unwrap()
    }

    #[test]
    fn configure_rejects_empty_list() {
        let err = GasMixtureModel::configure(vec![]).unwrap_err();
        assert!(matches!(err, MixtureError::Configuration { .. }));
    }

    #[test]
    fn configure_rejects_bad_species() {
        let mut bad = co2_scenario();
        bad.molecular_weight = -44.0;
        let err = GasMixtureModel::configure(vec![KnownGas::N2.constants(), bad]).unwrap_err();
        assert!(matches!(err, MixtureError::Configuration { .. }));
    }

    #[test]
    fn viscosity_at_reference_temperature_is_reference_viscosity() {
        let model = GasMixtureModel::configure(vec![co2_scenario()]).unwrap();
        assert_eq!(model.species_viscosity(0, k(300.0)).unwrap(), 1.37e-4);
    }

    #[test]
    fn viscosity_rejects_non_positive_temperature() {
        let model = GasMixtureModel::configure(vec![co2_scenario()]).unwrap();
        let err = model.species_viscosity(0, k(0.0)).unwrap_err();
        assert!(matches!(err, MixtureError::Numerical { .. }));
        assert!(model.species_viscosity(0, k(-10.0)).is_err());
    }

    #[test]
    fn viscosity_rejects_bad_index() {
        let model = GasMixtureModel::configure(vec![co2_scenario()]).unwrap();
        let err = model.species_viscosity(1, k(300.0)).unwrap_err();
        assert!(matches!(err, MixtureError::Configuration { .. }));
    }

    #[test]
    fn single_species_mixture_matches_species_values() {
        let model = GasMixtureModel::configure(vec![co2_scenario()]).unwrap();
        let t = k(450.0);
        let mu = model.species_viscosity(0, t).unwrap();
        assert_eq!(model.mixture_viscosity(&[1.0], t).unwrap(), mu);
        assert_eq!(model.mixture_specific_heat(&[1.0]).unwrap(), 0.844);
        assert_eq!(model.mixture_molecular_weight(&[1.0]).unwrap(), 44.0);
    }

    #[test]
    fn absent_species_do_not_change_pure_values() {
        let model = n2_co2();
        let t = k(400.0);
        let mu_n2 = model.species_viscosity(0, t).unwrap();
        assert_eq!(model.mixture_viscosity(&[1.0, 0.0], t).unwrap(), mu_n2);
    }

    #[test]
    fn mixture_viscosity_between_pure_values() {
        let model = n2_co2();
        let t = k(500.0);
        let mu_n2 = model.species_viscosity(0, t).unwrap();
        let mu_co2 = model.species_viscosity(1, t).unwrap();
        let mu_mix = model.mixture_viscosity(&[0.5, 0.5], t).unwrap();
        assert!(mu_mix > mu_n2.min(mu_co2) && mu_mix < mu_n2.max(mu_co2));
    }

    #[test]
    fn zero_composition_gives_zero_mixture_viscosity() {
        let model = n2_co2();
        assert_eq!(model.mixture_viscosity(&[0.0, 0.0], k(300.0)).unwrap(), 0.0);
    }

    #[test]
    fn mixture_specific_heat_is_mole_weighted() {
        let model = n2_co2();
        let cp = model.mixture_specific_heat(&[0.25, 0.75]).unwrap();
        assert!(nearly_equal(cp, 0.25 * 1.040 + 0.75 * 0.844, TOL));
    }

    #[test]
    fn fraction_count_mismatch_is_configuration_error() {
        let model = n2_co2();
        let err = model.mixture_specific_heat(&[1.0]).unwrap_err();
        assert!(matches!(err, MixtureError::Configuration { .. }));
    }

    #[test]
    fn gas_density_matches_ideal_gas() {
        let model = n2_co2();
        let rho = model
            .gas_density(&[1.0, 0.0], k(300.0), pa(101_325.0))
            .unwrap();
        let expected = 101_325.0 * 28.014e-3 / (R_J_PER_MOL_K * 300.0);
        assert!(nearly_equal(rho.value, expected, TOL));
    }

    #[test]
    fn self_diffusivity_is_viscosity_over_density() {
        let model = GasMixtureModel::configure(vec![KnownGas::CO2.constants()]).unwrap();
        let (t, p) = (k(300.0), pa(101_325.0));
        let d = model.binary_diffusivity(0, 0, t, p).unwrap();
        let mu = model.species_viscosity(0, t).unwrap();
        let rho_g_cm3 = 101_325.0 * 44.009 / (R_J_PER_MOL_K * 300.0) * 1e-6;
        let expected = SELF_DIFFUSION_FACTOR * mu / rho_g_cm3 * CM2_TO_M2;
        assert!(nearly_equal(d, expected, TOL));
        // CO2 self-diffusion near 1 atm, 300 K is about 1.1e-5 m²/s
        assert!(d > 0.8e-5 && d < 1.5e-5, "D = {d}");
    }

    #[test]
    fn binary_diffusivity_is_symmetric_and_scales_inverse_with_pressure() {
        let model = n2_co2();
        let t = k(500.0);
        let d12 = model.binary_diffusivity(0, 1, t, pa(101_325.0)).unwrap();
        let d21 = model.binary_diffusivity(1, 0, t, pa(101_325.0)).unwrap();
        assert!(nearly_equal(d12, d21, TOL));

        let d12_2atm = model.binary_diffusivity(0, 1, t, pa(202_650.0)).unwrap();
        assert!(nearly_equal(d12 / d12_2atm, 2.0, TOL));
    }

    #[test]
    fn binary_diffusivity_rejects_non_positive_state() {
        let model = n2_co2();
        let err = model
            .binary_diffusivity(0, 1, k(300.0), pa(0.0))
            .unwrap_err();
        assert!(matches!(err, MixtureError::Numerical { .. }));
        assert!(model.binary_diffusivity(0, 1, k(-1.0), pa(1e5)).is_err());
    }

    #[test]
    fn trace_species_diffuses_at_binary_rate() {
        let model = n2_co2();
        let (t, p) = (k(600.0), pa(101_325.0));
        let d_bin = model.binary_diffusivity(1, 0, t, p).unwrap();
        let d_trace = model
            .species_molecular_diffusivity(1, &[1.0, 0.0], t, p)
            .unwrap();
        assert!(nearly_equal(d_trace, d_bin, TOL));
    }

    #[test]
    fn single_species_model_uses_self_diffusivity() {
        let model = GasMixtureModel::configure(vec![KnownGas::CO2.constants()]).unwrap();
        let (t, p) = (k(600.0), pa(101_325.0));
        let d_self = model.binary_diffusivity(0, 0, t, p).unwrap();
        let d = model.species_molecular_diffusivity(0, &[1.0], t, p).unwrap();
        assert!(nearly_equal(d, d_self, TOL));
    }

    #[test]
    fn pure_species_in_binary_model_uses_binary_diffusivity() {
        let model = n2_co2();
        let (t, p) = (k(600.0), pa(101_325.0));
        let d_bin = model.binary_diffusivity(0, 1, t, p).unwrap();
        let d = model
            .species_molecular_diffusivity(0, &[1.0, 0.0], t, p)
            .unwrap();
        assert!(nearly_equal(d, d_bin, TOL));
    }

    #[test]
    fn diffusivity_continuous_as_trace_species_vanishes() {
        let model = GasMixtureModel::configure(vec![
            KnownGas::N2.constants(),
            KnownGas::H2.constants(),
        ])
        .unwrap();
        let (t, p) = (k(500.0), pa(101_325.0));
        let at_zero = model
            .species_molecular_diffusivity(0, &[1.0, 0.0], t, p)
            .unwrap();
        for eps in [1e-9, 1e-15] {
            let near = model
                .species_molecular_diffusivity(0, &[1.0 - eps, eps], t, p)
                .unwrap();
            assert!(
                nearly_equal(near, at_zero, Tolerances { abs: 0.0, rel: 1e-6 }),
                "eps = {eps}: {near} vs {at_zero}"
            );
        }
    }

    #[test]
    fn pure_species_in_ternary_model_uses_harmonic_mean() {
        let model = GasMixtureModel::configure(vec![
            KnownGas::N2.constants(),
            KnownGas::CO2.constants(),
            KnownGas::H2.constants(),
        ])
        .unwrap();
        let (t, p) = (k(450.0), pa(101_325.0));
        let d01 = model.binary_diffusivity(0, 1, t, p).unwrap();
        let d02 = model.binary_diffusivity(0, 2, t, p).unwrap();
        let d = model
            .species_molecular_diffusivity(0, &[1.0, 0.0, 0.0], t, p)
            .unwrap();
        assert!(nearly_equal(d, 2.0 / (1.0 / d01 + 1.0 / d02), TOL));

        // Equal trace amounts approach the same limit
        let eps = 1e-10;
        let near = model
            .species_molecular_diffusivity(0, &[1.0 - 2.0 * eps, eps, eps], t, p)
            .unwrap();
        assert!(nearly_equal(near, d, Tolerances { abs: 0.0, rel: 1e-6 }));
    }

    #[test]
    fn zero_composition_gives_zero_diffusivity() {
        let model = n2_co2();
        let d = model
            .species_molecular_diffusivity(0, &[0.0, 0.0], k(300.0), pa(101_325.0))
            .unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn compute_properties_fills_everything() {
        let model = n2_co2();
        let comp = Composition::from_concentrations(&[0.03, 0.01]).unwrap();
        let state = ScalarState::new(pa(101_325.0), k(500.0))
            .with_velocity(mps(1.0), mps(0.0), mps(0.0))
            .with_char_length(m(1.0e-3));
        let mut props = MixtureProperties::with_species_count(2);
        model.compute_properties(&comp, &state, &mut props).unwrap();

        assert!(!props.is_degenerate());
        assert_eq!(props.mole_fractions(), comp.mole_fractions());
        assert!(nearly_equal(props.total_concentration(), 0.04, TOL));
        assert!(nearly_equal(
            props.partial_pressures()[0],
            0.75 * 101_325.0,
            TOL
        ));
        assert!(props.mixture_viscosity() > 0.0);
        assert!(props.density().value > 0.0);
        assert!(props.reynolds() > 0.0);

        let d_co2 = model
            .species_molecular_diffusivity(1, comp.mole_fractions(), k(500.0), pa(101_325.0))
            .unwrap();
        assert!(nearly_equal(
            props.species_molecular_diffusivity(1).unwrap(),
            d_co2,
            TOL
        ));

        let sc = props.schmidt(1).unwrap();
        let pe = props.peclet(1).unwrap();
        assert!(nearly_equal(props.reynolds() * sc, pe, Tolerances {
            abs: 1e-12,
            rel: 1e-6
        }));
    }

    #[test]
    fn compute_properties_degenerate_point() {
        let model = n2_co2();
        let comp = Composition::from_concentrations(&[0.0, 0.0]).unwrap();
        let state = ScalarState::new(pa(101_325.0), k(300.0));
        let mut props = MixtureProperties::with_species_count(2);
        model.compute_properties(&comp, &state, &mut props).unwrap();

        assert!(props.is_degenerate());
        assert_eq!(props.mole_fractions(), &[0.0, 0.0]);
        assert_eq!(props.molecular_diffusivities(), &[0.0, 0.0]);
        assert_eq!(props.mixture_viscosity(), 0.0);
        assert_eq!(props.reynolds(), 0.0);
        assert!(props.species_viscosities().iter().all(|mu| *mu > 0.0));
        assert_eq!(props.total_pressure().value, 101_325.0);
    }

    #[test]
    fn compute_properties_rejects_bad_state_and_leaves_reset() {
        let model = n2_co2();
        let comp = Composition::from_concentrations(&[1.0, 1.0]).unwrap();
        let mut props = MixtureProperties::with_species_count(2);
        model
            .compute_properties(&comp, &ScalarState::new(pa(1e5), k(300.0)), &mut props)
            .unwrap();
        assert!(!props.is_degenerate());

        let err = model
            .compute_properties(&comp, &ScalarState::new(pa(1e5), k(0.0)), &mut props)
            .unwrap_err();
        assert!(matches!(err, MixtureError::Numerical { .. }));
        assert!(props.is_degenerate());
        assert_eq!(props.mixture_viscosity(), 0.0);
    }

    #[test]
    fn index_of_is_case_insensitive() {
        let model = n2_co2();
        assert_eq!(model.index_of("co2"), Some(1));
        assert_eq!(model.index_of("O2"), None);
    }
}
