//! Point composition: raw concentrations to mole fractions.

use crate::error::{MixtureError, MixtureResult};

/// Mole fractions derived from one point's species concentrations.
///
/// Negative concentrations (solver undershoot) count as zero. When the total
/// concentration is zero the fractions are all zero and the composition is
/// flagged degenerate instead of dividing by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    fractions: Vec<f64>,
    total: f64,
    degenerate: bool,
}

impl Composition {
    /// An all-zero (degenerate) composition with `n` species, used as a reusable buffer.
    pub fn with_species_count(n: usize) -> Self {
        Self {
            fractions: vec![0.0; n],
            total: 0.0,
            degenerate: true,
        }
    }

    /// Build a composition from concentrations [mol/L].
    pub fn from_concentrations(concentrations: &[f64]) -> MixtureResult<Self> {
        let mut comp = Self::with_species_count(concentrations.len());
        comp.update(concentrations)?;
        Ok(comp)
    }

    /// Recompute in place from a new set of concentrations [mol/L].
    ///
    /// On error the composition is left degenerate.
    pub fn update(&mut self, concentrations: &[f64]) -> MixtureResult<()> {
        self.fractions.clear();
        self.fractions.resize(concentrations.len(), 0.0);
        self.total = 0.0;
        self.degenerate = true;

        if concentrations.is_empty() {
            return Err(MixtureError::config("empty concentration list"));
        }

        let mut total = 0.0;
        for &c in concentrations {
            if !c.is_finite() {
                return Err(MixtureError::Numerical {
                    what: "species concentration",
                    value: c,
                });
            }
            total += c.max(0.0);
        }

        if total <= 0.0 {
            return Ok(());
        }

        for (frac, &c) in self.fractions.iter_mut().zip(concentrations) {
            *frac = c.max(0.0) / total;
        }
        self.total = total;
        self.degenerate = false;
        Ok(())
    }

    pub fn mole_fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Mole fraction of species `i` (`None` if out of range).
    pub fn mole_fraction(&self, i: usize) -> Option<f64> {
        self.fractions.get(i).copied()
    }

    /// Sum of the (clamped) concentrations [mol/L].
    pub fn total_concentration(&self) -> f64 {
        self.total
    }

    /// True when the total concentration is zero.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}
