//! Scalar field values at one evaluation point.

use crate::error::{MixtureError, MixtureResult};
use gt_core::units::{Length, Pressure, Temperature, Velocity, m, mps};

/// Pressure, temperature, velocity and characteristic length at one point.
///
/// Bound fresh for every evaluation; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarState {
    pub pressure: Pressure,
    pub temperature: Temperature,
    /// Velocity components (x, y, z)
    pub velocity: [Velocity; 3],
    /// Characteristic length, typically the hydraulic diameter
    pub char_length: Length,
}

impl ScalarState {
    /// State at rest with zero characteristic length.
    pub fn new(pressure: Pressure, temperature: Temperature) -> Self {
        Self {
            pressure,
            temperature,
            velocity: [mps(0.0); 3],
            char_length: m(0.0),
        }
    }

    pub fn with_velocity(mut self, vx: Velocity, vy: Velocity, vz: Velocity) -> Self {
        self.velocity = [vx, vy, vz];
        self
    }

    pub fn with_char_length(mut self, char_length: Length) -> Self {
        self.char_length = char_length;
        self
    }

    pub fn pressure_pa(&self) -> f64 {
        self.pressure.value
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature.value
    }

    pub fn char_length_m(&self) -> f64 {
        self.char_length.value
    }

    /// Velocity magnitude [m/s]. Exactly zero when all components are zero.
    pub fn velocity_magnitude(&self) -> f64 {
        let [vx, vy, vz] = self.velocity;
        (vx.value * vx.value + vy.value * vy.value + vz.value * vz.value).sqrt()
    }

    /// Check the state against the domain of the gas-property formulas.
    ///
    /// Temperature and pressure must be positive and finite, velocity finite,
    /// and the characteristic length finite and non-negative.
    pub fn validate(&self) -> MixtureResult<()> {
        let t = self.temperature_k();
        if !t.is_finite() || t <= 0.0 {
            return Err(MixtureError::Numerical {
                what: "temperature must be positive and finite",
                value: t,
            });
        }

        let p = self.pressure_pa();
        if !p.is_finite() || p <= 0.0 {
            return Err(MixtureError::Numerical {
                what: "pressure must be positive and finite",
                value: p,
            });
        }

        for v in self.velocity {
            if !v.value.is_finite() {
                return Err(MixtureError::Numerical {
                    what: "velocity component must be finite",
                    value: v.value,
                });
            }
        }

        let l = self.char_length_m();
        if !l.is_finite() || l < 0.0 {
            return Err(MixtureError::Numerical {
                what: "characteristic length must be non-negative and finite",
                value: l,
            });
        }

        Ok(())
    }
}
