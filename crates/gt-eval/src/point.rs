//! Field values supplied by the host solver for one evaluation point.

use gt_core::units::{Length, Pressure, Temperature, Velocity};
use gt_mixture::ScalarState;

/// Read-only field values for one evaluation point.
///
/// Borrowed for the duration of a single evaluation call; evaluators never
/// keep the borrow past the call.
#[derive(Debug, Clone, Copy)]
pub struct FieldPoint<'a> {
    /// Species concentrations [mol/L], one per configured species
    pub concentrations: &'a [f64],
    pub state: ScalarState,
}

impl<'a> FieldPoint<'a> {
    /// Point at rest with zero characteristic length.
    pub fn new(concentrations: &'a [f64], pressure: Pressure, temperature: Temperature) -> Self {
        Self {
            concentrations,
            state: ScalarState::new(pressure, temperature),
        }
    }

    pub fn with_velocity(mut self, vx: Velocity, vy: Velocity, vz: Velocity) -> Self {
        self.state = self.state.with_velocity(vx, vy, vz);
        self
    }

    pub fn with_char_length(mut self, char_length: Length) -> Self {
        self.state = self.state.with_char_length(char_length);
        self
    }
}
