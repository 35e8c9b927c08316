//! gt-mixture: kinetic-theory gas mixture properties for gastrans.
//!
//! Provides:
//! - Per-species physical constants (molecular weight, Sutherland fit, specific heat)
//! - A catalog of common gases with preset constants
//! - Composition handling (concentrations to mole fractions, with a degenerate fallback)
//! - Scalar point state (pressure, temperature, velocity, characteristic length)
//! - `GasMixtureModel` for viscosity, specific heat, density and diffusivity calculations
//! - `MixtureProperties`, the full property set computed for one evaluation point
//!
//! # Example
//!
//! ```
//! use gt_core::units::{k, pa};
//! use gt_mixture::{Composition, GasMixtureModel, KnownGas, MixtureProperties, ScalarState};
//!
//! let model = GasMixtureModel::configure(vec![
//!     KnownGas::N2.constants(),
//!     KnownGas::CO2.constants(),
//! ])
//! .unwrap();
//!
//! let comp = Composition::from_concentrations(&[0.035, 0.005]).unwrap();
//! let state = ScalarState::new(pa(101_325.0), k(500.0));
//! let mut props = MixtureProperties::with_species_count(model.species_count());
//! model.compute_properties(&comp, &state, &mut props).unwrap();
//! println!("D_CO2 = {:e} m²/s", props.species_molecular_diffusivity(1).unwrap());
//! ```

pub mod catalog;
pub mod composition;
pub mod error;
pub mod model;
pub mod properties;
pub mod species;
pub mod state;

pub use catalog::{GasCatalogEntry, KnownGas, filter_catalog, find_gas, gas_catalog};
pub use composition::Composition;
pub use error::{MixtureError, MixtureResult};
pub use model::GasMixtureModel;
pub use properties::MixtureProperties;
pub use species::SpeciesConstants;
pub use state::ScalarState;
