//! Per-point gas transport evaluation.
//!
//! A [`GasPropertyEvaluator`] binds the field values of one evaluation point,
//! refreshes the full mixture property set, and hands it to thin extractors
//! that each produce one output scalar:
//!
//! - [`SpeciesDiffusionEvaluator`]: molecular diffusivity of one species [m²/s]
//! - [`SpeciesDispersionEvaluator`]: axial dispersion of one species [m²/s]
//! - [`MixturePropertyEvaluator`]: a mixture-wide quantity (viscosity, density, ...)
//!
//! Evaluator instances are exclusively owned per evaluation context. Batch and
//! sweep helpers build one instance per worker thread.

pub mod batch;
pub mod config;
pub mod diffusion;
pub mod dispersion;
pub mod error;
pub mod evaluator;
pub mod mixture;
pub mod point;
pub mod sweep;
pub mod traits;

pub use batch::{evaluate_batch, evaluate_batch_sequential};
pub use config::{
    OutputDef, PresetSpecies, SpeciesEntry, SpeciesRef, TransportConfig, TransportSetup,
};
pub use diffusion::SpeciesDiffusionEvaluator;
pub use dispersion::{DispersionCorrelation, SpeciesDispersionEvaluator};
pub use error::{EvalError, EvalResult};
pub use evaluator::{EvalStage, GasPropertyEvaluator};
pub use mixture::{MixtureProperty, MixturePropertyEvaluator};
pub use point::FieldPoint;
pub use sweep::{SweepDefinition, SweepResult, SweepType, SweptQuantity, execute_sweep};
pub use traits::PointEvaluator;
