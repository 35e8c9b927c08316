//! gt-core: shared foundation for gastrans.
//!
//! Contains:
//! - units (uom SI types, constructors and unit conversions)
//! - numeric (tolerances and float domain checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{GtError, GtResult};
pub use numeric::*;
pub use units::*;
