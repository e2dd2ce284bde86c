//! vp-core: shared foundation for vaporplume.
//!
//! Contains:
//! - units (uom SI types, constructors, CGS table conversions)
//! - numeric (Real, finiteness and monotonicity checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{VpError, VpResult};
pub use numeric::*;
pub use units::*;
