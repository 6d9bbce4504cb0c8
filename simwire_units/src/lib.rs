//! The unit model consumed by the `simwire_types` wire codec.
//!
//! A unit is identified on the wire by its [`UnitType`] (which physical
//! dimension) plus a display code (which concrete unit within that
//! dimension). Money units use ISO 4217 numeric codes as their display
//! codes. Compound money-per-X units are not tabulated; they are
//! synthesized on first use through a [`MoneyPerCache`].
//!
//! Quantities hold SI magnitudes only. Converting between SI and display
//! magnitudes is somebody else's problem.

mod catalog;
mod error;
mod money_per;
mod quantity;
mod unit;
mod unit_type;

pub use catalog::*;
pub use error::*;
pub use money_per::*;
pub use quantity::*;
pub use unit::*;
pub use unit_type::*;
