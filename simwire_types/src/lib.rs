pub mod wire;

pub use simwire_units as units;
