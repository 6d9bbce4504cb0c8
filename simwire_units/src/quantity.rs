use crate::Unit;

/// A scalar physical quantity: SI magnitude plus display unit.
#[derive(PartialEq, Clone, Debug)]
pub struct Quantity {
    pub si: f64,
    pub unit: Unit,
}
impl Quantity {
    pub fn new(si: f64, unit: Unit) -> Self {
        Self { si, unit }
    }
}

/// A homogeneous vector of SI magnitudes sharing one unit.
#[derive(PartialEq, Clone, Debug)]
pub struct QuantityVector {
    pub si: Vec<f64>,
    pub unit: Unit,
}
impl QuantityVector {
    pub fn new(si: Vec<f64>, unit: Unit) -> Self {
        Self { si, unit }
    }
}

/// A non-jagged grid of SI magnitudes sharing one unit. Row-major.
#[derive(PartialEq, Clone, Debug)]
pub struct QuantityMatrix {
    pub si: Vec<Vec<f64>>,
    pub unit: Unit,
}
impl QuantityMatrix {
    pub fn new(si: Vec<Vec<f64>>, unit: Unit) -> Self {
        Self { si, unit }
    }
}

/// A non-jagged grid of SI magnitudes where each column carries its own
/// unit. `columns.len()` must equal the grid width.
#[derive(PartialEq, Clone, Debug)]
pub struct QuantityVectorArray {
    pub si: Vec<Vec<f64>>,
    pub columns: Vec<Unit>,
}
impl QuantityVectorArray {
    pub fn new(si: Vec<Vec<f64>>, columns: Vec<Unit>) -> Self {
        Self { si, columns }
    }
}
