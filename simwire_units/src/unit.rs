use crate::{BaseUnitDef, MoneyPerUnit, MoneyUnitDef, UnitType};
use std::sync::Arc;

/// A concrete unit, as carried by unit-tagged wire values.
///
/// Catalog-backed units borrow their defs from the static tables; synthesized
/// money-per compounds are shared through `Arc` so that repeated decodes of
/// the same compound resolve to the same instance.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Unit {
    Base(&'static BaseUnitDef),
    Money(&'static MoneyUnitDef),
    MoneyPer(Arc<MoneyPerUnit>),
}

impl Unit {
    pub fn unit_type(&self) -> UnitType {
        match self {
            Unit::Base(def) => def.unit_type,
            Unit::Money(_) => UnitType::Money,
            Unit::MoneyPer(mpu) => mpu.unit_type,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Unit::Base(def) => def.name,
            Unit::Money(def) => def.name,
            Unit::MoneyPer(mpu) => &mpu.name,
        }
    }

    pub fn abbrev(&self) -> &str {
        match self {
            Unit::Base(def) => def.abbrev,
            Unit::Money(def) => def.abbrev,
            Unit::MoneyPer(mpu) => &mpu.abbrev,
        }
    }
}
