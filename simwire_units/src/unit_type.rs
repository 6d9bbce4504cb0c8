use num_derive::{FromPrimitive, ToPrimitive};

/// We manually pin each discriminant because these integers go on the wire:
/// an automatic discriminant may change w/ enum definition change, and wire
/// compatibility depends on these values never changing meaning.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum UnitType {
    Dimensionless = 0,
    Length = 1,
    Area = 2,
    Volume = 3,
    Mass = 4,
    Duration = 5,
    Energy = 6,
    Speed = 7,

    Money = 16,

    MoneyPerArea = 17,
    MoneyPerEnergy = 18,
    MoneyPerLength = 19,
    MoneyPerMass = 20,
    MoneyPerDuration = 21,
    MoneyPerVolume = 22,
}

impl UnitType {
    /// The compound money-per dimension for a denominator dimension, if that
    /// denominator is one of the six supported ones.
    pub fn money_per(denominator: UnitType) -> Option<UnitType> {
        match denominator {
            UnitType::Area => Some(UnitType::MoneyPerArea),
            UnitType::Energy => Some(UnitType::MoneyPerEnergy),
            UnitType::Length => Some(UnitType::MoneyPerLength),
            UnitType::Mass => Some(UnitType::MoneyPerMass),
            UnitType::Duration => Some(UnitType::MoneyPerDuration),
            UnitType::Volume => Some(UnitType::MoneyPerVolume),
            _ => None,
        }
    }

    /// The denominator dimension of a money-per dimension.
    pub fn denominator(self) -> Option<UnitType> {
        match self {
            UnitType::MoneyPerArea => Some(UnitType::Area),
            UnitType::MoneyPerEnergy => Some(UnitType::Energy),
            UnitType::MoneyPerLength => Some(UnitType::Length),
            UnitType::MoneyPerMass => Some(UnitType::Mass),
            UnitType::MoneyPerDuration => Some(UnitType::Duration),
            UnitType::MoneyPerVolume => Some(UnitType::Volume),
            _ => None,
        }
    }
}
