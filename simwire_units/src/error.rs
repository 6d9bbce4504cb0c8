use crate::UnitType;
use thiserror::Error;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("unknown unit type code {code}")]
    UnknownUnitType { code: u8 },

    #[error("unknown display code {code} within {unit_type:?}")]
    UnknownDisplayCode { unit_type: UnitType, code: u8 },

    #[error("unknown ISO 4217 money code {code}")]
    UnknownMoneyCode { code: u16 },

    #[error("{unit_type:?} is not a supported money-per denominator")]
    UnsupportedDenominator { unit_type: UnitType },
}
