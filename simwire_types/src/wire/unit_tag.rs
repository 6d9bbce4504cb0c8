use crate::wire::{ByteOrder, Cursor, Endian, WireError};
use num_traits::{FromPrimitive, ToPrimitive};
use simwire_units::{base_unit, money_unit, MoneyPerCache, Unit, UnitError, UnitType};
use std::mem;

mod unit_tag_test;

/// Encodes a [`Unit`] as its compact wire tag and back.
///
/// Tag widths: 2 bytes for catalog units (type + display), 3 for money
/// (type + ISO 4217 code), 4 for money-per compounds (type + money code +
/// denominator display). The money code honors the per-call byte order.
///
/// Owns the [`MoneyPerCache`], so every compound decoded through one codec
/// instance resolves to one shared instance.
pub struct UnitTagCodec {
    cache: MoneyPerCache,
}

impl Default for UnitTagCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTagCodec {
    /// Narrowest possible unit tag: type byte + display byte.
    pub const MIN_WIDTH: usize = 2;

    pub fn new() -> Self {
        Self { cache: MoneyPerCache::new() }
    }

    pub fn size(&self, unit: &Unit) -> usize {
        let body = match unit {
            Unit::Base(_) => mem::size_of::<u8>(),
            Unit::Money(_) => mem::size_of::<u16>(),
            Unit::MoneyPer(_) => mem::size_of::<u16>() + mem::size_of::<u8>(),
        };
        mem::size_of::<u8>() + body
    }

    pub fn encode(
        &self,
        unit: &Unit,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError> {
        let type_code = unit.unit_type().to_u8().unwrap();
        type_code.put(buf, cursor.advance(1), order)?;
        match unit {
            Unit::Base(def) => def.display_code.put(buf, cursor.advance(1), order),
            Unit::Money(def) => def.code.put(buf, cursor.advance(2), order),
            Unit::MoneyPer(mpu) => {
                mpu.money.code.put(buf, cursor.advance(2), order)?;
                mpu.per.display_code.put(buf, cursor.advance(1), order)
            }
        }
    }

    pub fn decode(
        &self,
        buf: &[u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<Unit, WireError> {
        let at = cursor.position();
        let type_code = u8::get(buf, cursor.advance(1), order)?;
        let unit_type = UnitType::from_u8(type_code).ok_or(WireError::UnknownUnit {
            at,
            source: UnitError::UnknownUnitType { code: type_code },
        })?;

        if unit_type == UnitType::Money {
            let money_code = u16::get(buf, cursor.advance(2), order)?;
            let def = money_unit(money_code).ok_or(WireError::UnknownUnit {
                at,
                source: UnitError::UnknownMoneyCode { code: money_code },
            })?;
            return Ok(Unit::Money(def));
        }

        if let Some(denominator) = unit_type.denominator() {
            let money_code = u16::get(buf, cursor.advance(2), order)?;
            let per_display = u8::get(buf, cursor.advance(1), order)?;
            let money = money_unit(money_code).ok_or(WireError::UnknownUnit {
                at,
                source: UnitError::UnknownMoneyCode { code: money_code },
            })?;
            let per = base_unit(denominator, per_display).ok_or(WireError::UnknownUnit {
                at,
                source: UnitError::UnknownDisplayCode { unit_type: denominator, code: per_display },
            })?;
            return self
                .cache
                .money_per(money, per)
                .map_err(|source| WireError::UnknownUnit { at, source });
        }

        let display_code = u8::get(buf, cursor.advance(1), order)?;
        let def = base_unit(unit_type, display_code).ok_or(WireError::UnknownUnit {
            at,
            source: UnitError::UnknownDisplayCode { unit_type, code: display_code },
        })?;
        Ok(Unit::Base(def))
    }
}
