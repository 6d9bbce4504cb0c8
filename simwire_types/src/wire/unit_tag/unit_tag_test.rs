#[cfg(test)]
mod test {
    use crate::wire::{ByteOrder, Cursor, UnitTagCodec, WireError};
    use anyhow::{anyhow, Result};
    use simwire_units::{
        base_unit, money_unit, MoneyPerCache, Unit, UnitError, UnitType,
    };
    use std::sync::Arc;

    fn encode_one(codec: &UnitTagCodec, unit: &Unit, order: ByteOrder) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; codec.size(unit)];
        let mut cursor = Cursor::new();
        codec.encode(unit, &mut buf, &mut cursor, order)?;
        assert_eq!(cursor.position(), buf.len());
        Ok(buf)
    }

    fn kilometer() -> Unit {
        Unit::Base(base_unit(UnitType::Length, 1).unwrap())
    }
    fn usd() -> Unit {
        Unit::Money(money_unit(840).unwrap())
    }
    fn usd_per_m2() -> Unit {
        let cache = MoneyPerCache::new();
        cache
            .money_per(money_unit(840).unwrap(), base_unit(UnitType::Area, 0).unwrap())
            .unwrap()
    }

    #[test]
    fn tag_widths_by_unit_kind() -> Result<()> {
        let codec = UnitTagCodec::new();
        assert_eq!(codec.size(&kilometer()), 2);
        assert_eq!(codec.size(&usd()), 3);
        assert_eq!(codec.size(&usd_per_m2()), 4);
        Ok(())
    }

    #[test]
    fn roundtrip_each_kind_both_orders() -> Result<()> {
        let codec = UnitTagCodec::new();
        for unit in [kilometer(), usd(), usd_per_m2()] {
            for order in [ByteOrder::Big, ByteOrder::Little] {
                let buf = encode_one(&codec, &unit, order)?;
                let mut cursor = Cursor::new();
                let decoded = codec.decode(&buf, &mut cursor, order)?;
                assert_eq!(decoded, unit);
                assert_eq!(cursor.position(), buf.len());
            }
        }
        Ok(())
    }

    #[test]
    fn money_code_honors_byte_order() -> Result<()> {
        let codec = UnitTagCodec::new();
        let be = encode_one(&codec, &usd(), ByteOrder::Big)?;
        let le = encode_one(&codec, &usd(), ByteOrder::Little)?;
        // ISO 4217 USD = 840 = 0x0348.
        assert_eq!(&be[1..], &[0x03, 0x48]);
        assert_eq!(&le[1..], &[0x48, 0x03]);
        Ok(())
    }

    #[test]
    fn repeated_compound_decode_is_arc_stable() -> Result<()> {
        let codec = UnitTagCodec::new();
        let buf = encode_one(&codec, &usd_per_m2(), ByteOrder::Big)?;

        let mut cursor = Cursor::new();
        let first = codec.decode(&buf, &mut cursor, ByteOrder::Big)?;
        let mut cursor = Cursor::new();
        let second = codec.decode(&buf, &mut cursor, ByteOrder::Big)?;

        assert_eq!(first, second);
        match (&first, &second) {
            (Unit::MoneyPer(a), Unit::MoneyPer(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => return Err(anyhow!("expected MoneyPer units, got {:?}", first)),
        }
        Ok(())
    }

    #[test]
    fn unknown_codes_are_fatal() {
        let codec = UnitTagCodec::new();

        // Unit type code 250 does not exist.
        let mut cursor = Cursor::new();
        let res = codec.decode(&[250, 0], &mut cursor, ByteOrder::Big);
        assert_eq!(
            res,
            Err(WireError::UnknownUnit {
                at: 0,
                source: UnitError::UnknownUnitType { code: 250 },
            })
        );

        // Money code 1 is not in the catalog.
        let mut cursor = Cursor::new();
        let res = codec.decode(&[UnitType::Money as u8, 0, 1], &mut cursor, ByteOrder::Big);
        assert_eq!(
            res,
            Err(WireError::UnknownUnit {
                at: 0,
                source: UnitError::UnknownMoneyCode { code: 1 },
            })
        );

        // Length display code 200 is not in the catalog.
        let mut cursor = Cursor::new();
        let res = codec.decode(&[UnitType::Length as u8, 200], &mut cursor, ByteOrder::Big);
        assert_eq!(
            res,
            Err(WireError::UnknownUnit {
                at: 0,
                source: UnitError::UnknownDisplayCode { unit_type: UnitType::Length, code: 200 },
            })
        );

        // Money-per tag whose denominator display code is unknown.
        let mut cursor = Cursor::new();
        let res = codec.decode(
            &[UnitType::MoneyPerArea as u8, 0x03, 0x48, 200],
            &mut cursor,
            ByteOrder::Big,
        );
        assert_eq!(
            res,
            Err(WireError::UnknownUnit {
                at: 0,
                source: UnitError::UnknownDisplayCode { unit_type: UnitType::Area, code: 200 },
            })
        );
    }
}
