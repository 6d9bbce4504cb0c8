#[cfg(test)]
mod test {
    use crate::wire::ser::ScalarSerializer;
    use crate::wire::{
        decode, encode, ByteOrder, FieldType, SerializerRegistry, Value, WireError,
    };
    use anyhow::Result;

    #[test]
    fn worked_example_layout_big_endian() -> Result<()> {
        let registry = SerializerRegistry::standard();
        let values = vec![
            Value::I32(42),
            Value::Str8(String::from("hi")),
            Value::F64Arr(vec![1.5, -2.25]),
        ];
        let buf = encode(&values, ByteOrder::Big, &registry)?;

        assert_eq!(buf.len(), 1 + 4 + 1 + 4 + 2 + 1 + 4 + 16);

        assert_eq!(buf[0], FieldType::I32 as u8);
        assert_eq!(&buf[1..5], &42i32.to_be_bytes());

        assert_eq!(buf[5], FieldType::Str8 as u8);
        assert_eq!(&buf[6..10], &2u32.to_be_bytes());
        assert_eq!(&buf[10..12], b"hi");

        assert_eq!(buf[12], FieldType::F64Arr as u8);
        assert_eq!(&buf[13..17], &2u32.to_be_bytes());
        assert_eq!(&buf[17..25], &1.5f64.to_be_bytes());
        assert_eq!(&buf[25..33], &(-2.25f64).to_be_bytes());

        let decoded = decode(&buf, ByteOrder::Big, &registry)?;
        assert_eq!(decoded, values);
        Ok(())
    }

    #[test]
    fn byte_orders_differ_and_decode_with_their_own() -> Result<()> {
        let registry = SerializerRegistry::standard();
        let values = vec![Value::I32(0x0102_0304)];

        let be = encode(&values, ByteOrder::Big, &registry)?;
        let le = encode(&values, ByteOrder::Little, &registry)?;
        assert_ne!(be, le);
        assert_eq!(be[0], le[0]); // the tag byte is order-insensitive
        assert_eq!(&be[1..], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&le[1..], &[0x04, 0x03, 0x02, 0x01]);

        assert_eq!(decode(&be, ByteOrder::Big, &registry)?, values);
        assert_eq!(decode(&le, ByteOrder::Little, &registry)?, values);

        // Mismatched order decodes cleanly but to the byte-swapped value.
        let swapped = decode(&le, ByteOrder::Big, &registry)?;
        assert_eq!(swapped, vec![Value::I32(0x0403_0201)]);
        Ok(())
    }

    #[test]
    fn bool_layout() -> Result<()> {
        let registry = SerializerRegistry::standard();
        let buf = encode(&[Value::Bool(true), Value::Bool(false)], ByteOrder::Big, &registry)?;
        assert_eq!(buf, vec![FieldType::Bool as u8, 1, FieldType::Bool as u8, 0]);
        Ok(())
    }

    #[test]
    fn unknown_tag_reports_tag_and_position() {
        let registry = SerializerRegistry::standard();
        let buf = [FieldType::Bool as u8, 1, 200];
        let res = decode(&buf, ByteOrder::Big, &registry);
        assert_eq!(res, Err(WireError::UnknownTag { tag: 200, at: 2 }));
    }

    #[test]
    fn truncated_buffer_is_a_bounds_error() -> Result<()> {
        let registry = SerializerRegistry::standard();
        let buf = encode(&[Value::I64(-1)], ByteOrder::Little, &registry)?;
        let res = decode(&buf[..buf.len() - 1], ByteOrder::Little, &registry);
        assert!(matches!(res, Err(WireError::Bounds { .. })), "{:?}", res);
        Ok(())
    }

    #[test]
    fn oversized_decoded_count_is_a_bounds_error() {
        let registry = SerializerRegistry::standard();
        // I32Arr claiming u32::MAX elements with a 4-byte body.
        let mut buf = vec![FieldType::I32Arr as u8];
        buf.extend_from_slice(&u32::MAX.to_be_bytes());
        buf.extend_from_slice(&[0, 0, 0, 0]);
        let res = decode(&buf, ByteOrder::Big, &registry);
        assert!(matches!(res, Err(WireError::Bounds { .. })), "{:?}", res);
    }

    #[test]
    fn jagged_and_empty_matrices_are_rejected() {
        let registry = SerializerRegistry::standard();
        let jagged = Value::I32Mat(vec![vec![1, 2, 3], vec![4, 5]]);
        let zero_height = Value::I32Mat(vec![]);
        let zero_width = Value::I32Mat(vec![vec![], vec![]]);
        for value in [jagged, zero_height, zero_width] {
            let res = encode(std::slice::from_ref(&value), ByteOrder::Big, &registry);
            assert!(matches!(res, Err(WireError::Shape { .. })), "{:?}", value);
        }
    }

    #[test]
    fn jagged_and_empty_quantity_matrices_are_rejected() {
        use simwire_units::{base_unit, QuantityMatrix, Unit, UnitType};
        let registry = SerializerRegistry::standard();
        let meter = Unit::Base(base_unit(UnitType::Length, 0).unwrap());
        let jagged = QuantityMatrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]], meter.clone());
        let zero_height = QuantityMatrix::new(vec![], meter.clone());
        let zero_width = QuantityMatrix::new(vec![vec![], vec![]], meter);
        for qm in [jagged, zero_height, zero_width] {
            let value = Value::QuantityMat(qm);
            let res = encode(std::slice::from_ref(&value), ByteOrder::Big, &registry);
            assert!(matches!(res, Err(WireError::Shape { .. })), "{:?}", value);
        }
    }

    #[test]
    fn oversized_matrix_header_is_a_bounds_error() {
        let registry = SerializerRegistry::standard();
        // u32::MAX x u32::MAX cells: the byte count alone overflows usize.
        let mut buf = vec![FieldType::I64Mat as u8];
        buf.extend_from_slice(&u32::MAX.to_be_bytes());
        buf.extend_from_slice(&u32::MAX.to_be_bytes());
        let res = decode(&buf, ByteOrder::Big, &registry);
        assert!(matches!(res, Err(WireError::Bounds { .. })), "{:?}", res);
    }

    #[test]
    fn oversized_vector_array_width_is_a_bounds_error() {
        let registry = SerializerRegistry::standard();
        // Width u32::MAX cannot fit that many unit tags in a 9-byte buffer;
        // the header must fail the bounds gate, not size an allocation.
        let mut buf = vec![FieldType::QuantityVecArr as u8];
        buf.extend_from_slice(&1u32.to_be_bytes());
        buf.extend_from_slice(&u32::MAX.to_be_bytes());
        let res = decode(&buf, ByteOrder::Big, &registry);
        assert!(matches!(res, Err(WireError::Bounds { .. })), "{:?}", res);
    }

    #[test]
    fn decoded_empty_matrix_header_is_rejected() {
        let registry = SerializerRegistry::standard();
        let mut buf = vec![FieldType::I32Mat as u8];
        buf.extend_from_slice(&0u32.to_be_bytes());
        buf.extend_from_slice(&0u32.to_be_bytes());
        let res = decode(&buf, ByteOrder::Big, &registry);
        assert!(matches!(res, Err(WireError::Shape { .. })), "{:?}", res);
    }

    #[test]
    fn vector_array_column_mismatch_is_rejected() {
        use simwire_units::{base_unit, QuantityVectorArray, Unit, UnitType};
        let registry = SerializerRegistry::standard();
        let meter = Unit::Base(base_unit(UnitType::Length, 0).unwrap());
        // Width 2, but only one column unit.
        let value = Value::QuantityVecArr(QuantityVectorArray::new(
            vec![vec![1.0, 2.0]],
            vec![meter],
        ));
        let res = encode(&[value], ByteOrder::Big, &registry);
        assert!(matches!(res, Err(WireError::Shape { .. })), "{:?}", res);
    }

    #[test]
    fn partial_registry_rejects_unregistered_types() {
        let registry = SerializerRegistry::new(vec![Box::new(ScalarSerializer::<i32>::new())]);

        let res = encode(
            &[Value::I32(1), Value::Str8(String::from("x"))],
            ByteOrder::Big,
            &registry,
        );
        assert_eq!(res, Err(WireError::UnsupportedType { field_type: FieldType::Str8 }));

        // The registered type still works.
        let buf = encode(&[Value::I32(7)], ByteOrder::Big, &registry).unwrap();
        assert_eq!(decode(&buf, ByteOrder::Big, &registry).unwrap(), vec![Value::I32(7)]);
    }
}
