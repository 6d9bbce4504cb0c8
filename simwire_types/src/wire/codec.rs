use crate::wire::{ByteOrder, Cursor, Endian, FieldType, FieldTypeInt, SerializerRegistry, Value, WireError};

mod layout_test;

/// Encode an ordered, heterogeneous value sequence into one flat buffer.
///
/// Two passes over the same sequence: the first resolves each value's
/// serializer and accumulates `size_with_prefix`, the second fills a buffer
/// of exactly that size. The serializer list from pass 1 is reused in pass 2
/// so sizing and writing can never disagree on dispatch.
pub fn encode(
    values: &[Value],
    order: ByteOrder,
    registry: &SerializerRegistry,
) -> Result<Vec<u8>, WireError> {
    let mut total = 0usize;
    let mut sers = Vec::with_capacity(values.len());
    for value in values {
        let ser = registry.for_value(value)?;
        total += ser.size_with_prefix(value)?;
        sers.push(ser);
    }

    let mut buf = vec![0u8; total];
    let mut cursor = Cursor::new();
    for (value, ser) in values.iter().zip(sers) {
        ser.serialize_with_prefix(value, &mut buf, &mut cursor, order)?;
    }
    debug_assert_eq!(cursor.position(), buf.len());
    Ok(buf)
}

/// Decode a buffer front to back: read one tag byte, dispatch, let that
/// deserializer consume exactly its payload, repeat until the cursor reaches
/// the buffer length. Any leftover or overrun is an error, never a partial
/// result.
pub fn decode(
    buf: &[u8],
    order: ByteOrder,
    registry: &SerializerRegistry,
) -> Result<Vec<Value>, WireError> {
    let mut cursor = Cursor::new();
    let mut values = Vec::new();
    while cursor.position() < buf.len() {
        let at = cursor.position();
        let tag = u8::get(buf, cursor.advance(1), order)?;
        let field_type = FieldType::from_int(FieldTypeInt::from(tag))
            .ok_or(WireError::UnknownTag { tag, at })?;
        let ser = registry
            .by_field_type(field_type)
            .ok_or(WireError::UnknownTag { tag, at })?;
        values.push(ser.deserialize(buf, &mut cursor, order)?);
    }
    Ok(values)
}
