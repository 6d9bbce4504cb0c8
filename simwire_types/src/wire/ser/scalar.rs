use crate::wire::ser::{payload_mismatch, ScalarPayload, Serializer};
use crate::wire::{ByteOrder, Cursor, Endian, FieldType, Value, WireError};
use std::marker::PhantomData;

/// Fixed-width scalar serializer. The payload is the encoded value alone;
/// its width is a compile-time constant of the element type.
pub struct ScalarSerializer<T: ScalarPayload>(PhantomData<T>);

impl<T: ScalarPayload> ScalarSerializer<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ScalarPayload> Default for ScalarSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ScalarPayload> Serializer for ScalarSerializer<T> {
    fn field_type(&self) -> FieldType {
        T::SCALAR_TYPE
    }

    fn size(&self, value: &Value) -> Result<usize, WireError> {
        T::from_value(value).ok_or_else(|| payload_mismatch(value))?;
        Ok(T::WIDTH)
    }

    fn serialize(
        &self,
        value: &Value,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError> {
        let x = T::from_value(value).ok_or_else(|| payload_mismatch(value))?;
        x.put(buf, cursor.advance(T::WIDTH), order)
    }

    fn deserialize(
        &self,
        buf: &[u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<Value, WireError> {
        let x = T::get(buf, cursor.advance(T::WIDTH), order)?;
        Ok(x.into_value())
    }
}
