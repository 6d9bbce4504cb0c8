use crate::wire::endian::ensure_elems_remaining;
use crate::wire::ser::{payload_mismatch, ElementPayload, Serializer};
use crate::wire::{ByteOrder, Cursor, ElemCount, Endian, FieldType, Value, WireError};
use std::marker::PhantomData;

/// Fixed-size homogeneous array serializer: 4-byte element count, then the
/// elements back to back.
pub struct ArraySerializer<T: ElementPayload>(PhantomData<T>);

impl<T: ElementPayload> ArraySerializer<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ElementPayload> Default for ArraySerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ElementPayload> Serializer for ArraySerializer<T> {
    fn field_type(&self) -> FieldType {
        T::ARRAY_TYPE
    }

    fn size(&self, value: &Value) -> Result<usize, WireError> {
        let items = T::array_of(value).ok_or_else(|| payload_mismatch(value))?;
        Ok(ElemCount::WIDTH + T::WIDTH * items.len())
    }

    fn serialize(
        &self,
        value: &Value,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError> {
        let items = T::array_of(value).ok_or_else(|| payload_mismatch(value))?;
        ElemCount::of(items)?.put(buf, cursor, order)?;
        for item in items {
            item.put(buf, cursor.advance(T::WIDTH), order)?;
        }
        Ok(())
    }

    fn deserialize(
        &self,
        buf: &[u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<Value, WireError> {
        let count = ElemCount::take(buf, cursor, order)?.as_usize();
        ensure_elems_remaining(buf, cursor.position(), count, T::WIDTH)?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::get(buf, cursor.advance(T::WIDTH), order)?);
        }
        Ok(T::value_from_array(items))
    }
}
