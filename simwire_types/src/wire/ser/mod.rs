use crate::wire::{ByteOrder, Cursor, Endian, FieldType, FieldTypeInt, Value, WireError};
use std::mem;

mod array;
mod matrix;
mod quantity;
mod scalar;
mod string;

pub use array::*;
pub use matrix::*;
pub use quantity::*;
pub use scalar::*;
pub use string::*;

/// The per-type serializer contract. One implementation per [`FieldType`].
///
/// Invariant: `size(v)` equals exactly the number of bytes `serialize`
/// advances the cursor by for the same `v`, and `deserialize` consumes
/// exactly that many bytes and reconstructs an equal value.
///
/// The `*_with_prefix` variants put the one-byte tag first, which is what
/// lets the decode driver dispatch purely on the leading byte.
pub trait Serializer: Send + Sync {
    fn field_type(&self) -> FieldType;

    fn size(&self, value: &Value) -> Result<usize, WireError>;

    fn size_with_prefix(&self, value: &Value) -> Result<usize, WireError> {
        Ok(mem::size_of::<u8>() + self.size(value)?)
    }

    fn serialize(
        &self,
        value: &Value,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError>;

    fn serialize_with_prefix(
        &self,
        value: &Value,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError> {
        let tag = FieldTypeInt::from(self.field_type());
        (*tag).put(buf, cursor.advance(1), order)?;
        self.serialize(value, buf, cursor, order)
    }

    fn deserialize(
        &self,
        buf: &[u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<Value, WireError>;
}

/// A serializer was handed a value of some other shape. Only reachable
/// through a miswired registry, but the contract stays total.
pub(crate) fn payload_mismatch(value: &Value) -> WireError {
    WireError::UnsupportedType { field_type: FieldType::from(value) }
}

/// Conversions binding a fixed-width scalar primitive to its `Value`
/// variant and scalar tag. The type parameter replaces any runtime
/// element-type recovery: allocation on decode is fully compile-time typed.
pub trait ScalarPayload: Endian + Send + Sync + 'static {
    const SCALAR_TYPE: FieldType;
    fn from_value(value: &Value) -> Option<Self>;
    fn into_value(self) -> Value;
}

/// Conversions binding an array/matrix element primitive to its `Value`
/// variants and tags.
pub trait ElementPayload: Endian + Send + Sync + 'static {
    const ARRAY_TYPE: FieldType;
    const MATRIX_TYPE: FieldType;
    fn array_of(value: &Value) -> Option<&[Self]>
    where
        Self: Sized;
    fn matrix_of(value: &Value) -> Option<&[Vec<Self>]>
    where
        Self: Sized;
    fn value_from_array(items: Vec<Self>) -> Value
    where
        Self: Sized;
    fn value_from_matrix(rows: Vec<Vec<Self>>) -> Value
    where
        Self: Sized;
}

macro_rules! impl_scalar_payload {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl ScalarPayload for $t {
            const SCALAR_TYPE: FieldType = FieldType::$variant;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(x) => Some(*x),
                    _ => None,
                }
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }
    )*};
}
impl_scalar_payload!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    u8 => Char8,
    u16 => Char16,
);

macro_rules! impl_element_payload {
    ($($t:ty => ($arr:ident, $mat:ident)),* $(,)?) => {$(
        impl ElementPayload for $t {
            const ARRAY_TYPE: FieldType = FieldType::$arr;
            const MATRIX_TYPE: FieldType = FieldType::$mat;

            fn array_of(value: &Value) -> Option<&[Self]> {
                match value {
                    Value::$arr(items) => Some(items),
                    _ => None,
                }
            }

            fn matrix_of(value: &Value) -> Option<&[Vec<Self>]> {
                match value {
                    Value::$mat(rows) => Some(rows),
                    _ => None,
                }
            }

            fn value_from_array(items: Vec<Self>) -> Value {
                Value::$arr(items)
            }

            fn value_from_matrix(rows: Vec<Vec<Self>>) -> Value {
                Value::$mat(rows)
            }
        }
    )*};
}
impl_element_payload!(
    i8 => (I8Arr, I8Mat),
    i16 => (I16Arr, I16Mat),
    i32 => (I32Arr, I32Mat),
    i64 => (I64Arr, I64Mat),
    f32 => (F32Arr, F32Mat),
    f64 => (F64Arr, F64Mat),
    bool => (BoolArr, BoolMat),
);
