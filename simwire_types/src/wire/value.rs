use simwire_units::{Quantity, QuantityMatrix, QuantityVector, QuantityVectorArray};

/// One field of a message: the closed sum of every serializable payload
/// shape. The encode driver classifies a `Value` into its [`FieldType`]
/// exactly once per value, then dispatches through the registry.
///
/// `Char8` is a raw Latin-1 code point, `Char16` a UTF-16 code unit. `Str8`
/// travels as UTF-8 bytes, `Str16` as UTF-16 code units. Matrix variants
/// are row-major and must be non-empty and non-jagged.
///
/// [`FieldType`]: crate::wire::FieldType
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Char8(u8),
    Char16(u16),

    Str8(String),
    Str16(String),

    I8Arr(Vec<i8>),
    I16Arr(Vec<i16>),
    I32Arr(Vec<i32>),
    I64Arr(Vec<i64>),
    F32Arr(Vec<f32>),
    F64Arr(Vec<f64>),
    BoolArr(Vec<bool>),

    I8Mat(Vec<Vec<i8>>),
    I16Mat(Vec<Vec<i16>>),
    I32Mat(Vec<Vec<i32>>),
    I64Mat(Vec<Vec<i64>>),
    F32Mat(Vec<Vec<f32>>),
    F64Mat(Vec<Vec<f64>>),
    BoolMat(Vec<Vec<bool>>),

    Quantity(Quantity),
    QuantityArr(QuantityVector),
    QuantityMat(QuantityMatrix),
    QuantityVecArr(QuantityVectorArray),
}
