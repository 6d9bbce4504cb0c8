use crate::wire::Value;
use derive_more::{Deref, From};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

/// The raw one-byte wire tag.
#[derive(From, Deref, Clone, Copy, Debug)]
pub struct FieldTypeInt(pub u8);

impl From<FieldType> for FieldTypeInt {
    fn from(field_type: FieldType) -> Self {
        let int = field_type.to_u8().unwrap();
        Self(int)
    }
}

/// We manually map enum members to tag integers because:
/// - Rust's automatic discriminants may change w/ enum definition change,
///   and wire compatibility depends on these values never changing meaning.
/// - The grouping gaps (scalars, strings, arrays, matrices, unit-tagged)
///   are part of the table's shape and must stay stable as groups grow.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum FieldType {
    I8 = 0,
    I16 = 1,
    I32 = 2,
    I64 = 3,
    F32 = 4,
    F64 = 5,
    Bool = 6,
    Char8 = 7,
    Char16 = 8,

    Str8 = 9,
    Str16 = 10,

    I8Arr = 11,
    I16Arr = 12,
    I32Arr = 13,
    I64Arr = 14,
    F32Arr = 15,
    F64Arr = 16,
    BoolArr = 17,

    I8Mat = 18,
    I16Mat = 19,
    I32Mat = 20,
    I64Mat = 21,
    F32Mat = 22,
    F64Mat = 23,
    BoolMat = 24,

    Quantity = 25,
    QuantityArr = 26,
    QuantityMat = 27,
    QuantityVecArr = 28,
}

impl FieldType {
    pub fn from_int(int: FieldTypeInt) -> Option<Self> {
        Self::from_u8(*int)
    }
}

/// The single classification step from a runtime value to its wire tag.
impl From<&Value> for FieldType {
    fn from(value: &Value) -> Self {
        match value {
            Value::I8(_) => FieldType::I8,
            Value::I16(_) => FieldType::I16,
            Value::I32(_) => FieldType::I32,
            Value::I64(_) => FieldType::I64,
            Value::F32(_) => FieldType::F32,
            Value::F64(_) => FieldType::F64,
            Value::Bool(_) => FieldType::Bool,
            Value::Char8(_) => FieldType::Char8,
            Value::Char16(_) => FieldType::Char16,
            Value::Str8(_) => FieldType::Str8,
            Value::Str16(_) => FieldType::Str16,
            Value::I8Arr(_) => FieldType::I8Arr,
            Value::I16Arr(_) => FieldType::I16Arr,
            Value::I32Arr(_) => FieldType::I32Arr,
            Value::I64Arr(_) => FieldType::I64Arr,
            Value::F32Arr(_) => FieldType::F32Arr,
            Value::F64Arr(_) => FieldType::F64Arr,
            Value::BoolArr(_) => FieldType::BoolArr,
            Value::I8Mat(_) => FieldType::I8Mat,
            Value::I16Mat(_) => FieldType::I16Mat,
            Value::I32Mat(_) => FieldType::I32Mat,
            Value::I64Mat(_) => FieldType::I64Mat,
            Value::F32Mat(_) => FieldType::F32Mat,
            Value::F64Mat(_) => FieldType::F64Mat,
            Value::BoolMat(_) => FieldType::BoolMat,
            Value::Quantity(_) => FieldType::Quantity,
            Value::QuantityArr(_) => FieldType::QuantityArr,
            Value::QuantityMat(_) => FieldType::QuantityMat,
            Value::QuantityVecArr(_) => FieldType::QuantityVecArr,
        }
    }
}
