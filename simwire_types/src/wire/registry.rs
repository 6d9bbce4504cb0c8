use crate::wire::ser::{
    ArraySerializer, MatrixSerializer, QuantityArraySerializer, QuantityMatrixSerializer,
    QuantitySerializer, QuantityVecArraySerializer, ScalarSerializer, Serializer,
    StringSerializer,
};
use crate::wire::{FieldType, UnitTagCodec, Value, WireError};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable `FieldType -> Serializer` table, built once and passed by
/// reference into [`encode`]/[`decode`]. Tests inject partial tables to
/// exercise the unsupported-type path; production callers use
/// [`SerializerRegistry::standard`].
///
/// [`encode`]: crate::wire::encode
/// [`decode`]: crate::wire::decode
pub struct SerializerRegistry {
    by_type: HashMap<FieldType, Box<dyn Serializer>>,
}

impl SerializerRegistry {
    pub fn new(serializers: Vec<Box<dyn Serializer>>) -> Self {
        let by_type = serializers
            .into_iter()
            .map(|ser| (ser.field_type(), ser))
            .collect();
        Self { by_type }
    }

    /// The full table over every [`FieldType`], with a fresh unit-tag codec
    /// (and thus a fresh money-per cache).
    pub fn standard() -> Self {
        Self::with_unit_codec(Arc::new(UnitTagCodec::new()))
    }

    /// The full table sharing a caller-provided unit-tag codec.
    pub fn with_unit_codec(codec: Arc<UnitTagCodec>) -> Self {
        Self::new(vec![
            Box::new(ScalarSerializer::<i8>::new()),
            Box::new(ScalarSerializer::<i16>::new()),
            Box::new(ScalarSerializer::<i32>::new()),
            Box::new(ScalarSerializer::<i64>::new()),
            Box::new(ScalarSerializer::<f32>::new()),
            Box::new(ScalarSerializer::<f64>::new()),
            Box::new(ScalarSerializer::<bool>::new()),
            Box::new(ScalarSerializer::<u8>::new()),
            Box::new(ScalarSerializer::<u16>::new()),
            //
            Box::new(StringSerializer::narrow()),
            Box::new(StringSerializer::wide()),
            //
            Box::new(ArraySerializer::<i8>::new()),
            Box::new(ArraySerializer::<i16>::new()),
            Box::new(ArraySerializer::<i32>::new()),
            Box::new(ArraySerializer::<i64>::new()),
            Box::new(ArraySerializer::<f32>::new()),
            Box::new(ArraySerializer::<f64>::new()),
            Box::new(ArraySerializer::<bool>::new()),
            //
            Box::new(MatrixSerializer::<i8>::new()),
            Box::new(MatrixSerializer::<i16>::new()),
            Box::new(MatrixSerializer::<i32>::new()),
            Box::new(MatrixSerializer::<i64>::new()),
            Box::new(MatrixSerializer::<f32>::new()),
            Box::new(MatrixSerializer::<f64>::new()),
            Box::new(MatrixSerializer::<bool>::new()),
            //
            Box::new(QuantitySerializer::new(Arc::clone(&codec))),
            Box::new(QuantityArraySerializer::new(Arc::clone(&codec))),
            Box::new(QuantityMatrixSerializer::new(Arc::clone(&codec))),
            Box::new(QuantityVecArraySerializer::new(codec)),
        ])
    }

    pub fn by_field_type(&self, field_type: FieldType) -> Option<&dyn Serializer> {
        self.by_type.get(&field_type).map(|ser| ser.as_ref())
    }

    /// Classify a value and resolve its serializer, or fail the encode with
    /// an unsupported-type error before any buffer exists.
    pub fn for_value(&self, value: &Value) -> Result<&dyn Serializer, WireError> {
        let field_type = FieldType::from(value);
        self.by_field_type(field_type)
            .ok_or(WireError::UnsupportedType { field_type })
    }
}
