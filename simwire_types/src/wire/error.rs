use crate::wire::FieldType;
use simwire_units::UnitError;
use thiserror::Error;

/// The closed failure taxonomy of the wire core.
///
/// Every variant aborts the whole encode or decode call. Nothing here is
/// retried, substituted, downgraded or logged, and no partial buffer or
/// partial sequence is ever returned.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum WireError {
    #[error("no serializer registered for {field_type:?}")]
    UnsupportedType { field_type: FieldType },

    #[error("bad payload shape: {detail}")]
    Shape { detail: String },

    #[error("unknown field type tag {tag} at offset {at}")]
    UnknownTag { tag: u8, at: usize },

    #[error("unit tag at offset {at}: {source}")]
    UnknownUnit {
        at: usize,
        #[source]
        source: UnitError,
    },

    #[error("access of {want} bytes at offset {at} exceeds buffer length {len}")]
    Bounds { at: usize, want: usize, len: usize },
}
