use crate::wire::endian::ensure_elems_remaining;
use crate::wire::ser::{payload_mismatch, ElementPayload, Serializer};
use crate::wire::{ByteOrder, Cursor, Endian, FieldType, MatrixDims, Value, WireError};
use std::marker::PhantomData;

/// Non-jagged matrix serializer: 4-byte height, 4-byte width, then the cells
/// row-major. Empty or jagged input fails sizing and serialization alike,
/// before any bytes exist.
pub struct MatrixSerializer<T: ElementPayload>(PhantomData<T>);

impl<T: ElementPayload> MatrixSerializer<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ElementPayload> Default for MatrixSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ElementPayload> Serializer for MatrixSerializer<T> {
    fn field_type(&self) -> FieldType {
        T::MATRIX_TYPE
    }

    fn size(&self, value: &Value) -> Result<usize, WireError> {
        let rows = T::matrix_of(value).ok_or_else(|| payload_mismatch(value))?;
        let dims = MatrixDims::of(rows)?;
        Ok(MatrixDims::WIDTH + T::WIDTH * dims.cells())
    }

    fn serialize(
        &self,
        value: &Value,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError> {
        let rows = T::matrix_of(value).ok_or_else(|| payload_mismatch(value))?;
        let dims = MatrixDims::of(rows)?;
        dims.put(buf, cursor, order)?;
        for row in rows {
            for cell in row {
                cell.put(buf, cursor.advance(T::WIDTH), order)?;
            }
        }
        Ok(())
    }

    fn deserialize(
        &self,
        buf: &[u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<Value, WireError> {
        let dims = MatrixDims::take(buf, cursor, order)?;
        ensure_elems_remaining(buf, cursor.position(), dims.cells(), T::WIDTH)?;
        let mut rows = Vec::with_capacity(dims.height());
        for _ in 0..dims.height() {
            let mut row = Vec::with_capacity(dims.width());
            for _ in 0..dims.width() {
                row.push(T::get(buf, cursor.advance(T::WIDTH), order)?);
            }
            rows.push(row);
        }
        Ok(T::value_from_matrix(rows))
    }
}
