use crate::wire::endian::ensure_elems_remaining;
use crate::wire::ser::{payload_mismatch, Serializer};
use crate::wire::{
    ByteOrder, Cursor, ElemCount, Endian, FieldType, MatrixDims, UnitTagCodec, Value, WireError,
};
use simwire_units::{Quantity, QuantityMatrix, QuantityVector, QuantityVectorArray};
use std::sync::Arc;

/// Unit-tagged scalar: unit tag, then the f64 SI magnitude. The payload is
/// always the SI-converted magnitude, never a display value.
pub struct QuantitySerializer {
    codec: Arc<UnitTagCodec>,
}

impl QuantitySerializer {
    pub fn new(codec: Arc<UnitTagCodec>) -> Self {
        Self { codec }
    }
}

impl Serializer for QuantitySerializer {
    fn field_type(&self) -> FieldType {
        FieldType::Quantity
    }

    fn size(&self, value: &Value) -> Result<usize, WireError> {
        match value {
            Value::Quantity(q) => Ok(self.codec.size(&q.unit) + f64::WIDTH),
            _ => Err(payload_mismatch(value)),
        }
    }

    fn serialize(
        &self,
        value: &Value,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError> {
        let q = match value {
            Value::Quantity(q) => q,
            _ => return Err(payload_mismatch(value)),
        };
        self.codec.encode(&q.unit, buf, cursor, order)?;
        q.si.put(buf, cursor.advance(f64::WIDTH), order)
    }

    fn deserialize(
        &self,
        buf: &[u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<Value, WireError> {
        let unit = self.codec.decode(buf, cursor, order)?;
        let si = f64::get(buf, cursor.advance(f64::WIDTH), order)?;
        Ok(Value::Quantity(Quantity::new(si, unit)))
    }
}

/// Unit-tagged array: 4-byte count, unit tag, then the SI magnitudes.
pub struct QuantityArraySerializer {
    codec: Arc<UnitTagCodec>,
}

impl QuantityArraySerializer {
    pub fn new(codec: Arc<UnitTagCodec>) -> Self {
        Self { codec }
    }
}

impl Serializer for QuantityArraySerializer {
    fn field_type(&self) -> FieldType {
        FieldType::QuantityArr
    }

    fn size(&self, value: &Value) -> Result<usize, WireError> {
        match value {
            Value::QuantityArr(qv) => {
                Ok(ElemCount::WIDTH + self.codec.size(&qv.unit) + f64::WIDTH * qv.si.len())
            }
            _ => Err(payload_mismatch(value)),
        }
    }

    fn serialize(
        &self,
        value: &Value,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError> {
        let qv = match value {
            Value::QuantityArr(qv) => qv,
            _ => return Err(payload_mismatch(value)),
        };
        ElemCount::of(&qv.si)?.put(buf, cursor, order)?;
        self.codec.encode(&qv.unit, buf, cursor, order)?;
        for si in &qv.si {
            si.put(buf, cursor.advance(f64::WIDTH), order)?;
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
        let unit = self.codec.decode(buf, cursor, order)?;
        ensure_elems_remaining(buf, cursor.position(), count, f64::WIDTH)?;
        let mut si = Vec::with_capacity(count);
        for _ in 0..count {
            si.push(f64::get(buf, cursor.advance(f64::WIDTH), order)?);
        }
        Ok(Value::QuantityArr(QuantityVector::new(si, unit)))
    }
}

/// Unit-tagged matrix: height, width, unit tag, then the SI magnitudes
/// row-major. Same shape gate as the primitive matrices.
pub struct QuantityMatrixSerializer {
    codec: Arc<UnitTagCodec>,
}

impl QuantityMatrixSerializer {
    pub fn new(codec: Arc<UnitTagCodec>) -> Self {
        Self { codec }
    }
}

impl Serializer for QuantityMatrixSerializer {
    fn field_type(&self) -> FieldType {
        FieldType::QuantityMat
    }

    fn size(&self, value: &Value) -> Result<usize, WireError> {
        match value {
            Value::QuantityMat(qm) => {
                let dims = MatrixDims::of(&qm.si)?;
                Ok(MatrixDims::WIDTH + self.codec.size(&qm.unit) + f64::WIDTH * dims.cells())
            }
            _ => Err(payload_mismatch(value)),
        }
    }

    fn serialize(
        &self,
        value: &Value,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError> {
        let qm = match value {
            Value::QuantityMat(qm) => qm,
            _ => return Err(payload_mismatch(value)),
        };
        let dims = MatrixDims::of(&qm.si)?;
        dims.put(buf, cursor, order)?;
        self.codec.encode(&qm.unit, buf, cursor, order)?;
        for row in &qm.si {
            for si in row {
                si.put(buf, cursor.advance(f64::WIDTH), order)?;
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
        let unit = self.codec.decode(buf, cursor, order)?;
        ensure_elems_remaining(buf, cursor.position(), dims.cells(), f64::WIDTH)?;
        let mut rows = Vec::with_capacity(dims.height());
        for _ in 0..dims.height() {
            let mut row = Vec::with_capacity(dims.width());
            for _ in 0..dims.width() {
                row.push(f64::get(buf, cursor.advance(f64::WIDTH), order)?);
            }
            rows.push(row);
        }
        Ok(Value::QuantityMat(QuantityMatrix::new(rows, unit)))
    }
}

/// Unit-tagged vector-array: height, width, one unit tag per column, then
/// the SI magnitudes row-major. The column-unit list must match the width.
pub struct QuantityVecArraySerializer {
    codec: Arc<UnitTagCodec>,
}

impl QuantityVecArraySerializer {
    pub fn new(codec: Arc<UnitTagCodec>) -> Self {
        Self { codec }
    }

    fn checked_dims(qva: &QuantityVectorArray) -> Result<MatrixDims, WireError> {
        let dims = MatrixDims::of(&qva.si)?;
        if qva.columns.len() != dims.width() {
            return Err(WireError::Shape {
                detail: format!(
                    "vector-array has {} column units for width {}",
                    qva.columns.len(),
                    dims.width()
                ),
            });
        }
        Ok(dims)
    }
}

impl Serializer for QuantityVecArraySerializer {
    fn field_type(&self) -> FieldType {
        FieldType::QuantityVecArr
    }

    fn size(&self, value: &Value) -> Result<usize, WireError> {
        match value {
            Value::QuantityVecArr(qva) => {
                let dims = Self::checked_dims(qva)?;
                let units = qva.columns.iter().map(|u| self.codec.size(u)).sum::<usize>();
                Ok(MatrixDims::WIDTH + units + f64::WIDTH * dims.cells())
            }
            _ => Err(payload_mismatch(value)),
        }
    }

    fn serialize(
        &self,
        value: &Value,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError> {
        let qva = match value {
            Value::QuantityVecArr(qva) => qva,
            _ => return Err(payload_mismatch(value)),
        };
        let dims = Self::checked_dims(qva)?;
        dims.put(buf, cursor, order)?;
        for unit in &qva.columns {
            self.codec.encode(unit, buf, cursor, order)?;
        }
        for row in &qva.si {
            for si in row {
                si.put(buf, cursor.advance(f64::WIDTH), order)?;
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
        // A decoded width must fit at least that many minimum-width unit
        // tags before it is trusted as an allocation size.
        ensure_elems_remaining(buf, cursor.position(), dims.width(), UnitTagCodec::MIN_WIDTH)?;
        let mut columns = Vec::with_capacity(dims.width());
        for _ in 0..dims.width() {
            columns.push(self.codec.decode(buf, cursor, order)?);
        }
        ensure_elems_remaining(buf, cursor.position(), dims.cells(), f64::WIDTH)?;
        let mut rows = Vec::with_capacity(dims.height());
        for _ in 0..dims.height() {
            let mut row = Vec::with_capacity(dims.width());
            for _ in 0..dims.width() {
                row.push(f64::get(buf, cursor.advance(f64::WIDTH), order)?);
            }
            rows.push(row);
        }
        Ok(Value::QuantityVecArr(QuantityVectorArray::new(rows, columns)))
    }
}
