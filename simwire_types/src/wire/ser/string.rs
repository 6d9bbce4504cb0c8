use crate::wire::endian::{ensure_elems_remaining, get_bytes, put_bytes};
use crate::wire::ser::{payload_mismatch, Serializer};
use crate::wire::{ByteOrder, Cursor, ElemCount, Endian, FieldType, Value, WireError};
use std::mem;

/// Variable-size text serializer: 4-byte code-unit count, then the code
/// units. The narrow flavor carries UTF-8 bytes, the wide flavor UTF-16
/// code units (order-sensitive, two bytes each).
pub struct StringSerializer {
    wide: bool,
}

impl StringSerializer {
    pub fn narrow() -> Self {
        Self { wide: false }
    }

    pub fn wide() -> Self {
        Self { wide: true }
    }

    fn text_of<'v>(&self, value: &'v Value) -> Option<&'v str> {
        match (self.wide, value) {
            (false, Value::Str8(s)) => Some(s),
            (true, Value::Str16(s)) => Some(s),
            _ => None,
        }
    }
}

impl Serializer for StringSerializer {
    fn field_type(&self) -> FieldType {
        if self.wide {
            FieldType::Str16
        } else {
            FieldType::Str8
        }
    }

    fn size(&self, value: &Value) -> Result<usize, WireError> {
        let s = self.text_of(value).ok_or_else(|| payload_mismatch(value))?;
        let body = if self.wide {
            s.encode_utf16().count() * mem::size_of::<u16>()
        } else {
            s.len()
        };
        Ok(ElemCount::WIDTH + body)
    }

    fn serialize(
        &self,
        value: &Value,
        buf: &mut [u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<(), WireError> {
        let s = self.text_of(value).ok_or_else(|| payload_mismatch(value))?;
        if self.wide {
            let units = s.encode_utf16().collect::<Vec<u16>>();
            ElemCount::of(&units)?.put(buf, cursor, order)?;
            for unit in units {
                unit.put(buf, cursor.advance(u16::WIDTH), order)?;
            }
            Ok(())
        } else {
            ElemCount::of(s.as_bytes())?.put(buf, cursor, order)?;
            put_bytes(s.as_bytes(), buf, cursor.advance(s.len()))
        }
    }

    fn deserialize(
        &self,
        buf: &[u8],
        cursor: &mut Cursor,
        order: ByteOrder,
    ) -> Result<Value, WireError> {
        let count = ElemCount::take(buf, cursor, order)?.as_usize();
        if self.wide {
            ensure_elems_remaining(buf, cursor.position(), count, u16::WIDTH)?;
            let mut units = Vec::with_capacity(count);
            for _ in 0..count {
                units.push(u16::get(buf, cursor.advance(u16::WIDTH), order)?);
            }
            let s = String::from_utf16(&units).map_err(|_| WireError::Shape {
                detail: "wide string payload is not valid UTF-16".into(),
            })?;
            Ok(Value::Str16(s))
        } else {
            let bytes = get_bytes(buf, cursor.advance(count), count)?;
            let s = String::from_utf8(bytes.to_vec()).map_err(|_| WireError::Shape {
                detail: "narrow string payload is not valid UTF-8".into(),
            })?;
            Ok(Value::Str8(s))
        }
    }
}
