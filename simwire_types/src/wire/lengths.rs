use crate::wire::{ByteOrder, Cursor, Endian, WireError};
use derive_more::Deref;
use std::mem;

/// 4-byte element-count prefix for strings, arrays and quantity arrays.
#[derive(Deref, Clone, Copy, Debug)]
pub struct ElemCount(u32);

impl ElemCount {
    pub const WIDTH: usize = mem::size_of::<u32>();

    pub fn of<T>(items: &[T]) -> Result<Self, WireError> {
        let count = u32::try_from(items.len()).map_err(|_| WireError::Shape {
            detail: format!("element count {} exceeds u32", items.len()),
        })?;
        Ok(Self(count))
    }

    pub fn put(self, buf: &mut [u8], cursor: &mut Cursor, order: ByteOrder) -> Result<(), WireError> {
        self.0.put(buf, cursor.advance(Self::WIDTH), order)
    }

    pub fn take(buf: &[u8], cursor: &mut Cursor, order: ByteOrder) -> Result<Self, WireError> {
        Ok(Self(u32::get(buf, cursor.advance(Self::WIDTH), order)?))
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Validated height/width header of a matrix payload.
///
/// [`MatrixDims::of`] is the single gate enforcing the non-empty, non-jagged
/// invariant on the way out; [`MatrixDims::take`] re-enforces non-emptiness
/// on the way in.
#[derive(Clone, Copy, Debug)]
pub struct MatrixDims {
    height: u32,
    width: u32,
}

impl MatrixDims {
    pub const WIDTH: usize = 2 * mem::size_of::<u32>();

    pub fn of<T>(rows: &[Vec<T>]) -> Result<Self, WireError> {
        if rows.is_empty() {
            return Err(WireError::Shape { detail: "matrix with zero height".into() });
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(WireError::Shape { detail: "matrix with zero width".into() });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(WireError::Shape {
                    detail: format!("jagged matrix: row 0 has {} cells, row {} has {}", width, i, row.len()),
                });
            }
        }
        let height = u32::try_from(rows.len()).map_err(|_| WireError::Shape {
            detail: format!("matrix height {} exceeds u32", rows.len()),
        })?;
        let width = u32::try_from(width).map_err(|_| WireError::Shape {
            detail: format!("matrix width {} exceeds u32", width),
        })?;
        Ok(Self { height, width })
    }

    pub fn put(self, buf: &mut [u8], cursor: &mut Cursor, order: ByteOrder) -> Result<(), WireError> {
        self.height.put(buf, cursor.advance(mem::size_of::<u32>()), order)?;
        self.width.put(buf, cursor.advance(mem::size_of::<u32>()), order)
    }

    pub fn take(buf: &[u8], cursor: &mut Cursor, order: ByteOrder) -> Result<Self, WireError> {
        let height = u32::get(buf, cursor.advance(mem::size_of::<u32>()), order)?;
        let width = u32::get(buf, cursor.advance(mem::size_of::<u32>()), order)?;
        if height == 0 || width == 0 {
            return Err(WireError::Shape {
                detail: format!("decoded matrix header {}x{} is empty", height, width),
            });
        }
        Ok(Self { height, width })
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn cells(&self) -> usize {
        self.height as usize * self.width as usize
    }
}
