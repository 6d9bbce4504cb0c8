use crate::wire::WireError;
use std::mem;

/// Byte order for one encode or decode call. Never auto-detected.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ByteOrder {
    Big,
    Little,
}

/// Fixed-width encode/decode of one primitive at a given buffer offset.
///
/// `put` writes exactly `WIDTH` bytes at `at`; `get` reads exactly `WIDTH`
/// bytes. Out-of-range offsets surface as [`WireError::Bounds`].
pub trait Endian: Copy {
    const WIDTH: usize;
    fn put(self, buf: &mut [u8], at: usize, order: ByteOrder) -> Result<(), WireError>;
    fn get(buf: &[u8], at: usize, order: ByteOrder) -> Result<Self, WireError>;
}

pub(crate) fn put_bytes(src: &[u8], buf: &mut [u8], at: usize) -> Result<(), WireError> {
    let len = buf.len();
    match buf.get_mut(at..at + src.len()) {
        Some(dst) => {
            dst.copy_from_slice(src);
            Ok(())
        }
        None => Err(WireError::Bounds { at, want: src.len(), len }),
    }
}

pub(crate) fn get_bytes(buf: &[u8], at: usize, want: usize) -> Result<&[u8], WireError> {
    buf.get(at..at + want)
        .ok_or(WireError::Bounds { at, want, len: buf.len() })
}

/// Errs if fewer than `want` bytes remain at `at`. Deserializers call this
/// before allocating for a decoded count, so a corrupt count fails as a
/// bounds error instead of a giant allocation.
pub(crate) fn ensure_remaining(buf: &[u8], at: usize, want: usize) -> Result<(), WireError> {
    if want > buf.len().saturating_sub(at) {
        return Err(WireError::Bounds { at, want, len: buf.len() });
    }
    Ok(())
}

/// [`ensure_remaining`] for `count` items of `width` bytes each. The product
/// saturates, so a hostile header whose byte count overflows `usize` still
/// fails as a bounds error rather than wrapping past the gate.
pub(crate) fn ensure_elems_remaining(
    buf: &[u8],
    at: usize,
    count: usize,
    width: usize,
) -> Result<(), WireError> {
    ensure_remaining(buf, at, count.saturating_mul(width))
}

macro_rules! impl_endian_num {
    ($($t:ty),* $(,)?) => {$(
        impl Endian for $t {
            const WIDTH: usize = mem::size_of::<$t>();

            fn put(self, buf: &mut [u8], at: usize, order: ByteOrder) -> Result<(), WireError> {
                let bytes = match order {
                    ByteOrder::Big => self.to_be_bytes(),
                    ByteOrder::Little => self.to_le_bytes(),
                };
                put_bytes(&bytes, buf, at)
            }

            fn get(buf: &[u8], at: usize, order: ByteOrder) -> Result<Self, WireError> {
                let mut bytes = [0u8; mem::size_of::<$t>()];
                bytes.copy_from_slice(get_bytes(buf, at, Self::WIDTH)?);
                let value = match order {
                    ByteOrder::Big => Self::from_be_bytes(bytes),
                    ByteOrder::Little => Self::from_le_bytes(bytes),
                };
                Ok(value)
            }
        }
    )*};
}
impl_endian_num!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

/// Booleans encode as one byte: exact 0/1 on write, any nonzero reads true.
impl Endian for bool {
    const WIDTH: usize = 1;

    fn put(self, buf: &mut [u8], at: usize, order: ByteOrder) -> Result<(), WireError> {
        (self as u8).put(buf, at, order)
    }

    fn get(buf: &[u8], at: usize, order: ByteOrder) -> Result<Self, WireError> {
        Ok(u8::get(buf, at, order)? != 0)
    }
}
