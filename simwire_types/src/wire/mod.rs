//! # Serialization format
//!
//! A message is a concatenation of self-describing typed fields. There is no
//! message-length header; [`decode`] consumes the whole buffer.
//!
//! Every field starts with `field_type`, encoded in `u8`. Wire compatibility
//! depends on these tag values never changing meaning; see [`FieldType`].
//!
//! All multi-byte integers, floats, counts and money codes honor the
//! [`ByteOrder`] selected for the encode or decode call. The same order must
//! be used for both halves of a round trip.
//!
//! The below pseudocode depicts the serialized representations.
//!
//! ```text
//! message := field*
//! field   := field_type:u8 payload
//!
//! scalar payload {
//!     value:          [u8; width(field_type)],
//! }
//! string payload {
//!     count:          u32,    // of code units
//!     code_units:     [u8 | u16; count],
//! }
//! array payload {
//!     count:          u32,
//!     elements:       [elem; count],
//! }
//! matrix payload {                // row-major, non-jagged, non-empty
//!     height:         u32,
//!     width:          u32,
//!     elements:       [elem; height * width],
//! }
//! quantity payload {
//!     unit_tag,
//!     si:             f64,
//! }
//! quantity array payload {
//!     count:          u32,
//!     unit_tag,
//!     si:             [f64; count],
//! }
//! quantity matrix payload {
//!     height:         u32,
//!     width:          u32,
//!     unit_tag,
//!     si:             [f64; height * width],
//! }
//! quantity vector-array payload { // one unit per column
//!     height:         u32,
//!     width:          u32,
//!     unit_tags:      [unit_tag; width],
//!     si:             [f64; height * width],
//! }
//!
//! unit_tag := unit_type:u8 display:u8         // catalog dimensions
//!           | unit_type:u8 money:u16          // money dimension
//!           | unit_type:u8 money:u16 per:u8   // money-per dimensions
//! ```

mod codec;
mod cursor;
mod endian;
mod error;
mod field_type;
mod lengths;
mod registry;
mod ser;
mod unit_tag;
mod value;

pub use codec::*;
pub use cursor::*;
pub use endian::*;
pub use error::*;
pub use field_type::*;
pub use lengths::*;
pub use registry::*;
pub use ser::*;
pub use unit_tag::*;
pub use value::*;
