//! Low-level decoding machinery
//!
//! [`Raw`] is the positioned, endianness-aware byte cursor; [`Type`] the
//! TIFF 6.0 value type codes; [`TiffRaw`] the directory decoder with its
//! per-session cache. The high-level [`crate::Tiff`] wraps these; they are
//! public for callers that need entry-level access.

mod raw;
mod tiff_raw;
mod type_;

pub use raw::{ByteOrder, Raw};
pub use tiff_raw::{EntryRef, TiffRaw, ValueOffset};
pub use type_::Type;
