//! Read-only decoder for TIFF-family metadata containers.
//!
//! A [`Tiff`] session owns one byte source (file or buffer), validates the
//! TIFF header, and decodes image file directories lazily, caching each one
//! by its byte offset. Decoded directories are [`Ifd`] records mapping
//! well-known tag names to typed [`Value`]s; nested directories (EXIF, GPS,
//! SubIFDs) are reached explicitly through their pointer tags.

pub mod error;
mod high_level;
mod ifd;
pub mod internal;
mod options;
mod value;

pub use high_level::{sidecar_path, CaptureDateTime, Tiff};
pub use ifd::Ifd;
pub use options::Options;
pub use value::Value;
