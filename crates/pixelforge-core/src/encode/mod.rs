//! Image encoding for export.
//!
//! # Examples
//!
//! ```ignore
//! use pixelforge_core::encode::{encode_image, ExportFormat};
//!
//! let jpeg = encode_image(&buffer, ExportFormat::Jpeg { quality: 90 })?;
//! println!("Encoded {} bytes", jpeg.len());
//! ```

mod writer;

pub use writer::{encode_image, encode_jpeg, encode_png, save_image, EncodeError, ExportFormat};
