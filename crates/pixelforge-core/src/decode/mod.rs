//! Image decoding for the editor shell.
//!
//! Turns JPEG, PNG, BMP or TIFF bytes (or a file on disk) into a
//! [`PixelBuffer`](crate::PixelBuffer), with the EXIF orientation applied so
//! the buffer is upright.
//!
//! # Examples
//!
//! ```ignore
//! use pixelforge_core::decode::load_image;
//!
//! let image = load_image("photo.jpg")?;
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod reader;
mod types;

pub use reader::{decode_image, get_orientation, load_image};
pub use types::{DecodeError, Orientation};
