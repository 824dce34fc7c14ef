//! Interleaved (channel-last) raster types.
//!
//! `StridedImage` borrows pixels and crops without copying; `ImageBuffer`
//! owns a tightly packed buffer and lends `StridedImage` views of itself.
pub mod buffer;
pub mod strided;
pub mod traits;

pub use self::buffer::ImageBuffer;
pub use self::strided::StridedImage;
pub use self::traits::{ImageView, Rows};
