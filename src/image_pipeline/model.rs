//! Image data model
//!
//! The pixel buffer, its histogram, and the named catalogue of buffers.

pub mod catalogue;
pub mod histogram;
pub mod pixel_buffer;

#[cfg(test)]
mod tests;

pub use catalogue::ImageCatalogue;
pub use histogram::{BUCKETS, Histogram};
pub use pixel_buffer::{CHANNELS, PixelBuffer};
