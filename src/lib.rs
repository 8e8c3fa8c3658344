//! In-memory raster image editor.
//!
//! Loads images into [`PixelBuffer`](image_pipeline::PixelBuffer)s, applies
//! grayscale and brightness transforms, computes histograms, and saves the
//! result as plain PPM or through binary codecs.

pub mod image_pipeline;
pub mod logger;
pub mod script;
