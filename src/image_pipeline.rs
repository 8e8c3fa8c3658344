//! Image processing pipeline module
//!
//! The pixel buffer model, per-pixel operations, histograms, and the codecs
//! that move images between files and memory.

pub mod codec;
pub mod common;
pub mod conversions;
pub mod model;
pub mod operations;
pub mod ppm;
pub mod standard;

pub use common::{
    EditorConfig,
    EditorConfigBuilder,
    EditorError,
    Result,
};

pub use model::{
    Histogram,
    ImageCatalogue,
    PixelBuffer,
};

pub use operations::{
    Brightness,
    GrayscaleKind,
    ImageOperation,
    apply_brightness,
    apply_grayscale,
    compute_histogram,
};

pub use codec::{
    FileFormat,
    ImageReader,
    ImageWriter,
};

pub use ppm::{PpmReader, PpmWriter};
pub use standard::{StandardImageReader, StandardImageWriter};

pub use conversions::ImagePipeline;
