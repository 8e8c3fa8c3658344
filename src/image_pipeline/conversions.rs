//! Pipeline conversions module
//!
//! Orchestrates decoding and encoding of images in every supported file format.

mod file_pipeline;


pub use file_pipeline::ImagePipeline;
