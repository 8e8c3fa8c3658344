//! Image operations module
//!
//! Per-pixel transforms and the entry points used by the command layer.
//! The `apply_*` functions accept an optional source so that a missing image
//! is reported as [`EditorError::NullSource`] rather than handled by callers.

mod brightness;
mod grayscale;
mod operation;


pub use brightness::Brightness;
pub use grayscale::{GrayscaleKind, map_grayscale};
pub use operation::ImageOperation;

use crate::image_pipeline::common::error::{EditorError, Result};
use crate::image_pipeline::model::{Histogram, PixelBuffer};

pub fn apply_grayscale(kind: GrayscaleKind, source: Option<&PixelBuffer>) -> Result<PixelBuffer> {
    kind.apply(source.ok_or(EditorError::NullSource)?)
}

pub fn apply_brightness(amount: i64, source: Option<&PixelBuffer>) -> Result<PixelBuffer> {
    Brightness::new(amount).apply(source.ok_or(EditorError::NullSource)?)
}

pub fn compute_histogram(source: Option<&PixelBuffer>) -> Result<Histogram> {
    Ok(Histogram::compute(source.ok_or(EditorError::NullSource)?))
}
