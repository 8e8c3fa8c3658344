use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::model::PixelBuffer;

/// A per-pixel transform producing a new image of identical size and max value.
///
/// Implementations never modify `source`.
pub trait ImageOperation {
    fn apply(&self, source: &PixelBuffer) -> Result<PixelBuffer>;
}
