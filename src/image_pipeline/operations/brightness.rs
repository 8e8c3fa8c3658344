use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::model::PixelBuffer;
use crate::image_pipeline::operations::operation::ImageOperation;

/// Adds `amount` to every channel, clamping into `[0, max_value]`.
///
/// Negative amounts darken; zero copies the source unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub amount: i64,
}

impl Brightness {
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }
}

impl ImageOperation for Brightness {
    fn apply(&self, source: &PixelBuffer) -> Result<PixelBuffer> {
        debug!(amount = self.amount, "Applying brightness");

        if self.amount == 0 {
            return Ok(source.clone());
        }

        let max = i64::from(source.max_value());
        let amount = self.amount;
        // Clamping is per channel, not per pixel.
        Ok(source.map_pixels(|rgb| {
            rgb.map(|c| (i64::from(c).saturating_add(amount)).clamp(0, max) as u32)
        }))
    }
}
