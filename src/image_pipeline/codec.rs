//! Codec abstractions
//!
//! Reader and writer traits implemented by every supported file format.

mod format;
mod reader;
mod writer;

pub use format::FileFormat;
pub use reader::ImageReader;
pub use writer::ImageWriter;

use crate::image_pipeline::model::PixelBuffer;

/// Scales every channel of `image` onto `[0, target_max]` with integer math.
pub(crate) fn scaled_channels(image: &PixelBuffer, target_max: u32) -> impl Iterator<Item = u32> + '_ {
    let max = u64::from(image.max_value());
    let target = u64::from(target_max);
    image
        .pixels()
        .iter()
        .map(move |&c| if max == target { c } else { (u64::from(c) * target / max) as u32 })
}
