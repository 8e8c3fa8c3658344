//! Compressed raster decoding through the `image` crate.

use std::io::Read;

use image::ImageFormat;
use tracing::debug;

use crate::image_pipeline::codec::{FileFormat, ImageReader};
use crate::image_pipeline::common::error::{EditorError, Result};
use crate::image_pipeline::model::PixelBuffer;

/// Channel ceiling of every image decoded by this reader.
pub const STANDARD_MAX_VALUE: u32 = 255;

pub(crate) fn image_format(format: FileFormat) -> Result<ImageFormat> {
    match format {
        FileFormat::Png => Ok(ImageFormat::Png),
        FileFormat::Jpeg => Ok(ImageFormat::Jpeg),
        FileFormat::Bmp => Ok(ImageFormat::Bmp),
        other => Err(EditorError::UnsupportedFormat(format!(
            "{} is not handled by the standard codec",
            other
        ))),
    }
}

/// Reader for PNG, JPEG and BMP. Pixels are converted to 8-bit RGB and any
/// alpha channel is discarded.
pub struct StandardImageReader {
    format: ImageFormat,
}

impl StandardImageReader {
    pub fn new(format: FileFormat) -> Result<Self> {
        Ok(Self {
            format: image_format(format)?,
        })
    }
}

impl ImageReader for StandardImageReader {
    fn read_image(&self, input: &mut dyn Read) -> Result<PixelBuffer> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;
        debug!("Decoding {:?} image, {} bytes", self.format, data.len());

        let decoded = image::load_from_memory_with_format(&data, self.format)
            .map_err(|e| EditorError::DecodeError(e.to_string()))?
            .to_rgb8();

        let (width, height) = decoded.dimensions();
        debug!("Decoded image: {}x{}", width, height);

        let data = decoded.into_raw().into_iter().map(u32::from).collect();
        PixelBuffer::from_raw(width, height, STANDARD_MAX_VALUE, data)
    }
}
