use std::io::Write;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use tracing::debug;

use crate::image_pipeline::codec::{FileFormat, ImageWriter, scaled_channels};
use crate::image_pipeline::common::config::EditorConfig;
use crate::image_pipeline::common::error::{EditorError, Result};
use crate::image_pipeline::model::PixelBuffer;
use crate::image_pipeline::standard::reader::{STANDARD_MAX_VALUE, image_format};

/// Writer for PNG, JPEG and BMP. Channels are rescaled to 8 bits when the
/// image's max value is not 255.
pub struct StandardImageWriter {
    format: ImageFormat,
}

impl StandardImageWriter {
    pub fn new(format: FileFormat) -> Result<Self> {
        Ok(Self {
            format: image_format(format)?,
        })
    }
}

impl ImageWriter for StandardImageWriter {
    fn write_image(&self, image: &PixelBuffer, output: &mut dyn Write, config: &EditorConfig) -> Result<()> {
        debug!("Encoding {:?} image: {}x{}", self.format, image.width(), image.height());

        let rgb: Vec<u8> = scaled_channels(image, STANDARD_MAX_VALUE)
            .map(|c| c as u8)
            .collect();
        let (width, height) = (image.width(), image.height());

        let mut buffer = Vec::new();
        let encoded = match self.format {
            ImageFormat::Png => PngEncoder::new(&mut buffer).write_image(
                &rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
            ),
            ImageFormat::Jpeg => JpegEncoder::new_with_quality(&mut buffer, config.jpeg_quality)
                .write_image(&rgb, width, height, ExtendedColorType::Rgb8),
            ImageFormat::Bmp => BmpEncoder::new(&mut buffer).write_image(
                &rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
            ),
            other => {
                return Err(EditorError::UnsupportedFormat(format!("{:?}", other)));
            }
        };
        encoded.map_err(|e| EditorError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("{:?} encoding complete", self.format);
        Ok(())
    }
}
