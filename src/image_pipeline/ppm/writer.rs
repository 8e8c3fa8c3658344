use std::io::Write;

use tracing::debug;

use crate::image_pipeline::codec::ImageWriter;
use crate::image_pipeline::common::config::EditorConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::model::PixelBuffer;
use crate::image_pipeline::ppm::reader::PPM_MAGIC;

/// Writer for the ASCII `P3` pixel format, one text line per image row.
pub struct PpmWriter;

impl PpmWriter {
    pub fn encode_string(&self, image: &PixelBuffer) -> String {
        let mut text = format!(
            "{}\n{} {}\n{}\n",
            PPM_MAGIC,
            image.width(),
            image.height(),
            image.max_value()
        );

        for row in image.rows() {
            for channel in row {
                text.push(' ');
                text.push_str(&channel.to_string());
            }
            text.push('\n');
        }
        text
    }
}

impl ImageWriter for PpmWriter {
    fn write_image(&self, image: &PixelBuffer, output: &mut dyn Write, _config: &EditorConfig) -> Result<()> {
        debug!("Encoding PPM image: {}x{}", image.width(), image.height());

        output.write_all(self.encode_string(image).as_bytes())?;
        output.flush()?;

        debug!("PPM encoding complete");
        Ok(())
    }
}
