use std::io::Write;

use crate::image_pipeline::common::config::EditorConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::model::PixelBuffer;

pub trait ImageWriter {
    fn write_image(&self, image: &PixelBuffer, output: &mut dyn Write, config: &EditorConfig) -> Result<()>;
}
