use std::io::Read;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::model::PixelBuffer;

pub trait ImageReader {
    fn read_image(&self, input: &mut dyn Read) -> Result<PixelBuffer>;
}
