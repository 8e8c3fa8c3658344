//! Plain-text (P3) PPM decoding.

use std::io::Read;

use tracing::debug;

use crate::image_pipeline::codec::ImageReader;
use crate::image_pipeline::common::error::{EditorError, Result};
use crate::image_pipeline::model::PixelBuffer;
use crate::image_pipeline::model::pixel_buffer::channel_len;
use crate::image_pipeline::ppm::tokens::Tokens;

/// Magic token opening every plain PPM stream.
pub const PPM_MAGIC: &str = "P3";

const HEADER_TOKENS: usize = 4;

/// Reader for the ASCII `P3` pixel format.
pub struct PpmReader;

fn next_int(tokens: &mut Tokens<'_>, expected: usize) -> Result<i64> {
    let token = tokens.next().ok_or(EditorError::TruncatedInput {
        expected,
        found: tokens.consumed(),
    })?;
    token
        .parse::<i64>()
        .map_err(|_| EditorError::FormatError(format!("expected an integer, found '{}'", token)))
}

fn channel(value: i64, max_value: u32) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|&c| c <= max_value)
        .ok_or_else(|| {
            EditorError::InvalidRange(format!("channel value {} outside [0, {}]", value, max_value))
        })
}

impl PpmReader {
    /// Decodes a complete P3 document held in memory.
    pub fn decode_str(&self, text: &str) -> Result<PixelBuffer> {
        let mut tokens = Tokens::new(text);

        let magic = tokens.next().ok_or(EditorError::TruncatedInput {
            expected: HEADER_TOKENS,
            found: 0,
        })?;
        if magic != PPM_MAGIC {
            return Err(EditorError::FormatError(format!(
                "invalid magic '{}', expected '{}'",
                magic, PPM_MAGIC
            )));
        }

        let width = next_int(&mut tokens, HEADER_TOKENS)?;
        let height = next_int(&mut tokens, HEADER_TOKENS)?;
        let max_value = next_int(&mut tokens, HEADER_TOKENS)?;

        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(EditorError::InvalidDimension { width, height }),
        };
        let max_value = u32::try_from(max_value).map_err(|_| {
            EditorError::InvalidRange(format!("max value {} must be positive", max_value))
        })?;

        debug!(width = w, height = h, max_value, "Decoding PPM header");

        // A stream too short to hold every channel token is rejected before allocating.
        if w > 0 && h > 0 && max_value > 0 {
            let required = channel_len(w, h);
            if required.is_none_or(|n| n > tokens.remaining_bytes()) {
                return Err(EditorError::TruncatedInput {
                    expected: required.unwrap_or(usize::MAX),
                    found: tokens.clone().count(),
                });
            }
        }

        let mut image = PixelBuffer::new(w, h, max_value)?;
        let required = image.pixels().len();
        let mut read = 0;
        for y in 0..h {
            for x in 0..w {
                let mut rgb = [0u32; 3];
                for c in rgb.iter_mut() {
                    let value = match tokens.next() {
                        Some(token) => token.parse::<i64>().map_err(|_| {
                            EditorError::FormatError(format!(
                                "expected an integer, found '{}'",
                                token
                            ))
                        })?,
                        None => {
                            return Err(EditorError::TruncatedInput {
                                expected: required,
                                found: read,
                            });
                        }
                    };
                    *c = channel(value, max_value)?;
                    read += 1;
                }
                image.set_pixel(x, y, rgb)?;
            }
        }

        Ok(image)
    }
}

impl ImageReader for PpmReader {
    fn read_image(&self, input: &mut dyn Read) -> Result<PixelBuffer> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;
        debug!("Decoding PPM image, {} bytes", bytes.len());

        let text = String::from_utf8(bytes)
            .map_err(|e| EditorError::FormatError(format!("not valid text: {}", e)))?;
        self.decode_str(&text)
    }
}
