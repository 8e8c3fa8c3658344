//! Dense RGB pixel storage.

use crate::image_pipeline::common::error::{EditorError, Result};

/// Number of channels stored per pixel.
pub const CHANNELS: usize = 3;

/// Channel count of a `width` x `height` image, or `None` if it does not fit in `usize`.
pub(crate) fn channel_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// An RGB image held as interleaved channel values.
///
/// Every stored channel lies in `[0, max_value]` and the backing storage is
/// always exactly `width * height * 3` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    max_value: u32,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...], row-major
    data: Vec<u32>,
}

impl PixelBuffer {
    /// Creates a black image.
    ///
    /// # Errors
    ///
    /// * `InvalidDimension` - width or height is zero, or the image is too large to address
    /// * `InvalidRange` - max_value is zero
    pub fn new(width: u32, height: u32, max_value: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EditorError::InvalidDimension {
                width: width.into(),
                height: height.into(),
            });
        }
        if max_value == 0 {
            return Err(EditorError::InvalidRange(
                "max value must be positive".to_string(),
            ));
        }

        let len = channel_len(width, height).ok_or(EditorError::InvalidDimension {
            width: width.into(),
            height: height.into(),
        })?;
        Ok(Self {
            width,
            height,
            max_value,
            data: vec![0; len],
        })
    }

    /// Builds an image from interleaved RGB data, validating length and range.
    pub fn from_raw(width: u32, height: u32, max_value: u32, data: Vec<u32>) -> Result<Self> {
        let mut image = Self::new(width, height, max_value)?;
        if data.len() != image.data.len() {
            return Err(EditorError::TruncatedInput {
                expected: image.data.len(),
                found: data.len(),
            });
        }
        if let Some(&bad) = data.iter().find(|&&c| c > max_value) {
            return Err(EditorError::InvalidRange(format!(
                "channel value {} exceeds max value {}",
                bad, max_value
            )));
        }
        image.data = data;
        Ok(image)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Read-only view of the interleaved channel data.
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    /// Iterates over rows, each a slice of `width * 3` channel values.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.data.chunks_exact(self.width as usize * CHANNELS)
    }

    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(EditorError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * CHANNELS)
    }

    /// Returns a copy of the triple stored at `(x, y)`.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<[u32; 3]> {
        let i = self.index(x, y)?;
        Ok([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Overwrites the triple at `(x, y)`.
    ///
    /// # Errors
    ///
    /// * `OutOfBounds` - coordinate outside the image
    /// * `InvalidRange` - any channel above `max_value`
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u32; 3]) -> Result<()> {
        let i = self.index(x, y)?;
        if rgb.iter().any(|&c| c > self.max_value) {
            return Err(EditorError::InvalidRange(format!(
                "color {:?} outside [0, {}]",
                rgb, self.max_value
            )));
        }
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
        Ok(())
    }

    /// Builds a same-sized image by mapping every pixel.
    ///
    /// Results are clamped to `max_value`, so `f` cannot break the range invariant.
    pub(crate) fn map_pixels<F>(&self, mut f: F) -> Self
    where
        F: FnMut([u32; 3]) -> [u32; 3],
    {
        let max = self.max_value;
        let data = self
            .data
            .chunks_exact(CHANNELS)
            .flat_map(|px| f([px[0], px[1], px[2]]).map(|c| c.min(max)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            max_value: max,
            data,
        }
    }
}
