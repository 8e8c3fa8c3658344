//! Grayscale projections.
//!
//! Each variant reduces an `(r, g, b)` triple to one value written to all
//! three output channels. Means and weighted sums truncate toward zero.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::image_pipeline::common::error::{EditorError, Result};
use crate::image_pipeline::model::PixelBuffer;
use crate::image_pipeline::operations::operation::ImageOperation;

const LUMA_RED: f64 = 0.2126;
const LUMA_GREEN: f64 = 0.7152;
const LUMA_BLUE: f64 = 0.0722;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayscaleKind {
    Red,
    Green,
    Blue,
    /// Maximum of the three channels
    Value,
    /// Integer mean of the three channels
    Intensity,
    /// Rec. 709 weighted sum, truncated
    Luma,
}

impl GrayscaleKind {
    pub const ALL: [GrayscaleKind; 6] = [
        GrayscaleKind::Red,
        GrayscaleKind::Green,
        GrayscaleKind::Blue,
        GrayscaleKind::Value,
        GrayscaleKind::Intensity,
        GrayscaleKind::Luma,
    ];

    /// Derives the gray value for one pixel.
    pub fn gray_value(self, [r, g, b]: [u32; 3]) -> u32 {
        match self {
            GrayscaleKind::Red => r,
            GrayscaleKind::Green => g,
            GrayscaleKind::Blue => b,
            GrayscaleKind::Value => r.max(g).max(b),
            GrayscaleKind::Intensity => ((r as u64 + g as u64 + b as u64) / 3) as u32,
            GrayscaleKind::Luma => {
                (LUMA_RED * r as f64 + LUMA_GREEN * g as f64 + LUMA_BLUE * b as f64) as u32
            }
        }
    }

    /// Name used by the script commands, e.g. `luma` for `luma-component`.
    pub fn name(self) -> &'static str {
        match self {
            GrayscaleKind::Red => "red",
            GrayscaleKind::Green => "green",
            GrayscaleKind::Blue => "blue",
            GrayscaleKind::Value => "value",
            GrayscaleKind::Intensity => "intensity",
            GrayscaleKind::Luma => "luma",
        }
    }
}

impl fmt::Display for GrayscaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GrayscaleKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        GrayscaleKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EditorError::UnknownGrayscaleKind(s.to_string()))
    }
}

/// Shared traversal: writes `(v, v, v)` for every source pixel.
pub fn map_grayscale<F>(source: &PixelBuffer, gray: F) -> PixelBuffer
where
    F: Fn([u32; 3]) -> u32,
{
    source.map_pixels(|rgb| {
        let v = gray(rgb);
        [v, v, v]
    })
}

impl ImageOperation for GrayscaleKind {
    fn apply(&self, source: &PixelBuffer) -> Result<PixelBuffer> {
        debug!(
            kind = %self,
            width = source.width(),
            height = source.height(),
            "Applying grayscale"
        );
        let kind = *self;
        Ok(map_grayscale(source, move |rgb| kind.gray_value(rgb)))
    }
}
