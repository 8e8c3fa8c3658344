//! Per-channel frequency tables.

use std::fmt;

use crate::image_pipeline::model::pixel_buffer::{CHANNELS, PixelBuffer};

/// Number of buckets in every table.
pub const BUCKETS: usize = 256;

/// Red, green, blue and intensity frequency tables of one image.
///
/// Channel values are clamped to 255 before bucketing, regardless of the
/// image's max value. Intensity is the integer mean of the clamped channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    red: [u64; BUCKETS],
    green: [u64; BUCKETS],
    blue: [u64; BUCKETS],
    intensity: [u64; BUCKETS],
}

fn bucket(value: u32) -> usize {
    value.min(BUCKETS as u32 - 1) as usize
}

impl Histogram {
    pub fn compute(image: &PixelBuffer) -> Self {
        let mut histogram = Self {
            red: [0; BUCKETS],
            green: [0; BUCKETS],
            blue: [0; BUCKETS],
            intensity: [0; BUCKETS],
        };

        for px in image.pixels().chunks_exact(CHANNELS) {
            let (r, g, b) = (bucket(px[0]), bucket(px[1]), bucket(px[2]));
            histogram.red[r] += 1;
            histogram.green[g] += 1;
            histogram.blue[b] += 1;
            histogram.intensity[(r + g + b) / 3] += 1;
        }

        histogram
    }

    pub fn red(&self) -> &[u64; BUCKETS] {
        &self.red
    }

    pub fn green(&self) -> &[u64; BUCKETS] {
        &self.green
    }

    pub fn blue(&self) -> &[u64; BUCKETS] {
        &self.blue
    }

    pub fn intensity(&self) -> &[u64; BUCKETS] {
        &self.intensity
    }

    /// Largest single bucket count across all four tables.
    pub fn overall_max_count(&self) -> u64 {
        [&self.red, &self.green, &self.blue, &self.intensity]
            .into_iter()
            .flat_map(|table| table.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Histogram[max_count={}, tables=4]", self.overall_max_count())
    }
}
