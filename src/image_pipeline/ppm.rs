//! Plain PPM module
//!
//! Text codec for the `P3` format: magic token, width, height, max value,
//! then one `r g b` triple per pixel in row-major order. `#` starts a comment
//! running to the end of the line.

mod reader;
mod tokens;
mod writer;

#[cfg(test)]
mod tests;

pub use reader::{PPM_MAGIC, PpmReader};
pub use writer::PpmWriter;
