//! Standard raster formats module
//!
//! PNG, JPEG and BMP support delegated to the `image` crate.

mod reader;
mod writer;


pub use reader::{STANDARD_MAX_VALUE, StandardImageReader};
pub use writer::StandardImageWriter;
