use std::fmt;
use std::path::Path;

use crate::image_pipeline::common::error::{EditorError, Result};

/// On-disk image formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Ppm,
    Png,
    Jpeg,
    Bmp,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ppm" => Ok(FileFormat::Ppm),
            "png" => Ok(FileFormat::Png),
            "jpg" | "jpeg" => Ok(FileFormat::Jpeg),
            "bmp" => Ok(FileFormat::Bmp),
            other => Err(EditorError::UnsupportedFormat(format!("'{}'", other))),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                EditorError::UnsupportedFormat(format!("no extension on {}", path.display()))
            })?;
        Self::from_extension(ext)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileFormat::Ppm => "ppm",
            FileFormat::Png => "png",
            FileFormat::Jpeg => "jpeg",
            FileFormat::Bmp => "bmp",
        };
        f.write_str(name)
    }
}
