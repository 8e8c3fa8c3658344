//! Name to image storage.

use std::collections::HashMap;

use tracing::debug;

use crate::image_pipeline::common::error::{EditorError, Result};
use crate::image_pipeline::model::pixel_buffer::PixelBuffer;

/// Images loaded or produced during an editing session, keyed by name.
///
/// Mutation needs `&mut self`, so there is at most one writer at a time.
#[derive(Debug, Default)]
pub struct ImageCatalogue {
    images: HashMap<String, PixelBuffer>,
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EditorError::InvalidName);
    }
    Ok(())
}

impl ImageCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new image, refusing to replace an existing one.
    pub fn add(&mut self, name: &str, image: PixelBuffer) -> Result<()> {
        check_name(name)?;
        if self.images.contains_key(name) {
            return Err(EditorError::AlreadyExists(name.to_string()));
        }
        debug!(image_name = name, width = image.width(), height = image.height(), "Adding image");
        self.images.insert(name.to_string(), image);
        Ok(())
    }

    /// Stores an image, silently replacing any image with the same name.
    pub fn put(&mut self, name: &str, image: PixelBuffer) -> Result<()> {
        check_name(name)?;
        debug!(image_name = name, width = image.width(), height = image.height(), "Storing image");
        self.images.insert(name.to_string(), image);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<&PixelBuffer> {
        self.images
            .get(name)
            .ok_or_else(|| EditorError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Result<PixelBuffer> {
        self.images
            .remove(name)
            .ok_or_else(|| EditorError::NotFound(name.to_string()))
    }

    /// Stored names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
