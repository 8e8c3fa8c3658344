//! Editor configuration types

/// Configuration for loading and saving images
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// JPEG quality, 1 to 100
    pub jpeg_quality: u8,
    /// Whether to validate image dimensions after decoding
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validation is enabled
    pub max_dimension: Option<u32>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: 90,
            validate_dimensions: true,
            max_dimension: Some(50_000),
        }
    }
}

impl EditorConfig {
    pub fn builder() -> EditorConfigBuilder {
        EditorConfigBuilder::default()
    }
}

/// Builder for EditorConfig
#[derive(Default)]
pub struct EditorConfigBuilder {
    jpeg_quality: Option<u8>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl EditorConfigBuilder {
    /// Quality is clamped into `1..=100`.
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality.clamp(1, 100));
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> EditorConfig {
        let default = EditorConfig::default();
        EditorConfig {
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
