use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    codec::{FileFormat, ImageReader, ImageWriter},
    common::config::EditorConfig,
    common::error::{EditorError, Result},
    model::PixelBuffer,
    ppm::{PpmReader, PpmWriter},
    standard::{StandardImageReader, StandardImageWriter},
};

/// Loads and saves pixel buffers, choosing a codec from the file format.
pub struct ImagePipeline {
    config: EditorConfig,
}

impl Default for ImagePipeline {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl ImagePipeline {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    pub fn reader_for(format: FileFormat) -> Result<Box<dyn ImageReader>> {
        Ok(match format {
            FileFormat::Ppm => Box::new(PpmReader),
            FileFormat::Png | FileFormat::Jpeg | FileFormat::Bmp => {
                Box::new(StandardImageReader::new(format)?)
            }
        })
    }

    pub fn writer_for(format: FileFormat) -> Result<Box<dyn ImageWriter>> {
        Ok(match format {
            FileFormat::Ppm => Box::new(PpmWriter),
            FileFormat::Png | FileFormat::Jpeg | FileFormat::Bmp => {
                Box::new(StandardImageWriter::new(format)?)
            }
        })
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(width, height, max, "Image dimensions exceed maximum");
                return Err(EditorError::InvalidDimension {
                    width: width.into(),
                    height: height.into(),
                });
            }
        }

        Ok(())
    }

    /// Decodes with an explicit reader, then validates the result against the config.
    #[instrument(skip_all)]
    pub fn read_with(&self, reader: &dyn ImageReader, input: &mut dyn Read) -> Result<PixelBuffer> {
        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            reader.read_image(input)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        Ok(image)
    }

    #[instrument(skip_all)]
    pub fn write_with(&self, writer: &dyn ImageWriter, image: &PixelBuffer, output: &mut dyn Write) -> Result<()> {
        let _span = tracing::info_span!("encode_image",
            width = image.width(),
            height = image.height()
        ).entered();
        writer.write_image(image, output, &self.config)?;
        output.flush()?;
        Ok(())
    }

    pub fn load(&self, input: &mut dyn Read, format: FileFormat) -> Result<PixelBuffer> {
        let reader = Self::reader_for(format)?;
        self.read_with(reader.as_ref(), input)
    }

    pub fn save(&self, image: &PixelBuffer, output: &mut dyn Write, format: FileFormat) -> Result<()> {
        let writer = Self::writer_for(format)?;
        self.write_with(writer.as_ref(), image, output)
    }

    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<PixelBuffer> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;

        let mut input = {
            let _span = tracing::info_span!("open_input_file").entered();
            File::open(path).map(BufReader::new).map_err(|e| {
                EditorError::InputReadError(format!("{}: {}", path.display(), e))
            })?
        };

        let image = self.load(&mut input, format)?;
        info!(
            width = image.width(),
            height = image.height(),
            %format,
            "Image loaded"
        );
        Ok(image)
    }

    #[instrument(skip(self, path, image), fields(path = %path.as_ref().display()))]
    pub fn save_file<P: AsRef<Path>>(&self, path: P, image: &PixelBuffer) -> Result<()> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;

        let mut output = {
            let _span = tracing::info_span!("create_output_file").entered();
            File::create(path).map(BufWriter::new).map_err(|e| {
                EditorError::OutputWriteError(format!("{}: {}", path.display(), e))
            })?
        };

        self.save(image, &mut output, format)?;
        info!(%format, "Image saved");
        Ok(())
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditorConfig) {
        self.config = config;
    }
}
