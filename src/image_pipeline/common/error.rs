use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid image dimensions: width={width}, height={height}")]
    InvalidDimension { width: i64, height: i64 },

    #[error("Value out of range: {0}")]
    InvalidRange(String),

    #[error("Coordinates ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    #[error("Malformed image data: {0}")]
    FormatError(String),

    #[error("Unexpected end of input: expected {expected} tokens, found {found}")]
    TruncatedInput { expected: usize, found: usize },

    #[error("No source image given")]
    NullSource,

    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Image with the same name already exists: {0}")]
    AlreadyExists(String),

    #[error("Image name cannot be empty")]
    InvalidName,

    #[error("Unknown grayscale kind: {0}")]
    UnknownGrayscaleKind(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EditorError>;
