use std::path::PathBuf;

use pixel_dither::ImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Line {line}: Unknown command: {keyword}")]
    UnknownCommand { line: usize, keyword: String },

    #[error("Image not found: {0}")]
    ImageNotFound(String),

    #[error("Refusing to overwrite existing file: {}", .0.display())]
    Exists(PathBuf),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Unsupported PNG format: {0}")]
    UnsupportedFormat(String),

    #[error("Cannot encode an empty image")]
    EmptyImage,
}

impl From<png::DecodingError> for CodecError {
    fn from(e: png::DecodingError) -> Self {
        match e {
            png::DecodingError::IoError(io) => CodecError::Io(io),
            other => CodecError::Decode(other.to_string()),
        }
    }
}

impl From<png::EncodingError> for CodecError {
    fn from(e: png::EncodingError) -> Self {
        match e {
            png::EncodingError::IoError(io) => CodecError::Io(io),
            other => CodecError::Encode(other.to_string()),
        }
    }
}
