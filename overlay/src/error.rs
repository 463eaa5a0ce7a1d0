//! Error types for rendering and settings

use std::path::PathBuf;

use rpghud_types::ElementType;
use thiserror::Error;

/// Errors raised outside the steady-state draw arithmetic
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("failed to read texture {path}")]
    ReadTexture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode texture {key}")]
    DecodeTexture {
        key: String,
        #[source]
        source: png::DecodingError,
    },

    #[error("unsupported color type {color_type} in texture {key}")]
    UnsupportedColorType { key: String, color_type: String },

    #[error("failed to write {path}")]
    WriteImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode PNG {path}")]
    EncodePng {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },

    #[error("{element} has no {what} to display")]
    MissingData {
        element: ElementType,
        what: &'static str,
    },
}

/// Errors during settings persistence
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save settings")]
    Save(#[source] confy::ConfyError),

    #[error("failed to locate settings file")]
    Locate(#[source] confy::ConfyError),
}
