// src/error.rs

//! Error taxonomy for pixel map construction and rendering.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PixelMapError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PixelMapError {
    /// An ordinal that does not name a known enum variant.
    #[error("Invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: u8 },
    #[error("Failed to allocate pixel buffer of {bytes} bytes")]
    AllocationFailure { bytes: usize },
    #[error("Surface is {surface_width}x{surface_height}, map is {map_width}x{map_height}")]
    SurfaceSizeMismatch {
        surface_width: u16,
        surface_height: u16,
        map_width: u16,
        map_height: u16,
    },
    #[error("Config error: {0}")]
    Config(String),
}
