// src/lib.rs

//! Procedural pixel maps for 2D canvas renderers.
//!
//! A [`PixelMap`] owns one generated buffer and lends it out as `&[u8]`.
//! [`RgbaSurface`] is an in-memory renderer that expands any map into RGBA.

pub mod color;
pub mod config;
pub mod error;
pub mod generation;
pub mod pixel_map;
pub mod surface;
#[cfg(feature = "wasm")]
pub mod web;

pub use color::ColorDepth;
pub use config::{Config, GeneratorConfig};
pub use error::{PixelMapError, Result};
pub use generation::GenerationMethod;
pub use pixel_map::PixelMap;
pub use surface::RgbaSurface;
