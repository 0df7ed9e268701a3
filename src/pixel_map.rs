// src/pixel_map.rs

//! Defines `PixelMap`, the owner of a generated pixel buffer.
//!
//! A `PixelMap` is built once and never changes afterwards. Renderers read it
//! through [`PixelMap::pixels`], a borrowed slice whose lifetime the compiler
//! ties to the map, so no view can outlive the buffer it points into.
//!
//! Byte layout is pixel-major and row-major with no padding:
//! `[R, G, B, A]` for depths with alpha, `[R, G, B]` for packed depths.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::ColorDepth;
use crate::config::GeneratorConfig;
use crate::error::{PixelMapError, Result};
use crate::generation::{self, GenerationMethod};

/// A fixed-size, immutable, procedurally generated pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMap {
    width: u16,
    height: u16,
    method: GenerationMethod,
    color_depth: ColorDepth,
    buffer: Vec<u8>,
}

impl PixelMap {
    /// Generates a map using the thread-local RNG.
    pub fn new(method: GenerationMethod, color_depth: ColorDepth) -> Result<Self> {
        Self::with_rng(method, color_depth, &mut rand::thread_rng())
    }

    /// Generates a map from raw ordinals, as received across an FFI or wasm
    /// boundary.
    ///
    /// Fails with [`PixelMapError::InvalidArgument`] before any allocation if
    /// either ordinal is unknown.
    pub fn from_ordinals(method: u8, color_depth: u8) -> Result<Self> {
        let method = GenerationMethod::try_from(method)?;
        let color_depth = ColorDepth::try_from(color_depth)?;
        Self::new(method, color_depth)
    }

    /// Generates a map drawing randomness from `rng`.
    ///
    /// Methods that need no randomness leave `rng` untouched.
    pub fn with_rng<R: Rng + ?Sized>(
        method: GenerationMethod,
        color_depth: ColorDepth,
        rng: &mut R,
    ) -> Result<Self> {
        let (width, height) = color_depth.dimensions();
        let bytes = color_depth.buffer_len();

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(bytes)
            .map_err(|_| PixelMapError::AllocationFailure { bytes })?;
        generation::fill(method, color_depth, rng, &mut buffer);

        debug!(
            "Generated {}x{} pixel map ({:?}, {:?}, {} bytes)",
            width, height, method, color_depth, bytes
        );

        Ok(Self {
            width,
            height,
            method,
            color_depth,
            buffer,
        })
    }

    /// Generates a map from configuration. A configured seed makes the result
    /// reproducible.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Self::with_rng(config.method, config.color_depth, &mut rng)
            }
            None => Self::new(config.method, config.color_depth),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn method(&self) -> GenerationMethod {
        self.method
    }

    pub fn color_depth(&self) -> ColorDepth {
        self.color_depth
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.color_depth.bytes_per_pixel()
    }

    /// Number of pixels in the grid.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view over the raw buffer.
    ///
    /// Length is always `width * height * bytes_per_pixel`.
    pub fn pixels(&self) -> &[u8] {
        &self.buffer
    }

    /// Channel bytes of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u16, y: u16) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let stride = self.bytes_per_pixel();
        let start = (y as usize * self.width as usize + x as usize) * stride;
        self.buffer.get(start..start + stride)
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.buffer
            .chunks_exact(self.width as usize * self.bytes_per_pixel())
    }
}
