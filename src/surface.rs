// src/surface.rs

//! Headless RGBA destination that implements the canvas renderer contract.
//!
//! The browser renderer copies a `PixelMap` into `ImageData`, four bytes per
//! pixel. `RgbaSurface` does the same in memory: sources with alpha are copied
//! verbatim, packed RGB sources are expanded with an opaque alpha byte.

use log::trace;

use crate::color::OPAQUE;
use crate::error::{PixelMapError, Result};
use crate::pixel_map::PixelMap;

const RGBA: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaSurface {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl RgbaSurface {
    /// Creates a transparent black surface.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * RGBA],
        }
    }

    /// Creates a surface sized to `map`.
    pub fn for_map(map: &PixelMap) -> Self {
        Self::new(map.width(), map.height())
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * RGBA;
        let px = self.data.get(start..start + RGBA)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copies `map` into the surface, replacing every pixel.
    pub fn blit(&mut self, map: &PixelMap) -> Result<()> {
        if map.width() != self.width || map.height() != self.height {
            return Err(PixelMapError::SurfaceSizeMismatch {
                surface_width: self.width,
                surface_height: self.height,
                map_width: map.width(),
                map_height: map.height(),
            });
        }

        let source = map.pixels();
        if map.color_depth().has_alpha() {
            trace!("Blitting {} bytes verbatim", source.len());
            self.data.copy_from_slice(source);
        } else {
            trace!("Expanding {} packed RGB pixels", map.len());
            for (dst, src) in self
                .data
                .chunks_exact_mut(RGBA)
                .zip(source.chunks_exact(map.bytes_per_pixel()))
            {
                dst[..3].copy_from_slice(src);
                dst[3] = OPAQUE;
            }
        }
        Ok(())
    }
}
