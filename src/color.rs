// src/color.rs

//! Color depths and palette quantization.
//!
//! A color depth fixes three things at once: how many levels each channel
//! can take (`steps + 1`), the grid dimensions of a map at that depth, and the
//! number of bytes each pixel occupies in the buffer. The grid is always sized
//! so that it holds every palette color exactly once:
//! `(steps + 1)^3 == width * height`.

use serde::{Deserialize, Serialize};

use crate::error::{PixelMapError, Result};

/// Alpha written by palette-based generators and by the renderer when it
/// expands a packed RGB source.
pub const OPAQUE: u8 = 255;

/// Supported color depths.
///
/// All `BitN` depths store `[R, G, B, A]`. `Rgb18` stores the 18-bit palette
/// packed as `[R, G, B]` with no alpha byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ColorDepth {
    Bit24 = 0,
    Bit21 = 1,
    Bit18 = 2,
    Bit15 = 3,
    Bit12 = 4,
    Bit9 = 5,
    Bit6 = 6,
    Rgb18 = 7,
}

impl ColorDepth {
    /// Every depth, in ordinal order.
    pub const ALL: [ColorDepth; 8] = [
        ColorDepth::Bit24,
        ColorDepth::Bit21,
        ColorDepth::Bit18,
        ColorDepth::Bit15,
        ColorDepth::Bit12,
        ColorDepth::Bit9,
        ColorDepth::Bit6,
        ColorDepth::Rgb18,
    ];

    /// Grid dimensions as `(width, height)`.
    pub const fn dimensions(self) -> (u16, u16) {
        match self {
            ColorDepth::Bit24 => (4096, 4096),
            ColorDepth::Bit21 => (2048, 1024),
            ColorDepth::Bit18 | ColorDepth::Rgb18 => (512, 512),
            ColorDepth::Bit15 => (256, 128),
            ColorDepth::Bit12 => (64, 64),
            ColorDepth::Bit9 => (32, 16),
            ColorDepth::Bit6 => (8, 8),
        }
    }

    /// Highest palette index per channel. A channel takes `steps + 1` levels.
    pub const fn steps(self) -> u8 {
        match self {
            ColorDepth::Bit24 => 255,
            ColorDepth::Bit21 => 127,
            ColorDepth::Bit18 | ColorDepth::Rgb18 => 63,
            ColorDepth::Bit15 => 31,
            ColorDepth::Bit12 => 15,
            ColorDepth::Bit9 => 7,
            ColorDepth::Bit6 => 3,
        }
    }

    pub const fn has_alpha(self) -> bool {
        !matches!(self, ColorDepth::Rgb18)
    }

    pub const fn bytes_per_pixel(self) -> usize {
        if self.has_alpha() {
            4
        } else {
            3
        }
    }

    /// Number of distinct colors in the palette, equal to the pixel count.
    pub const fn max_colors(self) -> u32 {
        let (width, height) = self.dimensions();
        width as u32 * height as u32
    }

    /// Total buffer length in bytes for a map at this depth.
    pub const fn buffer_len(self) -> usize {
        self.max_colors() as usize * self.bytes_per_pixel()
    }
}

impl TryFrom<u8> for ColorDepth {
    type Error = PixelMapError;

    fn try_from(value: u8) -> Result<Self> {
        ColorDepth::ALL
            .get(value as usize)
            .copied()
            .ok_or(PixelMapError::InvalidArgument {
                what: "color depth",
                value,
            })
    }
}

/// Maps a palette index in `0..=steps` onto the full `0..=255` channel range.
///
/// Index `0` maps to `0` and index `steps` maps to `255`.
pub fn quantize(index: u8, steps: u8) -> u8 {
    if steps == 0 {
        return 0;
    }
    (index as u32 * 255 / steps as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_palette_fills_grid_exactly() {
        for depth in ColorDepth::ALL {
            let levels = depth.steps() as u32 + 1;
            assert_eq!(
                levels * levels * levels,
                depth.max_colors(),
                "{:?} palette does not match its grid",
                depth
            );
        }
    }

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(ColorDepth::Bit18.bytes_per_pixel(), 4);
        assert_eq!(ColorDepth::Bit6.bytes_per_pixel(), 4);
        assert_eq!(ColorDepth::Rgb18.bytes_per_pixel(), 3);
        assert!(!ColorDepth::Rgb18.has_alpha());
        assert_eq!(ColorDepth::Rgb18.buffer_len(), 512 * 512 * 3);
    }

    #[test]
    fn test_ordinals_round_trip() {
        for depth in ColorDepth::ALL {
            assert_eq!(ColorDepth::try_from(depth as u8), Ok(depth));
        }
    }

    #[test]
    fn test_unknown_ordinal_is_invalid() {
        assert_eq!(
            ColorDepth::try_from(8),
            Err(PixelMapError::InvalidArgument {
                what: "color depth",
                value: 8
            })
        );
        assert!(ColorDepth::try_from(u8::MAX).is_err());
    }

    #[test]
    fn test_quantize_endpoints() {
        assert_eq!(quantize(0, 63), 0);
        assert_eq!(quantize(63, 63), 255);
        assert_eq!(quantize(1, 3), 85);
        assert_eq!(quantize(2, 3), 170);
        assert_eq!(quantize(255, 255), 255);
        // 1 * 255 / 63 = 4.047...
        assert_eq!(quantize(1, 63), 4);
    }
}
