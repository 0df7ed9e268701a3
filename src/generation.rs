// src/generation.rs

//! Generation methods and the fill routines behind them.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{quantize, ColorDepth, OPAQUE};
use crate::error::{PixelMapError, Result};

/// Algorithm used to fill a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GenerationMethod {
    /// Every palette color once, red-major, then green, then blue.
    Ordered = 0,
    /// Every byte drawn independently and uniformly from `0..=255`.
    Random = 1,
    /// Red/green sweep with blue advancing in bands across each row.
    SmoothPixels = 2,
    /// The `Ordered` palette in a uniformly random order.
    Shuffled = 3,
}

impl GenerationMethod {
    pub const ALL: [GenerationMethod; 4] = [
        GenerationMethod::Ordered,
        GenerationMethod::Random,
        GenerationMethod::SmoothPixels,
        GenerationMethod::Shuffled,
    ];
}

impl TryFrom<u8> for GenerationMethod {
    type Error = PixelMapError;

    fn try_from(value: u8) -> Result<Self> {
        GenerationMethod::ALL
            .get(value as usize)
            .copied()
            .ok_or(PixelMapError::InvalidArgument {
                what: "generation method",
                value,
            })
    }
}

/// Fills `buffer` with `depth.buffer_len()` bytes produced by `method`.
///
/// `buffer` must be empty with enough capacity reserved; every routine here
/// only appends.
pub(crate) fn fill<R: Rng + ?Sized>(
    method: GenerationMethod,
    depth: ColorDepth,
    rng: &mut R,
    buffer: &mut Vec<u8>,
) {
    debug_assert!(buffer.is_empty());
    trace!("Filling {:?} buffer with {:?}", depth, method);

    match method {
        GenerationMethod::Ordered => {
            for rgb in palette(depth) {
                push_pixel(buffer, rgb, depth);
            }
        }
        GenerationMethod::Random => {
            buffer.resize(depth.buffer_len(), 0);
            rng.fill(buffer.as_mut_slice());
        }
        GenerationMethod::SmoothPixels => smooth(depth, buffer),
        GenerationMethod::Shuffled => {
            let mut colors: Vec<[u8; 3]> = palette(depth).collect();
            colors.shuffle(rng);
            for rgb in colors {
                push_pixel(buffer, rgb, depth);
            }
        }
    }

    debug_assert_eq!(buffer.len(), depth.buffer_len());
}

/// Every color of the depth's palette, red-major.
pub fn palette(depth: ColorDepth) -> impl Iterator<Item = [u8; 3]> {
    let steps = depth.steps();
    (0..=steps).flat_map(move |r| {
        let pr = quantize(r, steps);
        (0..=steps).flat_map(move |g| {
            let pg = quantize(g, steps);
            (0..=steps).map(move |b| [pr, pg, quantize(b, steps)])
        })
    })
}

fn smooth(depth: ColorDepth, buffer: &mut Vec<u8>) {
    let steps = depth.steps();
    let (width, _) = depth.dimensions();
    let blue_step = (width / (steps as u16 + 1)).max(1);
    let mut run = 0u16;
    let mut blue = 0u8;

    for r in 0..=steps {
        let pr = quantize(r, steps);
        for g in 0..=steps {
            let pg = quantize(g, steps);
            for _ in 0..=steps {
                push_pixel(buffer, [pr, pg, quantize(blue, steps)], depth);
                run += 1;
                if run >= blue_step {
                    run = 0;
                    blue = if blue == steps { 0 } else { blue + 1 };
                }
            }
        }
    }
}

fn push_pixel(buffer: &mut Vec<u8>, rgb: [u8; 3], depth: ColorDepth) {
    buffer.extend_from_slice(&rgb);
    if depth.has_alpha() {
        buffer.push(OPAQUE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use test_log::test;

    fn generate(method: GenerationMethod, depth: ColorDepth, seed: u64) -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut buffer = Vec::with_capacity(depth.buffer_len());
        fill(method, depth, &mut rng, &mut buffer);
        buffer
    }

    #[test]
    fn test_method_ordinals() {
        assert_eq!(GenerationMethod::try_from(1), Ok(GenerationMethod::Random));
        assert_eq!(
            GenerationMethod::try_from(4),
            Err(PixelMapError::InvalidArgument {
                what: "generation method",
                value: 4
            })
        );
    }

    #[test]
    fn test_ordered_starts_black_ends_white() {
        let buffer = generate(GenerationMethod::Ordered, ColorDepth::Bit6, 0);
        assert_eq!(&buffer[..4], &[0, 0, 0, 255]);
        assert_eq!(&buffer[4..8], &[0, 0, 85, 255]);
        assert_eq!(&buffer[buffer.len() - 4..], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_shuffled_is_permutation_of_palette() {
        let depth = ColorDepth::Bit9;
        let buffer = generate(GenerationMethod::Shuffled, depth, 7);
        let seen: HashSet<[u8; 3]> = buffer
            .chunks_exact(depth.bytes_per_pixel())
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        let expected: HashSet<[u8; 3]> = palette(depth).collect();
        assert_eq!(seen.len(), depth.max_colors() as usize);
        assert_eq!(seen, expected);
        assert!(buffer.chunks_exact(4).all(|px| px[3] == OPAQUE));
    }

    #[test]
    fn test_smooth_blue_bands() {
        // Bit6: width 8, four levels, blue advances every 2 pixels.
        let buffer = generate(GenerationMethod::SmoothPixels, ColorDepth::Bit6, 0);
        let blues: Vec<u8> = buffer.chunks_exact(4).take(10).map(|px| px[2]).collect();
        assert_eq!(blues, vec![0, 0, 85, 85, 170, 170, 255, 255, 0, 0]);
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let a = generate(GenerationMethod::Random, ColorDepth::Bit12, 42);
        let b = generate(GenerationMethod::Random, ColorDepth::Bit12, 42);
        let c = generate(GenerationMethod::Random, ColorDepth::Bit12, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_packed_depth_has_no_alpha() {
        let buffer = generate(GenerationMethod::Ordered, ColorDepth::Rgb18, 0);
        assert_eq!(buffer.len(), 512 * 512 * 3);
        assert_eq!(&buffer[..6], &[0, 0, 0, 0, 0, 4]);
    }
}
