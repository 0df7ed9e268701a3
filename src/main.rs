// src/main.rs

use anyhow::Context;
use log::info;

use pixel_map::config::CONFIG;
use pixel_map::{PixelMap, RgbaSurface};

/// Generates one pixel map, renders it headlessly and logs a summary.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let generator = &CONFIG.generator;
    info!(
        "Generating {:?} map at {:?} (seed: {:?})",
        generator.method, generator.color_depth, generator.seed
    );

    let map = PixelMap::from_config(generator).context("Failed to generate pixel map")?;
    let mut surface = RgbaSurface::for_map(&map);
    surface
        .blit(&map)
        .context("Failed to render pixel map into surface")?;

    info!(
        "Rendered {}x{} map: {} source bytes, {} surface bytes",
        map.width(),
        map.height(),
        map.pixels().len(),
        surface.data().len()
    );

    let mut sums = [0u64; 4];
    for px in surface.data().chunks_exact(4) {
        for (sum, &channel) in sums.iter_mut().zip(px) {
            *sum += channel as u64;
        }
    }
    let count = map.len().max(1) as u64;
    info!(
        "Mean channels: r={} g={} b={} a={}",
        sums[0] / count,
        sums[1] / count,
        sums[2] / count,
        sums[3] / count
    );

    Ok(())
}
