// src/web.rs

//! wasm-bindgen surface for browser renderers.
//!
//! JavaScript cannot borrow a Rust slice, so the buffer crosses the boundary
//! as an offset into linear memory plus a length. JS should build its
//! `Uint8Array` view right before copying into `ImageData`; the offset is only
//! valid while the `WebPixelMap` is alive.

use wasm_bindgen::prelude::*;

use crate::pixel_map::PixelMap;

#[wasm_bindgen]
pub struct WebPixelMap {
    map: PixelMap,
}

#[wasm_bindgen]
impl WebPixelMap {
    /// Takes `GenerationMethod` and `ColorDepth` ordinals.
    #[wasm_bindgen(constructor)]
    pub fn new(method: u8, color_depth: u8) -> Result<WebPixelMap, JsError> {
        let map = PixelMap::from_ordinals(method, color_depth)?;
        Ok(Self { map })
    }

    pub fn width(&self) -> u16 {
        self.map.width()
    }

    pub fn height(&self) -> u16 {
        self.map.height()
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.map.bytes_per_pixel()
    }

    pub fn pixels_ptr(&self) -> *const u8 {
        self.map.pixels().as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.map.pixels().len()
    }
}
