//! Synthetic cover canvas generation.
//!
//! The canvas is a square RGBA raster filled with mid-range noise so that
//! regions beyond the payload look no different from regions carrying bits.

use image::RgbaImage;

use crate::error::StegoError;

/// Extra side length beyond the minimal square, in pixels. Absorbs rounding
/// and leaves a noisy margin around the payload region.
const CANVAS_MARGIN: u32 = 20;

/// Noise channel values are drawn from `[NOISE_FLOOR, NOISE_FLOOR + NOISE_SPAN)`.
const NOISE_FLOOR: u8 = 50;
const NOISE_SPAN: u8 = 100;

/// Side length of the square canvas for a payload of `payload_bytes` bytes:
/// `ceil(sqrt(ceil(bits / 3))) + 20`, three embeddable channels per pixel.
pub fn canvas_side(payload_bytes: usize) -> u32 {
    let bits = payload_bytes * 8;
    let pixels = bits.div_ceil(3);
    (pixels as f64).sqrt().ceil() as u32 + CANVAS_MARGIN
}

/// Allocate a `side` x `side` RGBA canvas with every channel set to noise in
/// `[50,150)` and alpha fully opaque.
pub fn noise_canvas(side: u32) -> Result<RgbaImage, StegoError> {
    let pixel_count = side as usize * side as usize;
    let mut noise = vec![0u8; pixel_count * 3];
    getrandom::getrandom(&mut noise).map_err(|e| StegoError::RngFailed(e.to_string()))?;

    let mut raw = Vec::with_capacity(pixel_count * 4);
    for channels in noise.chunks_exact(3) {
        for &b in channels {
            raw.push(NOISE_FLOOR + b % NOISE_SPAN);
        }
        raw.push(255);
    }

    RgbaImage::from_raw(side, side, raw)
        .ok_or_else(|| StegoError::ImageEncode("canvas buffer size mismatch".into()))
}
