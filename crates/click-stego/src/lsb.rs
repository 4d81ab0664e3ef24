//! LSB bit embedding and extraction.
//!
//! Payload bits ride in the least significant bit of R, G, and B of each
//! pixel in row-major order; alpha is never touched. The payload is
//! terminated by the 8-byte marker so extraction knows where to stop.

use image::RgbaImage;
use tracing::debug;

use crate::canvas::{canvas_side, noise_canvas};
use crate::error::StegoError;

/// Terminator appended after the secret before embedding.
pub const MARKER: &[u8; 8] = b"!!DONE!!";

/// Embed a secret into a freshly generated noise canvas.
///
/// Channel bits beyond the payload are left as noise, so the payload region
/// is not visually distinguishable from the padding.
pub fn embed(secret: &[u8]) -> Result<RgbaImage, StegoError> {
    let mut payload = Vec::with_capacity(secret.len() + MARKER.len());
    payload.extend_from_slice(secret);
    payload.extend_from_slice(MARKER);

    let side = canvas_side(payload.len());
    debug!(side, payload_bytes = payload.len(), "embedding payload");
    let mut image = noise_canvas(side)?;

    let mut bits = payload
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1));

    'pixels: for pixel in image.pixels_mut() {
        for ch in 0..3 {
            match bits.next() {
                Some(bit) => pixel[ch] = (pixel[ch] & 0xfe) | bit,
                None => break 'pixels,
            }
        }
    }

    Ok(image)
}

/// Scan an image for an embedded payload.
///
/// Returns `None` when the marker never appears — an image with nothing
/// hidden in it is a valid input, not an error.
pub fn extract(image: &RgbaImage) -> Option<Vec<u8>> {
    let mut bytes: Vec<u8> = Vec::new();
    let mut acc = 0u8;
    let mut nbits = 0u8;

    for pixel in image.pixels() {
        for ch in 0..3 {
            acc = (acc << 1) | (pixel[ch] & 1);
            nbits += 1;
            if nbits == 8 {
                bytes.push(acc);
                acc = 0;
                nbits = 0;
                if bytes.len() >= MARKER.len() && bytes[bytes.len() - MARKER.len()..] == MARKER[..]
                {
                    bytes.truncate(bytes.len() - MARKER.len());
                    debug!(payload_bytes = bytes.len(), "found embedded payload");
                    return Some(bytes);
                }
            }
        }
    }

    debug!("no marker found");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_extract_round_trip() {
        let secret = b"meet at dawn";
        let image = embed(secret).unwrap();
        assert_eq!(extract(&image).unwrap(), secret);
    }

    #[test]
    fn empty_secret_round_trip() {
        let image = embed(b"").unwrap();
        assert_eq!(extract(&image).unwrap(), b"");
    }

    #[test]
    fn binary_secret_round_trip() {
        let secret: Vec<u8> = (0..=255).collect();
        let image = embed(&secret).unwrap();
        assert_eq!(extract(&image).unwrap(), secret);
    }

    #[test]
    fn secret_containing_marker_bytes_stops_at_first_marker() {
        // The scan stops at the first marker match, so a secret that embeds
        // the marker sequence is cut short there. Known format property.
        let mut secret = b"prefix".to_vec();
        secret.extend_from_slice(MARKER);
        secret.extend_from_slice(b"suffix");
        let image = embed(&secret).unwrap();
        assert_eq!(extract(&image).unwrap(), b"prefix");
    }

    #[test]
    fn plain_noise_image_yields_nothing() {
        let image = crate::canvas::noise_canvas(40).unwrap();
        assert!(extract(&image).is_none());
    }

    #[test]
    fn canvas_is_square_and_sized() {
        let secret = vec![0u8; 500];
        let image = embed(&secret).unwrap();
        assert_eq!(image.width(), image.height());
        let capacity_bits = 3 * image.width() as usize * image.height() as usize;
        assert!(capacity_bits >= (secret.len() + MARKER.len()) * 8);
    }

    #[test]
    fn alpha_untouched() {
        let image = embed(b"data").unwrap();
        assert!(image.pixels().all(|p| p[3] == 255));
    }
}
