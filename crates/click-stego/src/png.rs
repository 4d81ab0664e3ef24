//! PNG entry points.
//!
//! PNG is mandatory: any lossy re-encode of the raster destroys the hidden
//! bits.

use std::io::Cursor;

use image::ImageFormat;

use crate::error::StegoError;
use crate::lsb::{embed, extract};

/// Embed a secret and encode the cover image as PNG bytes.
pub fn embed_png(secret: &[u8]) -> Result<Vec<u8>, StegoError> {
    let image = embed(secret)?;
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| StegoError::ImageEncode(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Decode an image and scan it for an embedded payload.
///
/// `Ok(None)` means the image decoded fine but carries no payload; an
/// unreadable image is an `Err`.
pub fn extract_png(data: &[u8]) -> Result<Option<Vec<u8>>, StegoError> {
    let image = image::load_from_memory(data)?.to_rgba8();
    Ok(extract(&image))
}
