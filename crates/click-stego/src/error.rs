use thiserror::Error;

#[derive(Debug, Error)]
pub enum StegoError {
    #[error("Image decode failed: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("PNG encode failed: {0}")]
    ImageEncode(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
