use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Envelope too short: {0} bytes")]
    EnvelopeTooShort(usize),

    #[error("Authentication failed: wrong password or tampered ciphertext")]
    AuthenticationFailed,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Metadata JSON too long: {len} bytes exceeds the 255-byte prefix")]
    MetadataTooLong { len: usize },

    #[error("Malformed metadata: {0}")]
    MalformedMetadata(String),

    #[error("Payload too large: {len} bytes exceeds the 65535-byte length prefix")]
    PayloadTooLarge { len: usize },

    #[error("Invalid base64url: {0}")]
    InvalidBase64(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
