//! PBKDF2-HMAC-SHA256 key derivation.

use hmac::Hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;
use crate::types::{AES_KEY_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH};

/// A derived 256-bit AES key. Zeroed on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; AES_KEY_LENGTH]);

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Derive a 256-bit key from a password and salt using PBKDF2-HMAC-SHA256
/// with 100,000 iterations.
///
/// The empty password is accepted; PBKDF2 is defined for empty input.
pub fn derive_key(password: &str, salt: &[u8]) -> Result<DerivedKey, CryptoError> {
    let mut okm = [0u8; AES_KEY_LENGTH];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut okm)
        .map_err(|e| CryptoError::EncryptionFailed(format!("PBKDF2 failed: {}", e)))?;
    Ok(DerivedKey(okm))
}

/// Generate a random 16-byte salt.
pub fn generate_salt() -> Result<[u8; SALT_LENGTH], CryptoError> {
    let mut salt = [0u8; SALT_LENGTH];
    getrandom::getrandom(&mut salt).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(salt)
}
