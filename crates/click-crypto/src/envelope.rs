//! Password-based AES-256-GCM envelopes.
//!
//! Wire format: `[salt:16][iv:12][ciphertext + tag]`
//! A fresh salt and IV are drawn for every call, so two encryptions of the
//! same plaintext under the same password are unlinkable.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::error::CryptoError;
use crate::frame;
use crate::kdf::{derive_key, generate_salt};
use crate::types::{AES_GCM_IV_LENGTH, MIN_ENVELOPE_LENGTH, SALT_LENGTH};

/// Generate a random 12-byte IV for AES-GCM.
fn generate_iv() -> Result<[u8; AES_GCM_IV_LENGTH], CryptoError> {
    let mut iv = [0u8; AES_GCM_IV_LENGTH];
    getrandom::getrandom(&mut iv).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(iv)
}

/// Encrypt a plaintext under a password.
///
/// Returns `[salt:16][iv:12][ciphertext+tag]`.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<Vec<u8>, CryptoError> {
    let salt = generate_salt()?;
    let iv = generate_iv()?;
    let key = derive_key(password, &salt)?;

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
    let nonce = Nonce::from_slice(&iv);
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let mut result = Vec::with_capacity(SALT_LENGTH + AES_GCM_IV_LENGTH + ciphertext.len());
    result.extend_from_slice(&salt);
    result.extend_from_slice(&iv);
    result.extend_from_slice(&ciphertext);
    Ok(result)
}

/// Decrypt an envelope produced by [`encrypt`].
///
/// A wrong password is indistinguishable from a tampered ciphertext: both
/// fail the GCM tag check and surface as `AuthenticationFailed`.
pub fn decrypt(envelope: &[u8], password: &str) -> Result<Vec<u8>, CryptoError> {
    if envelope.len() < MIN_ENVELOPE_LENGTH {
        return Err(CryptoError::EnvelopeTooShort(envelope.len()));
    }

    let salt = &envelope[..SALT_LENGTH];
    let iv = &envelope[SALT_LENGTH..SALT_LENGTH + AES_GCM_IV_LENGTH];
    let ciphertext = &envelope[SALT_LENGTH + AES_GCM_IV_LENGTH..];

    let key = derive_key(password, salt)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
    let nonce = Nonce::from_slice(iv);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailed)
}

/// Encrypt a file's bytes together with its name.
///
/// The plaintext is framed as `[metaLen:1][metaJSON][data]` before
/// encryption, so the name travels inside the envelope.
pub fn encrypt_file(data: &[u8], name: &str, password: &str) -> Result<Vec<u8>, CryptoError> {
    let payload = frame::frame(data, name)?;
    encrypt(&payload, password)
}

/// Decrypt an envelope produced by [`encrypt_file`], returning the data and
/// the original name (`"decrypted-file"` when the name was empty).
pub fn decrypt_file(envelope: &[u8], password: &str) -> Result<(Vec<u8>, String), CryptoError> {
    let payload = decrypt(envelope, password)?;
    frame::unframe(&payload)
}
