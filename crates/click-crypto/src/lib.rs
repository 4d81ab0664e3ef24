pub mod base64url;
pub mod bitpack;
pub mod envelope;
pub mod error;
pub mod frame;
pub mod kdf;
pub mod types;

pub use base64url::{base64url_decode, base64url_encode};
pub use bitpack::{pack, unpack};
pub use envelope::{decrypt, decrypt_file, encrypt, encrypt_file};
pub use error::CryptoError;
pub use frame::{frame, unframe};
pub use kdf::{derive_key, generate_salt, DerivedKey};
pub use types::{
    AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH, MAX_PACKABLE_LENGTH,
    MIN_ENVELOPE_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH,
};
