//! Shared constants for the envelope wire format.

/// PBKDF2-HMAC-SHA256 iteration count. Fixed by design, not configurable.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length in bytes (prepended to every envelope).
pub const SALT_LENGTH: usize = 16;

/// AES-GCM IV (nonce) length in bytes.
pub const AES_GCM_IV_LENGTH: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const AES_GCM_TAG_LENGTH: usize = 16;

/// AES-256 key length in bytes.
pub const AES_KEY_LENGTH: usize = 32;

/// Structural floor for an envelope: `[salt:16][iv:12]` with empty ciphertext.
pub const MIN_ENVELOPE_LENGTH: usize = SALT_LENGTH + AES_GCM_IV_LENGTH;

/// Largest payload the 2-byte length prefix of the 14-bit packer can carry.
pub const MAX_PACKABLE_LENGTH: usize = u16::MAX as usize;
