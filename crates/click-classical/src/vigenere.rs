//! Vigenere cipher. Key letters cycle over the alphabetic characters of the
//! text only; non-letters pass through without consuming key material.

use crate::error::ClassicalError;

fn key_shifts(key: &str) -> Result<Vec<i32>, ClassicalError> {
    let shifts: Vec<i32> = key
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| (c.to_ascii_uppercase() as u8 - b'A') as i32)
        .collect();
    if shifts.is_empty() {
        return Err(ClassicalError::InvalidKey(
            "key must contain at least one letter".into(),
        ));
    }
    Ok(shifts)
}

fn apply(text: &str, key: &str, sign: i32) -> Result<String, ClassicalError> {
    let shifts = key_shifts(key)?;
    let mut idx = 0usize;
    Ok(text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let offset = (c as u8 - base) as i32;
                let shift = sign * shifts[idx % shifts.len()];
                idx += 1;
                (base + (offset + shift).rem_euclid(26) as u8) as char
            } else {
                c
            }
        })
        .collect())
}

/// Encrypt with a repeating key.
pub fn encode(text: &str, key: &str) -> Result<String, ClassicalError> {
    apply(text, key, 1)
}

/// Decrypt with a repeating key.
pub fn decode(text: &str, key: &str) -> Result<String, ClassicalError> {
    apply(text, key, -1)
}
