//! Metadata framing for encrypted files.
//!
//! Plaintext layout, applied before encryption:
//! `[metaLen:1][metaJSON:metaLen][rawData]`
//! where metaJSON is a UTF-8 object `{"name": ..., "size": ...}`.

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Name reported when a frame carries no usable name.
const FALLBACK_NAME: &str = "decrypted-file";

/// Largest metadata JSON the 1-byte length prefix can describe.
const MAX_META_LENGTH: usize = u8::MAX as usize;

#[derive(Serialize, Deserialize)]
struct FileMeta {
    #[serde(default)]
    name: String,
    #[serde(default)]
    size: usize,
}

/// Wrap raw data with its original name and size.
///
/// Errors with `MetadataTooLong` when the metadata JSON exceeds 255 bytes;
/// very long filenames must be shortened by the caller.
pub fn frame(data: &[u8], name: &str) -> Result<Vec<u8>, CryptoError> {
    let meta = FileMeta {
        name: name.to_string(),
        size: data.len(),
    };
    let meta_bytes = serde_json::to_vec(&meta)
        .map_err(|e| CryptoError::MalformedMetadata(e.to_string()))?;
    if meta_bytes.len() > MAX_META_LENGTH {
        return Err(CryptoError::MetadataTooLong {
            len: meta_bytes.len(),
        });
    }

    let mut payload = Vec::with_capacity(1 + meta_bytes.len() + data.len());
    payload.push(meta_bytes.len() as u8);
    payload.extend_from_slice(&meta_bytes);
    payload.extend_from_slice(data);
    Ok(payload)
}

/// Split a framed payload back into data and name.
///
/// Returns `"decrypted-file"` when the stored name is empty.
pub fn unframe(payload: &[u8]) -> Result<(Vec<u8>, String), CryptoError> {
    let meta_len = *payload
        .first()
        .ok_or_else(|| CryptoError::MalformedMetadata("empty payload".into()))?
        as usize;
    if payload.len() < 1 + meta_len {
        return Err(CryptoError::MalformedMetadata(format!(
            "metadata length {} exceeds payload of {} bytes",
            meta_len,
            payload.len()
        )));
    }

    let meta: FileMeta = serde_json::from_slice(&payload[1..1 + meta_len])
        .map_err(|e| CryptoError::MalformedMetadata(e.to_string()))?;
    let data = payload[1 + meta_len..].to_vec();

    let name = if meta.name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        meta.name
    };
    Ok((data, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_layout() {
        let payload = frame(b"hi", "a.txt").unwrap();
        let expected_meta = br#"{"name":"a.txt","size":2}"#;
        assert_eq!(payload[0] as usize, expected_meta.len());
        assert_eq!(&payload[1..1 + expected_meta.len()], expected_meta);
        assert_eq!(&payload[1 + expected_meta.len()..], b"hi");
    }

    #[test]
    fn round_trip() {
        let payload = frame(b"hi", "a.txt").unwrap();
        let (data, name) = unframe(&payload).unwrap();
        assert_eq!(data, b"hi");
        assert_eq!(name, "a.txt");
    }

    #[test]
    fn empty_name_falls_back() {
        let payload = frame(b"data", "").unwrap();
        let (_, name) = unframe(&payload).unwrap();
        assert_eq!(name, FALLBACK_NAME);
    }

    #[test]
    fn empty_data() {
        let payload = frame(b"", "x").unwrap();
        let (data, name) = unframe(&payload).unwrap();
        assert!(data.is_empty());
        assert_eq!(name, "x");
    }

    #[test]
    fn rejects_oversized_metadata() {
        let name = "n".repeat(300);
        let err = frame(b"data", &name).unwrap_err();
        assert!(matches!(err, CryptoError::MetadataTooLong { .. }));
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(unframe(&[]).is_err());
    }

    #[test]
    fn rejects_truncated_metadata() {
        // Claims 200 bytes of metadata but carries 3.
        let payload = [200u8, b'{', b'}', b'x'];
        assert!(unframe(&payload).is_err());
    }

    #[test]
    fn rejects_invalid_json() {
        let mut payload = vec![4u8];
        payload.extend_from_slice(b"oops");
        payload.extend_from_slice(b"data");
        let err = unframe(&payload).unwrap_err();
        assert!(matches!(err, CryptoError::MalformedMetadata(_)));
    }

    #[test]
    fn missing_name_field_falls_back() {
        let meta = br#"{"size":4}"#;
        let mut payload = vec![meta.len() as u8];
        payload.extend_from_slice(meta);
        payload.extend_from_slice(b"data");
        let (data, name) = unframe(&payload).unwrap();
        assert_eq!(data, b"data");
        assert_eq!(name, FALLBACK_NAME);
    }
}
