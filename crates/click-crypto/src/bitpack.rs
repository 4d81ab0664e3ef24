//! Lossless re-packing of byte buffers into 14-bit chunks (0..16384).
//!
//! The chunk stream is what the word-list and alphanumeric encoders consume:
//! each chunk indexes one code. A 2-byte big-endian length prefix rides at
//! the front of the bitstream so the exact byte count survives the trailing
//! zero padding of the last chunk.

use crate::error::CryptoError;
use crate::types::MAX_PACKABLE_LENGTH;

const CHUNK_BITS: u32 = 14;
const CHUNK_MASK: u32 = (1 << CHUNK_BITS) - 1;

/// Pack a byte buffer into 14-bit chunks, MSB-first.
///
/// The final partial group is left-shifted to fill its 14-bit slot, so the
/// output length is `ceil((len + 2) * 8 / 14)`. Inputs longer than 65535
/// bytes do not fit the length prefix and are rejected.
pub fn pack(data: &[u8]) -> Result<Vec<u16>, CryptoError> {
    if data.len() > MAX_PACKABLE_LENGTH {
        return Err(CryptoError::PayloadTooLarge { len: data.len() });
    }

    let length = data.len() as u16;
    let mut chunks = Vec::with_capacity(((data.len() + 2) * 8).div_ceil(CHUNK_BITS as usize));
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in length.to_be_bytes().iter().chain(data.iter()) {
        acc = (acc << 8) | byte as u32;
        bits += 8;
        while bits >= CHUNK_BITS {
            bits -= CHUNK_BITS;
            chunks.push(((acc >> bits) & CHUNK_MASK) as u16);
            acc &= (1 << bits) - 1;
        }
    }
    if bits > 0 {
        chunks.push(((acc << (CHUNK_BITS - bits)) & CHUNK_MASK) as u16);
    }
    Ok(chunks)
}

/// Reassemble the byte buffer from a chunk sequence produced by [`pack`].
///
/// Chunks are masked to 14 bits; a trailing partial byte is discarded. The
/// first two recovered bytes give the original length. Fewer than two
/// recovered bytes yields an empty buffer rather than an error — a stream
/// not produced by `pack` has no checksum to fail against.
pub fn unpack(chunks: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(chunks.len() * CHUNK_BITS as usize / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &chunk in chunks {
        acc = (acc << CHUNK_BITS) | (chunk as u32 & CHUNK_MASK);
        bits += CHUNK_BITS;
        while bits >= 8 {
            bits -= 8;
            bytes.push(((acc >> bits) & 0xff) as u8);
            acc &= (1 << bits) - 1;
        }
    }

    if bytes.len() < 2 {
        return Vec::new();
    }
    let length = u16::from_be_bytes([bytes[0], bytes[1]]) as usize;
    let end = (2 + length).min(bytes.len());
    bytes[2..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let data = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(unpack(&pack(data).unwrap()), data);
    }

    #[test]
    fn round_trip_all_byte_values() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(unpack(&pack(&data).unwrap()), data);
    }

    #[test]
    fn round_trip_every_small_length() {
        for len in 0..64usize {
            let data: Vec<u8> = (0..len).map(|i| (i * 37) as u8).collect();
            assert_eq!(unpack(&pack(&data).unwrap()), data, "len {}", len);
        }
    }

    #[test]
    fn round_trip_max_length() {
        let data = vec![0xa5u8; MAX_PACKABLE_LENGTH];
        assert_eq!(unpack(&pack(&data).unwrap()), data);
    }

    #[test]
    fn empty_input_packs_length_prefix_only() {
        let chunks = pack(&[]).unwrap();
        // 2 length bytes = 16 bits = two 14-bit chunks.
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks, vec![0, 0]);
        assert!(unpack(&chunks).is_empty());
    }

    #[test]
    fn chunks_stay_in_range() {
        let data = vec![0xffu8; 100];
        for chunk in pack(&data).unwrap() {
            assert!(chunk <= 0x3fff);
        }
    }

    #[test]
    fn known_bit_layout() {
        // length=1, data=0xff: bitstream 00000000 00000001 11111111
        // groups: 00000000000000 | 0111111111 left-shifted 4 to fill
        let chunks = pack(&[0xff]).unwrap();
        assert_eq!(chunks, vec![0x0000, 0b01_1111_1111_0000]);
    }

    #[test]
    fn rejects_oversized_input() {
        let data = vec![0u8; MAX_PACKABLE_LENGTH + 1];
        let err = pack(&data).unwrap_err();
        assert!(matches!(err, CryptoError::PayloadTooLarge { .. }));
    }

    #[test]
    fn unpack_of_short_stream_is_empty() {
        assert!(unpack(&[]).is_empty());
        assert!(unpack(&[0x1234]).is_empty());
    }

    #[test]
    fn unpack_masks_out_of_range_chunks() {
        let chunks = pack(b"ok").unwrap();
        let noisy: Vec<u16> = chunks.iter().map(|&c| c | 0xc000).collect();
        assert_eq!(unpack(&noisy), b"ok");
    }

    #[test]
    fn corrupt_length_prefix_never_panics() {
        // Claims more bytes than the stream carries.
        let mut chunks = pack(b"x").unwrap();
        chunks[0] = 0x3fff;
        let _ = unpack(&chunks);
    }
}
