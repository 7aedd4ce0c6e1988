//! DEFLATE (gzip member) kernels via `flate2`.
//!
//! Each unit becomes one complete gzip member. Members concatenate into a
//! valid multi-member gzip stream, which `MultiGzDecoder` reads back as one
//! continuous byte sequence.

use std::io::{Read, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::VidpipeError;

pub const MIN_LEVEL: i32 = 0;
pub const MAX_LEVEL: i32 = 9;

/// Compresses one unit as a standalone gzip member and appends it to `output_buf`.
pub fn compress_unit_into(
    input_bytes: &[u8],
    output_buf: &mut Vec<u8>,
    level: i32,
) -> Result<(), VidpipeError> {
    let level = Compression::new(level.clamp(MIN_LEVEL, MAX_LEVEL) as u32);
    let mut encoder = GzEncoder::new(output_buf, level);
    encoder
        .write_all(input_bytes)
        .map_err(|e| VidpipeError::CompressionFailure(format!("gzip: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| VidpipeError::CompressionFailure(format!("gzip: {}", e)))?;
    Ok(())
}

/// Decompresses a blob of one or more concatenated gzip members into one flat buffer.
pub fn decompress_all(input_bytes: &[u8]) -> Result<Vec<u8>, VidpipeError> {
    if input_bytes.is_empty() {
        return Ok(Vec::new());
    }

    let mut decoder = MultiGzDecoder::new(input_bytes);
    let mut output_buf = Vec::new();
    decoder
        .read_to_end(&mut output_buf)
        .map_err(|e| VidpipeError::DecompressionFailure(format!("gzip: {}", e)))?;
    Ok(output_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gzip_roundtrip() {
        let original = vec![42u8; 10_000];
        let mut blob = Vec::new();
        compress_unit_into(&original, &mut blob, 6).unwrap();
        assert!(blob.len() < 100);
        assert_eq!(decompress_all(&blob).unwrap(), original);
    }

    #[test]
    fn test_concatenated_members_decode_back_to_back() {
        let mut blob = Vec::new();
        compress_unit_into(b"first unit ", &mut blob, 6).unwrap();
        compress_unit_into(b"second unit", &mut blob, 6).unwrap();
        assert_eq!(decompress_all(&blob).unwrap(), b"first unit second unit".to_vec());
    }

    #[test]
    fn test_corrupted_header_fails() {
        let result = decompress_all(&[0x1f, 0x8c, 0, 0, 0, 0]);
        assert!(matches!(result, Err(VidpipeError::DecompressionFailure(_))));
    }
}
