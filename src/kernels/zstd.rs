//! This module contains the pure, stateless kernels for performing Zstandard
//! compression and decompression of pipeline units.
//!
//! Each unit is written as one complete, self-delimiting Zstd frame with no
//! length prefix, so units compressed in isolation can be concatenated and
//! decoded back-to-back by a single streaming decoder.
//! This module is a safe, panic-free wrapper around the `zstd` crate.

use std::io::Write;
use zstd::stream::{Decoder, Encoder};

use crate::error::VidpipeError;

pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 22;

//==================================================================================
// 1. Public API
//==================================================================================

/// Compresses one unit as a standalone Zstd frame and appends it to `output_buf`.
pub fn compress_unit_into(
    input_bytes: &[u8],
    output_buf: &mut Vec<u8>,
    level: i32,
) -> Result<(), VidpipeError> {
    // The streaming Encoder writes directly to the output buffer.
    let mut encoder = Encoder::new(output_buf, level)
        .map_err(|e| VidpipeError::CompressionFailure(format!("zstd: {}", e)))?;
    encoder
        .write_all(input_bytes)
        .map_err(|e| VidpipeError::CompressionFailure(format!("zstd: {}", e)))?;

    // `finish` is essential to finalize the Zstd frame.
    encoder
        .finish()
        .map_err(|e| VidpipeError::CompressionFailure(format!("zstd: {}", e)))?;
    Ok(())
}

/// Decompresses a blob of one or more concatenated Zstd frames into one flat buffer.
pub fn decompress_all(input_bytes: &[u8]) -> Result<Vec<u8>, VidpipeError> {
    if input_bytes.is_empty() {
        return Ok(Vec::new());
    }

    let mut decoder = Decoder::new(input_bytes)
        .map_err(|e| VidpipeError::DecompressionFailure(format!("zstd: {}", e)))?;

    // The decoder moves on to the next frame by itself; `io::copy` drains all of them.
    let mut output_buf = Vec::new();
    std::io::copy(&mut decoder, &mut output_buf)
        .map_err(|e| VidpipeError::DecompressionFailure(format!("zstd: {}", e)))?;
    Ok(output_buf)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
