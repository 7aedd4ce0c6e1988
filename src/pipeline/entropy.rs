//! The Entropy Codec: wraps each coded unit in its own compressed stream and
//! concatenates the results into one blob, with no boundary markers.
//!
//! Decoding runs one continuous decompression over the whole blob and then
//! re-splits the flat output into units of the known size. A truncated or
//! corrupted blob is fatal for the whole stream; there is no partial recovery.

use crate::config::{EntropyCodecKind, EntropyConfig};
use crate::error::VidpipeError;
use crate::kernels;
use crate::types::{Frame, FrameLayout, FrameSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntropyCodec {
    kind: EntropyCodecKind,
    level: i32,
}

impl EntropyCodec {
    pub fn new(kind: EntropyCodecKind, level: i32) -> Self {
        Self { kind, level }
    }

    pub fn from_config(config: &EntropyConfig) -> Self {
        Self::new(config.codec, config.effective_level())
    }

    pub fn kind(&self) -> EntropyCodecKind {
        self.kind
    }

    /// Compresses one unit in isolation and appends it to `blob`.
    fn compress_unit_into(&self, unit: &[u8], blob: &mut Vec<u8>) -> Result<(), VidpipeError> {
        match self.kind {
            EntropyCodecKind::Zstd => kernels::zstd::compress_unit_into(unit, blob, self.level),
            EntropyCodecKind::Gzip => kernels::gzip::compress_unit_into(unit, blob, self.level),
        }
    }

    fn decompress_all(&self, blob: &[u8]) -> Result<Vec<u8>, VidpipeError> {
        match self.kind {
            EntropyCodecKind::Zstd => kernels::zstd::decompress_all(blob),
            EntropyCodecKind::Gzip => kernels::gzip::decompress_all(blob),
        }
    }

    /// Compresses every unit independently and concatenates the outputs in order.
    pub fn encode(&self, units: &FrameSequence) -> Result<Vec<u8>, VidpipeError> {
        let mut blob = Vec::new();
        for unit in units {
            self.compress_unit_into(unit.as_bytes(), &mut blob)?;
        }
        Ok(blob)
    }

    /// Decompresses the whole blob and splits it into `unit_len`-byte units.
    pub fn decode(&self, blob: &[u8], unit_len: usize) -> Result<FrameSequence, VidpipeError> {
        if unit_len == 0 {
            return Err(VidpipeError::InvalidConfig(
                "entropy unit length must be positive".to_string(),
            ));
        }
        let flat = self.decompress_all(blob)?;

        let remainder = flat.len() % unit_len;
        if remainder != 0 {
            // The trailing unit is short: the blob does not match this resolution.
            return Err(VidpipeError::DimensionMismatch {
                layout: FrameLayout::Delta,
                expected: unit_len,
                actual: remainder,
            });
        }

        let mut units =
            FrameSequence::with_capacity(FrameLayout::Delta, unit_len, flat.len() / unit_len);
        for chunk in flat.chunks_exact(unit_len) {
            units.push(Frame::new(chunk.to_vec()))?;
        }
        Ok(units)
    }
}

impl Default for EntropyCodec {
    fn default() -> Self {
        Self::from_config(&EntropyConfig::default())
    }
}
