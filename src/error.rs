// In: src/error.rs

//! This module defines the single, unified error type for the entire vidpipe library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every variant is fatal for the stream being processed. The pipeline has no
//! retry policy: a misaligned frame or a damaged entropy blob cannot be
//! re-synchronised, so errors propagate straight to the caller.

use thiserror::Error;

use crate::types::FrameLayout;

#[derive(Error, Debug)]
pub enum VidpipeError {
    // =========================================================================
    // === Structural Errors (Specific to the transcoding pipeline)
    // =========================================================================
    /// A frame's byte length does not match the size implied by the declared
    /// resolution for its current representation.
    #[error("Frame size mismatch for {layout} layout: expected {expected} bytes, got {actual}")]
    DimensionMismatch {
        layout: FrameLayout,
        expected: usize,
        actual: usize,
    },

    /// Chroma block averaging works on 2x2 blocks, so both dimensions must be even.
    #[error("Resolution {width}x{height} is not supported: width and height must be even")]
    OddDimension { width: usize, height: usize },

    #[error("Resolution {width}x{height} is not supported: width and height must be positive")]
    EmptyDimension { width: usize, height: usize },

    /// The decoded stream holds a different number of units than was encoded.
    #[error("Frame count mismatch: expected {expected} frames, decoded {actual}")]
    FrameCountMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // === Entropy Codec Errors
    // =========================================================================
    #[error("Entropy compression failed: {0}")]
    CompressionFailure(String),

    /// The entropy-coded blob is truncated or corrupted. No partial recovery.
    #[error("Entropy decompression failed: {0}")]
    DecompressionFailure(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, during config loading or report export.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl VidpipeError {
    /// Shorthand for the length check every stage performs on its input.
    pub(crate) fn check_len(
        layout: FrameLayout,
        expected: usize,
        actual: usize,
    ) -> Result<(), VidpipeError> {
        if expected == actual {
            Ok(())
        } else {
            Err(VidpipeError::DimensionMismatch {
                layout,
                expected,
                actual,
            })
        }
    }
}
