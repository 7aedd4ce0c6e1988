//! This module collects the pure transform kernels of the transcoding pipeline.
//!
//! Kernels work on plain byte slices and primitive numeric types. They know
//! nothing about frame sequences or configuration; the `pipeline` module
//! composes them into stages.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Stage 1: Pixel Format Conversion
pub mod color;
pub mod planar;
pub mod subsample;

/// Stage 2: Temporal Prediction
pub mod delta;

/// Diagnostic: Run-Length Size Measurement
pub mod rle;

/// Final Stage: Entropy Coding
pub mod gzip;
pub mod zstd;
