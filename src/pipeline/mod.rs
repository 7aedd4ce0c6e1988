// In: src/pipeline/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Transcoding Pipeline
// ====================================================================================
//
// The pipeline composes the pure `kernels` into whole-sequence stages and runs
// them in one fixed order. Every stage consumes its input `FrameSequence` by
// value and produces a new one, so a finished representation can be dropped.
//
// Data Flow (Encode):
//
//   [RGB24 frames] -> convert (color + subsample + pack) -> [YUV420p frames]
//                  -> kernels::delta::encode_sequence     -> [anchor + residuals]
//                  -> entropy::EntropyCodec::encode       -> [blob]
//
// Data Flow (Decode):
//
//   [blob] -> entropy::EntropyCodec::decode  -> [anchor + residuals]
//          -> kernels::delta::decode_sequence -> [YUV420p frames]
//          -> convert (unpack + upsample + color) -> [RGB24 frames]
//
// The diagnostic run-length branch hangs off the residuals and feeds only the
// statistics report.
//
// ====================================================================================

pub mod convert;
pub mod entropy;
pub mod orchestrator;
pub mod stats;
pub mod traits;

pub use convert::{RgbToYuv420p, Yuv420pConverter, Yuv420pToRgb};
pub use entropy::EntropyCodec;
pub use orchestrator::{EncodedStream, TranscodeOutput, Transcoder};
pub use stats::{Stage, StageStats, TranscodeReport};
pub use traits::FrameTransform;
