// In: src/pipeline/orchestrator.rs

//! The Pipeline Driver: runs the fixed forward chain, then the inverse chain,
//! and reports the size of every representation on the way.
//!
//! The whole stream is held in memory and each stage consumes its input
//! sequence completely before the next one starts. Ownership of each
//! `FrameSequence` moves from stage to stage, so a representation is released
//! as soon as its successor exists.

use std::sync::Arc;

use crate::config::{EntropyCodecKind, TranscodeConfig};
use crate::error::VidpipeError;
use crate::kernels::{delta, rle};
use crate::pipeline::convert::{RgbToYuv420p, Yuv420pConverter, Yuv420pToRgb};
use crate::pipeline::entropy::EntropyCodec;
use crate::pipeline::stats::{Stage, StatsCollector, TranscodeReport};
use crate::pipeline::traits::FrameTransform;
use crate::types::{FrameLayout, FrameSequence, Resolution};

/// The compressed form of a stream. Resolution and frame count travel with the
/// blob here, but are not embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedStream {
    pub resolution: Resolution,
    pub frame_count: usize,
    pub codec: EntropyCodecKind,
    pub blob: Vec<u8>,
}

/// Everything a full forward-then-inverse run produces.
#[derive(Debug, Clone)]
pub struct TranscodeOutput {
    pub encoded: EncodedStream,
    pub reconstructed: FrameSequence,
    pub report: TranscodeReport,
}

/// Runs the transcoding pipeline for one validated configuration.
#[derive(Debug, Clone)]
pub struct Transcoder {
    config: Arc<TranscodeConfig>,
    resolution: Resolution,
    converter: Yuv420pConverter,
    codec: EntropyCodec,
}

impl Transcoder {
    /// Validates the configuration up front; an odd or zero dimension fails here.
    pub fn new(config: TranscodeConfig) -> Result<Self, VidpipeError> {
        config.validate()?;
        let resolution = config.resolution()?;
        Ok(Self {
            converter: Yuv420pConverter::new(resolution),
            codec: EntropyCodec::from_config(&config.entropy),
            resolution,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &TranscodeConfig {
        &self.config
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// An empty raw frame store sized for this resolution.
    pub fn new_raw_sequence(&self) -> FrameSequence {
        FrameSequence::new(FrameLayout::Rgb24, self.resolution.frame_len(FrameLayout::Rgb24))
    }

    //==============================================================================
    // Forward Chain
    //==============================================================================

    /// RGB24 frames -> YUV420p -> temporal delta -> entropy blob.
    pub fn encode(&self, raw: FrameSequence) -> Result<EncodedStream, VidpipeError> {
        let mut stats = StatsCollector::new(raw.total_bytes());
        let (encoded, _) = self.encode_with_stats(raw, &mut stats, false)?;
        Ok(encoded)
    }

    /// Runs the forward chain, recording stage sizes. With `keep_planar`, also
    /// returns a copy of the planar frames so `run` can check the inverse chain.
    fn encode_with_stats(
        &self,
        raw: FrameSequence,
        stats: &mut StatsCollector,
        keep_planar: bool,
    ) -> Result<(EncodedStream, Option<FrameSequence>), VidpipeError> {
        self.check_raw(&raw)?;
        let frame_count = raw.len();

        let planar = RgbToYuv420p(self.converter).apply_sequence(raw)?;
        stats.record(Stage::Yuv420p, planar.total_bytes());
        let planar_reference = keep_planar.then(|| planar.clone());

        let deltas = delta::encode_sequence(planar)?;
        stats.record(Stage::Delta, deltas.total_bytes());

        if self.config.collect_rle_stats {
            stats.record(Stage::Rle, rle::sequence_size(&deltas));
        }

        let blob = self.codec.encode(&deltas)?;
        stats.record(Stage::Entropy, blob.len());

        let encoded = EncodedStream {
            resolution: self.resolution,
            frame_count,
            codec: self.codec.kind(),
            blob,
        };
        Ok((encoded, planar_reference))
    }

    fn check_raw(&self, raw: &FrameSequence) -> Result<(), VidpipeError> {
        VidpipeError::check_len(
            FrameLayout::Rgb24,
            self.resolution.frame_len(FrameLayout::Rgb24),
            raw.frame_len(),
        )
    }

    //==============================================================================
    // Inverse Chain
    //==============================================================================

    /// Entropy blob -> temporal delta inverse -> YUV420p -> RGB24 frames.
    pub fn decode(&self, encoded: &EncodedStream) -> Result<FrameSequence, VidpipeError> {
        let planar = self.decode_to_planar(encoded)?;
        Yuv420pToRgb(self.converter).apply_sequence(planar)
    }

    /// Recovers the YUV420p frames exactly as they were before delta coding.
    pub fn decode_to_planar(&self, encoded: &EncodedStream) -> Result<FrameSequence, VidpipeError> {
        if encoded.resolution != self.resolution {
            return Err(VidpipeError::DimensionMismatch {
                layout: FrameLayout::Yuv420p,
                expected: self.resolution.frame_len(FrameLayout::Yuv420p),
                actual: encoded.resolution.frame_len(FrameLayout::Yuv420p),
            });
        }

        // Decode with the backend that produced the blob; the level is irrelevant here.
        let codec = EntropyCodec::new(encoded.codec, encoded.codec.default_level());
        let units = codec.decode(
            &encoded.blob,
            self.resolution.frame_len(FrameLayout::Delta),
        )?;
        if units.len() != encoded.frame_count {
            return Err(VidpipeError::FrameCountMismatch {
                expected: encoded.frame_count,
                actual: units.len(),
            });
        }

        delta::decode_sequence(units)
    }

    //==============================================================================
    // Full Run
    //==============================================================================

    /// Encodes, decodes and reports. The reconstructed stream matches the input
    /// up to chroma subsampling and rounding loss.
    pub fn run(&self, raw: FrameSequence) -> Result<TranscodeOutput, VidpipeError> {
        log::info!(
            "\n--- TRANSCODE {} frames at {} ({:?}) ---",
            raw.len(),
            self.resolution,
            self.codec.kind()
        );

        let mut stats = StatsCollector::new(raw.total_bytes());
        let (encoded, planar_reference) = self.encode_with_stats(raw, &mut stats, true)?;

        let decoded_planar = self.decode_to_planar(&encoded)?;
        let planar_roundtrip_exact = planar_reference.as_ref() == Some(&decoded_planar);
        drop(planar_reference);
        if !planar_roundtrip_exact {
            log::warn!("Decoded YUV420p frames differ from the encoded ones");
        }

        let reconstructed = Yuv420pToRgb(self.converter).apply_sequence(decoded_planar)?;
        stats.record(Stage::Reconstructed, reconstructed.total_bytes());

        let report = TranscodeReport {
            resolution: self.resolution,
            frame_count: encoded.frame_count,
            codec: encoded.codec,
            stages: stats.into_stages(),
            planar_roundtrip_exact,
        };

        Ok(TranscodeOutput {
            encoded,
            reconstructed,
            report,
        })
    }
}
