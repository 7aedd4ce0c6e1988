//! Per-stage size accounting for a transcode run.

use serde::Serialize;

use crate::config::EntropyCodecKind;
use crate::error::VidpipeError;
use crate::types::Resolution;

/// The representations whose total size is reported.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Raw,
    Yuv420p,
    Delta,
    Rle,
    Entropy,
    Reconstructed,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Yuv420p => "yuv420p",
            Self::Delta => "delta",
            Self::Rle => "rle",
            Self::Entropy => "entropy",
            Self::Reconstructed => "reconstructed",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StageStats {
    pub stage: Stage,
    pub bytes: usize,
    /// `bytes / raw bytes`; 0.0 when the raw stream is empty.
    pub ratio_to_raw: f64,
}

/// The public-facing summary of one `Transcoder::run`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TranscodeReport {
    pub resolution: Resolution,
    pub frame_count: usize,
    pub codec: EntropyCodecKind,
    pub stages: Vec<StageStats>,
    /// True when the decoded YUV420p frames equal the encoded ones byte for byte.
    pub planar_roundtrip_exact: bool,
}

impl TranscodeReport {
    pub fn stage(&self, stage: Stage) -> Option<&StageStats> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    pub fn bytes(&self, stage: Stage) -> Option<usize> {
        self.stage(stage).map(|s| s.bytes)
    }

    pub fn to_json(&self) -> Result<String, VidpipeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Accumulates stage sizes in the order they are recorded.
#[derive(Debug, Default)]
pub(crate) struct StatsCollector {
    raw_bytes: usize,
    stages: Vec<StageStats>,
}

impl StatsCollector {
    pub(crate) fn new(raw_bytes: usize) -> Self {
        let mut collector = Self {
            raw_bytes,
            stages: Vec::new(),
        };
        collector.record(Stage::Raw, raw_bytes);
        collector
    }

    pub(crate) fn record(&mut self, stage: Stage, bytes: usize) {
        let ratio_to_raw = if self.raw_bytes == 0 {
            0.0
        } else {
            bytes as f64 / self.raw_bytes as f64
        };

        log::info!(
            "  - Stage: {:<14} | Size: {:>12} bytes | Ratio: {:.4}",
            stage.name(),
            bytes,
            ratio_to_raw
        );
        log_metric!(
            "event" = "stage_complete",
            "stage" = stage.name(),
            "bytes" = bytes,
            "ratio" = format!("{:.4}", ratio_to_raw)
        );

        self.stages.push(StageStats {
            stage,
            bytes,
            ratio_to_raw,
        });
    }

    pub(crate) fn into_stages(self) -> Vec<StageStats> {
        self.stages
    }
}
