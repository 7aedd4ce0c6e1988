// In: src/config.rs

//! The single source of truth for all vidpipe transcoding configuration.
//!
//! `TranscodeConfig` is created once at the application boundary (for example
//! from a JSON document handed over by a command-line front end) and then
//! passed down read-only. The core consumes two integers, `width` and
//! `height`, plus the entropy coder settings.

use serde::{Deserialize, Serialize};

use crate::error::VidpipeError;
use crate::kernels;
use crate::types::Resolution;

//==================================================================================
// I. Entropy Coder Settings
//==================================================================================

/// The generic lossless compressor applied to each coded unit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntropyCodecKind {
    /// **Default:** Zstandard. Concatenated frames decode transparently.
    #[default]
    Zstd,

    /// DEFLATE in gzip members. Concatenated members decode transparently.
    Gzip,
}

impl EntropyCodecKind {
    /// The inclusive range of levels the backend accepts.
    pub fn level_range(&self) -> std::ops::RangeInclusive<i32> {
        match self {
            Self::Zstd => kernels::zstd::MIN_LEVEL..=kernels::zstd::MAX_LEVEL,
            Self::Gzip => kernels::gzip::MIN_LEVEL..=kernels::gzip::MAX_LEVEL,
        }
    }

    pub fn default_level(&self) -> i32 {
        match self {
            Self::Zstd => 3,
            Self::Gzip => 6,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct EntropyConfig {
    #[serde(default)]
    pub codec: EntropyCodecKind,

    /// Compression level. Falls back to the codec's default when omitted.
    #[serde(default)]
    pub level: Option<i32>,
}

impl EntropyConfig {
    pub fn new(codec: EntropyCodecKind) -> Self {
        Self { codec, level: None }
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    /// The level that will actually be used.
    pub fn effective_level(&self) -> i32 {
        self.level.unwrap_or_else(|| self.codec.default_level())
    }
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self::new(EntropyCodecKind::default())
    }
}

//==================================================================================
// II. The Unified TranscodeConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TranscodeConfig {
    /// Frame width in pixels. Must be positive and even.
    pub width: usize,

    /// Frame height in pixels. Must be positive and even.
    pub height: usize,

    #[serde(default)]
    pub entropy: EntropyConfig,

    /// If true, the diagnostic run-length branch runs and its size is reported.
    #[serde(default = "default_true")]
    pub collect_rle_stats: bool,
}

impl TranscodeConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            entropy: EntropyConfig::default(),
            collect_rle_stats: true,
        }
    }

    pub fn with_entropy(mut self, entropy: EntropyConfig) -> Self {
        self.entropy = entropy;
        self
    }

    pub fn with_rle_stats(mut self, enabled: bool) -> Self {
        self.collect_rle_stats = enabled;
        self
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, VidpipeError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Fails fast on anything the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), VidpipeError> {
        Resolution::new(self.width, self.height)?;

        let level = self.entropy.effective_level();
        let range = self.entropy.codec.level_range();
        if !range.contains(&level) {
            return Err(VidpipeError::InvalidConfig(format!(
                "{:?} level {} is outside {}..={}",
                self.entropy.codec,
                level,
                range.start(),
                range.end()
            )));
        }
        Ok(())
    }

    pub fn resolution(&self) -> Result<Resolution, VidpipeError> {
        Resolution::new(self.width, self.height)
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}
