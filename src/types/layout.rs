//! This module defines the frame geometry shared by every stage: the validated
//! `Resolution` and the `FrameLayout` of each byte representation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::VidpipeError;

/// The byte representation a frame is currently in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FrameLayout {
    /// Interleaved R,G,B per pixel: `w*h*3` bytes.
    Rgb24,
    /// Y plane, then quarter-size U and V planes: `w*h*3/2` bytes.
    Yuv420p,
    /// Temporal residual of a `Yuv420p` frame, same length.
    Delta,
}

/// Provides the canonical string representation for a `FrameLayout`.
impl fmt::Display for FrameLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // These names match the ffmpeg pixel format names where one exists.
        let name = match self {
            Self::Rgb24 => "rgb24",
            Self::Yuv420p => "yuv420p",
            Self::Delta => "delta",
        };
        f.write_str(name)
    }
}

/// A frame resolution that has passed validation: both dimensions positive and even.
/// Only constructed through `Resolution::new`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: usize,
    height: usize,
}

impl Resolution {
    /// Validates and creates a resolution. Fails fast on zero or odd dimensions,
    /// since the chroma subsampler needs complete 2x2 blocks.
    pub fn new(width: usize, height: usize) -> Result<Self, VidpipeError> {
        if width == 0 || height == 0 {
            return Err(VidpipeError::EmptyDimension { width, height });
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(VidpipeError::OddDimension { width, height });
        }
        // Every frame length below is bounded by the RGB24 one.
        if width.checked_mul(height).and_then(|p| p.checked_mul(3)).is_none() {
            return Err(VidpipeError::InvalidConfig(format!(
                "resolution {}x{} overflows the addressable frame size",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Size of one downsampled chroma plane.
    pub fn chroma_plane_len(&self) -> usize {
        (self.width / 2) * (self.height / 2)
    }

    /// The exact byte length of one frame in the given layout.
    pub fn frame_len(&self, layout: FrameLayout) -> usize {
        match layout {
            FrameLayout::Rgb24 => self.pixel_count() * 3,
            FrameLayout::Yuv420p | FrameLayout::Delta => {
                self.pixel_count() + 2 * self.chroma_plane_len()
            }
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
