//! This module contains the temporal (inter-frame) delta kernels.
//!
//! Unlike an intra-buffer delta, the prediction here runs *across* frames: the
//! residual for byte `j` of frame `i` is `frame_i[j] - frame_{i-1}[j]` with
//! wrapping arithmetic. The first frame of a sequence is the anchor and is
//! stored verbatim.
//!
//! Encoding predicts from the previous *source* frame; decoding predicts from
//! the previous *reconstructed* frame. The two directions therefore keep their
//! own state in `DeltaEncoder` and `DeltaDecoder`, and neither is parallel
//! across frames.

use num_traits::{PrimInt, WrappingAdd, WrappingSub};

use crate::error::VidpipeError;
use crate::types::{Frame, FrameLayout, FrameSequence};

//==================================================================================
// 1. Generic Core Logic (The "Engine")
//==================================================================================

/// Writes `current[i] - previous[i]` (wrapping) into `out`.
fn encode_slice_into<T>(current: &[T], previous: &[T], out: &mut Vec<T>)
where
    T: PrimInt + WrappingSub,
{
    out.clear();
    out.extend(
        current
            .iter()
            .zip(previous)
            .map(|(cur, prev)| cur.wrapping_sub(prev)),
    );
}

/// Rebuilds a frame in place: `residual[i] += previous[i]` (wrapping).
fn decode_slice_inplace<T>(residual: &mut [T], previous: &[T])
where
    T: PrimInt + WrappingAdd,
{
    for (value, prev) in residual.iter_mut().zip(previous) {
        *value = value.wrapping_add(prev);
    }
}

//==================================================================================
// 2. Stateful Frame Coders
//==================================================================================

/// Forward temporal predictor. Feed frames in temporal order.
#[derive(Debug, Default)]
pub struct DeltaEncoder {
    previous_source_frame: Option<Frame>,
}

impl DeltaEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the anchor verbatim for the first frame, otherwise the residual
    /// against the previous source frame.
    pub fn push(&mut self, frame: Frame) -> Result<Frame, VidpipeError> {
        let coded = match &self.previous_source_frame {
            None => frame.clone(),
            Some(previous) => {
                VidpipeError::check_len(FrameLayout::Delta, previous.len(), frame.len())?;
                let mut residual = Vec::with_capacity(frame.len());
                encode_slice_into(frame.as_bytes(), previous.as_bytes(), &mut residual);
                Frame::new(residual)
            }
        };
        self.previous_source_frame = Some(frame);
        Ok(coded)
    }
}

/// Inverse temporal predictor. Feed coded frames in the order they were produced.
#[derive(Debug, Default)]
pub struct DeltaDecoder {
    previous_reconstructed_frame: Option<Frame>,
}

impl DeltaDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the anchor verbatim for the first frame, otherwise the residual
    /// summed onto the previous reconstructed frame.
    pub fn push(&mut self, coded: Frame) -> Result<Frame, VidpipeError> {
        let reconstructed = match &self.previous_reconstructed_frame {
            None => coded,
            Some(previous) => {
                VidpipeError::check_len(FrameLayout::Delta, previous.len(), coded.len())?;
                let mut data = coded.into_bytes();
                decode_slice_inplace(&mut data, previous.as_bytes());
                Frame::new(data)
            }
        };
        self.previous_reconstructed_frame = Some(reconstructed.clone());
        Ok(reconstructed)
    }
}

//==================================================================================
// 3. Public API (Whole-Sequence Helpers)
//==================================================================================

/// Delta-codes a whole sequence. The output has the same frame count and length.
pub fn encode_sequence(frames: FrameSequence) -> Result<FrameSequence, VidpipeError> {
    let frame_len = frames.frame_len();
    let mut encoder = DeltaEncoder::new();
    let mut out = FrameSequence::with_capacity(FrameLayout::Delta, frame_len, frames.len());
    for frame in frames.into_frames() {
        out.push(encoder.push(frame)?)?;
    }
    Ok(out)
}

/// Reverses `encode_sequence`, strictly in order.
pub fn decode_sequence(coded: FrameSequence) -> Result<FrameSequence, VidpipeError> {
    let frame_len = coded.frame_len();
    let mut decoder = DeltaDecoder::new();
    let mut out = FrameSequence::with_capacity(FrameLayout::Yuv420p, frame_len, coded.len());
    for frame in coded.into_frames() {
        out.push(decoder.push(frame)?)?;
    }
    Ok(out)
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
