//! Defines the contract shared by the stateless per-frame stages.

use crate::error::VidpipeError;
use crate::types::{Frame, FrameLayout, FrameSequence};

/// **CONTRACT:** A stateless transform from one frame layout to another.
///
/// Implementations must validate the input length themselves and must not
/// depend on any frame other than the one they are given. Stateful stages
/// (the temporal delta coders) deliberately sit outside this trait.
pub trait FrameTransform {
    fn input_layout(&self) -> FrameLayout;
    fn output_layout(&self) -> FrameLayout;

    /// Byte length of every frame this transform produces.
    fn output_frame_len(&self) -> usize;

    fn apply(&self, frame: &Frame) -> Result<Frame, VidpipeError>;

    /// Applies the transform to every frame, consuming the input sequence.
    fn apply_sequence(&self, input: FrameSequence) -> Result<FrameSequence, VidpipeError> {
        let mut out = FrameSequence::with_capacity(
            self.output_layout(),
            self.output_frame_len(),
            input.len(),
        );
        for frame in input.into_frames() {
            out.push(self.apply(&frame)?)?;
        }
        Ok(out)
    }
}
