//! Frame buffers and the ordered Frame Store that carries them between stages.
//!
//! A `FrameSequence` owns its frames exclusively. Stages take it by value and
//! hand a new sequence to the next stage, so earlier representations can be
//! dropped as soon as they have been consumed.

use crate::error::VidpipeError;
use crate::types::FrameLayout;

/// One fixed-length frame buffer. Immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
}

impl Frame {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Frame {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// The Frame Store: frames in temporal order, all of one length, with a
/// running byte total for size reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    layout: FrameLayout,
    frame_len: usize,
    frames: Vec<Frame>,
    total_bytes: usize,
}

impl FrameSequence {
    /// Creates an empty store that accepts frames of exactly `frame_len` bytes.
    pub fn new(layout: FrameLayout, frame_len: usize) -> Self {
        Self {
            layout,
            frame_len,
            frames: Vec::new(),
            total_bytes: 0,
        }
    }

    pub fn with_capacity(layout: FrameLayout, frame_len: usize, capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            ..Self::new(layout, frame_len)
        }
    }

    /// Appends a frame. A frame of any other length is rejected, since it would
    /// misalign every later delta and entropy unit.
    pub fn push(&mut self, frame: Frame) -> Result<(), VidpipeError> {
        VidpipeError::check_len(self.layout, self.frame_len, frame.len())?;
        self.total_bytes += frame.len();
        self.frames.push(frame);
        Ok(())
    }

    /// Chunks a flat byte buffer into frames of `frame_len` bytes.
    /// A trailing partial chunk is dropped.
    pub fn from_concatenated(bytes: &[u8], layout: FrameLayout, frame_len: usize) -> Self {
        let mut sequence = Self::with_capacity(layout, frame_len, bytes.len() / frame_len.max(1));
        if frame_len == 0 {
            return sequence;
        }
        for chunk in bytes.chunks_exact(frame_len) {
            sequence.total_bytes += chunk.len();
            sequence.frames.push(Frame::new(chunk.to_vec()));
        }
        sequence
    }

    /// The headerless concatenation of every frame, in order.
    pub fn to_concatenated(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_bytes);
        for frame in &self.frames {
            out.extend_from_slice(frame.as_bytes());
        }
        out
    }

    pub fn layout(&self) -> FrameLayout {
        self.layout
    }

    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
