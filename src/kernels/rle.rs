//! This module contains the diagnostic Run-Length Encoding kernel.
//!
//! It is a size-measurement branch only: its output is never decoded and
//! never feeds the reconstructed stream. Runs are capped at 255 so each run
//! fits a one-byte `(count, value)` pair.

use crate::types::FrameSequence;

/// The longest run a single pair can describe.
pub const MAX_RUN: u8 = u8::MAX;

/// One `(count, value)` pair, `count` in `1..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleRun {
    pub count: u8,
    pub value: u8,
}

/// The run list for one delta frame.
pub type RleUnit = Vec<RleRun>;

//==================================================================================
// 1. Public API
//==================================================================================

/// Scans a frame byte by byte and emits its runs.
pub fn encode_frame(bytes: &[u8]) -> RleUnit {
    let mut runs = Vec::new();
    let Some((&first, rest)) = bytes.split_first() else {
        return runs;
    };

    let mut current = RleRun {
        count: 1,
        value: first,
    };
    for &byte in rest {
        if byte == current.value && current.count < MAX_RUN {
            current.count += 1;
        } else {
            runs.push(current);
            current = RleRun {
                count: 1,
                value: byte,
            };
        }
    }
    runs.push(current);

    runs
}

/// Serialises a unit as `count, value, count, value, ...`.
pub fn unit_to_bytes(unit: &[RleRun]) -> Vec<u8> {
    unit.iter().flat_map(|run| [run.count, run.value]).collect()
}

/// Byte size of a serialised unit.
pub fn unit_size(unit: &[RleRun]) -> usize {
    unit.len() * 2
}

/// Total diagnostic size of a delta-coded sequence: the anchor at its raw
/// length plus the run-length size of every residual frame.
pub fn sequence_size(delta_frames: &FrameSequence) -> usize {
    let mut frames = delta_frames.iter();
    let anchor = frames.next().map_or(0, |f| f.len());
    anchor
        + frames
            .map(|f| unit_size(&encode_frame(f.as_bytes())))
            .sum::<usize>()
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
