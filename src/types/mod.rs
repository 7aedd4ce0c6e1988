//! This module defines the core, strongly-typed data representations used
//! throughout the vidpipe pipeline.
//!
//! It includes the validated `Resolution`, the `FrameLayout` enum naming each
//! byte representation a frame passes through, and the `Frame` /
//! `FrameSequence` containers that carry pixel data between stages.

pub mod frame;
pub mod layout;

// Re-export the main type(s) for easier access.
pub use frame::{Frame, FrameSequence};
pub use layout::{FrameLayout, Resolution};
