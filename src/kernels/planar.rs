//! This module contains the YUV420p planar packing kernels.
//!
//! A packed frame is the Y plane (`w*h` bytes) followed by the downsampled U
//! and V planes (`w*h/4` bytes each), with no header or padding.

use crate::error::VidpipeError;
use crate::types::{FrameLayout, Resolution};

/// Borrowed views of the three planes inside one packed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanarView<'a> {
    pub y: &'a [u8],
    pub u: &'a [u8],
    pub v: &'a [u8],
}

/// Concatenates the Y plane and the two downsampled chroma planes.
pub fn pack(
    y: &[u8],
    u: &[u8],
    v: &[u8],
    resolution: Resolution,
) -> Result<Vec<u8>, VidpipeError> {
    VidpipeError::check_len(FrameLayout::Yuv420p, resolution.pixel_count(), y.len())?;
    VidpipeError::check_len(FrameLayout::Yuv420p, resolution.chroma_plane_len(), u.len())?;
    VidpipeError::check_len(FrameLayout::Yuv420p, resolution.chroma_plane_len(), v.len())?;

    let mut out = Vec::with_capacity(resolution.frame_len(FrameLayout::Yuv420p));
    out.extend_from_slice(y);
    out.extend_from_slice(u);
    out.extend_from_slice(v);
    Ok(out)
}

/// Slices a packed frame into its planes. Any length other than `w*h*3/2` is malformed.
pub fn unpack(bytes: &[u8], resolution: Resolution) -> Result<PlanarView<'_>, VidpipeError> {
    VidpipeError::check_len(
        FrameLayout::Yuv420p,
        resolution.frame_len(FrameLayout::Yuv420p),
        bytes.len(),
    )?;

    let luma_end = resolution.pixel_count();
    let u_end = luma_end + resolution.chroma_plane_len();

    Ok(PlanarView {
        y: &bytes[..luma_end],
        u: &bytes[luma_end..u_end],
        v: &bytes[u_end..],
    })
}
