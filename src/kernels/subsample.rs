//! This module contains the 4:2:0 chroma resampling kernels.
//!
//! `downsample` averages each 2x2 block of a full-resolution chroma plane into
//! one cell (integer mean, truncated). `upsample` is nearest-neighbour: each
//! cell is replicated back over the four positions it covers. The pair is
//! lossy by construction and the two are not inverses of each other.
//!
//! Both kernels assume even `width` and `height`; `Resolution` guarantees this
//! before any frame reaches them.

use crate::error::VidpipeError;
use crate::types::FrameLayout;

/// Downsamples a full-resolution `width * height` plane to `(width/2) * (height/2)`.
pub fn downsample(plane: &[u8], width: usize, height: usize) -> Result<Vec<u8>, VidpipeError> {
    VidpipeError::check_len(FrameLayout::Yuv420p, width * height, plane.len())?;

    let half_width = width / 2;
    let half_height = height / 2;
    let mut out = Vec::with_capacity(half_width * half_height);

    for row in (0..height).step_by(2) {
        let top = &plane[row * width..(row + 1) * width];
        let bottom = &plane[(row + 1) * width..(row + 2) * width];
        for col in (0..width).step_by(2) {
            let sum = top[col] as u16
                + top[col + 1] as u16
                + bottom[col] as u16
                + bottom[col + 1] as u16;
            out.push((sum / 4) as u8);
        }
    }

    Ok(out)
}

/// Upsamples a `(width/2) * (height/2)` plane back to `width * height` by replication.
pub fn upsample(plane: &[u8], width: usize, height: usize) -> Result<Vec<u8>, VidpipeError> {
    let half_width = width / 2;
    VidpipeError::check_len(
        FrameLayout::Yuv420p,
        half_width * (height / 2),
        plane.len(),
    )?;

    let mut out = Vec::with_capacity(width * height);
    for row in 0..height {
        let source_row = &plane[(row / 2) * half_width..(row / 2 + 1) * half_width];
        for col in 0..width {
            out.push(source_row[col / 2]);
        }
    }

    Ok(out)
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_average_truncates() {
        // 10, 11, 12, 13 averages to 11.5, stored as 11.
        let plane = vec![10, 11, 12, 13];
        assert_eq!(downsample(&plane, 2, 2).unwrap(), vec![11]);
    }

    #[test]
    fn test_upsample_of_downsample_replicates_the_average() {
        let plane = vec![10, 11, 12, 13];
        let down = downsample(&plane, 2, 2).unwrap();
        let up = upsample(&down, 2, 2).unwrap();
        assert_eq!(up, vec![11, 11, 11, 11]);
        assert_ne!(up, plane);
    }

    #[test]
    fn test_downsample_geometry_4x4() {
        #[rustfmt::skip]
        let plane = vec![
            0,   4,   100, 100,
            8,   4,   100, 104,
            200, 200, 1,   1,
            200, 201, 1,   2,
        ];
        let down = downsample(&plane, 4, 4).unwrap();
        assert_eq!(down, vec![4, 101, 200, 1]);

        let up = upsample(&down, 4, 4).unwrap();
        #[rustfmt::skip]
        let expected = vec![
            4,   4,   101, 101,
            4,   4,   101, 101,
            200, 200, 1,   1,
            200, 200, 1,   1,
        ];
        assert_eq!(up, expected);
    }

    #[test]
    fn test_saturated_block_does_not_overflow() {
        let plane = vec![255; 4];
        assert_eq!(downsample(&plane, 2, 2).unwrap(), vec![255]);
    }

    #[test]
    fn test_plane_length_is_checked() {
        assert!(matches!(
            downsample(&[1, 2, 3], 2, 2),
            Err(VidpipeError::DimensionMismatch { expected: 4, actual: 3, .. })
        ));
        assert!(upsample(&[1, 2], 2, 2).is_err());
    }
}
