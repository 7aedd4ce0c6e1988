//! RGB24 <-> YUV420p frame conversion, composed from the color, subsample and
//! planar kernels.

use crate::error::VidpipeError;
use crate::kernels::color::{self, Rgb, Yuv};
use crate::kernels::{planar, subsample};
use crate::pipeline::traits::FrameTransform;
use crate::types::{Frame, FrameLayout, Resolution};

/// Converts whole frames between interleaved RGB24 and planar YUV420p.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yuv420pConverter {
    resolution: Resolution,
}

impl Yuv420pConverter {
    pub fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Color-converts every pixel, downsamples both chroma planes and packs the result.
    pub fn rgb_to_yuv420p(&self, frame: &Frame) -> Result<Frame, VidpipeError> {
        let res = self.resolution;
        VidpipeError::check_len(
            FrameLayout::Rgb24,
            res.frame_len(FrameLayout::Rgb24),
            frame.len(),
        )?;

        let pixel_count = res.pixel_count();
        let mut y_plane = Vec::with_capacity(pixel_count);
        let mut u_plane = Vec::with_capacity(pixel_count);
        let mut v_plane = Vec::with_capacity(pixel_count);

        for px in frame.as_bytes().chunks_exact(3) {
            let yuv = color::rgb_to_yuv(Rgb::new(px[0], px[1], px[2]));
            y_plane.push(yuv.y);
            u_plane.push(yuv.u);
            v_plane.push(yuv.v);
        }

        let u_small = subsample::downsample(&u_plane, res.width(), res.height())?;
        let v_small = subsample::downsample(&v_plane, res.width(), res.height())?;

        Ok(Frame::new(planar::pack(&y_plane, &u_small, &v_small, res)?))
    }

    /// Unpacks the planes, upsamples chroma by replication and converts back to RGB.
    pub fn yuv420p_to_rgb(&self, frame: &Frame) -> Result<Frame, VidpipeError> {
        let res = self.resolution;
        let view = planar::unpack(frame.as_bytes(), res)?;

        let u_plane = subsample::upsample(view.u, res.width(), res.height())?;
        let v_plane = subsample::upsample(view.v, res.width(), res.height())?;

        let mut out = Vec::with_capacity(res.frame_len(FrameLayout::Rgb24));
        for ((&y, &u), &v) in view.y.iter().zip(&u_plane).zip(&v_plane) {
            let rgb = color::yuv_to_rgb(Yuv::new(y, u, v));
            out.extend_from_slice(&[rgb.r, rgb.g, rgb.b]);
        }

        Ok(Frame::new(out))
    }
}

/// The forward conversion as a pipeline stage.
#[derive(Debug, Clone, Copy)]
pub struct RgbToYuv420p(pub Yuv420pConverter);

/// The inverse conversion as a pipeline stage.
#[derive(Debug, Clone, Copy)]
pub struct Yuv420pToRgb(pub Yuv420pConverter);

impl FrameTransform for RgbToYuv420p {
    fn input_layout(&self) -> FrameLayout {
        FrameLayout::Rgb24
    }

    fn output_layout(&self) -> FrameLayout {
        FrameLayout::Yuv420p
    }

    fn output_frame_len(&self) -> usize {
        self.0.resolution().frame_len(FrameLayout::Yuv420p)
    }

    fn apply(&self, frame: &Frame) -> Result<Frame, VidpipeError> {
        self.0.rgb_to_yuv420p(frame)
    }
}

impl FrameTransform for Yuv420pToRgb {
    fn input_layout(&self) -> FrameLayout {
        FrameLayout::Yuv420p
    }

    fn output_layout(&self) -> FrameLayout {
        FrameLayout::Rgb24
    }

    fn output_frame_len(&self) -> usize {
        self.0.resolution().frame_len(FrameLayout::Rgb24)
    }

    fn apply(&self, frame: &Frame) -> Result<Frame, VidpipeError> {
        self.0.yuv420p_to_rgb(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FrameSequence;

    fn converter(width: usize, height: usize) -> Yuv420pConverter {
        Yuv420pConverter::new(Resolution::new(width, height).unwrap())
    }

    fn solid_rgb(width: usize, height: usize, rgb: [u8; 3]) -> Frame {
        Frame::new(rgb.repeat(width * height))
    }

    #[test]
    fn test_black_frame_layout() {
        let conv = converter(4, 2);
        let planar = conv.rgb_to_yuv420p(&solid_rgb(4, 2, [0, 0, 0])).unwrap();
        let mut expected = vec![0u8; 8];
        expected.extend_from_slice(&[128, 128, 128, 128]);
        assert_eq!(planar.as_bytes(), expected.as_slice());

        let rgb = conv.yuv420p_to_rgb(&planar).unwrap();
        assert_eq!(rgb.as_bytes(), &[0u8; 24]);
    }

    #[test]
    fn test_planar_frame_is_half_the_raw_size() {
        let conv = converter(6, 4);
        let raw = solid_rgb(6, 4, [10, 200, 30]);
        let planar = conv.rgb_to_yuv420p(&raw).unwrap();
        assert_eq!(planar.len() * 2, raw.len());
        assert_eq!(conv.yuv420p_to_rgb(&planar).unwrap().len(), raw.len());
    }

    #[test]
    fn test_chroma_is_averaged_per_block() {
        // Top-left pixel is blue, every other pixel black.
        let conv = converter(4, 2);
        #[rustfmt::skip]
        let raw = Frame::new(vec![
            0, 0, 255,  0, 0, 0,  0, 0, 0,  0, 0, 0,
            0, 0, 0,    0, 0, 0,  0, 0, 0,  0, 0, 0,
        ]);
        let packed = conv.rgb_to_yuv420p(&raw).unwrap();
        let view = planar::unpack(packed.as_bytes(), conv.resolution()).unwrap();
        // Blue pixel: U = 242 (242.495 truncated), V = 107. Block mean with three 128s:
        // (242 + 384) / 4 = 156 and (107 + 384) / 4 = 122.
        assert_eq!(view.u, &[156, 128]);
        assert_eq!(view.v, &[122, 128]);
    }

    #[test]
    fn test_wrong_raw_length_is_rejected() {
        let conv = converter(4, 2);
        let result = conv.rgb_to_yuv420p(&Frame::new(vec![0; 23]));
        assert!(matches!(
            result,
            Err(VidpipeError::DimensionMismatch {
                layout: FrameLayout::Rgb24,
                expected: 24,
                actual: 23
            })
        ));
        assert!(conv.yuv420p_to_rgb(&Frame::new(vec![0; 11])).is_err());
    }

    #[test]
    fn test_stage_trait_maps_whole_sequence() {
        let conv = converter(2, 2);
        let mut raw = FrameSequence::new(FrameLayout::Rgb24, 12);
        raw.push(solid_rgb(2, 2, [0, 0, 0])).unwrap();
        raw.push(solid_rgb(2, 2, [255, 255, 255])).unwrap();

        let planar = RgbToYuv420p(conv).apply_sequence(raw).unwrap();
        assert_eq!(planar.layout(), FrameLayout::Yuv420p);
        assert_eq!(planar.total_bytes(), 12);

        let rgb = Yuv420pToRgb(conv).apply_sequence(planar).unwrap();
        assert_eq!(rgb.layout(), FrameLayout::Rgb24);
        assert_eq!(rgb.get(0).unwrap().as_bytes(), &[0u8; 12]);
    }
}
