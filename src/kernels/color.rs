//! This module contains the pure, stateless per-pixel RGB <-> YUV conversion.
//!
//! The forward matrix is a full-range BT.601 variant. Forward results are not
//! clamped: each computed value is truncated toward zero and wrapped into an
//! 8-bit cell, which is exact for every legal RGB triple under this matrix.
//! The inverse clamps to `[0, 255]`, because rounding and chroma subsampling
//! loss can push reconstructed values out of range.

/// One interleaved RGB24 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One full-resolution YUV sample triple, chroma stored offset by 128.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yuv {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl Yuv {
    pub const fn new(y: u8, u: u8, v: u8) -> Self {
        Self { y, u, v }
    }
}

//==================================================================================
// 1. Conversion Coefficients
//==================================================================================

const CHROMA_OFFSET: f64 = 128.0;

// Rows are (R, G, B) weights for Y, U and V. The U row sums to -0.051, so
// neutral gray lands a few steps below 128 in U.
const RGB_TO_Y: [f64; 3] = [0.299, 0.587, 0.114];
const RGB_TO_U: [f64; 3] = [-0.169, -0.331, 0.449];
const RGB_TO_V: [f64; 3] = [0.499, -0.418, -0.0813];

const V_TO_R: f64 = 1.402;
const U_TO_G: f64 = 0.344136;
const V_TO_G: f64 = 0.714;
const U_TO_B: f64 = 1.772;

//==================================================================================
// 2. Core Logic
//==================================================================================

/// Stores a forward-path value into an 8-bit cell: truncate toward zero, then wrap.
#[inline]
fn wrap_to_u8(value: f64) -> u8 {
    value as i64 as u8
}

/// Stores an inverse-path value into an 8-bit cell: clamp, then truncate.
#[inline]
fn clamp_to_u8(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[inline]
fn weighted(weights: &[f64; 3], px: Rgb) -> f64 {
    weights[0] * px.r as f64 + weights[1] * px.g as f64 + weights[2] * px.b as f64
}

/// Converts one RGB pixel to YUV.
#[inline]
pub fn rgb_to_yuv(px: Rgb) -> Yuv {
    Yuv {
        y: wrap_to_u8(weighted(&RGB_TO_Y, px)),
        u: wrap_to_u8(weighted(&RGB_TO_U, px) + CHROMA_OFFSET),
        v: wrap_to_u8(weighted(&RGB_TO_V, px) + CHROMA_OFFSET),
    }
}

/// Converts one YUV sample triple back to RGB, clamping each channel.
#[inline]
pub fn yuv_to_rgb(px: Yuv) -> Rgb {
    let y = px.y as f64;
    let u = px.u as f64 - CHROMA_OFFSET;
    let v = px.v as f64 - CHROMA_OFFSET;

    Rgb {
        r: clamp_to_u8(y + V_TO_R * v),
        g: clamp_to_u8(y - U_TO_G * u - V_TO_G * v),
        b: clamp_to_u8(y + U_TO_B * u),
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: u8, expected: u8, tolerance: u8) {
        assert!(
            actual.abs_diff(expected) <= tolerance,
            "expected {} (+/-{}), got {}",
            expected,
            tolerance,
            actual
        );
    }

    #[test]
    fn test_black_maps_to_neutral_chroma() {
        let yuv = rgb_to_yuv(Rgb::new(0, 0, 0));
        assert_eq!(yuv, Yuv::new(0, 128, 128));
    }

    #[test]
    fn test_mid_gray_is_near_neutral() {
        // U = 128 - 0.051 * 128 = 121.47, truncated.
        let yuv = rgb_to_yuv(Rgb::new(128, 128, 128));
        assert_eq!(yuv, Yuv::new(127, 121, 127));

        let rgb = yuv_to_rgb(yuv);
        assert_close(rgb.r, 128, 3);
        assert_close(rgb.g, 128, 3);
        // The low U costs blue 1.772 * 7 on the way back.
        assert_eq!(rgb.b, 114);
    }

    #[test]
    fn test_primaries_stay_in_range_without_wrapping() {
        // Every legal RGB corner must land inside [0, 255] before storage.
        for &(r, g, b) in &[
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 255),
            (255, 255, 0),
            (0, 255, 255),
        ] {
            let px = Rgb::new(r, g, b);
            for value in [
                weighted(&RGB_TO_Y, px),
                weighted(&RGB_TO_U, px) + CHROMA_OFFSET,
                weighted(&RGB_TO_V, px) + CHROMA_OFFSET,
            ] {
                assert!((0.0..256.0).contains(&value), "{:?} -> {}", px, value);
            }
        }
    }

    #[test]
    fn test_forward_truncates_instead_of_rounding() {
        // Y = 0.299 * 3 = 0.897, which truncates to 0.
        let yuv = rgb_to_yuv(Rgb::new(3, 0, 0));
        assert_eq!(yuv.y, 0);
    }

    #[test]
    fn test_forward_storage_wraps_out_of_range_values() {
        assert_eq!(wrap_to_u8(256.7), 0);
        assert_eq!(wrap_to_u8(-1.5), 255);
        assert_eq!(wrap_to_u8(127.99), 127);
    }

    #[test]
    fn test_inverse_clamps_out_of_range_results() {
        // Y=255 with strongly positive V pushes R far above 255.
        let rgb = yuv_to_rgb(Yuv::new(255, 128, 255));
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.b, 255);

        // Y=0 with strongly negative U pushes B below 0.
        let rgb = yuv_to_rgb(Yuv::new(0, 0, 128));
        assert_eq!(rgb.b, 0);
        assert_eq!(rgb.r, 0);
    }

    #[test]
    fn test_round_trip_is_close_for_saturated_colors() {
        for &(r, g, b) in &[(200, 30, 40), (10, 220, 90), (60, 60, 250)] {
            let rgb = yuv_to_rgb(rgb_to_yuv(Rgb::new(r, g, b)));
            assert_close(rgb.r, r, 4);
            assert_close(rgb.g, g, 4);
            // Blue comes back short by roughly 0.09 * B.
            assert!(rgb.b <= b && b - rgb.b <= b / 10 + 4, "{} -> {}", b, rgb.b);
        }
    }
}
