use super::*;
use crate::config::{EntropyCodecKind, EntropyConfig, TranscodeConfig};
use crate::error::VidpipeError;
use crate::types::{FrameLayout, Resolution};
use std::io::{self, Read};

/// Hands out at most `step` bytes per `read` call.
struct TrickleReader<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away"))
    }
}

fn res(width: usize, height: usize) -> Resolution {
    Resolution::new(width, height).unwrap()
}

#[test]
fn test_read_frames_chunks_exact_frames() {
    // 2x2 RGB24 frames are 12 bytes each.
    let bytes: Vec<u8> = (0..36u8).collect();
    let frames = read_frames(&mut bytes.as_slice(), res(2, 2)).unwrap();

    assert_eq!(frames.layout(), FrameLayout::Rgb24);
    assert_eq!(frames.len(), 3);
    assert_eq!(frames.get(1).unwrap().as_bytes(), &bytes[12..24]);
    assert_eq!(frames.total_bytes(), 36);
}

#[test]
fn test_read_frames_drops_partial_tail() {
    let bytes = vec![9u8; 12 * 2 + 5];
    let frames = read_frames(&mut bytes.as_slice(), res(2, 2)).unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames.total_bytes(), 24);
}

#[test]
fn test_read_frames_from_empty_source() {
    let frames = read_frames(&mut io::empty(), res(4, 2)).unwrap();
    assert!(frames.is_empty());
}

#[test]
fn test_read_frames_survives_short_reads() {
    let bytes: Vec<u8> = (0..48u8).collect();
    let mut reader = TrickleReader {
        data: &bytes,
        step: 5,
    };
    let frames = read_frames(&mut reader, res(2, 2)).unwrap();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames.to_concatenated(), bytes);
}

#[test]
fn test_read_frames_propagates_io_errors() {
    let result = read_frames(&mut BrokenReader, res(2, 2));
    assert!(matches!(result, Err(VidpipeError::Io(_))));
}

#[test]
fn test_read_sequence_uses_layout_frame_length() {
    // A 4x2 planar frame is 12 bytes.
    let bytes = vec![1u8; 30];
    let frames = read_sequence(&mut bytes.as_slice(), FrameLayout::Yuv420p, res(4, 2)).unwrap();
    assert_eq!(frames.layout(), FrameLayout::Yuv420p);
    assert_eq!(frames.frame_len(), 12);
    assert_eq!(frames.len(), 2);
}

#[test]
fn test_write_frames_is_headerless_concatenation() {
    let bytes: Vec<u8> = (0..24u8).collect();
    let frames = read_frames(&mut bytes.as_slice(), res(2, 2)).unwrap();

    let mut out = Vec::new();
    write_frames(&mut out, &frames).unwrap();
    assert_eq!(out, bytes);
}

#[test]
fn test_stateless_encode_then_decode() {
    let raw = [40u8, 80, 120].repeat(4 * 2 * 3);
    let config = TranscodeConfig::new(4, 2);

    let encoded = encode_bytes(&raw, config.clone()).unwrap();
    assert_eq!(encoded.frame_count, 3);
    assert!(!encoded.blob.is_empty());

    let decoded = decode_bytes(&encoded, config).unwrap();
    assert_eq!(decoded.len(), raw.len());
    // (40, 80, 120) reconstructs as (38, 82, 107).
    for px in decoded.chunks_exact(3) {
        assert_eq!(px, &[38, 82, 107]);
    }
}

#[test]
fn test_stateless_transcode_with_gzip() {
    let raw = vec![0u8; 4 * 4 * 3 * 2];
    let config = TranscodeConfig::new(4, 4)
        .with_entropy(EntropyConfig::new(EntropyCodecKind::Gzip).with_level(9));

    let (reconstructed, report) = transcode_bytes(&raw, config).unwrap();
    assert_eq!(reconstructed, raw);
    assert_eq!(report.frame_count, 2);
    assert_eq!(report.codec, EntropyCodecKind::Gzip);
    assert!(report.planar_roundtrip_exact);
}

#[test]
fn test_stateless_rejects_odd_resolution() {
    let result = encode_bytes(&[0u8; 45], TranscodeConfig::new(5, 3));
    assert!(matches!(
        result,
        Err(VidpipeError::OddDimension {
            width: 5,
            height: 3
        })
    ));
}
