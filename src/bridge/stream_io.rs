// In: src/bridge/stream_io.rs

//! Fixed-size frame chunking over arbitrary byte sources and sinks.

use std::io::{ErrorKind, Read, Write};

use crate::error::VidpipeError;
use crate::types::{Frame, FrameLayout, FrameSequence, Resolution};

/// Fills `buf` from `reader`, stopping early only at end of input.
/// Returns the number of bytes read.
fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize, VidpipeError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Reads frames of one layout until the source is exhausted.
/// A final chunk shorter than a whole frame is dropped.
pub fn read_sequence<R: Read + ?Sized>(
    reader: &mut R,
    layout: FrameLayout,
    resolution: Resolution,
) -> Result<FrameSequence, VidpipeError> {
    let frame_len = resolution.frame_len(layout);
    let mut sequence = FrameSequence::new(layout, frame_len);

    loop {
        let mut buf = vec![0u8; frame_len];
        let filled = read_full(reader, &mut buf)?;
        if filled < frame_len {
            if filled > 0 {
                log::warn!(
                    "Dropping trailing partial frame: {} of {} bytes",
                    filled,
                    frame_len
                );
            }
            break;
        }
        sequence.push(Frame::new(buf))?;
    }

    log::info!(
        "Read {} {} frames ({} bytes) at {}",
        sequence.len(),
        layout,
        sequence.total_bytes(),
        resolution
    );
    Ok(sequence)
}

/// Reads raw interleaved RGB24 frames.
pub fn read_frames<R: Read + ?Sized>(
    reader: &mut R,
    resolution: Resolution,
) -> Result<FrameSequence, VidpipeError> {
    read_sequence(reader, FrameLayout::Rgb24, resolution)
}

/// Writes every frame back to back, with no header or padding.
pub fn write_frames<W: Write + ?Sized>(
    writer: &mut W,
    frames: &FrameSequence,
) -> Result<(), VidpipeError> {
    for frame in frames {
        writer.write_all(frame.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
