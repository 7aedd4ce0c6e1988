// In: src/bridge/stateless_api.rs

use crate::bridge::stream_io;
use crate::config::TranscodeConfig;
use crate::error::VidpipeError;
use crate::pipeline::orchestrator::{EncodedStream, Transcoder};
use crate::pipeline::stats::TranscodeReport;

/// Encodes a flat buffer of concatenated RGB24 frames into an entropy blob.
/// A trailing partial frame is ignored.
pub fn encode_bytes(raw: &[u8], config: TranscodeConfig) -> Result<EncodedStream, VidpipeError> {
    let transcoder = Transcoder::new(config)?;
    let mut reader = raw;
    let frames = stream_io::read_frames(&mut reader, transcoder.resolution())?;
    transcoder.encode(frames)
}

/// Decodes a stream back to concatenated RGB24 frames.
/// `config` must describe the same resolution the stream was encoded at.
pub fn decode_bytes(
    encoded: &EncodedStream,
    config: TranscodeConfig,
) -> Result<Vec<u8>, VidpipeError> {
    let transcoder = Transcoder::new(config)?;
    let frames = transcoder.decode(encoded)?;
    let mut out = Vec::with_capacity(frames.total_bytes());
    stream_io::write_frames(&mut out, &frames)?;
    Ok(out)
}

/// Runs the full forward and inverse chain over a flat RGB24 buffer.
/// Returns the reconstructed RGB24 bytes alongside the stage report.
pub fn transcode_bytes(
    raw: &[u8],
    config: TranscodeConfig,
) -> Result<(Vec<u8>, TranscodeReport), VidpipeError> {
    let transcoder = Transcoder::new(config)?;
    let mut reader = raw;
    let frames = stream_io::read_frames(&mut reader, transcoder.resolution())?;
    let output = transcoder.run(frames)?;
    Ok((output.reconstructed.to_concatenated(), output.report))
}
