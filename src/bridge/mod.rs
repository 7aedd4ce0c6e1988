// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the boundary between the outside world (byte streams owned by
// a command-line front end, files, sockets) and the pure `pipeline` engine.
// It never opens files or touches standard input itself; callers hand it any
// `Read` / `Write`.
//
// Data Flow (Ingestion):
//
//   1. [Byte source: impl Read] -> read_frames -> chunks of exactly w*h*3 bytes
//         |                                        (a short final chunk is dropped)
//         `-> FrameSequence (Rgb24)
//
//   2. [Stateless API (encode_bytes / transcode_bytes)] -> Transcoder
//
// Data Flow (Egress):
//
//   1. [FrameSequence] -> write_frames -> headerless concatenation -> impl Write
//
// ====================================================================================
pub mod stateless_api;
pub mod stream_io;

pub use stateless_api::{decode_bytes, encode_bytes, transcode_bytes};
pub use stream_io::{read_frames, read_sequence, write_frames};

#[cfg(test)]
mod tests;
