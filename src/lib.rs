//! This file is the root of the `vidpipe` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`pipeline`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types a host application needs to drive a
//!     transcode: the configuration, the `Transcoder` and its outputs.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

// Used by `log_metric!` expansions in downstream crates.
#[doc(hidden)]
pub use log;

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod pipeline;
pub mod types;

//==================================================================================
// 2. Public Surface
//==================================================================================
pub use config::{EntropyCodecKind, EntropyConfig, TranscodeConfig};
pub use error::VidpipeError;
pub use observability::enable_verbose_logging;
pub use pipeline::{EncodedStream, TranscodeOutput, TranscodeReport, Transcoder};
pub use types::{Frame, FrameLayout, FrameSequence, Resolution};
