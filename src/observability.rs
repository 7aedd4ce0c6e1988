//! This module provides logging and diagnostics hooks for the pipeline.
//!
//! All crate diagnostics go through the `log` facade. Nothing is printed unless
//! the host application installs a logger, either its own or the one set up by
//! `enable_verbose_logging`. The `log_metric!` macro emits machine-readable
//! key/value lines for stage statistics.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::VidpipeError;

/// Logs a structured key-value metric line at `debug` level.
///
/// # Example
/// ```
/// use vidpipe::log_metric;
/// let bytes = 4096;
/// log_metric!("event" = "stage_complete", "stage" = "yuv420p", "bytes" = bytes);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if $crate::log::log_enabled!($crate::log::Level::Debug) {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::log::debug!("VIDPIPE_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` sink at `Info` level, once per process.
///
/// With `log_file`, records are appended to that file instead of stderr.
/// Later calls are no-ops, as is the first call if another logger is already set.
pub fn enable_verbose_logging(log_file: Option<&Path>) -> Result<(), VidpipeError> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });

    Ok(())
}
