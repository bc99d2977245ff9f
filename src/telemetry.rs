//! Tracing setup.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogFormat;

/// Initializes the global subscriber.
///
/// Honors `RUST_LOG` and defaults to `info` when it is unset. Logs go to
/// stderr so that `split` output on stdout stays clean. Calling this twice
/// is a no-op.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let builder = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => {
            let _ = builder.with(fmt_layer.json().flatten_event(true)).try_init();
        }
        LogFormat::Text => {
            let _ = builder.with(fmt_layer.compact()).try_init();
        }
    }
}
