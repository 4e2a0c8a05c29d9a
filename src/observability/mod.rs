//! # Observability
//!
//! Structured logging via the tracing ecosystem. Log level comes from
//! `RUST_LOG` (default `info`); set `SPENDLOG_LOG_FORMAT=json` for JSON
//! output.

use tracing_subscriber::{fmt, EnvFilter};

use crate::errors::{Error, Result};

/// Initialize the global tracing subscriber.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_output = std::env::var("SPENDLOG_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = fmt().with_env_filter(filter).with_target(true);

    let result = if json_output {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| Error::internal(format!("Failed to initialize tracing: {}", e)))
}
