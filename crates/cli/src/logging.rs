//! Tracing setup
//!
//! `RUST_LOG` wins when set. `DEVCLOCK_LOG_FORMAT=json|pretty` picks the
//! formatter; anything else gets the compact one. Output goes to stderr.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: bool) -> Result<()> {
    let default_directive = if verbose {
        "devclock=debug"
    } else {
        "devclock=warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    let log_format = std::env::var("DEVCLOCK_LOG_FORMAT").unwrap_or_default();

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match log_format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        "pretty" => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
