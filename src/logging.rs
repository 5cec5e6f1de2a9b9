//! Logging initialization for artifact-scan.
//!
//! Diagnostics go through `tracing` and are written to stderr, leaving stdout
//! to command output. `RUST_LOG` takes precedence over the configured level.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_LOG_FORMAT: &str = "pretty";

/// Initialize the global tracing subscriber.
///
/// Must be called at most once, before any tracing macros are used.
///
/// # Formats
///
/// * `"pretty"` - Human-readable output (default)
/// * `"json"` - Machine-parseable JSON lines
pub fn init_tracing(log_level: &str, log_format: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", log_level, e))?;

    match log_format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| {
                    anyhow::anyhow!("failed to initialize JSON tracing subscriber: {}", e)
                })?;
        }
        "pretty" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| {
                    anyhow::anyhow!("failed to initialize pretty tracing subscriber: {}", e)
                })?;
        }
        _ => {
            return Err(anyhow::anyhow!(
                "unknown log format '{}', expected 'json' or 'pretty'",
                log_format
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_rejected() {
        let err = init_tracing("info", "xml").unwrap_err();
        assert!(err.to_string().contains("unknown log format 'xml'"));
    }
}
