//! Diagnostic logging bootstrap.
//!
//! User-facing output goes through `ui::messages`; this is the `log` facade
//! for developer diagnostics, written to stderr so it never mixes with
//! command output.
//!
//! # Invariants
//! - Initialization happens at most once per process; later calls are no-ops.
//! - Initialization never panics.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

/// Environment variable overriding the configured level.
pub const LOG_ENV: &str = "RTOGETHER_LOG";

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Initializes stderr logging with `level`, unless `RTOGETHER_LOG` is set.
///
/// # Errors
/// - Returns an error when the level is unsupported.
/// - Returns an error when the logger backend cannot start.
pub fn init_logging(level: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let requested = std::env::var(LOG_ENV).unwrap_or_else(|_| level.to_string());
    let normalized = normalize_level(&requested)?;

    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, String> {
        let handle = Logger::try_with_str(normalized)
            .map_err(|err| format!("invalid log level `{normalized}`: {err}"))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;
        debug!(
            "event=app_start module=cli level={} version={}",
            normalized,
            env!("CARGO_PKG_VERSION")
        );
        Ok(handle)
    })?;

    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected off|trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_normalized() {
        assert_eq!(normalize_level(" WARNING "), Ok("warn"));
        assert_eq!(normalize_level("debug"), Ok("debug"));
        assert!(normalize_level("loud").is_err());
    }
}
