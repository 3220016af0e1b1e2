//! Logging initialisation via tracing-subscriber.
//!
//! The engine logs through the `log` facade; the subscriber's `tracing-log`
//! bridge picks those records up as well.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global subscriber, writing to stderr.
///
/// `level` is the default; directives in `RUST_LOG` refine it.
///
/// # Errors
/// Returns an error if `level` is not a valid level or a subscriber is
/// already installed.
pub fn init(level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::builder()
        .with_default_directive(parse_level(level)?.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| AppError::Logging(format!("failed to set subscriber: {e}")))
}

/// Parse a log level string, rejecting unknown values.
///
/// # Errors
/// Returns an error for anything other than `off`, `error`, `warn`, `info`,
/// `debug` or `trace`.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logging(format!("unrecognised log level: '{level}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_parse() {
        for l in ["error", "warn", "info", "debug", "trace"] {
            assert!(parse_level(l).is_ok(), "expected '{l}' to be valid");
        }
    }

    #[test]
    fn invalid_level_errors() {
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("").is_err());
    }
}
