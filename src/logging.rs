//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The library only emits `tracing` events; the binary installs a subscriber
//! that writes them to stderr so stdout stays reserved for command output.
//!
//! # Log Levels
//!
//! - `error`: Rows that abort a report
//! - `warn`: Configuration fallbacks (default, no `-v`)
//! - `info`: Report summaries (`-v`)
//! - `debug`: Per-row fee calculations (`-vv`)
//! - `trace`: Everything (`-vvv`)

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for logging behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level used when `RUST_LOG` is not set
    pub level: Level,
    /// Whether to use ANSI colors in output
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from the CLI verbosity count
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Install the global subscriber
///
/// Returns an error if a global subscriber has already been set.
pub fn init_logging(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .compact(),
        )
        .try_init()
}

/// Build an `EnvFilter` from the given level, respecting the `RUST_LOG` env var
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // External crates stay at warn to reduce noise
        EnvFilter::new(format!(
            "warn,library_late_fees={level},late_fees={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Level::WARN)]
    #[case(1, Level::INFO)]
    #[case(2, Level::DEBUG)]
    #[case(3, Level::TRACE)]
    #[case(9, Level::TRACE)]
    fn test_from_verbosity(#[case] verbosity: u8, #[case] expected: Level) {
        assert_eq!(LogConfig::from_verbosity(verbosity).level, expected);
    }

    #[test]
    fn test_default_is_warn_with_ansi() {
        let config = LogConfig::default();
        assert_eq!(config.level, Level::WARN);
        assert!(config.with_ansi);
    }
}
