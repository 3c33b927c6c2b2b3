//! Structured logging setup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Errors that can occur while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// `logging.level` is not one of trace, debug, info, warn, error, off.
    #[error("invalid log level {level:?}: {message}")]
    Level {
        /// The rejected value.
        level: String,
        /// Why it was rejected.
        message: String,
    },

    /// A global subscriber was already installed.
    #[error("tracing already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `config.level` is used. Output
/// is JSON lines when `config.json` is set. The configured level is
/// checked even when `RUST_LOG` is set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let level = parse_level(&config.level)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let json_layer = config.json.then(|| fmt::layer().json().with_target(true));
    let text_layer = (!config.json).then(|| fmt::layer().with_target(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    Ok(())
}

/// Parse a bare level name. Target directives such as `meetup=debug` are
/// rejected; those belong in `RUST_LOG`.
fn parse_level(level: &str) -> Result<LevelFilter, TelemetryError> {
    level.trim().parse().map_err(|e| TelemetryError::Level {
        level: level.to_owned(),
        message: format!("{e}"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_parse() {
        assert_eq!(parse_level("info").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
    }

    #[test]
    fn mistyped_level_is_rejected() {
        let err = parse_level("verbos").unwrap_err();
        assert!(matches!(err, TelemetryError::Level { ref level, .. } if level == "verbos"));
    }

    #[test]
    fn target_directive_is_rejected() {
        assert!(matches!(
            parse_level("meetup_api=debug"),
            Err(TelemetryError::Level { .. })
        ));
    }

    #[test]
    fn init_rejects_mistyped_level_before_installing() {
        let config = LoggingConfig {
            level: String::from("verbos"),
            json: false,
        };
        assert!(matches!(
            init_tracing(&config),
            Err(TelemetryError::Level { .. })
        ));
    }

    #[test]
    fn second_init_is_an_error_not_a_panic() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert!(matches!(
            init_tracing(&config),
            Err(TelemetryError::Init(_))
        ));
    }
}
