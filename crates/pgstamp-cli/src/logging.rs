//! Logging setup for the pgstamp CLI
//!
//! Diagnostics go to stderr so that stdout carries nothing but SQL.
//! `RUST_LOG` takes precedence over the verbosity flags.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level filter
    pub default_filter: String,

    /// Whether to include file/line information in logs
    pub include_location: bool,
}

impl LoggingConfig {
    /// Map the number of `-v` flags to a filter
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        Self {
            default_filter: format!("warn,pgstamp_core={level},pgstamp={level}"),
            include_location: verbose > 2,
        }
    }
}

/// Install the global subscriber
pub fn init(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_by_default() {
        let config = LoggingConfig::from_verbosity(0);
        assert_eq!(config.default_filter, "warn,pgstamp_core=warn,pgstamp=warn");
        assert!(!config.include_location);
    }

    #[test]
    fn test_verbosity_levels() {
        assert!(LoggingConfig::from_verbosity(1).default_filter.ends_with("pgstamp=info"));
        assert!(LoggingConfig::from_verbosity(2).default_filter.ends_with("pgstamp=debug"));

        let config = LoggingConfig::from_verbosity(5);
        assert!(config.default_filter.ends_with("pgstamp=trace"));
        assert!(config.include_location);
    }
}
