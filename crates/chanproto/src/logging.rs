use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

/// Log line encoding for stderr diagnostics.
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line events.
    #[default]
    Text,
    /// One JSON object per event, for log shippers.
    Json,
}

/// Minimum severity for stderr diagnostics.
///
/// `info` covers the connection lifecycle (bind, accept, connect); `debug`
/// adds per-message echo traffic.
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Install the stderr subscriber for connection and framing diagnostics.
///
/// Diagnostics never share stdout with command output: `--format raw` writes
/// payload bytes there and `--format json` is line-oriented, so all log
/// events go to stderr. A second call (e.g. from tests) keeps the first
/// subscriber.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from(level))
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_matching_filters() {
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::ERROR);
        assert_eq!(LevelFilter::from(LogLevel::Info), LevelFilter::INFO);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
    }

    #[test]
    fn defaults_match_cli_flag_defaults() {
        assert!(matches!(LogFormat::default(), LogFormat::Text));
        assert!(matches!(LogLevel::default(), LogLevel::Info));
    }
}
