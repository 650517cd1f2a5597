use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Coloured output on stderr, for the line-based console game.
    Stderr,
    /// Plain output appended to `LoggingConfig::file`, for the terminal UI.
    File,
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the
/// configured level.
pub fn init(config: &LoggingConfig, target: LogTarget) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.file)
                .map_err(|e| LoggingError::File {
                    path: config.file.clone(),
                    source: e,
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    result.map_err(|e| LoggingError::Init(e.to_string()))
}
