use super::config::LogLevel;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitFailed(#[from] tracing_subscriber::util::TryInitError),
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies with the
/// HTTP stack quieted.
pub fn init(level: LogLevel) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},hyper=warn,reqwest=warn", level.as_str()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init()?;

    Ok(())
}
