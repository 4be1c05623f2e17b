use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// CSV file with recorded sensor readings
    #[arg(long, env = "RELAY_INPUT")]
    pub input: PathBuf,

    /// Monitoring endpoint URL
    #[arg(
        long,
        env = "RELAY_ENDPOINT",
        default_value = "https://biome-iot.uqcloud.net/api/monitoring_data"
    )]
    pub endpoint: String,

    /// Number of readings per batch
    #[arg(long, env = "RELAY_BATCH_SIZE", default_value = "20")]
    pub batch_size: usize,

    /// Sensor id attached to every reading in this run
    #[arg(long, env = "RELAY_SENSOR_ID", default_value = "1")]
    pub sensor_id: u32,

    /// Sensor display name shown on the dashboard
    #[arg(
        long,
        env = "RELAY_SENSOR_NAME",
        default_value = "Dry test - multiple days"
    )]
    pub sensor_name: String,

    /// Pause between full batches in milliseconds
    #[arg(long, env = "RELAY_PAUSE_MS", default_value = "1000")]
    pub pause_ms: u64,

    /// Request timeout in seconds
    #[arg(long, env = "RELAY_REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,

    /// Log level
    #[arg(long, env = "RELAY_LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Derived fields (not CLI arguments)
    #[arg(skip)]
    pub pause: Duration,

    #[arg(skip)]
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut config = Config::parse_from(args);
        config.post_process();
        config.validate()?;
        Ok(config)
    }

    pub fn post_process(&mut self) {
        self.pause = Duration::from_millis(self.pause_ms);
        self.request_timeout = Duration::from_secs(self.request_timeout_secs);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.endpoint).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid endpoint URL '{}': {}", self.endpoint, e))
        })?;

        if self.batch_size == 0 {
            return Err(ConfigError::InvalidConfig(
                "Batch size must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
