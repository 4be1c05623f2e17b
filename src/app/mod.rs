pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, LogLevel};
pub use logging::LoggingError;

use crate::sender::{BatchTransmitter, ClientConfig, HttpClient};
use crate::source::CsvSource;
use crate::uploader::{UploadSummary, Uploader};
use anyhow::Context;
use tracing::info;

pub struct App {
    config: Config,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self {
            config: Config::from_args(args)?,
        })
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(self) -> anyhow::Result<UploadSummary> {
        let config = self.config;

        info!("Starting biome-relay v{}", env!("CARGO_PKG_VERSION"));
        info!(
            "Configuration: input={}, endpoint={}, batch_size={}, sensor_id={}, sensor_name={:?}",
            config.input.display(),
            config.endpoint,
            config.batch_size,
            config.sensor_id,
            config.sensor_name
        );

        let rows = CsvSource::open(&config.input)
            .with_context(|| format!("opening {}", config.input.display()))?
            .read_all()
            .with_context(|| format!("reading {}", config.input.display()))?;
        info!("Loaded {} readings", rows.len());

        let client = HttpClient::new(ClientConfig {
            endpoint: config.endpoint.clone(),
            timeout: config.request_timeout,
            ..ClientConfig::default()
        })?;
        let transmitter = BatchTransmitter::new(client);

        let uploader = Uploader::new(
            transmitter,
            config.batch_size,
            config.sensor_id,
            config.sensor_name.clone(),
            config.pause,
        );

        let summary = uploader.run(rows).await?;
        Ok(summary)
    }
}

/// Main entry point for the binary.
pub async fn main() -> anyhow::Result<()> {
    let config = Config::from_args(std::env::args())?;
    logging::init(config.log_level)?;

    App::from_config(config).run().await?;
    Ok(())
}
