use super::HttpClient;
use crate::batch::Batch;
use reqwest::header::CONTENT_TYPE;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum TransmissionError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Outcome of one request/response exchange.
///
/// A completed request with a non-2xx status is still a result, not an
/// error: the relay reports the code and moves on (fire-and-forget).
#[derive(Debug, Clone)]
pub struct TransmissionResult {
    pub success: bool,
    pub status_code: u16,
    pub latency: Duration,
    pub bytes_sent: usize,
}

#[derive(Debug, Clone)]
pub struct BatchTransmitter {
    client: HttpClient,
}

impl BatchTransmitter {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Issues exactly one POST carrying the batch's readings as a bare JSON
    /// array. No batch metadata goes on the wire.
    ///
    /// Transport failures (DNS, refused connection, timeout) are errors;
    /// the caller decides whether to abort. A server rejection is reported
    /// through the result's status code instead.
    pub async fn send_batch(&self, batch: &Batch) -> Result<TransmissionResult, TransmissionError> {
        debug_assert!(!batch.is_empty());

        let start = Instant::now();
        let payload = serde_json::to_vec(batch.readings())?;
        let bytes_sent = payload.len();

        debug!(
            "Sending batch {} with {} readings ({} bytes)",
            batch.seq(),
            batch.len(),
            bytes_sent
        );

        let response = self
            .client
            .client
            .post(self.client.endpoint_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let latency = start.elapsed();
        let status_code = response.status().as_u16();
        let success = response.status().is_success();

        if success {
            debug!(
                "Batch {} accepted ({} readings) in {:?}",
                batch.seq(),
                batch.len(),
                latency
            );
        } else {
            warn!("Batch {} rejected: HTTP {}", batch.seq(), status_code);
        }

        Ok(TransmissionResult {
            success,
            status_code,
            latency,
            bytes_sent,
        })
    }
}
