use crate::batch::{Batch, BatchAccumulator};
use crate::domain::SensorReading;
use crate::sender::{BatchTransmitter, TransmissionError};
use crate::source::{RawRow, SourceError};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("Transmission failed: {0}")]
    Transmission(#[from] TransmissionError),
}

/// Totals for one completed run.
#[derive(Debug, Clone, Default)]
pub struct UploadSummary {
    pub total_records: usize,
    pub records_sent: usize,
    pub batches_sent: u64,
    pub rejected_batches: u64,
}

/// The batch-and-upload loop.
///
/// Fully sequential: one batch at a time, awaiting each transmission before
/// accumulating further readings. The configured pause falls only between
/// successive full-size batches, never after the final one.
pub struct Uploader {
    transmitter: BatchTransmitter,
    batch_size: usize,
    sensor_id: u32,
    sensor_name: String,
    pause: Duration,
}

impl Uploader {
    pub fn new(
        transmitter: BatchTransmitter,
        batch_size: usize,
        sensor_id: u32,
        sensor_name: String,
        pause: Duration,
    ) -> Self {
        Self {
            transmitter,
            batch_size,
            sensor_id,
            sensor_name,
            pause,
        }
    }

    /// Maps raw rows into readings carrying the run-constant sensor identity,
    /// groups them into batches of `batch_size` in source order, and
    /// transmits each batch as it fills. The remainder, if any, goes out as a
    /// final short batch after the input is exhausted.
    ///
    /// A rejected batch (non-2xx status) is reported and the run continues;
    /// already-sent batches are never retransmitted. A transport failure
    /// aborts the run.
    pub async fn run(&self, rows: Vec<RawRow>) -> Result<UploadSummary, UploadError> {
        let total = rows.len();
        let mut accumulator = BatchAccumulator::new(self.batch_size);
        let mut summary = UploadSummary {
            total_records: total,
            ..UploadSummary::default()
        };

        for row in rows {
            let reading = SensorReading {
                timestamp: row.timestamp_ms,
                sensor_id: self.sensor_id,
                sensor_name: self.sensor_name.clone(),
                sensor_value: row.voltage_mv,
            };

            if let Some(batch) = accumulator.push(reading) {
                if summary.batches_sent > 0 {
                    tokio::time::sleep(self.pause).await;
                }
                self.transmit(&batch, &mut summary, total, false).await?;
            }
        }

        if let Some(batch) = accumulator.flush() {
            self.transmit(&batch, &mut summary, total, true).await?;
        }

        info!(
            "Run complete: {} of {} readings sent in {} batches ({} rejected)",
            summary.records_sent, summary.total_records, summary.batches_sent,
            summary.rejected_batches
        );
        Ok(summary)
    }

    async fn transmit(
        &self,
        batch: &Batch,
        summary: &mut UploadSummary,
        total: usize,
        is_final: bool,
    ) -> Result<(), UploadError> {
        let result = self.transmitter.send_batch(batch).await?;

        summary.batches_sent += 1;
        summary.records_sent += batch.len();
        if !result.success {
            summary.rejected_batches += 1;
        }

        if is_final {
            info!(
                "Final batch {} sent with status code: {}",
                batch.seq(),
                result.status_code
            );
        } else {
            info!(
                "Batch {} sent with status code: {}",
                batch.seq(),
                result.status_code
            );
        }
        info!(
            "Progress: {}/{} records processed",
            summary.records_sent, total
        );

        Ok(())
    }
}
