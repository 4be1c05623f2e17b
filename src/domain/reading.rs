use serde::{Deserialize, Serialize};

/// One sensor observation, ready for batching and transmission.
///
/// This is the canonical representation of a reading throughout the pipeline,
/// from source rows through to sender input. Field order matches the wire
/// contract: each element of the uploaded JSON array carries exactly these
/// four keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Observation time in milliseconds, as recorded by the logger.
    pub timestamp: f64,
    /// Constant for a given run.
    pub sensor_id: u32,
    /// Display name shown on the dashboard; constant for a given run.
    pub sensor_name: String,
    /// Measured value in millivolts.
    pub sensor_value: f64,
}
