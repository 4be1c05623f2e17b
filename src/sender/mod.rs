mod client;
mod transmission;

pub use client::{ClientConfig, ClientError, HttpClient};
pub use transmission::{BatchTransmitter, TransmissionError, TransmissionResult};
