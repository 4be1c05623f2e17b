use crate::domain::SensorReading;

/// An ordered group of readings transmitted together in one request.
///
/// Batches are ephemeral: created when the accumulator fills (or is flushed),
/// transmitted once, then discarded. The sequence number is 1-indexed and
/// used for reporting only; it is never transmitted.
#[derive(Debug, Clone)]
pub struct Batch {
    seq: u64,
    readings: Vec<SensorReading>,
}

impl Batch {
    pub fn new(seq: u64, readings: Vec<SensorReading>) -> Self {
        Self { seq, readings }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    pub fn into_readings(self) -> Vec<SensorReading> {
        self.readings
    }
}

/// Size-based batch accumulator.
///
/// Exclusively owned by the one execution path; the run loop is fully
/// sequential so no locking is involved. `push` emits a full batch exactly
/// when the accumulator reaches capacity, `flush` drains whatever remains
/// once the input is exhausted.
#[derive(Debug)]
pub struct BatchAccumulator {
    capacity: usize,
    pending: Vec<SensorReading>,
    next_seq: u64,
}

impl BatchAccumulator {
    /// `capacity` must be positive; config validation enforces this upstream.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            capacity,
            pending: Vec::with_capacity(capacity),
            next_seq: 1,
        }
    }

    /// Appends a reading, returning the completed batch when this push fills
    /// the accumulator.
    pub fn push(&mut self, reading: SensorReading) -> Option<Batch> {
        self.pending.push(reading);
        if self.pending.len() >= self.capacity {
            self.take()
        } else {
            None
        }
    }

    /// Drains the remainder as a final, possibly short batch. No-op on an
    /// empty accumulator.
    pub fn flush(&mut self) -> Option<Batch> {
        if self.pending.is_empty() {
            None
        } else {
            self.take()
        }
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn take(&mut self) -> Option<Batch> {
        let readings = std::mem::replace(&mut self.pending, Vec::with_capacity(self.capacity));
        let batch = Batch::new(self.next_seq, readings);
        self.next_seq += 1;
        Some(batch)
    }
}
