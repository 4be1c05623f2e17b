mod reading;

pub use reading::SensorReading;
