use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed row at line {line}: {source}")]
    MalformedRow { line: u64, source: csv::Error },
}

/// One raw row of the logger export.
///
/// The header names are a fixed external contract; column order and extra
/// columns are irrelevant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Timestamp (ms)")]
    pub timestamp_ms: f64,
    #[serde(rename = "Voltage (mV)")]
    pub voltage_mv: f64,
}

/// Header-aware CSV source of sensor readings.
pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
}

impl CsvSource<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: csv::Reader::from_reader(reader),
        }
    }

    /// Reads every row up front, preserving source order.
    ///
    /// Progress reporting needs the total count before the first batch goes
    /// out, so the whole file is loaded rather than streamed. A row missing
    /// the expected fields is fatal for the run and names the offending line.
    pub fn read_all(mut self) -> Result<Vec<RawRow>, SourceError> {
        let mut rows = Vec::new();
        for result in self.reader.deserialize() {
            let row: RawRow = result.map_err(|e| {
                let line = e.position().map_or(0, csv::Position::line);
                SourceError::MalformedRow { line, source: e }
            })?;
            rows.push(row);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_regardless_of_column_order_and_extras() {
        let data = "Voltage (mV),Run,Timestamp (ms)\n1.5,a,100\n2.25,b,200\n";
        let rows = CsvSource::from_reader(Cursor::new(data)).read_all().unwrap();

        assert_eq!(
            rows,
            vec![
                RawRow {
                    timestamp_ms: 100.0,
                    voltage_mv: 1.5
                },
                RawRow {
                    timestamp_ms: 200.0,
                    voltage_mv: 2.25
                },
            ]
        );
    }

    #[test]
    fn header_only_file_yields_no_rows() {
        let data = "Timestamp (ms),Voltage (mV)\n";
        let rows = CsvSource::from_reader(Cursor::new(data)).read_all().unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn malformed_value_reports_offending_line() {
        let data = "Timestamp (ms),Voltage (mV)\n100,1.5\n200,not-a-number\n";
        let err = CsvSource::from_reader(Cursor::new(data))
            .read_all()
            .unwrap_err();

        match err {
            SourceError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("Expected MalformedRow, got: {other:?}"),
        }
    }

    #[test]
    fn missing_expected_column_is_fatal() {
        let data = "Timestamp (ms),Current (mA)\n100,1.5\n";
        let result = CsvSource::from_reader(Cursor::new(data)).read_all();
        assert!(result.is_err());
    }
}
