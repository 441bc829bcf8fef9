//! Parallel and CSV batch conversion
//!
//! Thin layer over the engine for bulk workloads. Conversions fan out over
//! the rayon thread pool; output order always matches input order.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::convert::to_utm;
use crate::error::Result;
use crate::types::{AngleUnit, GeodeticCoordinate, Hemisphere, UtmCoordinate};

/// Converts many `(latitude, longitude)` pairs to UTM in parallel
pub fn to_utm_many(points: &[(f64, f64)], unit: AngleUnit) -> Vec<Result<UtmCoordinate>> {
    points
        .par_iter()
        .map(|&(latitude, longitude)| to_utm(latitude, longitude, unit))
        .collect()
}

/// Converts many UTM coordinates back to latitude/longitude in parallel
pub fn to_lat_lon_many(coords: &[UtmCoordinate], unit: AngleUnit) -> Vec<Result<GeodeticCoordinate>> {
    coords.par_iter().map(|coord| coord.to_lat_lon(unit)).collect()
}

/// Errors from CSV batch conversion
#[derive(Debug)]
pub enum BatchError {
    /// I/O error
    Io(io::Error),

    /// CSV framing or encoding error
    Csv(csv::Error),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Io(e) => write!(f, "I/O error: {}", e),
            BatchError::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(e) => Some(e),
            BatchError::Csv(e) => Some(e),
        }
    }
}

impl From<io::Error> for BatchError {
    fn from(error: io::Error) -> Self {
        BatchError::Io(error)
    }
}

impl From<csv::Error> for BatchError {
    fn from(error: csv::Error) -> Self {
        BatchError::Csv(error)
    }
}

/// Input row: `latitude,longitude[,name]`
#[derive(Debug, Clone, Deserialize)]
pub struct CsvPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Output row. Conversion fields are empty when `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct CsvResult {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub name: Option<String>,
    pub zone: Option<u8>,
    pub hemisphere: Option<Hemisphere>,
    pub easting: Option<f64>,
    pub northing: Option<f64>,
    pub error: Option<String>,
}

/// Counts from a CSV batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
}

/// Rows read and converted together by [`convert_csv`]
pub const CSV_CHUNK_ROWS: usize = 4096;

/// Converts a CSV stream of geodetic points to a CSV stream of UTM rows
///
/// Rows are read [`CSV_CHUNK_ROWS`] at a time, converted in parallel and
/// written before the next chunk is read, so memory stays bounded for any
/// input size. Rows that fail to parse or convert are kept in the output
/// with the reason in the `error` column.
pub fn convert_csv<R: Read, W: Write>(reader: R, writer: W, unit: AngleUnit) -> std::result::Result<BatchSummary, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut rows = csv_reader.deserialize::<CsvPoint>();
    let mut summary = BatchSummary::default();
    let mut chunk: Vec<std::result::Result<CsvPoint, String>> = Vec::with_capacity(CSV_CHUNK_ROWS);

    loop {
        chunk.clear();
        chunk.extend(rows.by_ref().take(CSV_CHUNK_ROWS).map(|row| row.map_err(|e| e.to_string())));
        if chunk.is_empty() {
            break;
        }

        let results: Vec<CsvResult> = chunk.par_iter().map(|row| convert_row(row, unit)).collect();
        for result in &results {
            if result.error.is_some() {
                summary.failed += 1;
            } else {
                summary.converted += 1;
            }
            csv_writer.serialize(result)?;
        }
        summary.total += results.len();
    }
    csv_writer.flush()?;

    tracing::debug!(
        total = summary.total,
        converted = summary.converted,
        failed = summary.failed,
        unit = unit.name(),
        "csv batch converted"
    );
    Ok(summary)
}

/// Converts a CSV file on disk, writing the result to `output`
pub fn convert_csv_file(input: &Path, output: &Path, unit: AngleUnit) -> std::result::Result<BatchSummary, BatchError> {
    let reader = File::open(input)?;
    let writer = File::create(output)?;
    convert_csv(reader, writer, unit)
}

fn convert_row(row: &std::result::Result<CsvPoint, String>, unit: AngleUnit) -> CsvResult {
    let point = match row {
        Ok(point) => point,
        Err(message) => {
            return CsvResult {
                latitude: None,
                longitude: None,
                name: None,
                zone: None,
                hemisphere: None,
                easting: None,
                northing: None,
                error: Some(message.clone()),
            }
        }
    };

    let mut result = CsvResult {
        latitude: Some(point.latitude),
        longitude: Some(point.longitude),
        name: point.name.clone(),
        zone: None,
        hemisphere: None,
        easting: None,
        northing: None,
        error: None,
    };

    match to_utm(point.latitude, point.longitude, unit) {
        Ok(utm) => {
            result.zone = Some(utm.zone);
            result.hemisphere = Some(utm.hemisphere);
            result.easting = Some(utm.easting);
            result.northing = Some(utm.northing);
        }
        Err(e) => result.error = Some(e.to_string()),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConversionError, Field};
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_utm_many_preserves_order() {
        let points = vec![(0.0, 0.0), (85.0, 0.0), (-33.9, 151.0), (40.0, 116.0)];
        let results = to_utm_many(&points, AngleUnit::Degrees);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().zone, 31);
        assert_eq!(results[1].as_ref().unwrap_err().field(), Some(Field::Latitude));
        assert_eq!(results[2].as_ref().unwrap().zone, 56);
        assert_eq!(results[3].as_ref().unwrap().zone, 50);
    }

    #[test]
    fn test_to_lat_lon_many() {
        let coords = vec![
            UtmCoordinate::new(500_000.0, 0.0, 31, Hemisphere::North),
            UtmCoordinate::new(500_000.0, 0.0, 0, Hemisphere::North),
        ];
        let results = to_lat_lon_many(&coords, AngleUnit::Degrees);
        let first = results[0].as_ref().unwrap();
        assert!((first.longitude - 3.0).abs() < 1e-12);
        assert_eq!(results[1], Err(ConversionError::InvalidZone { zone: 0 }));
    }

    #[test]
    fn test_convert_csv_with_names() {
        let input = "latitude,longitude,name\n0,0,origin\n85,0,too far north\n-33.9,151,sydney\n";
        let mut output = Vec::new();

        let summary = convert_csv(Cursor::new(input), &mut output, AngleUnit::Degrees).unwrap();
        assert_eq!(summary, BatchSummary { total: 3, converted: 2, failed: 1 });

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "latitude,longitude,name,zone,hemisphere,easting,northing,error");
        assert!(lines[1].starts_with("0.0,0.0,origin,31,north,166021.44"));
        assert!(lines[2].starts_with("85.0,0.0,too far north,,,,,"));
        assert!(lines[2].contains("latitude 85 out of range"));
        assert!(lines[3].contains("sydney,56,south"));
    }

    #[test]
    fn test_convert_csv_keeps_malformed_rows() {
        let input = "latitude,longitude\n10,abc\n10,20\n";
        let mut output = Vec::new();

        let summary = convert_csv(Cursor::new(input), &mut output, AngleUnit::Degrees).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.failed, 1);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with(",,,,,,,"));
        assert!(lines[2].starts_with("10.0,20.0,,34,north"));
    }

    #[test]
    fn test_convert_csv_spans_several_chunks() {
        let rows = CSV_CHUNK_ROWS * 2 + 7;
        let mut input = String::from("latitude,longitude\n");
        for i in 0..rows {
            if i == CSV_CHUNK_ROWS {
                input.push_str("91,0\n");
            } else {
                input.push_str(&format!("{},{}\n", (i % 80) as f64, (i % 360) as f64 - 180.0));
            }
        }
        let mut output = Vec::new();

        let summary = convert_csv(Cursor::new(input), &mut output, AngleUnit::Degrees).unwrap();
        assert_eq!(summary, BatchSummary { total: rows, converted: rows - 1, failed: 1 });

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), rows + 1);
        assert!(lines[1].starts_with("0.0,-180.0,,1,north"));
        assert!(lines[CSV_CHUNK_ROWS + 1].starts_with("91.0,0.0,,,,,,"));
        assert!(lines[rows].starts_with(&format!("{}.0,", (rows - 1) % 80)));
    }

    #[test]
    fn test_convert_csv_file() {
        let mut input = NamedTempFile::new().unwrap();
        input.write_all(b"latitude,longitude\n0.0,0.0\n").unwrap();
        input.flush().unwrap();
        let output = NamedTempFile::new().unwrap();

        let summary = convert_csv_file(input.path(), output.path(), AngleUnit::Degrees).unwrap();
        assert_eq!(summary.converted, 1);

        let text = std::fs::read_to_string(output.path()).unwrap();
        assert!(text.contains(",31,north,"));
    }

    #[test]
    fn test_missing_input_file() {
        let err = convert_csv_file(Path::new("/nonexistent/points.csv"), Path::new("/tmp/out.csv"), AngleUnit::Degrees)
            .unwrap_err();
        assert!(matches!(err, BatchError::Io(_)));
    }
}
