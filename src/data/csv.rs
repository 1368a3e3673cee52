//! CSV format ingestion
//!
//! Loads dense rows from CSV files where:
//! - The last column is the label
//! - All other columns are features
//! - The first row can be headers (automatically detected)
//! - Blank lines and `#` comments are skipped

use crate::core::{ModelError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Dense CSV dataset: ordered raw rows ready for the dataset store
#[derive(Debug, Clone)]
pub struct CsvDataset {
    rows: Vec<Vec<f64>>,
}

impl CsvDataset {
    /// Load a dataset from a CSV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(ModelError::IoError)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dataset from a reader with automatic header detection
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, true)
    }

    /// Load a dataset from a reader with an explicit header option
    pub fn from_reader_with_options<R: BufRead>(
        reader: R,
        auto_detect_header: bool,
    ) -> Result<Self> {
        let mut rows = Vec::new();
        let mut expected_fields: Option<usize> = None;

        for (line_number, line) in reader.lines().enumerate() {
            let line = line.map_err(ModelError::IoError)?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if rows.is_empty() && auto_detect_header && is_header_line(line) {
                continue;
            }

            let row = parse_data_line(line, line_number + 1)?;
            if let Some(expected) = expected_fields {
                if row.len() != expected {
                    return Err(ModelError::ParseError(format!(
                        "line {}: expected {} fields, got {}",
                        line_number + 1,
                        expected,
                        row.len()
                    )));
                }
            } else {
                if row.len() < 2 {
                    return Err(ModelError::ParseError(format!(
                        "line {}: need at least one feature and a label",
                        line_number + 1
                    )));
                }
                expected_fields = Some(row.len());
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        Ok(Self { rows })
    }

    /// Raw rows in file order, last field being the label
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Consume the dataset, yielding its rows
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    /// Labels in file order
    pub fn labels(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| *row.last().unwrap_or(&0.0))
            .collect()
    }

    /// Number of feature columns (label excluded)
    pub fn dim(&self) -> usize {
        self.rows.first().map(|r| r.len() - 1).unwrap_or(0)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Check if a line appears to be a header (most fields non-numeric)
fn is_header_line(line: &str) -> bool {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 2 {
        return false;
    }

    let non_numeric = fields
        .iter()
        .filter(|field| field.trim().parse::<f64>().is_err())
        .count();
    non_numeric > fields.len() / 2
}

/// Parse a CSV data line into a dense row
fn parse_data_line(line: &str, line_number: usize) -> Result<Vec<f64>> {
    line.split(',')
        .map(|field| {
            field.trim().parse::<f64>().map_err(|_| {
                ModelError::ParseError(format!(
                    "line {line_number}: invalid numeric field '{}'",
                    field.trim()
                ))
            })
        })
        .collect()
}
