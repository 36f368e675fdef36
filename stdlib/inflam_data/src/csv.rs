//! Comma-separated inflammation files: one patient per line, one day per
//! field, no header.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::{debug, trace};

use crate::error::DataError;
use crate::table::InflammationTable;

/// Read and parse an inflammation CSV file.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<InflammationTable, DataError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_csv(&text)?;
    debug!(
        "loaded {}: {} patients x {} days",
        path.display(),
        table.n_patients(),
        table.n_days()
    );
    Ok(table)
}

/// Parse comma-separated numeric rows.
///
/// Fields are trimmed and blank lines skipped. Every row must carry as many
/// fields as the first one.
pub fn parse_csv(input: &str) -> Result<InflammationTable, DataError> {
    let mut values = Vec::new();
    let mut n_days: Option<usize> = None;
    let mut n_patients = 0usize;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            trace!("skipping blank line {line_no}");
            continue;
        }
        let start = values.len();
        for (col, field) in line.split(',').enumerate() {
            let field = field.trim();
            let value = field.parse::<f64>().map_err(|_| DataError::Parse {
                line: line_no,
                column: col + 1,
                value: field.to_string(),
            })?;
            values.push(value);
        }
        let found = values.len() - start;
        match n_days {
            None => n_days = Some(found),
            Some(expected) if expected != found => {
                return Err(DataError::Ragged {
                    line: line_no,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        n_patients += 1;
    }

    InflammationTable::from_shape(n_patients, n_days.unwrap_or(0), values)
}

/// Render a table as comma-separated text that [`parse_csv`] reads back unchanged.
pub fn to_csv_string(table: &InflammationTable) -> String {
    let mut out = String::new();
    for row in table.view().rows() {
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{value}");
        }
        out.push('\n');
    }
    out
}

pub fn write_csv<P: AsRef<Path>>(table: &InflammationTable, path: P) -> Result<(), DataError> {
    let path = path.as_ref();
    fs::write(path, to_csv_string(table)).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {}", path.display());
    Ok(())
}
