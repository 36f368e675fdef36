use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::DataError;

/// Patient-by-day grid of inflammation readings.
///
/// Rows follow the order of patients in the source, columns the order of days.
#[derive(Debug, Clone, PartialEq)]
pub struct InflammationTable {
    data: Array2<f64>,
}

impl InflammationTable {
    pub fn new(data: Array2<f64>) -> Self {
        Self { data }
    }

    /// A table with no patients and no days.
    pub fn empty() -> Self {
        Self {
            data: Array2::zeros((0, 0)),
        }
    }

    /// Build a table from row vectors. Every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        let n_patients = rows.len();
        let n_days = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(n_patients * n_days);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_days {
                return Err(DataError::Ragged {
                    line: i + 1,
                    expected: n_days,
                    found: row.len(),
                });
            }
            values.extend(row);
        }
        Self::from_shape(n_patients, n_days, values)
    }

    pub(crate) fn from_shape(
        n_patients: usize,
        n_days: usize,
        values: Vec<f64>,
    ) -> Result<Self, DataError> {
        let data = Array2::from_shape_vec((n_patients, n_days), values)?;
        Ok(Self { data })
    }

    pub fn n_patients(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_days(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Readings of one patient, or `None` when the index is past the last row.
    pub fn patient(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.n_patients()).then(|| self.data.row(index))
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }
}
