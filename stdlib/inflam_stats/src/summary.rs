use inflam_data::InflammationTable;
use serde::Serialize;

use crate::daily::{daily_max, daily_mean, daily_min, daily_std_dev};

/// The daily statistics computed for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStatistics {
    pub average: Vec<f64>,
    pub max: Vec<f64>,
    pub min: Vec<f64>,
    pub std_dev: Vec<f64>,
}

impl DailyStatistics {
    pub fn compute(table: &InflammationTable) -> Self {
        Self {
            average: daily_mean(table),
            max: daily_max(table),
            min: daily_min(table),
            std_dev: daily_std_dev(table),
        }
    }

    pub fn n_days(&self) -> usize {
        self.average.len()
    }

    /// Named vectors in display order.
    pub fn entries(&self) -> [(&'static str, &[f64]); 4] {
        [
            ("average", self.average.as_slice()),
            ("max", self.max.as_slice()),
            ("min", self.min.as_slice()),
            ("std_dev", self.std_dev.as_slice()),
        ]
    }
}
