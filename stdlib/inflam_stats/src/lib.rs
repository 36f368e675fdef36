//! Per-day summary statistics for inflammation tables.
//!
//! All functions are pure reductions: the daily statistics reduce across
//! patients (one value per day), the threshold count reduces one patient's row.
//!
//! ```
//! use inflam_data::InflammationTable;
//! use inflam_stats::{daily_above_threshold, daily_max, daily_mean, daily_min};
//! let t = InflammationTable::from_rows(vec![
//!     vec![1.0, 2.0],
//!     vec![3.0, 4.0],
//!     vec![5.0, 6.0],
//! ]).unwrap();
//! assert_eq!(daily_mean(&t), vec![3.0, 4.0]);
//! assert_eq!(daily_max(&t), vec![5.0, 6.0]);
//! assert_eq!(daily_min(&t), vec![1.0, 2.0]);
//! assert_eq!(daily_above_threshold(&t, 3.0, 2).unwrap(), 2);
//! ```

mod daily;
mod error;
mod summary;

pub use daily::*;
pub use error::StatsError;
pub use summary::DailyStatistics;
