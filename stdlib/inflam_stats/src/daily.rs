use inflam_data::InflammationTable;
use ndarray::Axis;

use crate::error::StatsError;

const DAY_AXIS: Axis = Axis(0);

/// Undefined result for a table without patients: one `NaN` per day.
fn undefined(table: &InflammationTable) -> Vec<f64> {
    vec![f64::NAN; table.n_days()]
}

/// Larger of two readings; a `NaN` on either side wins.
fn max_propagating_nan(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.max(x)
    }
}

fn min_propagating_nan(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.min(x)
    }
}

/// Arithmetic mean of each day across all patients.
pub fn daily_mean(table: &InflammationTable) -> Vec<f64> {
    table
        .view()
        .mean_axis(DAY_AXIS)
        .map_or_else(|| undefined(table), |m| m.to_vec())
}

/// Highest reading of each day across all patients. A day with any `NaN`
/// reading yields `NaN`.
pub fn daily_max(table: &InflammationTable) -> Vec<f64> {
    if table.n_patients() == 0 {
        return undefined(table);
    }
    table
        .view()
        .fold_axis(DAY_AXIS, f64::NEG_INFINITY, |&acc, &x| max_propagating_nan(acc, x))
        .to_vec()
}

/// Lowest reading of each day across all patients. A day with any `NaN`
/// reading yields `NaN`.
pub fn daily_min(table: &InflammationTable) -> Vec<f64> {
    if table.n_patients() == 0 {
        return undefined(table);
    }
    table
        .view()
        .fold_axis(DAY_AXIS, f64::INFINITY, |&acc, &x| min_propagating_nan(acc, x))
        .to_vec()
}

/// Population standard deviation (divisor n) of each day across all patients.
pub fn daily_std_dev(table: &InflammationTable) -> Vec<f64> {
    if table.n_patients() == 0 {
        return undefined(table);
    }
    table.view().std_axis(DAY_AXIS, 0.0).to_vec()
}

/// Number of readings of one patient strictly greater than `threshold`.
pub fn daily_above_threshold(
    table: &InflammationTable,
    threshold: f64,
    patient_index: usize,
) -> Result<usize, StatsError> {
    let row = table
        .patient(patient_index)
        .ok_or(StatsError::PatientIndexOutOfRange {
            index: patient_index,
            n_patients: table.n_patients(),
        })?;
    Ok(row.iter().map(|&v| usize::from(v > threshold)).sum())
}
