use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("patient index {index} out of range for table with {n_patients} patients")]
    PatientIndexOutOfRange { index: usize, n_patients: usize },
}
