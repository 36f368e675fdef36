//! Inflammation data primitives.
//!
//! Patients' readings are held in an [`InflammationTable`]: each row holds the
//! readings of one patient, each column one day across all patients.
//!
//! Loading a table from comma-separated text:
//! ```
//! use inflam_data::parse_csv;
//! let table = parse_csv("0,1,2\n1,2,3\n").unwrap();
//! assert_eq!(table.n_patients(), 2);
//! assert_eq!(table.n_days(), 3);
//! ```
//!
//! Patient records with automatic day numbering:
//! ```
//! use inflam_data::Patient;
//! let mut alice = Patient::new("Alice");
//! assert_eq!(alice.add_observation(3.0, None).day, 0);
//! assert_eq!(alice.add_observation(4.0, None).day, 1);
//! ```

pub mod csv;
pub mod error;
pub mod model;
pub mod table;

pub use csv::{load_csv, parse_csv, to_csv_string, write_csv};
pub use error::DataError;
pub use model::{Doctor, Observation, Patient, Person};
pub use table::InflammationTable;
