//! Controller for the inflammation analysis tool: loads each input file,
//! computes its daily statistics and hands them to the configured presenters.

pub mod config;
pub mod controller;

pub use config::{Config, ConfigError, PlotConfig, TextConfig};
pub use controller::{build_view, presenters_for, run, RunError, RunOptions, ThresholdQuery};
