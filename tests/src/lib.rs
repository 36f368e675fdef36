//! Shared fixtures for the workspace integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use inflam_data::{parse_csv, InflammationTable};

pub const SMALL_CSV: &str = include_str!("../fixtures/inflammation-small.csv");

/// Six patients over twelve days.
pub fn small_table() -> InflammationTable {
    parse_csv(SMALL_CSV).expect("small fixture parses")
}

/// Copy the small fixture into `dir` under `name` and return its path.
pub fn write_small_fixture(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, SMALL_CSV).expect("write fixture");
    path
}
