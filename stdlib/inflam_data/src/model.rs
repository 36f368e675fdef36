//! People taking part in an inflammation study.
//!
//! These records stand on their own; the table-based statistics do not use them.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single reading taken on a given study day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub day: u32,
    pub value: f64,
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A patient and their readings, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(flatten)]
    pub person: Person,
    #[serde(default)]
    pub observations: Vec<Observation>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            person: Person::new(name),
            observations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// Record a reading. Without an explicit `day` the reading goes on the day
    /// after the latest one recorded so far, or day 0 for the first reading.
    pub fn add_observation(&mut self, value: f64, day: Option<u32>) -> &Observation {
        let day = day.unwrap_or_else(|| self.next_day());
        self.observations.push(Observation { day, value });
        &self.observations[self.observations.len() - 1]
    }

    fn next_day(&self) -> u32 {
        self.observations
            .iter()
            .map(|o| o.day)
            .max()
            .map_or(0, |d| d.saturating_add(1))
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}

/// A doctor looking after patients owned elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor<'a> {
    pub person: Person,
    patients: Vec<&'a Patient>,
}

impl<'a> Doctor<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            person: Person::new(name),
            patients: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn add_patient(&mut self, patient: &'a Patient) {
        self.patients.push(patient);
    }

    pub fn patients(&self) -> &[&'a Patient] {
        &self.patients
    }
}

impl fmt::Display for Doctor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}
