//! Rate area identifiers and zipcode table rows

use std::fmt;

use serde::{Deserialize, Serialize};

/// A geographic pricing zone: state code plus area number
///
/// This is the join key between the zipcode table and the plan catalog.
/// Canonical string form is `"<state> <area>"`, e.g. `"NY 1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateAreaKey {
    /// Two-letter state code
    pub state: String,
    /// Rate area number within the state
    pub area: u32,
}

impl RateAreaKey {
    pub fn new(state: impl Into<String>, area: u32) -> Self {
        Self {
            state: state.into(),
            area,
        }
    }
}

impl fmt::Display for RateAreaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.state, self.area)
    }
}

/// A single row from the zipcode table
///
/// County columns are carried through from the source file but only zipcode,
/// state, and rate-area number feed the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipRecord {
    /// Five-digit zipcode (kept as a string to preserve leading zeros)
    pub zipcode: String,

    /// Two-letter state code
    pub state: String,

    /// County FIPS code
    pub county_code: String,

    /// County name
    pub county_name: String,

    /// Rate area number within the state
    pub rate_area: u32,
}

impl ZipRecord {
    /// The rate area this row assigns to its zipcode
    pub fn rate_area_key(&self) -> RateAreaKey {
        RateAreaKey::new(self.state.clone(), self.rate_area)
    }
}
