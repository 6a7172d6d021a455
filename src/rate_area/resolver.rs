//! Zipcode to rate area resolution
//!
//! A zipcode can span several counties. When every row for a zipcode agrees
//! on the rate area the assignment is usable; when two rows disagree the
//! zipcode is marked ambiguous and stays that way for the rest of the run.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;

use super::{RateAreaKey, ZipRecord};

/// Stored assignment for a zipcode that appeared in the source table
#[derive(Debug, Clone, PartialEq, Eq)]
enum Assignment {
    /// Every observation so far agrees on this rate area
    Area(RateAreaKey),
    /// Two observations disagreed; absorbing, never reverts
    Ambiguous,
}

/// Result of resolving a zipcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The zipcode maps to exactly one rate area
    Resolved(RateAreaKey),
    /// Source rows for the zipcode disagree on rate area
    Ambiguous,
    /// The zipcode never appeared in the source table
    Unknown,
}

/// Mapping from zipcode to its (unambiguous) rate area
#[derive(Debug, Clone, Default)]
pub struct RateAreaResolver {
    assignments: HashMap<String, Assignment>,
}

impl RateAreaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver from a complete set of zipcode rows
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ZipRecord>,
    {
        let mut resolver = Self::new();
        for record in records {
            let key = record.rate_area_key();
            resolver.observe(record.zipcode, key);
        }
        resolver
    }

    /// Record one source-table observation of `zipcode -> key`
    ///
    /// The first observation for a zipcode records the key. A later
    /// observation with a differing key demotes the zipcode to ambiguous;
    /// once ambiguous it never recovers, even if a third row happens to
    /// match one of the earlier values.
    pub fn observe(&mut self, zipcode: String, key: RateAreaKey) {
        match self.assignments.entry(zipcode) {
            Entry::Vacant(slot) => {
                slot.insert(Assignment::Area(key));
            }
            Entry::Occupied(mut slot) => {
                if let Assignment::Area(existing) = slot.get() {
                    if *existing != key {
                        debug!(
                            "zipcode {} spans rate areas {} and {}, marking ambiguous",
                            slot.key(),
                            existing,
                            key
                        );
                        slot.insert(Assignment::Ambiguous);
                    }
                }
                // already-ambiguous stays ambiguous; a matching
                // observation is a no-op
            }
        }
    }

    /// Look up the rate area for a zipcode
    pub fn resolve(&self, zipcode: &str) -> Resolution {
        match self.assignments.get(zipcode) {
            Some(Assignment::Area(key)) => Resolution::Resolved(key.clone()),
            Some(Assignment::Ambiguous) => Resolution::Ambiguous,
            None => Resolution::Unknown,
        }
    }

    /// Number of distinct zipcodes observed (ambiguous ones included)
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
