//! Second-lowest-cost silver plan selection

use log::debug;

use super::OutputRow;
use crate::plans::SilverRateIndex;
use crate::rate::Rate;
use crate::rate_area::{RateAreaResolver, Resolution};

/// Terminal state of the calculation for one zipcode
///
/// Only `Rate` carries a value; the other three all render as an empty rate
/// field in the report. They stay distinguishable here so callers (and the
/// debug log) can tell why a zipcode came up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlcspOutcome {
    /// Second-lowest distinct silver rate in the zipcode's rate area
    Rate(Rate),
    /// Zipcode rows disagree on rate area
    AmbiguousArea,
    /// Zipcode absent from the zipcode table
    UnknownZipcode,
    /// Fewer than two distinct silver rates in the area
    TooFewSilverRates,
}

impl SlcspOutcome {
    /// The benchmark rate, if one was determined
    pub fn rate(&self) -> Option<Rate> {
        match self {
            SlcspOutcome::Rate(rate) => Some(*rate),
            _ => None,
        }
    }
}

/// Calculator over fully built, read-only lookup tables
///
/// Borrows the resolver and index; both builds must have finished before the
/// first query.
#[derive(Debug, Clone, Copy)]
pub struct SlcspCalculator<'a> {
    resolver: &'a RateAreaResolver,
    index: &'a SilverRateIndex,
}

impl<'a> SlcspCalculator<'a> {
    pub fn new(resolver: &'a RateAreaResolver, index: &'a SilverRateIndex) -> Self {
        Self { resolver, index }
    }

    /// Compute the SLCSP rate for one zipcode
    pub fn rate_for(&self, zipcode: &str) -> SlcspOutcome {
        let key = match self.resolver.resolve(zipcode) {
            Resolution::Resolved(key) => key,
            Resolution::Ambiguous => {
                debug!("zipcode {}: ambiguous rate area, no rate", zipcode);
                return SlcspOutcome::AmbiguousArea;
            }
            Resolution::Unknown => {
                debug!("zipcode {}: not in zipcode table, no rate", zipcode);
                return SlcspOutcome::UnknownZipcode;
            }
        };

        // The ordered set iterates ascending, so the second element is the
        // second-lowest distinct rate
        let second_lowest = self
            .index
            .rates_for(&key)
            .and_then(|rates| rates.iter().nth(1).copied());

        match second_lowest {
            Some(rate) => SlcspOutcome::Rate(rate),
            None => {
                debug!(
                    "zipcode {}: fewer than two distinct {} rates in area {}, no rate",
                    zipcode,
                    self.index.tier(),
                    key
                );
                SlcspOutcome::TooFewSilverRates
            }
        }
    }

    /// Compute one output row per target zipcode, preserving input order
    pub fn report<I, S>(&self, targets: I) -> Vec<OutputRow>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        targets
            .into_iter()
            .map(|target| {
                let zipcode = target.into();
                let rate = self.rate_for(&zipcode).rate();
                OutputRow { zipcode, rate }
            })
            .collect()
    }
}
