//! Per-rate-area index of distinct silver plan rates

use std::collections::{BTreeSet, HashMap};

use log::info;

use super::{Plan, SILVER};
use crate::rate::Rate;
use crate::rate_area::RateAreaKey;

/// Distinct rates of the configured metal tier, grouped by rate area
///
/// Set semantics: two plans in the same area with the same rate contribute
/// one entry. The ordered set iterates ascending, which is what the
/// second-lowest selection reads off directly.
#[derive(Debug, Clone)]
pub struct SilverRateIndex {
    tier: String,
    rates: HashMap<RateAreaKey, BTreeSet<Rate>>,
}

impl SilverRateIndex {
    /// Index for the standard Silver tier
    pub fn new() -> Self {
        Self::for_tier(SILVER)
    }

    /// Index for an arbitrary tier (exact, case-sensitive match)
    pub fn for_tier(tier: impl Into<String>) -> Self {
        Self {
            tier: tier.into(),
            rates: HashMap::new(),
        }
    }

    /// Build an index from a complete plan catalog
    pub fn from_plans<I>(plans: I) -> Self
    where
        I: IntoIterator<Item = Plan>,
    {
        let mut index = Self::new();
        for plan in plans {
            index.add(&plan);
        }
        index
    }

    /// The metal tier this index collects
    pub fn tier(&self) -> &str {
        &self.tier
    }

    /// Record one catalog row; plans of any other tier are ignored
    pub fn add(&mut self, plan: &Plan) {
        if plan.metal_level != self.tier {
            return;
        }
        self.rates
            .entry(plan.rate_area_key())
            .or_default()
            .insert(plan.rate);
    }

    /// Distinct rates for a rate area, ascending; `None` if the area has no
    /// plans of the configured tier
    pub fn rates_for(&self, key: &RateAreaKey) -> Option<&BTreeSet<Rate>> {
        self.rates.get(key)
    }

    /// Number of rate areas with at least one rate of the configured tier
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub(crate) fn log_summary(&self) {
        info!(
            "indexed {} tier rates across {} rate areas",
            self.tier,
            self.rates.len()
        );
    }
}

impl Default for SilverRateIndex {
    fn default() -> Self {
        Self::new()
    }
}
