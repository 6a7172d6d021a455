//! Plan catalog rows

use crate::rate::Rate;
use crate::rate_area::RateAreaKey;

/// Metal tier whose rates feed the benchmark calculation
pub const SILVER: &str = "Silver";

/// A single plan from the catalog
#[derive(Debug, Clone)]
pub struct Plan {
    /// Marketplace plan identifier
    pub plan_id: String,

    /// Two-letter state code
    pub state: String,

    /// Metal level classification (Bronze, Silver, Gold, ...)
    ///
    /// Kept as the raw catalog string; the index compares it to the
    /// configured tier exactly, case-sensitively.
    pub metal_level: String,

    /// Monthly premium
    pub rate: Rate,

    /// Rate area number within the state
    pub rate_area: u32,
}

impl Plan {
    /// The rate area this plan is priced for
    pub fn rate_area_key(&self) -> RateAreaKey {
        RateAreaKey::new(self.state.clone(), self.rate_area)
    }
}
