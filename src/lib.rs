//! SLCSP - Second-lowest-cost silver plan benchmark rate calculator
//!
//! This library provides:
//! - Zipcode to rate-area resolution with permanent ambiguity marking
//! - Per-rate-area indexing of distinct silver-tier plan rates
//! - Second-lowest-rate selection over the two lookup tables
//! - CSV loaders for the three reference tables and a report writer

pub mod rate;
pub mod rate_area;
pub mod plans;
pub mod slcsp;

// Re-export commonly used types
pub use rate::Rate;
pub use rate_area::{RateAreaKey, RateAreaResolver, Resolution};
pub use plans::{Plan, SilverRateIndex};
pub use slcsp::{OutputRow, SlcspCalculator, SlcspOutcome};
