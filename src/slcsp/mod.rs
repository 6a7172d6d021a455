//! SLCSP benchmark calculation and report output

mod calculator;
mod output;
pub mod loader;

pub use calculator::{SlcspCalculator, SlcspOutcome};
pub use output::{write_report, OutputRow, REPORT_HEADER};
