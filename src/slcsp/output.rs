//! Report rows and CSV-shaped output writing

use std::error::Error;
use std::io::Write;

use crate::rate::Rate;

/// Header line of the report (the space after the comma is part of the
/// expected format)
pub const REPORT_HEADER: &str = "zipcode, rate";

/// One line of the report: the target zipcode and its benchmark rate, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub zipcode: String,
    pub rate: Option<Rate>,
}

impl OutputRow {
    /// Render as a report line: `<zipcode>,<rate>` with two fraction digits,
    /// or `<zipcode>,` when no rate was determined
    pub fn to_line(&self) -> String {
        match self.rate {
            Some(rate) => format!("{},{}", self.zipcode, rate),
            None => format!("{},", self.zipcode),
        }
    }
}

/// Write the full report: header first, then one line per row in order
pub fn write_report<W: Write>(writer: &mut W, rows: &[OutputRow]) -> Result<(), Box<dyn Error>> {
    writeln!(writer, "{}", REPORT_HEADER)?;
    for row in rows {
        writeln!(writer, "{}", row.to_line())?;
    }
    Ok(())
}
