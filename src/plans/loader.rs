//! Load the plan catalog from plans.csv

use std::error::Error;
use std::path::Path;

use csv::Reader;

use super::{Plan, SilverRateIndex};
use crate::rate::Rate;

/// Raw CSV row matching plans.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "plan_id")]
    plan_id: String,
    #[serde(rename = "state")]
    state: String,
    #[serde(rename = "metal_level")]
    metal_level: String,
    #[serde(rename = "rate")]
    rate: String,
    #[serde(rename = "rate_area")]
    rate_area: u32,
}

impl CsvRow {
    fn into_plan(self) -> Result<Plan, Box<dyn Error>> {
        // A garbage rate field is a data-quality error, not an empty result
        let rate: Rate = self
            .rate
            .parse()
            .map_err(|e| format!("plan {}: {}", self.plan_id, e))?;

        Ok(Plan {
            plan_id: self.plan_id,
            state: self.state,
            metal_level: self.metal_level,
            rate,
            rate_area: self.rate_area,
        })
    }
}

/// Build a silver rate index from a plans CSV file
pub fn load_silver_index<P: AsRef<Path>>(path: P) -> Result<SilverRateIndex, Box<dyn Error>> {
    build_index(Reader::from_path(path)?)
}

/// Build a silver rate index from any reader (e.g., string buffer)
pub fn load_silver_index_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<SilverRateIndex, Box<dyn Error>> {
    build_index(Reader::from_reader(reader))
}

fn build_index<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<SilverRateIndex, Box<dyn Error>> {
    let mut index = SilverRateIndex::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        index.add(&row.into_plan()?);
    }

    index.log_summary();
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_area::RateAreaKey;

    const PLANS_CSV: &str = "\
plan_id,state,metal_level,rate,rate_area
74449NR9870320,NY,Silver,100.00,1
74449NR9870321,NY,Silver,150.00,1
74449NR9870322,NY,Gold,200.00,1
28850TX0560001,TX,Silver,110.00,3
28850TX0560002,TX,Silver,110.00,3
";

    #[test]
    fn test_load_from_reader() {
        let index = load_silver_index_from_reader(PLANS_CSV.as_bytes()).unwrap();

        let ny = index.rates_for(&RateAreaKey::new("NY", 1)).unwrap();
        assert_eq!(ny.len(), 2);

        // duplicate 110.00 rows collapse
        let tx = index.rates_for(&RateAreaKey::new("TX", 3)).unwrap();
        assert_eq!(tx.len(), 1);
    }

    #[test]
    fn test_non_numeric_rate_fails_loudly() {
        let csv = "\
plan_id,state,metal_level,rate,rate_area
74449NR9870320,NY,Silver,free,1
";
        let err = load_silver_index_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("74449NR9870320"));
    }
}
