//! Load the zipcode table from zips.csv

use std::error::Error;
use std::path::Path;

use csv::Reader;
use log::info;

use super::{RateAreaResolver, ZipRecord};

/// Raw CSV row matching zips.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "zipcode")]
    zipcode: String,
    #[serde(rename = "state")]
    state: String,
    #[serde(rename = "county_code")]
    county_code: String,
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "rate_area")]
    rate_area: u32,
}

impl CsvRow {
    fn into_record(self) -> ZipRecord {
        ZipRecord {
            zipcode: self.zipcode,
            state: self.state,
            county_code: self.county_code,
            county_name: self.name,
            rate_area: self.rate_area,
        }
    }
}

/// Build a resolver from a zips CSV file
pub fn load_resolver<P: AsRef<Path>>(path: P) -> Result<RateAreaResolver, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    build_resolver(reader)
}

/// Build a resolver from any reader (e.g., string buffer, network stream)
pub fn load_resolver_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<RateAreaResolver, Box<dyn Error>> {
    build_resolver(Reader::from_reader(reader))
}

fn build_resolver<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<RateAreaResolver, Box<dyn Error>> {
    let mut resolver = RateAreaResolver::new();
    let mut rows = 0usize;

    // The resolver is built while the table streams; no intermediate Vec
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let record = row.into_record();
        let key = record.rate_area_key();
        resolver.observe(record.zipcode, key);
        rows += 1;
    }

    info!(
        "loaded {} zipcode rows covering {} distinct zipcodes",
        rows,
        resolver.len()
    );
    Ok(resolver)
}
