//! Load the target zipcode list from slcsp.csv
//!
//! The source file ships with an empty `rate` column that the report fills
//! in; only the zipcode column is read here. Row order defines output order.

use std::error::Error;
use std::path::Path;

use csv::Reader;
use log::info;

/// Raw CSV row matching slcsp.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "zipcode")]
    zipcode: String,
    #[serde(rename = "rate")]
    _rate: String,
}

/// Load target zipcodes from a CSV file, in file order
pub fn load_targets<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    read_targets(Reader::from_path(path)?)
}

/// Load target zipcodes from any reader (e.g., string buffer)
pub fn load_targets_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<String>, Box<dyn Error>> {
    read_targets(Reader::from_reader(reader))
}

fn read_targets<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<String>, Box<dyn Error>> {
    let mut targets = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        targets.push(row.zipcode);
    }

    info!("loaded {} target zipcodes", targets.len());
    Ok(targets)
}
