//! SLCSP CLI
//!
//! Reads the three reference tables, computes the benchmark rate for each
//! target zipcode, and writes the report CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use slcsp::plans::loader::load_silver_index;
use slcsp::rate_area::loader::load_resolver;
use slcsp::slcsp::loader::load_targets;
use slcsp::slcsp::write_report;
use slcsp::SlcspCalculator;

#[derive(Debug, Parser)]
#[command(name = "slcsp", about = "Second-lowest-cost silver plan calculator")]
struct Args {
    /// Zipcode table (zipcode,state,county_code,name,rate_area)
    #[arg(long, default_value = "data/zips.csv")]
    zips: PathBuf,

    /// Plan catalog (plan_id,state,metal_level,rate,rate_area)
    #[arg(long, default_value = "data/plans.csv")]
    plans: PathBuf,

    /// Target zipcodes needing a rate (zipcode,rate); defines output order
    #[arg(long, default_value = "data/slcsp.csv")]
    targets: PathBuf,

    /// Where to write the report
    #[arg(long, short, default_value = "data/output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();

    // The two lookup tables are independent; build them concurrently.
    // Both are complete before the calculator sees either.
    let (resolver, index) = rayon::join(
        || load_resolver(&args.zips).map_err(|e| e.to_string()),
        || load_silver_index(&args.plans).map_err(|e| e.to_string()),
    );
    let resolver = resolver
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("loading zipcode table {}", args.zips.display()))?;
    let index = index
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("loading plan catalog {}", args.plans.display()))?;

    let targets = load_targets(&args.targets)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("loading target list {}", args.targets.display()))?;

    let calculator = SlcspCalculator::new(&resolver, &index);
    let rows = calculator.report(targets);
    let determined = rows.iter().filter(|r| r.rate.is_some()).count();

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, &rows).map_err(|e| anyhow::anyhow!("{e}"))?;

    println!(
        "Wrote {} rows ({} with a rate) to {} in {:?}",
        rows.len(),
        determined,
        args.output.display(),
        start.elapsed()
    );

    Ok(())
}
