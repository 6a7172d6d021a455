//! End-to-end test over the reference fixture: three in-memory CSV tables in,
//! exact report bytes out.

use slcsp::plans::loader::load_silver_index_from_reader;
use slcsp::rate_area::loader::load_resolver_from_reader;
use slcsp::slcsp::loader::load_targets_from_reader;
use slcsp::slcsp::write_report;
use slcsp::SlcspCalculator;

const ZIPS_CSV: &str = "\
zipcode,state,county_code,name,rate_area
12345,NY,36001,Albany,1
23456,CA,06037,Los Angeles,2
23456,CA,06059,Orange,3
34567,TX,48453,Travis,3
45678,WA,53033,King,4
";

const PLANS_CSV: &str = "\
plan_id,state,metal_level,rate,rate_area
11111NY0010001,NY,Silver,100,1
11111NY0010002,NY,Silver,150,1
11111NY0010003,NY,Gold,175,1
22222CA0020001,CA,Silver,120,2
22222CA0020002,CA,Silver,130,2
33333TX0030001,TX,Silver,110,3
33333TX0030002,TX,Silver,140,3
44444WA0040001,WA,Silver,105,4
44444WA0040002,WA,Silver,125,4
";

const TARGETS_CSV: &str = "\
zipcode,rate
12345,
23456,
34567,
45678,
";

const EXPECTED: &str = "\
zipcode, rate
12345,150.00
23456,
34567,140.00
45678,125.00
";

fn run_fixture() -> String {
    let resolver = load_resolver_from_reader(ZIPS_CSV.as_bytes()).unwrap();
    let index = load_silver_index_from_reader(PLANS_CSV.as_bytes()).unwrap();
    let targets = load_targets_from_reader(TARGETS_CSV.as_bytes()).unwrap();

    let calculator = SlcspCalculator::new(&resolver, &index);
    let rows = calculator.report(targets);

    let mut buf = Vec::new();
    write_report(&mut buf, &rows).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_reference_fixture_output() {
    assert_eq!(run_fixture(), EXPECTED);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    assert_eq!(run_fixture(), run_fixture());
}
