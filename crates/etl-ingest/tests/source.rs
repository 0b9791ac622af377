use std::fs;
use std::path::Path;

use etl_ingest::{BatchSource, CsvSource, IngestError, load_raw_table, source_paths};
use etl_model::{CellValue, TableKind};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

#[test]
fn merges_clean_and_messy_sources() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(
        dir.path(),
        "adjusters_clean.csv",
        "adjuster_id,name,region,team_lead_id\n1,Ann Lee,West,2\n2,Bo Chan,Midwest,3\n",
    );
    write(
        dir.path(),
        "adjusters_messy.csv",
        "adjuster_id,name,region,team_lead_id,notes\n3,cy diaz,  west ,,late\n",
    );

    let batch = load_raw_table(dir.path(), TableKind::Adjusters).expect("load adjusters");

    assert_eq!(
        batch.columns,
        vec!["adjuster_id", "name", "region", "team_lead_id", "notes"]
    );
    assert_eq!(batch.indices(), vec![0, 1, 2]);
    let messy = &batch.rows[2];
    assert_eq!(messy.get("adjuster_id"), Some(&CellValue::Integer(3)));
    assert_eq!(messy.get("region"), Some(&CellValue::text("  west ")));
    assert_eq!(messy.get("team_lead_id"), Some(&CellValue::Missing));
    assert_eq!(messy.get("notes"), Some(&CellValue::text("late")));
    assert!(batch.rows[0].get("notes").is_none());
}

#[test]
fn single_source_is_enough() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "dates_messy.csv", "date_id,day\n1,\n2,x\n");

    let source = CsvSource::new(dir.path());
    let batch = source.load(TableKind::Dates).expect("load dates");

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.rows[1].get("day"), Some(&CellValue::text("x")));
}

#[test]
fn missing_sources_are_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_raw_table(dir.path(), TableKind::Claims).unwrap_err();
    assert!(matches!(err, IngestError::NoSourceData { ref table, .. } if table == "claims"));
    assert!(err.to_string().contains("no data found for table claims"));
}

#[test]
fn short_records_leave_columns_absent() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(
        dir.path(),
        "policies_clean.csv",
        "policy_id,policy_type,start_date,end_date,premium\n7,Auto\n",
    );
    let batch = load_raw_table(dir.path(), TableKind::Policies).expect("load policies");
    let row = &batch.rows[0];
    assert_eq!(row.get("policy_type"), Some(&CellValue::text("Auto")));
    assert!(row.get("premium").is_none());
}

#[test]
fn source_paths_list_existing_variants_clean_first() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "claims_messy.csv", "claim_id\n1\n");
    write(dir.path(), "claims_clean.csv", "claim_id\n2\n");
    write(dir.path(), "customers_messy.csv", "customer_id\n1\n");

    let claims: Vec<_> = source_paths(dir.path(), TableKind::Claims)
        .into_iter()
        .map(|(variant, path)| {
            let name = path.file_name().map(std::ffi::OsStr::to_os_string);
            (variant.suffix(), name)
        })
        .collect();
    assert_eq!(
        claims,
        vec![
            ("clean", Some("claims_clean.csv".into())),
            ("messy", Some("claims_messy.csv".into())),
        ]
    );
    assert_eq!(source_paths(dir.path(), TableKind::Customers).len(), 1);
    assert!(source_paths(dir.path(), TableKind::Dates).is_empty());
}
