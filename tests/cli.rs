use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_CSV: &str = "\
LeadId,LeadDate,LeadCheckin,LeadCheckout,Revenue,Commission,HotelID,HotelCountry,HotelCity
X1,01/02/2023 10:00:00,02/02/2023 10:00:00,03/02/2023 10:00:00,100.50,10.00,42, France ,Paris
X2,2023-05-10 08:15:00,2023-05-11 12:00:00,2023-05-14 11:00:00,80,8,-5,Not Applicable,
";

fn leadbook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("leadbook").unwrap();
    cmd.env("LEADBOOK_DATA_DIR", data_dir);
    cmd
}

#[test]
fn test_import_then_export_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("report.csv");
    fs::write(&csv_path, SAMPLE_CSV).unwrap();

    leadbook(dir.path())
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully imported 2 records."));

    let out_path = dir.path().join("out.csv");
    leadbook(dir.path())
        .args(["export", "--output", out_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 bookings"));

    let exported = fs::read_to_string(&out_path).unwrap();
    let mut lines = exported.lines();
    assert_eq!(
        lines.next().unwrap(),
        "LeadId,LeadDate,LeadCheckin,LeadCheckout,Revenue,Commission,Hotel Location"
    );
    // Day-first parse wins: 01/02/2023 is February 1st
    assert_eq!(
        lines.next().unwrap(),
        "X1,2023-02-01 10:00:00,2023-02-02 10:00:00,2023-02-03 10:00:00,100.50,10.00,\"Paris, France (ID: 42)\""
    );
    assert_eq!(
        lines.next().unwrap(),
        "X2,2023-05-10 08:15:00,2023-05-11 12:00:00,2023-05-14 11:00:00,80.00,8.00,None"
    );
}

#[test]
fn test_reimport_keeps_table_state_and_counts() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("report.csv");
    fs::write(&csv_path, SAMPLE_CSV).unwrap();

    for _ in 0..2 {
        leadbook(dir.path())
            .args(["import", csv_path.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Successfully imported 2 records."));
    }

    leadbook(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookings:      2"))
        .stdout(predicate::str::contains("Import runs:   2"));
}

#[test]
fn test_import_counts_bad_rows_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("report.csv");
    let csv = "\
LeadId,LeadDate,LeadCheckin,LeadCheckout,Revenue,Commission
X1,not a date,02/02/2023 10:00:00,03/02/2023 10:00:00,100,10
X2,2023-05-10 08:15:00,2023-05-11 12:00:00,2023-05-14 11:00:00,80,8
";
    fs::write(&csv_path, csv).unwrap();

    leadbook(dir.path())
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully imported 1 records."))
        .stdout(predicate::str::contains("1 records failed to import."));
}

#[test]
fn test_import_garbage_header_fails() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("garbage.csv");
    fs::write(&csv_path, [0xffu8, 0xfe, 0x00, 0x9c, 0x80, 0x0a, 0x41, 0x0a]).unwrap();

    leadbook(dir.path())
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error importing CSV"));
}

#[test]
fn test_report_monthly_json() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("report.csv");
    fs::write(&csv_path, SAMPLE_CSV).unwrap();

    leadbook(dir.path())
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success();

    leadbook(dir.path())
        .args(["report", "monthly", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"x":"2023-02","y":100.5}"#))
        .stdout(predicate::str::contains(r#"{"x":"2023-05","y":80.0}"#));
}

#[test]
fn test_report_countries_json_groups_small_shares() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("report.csv");
    let csv = "\
LeadId,LeadDate,LeadCheckin,LeadCheckout,Revenue,Commission,HotelID,HotelCountry,HotelCity
X1,2023-01-05 10:00:00,2023-01-06 10:00:00,2023-01-08 10:00:00,95.00,9,1,France,Paris
X2,2023-01-20 10:00:00,2023-01-21 10:00:00,2023-01-22 10:00:00,5.00,1,2,Monaco,Monte Carlo
";
    fs::write(&csv_path, csv).unwrap();

    leadbook(dir.path())
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success();

    leadbook(dir.path())
        .args(["report", "countries", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""labels":["France","Others"]"#))
        .stdout(predicate::str::contains(r#""values":[95.0,5.0]"#));
}

#[test]
fn test_process_appends_processed_column() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("report.csv");
    fs::write(&csv_path, SAMPLE_CSV).unwrap();
    let out_path = dir.path().join("processed.csv");

    leadbook(dir.path())
        .args([
            "process",
            csv_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 rows"));

    let processed = fs::read_to_string(&out_path).unwrap();
    let mut lines = processed.lines();
    assert!(lines.next().unwrap().ends_with(",Processed"));
    for line in lines {
        assert!(line.ends_with(",true"), "row not flagged: {line}");
    }
}
