use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rtg, setup_test_db, temp_out};

#[test]
fn export_csv_writes_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv", "csv");

    rtg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 3 special day(s)"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("id,date,kind,title,note,author,created_at"));
    assert!(content.contains("1995-03-15,birthday,Mai's birthday"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn export_json_with_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data(&db_path);
    let out = temp_out("export_json_range", "json");

    rtg()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--range",
            "2025-01-01:2025-12-31",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = parsed.as_array().expect("array");
    assert_eq!(arr.len(), 2);
    assert!(!content.contains("1995-03-15"));
}

#[test]
fn export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rtg()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_rejects_reversed_range() {
    let db_path = setup_test_db("export_bad_range");
    init_db_with_data(&db_path);
    let out = temp_out("export_bad_range", "csv");

    rtg()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            &out,
            "--range",
            "2025-12-31:2025-01-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}
