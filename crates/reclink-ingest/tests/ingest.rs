use std::fs;
use std::path::Path;

use tempfile::TempDir;

use reclink_ingest::{list_csv_files, load_mapping_profile, read_csv_source};
use reclink_model::FieldType;

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_headers_and_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "customers.csv",
        "Customer  Name,Tel,Tax Reg No DMS\nNguyen Van A,0912345678,0305311225\nTran Thi B,,\n",
    );
    let source = read_csv_source(&path).unwrap();
    assert_eq!(source.name(), "customers.csv");
    // Internal whitespace in headers collapses.
    assert_eq!(
        source.columns(),
        &["Customer Name", "Tel", "Tax Reg No DMS"]
    );
    assert_eq!(source.row_count(), 2);
    assert_eq!(source.cell(0, "Tel"), "0912345678");
    assert_eq!(source.cell(1, "Tax Reg No DMS"), "");
}

#[test]
fn strips_bom_and_skips_empty_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "bom.csv",
        "\u{feff}Tel,Name\n,,\n0912345678,Alice\n",
    );
    let source = read_csv_source(&path).unwrap();
    assert_eq!(source.columns(), &["Tel", "Name"]);
    assert_eq!(source.row_count(), 1);
    assert_eq!(source.cell(0, "Tel"), "0912345678");
}

#[test]
fn ragged_rows_are_padded_to_header_width() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "ragged.csv", "A,B,C\n1,2\n1,2,3,4\n");
    let source = read_csv_source(&path).unwrap();
    assert_eq!(source.cell(0, "C"), "");
    assert_eq!(source.cell(1, "C"), "3");
}

#[test]
fn empty_file_yields_empty_source() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "empty.csv", "");
    let source = read_csv_source(&path).unwrap();
    assert_eq!(source.row_count(), 0);
    assert!(source.columns().is_empty());
}

#[test]
fn discovery_lists_csv_files_sorted() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "b.csv", "X\n1\n");
    write_file(dir.path(), "a.CSV", "X\n1\n");
    write_file(dir.path(), "notes.txt", "ignored");
    fs::create_dir(dir.path().join("sub.csv")).unwrap();

    let files = list_csv_files(dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a.CSV", "b.csv"]);
}

#[test]
fn missing_profile_yields_empty_default() {
    let dir = TempDir::new().unwrap();
    let profile = load_mapping_profile(&dir.path().join("mapping.json")).unwrap();
    assert!(profile.is_empty());
}

#[test]
fn profile_parses_per_source_overrides() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "mapping.json",
        r#"{"mapping_per_file": {"customers.csv": {"MST": "tax_no"}}}"#,
    );
    let profile = load_mapping_profile(&path).unwrap();
    assert_eq!(
        profile.source("customers.csv").unwrap().get("MST"),
        Some(&FieldType::TaxNo)
    );
}

#[test]
fn malformed_profile_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "mapping.json", "{not json");
    assert!(load_mapping_profile(&path).is_err());
}
