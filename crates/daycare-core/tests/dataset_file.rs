use std::io::Write;

use chrono::NaiveDate;
use daycare_core::{filter_records, Dataset, DaycareError};

#[test]
fn load_reads_dataset_file() {
    let seeded = Dataset::seeded(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(serde_json::to_string_pretty(&seeded).unwrap().as_bytes())
        .expect("write dataset");

    let loaded = Dataset::load(file.path()).expect("load dataset");
    assert_eq!(loaded, seeded);
    assert_eq!(filter_records(&loaded.teachers, "", "on leave").len(), 1);
}

#[test]
fn load_missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Dataset::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, DaycareError::NotFound(_)));
}

#[test]
fn load_rejects_unknown_status() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"invoices":[{{"id":"1","invoiceNumber":"INV-1","childName":"A","parentName":"B","amount":1.0,"status":"lost","dueDate":"2024-01-01","issuedDate":"2024-01-01"}}]}}"#
    )
    .expect("write dataset");
    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, DaycareError::Parse(_)));
}
