use std::{ffi::OsStr, path::Path, path::PathBuf};

use walkdir::WalkDir;

use dcmaudit::core::{DcmauditError, DecodedRecord};
use dcmaudit::json::*;
use dcmaudit::validate::*;

const TEST_ASSETS_DIR: &str = "tests/assets";

#[test]
fn integration_tests() -> Result<(), ()> {
  // List the DICOM JSON files that have an expected report alongside them
  let mut records: Vec<PathBuf> = WalkDir::new(TEST_ASSETS_DIR)
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .unwrap()
    .into_iter()
    .map(|entry| entry.into_path())
    .filter(|path| {
      path.extension() == Some(OsStr::new("json"))
        && !path.to_string_lossy().ends_with(".report.json")
    })
    .collect();
  records.sort();

  assert!(!records.is_empty());

  let results: Vec<_> = records
    .iter()
    .map(|path| check_report(path).map_err(|e| (path, e)))
    .collect();

  if results.iter().all(|r| r.is_ok()) {
    return Ok(());
  }

  for result in results {
    match result {
      Ok(()) => (),

      Err((path, RecordCheckError::LoadError { error })) => {
        error.print(&format!("reading {:?}", path));
      }

      Err((path, RecordCheckError::ReportMissing)) => {
        eprintln!("Error: No expected report file for {:?}", path);
      }

      Err((path, RecordCheckError::ReportMismatch { actual })) => {
        eprintln!(
          "Error: Report mismatch with {:?}, actual report:\n{}",
          path, actual
        );
      }
    }
  }

  Err(())
}

enum RecordCheckError {
  LoadError { error: JsonDeserializeError },
  ReportMissing,
  ReportMismatch { actual: String },
}

/// Validates a DICOM JSON file and compares its report with the expected report
/// stored alongside it.
///
fn check_report(path: &Path) -> Result<(), RecordCheckError> {
  let record = read_record_from_file(path)
    .map_err(|error| RecordCheckError::LoadError { error })?;

  let report = validate_record_with_defaults(&record);

  // Validating again must give the same result and leave the record unchanged
  let original = record.clone();
  assert_eq!(validate_record_with_defaults(&record), report);
  assert_eq!(record, original);

  let expected_path = path.with_extension("report.json");
  let Ok(expected) = std::fs::read_to_string(&expected_path) else {
    return Err(RecordCheckError::ReportMissing);
  };

  let expected: serde_json::Value = serde_json::from_str(&expected).unwrap();
  let actual = serde_json::to_value(&report).unwrap();

  if actual == expected {
    Ok(())
  } else {
    Err(RecordCheckError::ReportMismatch {
      actual: serde_json::to_string_pretty(&actual).unwrap(),
    })
  }
}

#[test]
fn reserved_field_replaces_generic_warnings() {
  let record = read_record_from_str(
    r#"{ "00280301": { "vr": "CS", "Value": ["unknown"] } }"#,
  )
  .unwrap();

  let report = validate_record_with_defaults(&record);

  assert_eq!(
    report.get("00280301"),
    Some(
      &[Warning::new(
        WarningLevel::PrivacyViolation,
        "Image contains burnt-in annotations which cannot be anonymized."
      )][..]
    )
  );
}

#[test]
fn attribute_tags_reference_any_public_data_element() {
  let record = read_record_from_str(
    r#"{ "00280009": { "vr": "AT", "Value": ["00181065", "60000010"] } }"#,
  )
  .unwrap();

  let report = validate_record_with_defaults(&record);

  assert_eq!(report.get("00280009"), Some(&[][..]));
}

#[test]
fn numeric_decimal_strings_are_not_length_checked() {
  let record = read_record_from_str(
    r#"{ "00181065": { "vr": "DS", "Value": [0.123456789012345, 2.5] } }"#,
  )
  .unwrap();

  let report = validate_record_with_defaults(&record);

  assert_eq!(report.get("00181065"), Some(&[][..]));
}

#[test]
fn custom_anonymized_dates() {
  let record = read_record_from_str(
    r#"{
      "00080020": { "vr": "DA", "Value": ["20000101"] },
      "0008002A": { "vr": "DT", "Value": ["20000101000000"] }
    }"#,
  )
  .unwrap();

  let config = ValidateConfig::default()
    .anonymized_date("20000101")
    .anonymized_date_time("20000101000000");

  let report = validate_record(&record, &config, &BuiltInTagDictionary);
  assert_eq!(report.warning_count(), 0);

  let report = validate_record_with_defaults(&record);
  assert_eq!(report.warning_count(), 2);
  assert_eq!(report.highest_severity(), Some(WarningLevel::PossibleLeak));
}

#[test]
fn sop_class_gate() {
  let record = read_record_from_file("tests/assets/identifiable.json").unwrap();

  let uid = supported_sop_classes::record_sop_class_uid(&record);
  assert_eq!(uid.as_deref(), Some("1.2.840.10008.5.1.4.1.1.7"));
  assert!(uid.is_some_and(|uid| supported_sop_classes::is_supported(&uid)));

  assert_eq!(
    supported_sop_classes::record_sop_class_uid(&DecodedRecord::new()),
    None
  );
}
