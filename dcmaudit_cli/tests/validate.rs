mod utils;

use predicates::prelude::*;
use utils::{
  create_temp_dir, dcmaudit_cli, get_stdout, get_stdout_and_stderr,
  to_native_path,
};

const CLEAN: &str = "tests/assets/records/clean.json";
const LEAKY: &str = "tests/assets/records/leaky.json";
const UNSUPPORTED: &str = "tests/assets/records/unsupported.json";

#[test]
fn with_clean_file() {
  let assert = dcmaudit_cli()
    .arg("validate")
    .arg("--styled")
    .arg("false")
    .arg(CLEAN)
    .assert()
    .success();

  let (stdout, stderr) = get_stdout_and_stderr(assert);

  assert_eq!(stdout, format!("{CLEAN}\n  No warnings\n"));
  assert_eq!(stderr.trim(), "Validated 1 file, found 0 warnings");
}

#[test]
fn with_leaky_file() {
  let assert = dcmaudit_cli()
    .arg("validate")
    .arg("--styled")
    .arg("false")
    .arg(LEAKY)
    .assert()
    .success();

  let (stdout, stderr) = get_stdout_and_stderr(assert);

  assert_eq!(
    stdout,
    format!(
      "{LEAKY}\n\
       \x20 (0008,0020) Study Date [level 2] Date \"20240315\" has not been \
       replaced with the anonymized value \"19700101\".\n\
       \x20 (0010,0010) Patient's Name [level 1] Person name must not be \
       present in anonymized data.\n"
    )
  );
  assert_eq!(
    stderr.trim(),
    "Validated 1 file, found 2 warnings, highest severity: level 1 (privacy \
     violation)"
  );
}

#[test]
fn with_anonymized_date() {
  let assert = dcmaudit_cli()
    .arg("validate")
    .arg("--styled")
    .arg("false")
    .arg("--anonymized-date")
    .arg("20240315")
    .arg(LEAKY)
    .assert()
    .success();

  let stdout = get_stdout(assert);

  assert!(!stdout.contains("Study Date"));
  assert!(stdout.contains("Patient's Name"));
}

#[test]
fn with_fail_level() {
  dcmaudit_cli()
    .arg("validate")
    .arg("--fail-level")
    .arg("1")
    .arg(LEAKY)
    .assert()
    .code(2);

  dcmaudit_cli()
    .arg("validate")
    .arg("--fail-level")
    .arg("4")
    .arg(CLEAN)
    .assert()
    .success();

  dcmaudit_cli()
    .arg("validate")
    .arg("--fail-level")
    .arg("5")
    .arg(CLEAN)
    .assert()
    .failure()
    .stderr(predicate::str::contains("--fail-level"));
}

#[test]
fn with_directory() {
  let assert = dcmaudit_cli()
    .arg("validate")
    .arg("--styled")
    .arg("false")
    .arg("tests/assets/records")
    .assert()
    .success();

  let (stdout, stderr) = get_stdout_and_stderr(assert);

  // Files are reported in sorted order and the unsupported SOP class is
  // skipped
  let headings: Vec<_> = stdout
    .lines()
    .filter(|line| !line.starts_with(' '))
    .collect();
  assert_eq!(
    headings,
    vec![to_native_path(CLEAN), to_native_path(LEAKY)]
  );

  assert!(stderr.contains(&format!(
    "Note: Skipping \"{}\", SOP Class UID \
     \"1.2.840.10008.5.1.4.1.1.88.11\" is not supported",
    to_native_path(UNSUPPORTED)
  )));
  assert!(stderr.contains("Validated 2 files, found 2 warnings"));
}

#[test]
fn with_all_sop_classes() {
  let assert = dcmaudit_cli()
    .arg("validate")
    .arg("--styled")
    .arg("false")
    .arg("--all-sop-classes")
    .arg("--threads")
    .arg("2")
    .arg(UNSUPPORTED)
    .assert()
    .success();

  assert_eq!(
    get_stdout(assert),
    format!(
      "{UNSUPPORTED}\n\
       \x20 (0010,0010) Patient's Name [level 1] Person name must not be \
       present in anonymized data.\n"
    )
  );
}

#[test]
fn with_missing_sop_class() {
  let temp_dir = create_temp_dir();
  let path = temp_dir.path().join("no_sop_class.json");
  std::fs::write(&path, r#"{ "00100010": { "vr": "PN" } }"#).unwrap();

  dcmaudit_cli()
    .arg("validate")
    .arg(&path)
    .assert()
    .success()
    .stdout("")
    .stderr(predicate::str::contains("it has no SOP Class UID"));
}

#[test]
fn with_json_format() {
  let assert = dcmaudit_cli()
    .arg("validate")
    .arg("--format")
    .arg("json")
    .arg(CLEAN)
    .arg(LEAKY)
    .assert()
    .success();

  let (stdout, stderr) = get_stdout_and_stderr(assert);
  assert_eq!(stderr, "");

  let lines: Vec<serde_json::Value> = stdout
    .lines()
    .map(|line| serde_json::from_str(line).unwrap())
    .collect();

  assert_eq!(
    lines,
    vec![
      serde_json::json!({
        "path": CLEAN,
        "report": {
          "00080016": [],
          "00080020": [],
          "00080060": [],
          "00100010": [],
          "00280301": []
        }
      }),
      serde_json::json!({
        "path": LEAKY,
        "report": {
          "00080016": [],
          "00080020": [{
            "level": 2,
            "text": "Date \"20240315\" has not been replaced with the \
                     anonymized value \"19700101\"."
          }],
          "00100010": [{
            "level": 1,
            "text": "Person name must not be present in anonymized data."
          }]
        }
      }),
    ]
  );
}

#[test]
fn with_table_format() {
  let assert = dcmaudit_cli()
    .arg("validate")
    .arg("--format")
    .arg("table")
    .arg(LEAKY)
    .assert()
    .success();

  let stdout = get_stdout(assert);

  assert!(stdout.starts_with(LEAKY));
  assert!(stdout.contains("(0010,0010) Patient's Name"));
  assert!(stdout.contains("Warning"));
}

#[test]
fn with_invalid_file() {
  dcmaudit_cli()
    .arg("validate")
    .arg("tests/assets/invalid.json")
    .arg(CLEAN)
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::contains("No warnings"))
    .stderr(predicate::str::contains(
      "DICOM JSON deserialize error reading \"tests/assets/invalid.json\"",
    ))
    .stderr(predicate::str::contains("Details: Root is not an object"));
}

#[test]
fn with_missing_file() {
  dcmaudit_cli()
    .arg("validate")
    .arg("missing-file.json")
    .assert()
    .failure()
    .stderr(predicate::str::contains("DICOM JSON IO error"));
}
