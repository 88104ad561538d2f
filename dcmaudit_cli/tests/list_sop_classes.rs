mod utils;

use utils::{dcmaudit_cli, get_stdout};

#[test]
fn with_table_format() {
  let assert = dcmaudit_cli().arg("list-sop-classes").assert().success();

  let stdout = get_stdout(assert);

  assert!(stdout.contains("SOP Class UID"));
  assert!(stdout.contains("1.2.840.10008.5.1.4.1.1.2 "));
  assert!(stdout.contains("CT Image Storage"));
}

#[test]
fn with_json_lines_format() {
  let assert = dcmaudit_cli()
    .arg("list-sop-classes")
    .arg("--format")
    .arg("json-lines")
    .assert()
    .success();

  let lines: Vec<serde_json::Value> = get_stdout(assert)
    .lines()
    .map(|line| serde_json::from_str(line).unwrap())
    .collect();

  assert_eq!(lines.len(), 16);
  assert_eq!(
    lines[0],
    serde_json::json!({
      "uid": "1.2.840.10008.5.1.4.1.1.1",
      "name": "Computed Radiography Image Storage"
    })
  );
}
