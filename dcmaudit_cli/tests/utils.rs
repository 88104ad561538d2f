use std::path::PathBuf;

use assert_cmd::{
  cargo::cargo_bin_cmd,
  {Command, assert::Assert},
};
use tempfile::TempDir;

#[allow(dead_code)]
pub fn dcmaudit_cli() -> Command {
  let mut cmd = cargo_bin_cmd!("dcmaudit");

  // Keep diagnostic logging out of the output being asserted on
  cmd.env_remove("RUST_LOG");

  cmd
}

#[allow(dead_code)]
pub fn to_native_path(path: &str) -> String {
  #[cfg(windows)]
  return path.replace("/", "\\");

  #[cfg(not(windows))]
  return path.to_string();
}

fn temp_dir() -> PathBuf {
  if let Ok(t) = std::env::var("RUNNER_TEMP") {
    PathBuf::from(t)
  } else {
    std::env::temp_dir()
  }
}

#[allow(dead_code)]
pub fn create_temp_dir() -> TempDir {
  TempDir::new_in(temp_dir()).unwrap()
}

#[allow(dead_code)]
pub fn get_stdout(assert: Assert) -> String {
  String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[allow(dead_code)]
pub fn get_stderr(assert: Assert) -> String {
  String::from_utf8(assert.get_output().stderr.clone()).unwrap()
}

#[allow(dead_code)]
pub fn get_stdout_and_stderr(assert: Assert) -> (String, String) {
  (
    String::from_utf8(assert.get_output().stdout.clone()).unwrap(),
    String::from_utf8(assert.get_output().stderr.clone()).unwrap(),
  )
}
