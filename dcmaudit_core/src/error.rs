//! The error reporting trait shared by dcmaudit's fallible operations.
//!
//! Validation itself never fails. Errors only arise when reading input or
//! writing output, and are reported to the user as a block of red lines on
//! stderr.

use std::io::Write;

use owo_colors::{OwoColorize, Stream::Stderr};

/// Error trait implemented by all error types in dcmaudit.
///
pub trait DcmauditError {
  /// Returns lines of text that describe an error in a human-readable format.
  /// The task description says what was being done when the error occurred,
  /// e.g. `"reading \"study.json\""`.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String>;

  /// Prints details on the error to stderr.
  ///
  fn print(&self, task_description: &str) {
    print_error_lines(&self.to_lines(task_description));
  }
}

/// Prints lines of error information to stderr, colored red when stderr
/// supports it.
///
pub fn print_error_lines(lines: &[String]) {
  let _ = std::io::stdout().flush();

  let mut stderr = std::io::stderr().lock();
  let _ = write_error_lines(&mut stderr, lines, |line| {
    line.if_supports_color(Stderr, |text| text.red()).to_string()
  });
}

/// Writes a block of error lines preceded by a separator, passing each line
/// through the given styling function.
///
fn write_error_lines(
  out: &mut impl Write,
  lines: &[String],
  style: impl Fn(&str) -> String,
) -> std::io::Result<()> {
  writeln!(out)?;
  writeln!(out, "{}", style("-----"))?;

  for line in lines {
    writeln!(out, "{}", style(line))?;
  }

  writeln!(out)?;
  out.flush()
}

#[cfg(test)]
mod tests {
  use super::*;

  struct MissingInput;

  impl DcmauditError for MissingInput {
    fn to_lines(&self, task_description: &str) -> Vec<String> {
      vec![
        format!("Input error {task_description}"),
        "  Details: Not found".to_string(),
      ]
    }
  }

  #[test]
  fn write_error_lines_test() {
    let mut output = vec![];

    write_error_lines(
      &mut output,
      &MissingInput.to_lines("reading \"a.json\""),
      |line| line.to_string(),
    )
    .unwrap();

    assert_eq!(
      String::from_utf8(output).unwrap(),
      "\n-----\nInput error reading \"a.json\"\n  Details: Not found\n\n"
    );
  }
}
