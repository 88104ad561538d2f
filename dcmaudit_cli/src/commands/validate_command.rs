use std::{
  io::Write,
  path::{Path, PathBuf},
};

use clap::{Args, ValueEnum};
use dcmaudit::{core::*, json::*, validate::*};
use owo_colors::{OwoColorize, Stream::Stdout};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::utils;

pub const ABOUT: &str =
  "Validates that DICOM JSON files have been correctly anonymized";

#[derive(Args)]
pub struct ValidateArgs {
  #[arg(
    required = true,
    help_heading = "Input",
    help = "DICOM JSON files to validate. Directories are searched recursively \
      for files with a '.json' extension."
  )]
  inputs: Vec<PathBuf>,

  #[arg(
    long,
    help_heading = "Input",
    help = "Whether to validate files regardless of their SOP class. By \
      default, files that don't have a supported image storage SOP Class UID \
      are skipped.",
    default_value_t = false
  )]
  all_sop_classes: bool,

  #[arg(
    long,
    help = "The number of threads to use to perform work.",
    default_value_t = rayon::current_num_threads()
  )]
  threads: usize,

  #[arg(
    long,
    help_heading = "Validation",
    help = "The value that anonymization is expected to have substituted for \
      every date (DA) value.",
    default_value = "19700101"
  )]
  anonymized_date: String,

  #[arg(
    long,
    help_heading = "Validation",
    help = "The value that anonymization is expected to have substituted for \
      every date time (DT) value.",
    default_value = "19700101000000.000000"
  )]
  anonymized_date_time: String,

  #[arg(
    long,
    help_heading = "Validation",
    help = "Exit with status 2 when a warning at this level or a more severe \
      level is found. Level 1 is a privacy violation, 2 a possible leak of \
      personal data, 3 an abnormal value, and 4 a caution.",
    value_parser = parse_fail_level,
  )]
  fail_level: Option<WarningLevel>,

  #[arg(
    long,
    short,
    help_heading = "Output",
    help = "The format used to print warnings.",
    default_value_t = Format::Text
  )]
  format: Format,

  #[arg(
    long,
    help_heading = "Output",
    help = "Whether to print output using color and bold text. By default this \
      is set based on whether there is an active output terminal that supports \
      colored output."
  )]
  styled: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Format {
  /// Output each warning on its own line, grouped by file.
  Text,

  /// Output a table of warnings for each file.
  Table,

  /// Output each file's report as a single line of JSON.
  Json,
}

impl core::fmt::Display for Format {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Text => write!(f, "text"),
      Self::Table => write!(f, "table"),
      Self::Json => write!(f, "json"),
    }
  }
}

/// The outcome of processing a single input file.
///
enum FileOutcome {
  Validated(WarningReport),
  Skipped { reason: String },
}

pub fn run(args: &ValidateArgs) -> Result<(), ()> {
  if let Some(styled) = args.styled {
    owo_colors::set_override(styled);
  }

  let files = match utils::collect_json_files(&args.inputs) {
    Ok(files) => files,
    Err(e) => {
      error::print_error_lines(&[format!("Error: {e}")]);
      return Err(());
    }
  };

  tracing::debug!(count = files.len(), "Found input files");

  let config = ValidateConfig::default()
    .anonymized_date(&args.anonymized_date)
    .anonymized_date_time(&args.anonymized_date_time);

  let thread_pool = match utils::create_thread_pool(args.threads) {
    Ok(thread_pool) => thread_pool,
    Err(e) => {
      error::print_error_lines(&[format!("Error: {e}")]);
      return Err(());
    }
  };

  // Results are collected in input order regardless of which thread produced
  // them
  let outcomes: Vec<_> = thread_pool.install(|| {
    files
      .par_iter()
      .map(|path| process_file(path, &config, args.all_sop_classes))
      .collect()
  });

  let mut has_errors = false;
  let mut highest_severity: Option<WarningLevel> = None;
  let mut validated_count = 0;
  let mut warning_count = 0;

  for (path, outcome) in files.iter().zip(outcomes) {
    match outcome {
      Ok(FileOutcome::Validated(report)) => {
        validated_count += 1;
        warning_count += report.warning_count();
        highest_severity = highest_severity
          .into_iter()
          .chain(report.highest_severity())
          .min();

        if let Err(e) = print_report(path, &report, args.format) {
          error::print_error_lines(&[format!(
            "Error writing to stdout: {e}"
          )]);
          return Err(());
        }
      }

      Ok(FileOutcome::Skipped { reason }) => {
        eprintln!("Note: Skipping \"{}\", {}", path.display(), reason);
      }

      Err(e) => {
        e.print(&format!("reading \"{}\"", path.display()));
        has_errors = true;
      }
    }
  }

  let _ = std::io::stdout().flush();

  // JSON output is kept free of the summary line
  if args.format != Format::Json {
    eprintln!(
      "{}",
      summary_line(validated_count, warning_count, highest_severity)
    );
  }

  if has_errors {
    return Err(());
  }

  if let Some(fail_level) = args.fail_level
    && highest_severity.is_some_and(|level| level <= fail_level)
  {
    std::process::exit(2);
  }

  Ok(())
}

fn process_file(
  path: &Path,
  config: &ValidateConfig,
  all_sop_classes: bool,
) -> Result<FileOutcome, JsonDeserializeError> {
  let record = read_record_from_file(path)?;

  if !all_sop_classes {
    match supported_sop_classes::record_sop_class_uid(&record) {
      None => {
        return Ok(FileOutcome::Skipped {
          reason: "it has no SOP Class UID".to_string(),
        });
      }

      Some(uid) if !supported_sop_classes::is_supported(&uid) => {
        return Ok(FileOutcome::Skipped {
          reason: format!("SOP Class UID \"{uid}\" is not supported"),
        });
      }

      Some(_) => (),
    }
  }

  let report = validate_record(&record, config, &BuiltInTagDictionary);

  tracing::debug!(
    path = %path.display(),
    fields = record.len(),
    warnings = report.warning_count(),
    "Validated file"
  );

  Ok(FileOutcome::Validated(report))
}

fn print_report(
  path: &Path,
  report: &WarningReport,
  format: Format,
) -> std::io::Result<()> {
  let mut stdout = std::io::stdout().lock();

  match format {
    Format::Text => {
      writeln!(
        stdout,
        "{}",
        path
          .display()
          .if_supports_color(Stdout, |text| text.bold())
      )?;

      if report.warning_count() == 0 {
        writeln!(stdout, "  No warnings")?;
      }

      for (identity, warning) in report.warnings() {
        writeln!(
          stdout,
          "  {} {}",
          dictionary::identity_with_name(identity),
          styled_warning(warning)
        )?;
      }
    }

    Format::Table => {
      writeln!(stdout, "{}", path.display())?;
      writeln!(stdout, "{}", report_table(report))?;
    }

    Format::Json => {
      let mut output = serde_json::Map::new();

      output.insert("path".to_string(), path.to_string_lossy().into());
      output.insert(
        "report".to_string(),
        serde_json::to_value(report).map_err(std::io::Error::other)?,
      );

      writeln!(stdout, "{}", serde_json::Value::Object(output))?;
    }
  }

  Ok(())
}

fn styled_warning(warning: &Warning) -> String {
  let text = warning.to_string();

  match warning.level {
    WarningLevel::PrivacyViolation => text
      .if_supports_color(Stdout, |text| text.bright_red())
      .to_string(),
    WarningLevel::PossibleLeak => text
      .if_supports_color(Stdout, |text| text.yellow())
      .to_string(),
    WarningLevel::Abnormality => text
      .if_supports_color(Stdout, |text| text.magenta())
      .to_string(),
    WarningLevel::Caution => text
      .if_supports_color(Stdout, |text| text.cyan())
      .to_string(),
  }
}

fn report_table(report: &WarningReport) -> comfy_table::Table {
  use comfy_table::{
    Attribute, Cell, CellAlignment, Table, presets::UTF8_FULL,
  };

  let mut table = Table::new();
  table.load_preset(UTF8_FULL);

  table.set_header(
    ["Field", "Level", "Warning"]
      .iter()
      .map(|text| Cell::new(text).add_attribute(Attribute::Bold))
      .collect::<Vec<_>>(),
  );

  if let Some(column) = table.column_mut(1) {
    column.set_cell_alignment(CellAlignment::Right);
  }

  for (identity, warning) in report.warnings() {
    table.add_row([
      dictionary::identity_with_name(identity),
      warning.level.to_string(),
      warning.text.clone(),
    ]);
  }

  table
}

fn summary_line(
  validated_count: usize,
  warning_count: usize,
  highest_severity: Option<WarningLevel>,
) -> String {
  let mut line = format!(
    "Validated {} file{}, found {} warning{}",
    validated_count,
    if validated_count == 1 { "" } else { "s" },
    warning_count,
    if warning_count == 1 { "" } else { "s" },
  );

  if let Some(level) = highest_severity {
    line.push_str(&format!(
      ", highest severity: level {} ({})",
      level,
      level.description().to_lowercase()
    ));
  }

  line
}

fn parse_fail_level(s: &str) -> Result<WarningLevel, String> {
  s.parse::<u8>()
    .ok()
    .and_then(|level| WarningLevel::from_u8(level).ok())
    .ok_or_else(|| "must be a warning level from 1 to 4".to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_fail_level_test() {
    assert_eq!(parse_fail_level("1"), Ok(WarningLevel::PrivacyViolation));
    assert_eq!(parse_fail_level("3"), Ok(WarningLevel::Abnormality));
    assert!(parse_fail_level("0").is_err());
    assert!(parse_fail_level("5").is_err());
    assert!(parse_fail_level("caution").is_err());
  }

  #[test]
  fn summary_line_test() {
    assert_eq!(summary_line(0, 0, None), "Validated 0 files, found 0 warnings");
    assert_eq!(
      summary_line(1, 1, Some(WarningLevel::Caution)),
      "Validated 1 file, found 1 warning, highest severity: level 4 (caution)"
    );
    assert_eq!(
      summary_line(3, 5, Some(WarningLevel::PrivacyViolation)),
      "Validated 3 files, found 5 warnings, highest severity: level 1 \
       (privacy violation)"
    );
  }

  #[test]
  fn report_table_test() {
    let mut report = WarningReport::new();
    report.insert(
      "00100010",
      vec![Warning::new(WarningLevel::PrivacyViolation, "Name")],
    );

    let table = report_table(&report).to_string();
    assert!(table.contains("(0010,0010) Patient's Name"));
    assert!(table.contains("Name"));
  }
}
