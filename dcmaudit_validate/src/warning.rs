//! Warnings raised when validating a decoded record, and the report that
//! collects them.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// The severity of a [`Warning`]. Lower ordinals are more severe.
///
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum WarningLevel {
  /// Personal data is definitely present.
  PrivacyViolation = 1,

  /// Personal data may be present because an expected replacement value hasn't
  /// been applied.
  PossibleLeak = 2,

  /// The value is malformed. There is no privacy implication.
  Abnormality = 3,

  /// The value representation is one that can inherently carry personal data,
  /// regardless of its content.
  Caution = 4,
}

impl WarningLevel {
  /// Returns the ordinal of this level, from 1 to 4.
  ///
  pub fn as_u8(&self) -> u8 {
    *self as u8
  }

  /// Converts an ordinal from 1 to 4 into a warning level.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_u8(value: u8) -> Result<Self, ()> {
    match value {
      1 => Ok(Self::PrivacyViolation),
      2 => Ok(Self::PossibleLeak),
      3 => Ok(Self::Abnormality),
      4 => Ok(Self::Caution),
      _ => Err(()),
    }
  }

  /// Returns a short description of this level.
  ///
  pub fn description(&self) -> &'static str {
    match self {
      Self::PrivacyViolation => "Privacy violation",
      Self::PossibleLeak => "Possible leak",
      Self::Abnormality => "Abnormality",
      Self::Caution => "Caution",
    }
  }
}

impl core::fmt::Display for WarningLevel {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    write!(f, "{}", self.as_u8())
  }
}

impl Serialize for WarningLevel {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(self.as_u8())
  }
}

/// A single issue found in a field, along with its severity.
///
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Warning {
  pub level: WarningLevel,
  pub text: String,
}

impl Warning {
  /// Constructs a new warning.
  ///
  pub fn new(level: WarningLevel, text: impl Into<String>) -> Self {
    Self {
      level,
      text: text.into(),
    }
  }
}

impl core::fmt::Display for Warning {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    write!(f, "[level {}] {}", self.level, self.text)
  }
}

/// The warnings found in a decoded record, keyed by field identity.
///
/// Only fields whose value representation has a validation rule are present.
/// Such fields may have an empty list of warnings.
///
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WarningReport(BTreeMap<String, Vec<Warning>>);

impl WarningReport {
  /// Constructs a new empty report.
  ///
  pub fn new() -> Self {
    Self(BTreeMap::new())
  }

  /// Sets the warnings for a field, replacing any already present.
  ///
  pub fn insert(&mut self, identity: impl Into<String>, warnings: Vec<Warning>) {
    self.0.insert(identity.into(), warnings);
  }

  /// Returns the warnings for a field, or `None` if the field isn't in the
  /// report.
  ///
  pub fn get(&self, identity: &str) -> Option<&[Warning]> {
    self.0.get(identity).map(|warnings| warnings.as_slice())
  }

  /// Returns whether a field is in the report.
  ///
  pub fn contains(&self, identity: &str) -> bool {
    self.0.contains_key(identity)
  }

  /// Returns the number of fields in the report.
  ///
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns whether the report has no fields.
  ///
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Iterates over the fields in the report, ordered by identity.
  ///
  pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Warning>)> {
    self.0.iter()
  }

  /// Iterates over every warning in the report along with the identity of the
  /// field it was raised for.
  ///
  pub fn warnings(&self) -> impl Iterator<Item = (&str, &Warning)> {
    self.0.iter().flat_map(|(identity, warnings)| {
      warnings.iter().map(move |warning| (identity.as_str(), warning))
    })
  }

  /// Returns the total number of warnings across all fields.
  ///
  pub fn warning_count(&self) -> usize {
    self.0.values().map(|warnings| warnings.len()).sum()
  }

  /// Returns the most severe warning level in the report, if there are any
  /// warnings.
  ///
  pub fn highest_severity(&self) -> Option<WarningLevel> {
    self.warnings().map(|(_, warning)| warning.level).min()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn warning_level_test() {
    for value in 1..=4 {
      assert_eq!(WarningLevel::from_u8(value).map(|l| l.as_u8()), Ok(value));
    }

    assert_eq!(WarningLevel::from_u8(0), Err(()));
    assert_eq!(WarningLevel::from_u8(5), Err(()));

    assert!(WarningLevel::PrivacyViolation < WarningLevel::Caution);
  }

  #[test]
  fn report_summary_test() {
    let mut report = WarningReport::new();
    assert_eq!(report.highest_severity(), None);

    report.insert("00080060", vec![]);
    report.insert(
      "00100010",
      vec![
        Warning::new(WarningLevel::Caution, "A"),
        Warning::new(WarningLevel::PossibleLeak, "B"),
      ],
    );
    report.insert("00100020", vec![Warning::new(WarningLevel::Abnormality, "C")]);

    assert_eq!(report.len(), 3);
    assert_eq!(report.warning_count(), 3);
    assert_eq!(report.highest_severity(), Some(WarningLevel::PossibleLeak));
    assert_eq!(report.get("00080060"), Some(&[][..]));
    assert_eq!(report.get("00080061"), None);
  }

  #[test]
  fn serialize_test() {
    let mut report = WarningReport::new();
    report.insert(
      "00100010",
      vec![Warning::new(WarningLevel::PrivacyViolation, "Name")],
    );
    report.insert("00080060", vec![]);

    assert_eq!(
      serde_json::to_string(&report).unwrap(),
      r#"{"00080060":[],"00100010":[{"level":1,"text":"Name"}]}"#
    );
  }
}
