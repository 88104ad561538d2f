//! The in-memory form of a decoded metadata record that is audited for
//! residual identifying information.

use std::collections::BTreeMap;

use crate::{DataElementTag, FieldValue, ValueRepresentation};

/// The declared value representation of a field in a decoded record.
///
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FieldVr {
  /// One of the DICOM value representations.
  Known(ValueRepresentation),

  /// The field was decoded without any value representation.
  Undefined,

  /// The field declared a value representation code that isn't recognized.
  Unrecognized(String),
}

impl FieldVr {
  /// Converts an optional value representation code into a [`FieldVr`].
  ///
  pub fn from_code(code: Option<&str>) -> Self {
    match code {
      None => FieldVr::Undefined,
      Some(code) => match ValueRepresentation::from_code(code) {
        Ok(vr) => FieldVr::Known(vr),
        Err(()) => FieldVr::Unrecognized(code.to_string()),
      },
    }
  }
}

impl core::fmt::Display for FieldVr {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      FieldVr::Known(vr) => vr.fmt(f),
      FieldVr::Undefined => f.write_str("undefined"),
      FieldVr::Unrecognized(code) => write!(f, "{:?}", code),
    }
  }
}

impl From<ValueRepresentation> for FieldVr {
  fn from(vr: ValueRepresentation) -> Self {
    FieldVr::Known(vr)
  }
}

/// A single decoded field: its declared value representation along with its
/// value entries, of which there may be none.
///
#[derive(Clone, Debug, PartialEq)]
pub struct FieldRecord {
  pub vr: FieldVr,
  pub value: Vec<FieldValue>,
}

impl FieldRecord {
  /// Constructs a new field record.
  ///
  pub fn new(vr: impl Into<FieldVr>, value: Vec<FieldValue>) -> Self {
    Self {
      vr: vr.into(),
      value,
    }
  }

  /// Constructs a new field record holding string entries.
  ///
  pub fn new_strings(vr: impl Into<FieldVr>, value: &[&str]) -> Self {
    Self::new(vr, value.iter().map(|s| FieldValue::from(*s)).collect())
  }
}

/// A decoded metadata record that maps field identities to field records.
/// Field identities are usually the eight character hexadecimal form of a data
/// element tag, e.g. `"00100010"`, but any string is permitted.
///
/// Fields are kept ordered by their identity so that iteration is
/// deterministic.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodedRecord(BTreeMap<String, FieldRecord>);

impl DecodedRecord {
  /// Constructs a new empty decoded record.
  ///
  pub fn new() -> Self {
    Self(BTreeMap::new())
  }

  /// Inserts a field, replacing any existing field with the same identity.
  ///
  pub fn insert(&mut self, identity: impl Into<String>, field: FieldRecord) {
    self.0.insert(identity.into(), field);
  }

  /// Inserts a field keyed by the hexadecimal form of a data element tag.
  ///
  pub fn insert_tag(&mut self, tag: DataElementTag, field: FieldRecord) {
    self.0.insert(tag.to_hex_string(), field);
  }

  /// Returns the field with the given identity, if present.
  ///
  pub fn get(&self, identity: &str) -> Option<&FieldRecord> {
    self.0.get(identity)
  }

  /// Returns the field for a data element tag, if present.
  ///
  pub fn get_tag(&self, tag: DataElementTag) -> Option<&FieldRecord> {
    self.0.get(&tag.to_hex_string())
  }

  /// Returns whether a field with the given identity is present.
  ///
  pub fn has(&self, identity: &str) -> bool {
    self.0.contains_key(identity)
  }

  /// Returns the number of fields in the record.
  ///
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns whether the record has no fields.
  ///
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Iterates over the fields in the record, ordered by identity.
  ///
  pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldRecord)> {
    self.0.iter()
  }
}

impl FromIterator<(String, FieldRecord)> for DecodedRecord {
  fn from_iter<I: IntoIterator<Item = (String, FieldRecord)>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn field_vr_from_code_test() {
    assert_eq!(
      FieldVr::from_code(Some("DA")),
      FieldVr::Known(ValueRepresentation::Date)
    );
    assert_eq!(FieldVr::from_code(None), FieldVr::Undefined);
    assert_eq!(
      FieldVr::from_code(Some("ZZ")),
      FieldVr::Unrecognized("ZZ".to_string())
    );
  }

  #[test]
  fn field_vr_to_string_test() {
    assert_eq!(FieldVr::Known(ValueRepresentation::Date).to_string(), "DA");
    assert_eq!(FieldVr::Undefined.to_string(), "undefined");
    assert_eq!(
      FieldVr::Unrecognized("ZZ".to_string()).to_string(),
      "\"ZZ\""
    );
  }

  #[test]
  fn decoded_record_test() {
    let mut record = DecodedRecord::new();
    assert!(record.is_empty());

    record.insert_tag(
      DataElementTag::new(0x0010, 0x0010),
      FieldRecord::new_strings(ValueRepresentation::PersonName, &["Doe^Jane"]),
    );
    record.insert(
      "00080020",
      FieldRecord::new_strings(ValueRepresentation::Date, &["19700101"]),
    );

    assert_eq!(record.len(), 2);
    assert!(record.has("00100010"));
    assert_eq!(
      record.get_tag(DataElementTag::new(0x0008, 0x0020)),
      record.get("00080020")
    );

    let identities: Vec<_> = record.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(identities, vec!["00080020", "00100010"]);
  }
}
