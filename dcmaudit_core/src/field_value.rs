//! Individual entries of a decoded data element value.

/// A single entry in the value of a decoded data element. Most value
/// representations hold string or number entries, while others such as person
/// names and sequences hold structured sub-values that are kept as raw JSON.
///
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
  String(String),
  Number(serde_json::Number),
  Structured(serde_json::Value),
}

impl FieldValue {
  /// Returns the textual form of this entry. Strings are returned as-is and
  /// numbers are formatted. Structured entries have no textual form.
  ///
  pub fn as_text(&self) -> Option<String> {
    match self {
      FieldValue::String(s) => Some(s.clone()),
      FieldValue::Number(n) => Some(n.to_string()),
      FieldValue::Structured(_) => None,
    }
  }

  /// Returns whether this entry is exactly equal to the given string. Numbers
  /// and structured entries never match.
  ///
  pub fn is_literal(&self, literal: &str) -> bool {
    matches!(self, FieldValue::String(s) if s == literal)
  }

  /// Returns whether this entry carries any content. Strings are empty when
  /// they contain only whitespace, and structured entries are empty when they
  /// are null, or are an object or array whose members are all empty.
  ///
  pub fn is_empty(&self) -> bool {
    match self {
      FieldValue::String(s) => s.trim().is_empty(),
      FieldValue::Number(_) => false,
      FieldValue::Structured(value) => is_json_value_empty(value),
    }
  }
}

impl From<&str> for FieldValue {
  fn from(value: &str) -> Self {
    FieldValue::String(value.to_string())
  }
}

impl From<String> for FieldValue {
  fn from(value: String) -> Self {
    FieldValue::String(value)
  }
}

impl From<i64> for FieldValue {
  fn from(value: i64) -> Self {
    FieldValue::Number(value.into())
  }
}

impl From<serde_json::Value> for FieldValue {
  /// Converts a JSON value into an entry. Strings and numbers map to their
  /// scalar variants and everything else is kept as a structured entry.
  ///
  fn from(value: serde_json::Value) -> Self {
    match value {
      serde_json::Value::String(s) => FieldValue::String(s),
      serde_json::Value::Number(n) => FieldValue::Number(n),
      other => FieldValue::Structured(other),
    }
  }
}

fn is_json_value_empty(value: &serde_json::Value) -> bool {
  match value {
    serde_json::Value::Null => true,
    serde_json::Value::Bool(_) | serde_json::Value::Number(_) => false,
    serde_json::Value::String(s) => s.trim().is_empty(),
    serde_json::Value::Array(items) => items.iter().all(is_json_value_empty),
    serde_json::Value::Object(members) => {
      members.values().all(is_json_value_empty)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use serde_json::json;

  #[test]
  fn as_text_test() {
    assert_eq!(FieldValue::from("1.2").as_text(), Some("1.2".to_string()));
    assert_eq!(FieldValue::from(42).as_text(), Some("42".to_string()));
    assert_eq!(
      FieldValue::from(json!({ "Alphabetic": "Doe^Jane" })).as_text(),
      None
    );
  }

  #[test]
  fn is_literal_test() {
    assert!(FieldValue::from("NO").is_literal("NO"));
    assert!(!FieldValue::from("NO ").is_literal("NO"));
    assert!(!FieldValue::from(0).is_literal("0"));
  }

  #[test]
  fn is_empty_test() {
    assert!(FieldValue::from("").is_empty());
    assert!(FieldValue::from("  ").is_empty());
    assert!(!FieldValue::from("25Y").is_empty());
    assert!(!FieldValue::from(0).is_empty());
    assert!(FieldValue::from(json!(null)).is_empty());
    assert!(FieldValue::from(json!({ "Alphabetic": "" })).is_empty());
    assert!(!FieldValue::from(json!({ "Alphabetic": "Doe^Jane" })).is_empty());
    assert!(!FieldValue::from(json!([{ "00100010": {} }, true])).is_empty());
  }
}
