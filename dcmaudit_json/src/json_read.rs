//! Converts DICOM JSON data into a [`DecodedRecord`].

use std::path::Path;

use dcmaudit_core::{
  DataElementTag, DecodedRecord, FieldRecord, FieldValue, FieldVr,
};
use serde_json::{Map, Value};

use crate::JsonDeserializeError;

/// Reads a decoded record from a string of DICOM JSON.
///
/// The root must be an object whose keys are eight digit hexadecimal data
/// element tags. Keys are normalised to upper case. Each data element's `"vr"`
/// becomes its [`FieldVr`], with a missing or null `"vr"` becoming
/// [`FieldVr::Undefined`]. Entries of `"Value"` become [`FieldValue`]s, and a
/// data element holding `"InlineBinary"` or `"BulkDataURI"` instead has a
/// single structured entry. Data elements with none of these have no entries.
///
pub fn read_record_from_str(
  json: &str,
) -> Result<DecodedRecord, JsonDeserializeError> {
  let root: Value = serde_json::from_str(json)
    .map_err(|e| JsonDeserializeError::invalid(e.to_string(), ""))?;

  let Value::Object(root) = root else {
    return Err(JsonDeserializeError::invalid("Root is not an object", ""));
  };

  let mut record = DecodedRecord::new();

  for (key, element) in root {
    let tag = DataElementTag::from_hex_string(&key).map_err(|_| {
      JsonDeserializeError::invalid("Data element tag is invalid", &key)
    })?;

    let identity = tag.to_hex_string();

    let Value::Object(element) = element else {
      return Err(JsonDeserializeError::invalid(
        "Data element is not an object",
        &identity,
      ));
    };

    let field = read_field(&element, &identity)?;

    record.insert(identity, field);
  }

  Ok(record)
}

/// Reads a decoded record from a file containing DICOM JSON. See
/// [`read_record_from_str()`].
///
pub fn read_record_from_file<P: AsRef<Path>>(
  path: P,
) -> Result<DecodedRecord, JsonDeserializeError> {
  let json = std::fs::read_to_string(path).map_err(|e| {
    JsonDeserializeError::IoError {
      details: e.to_string(),
    }
  })?;

  read_record_from_str(&json)
}

fn read_field(
  element: &Map<String, Value>,
  identity: &str,
) -> Result<FieldRecord, JsonDeserializeError> {
  let vr = match element.get("vr") {
    None | Some(Value::Null) => FieldVr::Undefined,
    Some(Value::String(code)) => FieldVr::from_code(Some(code.as_str())),
    Some(_) => {
      return Err(JsonDeserializeError::invalid(
        "VR is not a string",
        identity,
      ));
    }
  };

  let value = if let Some(value) = element.get("Value") {
    let Value::Array(entries) = value else {
      return Err(JsonDeserializeError::invalid(
        "Value is not an array",
        identity,
      ));
    };

    entries.iter().map(|entry| read_entry(entry, &vr)).collect()
  } else if let Some(inline_binary) = element.get("InlineBinary") {
    vec![binary_entry("InlineBinary", inline_binary)]
  } else if let Some(bulk_data_uri) = element.get("BulkDataURI") {
    vec![binary_entry("BulkDataURI", bulk_data_uri)]
  } else {
    vec![]
  };

  Ok(FieldRecord::new(vr, value))
}

/// Converts a single entry of a `"Value"` array. Null entries of string VRs
/// are empty strings, and null entries of other VRs are kept as structured
/// null entries.
///
fn read_entry(entry: &Value, vr: &FieldVr) -> FieldValue {
  match (entry, vr) {
    (Value::Null, FieldVr::Known(vr)) if vr.is_string() => {
      FieldValue::String(String::new())
    }

    _ => FieldValue::from(entry.clone()),
  }
}

fn binary_entry(key: &str, value: &Value) -> FieldValue {
  let mut entry = Map::new();
  entry.insert(key.to_string(), value.clone());

  FieldValue::Structured(Value::Object(entry))
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::io::Write;

  use dcmaudit_core::ValueRepresentation;
  use serde_json::json;

  #[test]
  fn read_record_from_str_test() {
    let record = read_record_from_str(
      r#"{
        "00080016": { "vr": "UI", "Value": ["1.2.840.10008.5.1.4.1.1.2"] },
        "00100010": { "vr": "PN", "Value": [{ "Alphabetic": "Doe^Jane" }] },
        "00181050": { "vr": "DS", "Value": [0.5] },
        "0028000a": { "vr": "AT", "Value": ["00280009"] },
        "00091010": { "vr": "ZZ", "Value": ["A"] },
        "00091011": { "Value": ["B"] },
        "00091012": { "vr": null }
      }"#,
    )
    .unwrap();

    assert_eq!(record.len(), 7);

    assert_eq!(
      record.get("00080016"),
      Some(&FieldRecord::new_strings(
        ValueRepresentation::UniqueIdentifier,
        &["1.2.840.10008.5.1.4.1.1.2"]
      ))
    );
    assert_eq!(
      record.get("00100010").map(|field| field.value.clone()),
      Some(vec![FieldValue::Structured(json!({ "Alphabetic": "Doe^Jane" }))])
    );
    assert_eq!(
      record.get("00181050").and_then(|field| field.value[0].as_text()),
      Some("0.5".to_string())
    );

    // Keys are normalised to upper case
    assert!(record.has("0028000A"));
    assert!(!record.has("0028000a"));

    assert_eq!(
      record.get("00091010").map(|field| &field.vr),
      Some(&FieldVr::Unrecognized("ZZ".to_string()))
    );
    assert_eq!(
      record.get("00091011").map(|field| &field.vr),
      Some(&FieldVr::Undefined)
    );
    assert_eq!(
      record.get("00091012"),
      Some(&FieldRecord::new(FieldVr::Undefined, vec![]))
    );
  }

  #[test]
  fn null_entries_test() {
    let record = read_record_from_str(
      r#"{
        "00080020": { "vr": "DA", "Value": [null, "19700101"] },
        "00280010": { "vr": "US", "Value": [null] }
      }"#,
    )
    .unwrap();

    assert_eq!(
      record.get("00080020").map(|field| field.value.clone()),
      Some(vec![FieldValue::from(""), FieldValue::from("19700101")])
    );
    assert_eq!(
      record.get("00280010").map(|field| field.value.clone()),
      Some(vec![FieldValue::Structured(Value::Null)])
    );
  }

  #[test]
  fn binary_data_test() {
    let record = read_record_from_str(
      r#"{
        "7FE00010": { "vr": "OW", "InlineBinary": "AAAA" },
        "00420011": { "vr": "OB", "BulkDataURI": "https://example.com/1" },
        "00081140": { "vr": "SQ" }
      }"#,
    )
    .unwrap();

    assert_eq!(
      record.get("7FE00010").map(|field| field.value.clone()),
      Some(vec![FieldValue::Structured(json!({ "InlineBinary": "AAAA" }))])
    );
    assert_eq!(
      record.get("00420011").map(|field| field.value.clone()),
      Some(vec![FieldValue::Structured(
        json!({ "BulkDataURI": "https://example.com/1" })
      )])
    );
    assert_eq!(
      record.get("00081140").map(|field| field.value.len()),
      Some(0)
    );
  }

  #[test]
  fn invalid_json_test() {
    assert!(matches!(
      read_record_from_str("{"),
      Err(JsonDeserializeError::JsonInvalid { path, .. }) if path.is_empty()
    ));

    assert_eq!(
      read_record_from_str("[]"),
      Err(JsonDeserializeError::invalid("Root is not an object", ""))
    );

    assert_eq!(
      read_record_from_str(r#"{ "PatientName": { "vr": "PN" } }"#),
      Err(JsonDeserializeError::invalid(
        "Data element tag is invalid",
        "PatientName"
      ))
    );

    assert_eq!(
      read_record_from_str(r#"{ "00100010": "Doe^Jane" }"#),
      Err(JsonDeserializeError::invalid(
        "Data element is not an object",
        "00100010"
      ))
    );

    assert_eq!(
      read_record_from_str(r#"{ "00100010": { "vr": 1 } }"#),
      Err(JsonDeserializeError::invalid("VR is not a string", "00100010"))
    );

    assert_eq!(
      read_record_from_str(r#"{ "00100010": { "vr": "PN", "Value": "A" } }"#),
      Err(JsonDeserializeError::invalid(
        "Value is not an array",
        "00100010"
      ))
    );
  }

  #[test]
  fn read_record_from_file_test() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file
      .write_all(br#"{ "00080060": { "vr": "CS", "Value": ["CT"] } }"#)
      .unwrap();

    let record = read_record_from_file(file.path()).unwrap();
    assert_eq!(
      record.get("00080060"),
      Some(&FieldRecord::new_strings(
        ValueRepresentation::CodeString,
        &["CT"]
      ))
    );

    assert!(matches!(
      read_record_from_file("missing-file.json"),
      Err(JsonDeserializeError::IoError { .. })
    ));
  }
}
