//! The image storage SOP classes whose anonymization can be audited.

use dcmaudit_core::{DecodedRecord, dictionary};

/// A SOP class UID along with its name.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SopClass {
  pub uid: &'static str,
  pub name: &'static str,
}

/// The supported SOP classes, ordered by UID.
///
pub static SUPPORTED_SOP_CLASSES: [SopClass; 16] = [
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.1",
    name: "Computed Radiography Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.1.1",
    name: "Digital X-Ray Image Storage - For Presentation",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.1.1.1",
    name: "Digital X-Ray Image Storage - For Processing",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.1.2",
    name: "Digital Mammography X-Ray Image Storage - For Presentation",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.12.1",
    name: "X-Ray Angiographic Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.12.2",
    name: "X-Ray Radiofluoroscopic Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.128",
    name: "Positron Emission Tomography Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.2",
    name: "CT Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.2.1",
    name: "Enhanced CT Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.20",
    name: "Nuclear Medicine Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.3.1",
    name: "Ultrasound Multi-frame Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.4",
    name: "MR Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.4.1",
    name: "Enhanced MR Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.481.1",
    name: "RT Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.6.1",
    name: "Ultrasound Image Storage",
  },
  SopClass {
    uid: "1.2.840.10008.5.1.4.1.1.7",
    name: "Secondary Capture Image Storage",
  },
];

/// Returns the supported SOP class with the given UID, if there is one.
///
pub fn find(uid: &str) -> Option<&'static SopClass> {
  SUPPORTED_SOP_CLASSES
    .binary_search_by(|sop_class| sop_class.uid.cmp(uid))
    .ok()
    .map(|index| &SUPPORTED_SOP_CLASSES[index])
}

/// Returns whether the given SOP class UID is supported.
///
pub fn is_supported(uid: &str) -> bool {
  find(uid).is_some()
}

/// Returns the *'(0008,0016) SOP Class UID'* of a decoded record, if it has
/// a textual value. Trailing null and space padding is removed.
///
pub fn record_sop_class_uid(record: &DecodedRecord) -> Option<String> {
  let field = record.get_tag(dictionary::SOP_CLASS_UID.tag)?;

  let uid = field.value.first()?.as_text()?;
  let uid = uid.trim_matches(|c: char| c == '\0' || c == ' ');

  if uid.is_empty() {
    None
  } else {
    Some(uid.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use dcmaudit_core::{FieldRecord, FieldValue, ValueRepresentation};

  #[test]
  fn sorted_test() {
    assert!(
      SUPPORTED_SOP_CLASSES
        .windows(2)
        .all(|pair| pair[0].uid < pair[1].uid)
    );
  }

  #[test]
  fn is_supported_test() {
    assert!(is_supported("1.2.840.10008.5.1.4.1.1.2"));
    assert!(is_supported("1.2.840.10008.5.1.4.1.1.1.1.1"));
    assert!(!is_supported("1.2.840.10008.5.1.4.1.1.88.11"));
    assert!(!is_supported(""));

    assert_eq!(
      find("1.2.840.10008.5.1.4.1.1.4").map(|sop_class| sop_class.name),
      Some("MR Image Storage")
    );
  }

  #[test]
  fn record_sop_class_uid_test() {
    let mut record = DecodedRecord::new();
    assert_eq!(record_sop_class_uid(&record), None);

    record.insert(
      "00080016",
      FieldRecord::new_strings(
        ValueRepresentation::UniqueIdentifier,
        &["1.2.840.10008.5.1.4.1.1.7\0"],
      ),
    );
    assert_eq!(
      record_sop_class_uid(&record),
      Some("1.2.840.10008.5.1.4.1.1.7".to_string())
    );

    record.insert(
      "00080016",
      FieldRecord::new(
        ValueRepresentation::UniqueIdentifier,
        vec![FieldValue::Structured(serde_json::Value::Null)],
      ),
    );
    assert_eq!(record_sop_class_uid(&record), None);

    record.insert(
      "00080016",
      FieldRecord::new_strings(ValueRepresentation::UniqueIdentifier, &[" "]),
    );
    assert_eq!(record_sop_class_uid(&record), None);
  }
}
