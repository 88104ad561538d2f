use dcmaudit_core::{DataElementTag, DcmauditError, dictionary};

/// Occurs when an error is encountered converting from the DICOM JSON model.
///
#[derive(Clone, Debug, PartialEq)]
pub enum JsonDeserializeError {
  /// The DICOM JSON data to be deserialized is invalid. The path is the
  /// identity of the data element that is invalid, and is empty when the issue
  /// is with the root of the data.
  JsonInvalid { details: String, path: String },

  /// An error occurred reading DICOM JSON data from a file.
  IoError { details: String },
}

impl JsonDeserializeError {
  pub(crate) fn invalid(details: impl Into<String>, path: &str) -> Self {
    Self::JsonInvalid {
      details: details.into(),
      path: path.to_string(),
    }
  }
}

impl core::fmt::Display for JsonDeserializeError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      JsonDeserializeError::JsonInvalid { details, path } => {
        if path.is_empty() {
          write!(f, "DICOM JSON deserialize error, details: {details}")
        } else {
          write!(
            f,
            "DICOM JSON deserialize error, details: {details}, path: {path}"
          )
        }
      }

      JsonDeserializeError::IoError { details } => {
        write!(f, "DICOM JSON IO error, details: {details}")
      }
    }
  }
}

impl DcmauditError for JsonDeserializeError {
  /// Returns lines of text that describe a DICOM JSON deserialize error in a
  /// human-readable format.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    match self {
      JsonDeserializeError::JsonInvalid { details, path } => {
        let mut lines = vec![];

        lines.push(format!("DICOM JSON deserialize error {task_description}"));
        lines.push("".to_string());
        lines.push(format!("  Details: {details}"));

        if let Ok(tag) = DataElementTag::from_hex_string(path) {
          lines.push(format!("  Tag: {tag}"));
          lines.push(format!("  Name: {}", dictionary::tag_name(tag)));
        } else if !path.is_empty() {
          lines.push(format!("  Path: {path}"));
        }

        lines
      }

      JsonDeserializeError::IoError { details } => vec![
        format!("DICOM JSON IO error {task_description}"),
        "".to_string(),
        format!("  Error: {details}"),
      ],
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_lines_test() {
    assert_eq!(
      JsonDeserializeError::invalid("VR is not a string", "00100010")
        .to_lines("reading \"a.json\""),
      vec![
        "DICOM JSON deserialize error reading \"a.json\"",
        "",
        "  Details: VR is not a string",
        "  Tag: (0010,0010)",
        "  Name: Patient's Name",
      ]
    );

    assert_eq!(
      JsonDeserializeError::invalid("Root is not an object", "")
        .to_lines("reading \"a.json\""),
      vec![
        "DICOM JSON deserialize error reading \"a.json\"",
        "",
        "  Details: Root is not an object",
      ]
    );

    assert_eq!(
      JsonDeserializeError::IoError {
        details: "No such file".to_string()
      }
      .to_lines("reading \"a.json\""),
      vec![
        "DICOM JSON IO error reading \"a.json\"",
        "",
        "  Error: No such file",
      ]
    );
  }

  #[test]
  fn to_string_test() {
    assert_eq!(
      JsonDeserializeError::invalid("Data element is not an object", "ZZ")
        .to_string(),
      "DICOM JSON deserialize error, details: Data element is not an object, \
       path: ZZ"
    );
  }
}
