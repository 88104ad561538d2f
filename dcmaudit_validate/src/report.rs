//! Builds a [`WarningReport`] for a whole decoded record.

use dcmaudit_core::DecodedRecord;

use crate::reserved_fields::RESERVED_FIELD_POLICIES;
use crate::vr_rules::{self, RuleContext};
use crate::{
  BuiltInTagDictionary, TagDictionary, ValidateConfig, WarningReport,
};

/// Validates every field in a decoded record and returns the warnings found.
///
/// Each field is checked by the rule for its declared value representation.
/// Fields whose value representation has no rule are left out of the report.
/// The reserved field policies are then applied to fields that are in the
/// report, and a triggered policy replaces the field's warnings with its own.
///
/// The record is not modified, and validating the same record twice gives the
/// same report.
///
pub fn validate_record(
  record: &DecodedRecord,
  config: &ValidateConfig,
  dictionary: &dyn TagDictionary,
) -> WarningReport {
  let context = RuleContext { config, dictionary };

  let mut report = WarningReport::new();

  for (identity, field) in record.iter() {
    let Some(rule) = vr_rules::rule_for(&field.vr) else {
      tracing::trace!(
        identity = identity.as_str(),
        vr = %field.vr,
        "No validation rule for VR, field skipped"
      );
      continue;
    };

    let warnings = rule(&field.value, &context);

    tracing::debug!(
      identity = identity.as_str(),
      vr = %field.vr,
      warnings = warnings.len(),
      "Validated field"
    );

    report.insert(identity.as_str(), warnings);
  }

  for policy in RESERVED_FIELD_POLICIES.iter() {
    if !report.contains(policy.identity) {
      continue;
    }

    let Some(field) = record.get(policy.identity) else {
      continue;
    };

    if let Some(warning) = policy.evaluate(&field.value) {
      tracing::debug!(
        identity = policy.identity,
        "Reserved field policy triggered"
      );

      report.insert(policy.identity, vec![warning]);
    }
  }

  report
}

/// Validates a decoded record using the default config and the built-in tag
/// dictionary. See [`validate_record()`].
///
pub fn validate_record_with_defaults(record: &DecodedRecord) -> WarningReport {
  validate_record(record, &ValidateConfig::default(), &BuiltInTagDictionary)
}

#[cfg(test)]
mod tests {
  use super::*;

  use dcmaudit_core::{
    FieldRecord, FieldValue, FieldVr, ValueRepresentation, dictionary,
  };

  use crate::{Warning, WarningLevel};

  fn field(vr: ValueRepresentation, value: &[&str]) -> FieldRecord {
    FieldRecord::new_strings(vr, value)
  }

  fn levels(report: &WarningReport, identity: &str) -> Option<Vec<u8>> {
    report
      .get(identity)
      .map(|warnings| warnings.iter().map(|w| w.level.as_u8()).collect())
  }

  fn sample_record() -> DecodedRecord {
    let mut record = DecodedRecord::new();

    record.insert_tag(
      dictionary::PATIENT_NAME.tag,
      field(ValueRepresentation::PersonName, &["Doe^Jane"]),
    );
    record.insert_tag(
      dictionary::PATIENT_AGE.tag,
      field(ValueRepresentation::AgeString, &["025Y"]),
    );
    record.insert_tag(
      dictionary::STUDY_DATE.tag,
      field(ValueRepresentation::Date, &["19700101"]),
    );
    record.insert_tag(
      dictionary::SERIES_DATE.tag,
      field(ValueRepresentation::Date, &["20230401"]),
    );
    record.insert_tag(
      dictionary::MODALITY.tag,
      field(ValueRepresentation::CodeString, &["CT"]),
    );
    record.insert_tag(
      dictionary::INSTITUTION_NAME.tag,
      field(ValueRepresentation::LongString, &["General Hospital"]),
    );
    record.insert_tag(
      dictionary::PATIENT_COMMENTS.tag,
      field(ValueRepresentation::LongText, &["Comment"]),
    );

    record
  }

  #[test]
  fn validate_record_test() {
    let report = validate_record_with_defaults(&sample_record());

    assert_eq!(levels(&report, "00100010"), Some(vec![1]));
    assert_eq!(levels(&report, "00101010"), Some(vec![1]));
    assert_eq!(levels(&report, "00080020"), Some(vec![]));
    assert_eq!(levels(&report, "00080021"), Some(vec![2]));
    assert_eq!(levels(&report, "00080060"), Some(vec![]));
    assert_eq!(levels(&report, "00080080"), Some(vec![4]));

    // Long text has no rule so is left out of the report
    assert_eq!(levels(&report, "00104000"), None);
    assert_eq!(report.len(), 6);
  }

  #[test]
  fn empty_record_test() {
    assert!(validate_record_with_defaults(&DecodedRecord::new()).is_empty());
  }

  #[test]
  fn idempotence_test() {
    let record = sample_record();
    let original = record.clone();

    let first = validate_record_with_defaults(&record);
    let second = validate_record_with_defaults(&record);

    assert_eq!(first, second);
    assert_eq!(record, original);
  }

  #[test]
  fn unrecognized_vr_test() {
    let mut record = DecodedRecord::new();
    record.insert(
      "00091010",
      FieldRecord::new(
        FieldVr::Unrecognized("XX".to_string()),
        vec![FieldValue::from("Doe^Jane")],
      ),
    );

    let report = validate_record_with_defaults(&record);

    assert!(!report.contains("00091010"));
    assert!(report.is_empty());
  }

  #[test]
  fn undefined_vr_test() {
    let mut record = DecodedRecord::new();
    record.insert(
      "00091010",
      FieldRecord::new(FieldVr::Undefined, vec![FieldValue::from("Doe^Jane")]),
    );
    record.insert("00091011", FieldRecord::new(FieldVr::Undefined, vec![]));

    let report = validate_record_with_defaults(&record);

    for identity in ["00091010", "00091011"] {
      assert_eq!(
        report.get(identity),
        Some(
          &[Warning::new(
            WarningLevel::Abnormality,
            "VR field is undefined."
          )][..]
        )
      );
    }
  }

  #[test]
  fn burned_in_annotation_test() {
    let mut record = DecodedRecord::new();
    record.insert(
      "00280301",
      field(ValueRepresentation::CodeString, &["yes"]),
    );

    let report = validate_record_with_defaults(&record);

    // The policy warning replaces the lowercase code string warning
    assert_eq!(
      report.get("00280301"),
      Some(
        &[Warning::new(
          WarningLevel::PrivacyViolation,
          "Image contains burnt-in annotations which cannot be anonymized."
        )][..]
      )
    );

    record.insert("00280301", field(ValueRepresentation::CodeString, &["NO"]));
    assert_eq!(
      validate_record_with_defaults(&record).get("00280301"),
      Some(&[][..])
    );
  }

  #[test]
  fn reserved_field_without_override_test() {
    let mut record = DecodedRecord::new();
    record.insert(
      "00280302",
      field(ValueRepresentation::ShortString, &["NO", "0123456789ABCDEFG"]),
    );
    record.insert(
      "00120062",
      field(ValueRepresentation::CodeString, &["YES"]),
    );

    let report = validate_record_with_defaults(&record);

    // The generic result stands when a policy isn't triggered
    assert_eq!(levels(&report, "00280302"), Some(vec![3]));
    assert_eq!(levels(&report, "00120062"), Some(vec![]));
  }

  #[test]
  fn reserved_fields_triggered_test() {
    let mut record = DecodedRecord::new();
    record.insert(
      "00280302",
      field(ValueRepresentation::CodeString, &["YES"]),
    );
    record.insert("00120062", field(ValueRepresentation::CodeString, &["NO"]));

    let report = validate_record_with_defaults(&record);

    assert_eq!(
      report.get("00280302").map(|w| w[0].text.as_str()),
      Some(
        "Image contains recognizable visual features which cannot be \
         anonymized."
      )
    );
    assert_eq!(
      report.get("00120062").map(|w| w[0].text.as_str()),
      Some("Image has not had personal data removed.")
    );
  }

  #[test]
  fn reserved_field_with_unrecognized_vr_test() {
    let mut record = DecodedRecord::new();
    record.insert(
      "00280301",
      FieldRecord::new(
        FieldVr::Unrecognized("ZZ".to_string()),
        vec![FieldValue::from("YES")],
      ),
    );
    record.insert(
      "00120062",
      FieldRecord::new(
        ValueRepresentation::UnlimitedText,
        vec![FieldValue::from("NO")],
      ),
    );

    // Policies only apply to fields that were validated
    assert!(validate_record_with_defaults(&record).is_empty());
  }

  #[test]
  fn custom_dictionary_test() {
    let mut record = DecodedRecord::new();
    record.insert(
      "00280009",
      field(ValueRepresentation::AttributeTag, &["11112222", "00280009"]),
    );

    let known: std::collections::BTreeSet<String> =
      ["11112222".to_string()].into();

    let report =
      validate_record(&record, &ValidateConfig::default(), &known);

    assert_eq!(levels(&report, "00280009"), Some(vec![3]));
  }
}
