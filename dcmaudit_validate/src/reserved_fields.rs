//! Anonymization policies attached to specific data elements whose values
//! declare whether an image can be anonymized at all.
//!
//! When a policy is triggered its warning replaces all other warnings for the
//! field.

use dcmaudit_core::FieldValue;

use crate::{Warning, WarningLevel};

/// A policy for a single reserved field identity.
///
pub struct ReservedFieldPolicy {
  /// The identity of the field the policy applies to.
  pub identity: &'static str,

  /// Returns whether the field's value violates the policy.
  pub is_triggered: fn(&[FieldValue]) -> bool,

  /// The text of the level 1 warning that replaces the field's warnings when
  /// the policy is triggered.
  pub warning_text: &'static str,
}

impl ReservedFieldPolicy {
  /// Returns the replacement warning if the given value triggers this policy.
  ///
  pub fn evaluate(&self, value: &[FieldValue]) -> Option<Warning> {
    if (self.is_triggered)(value) {
      Some(Warning::new(WarningLevel::PrivacyViolation, self.warning_text))
    } else {
      None
    }
  }
}

/// The reserved field policies, applied in order.
///
/// The identities are the hexadecimal forms of *'(0028,0301) Burned In
/// Annotation'*, *'(0028,0302) Recognizable Visual Features'*, and
/// *'(0012,0062) Patient Identity Removed'*, see the tests below.
///
pub static RESERVED_FIELD_POLICIES: [ReservedFieldPolicy; 3] = [
  ReservedFieldPolicy {
    identity: "00280301",
    is_triggered: any_entry_not_no,
    warning_text: "Image contains burnt-in annotations which cannot be \
                   anonymized.",
  },
  ReservedFieldPolicy {
    identity: "00280302",
    is_triggered: any_entry_yes,
    warning_text: "Image contains recognizable visual features which cannot \
                   be anonymized.",
  },
  ReservedFieldPolicy {
    identity: "00120062",
    is_triggered: any_entry_no,
    warning_text: "Image has not had personal data removed.",
  },
];

#[cfg(test)]
fn policy_for(identity: &str) -> Option<&'static ReservedFieldPolicy> {
  RESERVED_FIELD_POLICIES
    .iter()
    .find(|policy| policy.identity == identity)
}

fn any_entry_not_no(value: &[FieldValue]) -> bool {
  value.iter().any(|entry| !entry.is_literal("NO"))
}

fn any_entry_yes(value: &[FieldValue]) -> bool {
  value.iter().any(|entry| entry.is_literal("YES"))
}

fn any_entry_no(value: &[FieldValue]) -> bool {
  value.iter().any(|entry| entry.is_literal("NO"))
}

#[cfg(test)]
mod tests {
  use super::*;

  use dcmaudit_core::dictionary;

  fn strings(value: &[&str]) -> Vec<FieldValue> {
    value.iter().map(|s| FieldValue::from(*s)).collect()
  }

  #[test]
  fn identities_test() {
    assert_eq!(
      RESERVED_FIELD_POLICIES
        .iter()
        .map(|policy| dictionary::identity_with_name(policy.identity))
        .collect::<Vec<_>>(),
      vec![
        "(0028,0301) Burned In Annotation",
        "(0028,0302) Recognizable Visual Features",
        "(0012,0062) Patient Identity Removed",
      ]
    );

    assert_eq!(
      RESERVED_FIELD_POLICIES[0].identity,
      dictionary::BURNED_IN_ANNOTATION.tag.to_hex_string()
    );
  }

  #[test]
  fn burned_in_annotation_test() {
    let policy = policy_for("00280301").unwrap();

    assert_eq!(policy.evaluate(&strings(&["NO"])), None);
    assert_eq!(policy.evaluate(&strings(&[])), None);
    assert_eq!(
      policy.evaluate(&strings(&["YES"])),
      Some(Warning::new(
        WarningLevel::PrivacyViolation,
        "Image contains burnt-in annotations which cannot be anonymized."
      ))
    );
    assert!(policy.evaluate(&strings(&["NO", ""])).is_some());
    assert!(policy.evaluate(&strings(&["no"])).is_some());
  }

  #[test]
  fn recognizable_visual_features_test() {
    let policy = policy_for("00280302").unwrap();

    assert_eq!(policy.evaluate(&strings(&["NO"])), None);
    assert_eq!(policy.evaluate(&strings(&["yes"])), None);
    assert_eq!(
      policy.evaluate(&strings(&["NO", "YES"])),
      Some(Warning::new(
        WarningLevel::PrivacyViolation,
        "Image contains recognizable visual features which cannot be \
         anonymized."
      ))
    );
  }

  #[test]
  fn patient_identity_removed_test() {
    let policy = policy_for("00120062").unwrap();

    assert_eq!(policy.evaluate(&strings(&["YES"])), None);
    assert_eq!(
      policy.evaluate(&strings(&["NO"])),
      Some(Warning::new(
        WarningLevel::PrivacyViolation,
        "Image has not had personal data removed."
      ))
    );
  }

  #[test]
  fn policy_for_test() {
    assert!(policy_for("00100010").is_none());
  }
}
