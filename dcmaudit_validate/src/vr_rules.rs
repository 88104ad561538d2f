//! Per-VR validation rules for the values of decoded fields.
//!
//! Each value representation has its own syntax and its own risk of carrying
//! personal data. [`rule_for()`] selects the rule for a field's declared VR,
//! and the rule then returns warnings for the field's value entries in the
//! order they occur. Rules never fail: malformed values are themselves reported
//! as warnings.

use dcmaudit_core::{FieldValue, FieldVr, ValueRepresentation};

use crate::{TagDictionary, ValidateConfig, Warning, WarningLevel};

/// The maximum number of characters in a short string or decimal string value.
///
pub const SHORT_STRING_MAX_LENGTH: usize = 16;

/// The maximum number of characters in a short text value.
///
pub const SHORT_TEXT_MAX_LENGTH: usize = 1024;

/// The only letters permitted in decimal strings, integer strings, and times,
/// which are the exponent markers.
///
const EXPONENT_LETTERS: [char; 2] = ['e', 'E'];

/// The warning text raised for fields that have no value representation.
///
pub const UNDEFINED_VR_TEXT: &str = "VR field is undefined.";

/// Inputs shared by all validation rules.
///
pub struct RuleContext<'a> {
  pub config: &'a ValidateConfig,
  pub dictionary: &'a dyn TagDictionary,
}

/// A validation rule for the value of a field with a specific value
/// representation.
///
pub type VrRule = fn(&[FieldValue], &RuleContext) -> Vec<Warning>;

/// Returns the validation rule for a declared value representation, or `None`
/// if fields with this value representation aren't validated.
///
pub fn rule_for(vr: &FieldVr) -> Option<VrRule> {
  let vr = match vr {
    FieldVr::Known(vr) => vr,
    FieldVr::Undefined => return Some(undefined),
    FieldVr::Unrecognized(_) => return None,
  };

  match vr {
    ValueRepresentation::AgeString => Some(age_string),
    ValueRepresentation::AttributeTag => Some(attribute_tag),
    ValueRepresentation::CodeString => Some(code_string),
    ValueRepresentation::Date => Some(date),
    ValueRepresentation::DateTime => Some(date_time),
    ValueRepresentation::DecimalString => Some(decimal_string),
    ValueRepresentation::IntegerString => Some(integer_string),
    ValueRepresentation::LongString => Some(long_string),
    ValueRepresentation::PersonName => Some(person_name),
    ValueRepresentation::ShortString => Some(short_string),
    ValueRepresentation::ShortText => Some(short_text),
    ValueRepresentation::Time => Some(time),
    ValueRepresentation::UniqueIdentifier => Some(unique_identifier),

    // Application entities are too permissive to constrain, binary and
    // numeric values have arbitrary content, and sequences aren't recursed into
    ValueRepresentation::ApplicationEntity
    | ValueRepresentation::FloatingPointDouble
    | ValueRepresentation::FloatingPointSingle
    | ValueRepresentation::OtherByteString
    | ValueRepresentation::OtherDoubleString
    | ValueRepresentation::OtherFloatString
    | ValueRepresentation::OtherWordString
    | ValueRepresentation::Sequence
    | ValueRepresentation::SignedLong
    | ValueRepresentation::SignedShort
    | ValueRepresentation::UnsignedLong
    | ValueRepresentation::UnsignedShort => Some(no_check),

    ValueRepresentation::LongText
    | ValueRepresentation::OtherLongString
    | ValueRepresentation::OtherVeryLongString
    | ValueRepresentation::SignedVeryLong
    | ValueRepresentation::UniversalResourceIdentifier
    | ValueRepresentation::Unknown
    | ValueRepresentation::UnlimitedCharacters
    | ValueRepresentation::UnlimitedText
    | ValueRepresentation::UnsignedVeryLong => None,
  }
}

fn no_check(_value: &[FieldValue], _context: &RuleContext) -> Vec<Warning> {
  vec![]
}

fn undefined(_value: &[FieldValue], _context: &RuleContext) -> Vec<Warning> {
  vec![Warning::new(WarningLevel::Abnormality, UNDEFINED_VR_TEXT)]
}

/// Ages must not survive anonymization, so any non-empty entry is a privacy
/// violation.
///
fn age_string(value: &[FieldValue], _context: &RuleContext) -> Vec<Warning> {
  value
    .iter()
    .filter(|entry| !entry.is_empty())
    .map(|_| {
      Warning::new(
        WarningLevel::PrivacyViolation,
        "Age must not be present in anonymized data.",
      )
    })
    .collect()
}

fn attribute_tag(value: &[FieldValue], context: &RuleContext) -> Vec<Warning> {
  check_text_entries(value, |text, warnings| {
    let reference = text.trim();

    if !reference.is_empty() && !context.dictionary.is_known(reference) {
      warnings.push(Warning::new(
        WarningLevel::Abnormality,
        format!(
          "Attribute tag {:?} does not reference a known data element.",
          reference
        ),
      ));
    }
  })
}

fn code_string(value: &[FieldValue], _context: &RuleContext) -> Vec<Warning> {
  check_text_entries(value, |text, warnings| {
    if text.chars().any(char::is_lowercase) {
      warnings.push(Warning::new(
        WarningLevel::Abnormality,
        format!("Code string {:?} contains lowercase characters.", text),
      ));
    }
  })
}

fn date(value: &[FieldValue], context: &RuleContext) -> Vec<Warning> {
  check_sentinel(value, "Date", &context.config.anonymized_date)
}

fn date_time(value: &[FieldValue], context: &RuleContext) -> Vec<Warning> {
  check_sentinel(value, "Date time", &context.config.anonymized_date_time)
}

fn decimal_string(
  value: &[FieldValue],
  _context: &RuleContext,
) -> Vec<Warning> {
  value
    .iter()
    .flat_map(|entry| {
      check_text_entries(std::slice::from_ref(entry), |text, warnings| {
        if contains_disallowed_letter(text, &EXPONENT_LETTERS) {
          warnings.push(disallowed_letters_warning("Decimal string", text));
        }

        // Numbers are reformatted on decode, so only strings have a length
        if matches!(entry, FieldValue::String(_))
          && text.trim().chars().count() > SHORT_STRING_MAX_LENGTH
        {
          warnings.push(Warning::new(
            WarningLevel::Abnormality,
            format!(
              "Decimal string {:?} exceeds the maximum length of {} \
               characters.",
              text, SHORT_STRING_MAX_LENGTH
            ),
          ));
        }
      })
    })
    .collect()
}

fn integer_string(
  value: &[FieldValue],
  _context: &RuleContext,
) -> Vec<Warning> {
  check_text_entries(value, |text, warnings| {
    if contains_disallowed_letter(text, &EXPONENT_LETTERS) {
      warnings.push(disallowed_letters_warning("Integer string", text));
    }
  })
}

/// Long strings commonly hold free text such as institution names and
/// descriptions, so every entry is cautioned without inspecting its content.
///
fn long_string(value: &[FieldValue], _context: &RuleContext) -> Vec<Warning> {
  value
    .iter()
    .map(|_| {
      Warning::new(
        WarningLevel::Caution,
        "Long string values may contain personal data.",
      )
    })
    .collect()
}

fn person_name(value: &[FieldValue], _context: &RuleContext) -> Vec<Warning> {
  value
    .iter()
    .filter(|entry| !entry.is_empty())
    .map(|_| {
      Warning::new(
        WarningLevel::PrivacyViolation,
        "Person name must not be present in anonymized data.",
      )
    })
    .collect()
}

fn short_string(value: &[FieldValue], _context: &RuleContext) -> Vec<Warning> {
  check_text_entries(value, |text, warnings| {
    if text.trim().chars().count() > SHORT_STRING_MAX_LENGTH {
      warnings.push(Warning::new(
        WarningLevel::Abnormality,
        format!(
          "Short string {:?} exceeds the maximum length of {} characters.",
          text, SHORT_STRING_MAX_LENGTH
        ),
      ));
    }
  })
}

fn short_text(value: &[FieldValue], _context: &RuleContext) -> Vec<Warning> {
  check_text_entries(value, |text, warnings| {
    let length = text.trim().chars().count();

    if length > SHORT_TEXT_MAX_LENGTH {
      warnings.push(Warning::new(
        WarningLevel::Abnormality,
        format!(
          "Short text of {} characters exceeds the maximum length of {} \
           characters.",
          length, SHORT_TEXT_MAX_LENGTH
        ),
      ));
    }
  })
}

fn time(value: &[FieldValue], _context: &RuleContext) -> Vec<Warning> {
  check_text_entries(value, |text, warnings| {
    if contains_disallowed_letter(text, &EXPONENT_LETTERS) {
      warnings.push(disallowed_letters_warning("Time", text));
    }
  })
}

fn unique_identifier(
  value: &[FieldValue],
  _context: &RuleContext,
) -> Vec<Warning> {
  check_text_entries(value, |text, warnings| {
    if contains_disallowed_letter(text, &[]) {
      warnings.push(disallowed_letters_warning("Unique identifier", text));
    }
  })
}

/// Runs a check on the textual form of each entry. Entries that have no
/// textual form get a warning of their own.
///
fn check_text_entries(
  value: &[FieldValue],
  mut check: impl FnMut(&str, &mut Vec<Warning>),
) -> Vec<Warning> {
  let mut warnings = vec![];

  for entry in value {
    match entry.as_text() {
      Some(text) => check(&text, &mut warnings),
      None => warnings.push(Warning::new(
        WarningLevel::Abnormality,
        "Value is not a string or number.",
      )),
    }
  }

  warnings
}

/// Checks that every non-empty entry has been replaced with the anonymized
/// sentinel value.
///
fn check_sentinel(
  value: &[FieldValue],
  description: &str,
  sentinel: &str,
) -> Vec<Warning> {
  check_text_entries(value, |text, warnings| {
    let text = text.trim();

    if !text.is_empty() && text != sentinel {
      warnings.push(Warning::new(
        WarningLevel::PossibleLeak,
        format!(
          "{} {:?} has not been replaced with the anonymized value {:?}.",
          description, text, sentinel
        ),
      ));
    }
  })
}

/// Returns whether a value contains an ASCII letter that isn't in the allowed
/// set. Characters other than ASCII letters are not examined.
///
fn contains_disallowed_letter(value: &str, allowed_letters: &[char]) -> bool {
  value
    .chars()
    .any(|c| c.is_ascii_alphabetic() && !allowed_letters.contains(&c))
}

fn disallowed_letters_warning(description: &str, text: &str) -> Warning {
  Warning::new(
    WarningLevel::Abnormality,
    format!("{} {:?} contains disallowed letters.", description, text),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  use serde_json::json;

  use crate::BuiltInTagDictionary;

  fn run(vr: ValueRepresentation, value: &[FieldValue]) -> Vec<Warning> {
    let config = ValidateConfig::default();
    let context = RuleContext {
      config: &config,
      dictionary: &BuiltInTagDictionary,
    };

    rule_for(&FieldVr::Known(vr)).unwrap()(value, &context)
  }

  fn run_strings(vr: ValueRepresentation, value: &[&str]) -> Vec<Warning> {
    let value: Vec<_> = value.iter().map(|s| FieldValue::from(*s)).collect();
    run(vr, &value)
  }

  fn levels(warnings: &[Warning]) -> Vec<u8> {
    warnings.iter().map(|w| w.level.as_u8()).collect()
  }

  fn ascii_letters() -> impl Iterator<Item = char> {
    ('a'..='z').chain('A'..='Z')
  }

  #[test]
  fn rule_for_test() {
    assert!(rule_for(&FieldVr::Undefined).is_some());
    assert!(rule_for(&FieldVr::Unrecognized("ZZ".to_string())).is_none());

    let unvalidated = [
      ValueRepresentation::LongText,
      ValueRepresentation::OtherLongString,
      ValueRepresentation::OtherVeryLongString,
      ValueRepresentation::SignedVeryLong,
      ValueRepresentation::UniversalResourceIdentifier,
      ValueRepresentation::Unknown,
      ValueRepresentation::UnlimitedCharacters,
      ValueRepresentation::UnlimitedText,
      ValueRepresentation::UnsignedVeryLong,
    ];

    for vr in ValueRepresentation::ALL {
      assert_eq!(
        rule_for(&FieldVr::Known(vr)).is_none(),
        unvalidated.contains(&vr),
        "{vr}"
      );
    }
  }

  #[test]
  fn empty_value_test() {
    for vr in ValueRepresentation::ALL {
      if let Some(rule) = rule_for(&FieldVr::Known(vr)) {
        let config = ValidateConfig::default();
        let context = RuleContext {
          config: &config,
          dictionary: &BuiltInTagDictionary,
        };

        assert_eq!(rule(&[], &context), vec![], "{vr}");
      }
    }
  }

  #[test]
  fn unchecked_test() {
    for vr in [
      ValueRepresentation::ApplicationEntity,
      ValueRepresentation::FloatingPointDouble,
      ValueRepresentation::FloatingPointSingle,
      ValueRepresentation::OtherByteString,
      ValueRepresentation::OtherDoubleString,
      ValueRepresentation::OtherFloatString,
      ValueRepresentation::OtherWordString,
      ValueRepresentation::Sequence,
      ValueRepresentation::SignedLong,
      ValueRepresentation::SignedShort,
      ValueRepresentation::UnsignedLong,
      ValueRepresentation::UnsignedShort,
    ] {
      assert_eq!(
        run(
          vr,
          &[
            FieldValue::from("anything at all"),
            FieldValue::from(-1),
            FieldValue::from(json!([{ "00100010": { "vr": "PN" } }])),
          ]
        ),
        vec![],
        "{vr}"
      );
    }
  }

  #[test]
  fn undefined_test() {
    let config = ValidateConfig::default();
    let context = RuleContext {
      config: &config,
      dictionary: &BuiltInTagDictionary,
    };
    let rule = rule_for(&FieldVr::Undefined).unwrap();

    let expected =
      vec![Warning::new(WarningLevel::Abnormality, "VR field is undefined.")];

    assert_eq!(rule(&[], &context), expected);
    assert_eq!(
      rule(&[FieldValue::from("A"), FieldValue::from("B")], &context),
      expected
    );
  }

  #[test]
  fn age_string_test() {
    let vr = ValueRepresentation::AgeString;

    assert_eq!(run_strings(vr, &[]), vec![]);
    assert_eq!(run_strings(vr, &[""]), vec![]);
    assert_eq!(levels(&run_strings(vr, &["25Y"])), vec![1]);
    assert_eq!(levels(&run_strings(vr, &["025Y", "", "3M"])), vec![1, 1]);
  }

  #[test]
  fn attribute_tag_test() {
    let vr = ValueRepresentation::AttributeTag;

    assert_eq!(run_strings(vr, &["00280009", "7fe00010"]), vec![]);
    assert_eq!(
      run_strings(vr, &["00280009", "00091001"]),
      vec![Warning::new(
        WarningLevel::Abnormality,
        "Attribute tag \"00091001\" does not reference a known data element."
      )]
    );
    assert_eq!(levels(&run_strings(vr, &["nonsense"])), vec![3]);
  }

  #[test]
  fn code_string_test() {
    let vr = ValueRepresentation::CodeString;

    assert_eq!(run_strings(vr, &["ORIGINAL", "PRIMARY", "AXIAL_1 "]), vec![]);
    assert_eq!(
      run_strings(vr, &["ORIGINAL", "Primary"]),
      vec![Warning::new(
        WarningLevel::Abnormality,
        "Code string \"Primary\" contains lowercase characters."
      )]
    );
  }

  #[test]
  fn date_test() {
    let vr = ValueRepresentation::Date;

    assert_eq!(run_strings(vr, &["19700101"]), vec![]);
    assert_eq!(run_strings(vr, &[""]), vec![]);
    assert_eq!(
      run_strings(vr, &["20230401"]),
      vec![Warning::new(
        WarningLevel::PossibleLeak,
        "Date \"20230401\" has not been replaced with the anonymized value \
         \"19700101\"."
      )]
    );
    assert_eq!(levels(&run_strings(vr, &["1970-01-01"])), vec![2]);
  }

  #[test]
  fn date_time_test() {
    let vr = ValueRepresentation::DateTime;

    assert_eq!(run_strings(vr, &["19700101000000.000000"]), vec![]);
    assert_eq!(
      levels(&run_strings(vr, &["20230401101500", "19700101000000.000000"])),
      vec![2]
    );
  }

  #[test]
  fn sentinel_config_test() {
    let config = ValidateConfig::default()
      .anonymized_date("20000101")
      .anonymized_date_time("20000101120000");
    let context = RuleContext {
      config: &config,
      dictionary: &BuiltInTagDictionary,
    };

    let date_rule = rule_for(&ValueRepresentation::Date.into()).unwrap();
    assert_eq!(date_rule(&[FieldValue::from("20000101")], &context), vec![]);
    assert_eq!(
      levels(&date_rule(&[FieldValue::from("19700101")], &context)),
      vec![2]
    );

    let date_time_rule =
      rule_for(&ValueRepresentation::DateTime.into()).unwrap();
    assert_eq!(
      date_time_rule(&[FieldValue::from("20000101120000")], &context),
      vec![]
    );
  }

  #[test]
  fn decimal_string_test() {
    let vr = ValueRepresentation::DecimalString;

    assert_eq!(
      run_strings(vr, &["0", "-1.5e+10", "+3.25E-2", " 12.5 "]),
      vec![]
    );
    assert_eq!(run(vr, &[FieldValue::from(7)]), vec![]);
    assert_eq!(run(vr, &[FieldValue::from(json!(0.123456789012345))]), vec![]);

    for letter in ascii_letters().filter(|c| !EXPONENT_LETTERS.contains(c)) {
      assert_eq!(
        levels(&run_strings(vr, &[format!("1{letter}").as_str()])),
        vec![3],
        "{letter}"
      );
    }

    assert_eq!(
      run_strings(vr, &["1234567890.1234567"]),
      vec![Warning::new(
        WarningLevel::Abnormality,
        "Decimal string \"1234567890.1234567\" exceeds the maximum length of 16 \
         characters."
      )]
    );

    // Both checks fire independently
    assert_eq!(levels(&run_strings(vr, &["1234567890.123456x"])), vec![3, 3]);
  }

  #[test]
  fn integer_string_test() {
    let vr = ValueRepresentation::IntegerString;

    assert_eq!(run_strings(vr, &["-123", "+45", "1e3", "2E1"]), vec![]);

    for letter in ascii_letters().filter(|c| !EXPONENT_LETTERS.contains(c)) {
      assert_eq!(
        levels(&run_strings(vr, &[format!("{letter}12").as_str()])),
        vec![3],
        "{letter}"
      );
    }
  }

  #[test]
  fn long_string_test() {
    let vr = ValueRepresentation::LongString;

    assert_eq!(run_strings(vr, &[]), vec![]);
    assert_eq!(
      run_strings(vr, &["General Hospital", ""]),
      vec![
        Warning::new(
          WarningLevel::Caution,
          "Long string values may contain personal data."
        );
        2
      ]
    );
  }

  #[test]
  fn person_name_test() {
    let vr = ValueRepresentation::PersonName;

    assert_eq!(run_strings(vr, &[""]), vec![]);
    assert_eq!(
      run_strings(vr, &["Jane Doe"]),
      vec![Warning::new(
        WarningLevel::PrivacyViolation,
        "Person name must not be present in anonymized data."
      )]
    );
    assert_eq!(levels(&run_strings(vr, &["Doe^Jane", "", "Roe^R"])), vec![1, 1]);

    assert_eq!(
      levels(&run(
        vr,
        &[
          FieldValue::from(json!({ "Alphabetic": "Doe^Jane" })),
          FieldValue::from(json!({ "Alphabetic": "" })),
          FieldValue::from(json!(null)),
        ]
      )),
      vec![1]
    );
  }

  #[test]
  fn short_string_test() {
    let vr = ValueRepresentation::ShortString;

    assert_eq!(run_strings(vr, &["ACC123", "0123456789ABCDEF"]), vec![]);
    assert_eq!(run_strings(vr, &["  0123456789ABCDEF  "]), vec![]);
    assert_eq!(
      run_strings(vr, &["0123456789ABCDEFG"]),
      vec![Warning::new(
        WarningLevel::Abnormality,
        "Short string \"0123456789ABCDEFG\" exceeds the maximum length of 16 \
         characters."
      )]
    );
  }

  #[test]
  fn short_text_test() {
    let vr = ValueRepresentation::ShortText;

    let longest = "x".repeat(1024);
    let too_long = "x".repeat(1025);

    assert_eq!(run_strings(vr, &[longest.as_str()]), vec![]);
    assert_eq!(
      run_strings(vr, &[too_long.as_str()]),
      vec![Warning::new(
        WarningLevel::Abnormality,
        "Short text of 1025 characters exceeds the maximum length of 1024 \
         characters."
      )]
    );
  }

  #[test]
  fn time_test() {
    let vr = ValueRepresentation::Time;

    assert_eq!(run_strings(vr, &["235959.123456", "0930", "23:59:59"]), vec![]);

    for letter in ascii_letters().filter(|c| !EXPONENT_LETTERS.contains(c)) {
      assert_eq!(
        levels(&run_strings(vr, &[format!("12{letter}00").as_str()])),
        vec![3],
        "{letter}"
      );
    }
  }

  #[test]
  fn unique_identifier_test() {
    let vr = ValueRepresentation::UniqueIdentifier;

    assert_eq!(run_strings(vr, &["1.2.840.10008.5.1.4.1.1.2"]), vec![]);

    for letter in ascii_letters() {
      assert_eq!(
        levels(&run_strings(vr, &[format!("1.2.{letter}").as_str()])),
        vec![3],
        "{letter}"
      );
    }
  }

  #[test]
  fn structured_entry_test() {
    assert_eq!(
      run(
        ValueRepresentation::CodeString,
        &[FieldValue::from(json!({ "A": 1 })), FieldValue::from("NO")]
      ),
      vec![Warning::new(
        WarningLevel::Abnormality,
        "Value is not a string or number."
      )]
    );
  }
}
