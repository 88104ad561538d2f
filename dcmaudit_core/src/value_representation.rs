//! The DICOM value representations (VRs).
//!
//! Ref: PS3.5 6.2.

/// All DICOM value representations (VRs).
///
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ValueRepresentation {
  AgeString,
  ApplicationEntity,
  AttributeTag,
  CodeString,
  Date,
  DateTime,
  DecimalString,
  FloatingPointDouble,
  FloatingPointSingle,
  IntegerString,
  LongString,
  LongText,
  OtherByteString,
  OtherDoubleString,
  OtherFloatString,
  OtherLongString,
  OtherVeryLongString,
  OtherWordString,
  PersonName,
  Sequence,
  ShortString,
  ShortText,
  SignedLong,
  SignedShort,
  SignedVeryLong,
  Time,
  UniqueIdentifier,
  UniversalResourceIdentifier,
  Unknown,
  UnlimitedCharacters,
  UnlimitedText,
  UnsignedLong,
  UnsignedShort,
  UnsignedVeryLong,
}

impl ValueRepresentation {
  /// Every value representation, in order of their two-character codes.
  ///
  pub const ALL: [ValueRepresentation; 34] = [
    Self::ApplicationEntity,
    Self::AgeString,
    Self::AttributeTag,
    Self::CodeString,
    Self::Date,
    Self::DecimalString,
    Self::DateTime,
    Self::FloatingPointDouble,
    Self::FloatingPointSingle,
    Self::IntegerString,
    Self::LongString,
    Self::LongText,
    Self::OtherByteString,
    Self::OtherDoubleString,
    Self::OtherFloatString,
    Self::OtherLongString,
    Self::OtherVeryLongString,
    Self::OtherWordString,
    Self::PersonName,
    Self::ShortString,
    Self::SignedLong,
    Self::Sequence,
    Self::SignedShort,
    Self::ShortText,
    Self::SignedVeryLong,
    Self::Time,
    Self::UnlimitedCharacters,
    Self::UniqueIdentifier,
    Self::Unknown,
    Self::UniversalResourceIdentifier,
    Self::UnsignedLong,
    Self::UnsignedShort,
    Self::UnlimitedText,
    Self::UnsignedVeryLong,
  ];

  /// Parses a value representation from its two-character code, e.g. `"PN"`.
  /// Codes are case sensitive.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_code(code: &str) -> Result<Self, ()> {
    match code {
      "AE" => Ok(Self::ApplicationEntity),
      "AS" => Ok(Self::AgeString),
      "AT" => Ok(Self::AttributeTag),
      "CS" => Ok(Self::CodeString),
      "DA" => Ok(Self::Date),
      "DS" => Ok(Self::DecimalString),
      "DT" => Ok(Self::DateTime),
      "FD" => Ok(Self::FloatingPointDouble),
      "FL" => Ok(Self::FloatingPointSingle),
      "IS" => Ok(Self::IntegerString),
      "LO" => Ok(Self::LongString),
      "LT" => Ok(Self::LongText),
      "OB" => Ok(Self::OtherByteString),
      "OD" => Ok(Self::OtherDoubleString),
      "OF" => Ok(Self::OtherFloatString),
      "OL" => Ok(Self::OtherLongString),
      "OV" => Ok(Self::OtherVeryLongString),
      "OW" => Ok(Self::OtherWordString),
      "PN" => Ok(Self::PersonName),
      "SH" => Ok(Self::ShortString),
      "SL" => Ok(Self::SignedLong),
      "SQ" => Ok(Self::Sequence),
      "SS" => Ok(Self::SignedShort),
      "ST" => Ok(Self::ShortText),
      "SV" => Ok(Self::SignedVeryLong),
      "TM" => Ok(Self::Time),
      "UC" => Ok(Self::UnlimitedCharacters),
      "UI" => Ok(Self::UniqueIdentifier),
      "UL" => Ok(Self::UnsignedLong),
      "UN" => Ok(Self::Unknown),
      "UR" => Ok(Self::UniversalResourceIdentifier),
      "US" => Ok(Self::UnsignedShort),
      "UT" => Ok(Self::UnlimitedText),
      "UV" => Ok(Self::UnsignedVeryLong),
      _ => Err(()),
    }
  }

  /// Returns the two-character code for a value representation.
  ///
  pub fn code(&self) -> &'static str {
    match self {
      Self::AgeString => "AS",
      Self::ApplicationEntity => "AE",
      Self::AttributeTag => "AT",
      Self::CodeString => "CS",
      Self::Date => "DA",
      Self::DateTime => "DT",
      Self::DecimalString => "DS",
      Self::FloatingPointDouble => "FD",
      Self::FloatingPointSingle => "FL",
      Self::IntegerString => "IS",
      Self::LongString => "LO",
      Self::LongText => "LT",
      Self::OtherByteString => "OB",
      Self::OtherDoubleString => "OD",
      Self::OtherFloatString => "OF",
      Self::OtherLongString => "OL",
      Self::OtherVeryLongString => "OV",
      Self::OtherWordString => "OW",
      Self::PersonName => "PN",
      Self::Sequence => "SQ",
      Self::ShortString => "SH",
      Self::ShortText => "ST",
      Self::SignedLong => "SL",
      Self::SignedShort => "SS",
      Self::SignedVeryLong => "SV",
      Self::Time => "TM",
      Self::UniqueIdentifier => "UI",
      Self::UniversalResourceIdentifier => "UR",
      Self::Unknown => "UN",
      Self::UnlimitedCharacters => "UC",
      Self::UnlimitedText => "UT",
      Self::UnsignedLong => "UL",
      Self::UnsignedShort => "US",
      Self::UnsignedVeryLong => "UV",
    }
  }

  /// Returns the human-readable name of a value representation, e.g.
  /// `"PersonName"`.
  ///
  pub fn name(&self) -> &'static str {
    match self {
      Self::AgeString => "AgeString",
      Self::ApplicationEntity => "ApplicationEntity",
      Self::AttributeTag => "AttributeTag",
      Self::CodeString => "CodeString",
      Self::Date => "Date",
      Self::DateTime => "DateTime",
      Self::DecimalString => "DecimalString",
      Self::FloatingPointDouble => "FloatingPointDouble",
      Self::FloatingPointSingle => "FloatingPointSingle",
      Self::IntegerString => "IntegerString",
      Self::LongString => "LongString",
      Self::LongText => "LongText",
      Self::OtherByteString => "OtherByteString",
      Self::OtherDoubleString => "OtherDoubleString",
      Self::OtherFloatString => "OtherFloatString",
      Self::OtherLongString => "OtherLongString",
      Self::OtherVeryLongString => "OtherVeryLongString",
      Self::OtherWordString => "OtherWordString",
      Self::PersonName => "PersonName",
      Self::Sequence => "Sequence",
      Self::ShortString => "ShortString",
      Self::ShortText => "ShortText",
      Self::SignedLong => "SignedLong",
      Self::SignedShort => "SignedShort",
      Self::SignedVeryLong => "SignedVeryLong",
      Self::Time => "Time",
      Self::UniqueIdentifier => "UniqueIdentifier",
      Self::UniversalResourceIdentifier => "UniversalResourceIdentifier",
      Self::Unknown => "Unknown",
      Self::UnlimitedCharacters => "UnlimitedCharacters",
      Self::UnlimitedText => "UnlimitedText",
      Self::UnsignedLong => "UnsignedLong",
      Self::UnsignedShort => "UnsignedShort",
      Self::UnsignedVeryLong => "UnsignedVeryLong",
    }
  }

  /// Returns whether a value representation stores string data.
  ///
  pub fn is_string(&self) -> bool {
    matches!(
      self,
      Self::AgeString
        | Self::ApplicationEntity
        | Self::CodeString
        | Self::Date
        | Self::DateTime
        | Self::DecimalString
        | Self::IntegerString
        | Self::LongString
        | Self::LongText
        | Self::PersonName
        | Self::ShortString
        | Self::ShortText
        | Self::Time
        | Self::UniqueIdentifier
        | Self::UniversalResourceIdentifier
        | Self::UnlimitedCharacters
        | Self::UnlimitedText
    )
  }
}

impl core::fmt::Display for ValueRepresentation {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    f.write_str(self.code())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_code_test() {
    for vr in ValueRepresentation::ALL {
      assert_eq!(ValueRepresentation::from_code(vr.code()), Ok(vr));
    }

    assert_eq!(ValueRepresentation::from_code("pn"), Err(()));
    assert_eq!(ValueRepresentation::from_code("XX"), Err(()));
    assert_eq!(ValueRepresentation::from_code(""), Err(()));
  }

  #[test]
  fn to_string_test() {
    assert_eq!(ValueRepresentation::PersonName.to_string(), "PN");
    assert_eq!(ValueRepresentation::UnsignedVeryLong.to_string(), "UV");
  }

  #[test]
  fn name_test() {
    assert_eq!(ValueRepresentation::AgeString.name(), "AgeString");
    assert_eq!(ValueRepresentation::Unknown.name(), "Unknown");
  }

  #[test]
  fn is_string_test() {
    assert!(ValueRepresentation::PersonName.is_string());
    assert!(!ValueRepresentation::OtherWordString.is_string());
    assert!(!ValueRepresentation::Sequence.is_string());
  }
}
