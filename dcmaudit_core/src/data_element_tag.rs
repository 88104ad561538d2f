//! A DICOM data element tag, defined as 16-bit `group` and `element` values.

/// A data element tag that is defined by `group` and `element` values, each of
/// which is a 16-bit unsigned integer.
///
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DataElementTag {
  pub group: u16,
  pub element: u16,
}

impl DataElementTag {
  /// Constructs a new data element tag from a group and an element.
  ///
  pub const fn new(group: u16, element: u16) -> Self {
    Self { group, element }
  }

  /// Returns whether the tag is a private tag, i.e. its group is odd.
  ///
  pub fn is_private(&self) -> bool {
    self.group % 2 == 1
  }

  /// Converts a tag to a single 32-bit integer where the group is in the high
  /// 16 bits and the element is in the low 16 bits.
  ///
  pub fn to_int(&self) -> u32 {
    ((self.group as u32) << 16) | (self.element as u32)
  }

  /// Formats a tag as an eight character uppercase hexadecimal string, e.g.
  /// `"00100010"`. This is the form used for data element keys in the DICOM
  /// JSON model.
  ///
  pub fn to_hex_string(&self) -> String {
    format!("{:08X}", self.to_int())
  }

  /// Parses a tag from an eight character hexadecimal string, e.g.
  /// `"00100010"`. Lowercase hexadecimal digits are accepted.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_hex_string(s: &str) -> Result<Self, ()> {
    if s.len() != 8 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(());
    }

    let value = u32::from_str_radix(s, 16).map_err(|_| ())?;

    Ok(Self::new((value >> 16) as u16, (value & 0xFFFF) as u16))
  }
}

impl core::fmt::Display for DataElementTag {
  /// Formats a tag as `(GGGG,EEEE)`.
  ///
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    write!(f, "({:04X},{:04X})", self.group, self.element)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_hex_string_test() {
    assert_eq!(DataElementTag::new(0x0028, 0x0301).to_hex_string(), "00280301");
    assert_eq!(DataElementTag::new(0xABCD, 0x00EF).to_hex_string(), "ABCD00EF");
  }

  #[test]
  fn from_hex_string_test() {
    assert_eq!(
      DataElementTag::from_hex_string("00120062"),
      Ok(DataElementTag::new(0x0012, 0x0062))
    );

    assert_eq!(
      DataElementTag::from_hex_string("abcd00ef"),
      Ok(DataElementTag::new(0xABCD, 0x00EF))
    );

    assert_eq!(DataElementTag::from_hex_string("0012006"), Err(()));
    assert_eq!(DataElementTag::from_hex_string("0012006G"), Err(()));
    assert_eq!(DataElementTag::from_hex_string("+0120062"), Err(()));
  }

  #[test]
  fn to_string_test() {
    assert_eq!(DataElementTag::new(0x0010, 0x0010).to_string(), "(0010,0010)");
  }

  #[test]
  fn is_private_test() {
    assert!(DataElementTag::new(0x0009, 0x0002).is_private());
    assert!(!DataElementTag::new(0x0010, 0x0010).is_private());
  }
}
