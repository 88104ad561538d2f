//! Lookup of the field identities that attribute tag values may reference.

use std::collections::{BTreeSet, HashSet};

use dcmaudit_core::{DataElementTag, dictionary};

/// Decides whether an attribute tag value references a recognized data
/// element.
///
pub trait TagDictionary: Send + Sync {
  /// Returns whether the given reference, e.g. `"00280009"`, is recognized.
  ///
  fn is_known(&self, reference: &str) -> bool;
}

/// A [`TagDictionary`] backed by the built-in data element dictionary in
/// [`dcmaudit_core::dictionary`]. References are matched case-insensitively.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltInTagDictionary;

impl TagDictionary for BuiltInTagDictionary {
  fn is_known(&self, reference: &str) -> bool {
    DataElementTag::from_hex_string(reference)
      .ok()
      .and_then(dictionary::find)
      .is_some()
  }
}

impl TagDictionary for HashSet<String> {
  fn is_known(&self, reference: &str) -> bool {
    self.contains(reference)
  }
}

impl TagDictionary for BTreeSet<String> {
  fn is_known(&self, reference: &str) -> bool {
    self.contains(reference)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn built_in_tag_dictionary_test() {
    assert!(BuiltInTagDictionary.is_known("00280009"));
    assert!(BuiltInTagDictionary.is_known("7fe00010"));
    assert!(BuiltInTagDictionary.is_known("00181065"));
    assert!(BuiltInTagDictionary.is_known("60020010"));
    assert!(!BuiltInTagDictionary.is_known("00280008A"));
    assert!(!BuiltInTagDictionary.is_known("00091001"));
  }

  #[test]
  fn set_tag_dictionary_test() {
    let known: BTreeSet<String> = ["11112222".to_string()].into();

    assert!(known.is_known("11112222"));
    assert!(!known.is_known("00280009"));
  }
}
