/// Configuration used when validating a decoded record.
///
#[derive(Clone, Debug, PartialEq)]
pub struct ValidateConfig {
  pub(crate) anonymized_date: String,
  pub(crate) anonymized_date_time: String,
}

impl Default for ValidateConfig {
  fn default() -> Self {
    Self {
      anonymized_date: "19700101".to_string(),
      anonymized_date_time: "19700101000000.000000".to_string(),
    }
  }
}

impl ValidateConfig {
  /// The value that an anonymization process is expected to have substituted
  /// for every date. Dates with any other value are reported as a possible
  /// leak of personal data.
  ///
  /// By default this is `"19700101"`.
  ///
  pub fn anonymized_date(mut self, value: &str) -> Self {
    self.anonymized_date = value.to_string();
    self
  }

  /// The value that an anonymization process is expected to have substituted
  /// for every date time. Date times with any other value are reported as a
  /// possible leak of personal data.
  ///
  /// By default this is `"19700101000000.000000"`.
  ///
  pub fn anonymized_date_time(mut self, value: &str) -> Self {
    self.anonymized_date_time = value.to_string();
    self
  }
}
