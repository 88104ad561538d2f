//! Audits decoded DICOM metadata for residual identifying information.
//!
//! This crate re-exports the dcmaudit libraries:
//!
//! - [`core`]: data element tags, value representations, decoded records, and
//!   the data element dictionary.
//! - [`json`]: reading decoded records from the DICOM JSON model.
//! - [`validate`]: the per-VR validation rules and warning reports.

pub mod core {
  pub use dcmaudit_core::*;
}

pub mod json {
  pub use dcmaudit_json::*;
}

pub mod validate {
  pub use dcmaudit_validate::*;
}
