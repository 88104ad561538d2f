//! Audits decoded DICOM metadata for anonymization problems.
//!
//! Each field of a [`DecodedRecord`](dcmaudit_core::DecodedRecord) is checked
//! by the rule for its value representation, producing a [`WarningReport`]
//! that maps field identities to graded warnings. Fields that declare whether
//! an image can be anonymized at all are then checked against their reserved
//! field policies.

pub mod report;
pub mod reserved_fields;
pub mod supported_sop_classes;
pub mod tag_dictionary;
pub mod validate_config;
pub mod vr_rules;
pub mod warning;

pub use report::{validate_record, validate_record_with_defaults};
pub use tag_dictionary::{BuiltInTagDictionary, TagDictionary};
pub use validate_config::ValidateConfig;
pub use warning::{Warning, WarningLevel, WarningReport};
