//! Core types for auditing decoded DICOM metadata: data element tags, value
//! representations, decoded records and their field values, and the data
//! element dictionary.

pub mod data_element_tag;
pub mod decoded_record;
pub mod dictionary;
pub mod error;
pub mod field_value;
pub mod value_representation;

pub use data_element_tag::DataElementTag;
pub use decoded_record::{DecodedRecord, FieldRecord, FieldVr};
pub use error::DcmauditError;
pub use field_value::FieldValue;
pub use value_representation::ValueRepresentation;
