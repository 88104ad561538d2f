//! Reads decoded records from the DICOM JSON model.
//!
//! See [Part 18 Annex F of the DICOM Standard](https://dicom.nema.org/medical/dicom/current/output/chtml/part18/chapter_F.html)
//! for details on the DICOM JSON model.

mod json_error;
mod json_read;

pub use json_error::JsonDeserializeError;
pub use json_read::{read_record_from_file, read_record_from_str};
