//! The DICOM data dictionary, used to name data elements in output and to
//! check attribute tag references.
//!
//! Every public data element is known, including those in repeating groups
//! such as overlays and curves. Named items are provided for the data elements
//! that dcmaudit refers to directly.

mod registry;

use crate::DataElementTag;

/// A single data element definition in the dictionary.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
  pub tag: DataElementTag,
  pub name: &'static str,
}

const fn item(group: u16, element: u16, name: &'static str) -> Item {
  Item {
    tag: DataElementTag::new(group, element),
    name,
  }
}

pub const SPECIFIC_CHARACTER_SET: Item =
  item(0x0008, 0x0005, "Specific Character Set");
pub const IMAGE_TYPE: Item = item(0x0008, 0x0008, "Image Type");
pub const INSTANCE_CREATION_DATE: Item =
  item(0x0008, 0x0012, "Instance Creation Date");
pub const INSTANCE_CREATION_TIME: Item =
  item(0x0008, 0x0013, "Instance Creation Time");
pub const INSTANCE_CREATOR_UID: Item =
  item(0x0008, 0x0014, "Instance Creator UID");
pub const SOP_CLASS_UID: Item = item(0x0008, 0x0016, "SOP Class UID");
pub const SOP_INSTANCE_UID: Item = item(0x0008, 0x0018, "SOP Instance UID");
pub const STUDY_DATE: Item = item(0x0008, 0x0020, "Study Date");
pub const SERIES_DATE: Item = item(0x0008, 0x0021, "Series Date");
pub const ACQUISITION_DATE: Item = item(0x0008, 0x0022, "Acquisition Date");
pub const CONTENT_DATE: Item = item(0x0008, 0x0023, "Content Date");
pub const ACQUISITION_DATE_TIME: Item =
  item(0x0008, 0x002A, "Acquisition DateTime");
pub const STUDY_TIME: Item = item(0x0008, 0x0030, "Study Time");
pub const SERIES_TIME: Item = item(0x0008, 0x0031, "Series Time");
pub const ACQUISITION_TIME: Item = item(0x0008, 0x0032, "Acquisition Time");
pub const CONTENT_TIME: Item = item(0x0008, 0x0033, "Content Time");
pub const ACCESSION_NUMBER: Item = item(0x0008, 0x0050, "Accession Number");
pub const MODALITY: Item = item(0x0008, 0x0060, "Modality");
pub const CONVERSION_TYPE: Item = item(0x0008, 0x0064, "Conversion Type");
pub const MANUFACTURER: Item = item(0x0008, 0x0070, "Manufacturer");
pub const INSTITUTION_NAME: Item = item(0x0008, 0x0080, "Institution Name");
pub const INSTITUTION_ADDRESS: Item =
  item(0x0008, 0x0081, "Institution Address");
pub const REFERRING_PHYSICIAN_NAME: Item =
  item(0x0008, 0x0090, "Referring Physician's Name");
pub const STATION_NAME: Item = item(0x0008, 0x1010, "Station Name");
pub const STUDY_DESCRIPTION: Item = item(0x0008, 0x1030, "Study Description");
pub const SERIES_DESCRIPTION: Item = item(0x0008, 0x103E, "Series Description");
pub const INSTITUTIONAL_DEPARTMENT_NAME: Item =
  item(0x0008, 0x1040, "Institutional Department Name");
pub const PERFORMING_PHYSICIAN_NAME: Item =
  item(0x0008, 0x1050, "Performing Physician's Name");
pub const OPERATORS_NAME: Item = item(0x0008, 0x1070, "Operators' Name");
pub const MANUFACTURER_MODEL_NAME: Item =
  item(0x0008, 0x1090, "Manufacturer's Model Name");
pub const PATIENT_NAME: Item = item(0x0010, 0x0010, "Patient's Name");
pub const PATIENT_ID: Item = item(0x0010, 0x0020, "Patient ID");
pub const PATIENT_BIRTH_DATE: Item =
  item(0x0010, 0x0030, "Patient's Birth Date");
pub const PATIENT_BIRTH_TIME: Item =
  item(0x0010, 0x0032, "Patient's Birth Time");
pub const PATIENT_SEX: Item = item(0x0010, 0x0040, "Patient's Sex");
pub const PATIENT_AGE: Item = item(0x0010, 0x1010, "Patient's Age");
pub const PATIENT_SIZE: Item = item(0x0010, 0x1020, "Patient's Size");
pub const PATIENT_WEIGHT: Item = item(0x0010, 0x1030, "Patient's Weight");
pub const ETHNIC_GROUP: Item = item(0x0010, 0x2160, "Ethnic Group");
pub const PATIENT_COMMENTS: Item = item(0x0010, 0x4000, "Patient Comments");
pub const PATIENT_IDENTITY_REMOVED: Item =
  item(0x0012, 0x0062, "Patient Identity Removed");
pub const DEIDENTIFICATION_METHOD: Item =
  item(0x0012, 0x0063, "De-identification Method");
pub const BODY_PART_EXAMINED: Item = item(0x0018, 0x0015, "Body Part Examined");
pub const SLICE_THICKNESS: Item = item(0x0018, 0x0050, "Slice Thickness");
pub const DEVICE_SERIAL_NUMBER: Item =
  item(0x0018, 0x1000, "Device Serial Number");
pub const SOFTWARE_VERSIONS: Item = item(0x0018, 0x1020, "Software Versions");
pub const PROTOCOL_NAME: Item = item(0x0018, 0x1030, "Protocol Name");
pub const FRAME_TIME: Item = item(0x0018, 0x1063, "Frame Time");
pub const STUDY_INSTANCE_UID: Item = item(0x0020, 0x000D, "Study Instance UID");
pub const SERIES_INSTANCE_UID: Item =
  item(0x0020, 0x000E, "Series Instance UID");
pub const STUDY_ID: Item = item(0x0020, 0x0010, "Study ID");
pub const SERIES_NUMBER: Item = item(0x0020, 0x0011, "Series Number");
pub const INSTANCE_NUMBER: Item = item(0x0020, 0x0013, "Instance Number");
pub const IMAGE_POSITION_PATIENT: Item =
  item(0x0020, 0x0032, "Image Position (Patient)");
pub const IMAGE_ORIENTATION_PATIENT: Item =
  item(0x0020, 0x0037, "Image Orientation (Patient)");
pub const FRAME_OF_REFERENCE_UID: Item =
  item(0x0020, 0x0052, "Frame of Reference UID");
pub const SAMPLES_PER_PIXEL: Item = item(0x0028, 0x0002, "Samples per Pixel");
pub const PHOTOMETRIC_INTERPRETATION: Item =
  item(0x0028, 0x0004, "Photometric Interpretation");
pub const NUMBER_OF_FRAMES: Item = item(0x0028, 0x0008, "Number of Frames");
pub const FRAME_INCREMENT_POINTER: Item =
  item(0x0028, 0x0009, "Frame Increment Pointer");
pub const ROWS: Item = item(0x0028, 0x0010, "Rows");
pub const COLUMNS: Item = item(0x0028, 0x0011, "Columns");
pub const PIXEL_SPACING: Item = item(0x0028, 0x0030, "Pixel Spacing");
pub const BITS_ALLOCATED: Item = item(0x0028, 0x0100, "Bits Allocated");
pub const BITS_STORED: Item = item(0x0028, 0x0101, "Bits Stored");
pub const HIGH_BIT: Item = item(0x0028, 0x0102, "High Bit");
pub const PIXEL_REPRESENTATION: Item =
  item(0x0028, 0x0103, "Pixel Representation");
pub const BURNED_IN_ANNOTATION: Item =
  item(0x0028, 0x0301, "Burned In Annotation");
pub const RECOGNIZABLE_VISUAL_FEATURES: Item =
  item(0x0028, 0x0302, "Recognizable Visual Features");
pub const WINDOW_CENTER: Item = item(0x0028, 0x1050, "Window Center");
pub const WINDOW_WIDTH: Item = item(0x0028, 0x1051, "Window Width");
pub const RESCALE_INTERCEPT: Item = item(0x0028, 0x1052, "Rescale Intercept");
pub const RESCALE_SLOPE: Item = item(0x0028, 0x1053, "Rescale Slope");
pub const REQUESTED_PROCEDURE_DESCRIPTION: Item =
  item(0x0032, 0x1060, "Requested Procedure Description");
pub const PIXEL_DATA: Item = item(0x7FE0, 0x0010, "Pixel Data");

/// Looks up the dictionary item for a tag. Private tags are never found.
///
pub fn find(tag: DataElementTag) -> Option<Item> {
  if tag.is_private() {
    return None;
  }

  let name = match registry::REGISTRY
    .binary_search_by_key(&tag.to_int(), |(key, _)| *key)
  {
    Ok(index) => registry::REGISTRY[index].1,
    Err(_) => find_repeating(tag)?,
  };

  Some(Item { tag, name })
}

/// Names the data elements whose tags fall in a repeating group or range,
/// along with the generic group length element of every public group.
///
fn find_repeating(tag: DataElementTag) -> Option<&'static str> {
  let DataElementTag { group, element } = tag;

  match group {
    0x0020 if element & 0xFF00 == 0x3100 => Some("Source Image IDs"),

    0x0028 if element & 0xFF00 == 0x0400 => match element & 0x000F {
      0x0 => Some("Rows For Nth Order Coefficients"),
      0x1 => Some("Columns For Nth Order Coefficients"),
      0x2 => Some("Coefficient Coding"),
      0x3 => Some("Coefficient Coding Pointers"),
      _ => None,
    },

    0x0028 if element & 0xFF00 == 0x0800 => match element & 0x000F {
      0x0 => Some("Code Label"),
      0x2 => Some("Number of Tables"),
      0x3 => Some("Code Table Location"),
      0x4 => Some("Bits For Code Word"),
      0x8 => Some("Image Data Location"),
      _ => None,
    },

    0x1000 => match element & 0x000F {
      0x0 => Some("Escape Triplet"),
      0x1 => Some("Run Length Triplet"),
      0x2 => Some("Huffman Table Size"),
      0x3 => Some("Huffman Table Triplet"),
      0x4 => Some("Shift Table Size"),
      0x5 => Some("Shift Table Triplet"),
      _ => None,
    },

    0x1010 => Some("Zonal Map"),

    0x5000..=0x501E => curve_element_name(element),
    0x6000..=0x601E => overlay_element_name(element),

    0x7F00..=0x7F1E => match element {
      0x0010 => Some("Variable Pixel Data"),
      0x0011 => Some("Variable Next Data Group"),
      0x0020 => Some("Variable Coefficients SDVN"),
      0x0030 => Some("Variable Coefficients SDHN"),
      0x0040 => Some("Variable Coefficients SDDN"),
      _ => None,
    },

    _ if element == 0x0000 => Some("Group Length"),

    _ => None,
  }
}

fn curve_element_name(element: u16) -> Option<&'static str> {
  match element {
    0x0000 => Some("Group Length"),
    0x0005 => Some("Curve Dimensions"),
    0x0010 => Some("Number of Points"),
    0x0020 => Some("Type of Data"),
    0x0022 => Some("Curve Description"),
    0x0030 => Some("Axis Units"),
    0x0040 => Some("Axis Labels"),
    0x0103 => Some("Data Value Representation"),
    0x0104 => Some("Minimum Coordinate Value"),
    0x0105 => Some("Maximum Coordinate Value"),
    0x0106 => Some("Curve Range"),
    0x0110 => Some("Curve Data Descriptor"),
    0x0112 => Some("Coordinate Start Value"),
    0x0114 => Some("Coordinate Step Value"),
    0x1001 => Some("Curve Activation Layer"),
    0x2000 => Some("Audio Type"),
    0x2002 => Some("Audio Sample Format"),
    0x2004 => Some("Number of Channels"),
    0x2006 => Some("Number of Samples"),
    0x2008 => Some("Sample Rate"),
    0x200A => Some("Total Time"),
    0x200C => Some("Audio Sample Data"),
    0x200E => Some("Audio Comments"),
    0x2500 => Some("Curve Label"),
    0x2600 => Some("Curve Referenced Overlay Sequence"),
    0x2610 => Some("Curve Referenced Overlay Group"),
    0x3000 => Some("Curve Data"),
    _ => None,
  }
}

fn overlay_element_name(element: u16) -> Option<&'static str> {
  match element {
    0x0000 => Some("Group Length"),
    0x0010 => Some("Overlay Rows"),
    0x0011 => Some("Overlay Columns"),
    0x0012 => Some("Overlay Planes"),
    0x0015 => Some("Number of Frames in Overlay"),
    0x0022 => Some("Overlay Description"),
    0x0040 => Some("Overlay Type"),
    0x0045 => Some("Overlay Subtype"),
    0x0050 => Some("Overlay Origin"),
    0x0051 => Some("Image Frame Origin"),
    0x0052 => Some("Overlay Plane Origin"),
    0x0060 => Some("Overlay Compression Code"),
    0x0061 => Some("Overlay Compression Originator"),
    0x0062 => Some("Overlay Compression Label"),
    0x0063 => Some("Overlay Compression Description"),
    0x0066 => Some("Overlay Compression Step Pointers"),
    0x0068 => Some("Overlay Repeat Interval"),
    0x0069 => Some("Overlay Bits Grouped"),
    0x0100 => Some("Overlay Bits Allocated"),
    0x0102 => Some("Overlay Bit Position"),
    0x0110 => Some("Overlay Format"),
    0x0200 => Some("Overlay Location"),
    0x0800 => Some("Overlay Code Label"),
    0x0802 => Some("Overlay Number of Tables"),
    0x0803 => Some("Overlay Code Table Location"),
    0x0804 => Some("Overlay Bits For Code Word"),
    0x1001 => Some("Overlay Activation Layer"),
    0x1100 => Some("Overlay Descriptor - Gray"),
    0x1101 => Some("Overlay Descriptor - Red"),
    0x1102 => Some("Overlay Descriptor - Green"),
    0x1103 => Some("Overlay Descriptor - Blue"),
    0x1200 => Some("Overlays - Gray"),
    0x1201 => Some("Overlays - Red"),
    0x1202 => Some("Overlays - Green"),
    0x1203 => Some("Overlays - Blue"),
    0x1301 => Some("ROI Area"),
    0x1302 => Some("ROI Mean"),
    0x1303 => Some("ROI Standard Deviation"),
    0x1500 => Some("Overlay Label"),
    0x3000 => Some("Overlay Data"),
    0x4000 => Some("Overlay Comments"),
    _ => None,
  }
}

/// Returns the name of the data element with the given tag. Tags that aren't in
/// the dictionary are named `"Private"` or `"Unknown"`.
///
pub fn tag_name(tag: DataElementTag) -> &'static str {
  match find(tag) {
    Some(item) => item.name,
    None if tag.is_private() => "Private",
    None => "Unknown",
  }
}

/// Formats a tag along with its name, e.g. `"(0010,0010) Patient's Name"`.
///
pub fn tag_with_name(tag: DataElementTag) -> String {
  format!("{} {}", tag, tag_name(tag))
}

/// Formats a field identity for display. Identities that are data element tags
/// are shown with their name, and all other identities are returned unchanged.
///
pub fn identity_with_name(identity: &str) -> String {
  match DataElementTag::from_hex_string(identity) {
    Ok(tag) => tag_with_name(tag),
    Err(()) => identity.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn registry_is_sorted_test() {
    assert!(registry::REGISTRY.windows(2).all(|w| w[0].0 < w[1].0));
  }

  #[test]
  fn named_items_test() {
    for item in NAMED_ITEMS {
      assert_eq!(find(item.tag), Some(*item));
    }
  }

  #[test]
  fn find_test() {
    assert_eq!(
      find(DataElementTag::new(0x0028, 0x0301)),
      Some(BURNED_IN_ANNOTATION)
    );
    assert_eq!(
      find(DataElementTag::new(0x0018, 0x1065)).map(|item| item.name),
      Some("Frame Time Vector")
    );
    assert_eq!(
      find(DataElementTag::new(0x0054, 0x1330)).map(|item| item.name),
      Some("Image Index")
    );
    assert_eq!(find(DataElementTag::new(0x0040, 0xFFFF)), None);
    assert_eq!(find(DataElementTag::new(0x0009, 0x1001)), None);
  }

  #[test]
  fn find_repeating_test() {
    assert_eq!(
      find(DataElementTag::new(0x6000, 0x3000)).map(|item| item.name),
      Some("Overlay Data")
    );
    assert_eq!(
      find(DataElementTag::new(0x601E, 0x0010)).map(|item| item.name),
      Some("Overlay Rows")
    );
    assert_eq!(
      find(DataElementTag::new(0x5002, 0x3000)).map(|item| item.name),
      Some("Curve Data")
    );
    assert_eq!(
      find(DataElementTag::new(0x0020, 0x3105)).map(|item| item.name),
      Some("Source Image IDs")
    );
    assert_eq!(
      find(DataElementTag::new(0x0018, 0x0000)).map(|item| item.name),
      Some("Group Length")
    );

    assert_eq!(find(DataElementTag::new(0x6001, 0x3000)), None);
    assert_eq!(find(DataElementTag::new(0x6020, 0x3000)), None);
    assert_eq!(find(DataElementTag::new(0x6000, 0x0001)), None);
  }

  #[test]
  fn tag_name_test() {
    assert_eq!(tag_name(PATIENT_NAME.tag), "Patient's Name");
    assert_eq!(tag_name(DataElementTag::new(0x0009, 0x0010)), "Private");
    assert_eq!(tag_name(DataElementTag::new(0x0040, 0xFFFF)), "Unknown");
  }

  #[test]
  fn identity_with_name_test() {
    assert_eq!(
      identity_with_name("00120062"),
      "(0012,0062) Patient Identity Removed"
    );
    assert_eq!(
      identity_with_name("00181065"),
      "(0018,1065) Frame Time Vector"
    );
    assert_eq!(identity_with_name("custom"), "custom");
  }

  const NAMED_ITEMS: [&Item; 75] = [
    &SPECIFIC_CHARACTER_SET,
    &IMAGE_TYPE,
    &INSTANCE_CREATION_DATE,
    &INSTANCE_CREATION_TIME,
    &INSTANCE_CREATOR_UID,
    &SOP_CLASS_UID,
    &SOP_INSTANCE_UID,
    &STUDY_DATE,
    &SERIES_DATE,
    &ACQUISITION_DATE,
    &CONTENT_DATE,
    &ACQUISITION_DATE_TIME,
    &STUDY_TIME,
    &SERIES_TIME,
    &ACQUISITION_TIME,
    &CONTENT_TIME,
    &ACCESSION_NUMBER,
    &MODALITY,
    &CONVERSION_TYPE,
    &MANUFACTURER,
    &INSTITUTION_NAME,
    &INSTITUTION_ADDRESS,
    &REFERRING_PHYSICIAN_NAME,
    &STATION_NAME,
    &STUDY_DESCRIPTION,
    &SERIES_DESCRIPTION,
    &INSTITUTIONAL_DEPARTMENT_NAME,
    &PERFORMING_PHYSICIAN_NAME,
    &OPERATORS_NAME,
    &MANUFACTURER_MODEL_NAME,
    &PATIENT_NAME,
    &PATIENT_ID,
    &PATIENT_BIRTH_DATE,
    &PATIENT_BIRTH_TIME,
    &PATIENT_SEX,
    &PATIENT_AGE,
    &PATIENT_SIZE,
    &PATIENT_WEIGHT,
    &ETHNIC_GROUP,
    &PATIENT_COMMENTS,
    &PATIENT_IDENTITY_REMOVED,
    &DEIDENTIFICATION_METHOD,
    &BODY_PART_EXAMINED,
    &SLICE_THICKNESS,
    &DEVICE_SERIAL_NUMBER,
    &SOFTWARE_VERSIONS,
    &PROTOCOL_NAME,
    &FRAME_TIME,
    &STUDY_INSTANCE_UID,
    &SERIES_INSTANCE_UID,
    &STUDY_ID,
    &SERIES_NUMBER,
    &INSTANCE_NUMBER,
    &IMAGE_POSITION_PATIENT,
    &IMAGE_ORIENTATION_PATIENT,
    &FRAME_OF_REFERENCE_UID,
    &SAMPLES_PER_PIXEL,
    &PHOTOMETRIC_INTERPRETATION,
    &NUMBER_OF_FRAMES,
    &FRAME_INCREMENT_POINTER,
    &ROWS,
    &COLUMNS,
    &PIXEL_SPACING,
    &BITS_ALLOCATED,
    &BITS_STORED,
    &HIGH_BIT,
    &PIXEL_REPRESENTATION,
    &BURNED_IN_ANNOTATION,
    &RECOGNIZABLE_VISUAL_FEATURES,
    &WINDOW_CENTER,
    &WINDOW_WIDTH,
    &RESCALE_INTERCEPT,
    &RESCALE_SLOPE,
    &REQUESTED_PROCEDURE_DESCRIPTION,
    &PIXEL_DATA,
  ];
}
