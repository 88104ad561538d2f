//! The registry of public DICOM data elements, ordered by tag.
//!
//! This file is generated. Data elements in repeating groups and ranges are
//! matched separately by [`super::find_repeating()`].

/// Tag and name of every public data element that has a fixed tag.
///
#[rustfmt::skip]
pub(super) static REGISTRY: [(u32, &str); 4893] = [
  (0x00000000, "Command Group Length"),
  (0x00000001, "Command Length to End"),
  (0x00000002, "Affected SOP Class UID"),
  (0x00000003, "Requested SOP Class UID"),
  (0x00000010, "Command Recognition Code"),
  (0x00000100, "Command Field"),
  (0x00000110, "Message ID"),
  (0x00000120, "Message ID Being Responded To"),
  (0x00000200, "Initiator"),
  (0x00000300, "Receiver"),
  (0x00000400, "Find Location"),
  (0x00000600, "Move Destination"),
  (0x00000700, "Priority"),
  (0x00000800, "Command Data Set Type"),
  (0x00000850, "Number of Matches"),
  (0x00000860, "Response Sequence Number"),
  (0x00000900, "Status"),
  (0x00000901, "Offending Element"),
  (0x00000902, "Error Comment"),
  (0x00000903, "Error ID"),
  (0x00001000, "Affected SOP Instance UID"),
  (0x00001001, "Requested SOP Instance UID"),
  (0x00001002, "Event Type ID"),
  (0x00001005, "Attribute Identifier List"),
  (0x00001008, "Action Type ID"),
  (0x00001020, "Number of Remaining Sub-operations"),
  (0x00001021, "Number of Completed Sub-operations"),
  (0x00001022, "Number of Failed Sub-operations"),
  (0x00001023, "Number of Warning Sub-operations"),
  (0x00001030, "Move Originator Application Entity Title"),
  (0x00001031, "Move Originator Message ID"),
  (0x00004000, "Dialog Receiver"),
  (0x00004010, "Terminal Type"),
  (0x00005010, "Message Set ID"),
  (0x00005020, "End Message ID"),
  (0x00005110, "Display Format"),
  (0x00005120, "Page Position ID"),
  (0x00005130, "Text Format ID"),
  (0x00005140, "Normal/Reverse"),
  (0x00005150, "Add Gray Scale"),
  (0x00005160, "Borders"),
  (0x00005170, "Copies"),
  (0x00005180, "Command Magnification Type"),
  (0x00005190, "Erase"),
  (0x000051A0, "Print"),
  (0x000051B0, "Overlays"),
  (0x00020000, "File Meta Information Group Length"),
  (0x00020001, "File Meta Information Version"),
  (0x00020002, "Media Storage SOP Class UID"),
  (0x00020003, "Media Storage SOP Instance UID"),
  (0x00020010, "Transfer Syntax UID"),
  (0x00020012, "Implementation Class UID"),
  (0x00020013, "Implementation Version Name"),
  (0x00020016, "Source Application Entity Title"),
  (0x00020017, "Sending Application Entity Title"),
  (0x00020018, "Receiving Application Entity Title"),
  (0x00020026, "Source Presentation Address"),
  (0x00020027, "Sending Presentation Address"),
  (0x00020028, "Receiving Presentation Address"),
  (0x00020031, "RTV Meta Information Version"),
  (0x00020032, "RTV Communication SOP Class UID"),
  (0x00020033, "RTV Communication SOP Instance UID"),
  (0x00020035, "RTV Source Identifier"),
  (0x00020036, "RTV Flow Identifier"),
  (0x00020037, "RTV Flow RTP Sampling Rate"),
  (0x00020038, "RTV Flow Actual Frame Duration"),
  (0x00020100, "Private Information Creator UID"),
  (0x00020102, "Private Information"),
  (0x00041130, "File-set ID"),
  (0x00041141, "File-set Descriptor File ID"),
  (0x00041142, "Specific Character Set of File-set Descriptor File"),
  (0x00041200, "Offset of the First Directory Record of the Root Directory Entity"),
  (0x00041202, "Offset of the Last Directory Record of the Root Directory Entity"),
  (0x00041212, "File-set Consistency Flag"),
  (0x00041220, "Directory Record Sequence"),
  (0x00041400, "Offset of the Next Directory Record"),
  (0x00041410, "Record In-use Flag"),
  (0x00041420, "Offset of Referenced Lower-Level Directory Entity"),
  (0x00041430, "Directory Record Type"),
  (0x00041432, "Private Record UID"),
  (0x00041500, "Referenced File ID"),
  (0x00041504, "MRDR Directory Record Offset"),
  (0x00041510, "Referenced SOP Class UID in File"),
  (0x00041511, "Referenced SOP Instance UID in File"),
  (0x00041512, "Referenced Transfer Syntax UID in File"),
  (0x0004151A, "Referenced Related General SOP Class UID in File"),
  (0x00041600, "Number of References"),
  (0x00080001, "Length to End"),
  (0x00080005, "Specific Character Set"),
  (0x00080006, "Language Code Sequence"),
  (0x00080008, "Image Type"),
  (0x00080010, "Recognition Code"),
  (0x00080012, "Instance Creation Date"),
  (0x00080013, "Instance Creation Time"),
  (0x00080014, "Instance Creator UID"),
  (0x00080015, "Instance Coercion DateTime"),
  (0x00080016, "SOP Class UID"),
  (0x00080017, "Acquisition UID"),
  (0x00080018, "SOP Instance UID"),
  (0x00080019, "PyramidUID"),
  (0x0008001A, "Related General SOP Class UID"),
  (0x0008001B, "Original Specialized SOP Class UID"),
  (0x0008001C, "Synthetic Data"),
  (0x00080020, "Study Date"),
  (0x00080021, "Series Date"),
  (0x00080022, "Acquisition Date"),
  (0x00080023, "Content Date"),
  (0x00080024, "Overlay Date"),
  (0x00080025, "Curve Date"),
  (0x0008002A, "Acquisition DateTime"),
  (0x00080030, "Study Time"),
  (0x00080031, "Series Time"),
  (0x00080032, "Acquisition Time"),
  (0x00080033, "Content Time"),
  (0x00080034, "Overlay Time"),
  (0x00080035, "Curve Time"),
  (0x00080040, "Data Set Type"),
  (0x00080041, "Data Set Subtype"),
  (0x00080042, "Nuclear Medicine Series Type"),
  (0x00080050, "Accession Number"),
  (0x00080051, "Issuer of Accession Number Sequence"),
  (0x00080052, "Query/Retrieve Level"),
  (0x00080053, "Query/Retrieve View"),
  (0x00080054, "Retrieve AE Title"),
  (0x00080055, "Station AE Title"),
  (0x00080056, "Instance Availability"),
  (0x00080058, "Failed SOP Instance UID List"),
  (0x00080060, "Modality"),
  (0x00080061, "Modalities in Study"),
  (0x00080062, "SOP Classes in Study"),
  (0x00080063, "Anatomic Regions in Study Code Sequence"),
  (0x00080064, "Conversion Type"),
  (0x00080068, "Presentation Intent Type"),
  (0x00080070, "Manufacturer"),
  (0x00080080, "Institution Name"),
  (0x00080081, "Institution Address"),
  (0x00080082, "Institution Code Sequence"),
  (0x00080090, "Referring Physician's Name"),
  (0x00080092, "Referring Physician's Address"),
  (0x00080094, "Referring Physician's Telephone Numbers"),
  (0x00080096, "Referring Physician Identification Sequence"),
  (0x0008009C, "Consulting Physician's Name"),
  (0x0008009D, "Consulting Physician Identification Sequence"),
  (0x00080100, "Code Value"),
  (0x00080101, "Extended Code Value"),
  (0x00080102, "Coding Scheme Designator"),
  (0x00080103, "Coding Scheme Version"),
  (0x00080104, "Code Meaning"),
  (0x00080105, "Mapping Resource"),
  (0x00080106, "Context Group Version"),
  (0x00080107, "Context Group Local Version"),
  (0x00080108, "Extended Code Meaning"),
  (0x00080109, "Coding Scheme Resources Sequence"),
  (0x0008010A, "Coding Scheme URL Type"),
  (0x0008010B, "Context Group Extension Flag"),
  (0x0008010C, "Coding Scheme UID"),
  (0x0008010D, "Context Group Extension Creator UID"),
  (0x0008010E, "Coding Scheme URL"),
  (0x0008010F, "Context Identifier"),
  (0x00080110, "Coding Scheme Identification Sequence"),
  (0x00080112, "Coding Scheme Registry"),
  (0x00080114, "Coding Scheme External ID"),
  (0x00080115, "Coding Scheme Name"),
  (0x00080116, "Coding Scheme Responsible Organization"),
  (0x00080117, "Context UID"),
  (0x00080118, "Mapping Resource UID"),
  (0x00080119, "Long Code Value"),
  (0x00080120, "URN Code Value"),
  (0x00080121, "Equivalent Code Sequence"),
  (0x00080122, "Mapping Resource Name"),
  (0x00080123, "Context Group Identification Sequence"),
  (0x00080124, "Mapping Resource Identification Sequence"),
  (0x00080201, "Timezone Offset From UTC"),
  (0x00080202, "Responsible Group Code Sequence"),
  (0x00080220, "Equipment Modality"),
  (0x00080221, "Manufacturer's Related Model Group"),
  (0x00080300, "Private Data Element Characteristics Sequence"),
  (0x00080301, "Private Group Reference"),
  (0x00080302, "Private Creator Reference"),
  (0x00080303, "Block Identifying Information Status"),
  (0x00080304, "Nonidentifying Private Elements"),
  (0x00080305, "Deidentification Action Sequence"),
  (0x00080306, "Identifying Private Elements"),
  (0x00080307, "Deidentification Action"),
  (0x00080308, "Private Data Element"),
  (0x00080309, "Private Data Element Value Multiplicity"),
  (0x0008030A, "Private Data Element Value Representation"),
  (0x0008030B, "Private Data Element Number of Items"),
  (0x0008030C, "Private Data Element Name"),
  (0x0008030D, "Private Data Element Keyword"),
  (0x0008030E, "Private Data Element Description"),
  (0x0008030F, "Private Data Element Encoding"),
  (0x00080310, "Private Data Element Definition Sequence"),
  (0x00080400, "Scope of Inventory Sequence"),
  (0x00080401, "Inventory Purpose"),
  (0x00080402, "Inventory Instance Description"),
  (0x00080403, "Inventory Level"),
  (0x00080404, "Item Inventory DateTime"),
  (0x00080405, "Removed from Operational Use"),
  (0x00080406, "Reason for Removal Code Sequence"),
  (0x00080407, "Stored Instance Base URI"),
  (0x00080408, "Folder Access URI"),
  (0x00080409, "File Access URI"),
  (0x0008040A, "Container File Type"),
  (0x0008040B, "Filename in Container"),
  (0x0008040C, "File Offset in Container"),
  (0x0008040D, "File Length in Container"),
  (0x0008040E, "Stored Instance Transfer Syntax UID"),
  (0x0008040F, "Extended Matching Mechanisms"),
  (0x00080410, "Range Matching Sequence"),
  (0x00080411, "List of UID Matching Sequence"),
  (0x00080412, "Empty Value Matching Sequence"),
  (0x00080413, "General Matching Sequence"),
  (0x00080414, "Requested Status Interval"),
  (0x00080415, "Retain Instances"),
  (0x00080416, "Expiration DateTime"),
  (0x00080417, "Transaction Status"),
  (0x00080418, "Transaction Status Comment"),
  (0x00080419, "File Set Access Sequence"),
  (0x0008041A, "File Access Sequence"),
  (0x0008041B, "Record Key"),
  (0x0008041C, "Prior Record Key"),
  (0x0008041D, "Metadata Sequence"),
  (0x0008041E, "Updated Metadata Sequence"),
  (0x0008041F, "Study Update DateTime"),
  (0x00080420, "Inventory Access End Points Sequence"),
  (0x00080421, "Study Access End Points Sequence"),
  (0x00080422, "Incorporated Inventory Instance Sequence"),
  (0x00080423, "Inventoried Studies Sequence"),
  (0x00080424, "Inventoried Series Sequence"),
  (0x00080425, "Inventoried Instances Sequence"),
  (0x00080426, "Inventory Completion Status"),
  (0x00080427, "Number of Study Records in Instance"),
  (0x00080428, "Total Number of Study Records"),
  (0x00080429, "Maximum Number of Records"),
  (0x00081000, "Network ID"),
  (0x00081010, "Station Name"),
  (0x00081030, "Study Description"),
  (0x00081032, "Procedure Code Sequence"),
  (0x0008103E, "Series Description"),
  (0x0008103F, "Series Description Code Sequence"),
  (0x00081040, "Institutional Department Name"),
  (0x00081041, "Institutional Department Type Code Sequence"),
  (0x00081048, "Physician(s) of Record"),
  (0x00081049, "Physician(s) of Record Identification Sequence"),
  (0x00081050, "Performing Physician's Name"),
  (0x00081052, "Performing Physician Identification Sequence"),
  (0x00081060, "Name of Physician(s) Reading Study"),
  (0x00081062, "Physician(s) Reading Study Identification Sequence"),
  (0x00081070, "Operators' Name"),
  (0x00081072, "Operator Identification Sequence"),
  (0x00081080, "Admitting Diagnoses Description"),
  (0x00081084, "Admitting Diagnoses Code Sequence"),
  (0x00081088, "Pyramid Description"),
  (0x00081090, "Manufacturer's Model Name"),
  (0x00081100, "Referenced Results Sequence"),
  (0x00081110, "Referenced Study Sequence"),
  (0x00081111, "Referenced Performed Procedure Step Sequence"),
  (0x00081112, "Referenced Instances by SOP Class Sequence"),
  (0x00081115, "Referenced Series Sequence"),
  (0x00081120, "Referenced Patient Sequence"),
  (0x00081125, "Referenced Visit Sequence"),
  (0x00081130, "Referenced Overlay Sequence"),
  (0x00081134, "Referenced Stereometric Instance Sequence"),
  (0x0008113A, "Referenced Waveform Sequence"),
  (0x00081140, "Referenced Image Sequence"),
  (0x00081145, "Referenced Curve Sequence"),
  (0x0008114A, "Referenced Instance Sequence"),
  (0x0008114B, "Referenced Real World Value Mapping Instance Sequence"),
  (0x00081150, "Referenced SOP Class UID"),
  (0x00081155, "Referenced SOP Instance UID"),
  (0x00081156, "Definition Source Sequence"),
  (0x0008115A, "SOP Classes Supported"),
  (0x00081160, "Referenced Frame Number"),
  (0x00081161, "Simple Frame List"),
  (0x00081162, "Calculated Frame List"),
  (0x00081163, "Time Range"),
  (0x00081164, "Frame Extraction Sequence"),
  (0x00081167, "Multi-frame Source SOP Instance UID"),
  (0x00081190, "Retrieve URL"),
  (0x00081195, "Transaction UID"),
  (0x00081196, "Warning Reason"),
  (0x00081197, "Failure Reason"),
  (0x00081198, "Failed SOP Sequence"),
  (0x00081199, "Referenced SOP Sequence"),
  (0x0008119A, "Other Failures Sequence"),
  (0x0008119B, "Failed Study Sequence"),
  (0x00081200, "Studies Containing Other Referenced Instances Sequence"),
  (0x00081250, "Related Series Sequence"),
  (0x00081301, "Principal Diagnosis Code Sequence"),
  (0x00081302, "Primary Diagnosis Code Sequence"),
  (0x00081303, "Secondary Diagnoses Code Sequence"),
  (0x00081304, "Histology Diagnoses Code Sequence"),
  (0x00082110, "Lossy Image Compression (Retired)"),
  (0x00082111, "Derivation Description"),
  (0x00082112, "Source Image Sequence"),
  (0x00082120, "Stage Name"),
  (0x00082122, "Stage Number"),
  (0x00082124, "Number of Stages"),
  (0x00082127, "View Name"),
  (0x00082128, "View Number"),
  (0x00082129, "Number of Event Timers"),
  (0x0008212A, "Number of Views in Stage"),
  (0x00082130, "Event Elapsed Time(s)"),
  (0x00082132, "Event Timer Name(s)"),
  (0x00082133, "Event Timer Sequence"),
  (0x00082134, "Event Time Offset"),
  (0x00082135, "Event Code Sequence"),
  (0x00082142, "Start Trim"),
  (0x00082143, "Stop Trim"),
  (0x00082144, "Recommended Display Frame Rate"),
  (0x00082200, "Transducer Position"),
  (0x00082204, "Transducer Orientation"),
  (0x00082208, "Anatomic Structure"),
  (0x00082218, "Anatomic Region Sequence"),
  (0x00082220, "Anatomic Region Modifier Sequence"),
  (0x00082228, "Primary Anatomic Structure Sequence"),
  (0x00082229, "Anatomic Structure, Space or Region Sequence"),
  (0x00082230, "Primary Anatomic Structure Modifier Sequence"),
  (0x00082240, "Transducer Position Sequence"),
  (0x00082242, "Transducer Position Modifier Sequence"),
  (0x00082244, "Transducer Orientation Sequence"),
  (0x00082246, "Transducer Orientation Modifier Sequence"),
  (0x00082251, "Anatomic Structure Space Or Region Code Sequence (Trial)"),
  (0x00082253, "Anatomic Portal Of Entrance Code Sequence (Trial)"),
  (0x00082255, "Anatomic Approach Direction Code Sequence (Trial)"),
  (0x00082256, "Anatomic Perspective Description (Trial)"),
  (0x00082257, "Anatomic Perspective Code Sequence (Trial)"),
  (0x00082258, "Anatomic Location Of Examining Instrument Description (Trial)"),
  (0x00082259, "Anatomic Location Of Examining Instrument Code Sequence (Trial)"),
  (0x0008225A, "Anatomic Structure Space Or Region Modifier Code Sequence (Trial)"),
  (0x0008225C, "On Axis Background Anatomic Structure Code Sequence (Trial)"),
  (0x00083001, "Alternate Representation Sequence"),
  (0x00083002, "Available Transfer Syntax UID"),
  (0x00083010, "Irradiation Event UID"),
  (0x00083011, "Source Irradiation Event Sequence"),
  (0x00083012, "Radiopharmaceutical Administration Event UID"),
  (0x00084000, "Identifying Comments"),
  (0x00089007, "Frame Type"),
  (0x00089092, "Referenced Image Evidence Sequence"),
  (0x00089121, "Referenced Raw Data Sequence"),
  (0x00089123, "Creator-Version UID"),
  (0x00089124, "Derivation Image Sequence"),
  (0x00089154, "Source Image Evidence Sequence"),
  (0x00089205, "Pixel Presentation"),
  (0x00089206, "Volumetric Properties"),
  (0x00089207, "Volume Based Calculation Technique"),
  (0x00089208, "Complex Image Component"),
  (0x00089209, "Acquisition Contrast"),
  (0x00089215, "Derivation Code Sequence"),
  (0x00089237, "Referenced Presentation State Sequence"),
  (0x00089410, "Referenced Other Plane Sequence"),
  (0x00089458, "Frame Display Sequence"),
  (0x00089459, "Recommended Display Frame Rate in Float"),
  (0x00089460, "Skip Frame Range Flag"),
  (0x00100010, "Patient's Name"),
  (0x00100020, "Patient ID"),
  (0x00100021, "Issuer of Patient ID"),
  (0x00100022, "Type of Patient ID"),
  (0x00100024, "Issuer of Patient ID Qualifiers Sequence"),
  (0x00100026, "Source Patient Group Identification Sequence"),
  (0x00100027, "Group of Patients Identification Sequence"),
  (0x00100028, "Subject Relative Position in Image"),
  (0x00100030, "Patient's Birth Date"),
  (0x00100032, "Patient's Birth Time"),
  (0x00100033, "Patient's Birth Date in Alternative Calendar"),
  (0x00100034, "Patient's Death Date in Alternative Calendar"),
  (0x00100035, "Patient's Alternative Calendar"),
  (0x00100040, "Patient's Sex"),
  (0x00100050, "Patient's Insurance Plan Code Sequence"),
  (0x00100101, "Patient's Primary Language Code Sequence"),
  (0x00100102, "Patient's Primary Language Modifier Code Sequence"),
  (0x00100200, "Quality Control Subject"),
  (0x00100201, "Quality Control Subject Type Code Sequence"),
  (0x00100212, "Strain Description"),
  (0x00100213, "Strain Nomenclature"),
  (0x00100214, "Strain Stock Number"),
  (0x00100215, "Strain Source Registry Code Sequence"),
  (0x00100216, "Strain Stock Sequence"),
  (0x00100217, "Strain Source"),
  (0x00100218, "Strain Additional Information"),
  (0x00100219, "Strain Code Sequence"),
  (0x00100221, "Genetic Modifications Sequence"),
  (0x00100222, "Genetic Modifications Description"),
  (0x00100223, "Genetic Modifications Nomenclature"),
  (0x00100229, "Genetic Modifications Code Sequence"),
  (0x00101000, "Other Patient IDs"),
  (0x00101001, "Other Patient Names"),
  (0x00101002, "Other Patient IDs Sequence"),
  (0x00101005, "Patient's Birth Name"),
  (0x00101010, "Patient's Age"),
  (0x00101020, "Patient's Size"),
  (0x00101021, "Patient's Size Code Sequence"),
  (0x00101022, "Patient's Body Mass Index"),
  (0x00101023, "Measured AP Dimension"),
  (0x00101024, "Measured Lateral Dimension"),
  (0x00101030, "Patient's Weight"),
  (0x00101040, "Patient's Address"),
  (0x00101050, "Insurance Plan Identification"),
  (0x00101060, "Patient's Mother's Birth Name"),
  (0x00101080, "Military Rank"),
  (0x00101081, "Branch of Service"),
  (0x00101090, "Medical Record Locator"),
  (0x00101100, "Referenced Patient Photo Sequence"),
  (0x00102000, "Medical Alerts"),
  (0x00102110, "Allergies"),
  (0x00102150, "Country of Residence"),
  (0x00102152, "Region of Residence"),
  (0x00102154, "Patient's Telephone Numbers"),
  (0x00102155, "Patient's Telecom Information"),
  (0x00102160, "Ethnic Group"),
  (0x00102161, "Ethnic Group Code Sequence"),
  (0x00102162, "Ethnic Groups"),
  (0x00102180, "Occupation"),
  (0x001021A0, "Smoking Status"),
  (0x001021B0, "Additional Patient History"),
  (0x001021C0, "Pregnancy Status"),
  (0x001021D0, "Last Menstrual Date"),
  (0x001021F0, "Patient's Religious Preference"),
  (0x00102201, "Patient Species Description"),
  (0x00102202, "Patient Species Code Sequence"),
  (0x00102203, "Patient's Sex Neutered"),
  (0x00102210, "Anatomical Orientation Type"),
  (0x00102292, "Patient Breed Description"),
  (0x00102293, "Patient Breed Code Sequence"),
  (0x00102294, "Breed Registration Sequence"),
  (0x00102295, "Breed Registration Number"),
  (0x00102296, "Breed Registry Code Sequence"),
  (0x00102297, "Responsible Person"),
  (0x00102298, "Responsible Person Role"),
  (0x00102299, "Responsible Organization"),
  (0x00104000, "Patient Comments"),
  (0x00109431, "Examined Body Thickness"),
  (0x00120010, "Clinical Trial Sponsor Name"),
  (0x00120020, "Clinical Trial Protocol ID"),
  (0x00120021, "Clinical Trial Protocol Name"),
  (0x00120022, "Issuer of Clinical Trial Protocol ID"),
  (0x00120023, "Other Clinical Trial Protocol IDs Sequence"),
  (0x00120030, "Clinical Trial Site ID"),
  (0x00120031, "Clinical Trial Site Name"),
  (0x00120032, "Issuer of Clinical Trial Site ID"),
  (0x00120040, "Clinical Trial Subject ID"),
  (0x00120041, "Issuer of Clinical Trial Subject ID"),
  (0x00120042, "Clinical Trial Subject Reading ID"),
  (0x00120043, "Issuer of Clinical Trial Subject Reading ID"),
  (0x00120050, "Clinical Trial Time Point ID"),
  (0x00120051, "Clinical Trial Time Point Description"),
  (0x00120052, "Longitudinal Temporal Offset from Event"),
  (0x00120053, "Longitudinal Temporal Event Type"),
  (0x00120054, "Clinical Trial Time Point Type Code Sequence"),
  (0x00120055, "Issuer of Clinical Trial Time Point ID"),
  (0x00120060, "Clinical Trial Coordinating Center Name"),
  (0x00120062, "Patient Identity Removed"),
  (0x00120063, "De-identification Method"),
  (0x00120064, "De-identification Method Code Sequence"),
  (0x00120071, "Clinical Trial Series ID"),
  (0x00120072, "Clinical Trial Series Description"),
  (0x00120073, "Issuer of Clinical Trial Series ID"),
  (0x00120081, "Clinical Trial Protocol Ethics Committee Name"),
  (0x00120082, "Clinical Trial Protocol Ethics Committee Approval Number"),
  (0x00120083, "Consent for Clinical Trial Use Sequence"),
  (0x00120084, "Distribution Type"),
  (0x00120085, "Consent for Distribution Flag"),
  (0x00120086, "Ethics Committee Approval Effectiveness Start Date"),
  (0x00120087, "Ethics Committee Approval Effectiveness End Date"),
  (0x00140023, "CAD File Format"),
  (0x00140024, "Component Reference System"),
  (0x00140025, "Component Manufacturing Procedure"),
  (0x00140028, "Component Manufacturer"),
  (0x00140030, "Material Thickness"),
  (0x00140032, "Material Pipe Diameter"),
  (0x00140034, "Material Isolation Diameter"),
  (0x00140042, "Material Grade"),
  (0x00140044, "Material Properties Description"),
  (0x00140045, "Material Properties File Format (Retired)"),
  (0x00140046, "Material Notes"),
  (0x00140050, "Component Shape"),
  (0x00140052, "Curvature Type"),
  (0x00140054, "Outer Diameter"),
  (0x00140056, "Inner Diameter"),
  (0x00140100, "Component Welder IDs"),
  (0x00140101, "Secondary Approval Status"),
  (0x00140102, "Secondary Review Date"),
  (0x00140103, "Secondary Review Time"),
  (0x00140104, "Secondary Reviewer Name"),
  (0x00140105, "Repair ID"),
  (0x00140106, "Multiple Component Approval Sequence"),
  (0x00140107, "Other Approval Status"),
  (0x00140108, "Other Secondary Approval Status"),
  (0x00140200, "Data Element Label Sequence"),
  (0x00140201, "Data Element Label Item Sequence"),
  (0x00140202, "Data Element"),
  (0x00140203, "Data Element Name"),
  (0x00140204, "Data Element Description"),
  (0x00140205, "Data Element Conditionality"),
  (0x00140206, "Data Element Minimum Characters"),
  (0x00140207, "Data Element Maximum Characters"),
  (0x00141010, "Actual Environmental Conditions"),
  (0x00141020, "Expiry Date"),
  (0x00141040, "Environmental Conditions"),
  (0x00142002, "Evaluator Sequence"),
  (0x00142004, "Evaluator Number"),
  (0x00142006, "Evaluator Name"),
  (0x00142008, "Evaluation Attempt"),
  (0x00142012, "Indication Sequence"),
  (0x00142014, "Indication Number"),
  (0x00142016, "Indication Label"),
  (0x00142018, "Indication Description"),
  (0x0014201A, "Indication Type"),
  (0x0014201C, "Indication Disposition"),
  (0x0014201E, "Indication ROI Sequence"),
  (0x00142030, "Indication Physical Property Sequence"),
  (0x00142032, "Property Label"),
  (0x00142202, "Coordinate System Number of Axes"),
  (0x00142204, "Coordinate System Axes Sequence"),
  (0x00142206, "Coordinate System Axis Description"),
  (0x00142208, "Coordinate System Data Set Mapping"),
  (0x0014220A, "Coordinate System Axis Number"),
  (0x0014220C, "Coordinate System Axis Type"),
  (0x0014220E, "Coordinate System Axis Units"),
  (0x00142210, "Coordinate System Axis Values"),
  (0x00142220, "Coordinate System Transform Sequence"),
  (0x00142222, "Transform Description"),
  (0x00142224, "Transform Number of Axes"),
  (0x00142226, "Transform Order of Axes"),
  (0x00142228, "Transformed Axis Units"),
  (0x0014222A, "Coordinate System Transform Rotation and Scale Matrix"),
  (0x0014222C, "Coordinate System Transform Translation Matrix"),
  (0x00143011, "Internal Detector Frame Time"),
  (0x00143012, "Number of Frames Integrated"),
  (0x00143020, "Detector Temperature Sequence"),
  (0x00143022, "Sensor Name"),
  (0x00143024, "Horizontal Offset of Sensor"),
  (0x00143026, "Vertical Offset of Sensor"),
  (0x00143028, "Sensor Temperature"),
  (0x00143040, "Dark Current Sequence"),
  (0x00143050, "Dark Current Counts"),
  (0x00143060, "Gain Correction Reference Sequence"),
  (0x00143070, "Air Counts"),
  (0x00143071, "KV Used in Gain Calibration"),
  (0x00143072, "MA Used in Gain Calibration"),
  (0x00143073, "Number of Frames Used for Integration"),
  (0x00143074, "Filter Material Used in Gain Calibration"),
  (0x00143075, "Filter Thickness Used in Gain Calibration"),
  (0x00143076, "Date of Gain Calibration"),
  (0x00143077, "Time of Gain Calibration"),
  (0x00143080, "Bad Pixel Image"),
  (0x00143099, "Calibration Notes"),
  (0x00144002, "Pulser Equipment Sequence"),
  (0x00144004, "Pulser Type"),
  (0x00144006, "Pulser Notes"),
  (0x00144008, "Receiver Equipment Sequence"),
  (0x0014400A, "Amplifier Type"),
  (0x0014400C, "Receiver Notes"),
  (0x0014400E, "Pre-Amplifier Equipment Sequence"),
  (0x0014400F, "Pre-Amplifier Notes"),
  (0x00144010, "Transmit Transducer Sequence"),
  (0x00144011, "Receive Transducer Sequence"),
  (0x00144012, "Number of Elements"),
  (0x00144013, "Element Shape"),
  (0x00144014, "Element Dimension A"),
  (0x00144015, "Element Dimension B"),
  (0x00144016, "Element Pitch A"),
  (0x00144017, "Measured Beam Dimension A"),
  (0x00144018, "Measured Beam Dimension B"),
  (0x00144019, "Location of Measured Beam Diameter"),
  (0x0014401A, "Nominal Frequency"),
  (0x0014401B, "Measured Center Frequency"),
  (0x0014401C, "Measured Bandwidth"),
  (0x0014401D, "Element Pitch B"),
  (0x00144020, "Pulser Settings Sequence"),
  (0x00144022, "Pulse Width"),
  (0x00144024, "Excitation Frequency"),
  (0x00144026, "Modulation Type"),
  (0x00144028, "Damping"),
  (0x00144030, "Receiver Settings Sequence"),
  (0x00144031, "Acquired Soundpath Length"),
  (0x00144032, "Acquisition Compression Type"),
  (0x00144033, "Acquisition Sample Size"),
  (0x00144034, "Rectifier Smoothing"),
  (0x00144035, "DAC Sequence"),
  (0x00144036, "DAC Type"),
  (0x00144038, "DAC Gain Points"),
  (0x0014403A, "DAC Time Points"),
  (0x0014403C, "DAC Amplitude"),
  (0x00144040, "Pre-Amplifier Settings Sequence"),
  (0x00144050, "Transmit Transducer Settings Sequence"),
  (0x00144051, "Receive Transducer Settings Sequence"),
  (0x00144052, "Incident Angle"),
  (0x00144054, "Coupling Technique"),
  (0x00144056, "Coupling Medium"),
  (0x00144057, "Coupling Velocity"),
  (0x00144058, "Probe Center Location X"),
  (0x00144059, "Probe Center Location Z"),
  (0x0014405A, "Sound Path Length"),
  (0x0014405C, "Delay Law Identifier"),
  (0x00144060, "Gate Settings Sequence"),
  (0x00144062, "Gate Threshold"),
  (0x00144064, "Velocity of Sound"),
  (0x00144070, "Calibration Settings Sequence"),
  (0x00144072, "Calibration Procedure"),
  (0x00144074, "Procedure Version"),
  (0x00144076, "Procedure Creation Date"),
  (0x00144078, "Procedure Expiration Date"),
  (0x0014407A, "Procedure Last Modified Date"),
  (0x0014407C, "Calibration Time"),
  (0x0014407E, "Calibration Date"),
  (0x00144080, "Probe Drive Equipment Sequence"),
  (0x00144081, "Drive Type"),
  (0x00144082, "Probe Drive Notes"),
  (0x00144083, "Drive Probe Sequence"),
  (0x00144084, "Probe Inductance"),
  (0x00144085, "Probe Resistance"),
  (0x00144086, "Receive Probe Sequence"),
  (0x00144087, "Probe Drive Settings Sequence"),
  (0x00144088, "Bridge Resistors"),
  (0x00144089, "Probe Orientation Angle"),
  (0x0014408B, "User Selected Gain Y"),
  (0x0014408C, "User Selected Phase"),
  (0x0014408D, "User Selected Offset X"),
  (0x0014408E, "User Selected Offset Y"),
  (0x00144091, "Channel Settings Sequence"),
  (0x00144092, "Channel Threshold"),
  (0x0014409A, "Scanner Settings Sequence"),
  (0x0014409B, "Scan Procedure"),
  (0x0014409C, "Translation Rate X"),
  (0x0014409D, "Translation Rate Y"),
  (0x0014409F, "Channel Overlap"),
  (0x001440A0, "Image Quality Indicator Type"),
  (0x001440A1, "Image Quality Indicator Material"),
  (0x001440A2, "Image Quality Indicator Size"),
  (0x00145002, "LINAC Energy"),
  (0x00145004, "LINAC Output"),
  (0x00145100, "Active Aperture"),
  (0x00145101, "Total Aperture"),
  (0x00145102, "Aperture Elevation"),
  (0x00145103, "Main Lobe Angle"),
  (0x00145104, "Main Roof Angle"),
  (0x00145105, "Connector Type"),
  (0x00145106, "Wedge Model Number"),
  (0x00145107, "Wedge Angle Float"),
  (0x00145108, "Wedge Roof Angle"),
  (0x00145109, "Wedge Element 1 Position"),
  (0x0014510A, "Wedge Material Velocity"),
  (0x0014510B, "Wedge Material"),
  (0x0014510C, "Wedge Offset Z"),
  (0x0014510D, "Wedge Origin Offset X"),
  (0x0014510E, "Wedge Time Delay"),
  (0x0014510F, "Wedge Name"),
  (0x00145110, "Wedge Manufacturer Name"),
  (0x00145111, "Wedge Description"),
  (0x00145112, "Nominal Beam Angle"),
  (0x00145113, "Wedge Offset X"),
  (0x00145114, "Wedge Offset Y"),
  (0x00145115, "Wedge Total Length"),
  (0x00145116, "Wedge In Contact Length"),
  (0x00145117, "Wedge Front Gap"),
  (0x00145118, "Wedge Total Height"),
  (0x00145119, "Wedge Front Height"),
  (0x0014511A, "Wedge Rear Height"),
  (0x0014511B, "Wedge Total Width"),
  (0x0014511C, "Wedge In Contact Width"),
  (0x0014511D, "Wedge Chamfer Height"),
  (0x0014511E, "Wedge Curve"),
  (0x0014511F, "Radius Along the Wedge"),
  (0x00160001, "White Point"),
  (0x00160002, "Primary Chromaticities"),
  (0x00160003, "Battery Level"),
  (0x00160004, "Exposure Time in Seconds"),
  (0x00160005, "F-Number"),
  (0x00160006, "OECF Rows"),
  (0x00160007, "OECF Columns"),
  (0x00160008, "OECF Column Names"),
  (0x00160009, "OECF Values"),
  (0x0016000A, "Spatial Frequency Response Rows"),
  (0x0016000B, "Spatial Frequency Response Columns"),
  (0x0016000C, "Spatial Frequency Response Column Names"),
  (0x0016000D, "Spatial Frequency Response Values"),
  (0x0016000E, "Color Filter Array Pattern Rows"),
  (0x0016000F, "Color Filter Array Pattern Columns"),
  (0x00160010, "Color Filter Array Pattern Values"),
  (0x00160011, "Flash Firing Status"),
  (0x00160012, "Flash Return Status"),
  (0x00160013, "Flash Mode"),
  (0x00160014, "Flash Function Present"),
  (0x00160015, "Flash Red Eye Mode"),
  (0x00160016, "Exposure Program"),
  (0x00160017, "Spectral Sensitivity"),
  (0x00160018, "Photographic Sensitivity"),
  (0x00160019, "Self Timer Mode"),
  (0x0016001A, "Sensitivity Type"),
  (0x0016001B, "Standard Output Sensitivity"),
  (0x0016001C, "Recommended Exposure Index"),
  (0x0016001D, "ISO Speed"),
  (0x0016001E, "ISO Speed Latitude yyy"),
  (0x0016001F, "ISO Speed Latitude zzz"),
  (0x00160020, "EXIF Version"),
  (0x00160021, "Shutter Speed Value"),
  (0x00160022, "Aperture Value"),
  (0x00160023, "Brightness Value"),
  (0x00160024, "Exposure Bias Value"),
  (0x00160025, "Max Aperture Value"),
  (0x00160026, "Subject Distance"),
  (0x00160027, "Metering Mode"),
  (0x00160028, "Light Source"),
  (0x00160029, "Focal Length"),
  (0x0016002A, "Subject Area"),
  (0x0016002B, "Maker Note"),
  (0x00160030, "Temperature"),
  (0x00160031, "Humidity"),
  (0x00160032, "Pressure"),
  (0x00160033, "Water Depth"),
  (0x00160034, "Acceleration"),
  (0x00160035, "Camera Elevation Angle"),
  (0x00160036, "Flash Energy"),
  (0x00160037, "Subject Location"),
  (0x00160038, "Photographic Exposure Index"),
  (0x00160039, "Sensing Method"),
  (0x0016003A, "File Source"),
  (0x0016003B, "Scene Type"),
  (0x00160041, "Custom Rendered"),
  (0x00160042, "Exposure Mode"),
  (0x00160043, "White Balance"),
  (0x00160044, "Digital Zoom Ratio"),
  (0x00160045, "Focal Length In 35mm Film"),
  (0x00160046, "Scene Capture Type"),
  (0x00160047, "Gain Control"),
  (0x00160048, "Contrast"),
  (0x00160049, "Saturation"),
  (0x0016004A, "Sharpness"),
  (0x0016004B, "Device Setting Description"),
  (0x0016004C, "Subject Distance Range"),
  (0x0016004D, "Camera Owner Name"),
  (0x0016004E, "Lens Specification"),
  (0x0016004F, "Lens Make"),
  (0x00160050, "Lens Model"),
  (0x00160051, "Lens Serial Number"),
  (0x00160061, "Interoperability Index"),
  (0x00160062, "Interoperability Version"),
  (0x00160070, "GPS Version ID"),
  (0x00160071, "GPS Latitude Ref"),
  (0x00160072, "GPS Latitude"),
  (0x00160073, "GPS Longitude Ref"),
  (0x00160074, "GPS Longitude"),
  (0x00160075, "GPS Altitude Ref"),
  (0x00160076, "GPS Altitude"),
  (0x00160077, "GPS Time Stamp"),
  (0x00160078, "GPS Satellites"),
  (0x00160079, "GPS Status"),
  (0x0016007A, "GPS Measure Mode"),
  (0x0016007B, "GPS DOP"),
  (0x0016007C, "GPS Speed Ref"),
  (0x0016007D, "GPS Speed"),
  (0x0016007E, "GPS Track Ref"),
  (0x0016007F, "GPS Track"),
  (0x00160080, "GPS Img Direction Ref"),
  (0x00160081, "GPS Img Direction"),
  (0x00160082, "GPS Map Datum"),
  (0x00160083, "GPS Dest Latitude Ref"),
  (0x00160084, "GPS Dest Latitude"),
  (0x00160085, "GPS Dest Longitude Ref"),
  (0x00160086, "GPS Dest Longitude"),
  (0x00160087, "GPS Dest Bearing Ref"),
  (0x00160088, "GPS Dest Bearing"),
  (0x00160089, "GPS Dest Distance Ref"),
  (0x0016008A, "GPS Dest Distance"),
  (0x0016008B, "GPS Processing Method"),
  (0x0016008C, "GPS Area Information"),
  (0x0016008D, "GPS Date Stamp"),
  (0x0016008E, "GPS Differential"),
  (0x00161001, "Light Source Polarization"),
  (0x00161002, "Emitter Color Temperature"),
  (0x00161003, "Contact Method"),
  (0x00161004, "Immersion Media"),
  (0x00161005, "Optical Magnification Factor"),
  (0x00180010, "Contrast/Bolus Agent"),
  (0x00180012, "Contrast/Bolus Agent Sequence"),
  (0x00180013, "Contrast/Bolus T1 Relaxivity"),
  (0x00180014, "Contrast/Bolus Administration Route Sequence"),
  (0x00180015, "Body Part Examined"),
  (0x00180020, "Scanning Sequence"),
  (0x00180021, "Sequence Variant"),
  (0x00180022, "Scan Options"),
  (0x00180023, "MR Acquisition Type"),
  (0x00180024, "Sequence Name"),
  (0x00180025, "Angio Flag"),
  (0x00180026, "Intervention Drug Information Sequence"),
  (0x00180027, "Intervention Drug Stop Time"),
  (0x00180028, "Intervention Drug Dose"),
  (0x00180029, "Intervention Drug Code Sequence"),
  (0x0018002A, "Additional Drug Sequence"),
  (0x00180030, "Radionuclide"),
  (0x00180031, "Radiopharmaceutical"),
  (0x00180032, "Energy Window Centerline"),
  (0x00180033, "Energy Window Total Width"),
  (0x00180034, "Intervention Drug Name"),
  (0x00180035, "Intervention Drug Start Time"),
  (0x00180036, "Intervention Sequence"),
  (0x00180037, "Therapy Type"),
  (0x00180038, "Intervention Status"),
  (0x00180039, "Therapy Description"),
  (0x0018003A, "Intervention Description"),
  (0x00180040, "Cine Rate"),
  (0x00180042, "Initial Cine Run State"),
  (0x00180050, "Slice Thickness"),
  (0x00180060, "KVP"),
  (0x00180070, "Counts Accumulated"),
  (0x00180071, "Acquisition Termination Condition"),
  (0x00180072, "Effective Duration"),
  (0x00180073, "Acquisition Start Condition"),
  (0x00180074, "Acquisition Start Condition Data"),
  (0x00180075, "Acquisition Termination Condition Data"),
  (0x00180080, "Repetition Time"),
  (0x00180081, "Echo Time"),
  (0x00180082, "Inversion Time"),
  (0x00180083, "Number of Averages"),
  (0x00180084, "Imaging Frequency"),
  (0x00180085, "Imaged Nucleus"),
  (0x00180086, "Echo Number(s)"),
  (0x00180087, "Magnetic Field Strength"),
  (0x00180088, "Spacing Between Slices"),
  (0x00180089, "Number of Phase Encoding Steps"),
  (0x00180090, "Data Collection Diameter"),
  (0x00180091, "Echo Train Length"),
  (0x00180093, "Percent Sampling"),
  (0x00180094, "Percent Phase Field of View"),
  (0x00180095, "Pixel Bandwidth"),
  (0x00181000, "Device Serial Number"),
  (0x00181002, "Device UID"),
  (0x00181003, "Device ID"),
  (0x00181004, "Plate ID"),
  (0x00181005, "Generator ID"),
  (0x00181006, "Grid ID"),
  (0x00181007, "Cassette ID"),
  (0x00181008, "Gantry ID"),
  (0x00181009, "Unique Device Identifier"),
  (0x0018100A, "UDI Sequence"),
  (0x0018100B, "Manufacturer's Device Class UID"),
  (0x00181010, "Secondary Capture Device ID"),
  (0x00181011, "Hardcopy Creation Device ID"),
  (0x00181012, "Date of Secondary Capture"),
  (0x00181014, "Time of Secondary Capture"),
  (0x00181016, "Secondary Capture Device Manufacturer"),
  (0x00181017, "Hardcopy Device Manufacturer"),
  (0x00181018, "Secondary Capture Device Manufacturer's Model Name"),
  (0x00181019, "Secondary Capture Device Software Versions"),
  (0x0018101A, "Hardcopy Device Software Version"),
  (0x0018101B, "Hardcopy Device Manufacturer's Model Name"),
  (0x00181020, "Software Versions"),
  (0x00181022, "Video Image Format Acquired"),
  (0x00181023, "Digital Image Format Acquired"),
  (0x00181030, "Protocol Name"),
  (0x00181040, "Contrast/Bolus Route"),
  (0x00181041, "Contrast/Bolus Volume"),
  (0x00181042, "Contrast/Bolus Start Time"),
  (0x00181043, "Contrast/Bolus Stop Time"),
  (0x00181044, "Contrast/Bolus Total Dose"),
  (0x00181045, "Syringe Counts"),
  (0x00181046, "Contrast Flow Rate"),
  (0x00181047, "Contrast Flow Duration"),
  (0x00181048, "Contrast/Bolus Ingredient"),
  (0x00181049, "Contrast/Bolus Ingredient Concentration"),
  (0x00181050, "Spatial Resolution"),
  (0x00181060, "Trigger Time"),
  (0x00181061, "Trigger Source or Type"),
  (0x00181062, "Nominal Interval"),
  (0x00181063, "Frame Time"),
  (0x00181064, "Cardiac Framing Type"),
  (0x00181065, "Frame Time Vector"),
  (0x00181066, "Frame Delay"),
  (0x00181067, "Image Trigger Delay"),
  (0x00181068, "Multiplex Group Time Offset"),
  (0x00181069, "Trigger Time Offset"),
  (0x0018106A, "Synchronization Trigger"),
  (0x0018106C, "Synchronization Channel"),
  (0x0018106E, "Trigger Sample Position"),
  (0x00181070, "Radiopharmaceutical Route"),
  (0x00181071, "Radiopharmaceutical Volume"),
  (0x00181072, "Radiopharmaceutical Start Time"),
  (0x00181073, "Radiopharmaceutical Stop Time"),
  (0x00181074, "Radionuclide Total Dose"),
  (0x00181075, "Radionuclide Half Life"),
  (0x00181076, "Radionuclide Positron Fraction"),
  (0x00181077, "Radiopharmaceutical Specific Activity"),
  (0x00181078, "Radiopharmaceutical Start DateTime"),
  (0x00181079, "Radiopharmaceutical Stop DateTime"),
  (0x00181080, "Beat Rejection Flag"),
  (0x00181081, "Low R-R Value"),
  (0x00181082, "High R-R Value"),
  (0x00181083, "Intervals Acquired"),
  (0x00181084, "Intervals Rejected"),
  (0x00181085, "PVC Rejection"),
  (0x00181086, "Skip Beats"),
  (0x00181088, "Heart Rate"),
  (0x00181090, "Cardiac Number of Images"),
  (0x00181094, "Trigger Window"),
  (0x00181100, "Reconstruction Diameter"),
  (0x00181110, "Distance Source to Detector"),
  (0x00181111, "Distance Source to Patient"),
  (0x00181114, "Estimated Radiographic Magnification Factor"),
  (0x00181120, "Gantry/Detector Tilt"),
  (0x00181121, "Gantry/Detector Slew"),
  (0x00181130, "Table Height"),
  (0x00181131, "Table Traverse"),
  (0x00181134, "Table Motion"),
  (0x00181135, "Table Vertical Increment"),
  (0x00181136, "Table Lateral Increment"),
  (0x00181137, "Table Longitudinal Increment"),
  (0x00181138, "Table Angle"),
  (0x0018113A, "Table Type"),
  (0x00181140, "Rotation Direction"),
  (0x00181141, "Angular Position"),
  (0x00181142, "Radial Position"),
  (0x00181143, "Scan Arc"),
  (0x00181144, "Angular Step"),
  (0x00181145, "Center of Rotation Offset"),
  (0x00181146, "Rotation Offset"),
  (0x00181147, "Field of View Shape"),
  (0x00181149, "Field of View Dimension(s)"),
  (0x00181150, "Exposure Time"),
  (0x00181151, "X-Ray Tube Current"),
  (0x00181152, "Exposure"),
  (0x00181153, "Exposure in µAs"),
  (0x00181154, "Average Pulse Width"),
  (0x00181155, "Radiation Setting"),
  (0x00181156, "Rectification Type"),
  (0x0018115A, "Radiation Mode"),
  (0x0018115E, "Image and Fluoroscopy Area Dose Product"),
  (0x00181160, "Filter Type"),
  (0x00181161, "Type of Filters"),
  (0x00181162, "Intensifier Size"),
  (0x00181164, "Imager Pixel Spacing"),
  (0x00181166, "Grid"),
  (0x00181170, "Generator Power"),
  (0x00181180, "Collimator/grid Name"),
  (0x00181181, "Collimator Type"),
  (0x00181182, "Focal Distance"),
  (0x00181183, "X Focus Center"),
  (0x00181184, "Y Focus Center"),
  (0x00181190, "Focal Spot(s)"),
  (0x00181191, "Anode Target Material"),
  (0x001811A0, "Body Part Thickness"),
  (0x001811A2, "Compression Force"),
  (0x001811A3, "Compression Pressure"),
  (0x001811A4, "Paddle Description"),
  (0x001811A5, "Compression Contact Area"),
  (0x001811B0, "Acquisition Mode"),
  (0x001811B1, "Dose Mode Name"),
  (0x001811B2, "Acquired Subtraction Mask Flag"),
  (0x001811B3, "Fluoroscopy Persistence Flag"),
  (0x001811B4, "Fluoroscopy Last Image Hold Persistence Flag"),
  (0x001811B5, "Upper Limit Number Of Persistent Fluoroscopy Frames"),
  (0x001811B6, "Contrast/Bolus Auto Injection Trigger Flag"),
  (0x001811B7, "Contrast/Bolus Injection Delay"),
  (0x001811B8, "XA Acquisition Phase Details Sequence"),
  (0x001811B9, "XA Acquisition Frame Rate"),
  (0x001811BA, "XA Plane Details Sequence"),
  (0x001811BB, "Acquisition Field of View Label"),
  (0x001811BC, "X-Ray Filter Details Sequence"),
  (0x001811BD, "XA Acquisition Duration"),
  (0x001811BE, "Reconstruction Pipeline Type"),
  (0x001811BF, "Image Filter Details Sequence"),
  (0x001811C0, "Applied Mask Subtraction Flag"),
  (0x001811C1, "Requested Series Description Code Sequence"),
  (0x00181200, "Date of Last Calibration"),
  (0x00181201, "Time of Last Calibration"),
  (0x00181202, "DateTime of Last Calibration"),
  (0x00181203, "Calibration DateTime"),
  (0x00181204, "Date of Manufacture"),
  (0x00181205, "Date of Installation"),
  (0x00181210, "Convolution Kernel"),
  (0x00181240, "Upper/Lower Pixel Values"),
  (0x00181242, "Actual Frame Duration"),
  (0x00181243, "Count Rate"),
  (0x00181250, "Receive Coil Name"),
  (0x00181251, "Transmit Coil Name"),
  (0x00181260, "Plate Type"),
  (0x00181261, "Phosphor Type"),
  (0x00181271, "Water Equivalent Diameter"),
  (0x00181272, "Water Equivalent Diameter Calculation Method Code Sequence"),
  (0x00181300, "Scan Velocity"),
  (0x00181301, "Whole Body Technique"),
  (0x00181302, "Scan Length"),
  (0x00181310, "Acquisition Matrix"),
  (0x00181312, "In-plane Phase Encoding Direction"),
  (0x00181314, "Flip Angle"),
  (0x00181315, "Variable Flip Angle Flag"),
  (0x00181316, "SAR"),
  (0x00181318, "dB/dt"),
  (0x00181320, "B1rms"),
  (0x00181400, "Acquisition Device Processing Description"),
  (0x00181401, "Acquisition Device Processing Code"),
  (0x00181402, "Cassette Orientation"),
  (0x00181403, "Cassette Size"),
  (0x00181404, "Exposures on Plate"),
  (0x00181405, "Relative X-Ray Exposure"),
  (0x00181411, "Exposure Index"),
  (0x00181412, "Target Exposure Index"),
  (0x00181413, "Deviation Index"),
  (0x00181450, "Column Angulation"),
  (0x00181460, "Tomo Layer Height"),
  (0x00181470, "Tomo Angle"),
  (0x00181480, "Tomo Time"),
  (0x00181490, "Tomo Type"),
  (0x00181491, "Tomo Class"),
  (0x00181495, "Number of Tomosynthesis Source Images"),
  (0x00181500, "Positioner Motion"),
  (0x00181508, "Positioner Type"),
  (0x00181510, "Positioner Primary Angle"),
  (0x00181511, "Positioner Secondary Angle"),
  (0x00181520, "Positioner Primary Angle Increment"),
  (0x00181521, "Positioner Secondary Angle Increment"),
  (0x00181530, "Detector Primary Angle"),
  (0x00181531, "Detector Secondary Angle"),
  (0x00181600, "Shutter Shape"),
  (0x00181602, "Shutter Left Vertical Edge"),
  (0x00181604, "Shutter Right Vertical Edge"),
  (0x00181606, "Shutter Upper Horizontal Edge"),
  (0x00181608, "Shutter Lower Horizontal Edge"),
  (0x00181610, "Center of Circular Shutter"),
  (0x00181612, "Radius of Circular Shutter"),
  (0x00181620, "Vertices of the Polygonal Shutter"),
  (0x00181622, "Shutter Presentation Value"),
  (0x00181623, "Shutter Overlay Group"),
  (0x00181624, "Shutter Presentation Color CIELab Value"),
  (0x00181630, "Outline Shape Type"),
  (0x00181631, "Outline Left Vertical Edge"),
  (0x00181632, "Outline Right Vertical Edge"),
  (0x00181633, "Outline Upper Horizontal Edge"),
  (0x00181634, "Outline Lower Horizontal Edge"),
  (0x00181635, "Center of Circular Outline"),
  (0x00181636, "Diameter of Circular Outline"),
  (0x00181637, "Number of Polygonal Vertices"),
  (0x00181638, "Vertices of the Polygonal Outline"),
  (0x00181700, "Collimator Shape"),
  (0x00181702, "Collimator Left Vertical Edge"),
  (0x00181704, "Collimator Right Vertical Edge"),
  (0x00181706, "Collimator Upper Horizontal Edge"),
  (0x00181708, "Collimator Lower Horizontal Edge"),
  (0x00181710, "Center of Circular Collimator"),
  (0x00181712, "Radius of Circular Collimator"),
  (0x00181720, "Vertices of the Polygonal Collimator"),
  (0x00181800, "Acquisition Time Synchronized"),
  (0x00181801, "Time Source"),
  (0x00181802, "Time Distribution Protocol"),
  (0x00181803, "NTP Source Address"),
  (0x00182001, "Page Number Vector"),
  (0x00182002, "Frame Label Vector"),
  (0x00182003, "Frame Primary Angle Vector"),
  (0x00182004, "Frame Secondary Angle Vector"),
  (0x00182005, "Slice Location Vector"),
  (0x00182006, "Display Window Label Vector"),
  (0x00182010, "Nominal Scanned Pixel Spacing"),
  (0x00182020, "Digitizing Device Transport Direction"),
  (0x00182030, "Rotation of Scanned Film"),
  (0x00182041, "Biopsy Target Sequence"),
  (0x00182042, "Target UID"),
  (0x00182043, "Localizing Cursor Position"),
  (0x00182044, "Calculated Target Position"),
  (0x00182045, "Target Label"),
  (0x00182046, "Displayed Z Value"),
  (0x00183100, "IVUS Acquisition"),
  (0x00183101, "IVUS Pullback Rate"),
  (0x00183102, "IVUS Gated Rate"),
  (0x00183103, "IVUS Pullback Start Frame Number"),
  (0x00183104, "IVUS Pullback Stop Frame Number"),
  (0x00183105, "Lesion Number"),
  (0x00185000, "Output Power"),
  (0x00185010, "Transducer Data"),
  (0x00185011, "Transducer Identification Sequence"),
  (0x00185012, "Focus Depth"),
  (0x00185020, "Processing Function"),
  (0x00185021, "Postprocessing Function"),
  (0x00185022, "Mechanical Index"),
  (0x00185024, "Bone Thermal Index"),
  (0x00185026, "Cranial Thermal Index"),
  (0x00185027, "Soft Tissue Thermal Index"),
  (0x00185028, "Soft Tissue-focus Thermal Index"),
  (0x00185029, "Soft Tissue-surface Thermal Index"),
  (0x00185030, "Dynamic Range"),
  (0x00185040, "Total Gain"),
  (0x00185050, "Depth of Scan Field"),
  (0x00185100, "Patient Position"),
  (0x00185101, "View Position"),
  (0x00185104, "Projection Eponymous Name Code Sequence"),
  (0x00185210, "Image Transformation Matrix"),
  (0x00185212, "Image Translation Vector"),
  (0x00186000, "Sensitivity"),
  (0x00186011, "Sequence of Ultrasound Regions"),
  (0x00186012, "Region Spatial Format"),
  (0x00186014, "Region Data Type"),
  (0x00186016, "Region Flags"),
  (0x00186018, "Region Location Min X0"),
  (0x0018601A, "Region Location Min Y0"),
  (0x0018601C, "Region Location Max X1"),
  (0x0018601E, "Region Location Max Y1"),
  (0x00186020, "Reference Pixel X0"),
  (0x00186022, "Reference Pixel Y0"),
  (0x00186024, "Physical Units X Direction"),
  (0x00186026, "Physical Units Y Direction"),
  (0x00186028, "Reference Pixel Physical Value X"),
  (0x0018602A, "Reference Pixel Physical Value Y"),
  (0x0018602C, "Physical Delta X"),
  (0x0018602E, "Physical Delta Y"),
  (0x00186030, "Transducer Frequency"),
  (0x00186031, "Transducer Type"),
  (0x00186032, "Pulse Repetition Frequency"),
  (0x00186034, "Doppler Correction Angle"),
  (0x00186036, "Steering Angle"),
  (0x00186038, "Doppler Sample Volume X Position (Retired)"),
  (0x00186039, "Doppler Sample Volume X Position"),
  (0x0018603A, "Doppler Sample Volume Y Position (Retired)"),
  (0x0018603B, "Doppler Sample Volume Y Position"),
  (0x0018603C, "TM-Line Position X0 (Retired)"),
  (0x0018603D, "TM-Line Position X0"),
  (0x0018603E, "TM-Line Position Y0 (Retired)"),
  (0x0018603F, "TM-Line Position Y0"),
  (0x00186040, "TM-Line Position X1 (Retired)"),
  (0x00186041, "TM-Line Position X1"),
  (0x00186042, "TM-Line Position Y1 (Retired)"),
  (0x00186043, "TM-Line Position Y1"),
  (0x00186044, "Pixel Component Organization"),
  (0x00186046, "Pixel Component Mask"),
  (0x00186048, "Pixel Component Range Start"),
  (0x0018604A, "Pixel Component Range Stop"),
  (0x0018604C, "Pixel Component Physical Units"),
  (0x0018604E, "Pixel Component Data Type"),
  (0x00186050, "Number of Table Break Points"),
  (0x00186052, "Table of X Break Points"),
  (0x00186054, "Table of Y Break Points"),
  (0x00186056, "Number of Table Entries"),
  (0x00186058, "Table of Pixel Values"),
  (0x0018605A, "Table of Parameter Values"),
  (0x00186060, "R Wave Time Vector"),
  (0x00186070, "Active Image Area Overlay Group"),
  (0x00187000, "Detector Conditions Nominal Flag"),
  (0x00187001, "Detector Temperature"),
  (0x00187004, "Detector Type"),
  (0x00187005, "Detector Configuration"),
  (0x00187006, "Detector Description"),
  (0x00187008, "Detector Mode"),
  (0x0018700A, "Detector ID"),
  (0x0018700C, "Date of Last Detector Calibration"),
  (0x0018700E, "Time of Last Detector Calibration"),
  (0x00187010, "Exposures on Detector Since Last Calibration"),
  (0x00187011, "Exposures on Detector Since Manufactured"),
  (0x00187012, "Detector Time Since Last Exposure"),
  (0x00187014, "Detector Active Time"),
  (0x00187016, "Detector Activation Offset From Exposure"),
  (0x0018701A, "Detector Binning"),
  (0x00187020, "Detector Element Physical Size"),
  (0x00187022, "Detector Element Spacing"),
  (0x00187024, "Detector Active Shape"),
  (0x00187026, "Detector Active Dimension(s)"),
  (0x00187028, "Detector Active Origin"),
  (0x0018702A, "Detector Manufacturer Name"),
  (0x0018702B, "Detector Manufacturer's Model Name"),
  (0x00187030, "Field of View Origin"),
  (0x00187032, "Field of View Rotation"),
  (0x00187034, "Field of View Horizontal Flip"),
  (0x00187036, "Pixel Data Area Origin Relative To FOV"),
  (0x00187038, "Pixel Data Area Rotation Angle Relative To FOV"),
  (0x00187040, "Grid Absorbing Material"),
  (0x00187041, "Grid Spacing Material"),
  (0x00187042, "Grid Thickness"),
  (0x00187044, "Grid Pitch"),
  (0x00187046, "Grid Aspect Ratio"),
  (0x00187048, "Grid Period"),
  (0x0018704C, "Grid Focal Distance"),
  (0x00187050, "Filter Material"),
  (0x00187052, "Filter Thickness Minimum"),
  (0x00187054, "Filter Thickness Maximum"),
  (0x00187056, "Filter Beam Path Length Minimum"),
  (0x00187058, "Filter Beam Path Length Maximum"),
  (0x00187060, "Exposure Control Mode"),
  (0x00187062, "Exposure Control Mode Description"),
  (0x00187064, "Exposure Status"),
  (0x00187065, "Phototimer Setting"),
  (0x00188150, "Exposure Time in µS"),
  (0x00188151, "X-Ray Tube Current in µA"),
  (0x00189004, "Content Qualification"),
  (0x00189005, "Pulse Sequence Name"),
  (0x00189006, "MR Imaging Modifier Sequence"),
  (0x00189008, "Echo Pulse Sequence"),
  (0x00189009, "Inversion Recovery"),
  (0x00189010, "Flow Compensation"),
  (0x00189011, "Multiple Spin Echo"),
  (0x00189012, "Multi-planar Excitation"),
  (0x00189014, "Phase Contrast"),
  (0x00189015, "Time of Flight Contrast"),
  (0x00189016, "Spoiling"),
  (0x00189017, "Steady State Pulse Sequence"),
  (0x00189018, "Echo Planar Pulse Sequence"),
  (0x00189019, "Tag Angle First Axis"),
  (0x00189020, "Magnetization Transfer"),
  (0x00189021, "T2 Preparation"),
  (0x00189022, "Blood Signal Nulling"),
  (0x00189024, "Saturation Recovery"),
  (0x00189025, "Spectrally Selected Suppression"),
  (0x00189026, "Spectrally Selected Excitation"),
  (0x00189027, "Spatial Pre-saturation"),
  (0x00189028, "Tagging"),
  (0x00189029, "Oversampling Phase"),
  (0x00189030, "Tag Spacing First Dimension"),
  (0x00189032, "Geometry of k-Space Traversal"),
  (0x00189033, "Segmented k-Space Traversal"),
  (0x00189034, "Rectilinear Phase Encode Reordering"),
  (0x00189035, "Tag Thickness"),
  (0x00189036, "Partial Fourier Direction"),
  (0x00189037, "Cardiac Synchronization Technique"),
  (0x00189041, "Receive Coil Manufacturer Name"),
  (0x00189042, "MR Receive Coil Sequence"),
  (0x00189043, "Receive Coil Type"),
  (0x00189044, "Quadrature Receive Coil"),
  (0x00189045, "Multi-Coil Definition Sequence"),
  (0x00189046, "Multi-Coil Configuration"),
  (0x00189047, "Multi-Coil Element Name"),
  (0x00189048, "Multi-Coil Element Used"),
  (0x00189049, "MR Transmit Coil Sequence"),
  (0x00189050, "Transmit Coil Manufacturer Name"),
  (0x00189051, "Transmit Coil Type"),
  (0x00189052, "Spectral Width"),
  (0x00189053, "Chemical Shift Reference"),
  (0x00189054, "Volume Localization Technique"),
  (0x00189058, "MR Acquisition Frequency Encoding Steps"),
  (0x00189059, "De-coupling"),
  (0x00189060, "De-coupled Nucleus"),
  (0x00189061, "De-coupling Frequency"),
  (0x00189062, "De-coupling Method"),
  (0x00189063, "De-coupling Chemical Shift Reference"),
  (0x00189064, "k-space Filtering"),
  (0x00189065, "Time Domain Filtering"),
  (0x00189066, "Number of Zero Fills"),
  (0x00189067, "Baseline Correction"),
  (0x00189069, "Parallel Reduction Factor In-plane"),
  (0x00189070, "Cardiac R-R Interval Specified"),
  (0x00189073, "Acquisition Duration"),
  (0x00189074, "Frame Acquisition DateTime"),
  (0x00189075, "Diffusion Directionality"),
  (0x00189076, "Diffusion Gradient Direction Sequence"),
  (0x00189077, "Parallel Acquisition"),
  (0x00189078, "Parallel Acquisition Technique"),
  (0x00189079, "Inversion Times"),
  (0x00189080, "Metabolite Map Description"),
  (0x00189081, "Partial Fourier"),
  (0x00189082, "Effective Echo Time"),
  (0x00189083, "Metabolite Map Code Sequence"),
  (0x00189084, "Chemical Shift Sequence"),
  (0x00189085, "Cardiac Signal Source"),
  (0x00189087, "Diffusion b-value"),
  (0x00189089, "Diffusion Gradient Orientation"),
  (0x00189090, "Velocity Encoding Direction"),
  (0x00189091, "Velocity Encoding Minimum Value"),
  (0x00189092, "Velocity Encoding Acquisition Sequence"),
  (0x00189093, "Number of k-Space Trajectories"),
  (0x00189094, "Coverage of k-Space"),
  (0x00189095, "Spectroscopy Acquisition Phase Rows"),
  (0x00189096, "Parallel Reduction Factor In-plane (Retired)"),
  (0x00189098, "Transmitter Frequency"),
  (0x00189100, "Resonant Nucleus"),
  (0x00189101, "Frequency Correction"),
  (0x00189103, "MR Spectroscopy FOV/Geometry Sequence"),
  (0x00189104, "Slab Thickness"),
  (0x00189105, "Slab Orientation"),
  (0x00189106, "Mid Slab Position"),
  (0x00189107, "MR Spatial Saturation Sequence"),
  (0x00189112, "MR Timing and Related Parameters Sequence"),
  (0x00189114, "MR Echo Sequence"),
  (0x00189115, "MR Modifier Sequence"),
  (0x00189117, "MR Diffusion Sequence"),
  (0x00189118, "Cardiac Synchronization Sequence"),
  (0x00189119, "MR Averages Sequence"),
  (0x00189125, "MR FOV/Geometry Sequence"),
  (0x00189126, "Volume Localization Sequence"),
  (0x00189127, "Spectroscopy Acquisition Data Columns"),
  (0x00189147, "Diffusion Anisotropy Type"),
  (0x00189151, "Frame Reference DateTime"),
  (0x00189152, "MR Metabolite Map Sequence"),
  (0x00189155, "Parallel Reduction Factor out-of-plane"),
  (0x00189159, "Spectroscopy Acquisition Out-of-plane Phase Steps"),
  (0x00189166, "Bulk Motion Status"),
  (0x00189168, "Parallel Reduction Factor Second In-plane"),
  (0x00189169, "Cardiac Beat Rejection Technique"),
  (0x00189170, "Respiratory Motion Compensation Technique"),
  (0x00189171, "Respiratory Signal Source"),
  (0x00189172, "Bulk Motion Compensation Technique"),
  (0x00189173, "Bulk Motion Signal Source"),
  (0x00189174, "Applicable Safety Standard Agency"),
  (0x00189175, "Applicable Safety Standard Description"),
  (0x00189176, "Operating Mode Sequence"),
  (0x00189177, "Operating Mode Type"),
  (0x00189178, "Operating Mode"),
  (0x00189179, "Specific Absorption Rate Definition"),
  (0x00189180, "Gradient Output Type"),
  (0x00189181, "Specific Absorption Rate Value"),
  (0x00189182, "Gradient Output"),
  (0x00189183, "Flow Compensation Direction"),
  (0x00189184, "Tagging Delay"),
  (0x00189185, "Respiratory Motion Compensation Technique Description"),
  (0x00189186, "Respiratory Signal Source ID"),
  (0x00189195, "Chemical Shift Minimum Integration Limit in Hz"),
  (0x00189196, "Chemical Shift Maximum Integration Limit in Hz"),
  (0x00189197, "MR Velocity Encoding Sequence"),
  (0x00189198, "First Order Phase Correction"),
  (0x00189199, "Water Referenced Phase Correction"),
  (0x00189200, "MR Spectroscopy Acquisition Type"),
  (0x00189214, "Respiratory Cycle Position"),
  (0x00189217, "Velocity Encoding Maximum Value"),
  (0x00189218, "Tag Spacing Second Dimension"),
  (0x00189219, "Tag Angle Second Axis"),
  (0x00189220, "Frame Acquisition Duration"),
  (0x00189226, "MR Image Frame Type Sequence"),
  (0x00189227, "MR Spectroscopy Frame Type Sequence"),
  (0x00189231, "MR Acquisition Phase Encoding Steps in-plane"),
  (0x00189232, "MR Acquisition Phase Encoding Steps out-of-plane"),
  (0x00189234, "Spectroscopy Acquisition Phase Columns"),
  (0x00189236, "Cardiac Cycle Position"),
  (0x00189239, "Specific Absorption Rate Sequence"),
  (0x00189240, "RF Echo Train Length"),
  (0x00189241, "Gradient Echo Train Length"),
  (0x00189250, "Arterial Spin Labeling Contrast"),
  (0x00189251, "MR Arterial Spin Labeling Sequence"),
  (0x00189252, "ASL Technique Description"),
  (0x00189253, "ASL Slab Number"),
  (0x00189254, "ASL Slab Thickness"),
  (0x00189255, "ASL Slab Orientation"),
  (0x00189256, "ASL Mid Slab Position"),
  (0x00189257, "ASL Context"),
  (0x00189258, "ASL Pulse Train Duration"),
  (0x00189259, "ASL Crusher Flag"),
  (0x0018925A, "ASL Crusher Flow Limit"),
  (0x0018925B, "ASL Crusher Description"),
  (0x0018925C, "ASL Bolus Cut-off Flag"),
  (0x0018925D, "ASL Bolus Cut-off Timing Sequence"),
  (0x0018925E, "ASL Bolus Cut-off Technique"),
  (0x0018925F, "ASL Bolus Cut-off Delay Time"),
  (0x00189260, "ASL Slab Sequence"),
  (0x00189295, "Chemical Shift Minimum Integration Limit in ppm"),
  (0x00189296, "Chemical Shift Maximum Integration Limit in ppm"),
  (0x00189297, "Water Reference Acquisition"),
  (0x00189298, "Echo Peak Position"),
  (0x00189301, "CT Acquisition Type Sequence"),
  (0x00189302, "Acquisition Type"),
  (0x00189303, "Tube Angle"),
  (0x00189304, "CT Acquisition Details Sequence"),
  (0x00189305, "Revolution Time"),
  (0x00189306, "Single Collimation Width"),
  (0x00189307, "Total Collimation Width"),
  (0x00189308, "CT Table Dynamics Sequence"),
  (0x00189309, "Table Speed"),
  (0x00189310, "Table Feed per Rotation"),
  (0x00189311, "Spiral Pitch Factor"),
  (0x00189312, "CT Geometry Sequence"),
  (0x00189313, "Data Collection Center (Patient)"),
  (0x00189314, "CT Reconstruction Sequence"),
  (0x00189315, "Reconstruction Algorithm"),
  (0x00189316, "Convolution Kernel Group"),
  (0x00189317, "Reconstruction Field of View"),
  (0x00189318, "Reconstruction Target Center (Patient)"),
  (0x00189319, "Reconstruction Angle"),
  (0x00189320, "Image Filter"),
  (0x00189321, "CT Exposure Sequence"),
  (0x00189322, "Reconstruction Pixel Spacing"),
  (0x00189323, "Exposure Modulation Type"),
  (0x00189324, "Estimated Dose Saving"),
  (0x00189325, "CT X-Ray Details Sequence"),
  (0x00189326, "CT Position Sequence"),
  (0x00189327, "Table Position"),
  (0x00189328, "Exposure Time in ms"),
  (0x00189329, "CT Image Frame Type Sequence"),
  (0x00189330, "X-Ray Tube Current in mA"),
  (0x00189332, "Exposure in mAs"),
  (0x00189333, "Constant Volume Flag"),
  (0x00189334, "Fluoroscopy Flag"),
  (0x00189335, "Distance Source to Data Collection Center"),
  (0x00189337, "Contrast/Bolus Agent Number"),
  (0x00189338, "Contrast/Bolus Ingredient Code Sequence"),
  (0x00189340, "Contrast Administration Profile Sequence"),
  (0x00189341, "Contrast/Bolus Usage Sequence"),
  (0x00189342, "Contrast/Bolus Agent Administered"),
  (0x00189343, "Contrast/Bolus Agent Detected"),
  (0x00189344, "Contrast/Bolus Agent Phase"),
  (0x00189345, "CTDIvol"),
  (0x00189346, "CTDI Phantom Type Code Sequence"),
  (0x00189351, "Calcium Scoring Mass Factor Patient"),
  (0x00189352, "Calcium Scoring Mass Factor Device"),
  (0x00189353, "Energy Weighting Factor"),
  (0x00189360, "CT Additional X-Ray Source Sequence"),
  (0x00189361, "Multi-energy CT Acquisition"),
  (0x00189362, "Multi-energy CT Acquisition Sequence"),
  (0x00189363, "Multi-energy CT Processing Sequence"),
  (0x00189364, "Multi-energy CT Characteristics Sequence"),
  (0x00189365, "Multi-energy CT X-Ray Source Sequence"),
  (0x00189366, "X-Ray Source Index"),
  (0x00189367, "X-Ray Source ID"),
  (0x00189368, "Multi-energy Source Technique"),
  (0x00189369, "Source Start DateTime"),
  (0x0018936A, "Source End DateTime"),
  (0x0018936B, "Switching Phase Number"),
  (0x0018936C, "Switching Phase Nominal Duration"),
  (0x0018936D, "Switching Phase Transition Duration"),
  (0x0018936E, "Effective Bin Energy"),
  (0x0018936F, "Multi-energy CT X-Ray Detector Sequence"),
  (0x00189370, "X-Ray Detector Index"),
  (0x00189371, "X-Ray Detector ID"),
  (0x00189372, "Multi-energy Detector Type"),
  (0x00189373, "X-Ray Detector Label"),
  (0x00189374, "Nominal Max Energy"),
  (0x00189375, "Nominal Min Energy"),
  (0x00189376, "Referenced X-Ray Detector Index"),
  (0x00189377, "Referenced X-Ray Source Index"),
  (0x00189378, "Referenced Path Index"),
  (0x00189379, "Multi-energy CT Path Sequence"),
  (0x0018937A, "Multi-energy CT Path Index"),
  (0x0018937B, "Multi-energy Acquisition Description"),
  (0x0018937C, "Monoenergetic Energy Equivalent"),
  (0x0018937D, "Material Code Sequence"),
  (0x0018937E, "Decomposition Method"),
  (0x0018937F, "Decomposition Description"),
  (0x00189380, "Decomposition Algorithm Identification Sequence"),
  (0x00189381, "Decomposition Material Sequence"),
  (0x00189382, "Material Attenuation Sequence"),
  (0x00189383, "Photon Energy"),
  (0x00189384, "X-Ray Mass Attenuation Coefficient"),
  (0x00189401, "Projection Pixel Calibration Sequence"),
  (0x00189402, "Distance Source to Isocenter"),
  (0x00189403, "Distance Object to Table Top"),
  (0x00189404, "Object Pixel Spacing in Center of Beam"),
  (0x00189405, "Positioner Position Sequence"),
  (0x00189406, "Table Position Sequence"),
  (0x00189407, "Collimator Shape Sequence"),
  (0x00189410, "Planes in Acquisition"),
  (0x00189412, "XA/XRF Frame Characteristics Sequence"),
  (0x00189417, "Frame Acquisition Sequence"),
  (0x00189420, "X-Ray Receptor Type"),
  (0x00189423, "Acquisition Protocol Name"),
  (0x00189424, "Acquisition Protocol Description"),
  (0x00189425, "Contrast/Bolus Ingredient Opaque"),
  (0x00189426, "Distance Receptor Plane to Detector Housing"),
  (0x00189427, "Intensifier Active Shape"),
  (0x00189428, "Intensifier Active Dimension(s)"),
  (0x00189429, "Physical Detector Size"),
  (0x00189430, "Position of Isocenter Projection"),
  (0x00189432, "Field of View Sequence"),
  (0x00189433, "Field of View Description"),
  (0x00189434, "Exposure Control Sensing Regions Sequence"),
  (0x00189435, "Exposure Control Sensing Region Shape"),
  (0x00189436, "Exposure Control Sensing Region Left Vertical Edge"),
  (0x00189437, "Exposure Control Sensing Region Right Vertical Edge"),
  (0x00189438, "Exposure Control Sensing Region Upper Horizontal Edge"),
  (0x00189439, "Exposure Control Sensing Region Lower Horizontal Edge"),
  (0x00189440, "Center of Circular Exposure Control Sensing Region"),
  (0x00189441, "Radius of Circular Exposure Control Sensing Region"),
  (0x00189442, "Vertices of the Polygonal Exposure Control Sensing Region"),
  (0x00189447, "Column Angulation (Patient)"),
  (0x00189449, "Beam Angle"),
  (0x00189451, "Frame Detector Parameters Sequence"),
  (0x00189452, "Calculated Anatomy Thickness"),
  (0x00189455, "Calibration Sequence"),
  (0x00189456, "Object Thickness Sequence"),
  (0x00189457, "Plane Identification"),
  (0x00189461, "Field of View Dimension(s) in Float"),
  (0x00189462, "Isocenter Reference System Sequence"),
  (0x00189463, "Positioner Isocenter Primary Angle"),
  (0x00189464, "Positioner Isocenter Secondary Angle"),
  (0x00189465, "Positioner Isocenter Detector Rotation Angle"),
  (0x00189466, "Table X Position to Isocenter"),
  (0x00189467, "Table Y Position to Isocenter"),
  (0x00189468, "Table Z Position to Isocenter"),
  (0x00189469, "Table Horizontal Rotation Angle"),
  (0x00189470, "Table Head Tilt Angle"),
  (0x00189471, "Table Cradle Tilt Angle"),
  (0x00189472, "Frame Display Shutter Sequence"),
  (0x00189473, "Acquired Image Area Dose Product"),
  (0x00189474, "C-arm Positioner Tabletop Relationship"),
  (0x00189476, "X-Ray Geometry Sequence"),
  (0x00189477, "Irradiation Event Identification Sequence"),
  (0x00189504, "X-Ray 3D Frame Type Sequence"),
  (0x00189506, "Contributing Sources Sequence"),
  (0x00189507, "X-Ray 3D Acquisition Sequence"),
  (0x00189508, "Primary Positioner Scan Arc"),
  (0x00189509, "Secondary Positioner Scan Arc"),
  (0x00189510, "Primary Positioner Scan Start Angle"),
  (0x00189511, "Secondary Positioner Scan Start Angle"),
  (0x00189514, "Primary Positioner Increment"),
  (0x00189515, "Secondary Positioner Increment"),
  (0x00189516, "Start Acquisition DateTime"),
  (0x00189517, "End Acquisition DateTime"),
  (0x00189518, "Primary Positioner Increment Sign"),
  (0x00189519, "Secondary Positioner Increment Sign"),
  (0x00189524, "Application Name"),
  (0x00189525, "Application Version"),
  (0x00189526, "Application Manufacturer"),
  (0x00189527, "Algorithm Type"),
  (0x00189528, "Algorithm Description"),
  (0x00189530, "X-Ray 3D Reconstruction Sequence"),
  (0x00189531, "Reconstruction Description"),
  (0x00189538, "Per Projection Acquisition Sequence"),
  (0x00189541, "Detector Position Sequence"),
  (0x00189542, "X-Ray Acquisition Dose Sequence"),
  (0x00189543, "X-Ray Source Isocenter Primary Angle"),
  (0x00189544, "X-Ray Source Isocenter Secondary Angle"),
  (0x00189545, "Breast Support Isocenter Primary Angle"),
  (0x00189546, "Breast Support Isocenter Secondary Angle"),
  (0x00189547, "Breast Support X Position to Isocenter"),
  (0x00189548, "Breast Support Y Position to Isocenter"),
  (0x00189549, "Breast Support Z Position to Isocenter"),
  (0x00189550, "Detector Isocenter Primary Angle"),
  (0x00189551, "Detector Isocenter Secondary Angle"),
  (0x00189552, "Detector X Position to Isocenter"),
  (0x00189553, "Detector Y Position to Isocenter"),
  (0x00189554, "Detector Z Position to Isocenter"),
  (0x00189555, "X-Ray Grid Sequence"),
  (0x00189556, "X-Ray Filter Sequence"),
  (0x00189557, "Detector Active Area TLHC Position"),
  (0x00189558, "Detector Active Area Orientation"),
  (0x00189559, "Positioner Primary Angle Direction"),
  (0x00189601, "Diffusion b-matrix Sequence"),
  (0x00189602, "Diffusion b-value XX"),
  (0x00189603, "Diffusion b-value XY"),
  (0x00189604, "Diffusion b-value XZ"),
  (0x00189605, "Diffusion b-value YY"),
  (0x00189606, "Diffusion b-value YZ"),
  (0x00189607, "Diffusion b-value ZZ"),
  (0x00189621, "Functional MR Sequence"),
  (0x00189622, "Functional Settling Phase Frames Present"),
  (0x00189623, "Functional Sync Pulse"),
  (0x00189624, "Settling Phase Frame"),
  (0x00189701, "Decay Correction DateTime"),
  (0x00189715, "Start Density Threshold"),
  (0x00189716, "Start Relative Density Difference Threshold"),
  (0x00189717, "Start Cardiac Trigger Count Threshold"),
  (0x00189718, "Start Respiratory Trigger Count Threshold"),
  (0x00189719, "Termination Counts Threshold"),
  (0x00189720, "Termination Density Threshold"),
  (0x00189721, "Termination Relative Density Threshold"),
  (0x00189722, "Termination Time Threshold"),
  (0x00189723, "Termination Cardiac Trigger Count Threshold"),
  (0x00189724, "Termination Respiratory Trigger Count Threshold"),
  (0x00189725, "Detector Geometry"),
  (0x00189726, "Transverse Detector Separation"),
  (0x00189727, "Axial Detector Dimension"),
  (0x00189729, "Radiopharmaceutical Agent Number"),
  (0x00189732, "PET Frame Acquisition Sequence"),
  (0x00189733, "PET Detector Motion Details Sequence"),
  (0x00189734, "PET Table Dynamics Sequence"),
  (0x00189735, "PET Position Sequence"),
  (0x00189736, "PET Frame Correction Factors Sequence"),
  (0x00189737, "Radiopharmaceutical Usage Sequence"),
  (0x00189738, "Attenuation Correction Source"),
  (0x00189739, "Number of Iterations"),
  (0x00189740, "Number of Subsets"),
  (0x00189749, "PET Reconstruction Sequence"),
  (0x00189751, "PET Frame Type Sequence"),
  (0x00189755, "Time of Flight Information Used"),
  (0x00189756, "Reconstruction Type"),
  (0x00189758, "Decay Corrected"),
  (0x00189759, "Attenuation Corrected"),
  (0x00189760, "Scatter Corrected"),
  (0x00189761, "Dead Time Corrected"),
  (0x00189762, "Gantry Motion Corrected"),
  (0x00189763, "Patient Motion Corrected"),
  (0x00189764, "Count Loss Normalization Corrected"),
  (0x00189765, "Randoms Corrected"),
  (0x00189766, "Non-uniform Radial Sampling Corrected"),
  (0x00189767, "Sensitivity Calibrated"),
  (0x00189768, "Detector Normalization Correction"),
  (0x00189769, "Iterative Reconstruction Method"),
  (0x00189770, "Attenuation Correction Temporal Relationship"),
  (0x00189771, "Patient Physiological State Sequence"),
  (0x00189772, "Patient Physiological State Code Sequence"),
  (0x00189801, "Depth(s) of Focus"),
  (0x00189803, "Excluded Intervals Sequence"),
  (0x00189804, "Exclusion Start DateTime"),
  (0x00189805, "Exclusion Duration"),
  (0x00189806, "US Image Description Sequence"),
  (0x00189807, "Image Data Type Sequence"),
  (0x00189808, "Data Type"),
  (0x00189809, "Transducer Scan Pattern Code Sequence"),
  (0x0018980B, "Aliased Data Type"),
  (0x0018980C, "Position Measuring Device Used"),
  (0x0018980D, "Transducer Geometry Code Sequence"),
  (0x0018980E, "Transducer Beam Steering Code Sequence"),
  (0x0018980F, "Transducer Application Code Sequence"),
  (0x00189810, "Zero Velocity Pixel Value"),
  (0x00189821, "Photoacoustic Excitation Characteristics Sequence"),
  (0x00189822, "Excitation Spectral Width"),
  (0x00189823, "Excitation Energy"),
  (0x00189824, "Excitation Pulse Duration"),
  (0x00189825, "Excitation Wavelength Sequence"),
  (0x00189826, "Excitation Wavelength"),
  (0x00189828, "Illumination Translation Flag"),
  (0x00189829, "Acoustic Coupling Medium Flag"),
  (0x0018982A, "Acoustic Coupling Medium Code Sequence"),
  (0x0018982B, "Acoustic Coupling Medium Temperature"),
  (0x0018982C, "Transducer Response Sequence"),
  (0x0018982D, "Center Frequency"),
  (0x0018982E, "Fractional Bandwidth"),
  (0x0018982F, "Lower Cutoff Frequency"),
  (0x00189830, "Upper Cutoff Frequency"),
  (0x00189831, "Transducer Technology Sequence"),
  (0x00189832, "Sound Speed Correction Mechanism Code Sequence"),
  (0x00189833, "Object Sound Speed"),
  (0x00189834, "Acoustic Coupling Medium Sound Speed"),
  (0x00189835, "Photoacoustic Image Frame Type Sequence"),
  (0x00189836, "Image Data Type Code Sequence"),
  (0x00189900, "Reference Location Label"),
  (0x00189901, "Reference Location Description"),
  (0x00189902, "Reference Basis Code Sequence"),
  (0x00189903, "Reference Geometry Code Sequence"),
  (0x00189904, "Offset Distance"),
  (0x00189905, "Offset Direction"),
  (0x00189906, "Potential Scheduled Protocol Code Sequence"),
  (0x00189907, "Potential Requested Procedure Code Sequence"),
  (0x00189908, "Potential Reasons for Procedure"),
  (0x00189909, "Potential Reasons for Procedure Code Sequence"),
  (0x0018990A, "Potential Diagnostic Tasks"),
  (0x0018990B, "Contraindications Code Sequence"),
  (0x0018990C, "Referenced Defined Protocol Sequence"),
  (0x0018990D, "Referenced Performed Protocol Sequence"),
  (0x0018990E, "Predecessor Protocol Sequence"),
  (0x0018990F, "Protocol Planning Information"),
  (0x00189910, "Protocol Design Rationale"),
  (0x00189911, "Patient Specification Sequence"),
  (0x00189912, "Model Specification Sequence"),
  (0x00189913, "Parameters Specification Sequence"),
  (0x00189914, "Instruction Sequence"),
  (0x00189915, "Instruction Index"),
  (0x00189916, "Instruction Text"),
  (0x00189917, "Instruction Description"),
  (0x00189918, "Instruction Performed Flag"),
  (0x00189919, "Instruction Performed DateTime"),
  (0x0018991A, "Instruction Performance Comment"),
  (0x0018991B, "Patient Positioning Instruction Sequence"),
  (0x0018991C, "Positioning Method Code Sequence"),
  (0x0018991D, "Positioning Landmark Sequence"),
  (0x0018991E, "Target Frame of Reference UID"),
  (0x0018991F, "Acquisition Protocol Element Specification Sequence"),
  (0x00189920, "Acquisition Protocol Element Sequence"),
  (0x00189921, "Protocol Element Number"),
  (0x00189922, "Protocol Element Name"),
  (0x00189923, "Protocol Element Characteristics Summary"),
  (0x00189924, "Protocol Element Purpose"),
  (0x00189930, "Acquisition Motion"),
  (0x00189932, "Acquisition Start Location Sequence"),
  (0x00189933, "Acquisition End Location Sequence"),
  (0x00189934, "Reconstruction Protocol Element Specification Sequence"),
  (0x00189935, "Reconstruction Protocol Element Sequence"),
  (0x00189936, "Storage Protocol Element Specification Sequence"),
  (0x00189937, "Storage Protocol Element Sequence"),
  (0x00189938, "Requested Series Description"),
  (0x00189939, "Source Acquisition Protocol Element Number"),
  (0x00189940, "Source Acquisition Beam Number"),
  (0x00189941, "Source Reconstruction Protocol Element Number"),
  (0x00189942, "Reconstruction Start Location Sequence"),
  (0x00189943, "Reconstruction End Location Sequence"),
  (0x00189944, "Reconstruction Algorithm Sequence"),
  (0x00189945, "Reconstruction Target Center Location Sequence"),
  (0x00189947, "Image Filter Description"),
  (0x00189948, "CTDIvol Notification Trigger"),
  (0x00189949, "DLP Notification Trigger"),
  (0x0018994A, "Auto KVP Selection Type"),
  (0x0018994B, "Auto KVP Upper Bound"),
  (0x0018994C, "Auto KVP Lower Bound"),
  (0x0018994D, "Protocol Defined Patient Position"),
  (0x0018A001, "Contributing Equipment Sequence"),
  (0x0018A002, "Contribution DateTime"),
  (0x0018A003, "Contribution Description"),
  (0x0020000D, "Study Instance UID"),
  (0x0020000E, "Series Instance UID"),
  (0x00200010, "Study ID"),
  (0x00200011, "Series Number"),
  (0x00200012, "Acquisition Number"),
  (0x00200013, "Instance Number"),
  (0x00200014, "Isotope Number"),
  (0x00200015, "Phase Number"),
  (0x00200016, "Interval Number"),
  (0x00200017, "Time Slot Number"),
  (0x00200018, "Angle Number"),
  (0x00200019, "Item Number"),
  (0x00200020, "Patient Orientation"),
  (0x00200022, "Overlay Number"),
  (0x00200024, "Curve Number"),
  (0x00200026, "LUT Number"),
  (0x00200027, "Pyramid Label"),
  (0x00200030, "Image Position"),
  (0x00200032, "Image Position (Patient)"),
  (0x00200035, "Image Orientation"),
  (0x00200037, "Image Orientation (Patient)"),
  (0x00200050, "Location"),
  (0x00200052, "Frame of Reference UID"),
  (0x00200060, "Laterality"),
  (0x00200062, "Image Laterality"),
  (0x00200070, "Image Geometry Type"),
  (0x00200080, "Masking Image"),
  (0x002000AA, "Report Number"),
  (0x00200100, "Temporal Position Identifier"),
  (0x00200105, "Number of Temporal Positions"),
  (0x00200110, "Temporal Resolution"),
  (0x00200200, "Synchronization Frame of Reference UID"),
  (0x00200242, "SOP Instance UID of Concatenation Source"),
  (0x00201000, "Series in Study"),
  (0x00201001, "Acquisitions in Series"),
  (0x00201002, "Images in Acquisition"),
  (0x00201003, "Images in Series"),
  (0x00201004, "Acquisitions in Study"),
  (0x00201005, "Images in Study"),
  (0x00201020, "Reference"),
  (0x0020103F, "Target Position Reference Indicator"),
  (0x00201040, "Position Reference Indicator"),
  (0x00201041, "Slice Location"),
  (0x00201070, "Other Study Numbers"),
  (0x00201200, "Number of Patient Related Studies"),
  (0x00201202, "Number of Patient Related Series"),
  (0x00201204, "Number of Patient Related Instances"),
  (0x00201206, "Number of Study Related Series"),
  (0x00201208, "Number of Study Related Instances"),
  (0x00201209, "Number of Series Related Instances"),
  (0x00203401, "Modifying Device ID"),
  (0x00203402, "Modified Image ID"),
  (0x00203403, "Modified Image Date"),
  (0x00203404, "Modifying Device Manufacturer"),
  (0x00203405, "Modified Image Time"),
  (0x00203406, "Modified Image Description"),
  (0x00204000, "Image Comments"),
  (0x00205000, "Original Image Identification"),
  (0x00205002, "Original Image Identification Nomenclature"),
  (0x00209056, "Stack ID"),
  (0x00209057, "In-Stack Position Number"),
  (0x00209071, "Frame Anatomy Sequence"),
  (0x00209072, "Frame Laterality"),
  (0x00209111, "Frame Content Sequence"),
  (0x00209113, "Plane Position Sequence"),
  (0x00209116, "Plane Orientation Sequence"),
  (0x00209128, "Temporal Position Index"),
  (0x00209153, "Nominal Cardiac Trigger Delay Time"),
  (0x00209154, "Nominal Cardiac Trigger Time Prior To R-Peak"),
  (0x00209155, "Actual Cardiac Trigger Time Prior To R-Peak"),
  (0x00209156, "Frame Acquisition Number"),
  (0x00209157, "Dimension Index Values"),
  (0x00209158, "Frame Comments"),
  (0x00209161, "Concatenation UID"),
  (0x00209162, "In-concatenation Number"),
  (0x00209163, "In-concatenation Total Number"),
  (0x00209164, "Dimension Organization UID"),
  (0x00209165, "Dimension Index Pointer"),
  (0x00209167, "Functional Group Pointer"),
  (0x00209170, "Unassigned Shared Converted Attributes Sequence"),
  (0x00209171, "Unassigned Per-Frame Converted Attributes Sequence"),
  (0x00209172, "Conversion Source Attributes Sequence"),
  (0x00209213, "Dimension Index Private Creator"),
  (0x00209221, "Dimension Organization Sequence"),
  (0x00209222, "Dimension Index Sequence"),
  (0x00209228, "Concatenation Frame Offset Number"),
  (0x00209238, "Functional Group Private Creator"),
  (0x00209241, "Nominal Percentage of Cardiac Phase"),
  (0x00209245, "Nominal Percentage of Respiratory Phase"),
  (0x00209246, "Starting Respiratory Amplitude"),
  (0x00209247, "Starting Respiratory Phase"),
  (0x00209248, "Ending Respiratory Amplitude"),
  (0x00209249, "Ending Respiratory Phase"),
  (0x00209250, "Respiratory Trigger Type"),
  (0x00209251, "R-R Interval Time Nominal"),
  (0x00209252, "Actual Cardiac Trigger Delay Time"),
  (0x00209253, "Respiratory Synchronization Sequence"),
  (0x00209254, "Respiratory Interval Time"),
  (0x00209255, "Nominal Respiratory Trigger Delay Time"),
  (0x00209256, "Respiratory Trigger Delay Threshold"),
  (0x00209257, "Actual Respiratory Trigger Delay Time"),
  (0x00209301, "Image Position (Volume)"),
  (0x00209302, "Image Orientation (Volume)"),
  (0x00209307, "Ultrasound Acquisition Geometry"),
  (0x00209308, "Apex Position"),
  (0x00209309, "Volume to Transducer Mapping Matrix"),
  (0x0020930A, "Volume to Table Mapping Matrix"),
  (0x0020930B, "Volume to Transducer Relationship"),
  (0x0020930C, "Patient Frame of Reference Source"),
  (0x0020930D, "Temporal Position Time Offset"),
  (0x0020930E, "Plane Position (Volume) Sequence"),
  (0x0020930F, "Plane Orientation (Volume) Sequence"),
  (0x00209310, "Temporal Position Sequence"),
  (0x00209311, "Dimension Organization Type"),
  (0x00209312, "Volume Frame of Reference UID"),
  (0x00209313, "Table Frame of Reference UID"),
  (0x00209421, "Dimension Description Label"),
  (0x00209450, "Patient Orientation in Frame Sequence"),
  (0x00209453, "Frame Label"),
  (0x00209518, "Acquisition Index"),
  (0x00209529, "Contributing SOP Instances Reference Sequence"),
  (0x00209536, "Reconstruction Index"),
  (0x00220001, "Light Path Filter Pass-Through Wavelength"),
  (0x00220002, "Light Path Filter Pass Band"),
  (0x00220003, "Image Path Filter Pass-Through Wavelength"),
  (0x00220004, "Image Path Filter Pass Band"),
  (0x00220005, "Patient Eye Movement Commanded"),
  (0x00220006, "Patient Eye Movement Command Code Sequence"),
  (0x00220007, "Spherical Lens Power"),
  (0x00220008, "Cylinder Lens Power"),
  (0x00220009, "Cylinder Axis"),
  (0x0022000A, "Emmetropic Magnification"),
  (0x0022000B, "Intra Ocular Pressure"),
  (0x0022000C, "Horizontal Field of View"),
  (0x0022000D, "Pupil Dilated"),
  (0x0022000E, "Degree of Dilation"),
  (0x0022000F, "Vertex Distance"),
  (0x00220010, "Stereo Baseline Angle"),
  (0x00220011, "Stereo Baseline Displacement"),
  (0x00220012, "Stereo Horizontal Pixel Offset"),
  (0x00220013, "Stereo Vertical Pixel Offset"),
  (0x00220014, "Stereo Rotation"),
  (0x00220015, "Acquisition Device Type Code Sequence"),
  (0x00220016, "Illumination Type Code Sequence"),
  (0x00220017, "Light Path Filter Type Stack Code Sequence"),
  (0x00220018, "Image Path Filter Type Stack Code Sequence"),
  (0x00220019, "Lenses Code Sequence"),
  (0x0022001A, "Channel Description Code Sequence"),
  (0x0022001B, "Refractive State Sequence"),
  (0x0022001C, "Mydriatic Agent Code Sequence"),
  (0x0022001D, "Relative Image Position Code Sequence"),
  (0x0022001E, "Camera Angle of View"),
  (0x00220020, "Stereo Pairs Sequence"),
  (0x00220021, "Left Image Sequence"),
  (0x00220022, "Right Image Sequence"),
  (0x00220028, "Stereo Pairs Present"),
  (0x00220030, "Axial Length of the Eye"),
  (0x00220031, "Ophthalmic Frame Location Sequence"),
  (0x00220032, "Reference Coordinates"),
  (0x00220035, "Depth Spatial Resolution"),
  (0x00220036, "Maximum Depth Distortion"),
  (0x00220037, "Along-scan Spatial Resolution"),
  (0x00220038, "Maximum Along-scan Distortion"),
  (0x00220039, "Ophthalmic Image Orientation"),
  (0x00220041, "Depth of Transverse Image"),
  (0x00220042, "Mydriatic Agent Concentration Units Sequence"),
  (0x00220048, "Across-scan Spatial Resolution"),
  (0x00220049, "Maximum Across-scan Distortion"),
  (0x0022004E, "Mydriatic Agent Concentration"),
  (0x00220055, "Illumination Wave Length"),
  (0x00220056, "Illumination Power"),
  (0x00220057, "Illumination Bandwidth"),
  (0x00220058, "Mydriatic Agent Sequence"),
  (0x00221007, "Ophthalmic Axial Measurements Right Eye Sequence"),
  (0x00221008, "Ophthalmic Axial Measurements Left Eye Sequence"),
  (0x00221009, "Ophthalmic Axial Measurements Device Type"),
  (0x00221010, "Ophthalmic Axial Length Measurements Type"),
  (0x00221012, "Ophthalmic Axial Length Sequence"),
  (0x00221019, "Ophthalmic Axial Length"),
  (0x00221024, "Lens Status Code Sequence"),
  (0x00221025, "Vitreous Status Code Sequence"),
  (0x00221028, "IOL Formula Code Sequence"),
  (0x00221029, "IOL Formula Detail"),
  (0x00221033, "Keratometer Index"),
  (0x00221035, "Source of Ophthalmic Axial Length Code Sequence"),
  (0x00221036, "Source of Corneal Size Data Code Sequence"),
  (0x00221037, "Target Refraction"),
  (0x00221039, "Refractive Procedure Occurred"),
  (0x00221040, "Refractive Surgery Type Code Sequence"),
  (0x00221044, "Ophthalmic Ultrasound Method Code Sequence"),
  (0x00221045, "Surgically Induced Astigmatism Sequence"),
  (0x00221046, "Type of Optical Correction"),
  (0x00221047, "Toric IOL Power Sequence"),
  (0x00221048, "Predicted Toric Error Sequence"),
  (0x00221049, "Pre-Selected for Implantation"),
  (0x0022104A, "Toric IOL Power for Exact Emmetropia Sequence"),
  (0x0022104B, "Toric IOL Power for Exact Target Refraction Sequence"),
  (0x00221050, "Ophthalmic Axial Length Measurements Sequence"),
  (0x00221053, "IOL Power"),
  (0x00221054, "Predicted Refractive Error"),
  (0x00221059, "Ophthalmic Axial Length Velocity"),
  (0x00221065, "Lens Status Description"),
  (0x00221066, "Vitreous Status Description"),
  (0x00221090, "IOL Power Sequence"),
  (0x00221092, "Lens Constant Sequence"),
  (0x00221093, "IOL Manufacturer"),
  (0x00221094, "Lens Constant Description"),
  (0x00221095, "Implant Name"),
  (0x00221096, "Keratometry Measurement Type Code Sequence"),
  (0x00221097, "Implant Part Number"),
  (0x00221100, "Referenced Ophthalmic Axial Measurements Sequence"),
  (0x00221101, "Ophthalmic Axial Length Measurements Segment Name Code Sequence"),
  (0x00221103, "Refractive Error Before Refractive Surgery Code Sequence"),
  (0x00221121, "IOL Power For Exact Emmetropia"),
  (0x00221122, "IOL Power For Exact Target Refraction"),
  (0x00221125, "Anterior Chamber Depth Definition Code Sequence"),
  (0x00221127, "Lens Thickness Sequence"),
  (0x00221128, "Anterior Chamber Depth Sequence"),
  (0x0022112A, "Calculation Comment Sequence"),
  (0x0022112B, "Calculation Comment Type"),
  (0x0022112C, "Calculation Comment"),
  (0x00221130, "Lens Thickness"),
  (0x00221131, "Anterior Chamber Depth"),
  (0x00221132, "Source of Lens Thickness Data Code Sequence"),
  (0x00221133, "Source of Anterior Chamber Depth Data Code Sequence"),
  (0x00221134, "Source of Refractive Measurements Sequence"),
  (0x00221135, "Source of Refractive Measurements Code Sequence"),
  (0x00221140, "Ophthalmic Axial Length Measurement Modified"),
  (0x00221150, "Ophthalmic Axial Length Data Source Code Sequence"),
  (0x00221153, "Ophthalmic Axial Length Acquisition Method Code Sequence"),
  (0x00221155, "Signal to Noise Ratio"),
  (0x00221159, "Ophthalmic Axial Length Data Source Description"),
  (0x00221210, "Ophthalmic Axial Length Measurements Total Length Sequence"),
  (0x00221211, "Ophthalmic Axial Length Measurements Segmental Length Sequence"),
  (0x00221212, "Ophthalmic Axial Length Measurements Length Summation Sequence"),
  (0x00221220, "Ultrasound Ophthalmic Axial Length Measurements Sequence"),
  (0x00221225, "Optical Ophthalmic Axial Length Measurements Sequence"),
  (0x00221230, "Ultrasound Selected Ophthalmic Axial Length Sequence"),
  (0x00221250, "Ophthalmic Axial Length Selection Method Code Sequence"),
  (0x00221255, "Optical Selected Ophthalmic Axial Length Sequence"),
  (0x00221257, "Selected Segmental Ophthalmic Axial Length Sequence"),
  (0x00221260, "Selected Total Ophthalmic Axial Length Sequence"),
  (0x00221262, "Ophthalmic Axial Length Quality Metric Sequence"),
  (0x00221265, "Ophthalmic Axial Length Quality Metric Type Code Sequence"),
  (0x00221273, "Ophthalmic Axial Length Quality Metric Type Description"),
  (0x00221300, "Intraocular Lens Calculations Right Eye Sequence"),
  (0x00221310, "Intraocular Lens Calculations Left Eye Sequence"),
  (0x00221330, "Referenced Ophthalmic Axial Length Measurement QC Image Sequence"),
  (0x00221415, "Ophthalmic Mapping Device Type"),
  (0x00221420, "Acquisition Method Code Sequence"),
  (0x00221423, "Acquisition Method Algorithm Sequence"),
  (0x00221436, "Ophthalmic Thickness Map Type Code Sequence"),
  (0x00221443, "Ophthalmic Thickness Mapping Normals Sequence"),
  (0x00221445, "Retinal Thickness Definition Code Sequence"),
  (0x00221450, "Pixel Value Mapping to Coded Concept Sequence"),
  (0x00221452, "Mapped Pixel Value"),
  (0x00221454, "Pixel Value Mapping Explanation"),
  (0x00221458, "Ophthalmic Thickness Map Quality Threshold Sequence"),
  (0x00221460, "Ophthalmic Thickness Map Threshold Quality Rating"),
  (0x00221463, "Anatomic Structure Reference Point"),
  (0x00221465, "Registration to Localizer Sequence"),
  (0x00221466, "Registered Localizer Units"),
  (0x00221467, "Registered Localizer Top Left Hand Corner"),
  (0x00221468, "Registered Localizer Bottom Right Hand Corner"),
  (0x00221470, "Ophthalmic Thickness Map Quality Rating Sequence"),
  (0x00221472, "Relevant OPT Attributes Sequence"),
  (0x00221512, "Transformation Method Code Sequence"),
  (0x00221513, "Transformation Algorithm Sequence"),
  (0x00221515, "Ophthalmic Axial Length Method"),
  (0x00221517, "Ophthalmic FOV"),
  (0x00221518, "Two Dimensional to Three Dimensional Map Sequence"),
  (0x00221525, "Wide Field Ophthalmic Photography Quality Rating Sequence"),
  (0x00221526, "Wide Field Ophthalmic Photography Quality Threshold Sequence"),
  (0x00221527, "Wide Field Ophthalmic Photography Threshold Quality Rating"),
  (0x00221528, "X Coordinates Center Pixel View Angle"),
  (0x00221529, "Y Coordinates Center Pixel View Angle"),
  (0x00221530, "Number of Map Points"),
  (0x00221531, "Two Dimensional to Three Dimensional Map Data"),
  (0x00221612, "Derivation Algorithm Sequence"),
  (0x00221615, "Ophthalmic Image Type Code Sequence"),
  (0x00221616, "Ophthalmic Image Type Description"),
  (0x00221618, "Scan Pattern Type Code Sequence"),
  (0x00221620, "Referenced Surface Mesh Identification Sequence"),
  (0x00221622, "Ophthalmic Volumetric Properties Flag"),
  (0x00221623, "Ophthalmic Anatomic Reference Point Frame Coordinate"),
  (0x00221624, "Ophthalmic Anatomic Reference Point X-Coordinate"),
  (0x00221626, "Ophthalmic Anatomic Reference Point Y-Coordinate"),
  (0x00221627, "Ophthalmic En Face Volume Descriptor Sequence"),
  (0x00221628, "Ophthalmic En Face Image Quality Rating Sequence"),
  (0x00221629, "Ophthalmic En Face Volume Descriptor Scope"),
  (0x00221630, "Quality Threshold"),
  (0x00221632, "Ophthalmic Anatomic Reference Point Sequence"),
  (0x00221640, "OCT Bscan Analysis Acquisition Parameters Sequence"),
  (0x00221642, "Number of B-scans Per Frame"),
  (0x00221643, "B-scan Slab Thickness"),
  (0x00221644, "Distance Between B-scan Slabs"),
  (0x00221645, "B-scan Cycle Time"),
  (0x00221646, "B-scan Cycle Time Vector"),
  (0x00221649, "A-scan Rate"),
  (0x00221650, "B-scan Rate"),
  (0x00221658, "Surface Mesh Z-Pixel Offset"),
  (0x00240010, "Visual Field Horizontal Extent"),
  (0x00240011, "Visual Field Vertical Extent"),
  (0x00240012, "Visual Field Shape"),
  (0x00240016, "Screening Test Mode Code Sequence"),
  (0x00240018, "Maximum Stimulus Luminance"),
  (0x00240020, "Background Luminance"),
  (0x00240021, "Stimulus Color Code Sequence"),
  (0x00240024, "Background Illumination Color Code Sequence"),
  (0x00240025, "Stimulus Area"),
  (0x00240028, "Stimulus Presentation Time"),
  (0x00240032, "Fixation Sequence"),
  (0x00240033, "Fixation Monitoring Code Sequence"),
  (0x00240034, "Visual Field Catch Trial Sequence"),
  (0x00240035, "Fixation Checked Quantity"),
  (0x00240036, "Patient Not Properly Fixated Quantity"),
  (0x00240037, "Presented Visual Stimuli Data Flag"),
  (0x00240038, "Number of Visual Stimuli"),
  (0x00240039, "Excessive Fixation Losses Data Flag"),
  (0x00240040, "Excessive Fixation Losses"),
  (0x00240042, "Stimuli Retesting Quantity"),
  (0x00240044, "Comments on Patient's Performance of Visual Field"),
  (0x00240045, "False Negatives Estimate Flag"),
  (0x00240046, "False Negatives Estimate"),
  (0x00240048, "Negative Catch Trials Quantity"),
  (0x00240050, "False Negatives Quantity"),
  (0x00240051, "Excessive False Negatives Data Flag"),
  (0x00240052, "Excessive False Negatives"),
  (0x00240053, "False Positives Estimate Flag"),
  (0x00240054, "False Positives Estimate"),
  (0x00240055, "Catch Trials Data Flag"),
  (0x00240056, "Positive Catch Trials Quantity"),
  (0x00240057, "Test Point Normals Data Flag"),
  (0x00240058, "Test Point Normals Sequence"),
  (0x00240059, "Global Deviation Probability Normals Flag"),
  (0x00240060, "False Positives Quantity"),
  (0x00240061, "Excessive False Positives Data Flag"),
  (0x00240062, "Excessive False Positives"),
  (0x00240063, "Visual Field Test Normals Flag"),
  (0x00240064, "Results Normals Sequence"),
  (0x00240065, "Age Corrected Sensitivity Deviation Algorithm Sequence"),
  (0x00240066, "Global Deviation From Normal"),
  (0x00240067, "Generalized Defect Sensitivity Deviation Algorithm Sequence"),
  (0x00240068, "Localized Deviation From Normal"),
  (0x00240069, "Patient Reliability Indicator"),
  (0x00240070, "Visual Field Mean Sensitivity"),
  (0x00240071, "Global Deviation Probability"),
  (0x00240072, "Local Deviation Probability Normals Flag"),
  (0x00240073, "Localized Deviation Probability"),
  (0x00240074, "Short Term Fluctuation Calculated"),
  (0x00240075, "Short Term Fluctuation"),
  (0x00240076, "Short Term Fluctuation Probability Calculated"),
  (0x00240077, "Short Term Fluctuation Probability"),
  (0x00240078, "Corrected Localized Deviation From Normal Calculated"),
  (0x00240079, "Corrected Localized Deviation From Normal"),
  (0x00240080, "Corrected Localized Deviation From Normal Probability Calculated"),
  (0x00240081, "Corrected Localized Deviation From Normal Probability"),
  (0x00240083, "Global Deviation Probability Sequence"),
  (0x00240085, "Localized Deviation Probability Sequence"),
  (0x00240086, "Foveal Sensitivity Measured"),
  (0x00240087, "Foveal Sensitivity"),
  (0x00240088, "Visual Field Test Duration"),
  (0x00240089, "Visual Field Test Point Sequence"),
  (0x00240090, "Visual Field Test Point X-Coordinate"),
  (0x00240091, "Visual Field Test Point Y-Coordinate"),
  (0x00240092, "Age Corrected Sensitivity Deviation Value"),
  (0x00240093, "Stimulus Results"),
  (0x00240094, "Sensitivity Value"),
  (0x00240095, "Retest Stimulus Seen"),
  (0x00240096, "Retest Sensitivity Value"),
  (0x00240097, "Visual Field Test Point Normals Sequence"),
  (0x00240098, "Quantified Defect"),
  (0x00240100, "Age Corrected Sensitivity Deviation Probability Value"),
  (0x00240102, "Generalized Defect Corrected Sensitivity Deviation Flag"),
  (0x00240103, "Generalized Defect Corrected Sensitivity Deviation Value"),
  (0x00240104, "Generalized Defect Corrected Sensitivity Deviation Probability Value"),
  (0x00240105, "Minimum Sensitivity Value"),
  (0x00240106, "Blind Spot Localized"),
  (0x00240107, "Blind Spot X-Coordinate"),
  (0x00240108, "Blind Spot Y-Coordinate"),
  (0x00240110, "Visual Acuity Measurement Sequence"),
  (0x00240112, "Refractive Parameters Used on Patient Sequence"),
  (0x00240113, "Measurement Laterality"),
  (0x00240114, "Ophthalmic Patient Clinical Information Left Eye Sequence"),
  (0x00240115, "Ophthalmic Patient Clinical Information Right Eye Sequence"),
  (0x00240117, "Foveal Point Normative Data Flag"),
  (0x00240118, "Foveal Point Probability Value"),
  (0x00240120, "Screening Baseline Measured"),
  (0x00240122, "Screening Baseline Measured Sequence"),
  (0x00240124, "Screening Baseline Type"),
  (0x00240126, "Screening Baseline Value"),
  (0x00240202, "Algorithm Source"),
  (0x00240306, "Data Set Name"),
  (0x00240307, "Data Set Version"),
  (0x00240308, "Data Set Source"),
  (0x00240309, "Data Set Description"),
  (0x00240317, "Visual Field Test Reliability Global Index Sequence"),
  (0x00240320, "Visual Field Global Results Index Sequence"),
  (0x00240325, "Data Observation Sequence"),
  (0x00240338, "Index Normals Flag"),
  (0x00240341, "Index Probability"),
  (0x00240344, "Index Probability Sequence"),
  (0x00280002, "Samples per Pixel"),
  (0x00280003, "Samples per Pixel Used"),
  (0x00280004, "Photometric Interpretation"),
  (0x00280005, "Image Dimensions"),
  (0x00280006, "Planar Configuration"),
  (0x00280008, "Number of Frames"),
  (0x00280009, "Frame Increment Pointer"),
  (0x0028000A, "Frame Dimension Pointer"),
  (0x00280010, "Rows"),
  (0x00280011, "Columns"),
  (0x00280012, "Planes"),
  (0x00280014, "Ultrasound Color Data Present"),
  (0x00280030, "Pixel Spacing"),
  (0x00280031, "Zoom Factor"),
  (0x00280032, "Zoom Center"),
  (0x00280034, "Pixel Aspect Ratio"),
  (0x00280040, "Image Format"),
  (0x00280050, "Manipulated Image"),
  (0x00280051, "Corrected Image"),
  (0x0028005F, "Compression Recognition Code"),
  (0x00280060, "Compression Code"),
  (0x00280061, "Compression Originator"),
  (0x00280062, "Compression Label"),
  (0x00280063, "Compression Description"),
  (0x00280065, "Compression Sequence"),
  (0x00280066, "Compression Step Pointers"),
  (0x00280068, "Repeat Interval"),
  (0x00280069, "Bits Grouped"),
  (0x00280070, "Perimeter Table"),
  (0x00280071, "Perimeter Value"),
  (0x00280080, "Predictor Rows"),
  (0x00280081, "Predictor Columns"),
  (0x00280082, "Predictor Constants"),
  (0x00280090, "Blocked Pixels"),
  (0x00280091, "Block Rows"),
  (0x00280092, "Block Columns"),
  (0x00280093, "Row Overlap"),
  (0x00280094, "Column Overlap"),
  (0x00280100, "Bits Allocated"),
  (0x00280101, "Bits Stored"),
  (0x00280102, "High Bit"),
  (0x00280103, "Pixel Representation"),
  (0x00280104, "Smallest Valid Pixel Value"),
  (0x00280105, "Largest Valid Pixel Value"),
  (0x00280106, "Smallest Image Pixel Value"),
  (0x00280107, "Largest Image Pixel Value"),
  (0x00280108, "Smallest Pixel Value in Series"),
  (0x00280109, "Largest Pixel Value in Series"),
  (0x00280110, "Smallest Image Pixel Value in Plane"),
  (0x00280111, "Largest Image Pixel Value in Plane"),
  (0x00280120, "Pixel Padding Value"),
  (0x00280121, "Pixel Padding Range Limit"),
  (0x00280122, "Float Pixel Padding Value"),
  (0x00280123, "Double Float Pixel Padding Value"),
  (0x00280124, "Float Pixel Padding Range Limit"),
  (0x00280125, "Double Float Pixel Padding Range Limit"),
  (0x00280200, "Image Location"),
  (0x00280300, "Quality Control Image"),
  (0x00280301, "Burned In Annotation"),
  (0x00280302, "Recognizable Visual Features"),
  (0x00280303, "Longitudinal Temporal Information Modified"),
  (0x00280304, "Referenced Color Palette Instance UID"),
  (0x00280400, "Transform Label"),
  (0x00280401, "Transform Version Number"),
  (0x00280402, "Number of Transform Steps"),
  (0x00280403, "Sequence of Compressed Data"),
  (0x00280404, "Details of Coefficients"),
  (0x00280700, "DCT Label"),
  (0x00280701, "Data Block Description"),
  (0x00280702, "Data Block"),
  (0x00280710, "Normalization Factor Format"),
  (0x00280720, "Zonal Map Number Format"),
  (0x00280721, "Zonal Map Location"),
  (0x00280722, "Zonal Map Format"),
  (0x00280730, "Adaptive Map Format"),
  (0x00280740, "Code Number Format"),
  (0x00280A02, "Pixel Spacing Calibration Type"),
  (0x00280A04, "Pixel Spacing Calibration Description"),
  (0x00281040, "Pixel Intensity Relationship"),
  (0x00281041, "Pixel Intensity Relationship Sign"),
  (0x00281050, "Window Center"),
  (0x00281051, "Window Width"),
  (0x00281052, "Rescale Intercept"),
  (0x00281053, "Rescale Slope"),
  (0x00281054, "Rescale Type"),
  (0x00281055, "Window Center & Width Explanation"),
  (0x00281056, "VOI LUT Function"),
  (0x00281080, "Gray Scale"),
  (0x00281090, "Recommended Viewing Mode"),
  (0x00281100, "Gray Lookup Table Descriptor"),
  (0x00281101, "Red Palette Color Lookup Table Descriptor"),
  (0x00281102, "Green Palette Color Lookup Table Descriptor"),
  (0x00281103, "Blue Palette Color Lookup Table Descriptor"),
  (0x00281104, "Alpha Palette Color Lookup Table Descriptor"),
  (0x00281111, "Large Red Palette Color Lookup Table Descriptor"),
  (0x00281112, "Large Green Palette Color Lookup Table Descriptor"),
  (0x00281113, "Large Blue Palette Color Lookup Table Descriptor"),
  (0x00281199, "Palette Color Lookup Table UID"),
  (0x00281200, "Gray Lookup Table Data"),
  (0x00281201, "Red Palette Color Lookup Table Data"),
  (0x00281202, "Green Palette Color Lookup Table Data"),
  (0x00281203, "Blue Palette Color Lookup Table Data"),
  (0x00281204, "Alpha Palette Color Lookup Table Data"),
  (0x00281211, "Large Red Palette Color Lookup Table Data"),
  (0x00281212, "Large Green Palette Color Lookup Table Data"),
  (0x00281213, "Large Blue Palette Color Lookup Table Data"),
  (0x00281214, "Large Palette Color Lookup Table UID"),
  (0x00281221, "Segmented Red Palette Color Lookup Table Data"),
  (0x00281222, "Segmented Green Palette Color Lookup Table Data"),
  (0x00281223, "Segmented Blue Palette Color Lookup Table Data"),
  (0x00281224, "Segmented Alpha Palette Color Lookup Table Data"),
  (0x00281230, "Stored Value Color Range Sequence"),
  (0x00281231, "Minimum Stored Value Mapped"),
  (0x00281232, "Maximum Stored Value Mapped"),
  (0x00281300, "Breast Implant Present"),
  (0x00281350, "Partial View"),
  (0x00281351, "Partial View Description"),
  (0x00281352, "Partial View Code Sequence"),
  (0x0028135A, "Spatial Locations Preserved"),
  (0x00281401, "Data Frame Assignment Sequence"),
  (0x00281402, "Data Path Assignment"),
  (0x00281403, "Bits Mapped to Color Lookup Table"),
  (0x00281404, "Blending LUT 1 Sequence"),
  (0x00281405, "Blending LUT 1 Transfer Function"),
  (0x00281406, "Blending Weight Constant"),
  (0x00281407, "Blending Lookup Table Descriptor"),
  (0x00281408, "Blending Lookup Table Data"),
  (0x0028140B, "Enhanced Palette Color Lookup Table Sequence"),
  (0x0028140C, "Blending LUT 2 Sequence"),
  (0x0028140D, "Blending LUT 2 Transfer Function"),
  (0x0028140E, "Data Path ID"),
  (0x0028140F, "RGB LUT Transfer Function"),
  (0x00281410, "Alpha LUT Transfer Function"),
  (0x00282000, "ICC Profile"),
  (0x00282002, "Color Space"),
  (0x00282110, "Lossy Image Compression"),
  (0x00282112, "Lossy Image Compression Ratio"),
  (0x00282114, "Lossy Image Compression Method"),
  (0x00283000, "Modality LUT Sequence"),
  (0x00283001, "Variable Modality LUT Sequence"),
  (0x00283002, "LUT Descriptor"),
  (0x00283003, "LUT Explanation"),
  (0x00283004, "Modality LUT Type"),
  (0x00283006, "LUT Data"),
  (0x00283010, "VOI LUT Sequence"),
  (0x00283110, "Softcopy VOI LUT Sequence"),
  (0x00284000, "Image Presentation Comments"),
  (0x00285000, "Bi-Plane Acquisition Sequence"),
  (0x00286010, "Representative Frame Number"),
  (0x00286020, "Frame Numbers of Interest (FOI)"),
  (0x00286022, "Frame of Interest Description"),
  (0x00286023, "Frame of Interest Type"),
  (0x00286030, "Mask Pointer(s)"),
  (0x00286040, "R Wave Pointer"),
  (0x00286100, "Mask Subtraction Sequence"),
  (0x00286101, "Mask Operation"),
  (0x00286102, "Applicable Frame Range"),
  (0x00286110, "Mask Frame Numbers"),
  (0x00286112, "Contrast Frame Averaging"),
  (0x00286114, "Mask Sub-pixel Shift"),
  (0x00286120, "TID Offset"),
  (0x00286190, "Mask Operation Explanation"),
  (0x00287000, "Equipment Administrator Sequence"),
  (0x00287001, "Number of Display Subsystems"),
  (0x00287002, "Current Configuration ID"),
  (0x00287003, "Display Subsystem ID"),
  (0x00287004, "Display Subsystem Name"),
  (0x00287005, "Display Subsystem Description"),
  (0x00287006, "System Status"),
  (0x00287007, "System Status Comment"),
  (0x00287008, "Target Luminance Characteristics Sequence"),
  (0x00287009, "Luminance Characteristics ID"),
  (0x0028700A, "Display Subsystem Configuration Sequence"),
  (0x0028700B, "Configuration ID"),
  (0x0028700C, "Configuration Name"),
  (0x0028700D, "Configuration Description"),
  (0x0028700E, "Referenced Target Luminance Characteristics ID"),
  (0x0028700F, "QA Results Sequence"),
  (0x00287010, "Display Subsystem QA Results Sequence"),
  (0x00287011, "Configuration QA Results Sequence"),
  (0x00287012, "Measurement Equipment Sequence"),
  (0x00287013, "Measurement Functions"),
  (0x00287014, "Measurement Equipment Type"),
  (0x00287015, "Visual Evaluation Result Sequence"),
  (0x00287016, "Display Calibration Result Sequence"),
  (0x00287017, "DDL Value"),
  (0x00287018, "CIExy White Point"),
  (0x00287019, "Display Function Type"),
  (0x0028701A, "Gamma Value"),
  (0x0028701B, "Number of Luminance Points"),
  (0x0028701C, "Luminance Response Sequence"),
  (0x0028701D, "Target Minimum Luminance"),
  (0x0028701E, "Target Maximum Luminance"),
  (0x0028701F, "Luminance Value"),
  (0x00287020, "Luminance Response Description"),
  (0x00287021, "White Point Flag"),
  (0x00287022, "Display Device Type Code Sequence"),
  (0x00287023, "Display Subsystem Sequence"),
  (0x00287024, "Luminance Result Sequence"),
  (0x00287025, "Ambient Light Value Source"),
  (0x00287026, "Measured Characteristics"),
  (0x00287027, "Luminance Uniformity Result Sequence"),
  (0x00287028, "Visual Evaluation Test Sequence"),
  (0x00287029, "Test Result"),
  (0x0028702A, "Test Result Comment"),
  (0x0028702B, "Test Image Validation"),
  (0x0028702C, "Test Pattern Code Sequence"),
  (0x0028702D, "Measurement Pattern Code Sequence"),
  (0x0028702E, "Visual Evaluation Method Code Sequence"),
  (0x00287FE0, "Pixel Data Provider URL"),
  (0x00289001, "Data Point Rows"),
  (0x00289002, "Data Point Columns"),
  (0x00289003, "Signal Domain Columns"),
  (0x00289099, "Largest Monochrome Pixel Value"),
  (0x00289108, "Data Representation"),
  (0x00289110, "Pixel Measures Sequence"),
  (0x00289132, "Frame VOI LUT Sequence"),
  (0x00289145, "Pixel Value Transformation Sequence"),
  (0x00289235, "Signal Domain Rows"),
  (0x00289411, "Display Filter Percentage"),
  (0x00289415, "Frame Pixel Shift Sequence"),
  (0x00289416, "Subtraction Item ID"),
  (0x00289422, "Pixel Intensity Relationship LUT Sequence"),
  (0x00289443, "Frame Pixel Data Properties Sequence"),
  (0x00289444, "Geometrical Properties"),
  (0x00289445, "Geometric Maximum Distortion"),
  (0x00289446, "Image Processing Applied"),
  (0x00289454, "Mask Selection Mode"),
  (0x00289474, "LUT Function"),
  (0x00289478, "Mask Visibility Percentage"),
  (0x00289501, "Pixel Shift Sequence"),
  (0x00289502, "Region Pixel Shift Sequence"),
  (0x00289503, "Vertices of the Region"),
  (0x00289505, "Multi-frame Presentation Sequence"),
  (0x00289506, "Pixel Shift Frame Range"),
  (0x00289507, "LUT Frame Range"),
  (0x00289520, "Image to Equipment Mapping Matrix"),
  (0x00289537, "Equipment Coordinate System Identification"),
  (0x0032000A, "Study Status ID"),
  (0x0032000C, "Study Priority ID"),
  (0x00320012, "Study ID Issuer"),
  (0x00320032, "Study Verified Date"),
  (0x00320033, "Study Verified Time"),
  (0x00320034, "Study Read Date"),
  (0x00320035, "Study Read Time"),
  (0x00321000, "Scheduled Study Start Date"),
  (0x00321001, "Scheduled Study Start Time"),
  (0x00321010, "Scheduled Study Stop Date"),
  (0x00321011, "Scheduled Study Stop Time"),
  (0x00321020, "Scheduled Study Location"),
  (0x00321021, "Scheduled Study Location AE Title"),
  (0x00321030, "Reason for Study"),
  (0x00321031, "Requesting Physician Identification Sequence"),
  (0x00321032, "Requesting Physician"),
  (0x00321033, "Requesting Service"),
  (0x00321034, "Requesting Service Code Sequence"),
  (0x00321040, "Study Arrival Date"),
  (0x00321041, "Study Arrival Time"),
  (0x00321050, "Study Completion Date"),
  (0x00321051, "Study Completion Time"),
  (0x00321055, "Study Component Status ID"),
  (0x00321060, "Requested Procedure Description"),
  (0x00321064, "Requested Procedure Code Sequence"),
  (0x00321065, "Requested Laterality Code Sequence"),
  (0x00321066, "Reason for Visit"),
  (0x00321067, "Reason for Visit Code Sequence"),
  (0x00321070, "Requested Contrast Agent"),
  (0x00324000, "Study Comments"),
  (0x00340001, "Flow Identifier Sequence"),
  (0x00340002, "Flow Identifier"),
  (0x00340003, "Flow Transfer Syntax UID"),
  (0x00340004, "Flow RTP Sampling Rate"),
  (0x00340005, "Source Identifier"),
  (0x00340007, "Frame Origin Timestamp"),
  (0x00340008, "Includes Imaging Subject"),
  (0x00340009, "Frame Usefulness Group Sequence"),
  (0x0034000A, "Real-Time Bulk Data Flow Sequence"),
  (0x0034000B, "Camera Position Group Sequence"),
  (0x0034000C, "Includes Information"),
  (0x0034000D, "Time of Frame Group Sequence"),
  (0x00380004, "Referenced Patient Alias Sequence"),
  (0x00380008, "Visit Status ID"),
  (0x00380010, "Admission ID"),
  (0x00380011, "Issuer of Admission ID"),
  (0x00380014, "Issuer of Admission ID Sequence"),
  (0x00380016, "Route of Admissions"),
  (0x0038001A, "Scheduled Admission Date"),
  (0x0038001B, "Scheduled Admission Time"),
  (0x0038001C, "Scheduled Discharge Date"),
  (0x0038001D, "Scheduled Discharge Time"),
  (0x0038001E, "Scheduled Patient Institution Residence"),
  (0x00380020, "Admitting Date"),
  (0x00380021, "Admitting Time"),
  (0x00380030, "Discharge Date"),
  (0x00380032, "Discharge Time"),
  (0x00380040, "Discharge Diagnosis Description"),
  (0x00380044, "Discharge Diagnosis Code Sequence"),
  (0x00380050, "Special Needs"),
  (0x00380060, "Service Episode ID"),
  (0x00380061, "Issuer of Service Episode ID"),
  (0x00380062, "Service Episode Description"),
  (0x00380064, "Issuer of Service Episode ID Sequence"),
  (0x00380100, "Pertinent Documents Sequence"),
  (0x00380101, "Pertinent Resources Sequence"),
  (0x00380102, "Resource Description"),
  (0x00380300, "Current Patient Location"),
  (0x00380400, "Patient's Institution Residence"),
  (0x00380500, "Patient State"),
  (0x00380502, "Patient Clinical Trial Participation Sequence"),
  (0x00384000, "Visit Comments"),
  (0x003A0004, "Waveform Originality"),
  (0x003A0005, "Number of Waveform Channels"),
  (0x003A0010, "Number of Waveform Samples"),
  (0x003A001A, "Sampling Frequency"),
  (0x003A0020, "Multiplex Group Label"),
  (0x003A0200, "Channel Definition Sequence"),
  (0x003A0202, "Waveform Channel Number"),
  (0x003A0203, "Channel Label"),
  (0x003A0205, "Channel Status"),
  (0x003A0208, "Channel Source Sequence"),
  (0x003A0209, "Channel Source Modifiers Sequence"),
  (0x003A020A, "Source Waveform Sequence"),
  (0x003A020C, "Channel Derivation Description"),
  (0x003A0210, "Channel Sensitivity"),
  (0x003A0211, "Channel Sensitivity Units Sequence"),
  (0x003A0212, "Channel Sensitivity Correction Factor"),
  (0x003A0213, "Channel Baseline"),
  (0x003A0214, "Channel Time Skew"),
  (0x003A0215, "Channel Sample Skew"),
  (0x003A0218, "Channel Offset"),
  (0x003A021A, "Waveform Bits Stored"),
  (0x003A0220, "Filter Low Frequency"),
  (0x003A0221, "Filter High Frequency"),
  (0x003A0222, "Notch Filter Frequency"),
  (0x003A0223, "Notch Filter Bandwidth"),
  (0x003A0230, "Waveform Data Display Scale"),
  (0x003A0231, "Waveform Display Background CIELab Value"),
  (0x003A0240, "Waveform Presentation Group Sequence"),
  (0x003A0241, "Presentation Group Number"),
  (0x003A0242, "Channel Display Sequence"),
  (0x003A0244, "Channel Recommended Display CIELab Value"),
  (0x003A0245, "Channel Position"),
  (0x003A0246, "Display Shading Flag"),
  (0x003A0247, "Fractional Channel Display Scale"),
  (0x003A0248, "Absolute Channel Display Scale"),
  (0x003A0300, "Multiplexed Audio Channels Description Code Sequence"),
  (0x003A0301, "Channel Identification Code"),
  (0x003A0302, "Channel Mode"),
  (0x003A0310, "Multiplex Group UID"),
  (0x003A0311, "Powerline Frequency"),
  (0x003A0312, "Channel Impedance Sequence"),
  (0x003A0313, "Impedance Value"),
  (0x003A0314, "Impedance Measurement DateTime"),
  (0x003A0315, "Impedance Measurement Frequency"),
  (0x003A0316, "Impedance Measurement Current Type"),
  (0x003A0317, "Waveform Amplifier Type"),
  (0x003A0318, "Filter Low Frequency Characteristics Sequence"),
  (0x003A0319, "Filter High Frequency Characteristics Sequence"),
  (0x003A0320, "Summarized Filter Lookup Table"),
  (0x003A0321, "Notch Filter Characteristics Sequence"),
  (0x003A0322, "Waveform Filter Type"),
  (0x003A0323, "Analog Filter Characteristics Sequence"),
  (0x003A0324, "Analog Filter Roll Off"),
  (0x003A0325, "Analog Filter Type Code Sequence"),
  (0x003A0326, "Digital Filter Characteristics Sequence"),
  (0x003A0327, "Digital Filter Order"),
  (0x003A0328, "Digital Filter Type Code Sequence"),
  (0x003A0329, "Waveform Filter Description"),
  (0x003A032A, "Filter Lookup Table Sequence"),
  (0x003A032B, "Filter Lookup Table Description"),
  (0x003A032C, "Frequency Encoding Code Sequence"),
  (0x003A032D, "Magnitude Encoding Code Sequence"),
  (0x003A032E, "Filter Lookup Table Data"),
  (0x00400001, "Scheduled Station AE Title"),
  (0x00400002, "Scheduled Procedure Step Start Date"),
  (0x00400003, "Scheduled Procedure Step Start Time"),
  (0x00400004, "Scheduled Procedure Step End Date"),
  (0x00400005, "Scheduled Procedure Step End Time"),
  (0x00400006, "Scheduled Performing Physician's Name"),
  (0x00400007, "Scheduled Procedure Step Description"),
  (0x00400008, "Scheduled Protocol Code Sequence"),
  (0x00400009, "Scheduled Procedure Step ID"),
  (0x0040000A, "Stage Code Sequence"),
  (0x0040000B, "Scheduled Performing Physician Identification Sequence"),
  (0x00400010, "Scheduled Station Name"),
  (0x00400011, "Scheduled Procedure Step Location"),
  (0x00400012, "Pre-Medication"),
  (0x00400020, "Scheduled Procedure Step Status"),
  (0x00400026, "Order Placer Identifier Sequence"),
  (0x00400027, "Order Filler Identifier Sequence"),
  (0x00400031, "Local Namespace Entity ID"),
  (0x00400032, "Universal Entity ID"),
  (0x00400033, "Universal Entity ID Type"),
  (0x00400035, "Identifier Type Code"),
  (0x00400036, "Assigning Facility Sequence"),
  (0x00400039, "Assigning Jurisdiction Code Sequence"),
  (0x0040003A, "Assigning Agency or Department Code Sequence"),
  (0x00400100, "Scheduled Procedure Step Sequence"),
  (0x00400220, "Referenced Non-Image Composite SOP Instance Sequence"),
  (0x00400241, "Performed Station AE Title"),
  (0x00400242, "Performed Station Name"),
  (0x00400243, "Performed Location"),
  (0x00400244, "Performed Procedure Step Start Date"),
  (0x00400245, "Performed Procedure Step Start Time"),
  (0x00400250, "Performed Procedure Step End Date"),
  (0x00400251, "Performed Procedure Step End Time"),
  (0x00400252, "Performed Procedure Step Status"),
  (0x00400253, "Performed Procedure Step ID"),
  (0x00400254, "Performed Procedure Step Description"),
  (0x00400255, "Performed Procedure Type Description"),
  (0x00400260, "Performed Protocol Code Sequence"),
  (0x00400261, "Performed Protocol Type"),
  (0x00400270, "Scheduled Step Attributes Sequence"),
  (0x00400275, "Request Attributes Sequence"),
  (0x00400280, "Comments on the Performed Procedure Step"),
  (0x00400281, "Performed Procedure Step Discontinuation Reason Code Sequence"),
  (0x00400293, "Quantity Sequence"),
  (0x00400294, "Quantity"),
  (0x00400295, "Measuring Units Sequence"),
  (0x00400296, "Billing Item Sequence"),
  (0x00400300, "Total Time of Fluoroscopy"),
  (0x00400301, "Total Number of Exposures"),
  (0x00400302, "Entrance Dose"),
  (0x00400303, "Exposed Area"),
  (0x00400306, "Distance Source to Entrance"),
  (0x00400307, "Distance Source to Support"),
  (0x0040030E, "Exposure Dose Sequence"),
  (0x00400310, "Comments on Radiation Dose"),
  (0x00400312, "X-Ray Output"),
  (0x00400314, "Half Value Layer"),
  (0x00400316, "Organ Dose"),
  (0x00400318, "Organ Exposed"),
  (0x00400320, "Billing Procedure Step Sequence"),
  (0x00400321, "Film Consumption Sequence"),
  (0x00400324, "Billing Supplies and Devices Sequence"),
  (0x00400330, "Referenced Procedure Step Sequence"),
  (0x00400340, "Performed Series Sequence"),
  (0x00400400, "Comments on the Scheduled Procedure Step"),
  (0x00400440, "Protocol Context Sequence"),
  (0x00400441, "Content Item Modifier Sequence"),
  (0x00400500, "Scheduled Specimen Sequence"),
  (0x0040050A, "Specimen Accession Number"),
  (0x00400512, "Container Identifier"),
  (0x00400513, "Issuer of the Container Identifier Sequence"),
  (0x00400515, "Alternate Container Identifier Sequence"),
  (0x00400518, "Container Type Code Sequence"),
  (0x0040051A, "Container Description"),
  (0x00400520, "Container Component Sequence"),
  (0x00400550, "Specimen Sequence"),
  (0x00400551, "Specimen Identifier"),
  (0x00400552, "Specimen Description Sequence (Trial)"),
  (0x00400553, "Specimen Description (Trial)"),
  (0x00400554, "Specimen UID"),
  (0x00400555, "Acquisition Context Sequence"),
  (0x00400556, "Acquisition Context Description"),
  (0x00400557, "Specimen Type Code Sequence"),
  (0x00400560, "Specimen Description Sequence"),
  (0x00400562, "Issuer of the Specimen Identifier Sequence"),
  (0x00400600, "Specimen Short Description"),
  (0x00400602, "Specimen Detailed Description"),
  (0x00400610, "Specimen Preparation Sequence"),
  (0x00400612, "Specimen Preparation Step Content Item Sequence"),
  (0x00400620, "Specimen Localization Content Item Sequence"),
  (0x004006FA, "Slide Identifier"),
  (0x00400710, "Whole Slide Microscopy Image Frame Type Sequence"),
  (0x0040071A, "Image Center Point Coordinates Sequence"),
  (0x0040072A, "X Offset in Slide Coordinate System"),
  (0x0040073A, "Y Offset in Slide Coordinate System"),
  (0x0040074A, "Z Offset in Slide Coordinate System"),
  (0x004008D8, "Pixel Spacing Sequence"),
  (0x004008DA, "Coordinate System Axis Code Sequence"),
  (0x004008EA, "Measurement Units Code Sequence"),
  (0x004009F8, "Vital Stain Code Sequence (Trial)"),
  (0x00401001, "Requested Procedure ID"),
  (0x00401002, "Reason for the Requested Procedure"),
  (0x00401003, "Requested Procedure Priority"),
  (0x00401004, "Patient Transport Arrangements"),
  (0x00401005, "Requested Procedure Location"),
  (0x00401006, "Placer Order Number / Procedure"),
  (0x00401007, "Filler Order Number / Procedure"),
  (0x00401008, "Confidentiality Code"),
  (0x00401009, "Reporting Priority"),
  (0x0040100A, "Reason for Requested Procedure Code Sequence"),
  (0x00401010, "Names of Intended Recipients of Results"),
  (0x00401011, "Intended Recipients of Results Identification Sequence"),
  (0x00401012, "Reason For Performed Procedure Code Sequence"),
  (0x00401060, "Requested Procedure Description (Trial)"),
  (0x00401101, "Person Identification Code Sequence"),
  (0x00401102, "Person's Address"),
  (0x00401103, "Person's Telephone Numbers"),
  (0x00401104, "Person's Telecom Information"),
  (0x00401400, "Requested Procedure Comments"),
  (0x00402001, "Reason for the Imaging Service Request"),
  (0x00402004, "Issue Date of Imaging Service Request"),
  (0x00402005, "Issue Time of Imaging Service Request"),
  (0x00402006, "Placer Order Number / Imaging Service Request (Retired)"),
  (0x00402007, "Filler Order Number / Imaging Service Request (Retired)"),
  (0x00402008, "Order Entered By"),
  (0x00402009, "Order Enterer's Location"),
  (0x00402010, "Order Callback Phone Number"),
  (0x00402011, "Order Callback Telecom Information"),
  (0x00402016, "Placer Order Number / Imaging Service Request"),
  (0x00402017, "Filler Order Number / Imaging Service Request"),
  (0x00402400, "Imaging Service Request Comments"),
  (0x00403001, "Confidentiality Constraint on Patient Data Description"),
  (0x00404001, "General Purpose Scheduled Procedure Step Status"),
  (0x00404002, "General Purpose Performed Procedure Step Status"),
  (0x00404003, "General Purpose Scheduled Procedure Step Priority"),
  (0x00404004, "Scheduled Processing Applications Code Sequence"),
  (0x00404005, "Scheduled Procedure Step Start DateTime"),
  (0x00404006, "Multiple Copies Flag"),
  (0x00404007, "Performed Processing Applications Code Sequence"),
  (0x00404008, "Scheduled Procedure Step Expiration DateTime"),
  (0x00404009, "Human Performer Code Sequence"),
  (0x00404010, "Scheduled Procedure Step Modification DateTime"),
  (0x00404011, "Expected Completion DateTime"),
  (0x00404015, "Resulting General Purpose Performed Procedure Steps Sequence"),
  (0x00404016, "Referenced General Purpose Scheduled Procedure Step Sequence"),
  (0x00404018, "Scheduled Workitem Code Sequence"),
  (0x00404019, "Performed Workitem Code Sequence"),
  (0x00404020, "Input Availability Flag"),
  (0x00404021, "Input Information Sequence"),
  (0x00404022, "Relevant Information Sequence"),
  (0x00404023, "Referenced General Purpose Scheduled Procedure Step Transaction UID"),
  (0x00404025, "Scheduled Station Name Code Sequence"),
  (0x00404026, "Scheduled Station Class Code Sequence"),
  (0x00404027, "Scheduled Station Geographic Location Code Sequence"),
  (0x00404028, "Performed Station Name Code Sequence"),
  (0x00404029, "Performed Station Class Code Sequence"),
  (0x00404030, "Performed Station Geographic Location Code Sequence"),
  (0x00404031, "Requested Subsequent Workitem Code Sequence"),
  (0x00404032, "Non-DICOM Output Code Sequence"),
  (0x00404033, "Output Information Sequence"),
  (0x00404034, "Scheduled Human Performers Sequence"),
  (0x00404035, "Actual Human Performers Sequence"),
  (0x00404036, "Human Performer's Organization"),
  (0x00404037, "Human Performer's Name"),
  (0x00404040, "Raw Data Handling"),
  (0x00404041, "Input Readiness State"),
  (0x00404050, "Performed Procedure Step Start DateTime"),
  (0x00404051, "Performed Procedure Step End DateTime"),
  (0x00404052, "Procedure Step Cancellation DateTime"),
  (0x00404070, "Output Destination Sequence"),
  (0x00404071, "DICOM Storage Sequence"),
  (0x00404072, "STOW-RS Storage Sequence"),
  (0x00404073, "Storage URL"),
  (0x00404074, "XDS Storage Sequence"),
  (0x00408302, "Entrance Dose in mGy"),
  (0x00408303, "Entrance Dose Derivation"),
  (0x00409092, "Parametric Map Frame Type Sequence"),
  (0x00409094, "Referenced Image Real World Value Mapping Sequence"),
  (0x00409096, "Real World Value Mapping Sequence"),
  (0x00409098, "Pixel Value Mapping Code Sequence"),
  (0x00409210, "LUT Label"),
  (0x00409211, "Real World Value Last Value Mapped"),
  (0x00409212, "Real World Value LUT Data"),
  (0x00409213, "Double Float Real World Value Last Value Mapped"),
  (0x00409214, "Double Float Real World Value First Value Mapped"),
  (0x00409216, "Real World Value First Value Mapped"),
  (0x00409220, "Quantity Definition Sequence"),
  (0x00409224, "Real World Value Intercept"),
  (0x00409225, "Real World Value Slope"),
  (0x0040A007, "Findings Flag (Trial)"),
  (0x0040A010, "Relationship Type"),
  (0x0040A020, "Findings Sequence (Trial)"),
  (0x0040A021, "Findings Group UID (Trial)"),
  (0x0040A022, "Referenced Findings Group UID (Trial)"),
  (0x0040A023, "Findings Group Recording Date (Trial)"),
  (0x0040A024, "Findings Group Recording Time (Trial)"),
  (0x0040A026, "Findings Source Category Code Sequence (Trial)"),
  (0x0040A027, "Verifying Organization"),
  (0x0040A028, "Documenting Organization Identifier Code Sequence (Trial)"),
  (0x0040A030, "Verification DateTime"),
  (0x0040A032, "Observation DateTime"),
  (0x0040A033, "Observation Start DateTime"),
  (0x0040A034, "Effective Start DateTime"),
  (0x0040A035, "Effective Stop DateTime"),
  (0x0040A040, "Value Type"),
  (0x0040A043, "Concept Name Code Sequence"),
  (0x0040A047, "Measurement Precision Description (Trial)"),
  (0x0040A050, "Continuity Of Content"),
  (0x0040A057, "Urgency or Priority Alerts (Trial)"),
  (0x0040A060, "Sequencing Indicator (Trial)"),
  (0x0040A066, "Document Identifier Code Sequence (Trial)"),
  (0x0040A067, "Document Author (Trial)"),
  (0x0040A068, "Document Author Identifier Code Sequence (Trial)"),
  (0x0040A070, "Identifier Code Sequence (Trial)"),
  (0x0040A073, "Verifying Observer Sequence"),
  (0x0040A074, "Object Binary Identifier (Trial)"),
  (0x0040A075, "Verifying Observer Name"),
  (0x0040A076, "Documenting Observer Identifier Code Sequence (Trial)"),
  (0x0040A078, "Author Observer Sequence"),
  (0x0040A07A, "Participant Sequence"),
  (0x0040A07C, "Custodial Organization Sequence"),
  (0x0040A080, "Participation Type"),
  (0x0040A082, "Participation DateTime"),
  (0x0040A084, "Observer Type"),
  (0x0040A085, "Procedure Identifier Code Sequence (Trial)"),
  (0x0040A088, "Verifying Observer Identification Code Sequence"),
  (0x0040A089, "Object Directory Binary Identifier (Trial)"),
  (0x0040A090, "Equivalent CDA Document Sequence"),
  (0x0040A0B0, "Referenced Waveform Channels"),
  (0x0040A110, "Date of Document or Verbal Transaction (Trial)"),
  (0x0040A112, "Time of Document Creation or Verbal Transaction (Trial)"),
  (0x0040A120, "DateTime"),
  (0x0040A121, "Date"),
  (0x0040A122, "Time"),
  (0x0040A123, "Person Name"),
  (0x0040A124, "UID"),
  (0x0040A125, "Report Status ID (Trial)"),
  (0x0040A130, "Temporal Range Type"),
  (0x0040A132, "Referenced Sample Positions"),
  (0x0040A136, "Referenced Frame Numbers"),
  (0x0040A138, "Referenced Time Offsets"),
  (0x0040A13A, "Referenced DateTime"),
  (0x0040A160, "Text Value"),
  (0x0040A161, "Floating Point Value"),
  (0x0040A162, "Rational Numerator Value"),
  (0x0040A163, "Rational Denominator Value"),
  (0x0040A167, "Observation Category Code Sequence (Trial)"),
  (0x0040A168, "Concept Code Sequence"),
  (0x0040A16A, "Bibliographic Citation (Trial)"),
  (0x0040A170, "Purpose of Reference Code Sequence"),
  (0x0040A171, "Observation UID"),
  (0x0040A172, "Referenced Observation UID (Trial)"),
  (0x0040A173, "Referenced Observation Class (Trial)"),
  (0x0040A174, "Referenced Object Observation Class (Trial)"),
  (0x0040A180, "Annotation Group Number"),
  (0x0040A192, "Observation Date (Trial)"),
  (0x0040A193, "Observation Time (Trial)"),
  (0x0040A194, "Measurement Automation (Trial)"),
  (0x0040A195, "Modifier Code Sequence"),
  (0x0040A224, "Identification Description (Trial)"),
  (0x0040A290, "Coordinates Set Geometric Type (Trial)"),
  (0x0040A296, "Algorithm Code Sequence (Trial)"),
  (0x0040A297, "Algorithm Description (Trial)"),
  (0x0040A29A, "Pixel Coordinates Set (Trial)"),
  (0x0040A300, "Measured Value Sequence"),
  (0x0040A301, "Numeric Value Qualifier Code Sequence"),
  (0x0040A307, "Current Observer (Trial)"),
  (0x0040A30A, "Numeric Value"),
  (0x0040A313, "Referenced Accession Sequence (Trial)"),
  (0x0040A33A, "Report Status Comment (Trial)"),
  (0x0040A340, "Procedure Context Sequence (Trial)"),
  (0x0040A352, "Verbal Source (Trial)"),
  (0x0040A353, "Address (Trial)"),
  (0x0040A354, "Telephone Number (Trial)"),
  (0x0040A358, "Verbal Source Identifier Code Sequence (Trial)"),
  (0x0040A360, "Predecessor Documents Sequence"),
  (0x0040A370, "Referenced Request Sequence"),
  (0x0040A372, "Performed Procedure Code Sequence"),
  (0x0040A375, "Current Requested Procedure Evidence Sequence"),
  (0x0040A380, "Report Detail Sequence (Trial)"),
  (0x0040A385, "Pertinent Other Evidence Sequence"),
  (0x0040A390, "HL7 Structured Document Reference Sequence"),
  (0x0040A402, "Observation Subject UID (Trial)"),
  (0x0040A403, "Observation Subject Class (Trial)"),
  (0x0040A404, "Observation Subject Type Code Sequence (Trial)"),
  (0x0040A491, "Completion Flag"),
  (0x0040A492, "Completion Flag Description"),
  (0x0040A493, "Verification Flag"),
  (0x0040A494, "Archive Requested"),
  (0x0040A496, "Preliminary Flag"),
  (0x0040A504, "Content Template Sequence"),
  (0x0040A525, "Identical Documents Sequence"),
  (0x0040A600, "Observation Subject Context Flag (Trial)"),
  (0x0040A601, "Observer Context Flag (Trial)"),
  (0x0040A603, "Procedure Context Flag (Trial)"),
  (0x0040A730, "Content Sequence"),
  (0x0040A731, "Relationship Sequence (Trial)"),
  (0x0040A732, "Relationship Type Code Sequence (Trial)"),
  (0x0040A744, "Language Code Sequence (Trial)"),
  (0x0040A801, "Tabulated Values Sequence"),
  (0x0040A802, "Number of Table Rows"),
  (0x0040A803, "Number of Table Columns"),
  (0x0040A804, "Table Row Number"),
  (0x0040A805, "Table Column Number"),
  (0x0040A806, "Table Row Definition Sequence"),
  (0x0040A807, "Table Column Definition Sequence"),
  (0x0040A808, "Cell Values Sequence"),
  (0x0040A992, "Uniform Resource Locator (Trial)"),
  (0x0040B020, "Waveform Annotation Sequence"),
  (0x0040DB00, "Template Identifier"),
  (0x0040DB06, "Template Version"),
  (0x0040DB07, "Template Local Version"),
  (0x0040DB0B, "Template Extension Flag"),
  (0x0040DB0C, "Template Extension Organization UID"),
  (0x0040DB0D, "Template Extension Creator UID"),
  (0x0040DB73, "Referenced Content Item Identifier"),
  (0x0040E001, "HL7 Instance Identifier"),
  (0x0040E004, "HL7 Document Effective Time"),
  (0x0040E006, "HL7 Document Type Code Sequence"),
  (0x0040E008, "Document Class Code Sequence"),
  (0x0040E010, "Retrieve URI"),
  (0x0040E011, "Retrieve Location UID"),
  (0x0040E020, "Type of Instances"),
  (0x0040E021, "DICOM Retrieval Sequence"),
  (0x0040E022, "DICOM Media Retrieval Sequence"),
  (0x0040E023, "WADO Retrieval Sequence"),
  (0x0040E024, "XDS Retrieval Sequence"),
  (0x0040E025, "WADO-RS Retrieval Sequence"),
  (0x0040E030, "Repository Unique ID"),
  (0x0040E031, "Home Community ID"),
  (0x00420010, "Document Title"),
  (0x00420011, "Encapsulated Document"),
  (0x00420012, "MIME Type of Encapsulated Document"),
  (0x00420013, "Source Instance Sequence"),
  (0x00420014, "List of MIME Types"),
  (0x00420015, "Encapsulated Document Length"),
  (0x00440001, "Product Package Identifier"),
  (0x00440002, "Substance Administration Approval"),
  (0x00440003, "Approval Status Further Description"),
  (0x00440004, "Approval Status DateTime"),
  (0x00440007, "Product Type Code Sequence"),
  (0x00440008, "Product Name"),
  (0x00440009, "Product Description"),
  (0x0044000A, "Product Lot Identifier"),
  (0x0044000B, "Product Expiration DateTime"),
  (0x00440010, "Substance Administration DateTime"),
  (0x00440011, "Substance Administration Notes"),
  (0x00440012, "Substance Administration Device ID"),
  (0x00440013, "Product Parameter Sequence"),
  (0x00440019, "Substance Administration Parameter Sequence"),
  (0x00440100, "Approval Sequence"),
  (0x00440101, "Assertion Code Sequence"),
  (0x00440102, "Assertion UID"),
  (0x00440103, "Asserter Identification Sequence"),
  (0x00440104, "Assertion DateTime"),
  (0x00440105, "Assertion Expiration DateTime"),
  (0x00440106, "Assertion Comments"),
  (0x00440107, "Related Assertion Sequence"),
  (0x00440108, "Referenced Assertion UID"),
  (0x00440109, "Approval Subject Sequence"),
  (0x0044010A, "Organizational Role Code Sequence"),
  (0x00460012, "Lens Description"),
  (0x00460014, "Right Lens Sequence"),
  (0x00460015, "Left Lens Sequence"),
  (0x00460016, "Unspecified Laterality Lens Sequence"),
  (0x00460018, "Cylinder Sequence"),
  (0x00460028, "Prism Sequence"),
  (0x00460030, "Horizontal Prism Power"),
  (0x00460032, "Horizontal Prism Base"),
  (0x00460034, "Vertical Prism Power"),
  (0x00460036, "Vertical Prism Base"),
  (0x00460038, "Lens Segment Type"),
  (0x00460040, "Optical Transmittance"),
  (0x00460042, "Channel Width"),
  (0x00460044, "Pupil Size"),
  (0x00460046, "Corneal Size"),
  (0x00460047, "Corneal Size Sequence"),
  (0x00460050, "Autorefraction Right Eye Sequence"),
  (0x00460052, "Autorefraction Left Eye Sequence"),
  (0x00460060, "Distance Pupillary Distance"),
  (0x00460062, "Near Pupillary Distance"),
  (0x00460063, "Intermediate Pupillary Distance"),
  (0x00460064, "Other Pupillary Distance"),
  (0x00460070, "Keratometry Right Eye Sequence"),
  (0x00460071, "Keratometry Left Eye Sequence"),
  (0x00460074, "Steep Keratometric Axis Sequence"),
  (0x00460075, "Radius of Curvature"),
  (0x00460076, "Keratometric Power"),
  (0x00460077, "Keratometric Axis"),
  (0x00460080, "Flat Keratometric Axis Sequence"),
  (0x00460092, "Background Color"),
  (0x00460094, "Optotype"),
  (0x00460095, "Optotype Presentation"),
  (0x00460097, "Subjective Refraction Right Eye Sequence"),
  (0x00460098, "Subjective Refraction Left Eye Sequence"),
  (0x00460100, "Add Near Sequence"),
  (0x00460101, "Add Intermediate Sequence"),
  (0x00460102, "Add Other Sequence"),
  (0x00460104, "Add Power"),
  (0x00460106, "Viewing Distance"),
  (0x00460110, "Cornea Measurements Sequence"),
  (0x00460111, "Source of Cornea Measurement Data Code Sequence"),
  (0x00460113, "Steep Corneal Axis Sequence"),
  (0x00460114, "Flat Corneal Axis Sequence"),
  (0x00460115, "Corneal Power"),
  (0x00460116, "Corneal Axis"),
  (0x00460117, "Cornea Measurement Method Code Sequence"),
  (0x00460118, "Refractive Index of Cornea"),
  (0x00460119, "Refractive Index of Aqueous Humor"),
  (0x00460121, "Visual Acuity Type Code Sequence"),
  (0x00460122, "Visual Acuity Right Eye Sequence"),
  (0x00460123, "Visual Acuity Left Eye Sequence"),
  (0x00460124, "Visual Acuity Both Eyes Open Sequence"),
  (0x00460125, "Viewing Distance Type"),
  (0x00460135, "Visual Acuity Modifiers"),
  (0x00460137, "Decimal Visual Acuity"),
  (0x00460139, "Optotype Detailed Definition"),
  (0x00460145, "Referenced Refractive Measurements Sequence"),
  (0x00460146, "Sphere Power"),
  (0x00460147, "Cylinder Power"),
  (0x00460201, "Corneal Topography Surface"),
  (0x00460202, "Corneal Vertex Location"),
  (0x00460203, "Pupil Centroid X-Coordinate"),
  (0x00460204, "Pupil Centroid Y-Coordinate"),
  (0x00460205, "Equivalent Pupil Radius"),
  (0x00460207, "Corneal Topography Map Type Code Sequence"),
  (0x00460208, "Vertices of the Outline of Pupil"),
  (0x00460210, "Corneal Topography Mapping Normals Sequence"),
  (0x00460211, "Maximum Corneal Curvature Sequence"),
  (0x00460212, "Maximum Corneal Curvature"),
  (0x00460213, "Maximum Corneal Curvature Location"),
  (0x00460215, "Minimum Keratometric Sequence"),
  (0x00460218, "Simulated Keratometric Cylinder Sequence"),
  (0x00460220, "Average Corneal Power"),
  (0x00460224, "Corneal I-S Value"),
  (0x00460227, "Analyzed Area"),
  (0x00460230, "Surface Regularity Index"),
  (0x00460232, "Surface Asymmetry Index"),
  (0x00460234, "Corneal Eccentricity Index"),
  (0x00460236, "Keratoconus Prediction Index"),
  (0x00460238, "Decimal Potential Visual Acuity"),
  (0x00460242, "Corneal Topography Map Quality Evaluation"),
  (0x00460244, "Source Image Corneal Processed Data Sequence"),
  (0x00460247, "Corneal Point Location"),
  (0x00460248, "Corneal Point Estimated"),
  (0x00460249, "Axial Power"),
  (0x00460250, "Tangential Power"),
  (0x00460251, "Refractive Power"),
  (0x00460252, "Relative Elevation"),
  (0x00460253, "Corneal Wavefront"),
  (0x00480001, "Imaged Volume Width"),
  (0x00480002, "Imaged Volume Height"),
  (0x00480003, "Imaged Volume Depth"),
  (0x00480006, "Total Pixel Matrix Columns"),
  (0x00480007, "Total Pixel Matrix Rows"),
  (0x00480008, "Total Pixel Matrix Origin Sequence"),
  (0x00480010, "Specimen Label in Image"),
  (0x00480011, "Focus Method"),
  (0x00480012, "Extended Depth of Field"),
  (0x00480013, "Number of Focal Planes"),
  (0x00480014, "Distance Between Focal Planes"),
  (0x00480015, "Recommended Absent Pixel CIELab Value"),
  (0x00480100, "Illuminator Type Code Sequence"),
  (0x00480102, "Image Orientation (Slide)"),
  (0x00480105, "Optical Path Sequence"),
  (0x00480106, "Optical Path Identifier"),
  (0x00480107, "Optical Path Description"),
  (0x00480108, "Illumination Color Code Sequence"),
  (0x00480110, "Specimen Reference Sequence"),
  (0x00480111, "Condenser Lens Power"),
  (0x00480112, "Objective Lens Power"),
  (0x00480113, "Objective Lens Numerical Aperture"),
  (0x00480114, "Confocal Mode"),
  (0x00480115, "Tissue Location"),
  (0x00480116, "Confocal Microscopy Image Frame Type Sequence"),
  (0x00480117, "Image Acquisition Depth"),
  (0x00480120, "Palette Color Lookup Table Sequence"),
  (0x00480200, "Referenced Image Navigation Sequence"),
  (0x00480201, "Top Left Hand Corner of Localizer Area"),
  (0x00480202, "Bottom Right Hand Corner of Localizer Area"),
  (0x00480207, "Optical Path Identification Sequence"),
  (0x0048021A, "Plane Position (Slide) Sequence"),
  (0x0048021E, "Column Position In Total Image Pixel Matrix"),
  (0x0048021F, "Row Position In Total Image Pixel Matrix"),
  (0x00480301, "Pixel Origin Interpretation"),
  (0x00480302, "Number of Optical Paths"),
  (0x00480303, "Total Pixel Matrix Focal Planes"),
  (0x00480304, "Tile Size"),
  (0x00500004, "Calibration Image"),
  (0x00500010, "Device Sequence"),
  (0x00500012, "Container Component Type Code Sequence"),
  (0x00500013, "Container Component Thickness"),
  (0x00500014, "Device Length"),
  (0x00500015, "Container Component Width"),
  (0x00500016, "Device Diameter"),
  (0x00500017, "Device Diameter Units"),
  (0x00500018, "Device Volume"),
  (0x00500019, "Inter-Marker Distance"),
  (0x0050001A, "Container Component Material"),
  (0x0050001B, "Container Component ID"),
  (0x0050001C, "Container Component Length"),
  (0x0050001D, "Container Component Diameter"),
  (0x0050001E, "Container Component Description"),
  (0x00500020, "Device Description"),
  (0x00500021, "Long Device Description"),
  (0x00520001, "Contrast/Bolus Ingredient Percent by Volume"),
  (0x00520002, "OCT Focal Distance"),
  (0x00520003, "Beam Spot Size"),
  (0x00520004, "Effective Refractive Index"),
  (0x00520006, "OCT Acquisition Domain"),
  (0x00520007, "OCT Optical Center Wavelength"),
  (0x00520008, "Axial Resolution"),
  (0x00520009, "Ranging Depth"),
  (0x00520011, "A-line Rate"),
  (0x00520012, "A-lines Per Frame"),
  (0x00520013, "Catheter Rotational Rate"),
  (0x00520014, "A-line Pixel Spacing"),
  (0x00520016, "Mode of Percutaneous Access Sequence"),
  (0x00520025, "Intravascular OCT Frame Type Sequence"),
  (0x00520026, "OCT Z Offset Applied"),
  (0x00520027, "Intravascular Frame Content Sequence"),
  (0x00520028, "Intravascular Longitudinal Distance"),
  (0x00520029, "Intravascular OCT Frame Content Sequence"),
  (0x00520030, "OCT Z Offset Correction"),
  (0x00520031, "Catheter Direction of Rotation"),
  (0x00520033, "Seam Line Location"),
  (0x00520034, "First A-line Location"),
  (0x00520036, "Seam Line Index"),
  (0x00520038, "Number of Padded A-lines"),
  (0x00520039, "Interpolation Type"),
  (0x0052003A, "Refractive Index Applied"),
  (0x00540010, "Energy Window Vector"),
  (0x00540011, "Number of Energy Windows"),
  (0x00540012, "Energy Window Information Sequence"),
  (0x00540013, "Energy Window Range Sequence"),
  (0x00540014, "Energy Window Lower Limit"),
  (0x00540015, "Energy Window Upper Limit"),
  (0x00540016, "Radiopharmaceutical Information Sequence"),
  (0x00540017, "Residual Syringe Counts"),
  (0x00540018, "Energy Window Name"),
  (0x00540020, "Detector Vector"),
  (0x00540021, "Number of Detectors"),
  (0x00540022, "Detector Information Sequence"),
  (0x00540030, "Phase Vector"),
  (0x00540031, "Number of Phases"),
  (0x00540032, "Phase Information Sequence"),
  (0x00540033, "Number of Frames in Phase"),
  (0x00540036, "Phase Delay"),
  (0x00540038, "Pause Between Frames"),
  (0x00540039, "Phase Description"),
  (0x00540050, "Rotation Vector"),
  (0x00540051, "Number of Rotations"),
  (0x00540052, "Rotation Information Sequence"),
  (0x00540053, "Number of Frames in Rotation"),
  (0x00540060, "R-R Interval Vector"),
  (0x00540061, "Number of R-R Intervals"),
  (0x00540062, "Gated Information Sequence"),
  (0x00540063, "Data Information Sequence"),
  (0x00540070, "Time Slot Vector"),
  (0x00540071, "Number of Time Slots"),
  (0x00540072, "Time Slot Information Sequence"),
  (0x00540073, "Time Slot Time"),
  (0x00540080, "Slice Vector"),
  (0x00540081, "Number of Slices"),
  (0x00540090, "Angular View Vector"),
  (0x00540100, "Time Slice Vector"),
  (0x00540101, "Number of Time Slices"),
  (0x00540200, "Start Angle"),
  (0x00540202, "Type of Detector Motion"),
  (0x00540210, "Trigger Vector"),
  (0x00540211, "Number of Triggers in Phase"),
  (0x00540220, "View Code Sequence"),
  (0x00540222, "View Modifier Code Sequence"),
  (0x00540300, "Radionuclide Code Sequence"),
  (0x00540302, "Administration Route Code Sequence"),
  (0x00540304, "Radiopharmaceutical Code Sequence"),
  (0x00540306, "Calibration Data Sequence"),
  (0x00540308, "Energy Window Number"),
  (0x00540400, "Image ID"),
  (0x00540410, "Patient Orientation Code Sequence"),
  (0x00540412, "Patient Orientation Modifier Code Sequence"),
  (0x00540414, "Patient Gantry Relationship Code Sequence"),
  (0x00540500, "Slice Progression Direction"),
  (0x00540501, "Scan Progression Direction"),
  (0x00541000, "Series Type"),
  (0x00541001, "Units"),
  (0x00541002, "Counts Source"),
  (0x00541004, "Reprojection Method"),
  (0x00541006, "SUV Type"),
  (0x00541100, "Randoms Correction Method"),
  (0x00541101, "Attenuation Correction Method"),
  (0x00541102, "Decay Correction"),
  (0x00541103, "Reconstruction Method"),
  (0x00541104, "Detector Lines of Response Used"),
  (0x00541105, "Scatter Correction Method"),
  (0x00541200, "Axial Acceptance"),
  (0x00541201, "Axial Mash"),
  (0x00541202, "Transverse Mash"),
  (0x00541203, "Detector Element Size"),
  (0x00541210, "Coincidence Window Width"),
  (0x00541220, "Secondary Counts Type"),
  (0x00541300, "Frame Reference Time"),
  (0x00541310, "Primary (Prompts) Counts Accumulated"),
  (0x00541311, "Secondary Counts Accumulated"),
  (0x00541320, "Slice Sensitivity Factor"),
  (0x00541321, "Decay Factor"),
  (0x00541322, "Dose Calibration Factor"),
  (0x00541323, "Scatter Fraction Factor"),
  (0x00541324, "Dead Time Factor"),
  (0x00541330, "Image Index"),
  (0x00541400, "Counts Included"),
  (0x00541401, "Dead Time Correction Flag"),
  (0x00603000, "Histogram Sequence"),
  (0x00603002, "Histogram Number of Bins"),
  (0x00603004, "Histogram First Bin Value"),
  (0x00603006, "Histogram Last Bin Value"),
  (0x00603008, "Histogram Bin Width"),
  (0x00603010, "Histogram Explanation"),
  (0x00603020, "Histogram Data"),
  (0x00620001, "Segmentation Type"),
  (0x00620002, "Segment Sequence"),
  (0x00620003, "Segmented Property Category Code Sequence"),
  (0x00620004, "Segment Number"),
  (0x00620005, "Segment Label"),
  (0x00620006, "Segment Description"),
  (0x00620007, "Segmentation Algorithm Identification Sequence"),
  (0x00620008, "Segment Algorithm Type"),
  (0x00620009, "Segment Algorithm Name"),
  (0x0062000A, "Segment Identification Sequence"),
  (0x0062000B, "Referenced Segment Number"),
  (0x0062000C, "Recommended Display Grayscale Value"),
  (0x0062000D, "Recommended Display CIELab Value"),
  (0x0062000E, "Maximum Fractional Value"),
  (0x0062000F, "Segmented Property Type Code Sequence"),
  (0x00620010, "Segmentation Fractional Type"),
  (0x00620011, "Segmented Property Type Modifier Code Sequence"),
  (0x00620012, "Used Segments Sequence"),
  (0x00620013, "Segments Overlap"),
  (0x00620020, "Tracking ID"),
  (0x00620021, "Tracking UID"),
  (0x00640002, "Deformable Registration Sequence"),
  (0x00640003, "Source Frame of Reference UID"),
  (0x00640005, "Deformable Registration Grid Sequence"),
  (0x00640007, "Grid Dimensions"),
  (0x00640008, "Grid Resolution"),
  (0x00640009, "Vector Grid Data"),
  (0x0064000F, "Pre Deformation Matrix Registration Sequence"),
  (0x00640010, "Post Deformation Matrix Registration Sequence"),
  (0x00660001, "Number of Surfaces"),
  (0x00660002, "Surface Sequence"),
  (0x00660003, "Surface Number"),
  (0x00660004, "Surface Comments"),
  (0x00660009, "Surface Processing"),
  (0x0066000A, "Surface Processing Ratio"),
  (0x0066000B, "Surface Processing Description"),
  (0x0066000C, "Recommended Presentation Opacity"),
  (0x0066000D, "Recommended Presentation Type"),
  (0x0066000E, "Finite Volume"),
  (0x00660010, "Manifold"),
  (0x00660011, "Surface Points Sequence"),
  (0x00660012, "Surface Points Normals Sequence"),
  (0x00660013, "Surface Mesh Primitives Sequence"),
  (0x00660015, "Number of Surface Points"),
  (0x00660016, "Point Coordinates Data"),
  (0x00660017, "Point Position Accuracy"),
  (0x00660018, "Mean Point Distance"),
  (0x00660019, "Maximum Point Distance"),
  (0x0066001A, "Points Bounding Box Coordinates"),
  (0x0066001B, "Axis of Rotation"),
  (0x0066001C, "Center of Rotation"),
  (0x0066001E, "Number of Vectors"),
  (0x0066001F, "Vector Dimensionality"),
  (0x00660020, "Vector Accuracy"),
  (0x00660021, "Vector Coordinate Data"),
  (0x00660022, "Double Point Coordinates Data"),
  (0x00660023, "Triangle Point Index List"),
  (0x00660024, "Edge Point Index List"),
  (0x00660025, "Vertex Point Index List"),
  (0x00660026, "Triangle Strip Sequence"),
  (0x00660027, "Triangle Fan Sequence"),
  (0x00660028, "Line Sequence"),
  (0x00660029, "Primitive Point Index List"),
  (0x0066002A, "Surface Count"),
  (0x0066002B, "Referenced Surface Sequence"),
  (0x0066002C, "Referenced Surface Number"),
  (0x0066002D, "Segment Surface Generation Algorithm Identification Sequence"),
  (0x0066002E, "Segment Surface Source Instance Sequence"),
  (0x0066002F, "Algorithm Family Code Sequence"),
  (0x00660030, "Algorithm Name Code Sequence"),
  (0x00660031, "Algorithm Version"),
  (0x00660032, "Algorithm Parameters"),
  (0x00660034, "Facet Sequence"),
  (0x00660035, "Surface Processing Algorithm Identification Sequence"),
  (0x00660036, "Algorithm Name"),
  (0x00660037, "Recommended Point Radius"),
  (0x00660038, "Recommended Line Thickness"),
  (0x00660040, "Long Primitive Point Index List"),
  (0x00660041, "Long Triangle Point Index List"),
  (0x00660042, "Long Edge Point Index List"),
  (0x00660043, "Long Vertex Point Index List"),
  (0x00660101, "Track Set Sequence"),
  (0x00660102, "Track Sequence"),
  (0x00660103, "Recommended Display CIELab Value List"),
  (0x00660104, "Tracking Algorithm Identification Sequence"),
  (0x00660105, "Track Set Number"),
  (0x00660106, "Track Set Label"),
  (0x00660107, "Track Set Description"),
  (0x00660108, "Track Set Anatomical Type Code Sequence"),
  (0x00660121, "Measurements Sequence"),
  (0x00660124, "Track Set Statistics Sequence"),
  (0x00660125, "Floating Point Values"),
  (0x00660129, "Track Point Index List"),
  (0x00660130, "Track Statistics Sequence"),
  (0x00660132, "Measurement Values Sequence"),
  (0x00660133, "Diffusion Acquisition Code Sequence"),
  (0x00660134, "Diffusion Model Code Sequence"),
  (0x00686210, "Implant Size"),
  (0x00686221, "Implant Template Version"),
  (0x00686222, "Replaced Implant Template Sequence"),
  (0x00686223, "Implant Type"),
  (0x00686224, "Derivation Implant Template Sequence"),
  (0x00686225, "Original Implant Template Sequence"),
  (0x00686226, "Effective DateTime"),
  (0x00686230, "Implant Target Anatomy Sequence"),
  (0x00686260, "Information From Manufacturer Sequence"),
  (0x00686265, "Notification From Manufacturer Sequence"),
  (0x00686270, "Information Issue DateTime"),
  (0x00686280, "Information Summary"),
  (0x006862A0, "Implant Regulatory Disapproval Code Sequence"),
  (0x006862A5, "Overall Template Spatial Tolerance"),
  (0x006862C0, "HPGL Document Sequence"),
  (0x006862D0, "HPGL Document ID"),
  (0x006862D5, "HPGL Document Label"),
  (0x006862E0, "View Orientation Code Sequence"),
  (0x006862F0, "View Orientation Modifier Code Sequence"),
  (0x006862F2, "HPGL Document Scaling"),
  (0x00686300, "HPGL Document"),
  (0x00686310, "HPGL Contour Pen Number"),
  (0x00686320, "HPGL Pen Sequence"),
  (0x00686330, "HPGL Pen Number"),
  (0x00686340, "HPGL Pen Label"),
  (0x00686345, "HPGL Pen Description"),
  (0x00686346, "Recommended Rotation Point"),
  (0x00686347, "Bounding Rectangle"),
  (0x00686350, "Implant Template 3D Model Surface Number"),
  (0x00686360, "Surface Model Description Sequence"),
  (0x00686380, "Surface Model Label"),
  (0x00686390, "Surface Model Scaling Factor"),
  (0x006863A0, "Materials Code Sequence"),
  (0x006863A4, "Coating Materials Code Sequence"),
  (0x006863A8, "Implant Type Code Sequence"),
  (0x006863AC, "Fixation Method Code Sequence"),
  (0x006863B0, "Mating Feature Sets Sequence"),
  (0x006863C0, "Mating Feature Set ID"),
  (0x006863D0, "Mating Feature Set Label"),
  (0x006863E0, "Mating Feature Sequence"),
  (0x006863F0, "Mating Feature ID"),
  (0x00686400, "Mating Feature Degree of Freedom Sequence"),
  (0x00686410, "Degree of Freedom ID"),
  (0x00686420, "Degree of Freedom Type"),
  (0x00686430, "2D Mating Feature Coordinates Sequence"),
  (0x00686440, "Referenced HPGL Document ID"),
  (0x00686450, "2D Mating Point"),
  (0x00686460, "2D Mating Axes"),
  (0x00686470, "2D Degree of Freedom Sequence"),
  (0x00686490, "3D Degree of Freedom Axis"),
  (0x006864A0, "Range of Freedom"),
  (0x006864C0, "3D Mating Point"),
  (0x006864D0, "3D Mating Axes"),
  (0x006864F0, "2D Degree of Freedom Axis"),
  (0x00686500, "Planning Landmark Point Sequence"),
  (0x00686510, "Planning Landmark Line Sequence"),
  (0x00686520, "Planning Landmark Plane Sequence"),
  (0x00686530, "Planning Landmark ID"),
  (0x00686540, "Planning Landmark Description"),
  (0x00686545, "Planning Landmark Identification Code Sequence"),
  (0x00686550, "2D Point Coordinates Sequence"),
  (0x00686560, "2D Point Coordinates"),
  (0x00686590, "3D Point Coordinates"),
  (0x006865A0, "2D Line Coordinates Sequence"),
  (0x006865B0, "2D Line Coordinates"),
  (0x006865D0, "3D Line Coordinates"),
  (0x006865E0, "2D Plane Coordinates Sequence"),
  (0x006865F0, "2D Plane Intersection"),
  (0x00686610, "3D Plane Origin"),
  (0x00686620, "3D Plane Normal"),
  (0x00687001, "Model Modification"),
  (0x00687002, "Model Mirroring"),
  (0x00687003, "Model Usage Code Sequence"),
  (0x00687004, "Model Group UID"),
  (0x00687005, "Relative URI Reference Within Encapsulated Document"),
  (0x00700001, "Graphic Annotation Sequence"),
  (0x00700002, "Graphic Layer"),
  (0x00700003, "Bounding Box Annotation Units"),
  (0x00700004, "Anchor Point Annotation Units"),
  (0x00700005, "Graphic Annotation Units"),
  (0x00700006, "Unformatted Text Value"),
  (0x00700008, "Text Object Sequence"),
  (0x00700009, "Graphic Object Sequence"),
  (0x00700010, "Bounding Box Top Left Hand Corner"),
  (0x00700011, "Bounding Box Bottom Right Hand Corner"),
  (0x00700012, "Bounding Box Text Horizontal Justification"),
  (0x00700014, "Anchor Point"),
  (0x00700015, "Anchor Point Visibility"),
  (0x00700020, "Graphic Dimensions"),
  (0x00700021, "Number of Graphic Points"),
  (0x00700022, "Graphic Data"),
  (0x00700023, "Graphic Type"),
  (0x00700024, "Graphic Filled"),
  (0x00700040, "Image Rotation (Retired)"),
  (0x00700041, "Image Horizontal Flip"),
  (0x00700042, "Image Rotation"),
  (0x00700050, "Displayed Area Top Left Hand Corner (Trial)"),
  (0x00700051, "Displayed Area Bottom Right Hand Corner (Trial)"),
  (0x00700052, "Displayed Area Top Left Hand Corner"),
  (0x00700053, "Displayed Area Bottom Right Hand Corner"),
  (0x0070005A, "Displayed Area Selection Sequence"),
  (0x00700060, "Graphic Layer Sequence"),
  (0x00700062, "Graphic Layer Order"),
  (0x00700066, "Graphic Layer Recommended Display Grayscale Value"),
  (0x00700067, "Graphic Layer Recommended Display RGB Value"),
  (0x00700068, "Graphic Layer Description"),
  (0x00700080, "Content Label"),
  (0x00700081, "Content Description"),
  (0x00700082, "Presentation Creation Date"),
  (0x00700083, "Presentation Creation Time"),
  (0x00700084, "Content Creator's Name"),
  (0x00700086, "Content Creator's Identification Code Sequence"),
  (0x00700087, "Alternate Content Description Sequence"),
  (0x00700100, "Presentation Size Mode"),
  (0x00700101, "Presentation Pixel Spacing"),
  (0x00700102, "Presentation Pixel Aspect Ratio"),
  (0x00700103, "Presentation Pixel Magnification Ratio"),
  (0x00700207, "Graphic Group Label"),
  (0x00700208, "Graphic Group Description"),
  (0x00700209, "Compound Graphic Sequence"),
  (0x00700226, "Compound Graphic Instance ID"),
  (0x00700227, "Font Name"),
  (0x00700228, "Font Name Type"),
  (0x00700229, "CSS Font Name"),
  (0x00700230, "Rotation Angle"),
  (0x00700231, "Text Style Sequence"),
  (0x00700232, "Line Style Sequence"),
  (0x00700233, "Fill Style Sequence"),
  (0x00700234, "Graphic Group Sequence"),
  (0x00700241, "Text Color CIELab Value"),
  (0x00700242, "Horizontal Alignment"),
  (0x00700243, "Vertical Alignment"),
  (0x00700244, "Shadow Style"),
  (0x00700245, "Shadow Offset X"),
  (0x00700246, "Shadow Offset Y"),
  (0x00700247, "Shadow Color CIELab Value"),
  (0x00700248, "Underlined"),
  (0x00700249, "Bold"),
  (0x00700250, "Italic"),
  (0x00700251, "Pattern On Color CIELab Value"),
  (0x00700252, "Pattern Off Color CIELab Value"),
  (0x00700253, "Line Thickness"),
  (0x00700254, "Line Dashing Style"),
  (0x00700255, "Line Pattern"),
  (0x00700256, "Fill Pattern"),
  (0x00700257, "Fill Mode"),
  (0x00700258, "Shadow Opacity"),
  (0x00700261, "Gap Length"),
  (0x00700262, "Diameter of Visibility"),
  (0x00700273, "Rotation Point"),
  (0x00700274, "Tick Alignment"),
  (0x00700278, "Show Tick Label"),
  (0x00700279, "Tick Label Alignment"),
  (0x00700282, "Compound Graphic Units"),
  (0x00700284, "Pattern On Opacity"),
  (0x00700285, "Pattern Off Opacity"),
  (0x00700287, "Major Ticks Sequence"),
  (0x00700288, "Tick Position"),
  (0x00700289, "Tick Label"),
  (0x00700294, "Compound Graphic Type"),
  (0x00700295, "Graphic Group ID"),
  (0x00700306, "Shape Type"),
  (0x00700308, "Registration Sequence"),
  (0x00700309, "Matrix Registration Sequence"),
  (0x0070030A, "Matrix Sequence"),
  (0x0070030B, "Frame of Reference to Displayed Coordinate System Transformation Matrix"),
  (0x0070030C, "Frame of Reference Transformation Matrix Type"),
  (0x0070030D, "Registration Type Code Sequence"),
  (0x0070030F, "Fiducial Description"),
  (0x00700310, "Fiducial Identifier"),
  (0x00700311, "Fiducial Identifier Code Sequence"),
  (0x00700312, "Contour Uncertainty Radius"),
  (0x00700314, "Used Fiducials Sequence"),
  (0x00700315, "Used RT Structure Set ROI Sequence"),
  (0x00700318, "Graphic Coordinates Data Sequence"),
  (0x0070031A, "Fiducial UID"),
  (0x0070031B, "Referenced Fiducial UID"),
  (0x0070031C, "Fiducial Set Sequence"),
  (0x0070031E, "Fiducial Sequence"),
  (0x0070031F, "Fiducials Property Category Code Sequence"),
  (0x00700401, "Graphic Layer Recommended Display CIELab Value"),
  (0x00700402, "Blending Sequence"),
  (0x00700403, "Relative Opacity"),
  (0x00700404, "Referenced Spatial Registration Sequence"),
  (0x00700405, "Blending Position"),
  (0x00701101, "Presentation Display Collection UID"),
  (0x00701102, "Presentation Sequence Collection UID"),
  (0x00701103, "Presentation Sequence Position Index"),
  (0x00701104, "Rendered Image Reference Sequence"),
  (0x00701201, "Volumetric Presentation State Input Sequence"),
  (0x00701202, "Presentation Input Type"),
  (0x00701203, "Input Sequence Position Index"),
  (0x00701204, "Crop"),
  (0x00701205, "Cropping Specification Index"),
  (0x00701206, "Compositing Method"),
  (0x00701207, "Volumetric Presentation Input Number"),
  (0x00701208, "Image Volume Geometry"),
  (0x00701209, "Volumetric Presentation Input Set UID"),
  (0x0070120A, "Volumetric Presentation Input Set Sequence"),
  (0x0070120B, "Global Crop"),
  (0x0070120C, "Global Cropping Specification Index"),
  (0x0070120D, "Rendering Method"),
  (0x00701301, "Volume Cropping Sequence"),
  (0x00701302, "Volume Cropping Method"),
  (0x00701303, "Bounding Box Crop"),
  (0x00701304, "Oblique Cropping Plane Sequence"),
  (0x00701305, "Plane"),
  (0x00701306, "Plane Normal"),
  (0x00701309, "Cropping Specification Number"),
  (0x00701501, "Multi-Planar Reconstruction Style"),
  (0x00701502, "MPR Thickness Type"),
  (0x00701503, "MPR Slab Thickness"),
  (0x00701505, "MPR Top Left Hand Corner"),
  (0x00701507, "MPR View Width Direction"),
  (0x00701508, "MPR View Width"),
  (0x0070150C, "Number of Volumetric Curve Points"),
  (0x0070150D, "Volumetric Curve Points"),
  (0x00701511, "MPR View Height Direction"),
  (0x00701512, "MPR View Height"),
  (0x00701602, "Render Projection"),
  (0x00701603, "Viewpoint Position"),
  (0x00701604, "Viewpoint LookAt Point"),
  (0x00701605, "Viewpoint Up Direction"),
  (0x00701606, "Render Field of View"),
  (0x00701607, "Sampling Step Size"),
  (0x00701701, "Shading Style"),
  (0x00701702, "Ambient Reflection Intensity"),
  (0x00701703, "Light Direction"),
  (0x00701704, "Diffuse Reflection Intensity"),
  (0x00701705, "Specular Reflection Intensity"),
  (0x00701706, "Shininess"),
  (0x00701801, "Presentation State Classification Component Sequence"),
  (0x00701802, "Component Type"),
  (0x00701803, "Component Input Sequence"),
  (0x00701804, "Volumetric Presentation Input Index"),
  (0x00701805, "Presentation State Compositor Component Sequence"),
  (0x00701806, "Weighting Transfer Function Sequence"),
  (0x00701807, "Weighting Lookup Table Descriptor"),
  (0x00701808, "Weighting Lookup Table Data"),
  (0x00701901, "Volumetric Annotation Sequence"),
  (0x00701903, "Referenced Structured Context Sequence"),
  (0x00701904, "Referenced Content Item"),
  (0x00701905, "Volumetric Presentation Input Annotation Sequence"),
  (0x00701907, "Annotation Clipping"),
  (0x00701A01, "Presentation Animation Style"),
  (0x00701A03, "Recommended Animation Rate"),
  (0x00701A04, "Animation Curve Sequence"),
  (0x00701A05, "Animation Step Size"),
  (0x00701A06, "Swivel Range"),
  (0x00701A07, "Volumetric Curve Up Directions"),
  (0x00701A08, "Volume Stream Sequence"),
  (0x00701A09, "RGBA Transfer Function Description"),
  (0x00701B01, "Advanced Blending Sequence"),
  (0x00701B02, "Blending Input Number"),
  (0x00701B03, "Blending Display Input Sequence"),
  (0x00701B04, "Blending Display Sequence"),
  (0x00701B06, "Blending Mode"),
  (0x00701B07, "Time Series Blending"),
  (0x00701B08, "Geometry for Display"),
  (0x00701B11, "Threshold Sequence"),
  (0x00701B12, "Threshold Value Sequence"),
  (0x00701B13, "Threshold Type"),
  (0x00701B14, "Threshold Value"),
  (0x00720002, "Hanging Protocol Name"),
  (0x00720004, "Hanging Protocol Description"),
  (0x00720006, "Hanging Protocol Level"),
  (0x00720008, "Hanging Protocol Creator"),
  (0x0072000A, "Hanging Protocol Creation DateTime"),
  (0x0072000C, "Hanging Protocol Definition Sequence"),
  (0x0072000E, "Hanging Protocol User Identification Code Sequence"),
  (0x00720010, "Hanging Protocol User Group Name"),
  (0x00720012, "Source Hanging Protocol Sequence"),
  (0x00720014, "Number of Priors Referenced"),
  (0x00720020, "Image Sets Sequence"),
  (0x00720022, "Image Set Selector Sequence"),
  (0x00720024, "Image Set Selector Usage Flag"),
  (0x00720026, "Selector Attribute"),
  (0x00720028, "Selector Value Number"),
  (0x00720030, "Time Based Image Sets Sequence"),
  (0x00720032, "Image Set Number"),
  (0x00720034, "Image Set Selector Category"),
  (0x00720038, "Relative Time"),
  (0x0072003A, "Relative Time Units"),
  (0x0072003C, "Abstract Prior Value"),
  (0x0072003E, "Abstract Prior Code Sequence"),
  (0x00720040, "Image Set Label"),
  (0x00720050, "Selector Attribute VR"),
  (0x00720052, "Selector Sequence Pointer"),
  (0x00720054, "Selector Sequence Pointer Private Creator"),
  (0x00720056, "Selector Attribute Private Creator"),
  (0x0072005E, "Selector AE Value"),
  (0x0072005F, "Selector AS Value"),
  (0x00720060, "Selector AT Value"),
  (0x00720061, "Selector DA Value"),
  (0x00720062, "Selector CS Value"),
  (0x00720063, "Selector DT Value"),
  (0x00720064, "Selector IS Value"),
  (0x00720065, "Selector OB Value"),
  (0x00720066, "Selector LO Value"),
  (0x00720067, "Selector OF Value"),
  (0x00720068, "Selector LT Value"),
  (0x00720069, "Selector OW Value"),
  (0x0072006A, "Selector PN Value"),
  (0x0072006B, "Selector TM Value"),
  (0x0072006C, "Selector SH Value"),
  (0x0072006D, "Selector UN Value"),
  (0x0072006E, "Selector ST Value"),
  (0x0072006F, "Selector UC Value"),
  (0x00720070, "Selector UT Value"),
  (0x00720071, "Selector UR Value"),
  (0x00720072, "Selector DS Value"),
  (0x00720073, "Selector OD Value"),
  (0x00720074, "Selector FD Value"),
  (0x00720075, "Selector OL Value"),
  (0x00720076, "Selector FL Value"),
  (0x00720078, "Selector UL Value"),
  (0x0072007A, "Selector US Value"),
  (0x0072007C, "Selector SL Value"),
  (0x0072007E, "Selector SS Value"),
  (0x0072007F, "Selector UI Value"),
  (0x00720080, "Selector Code Sequence Value"),
  (0x00720081, "Selector OV Value"),
  (0x00720082, "Selector SV Value"),
  (0x00720083, "Selector UV Value"),
  (0x00720100, "Number of Screens"),
  (0x00720102, "Nominal Screen Definition Sequence"),
  (0x00720104, "Number of Vertical Pixels"),
  (0x00720106, "Number of Horizontal Pixels"),
  (0x00720108, "Display Environment Spatial Position"),
  (0x0072010A, "Screen Minimum Grayscale Bit Depth"),
  (0x0072010C, "Screen Minimum Color Bit Depth"),
  (0x0072010E, "Application Maximum Repaint Time"),
  (0x00720200, "Display Sets Sequence"),
  (0x00720202, "Display Set Number"),
  (0x00720203, "Display Set Label"),
  (0x00720204, "Display Set Presentation Group"),
  (0x00720206, "Display Set Presentation Group Description"),
  (0x00720208, "Partial Data Display Handling"),
  (0x00720210, "Synchronized Scrolling Sequence"),
  (0x00720212, "Display Set Scrolling Group"),
  (0x00720214, "Navigation Indicator Sequence"),
  (0x00720216, "Navigation Display Set"),
  (0x00720218, "Reference Display Sets"),
  (0x00720300, "Image Boxes Sequence"),
  (0x00720302, "Image Box Number"),
  (0x00720304, "Image Box Layout Type"),
  (0x00720306, "Image Box Tile Horizontal Dimension"),
  (0x00720308, "Image Box Tile Vertical Dimension"),
  (0x00720310, "Image Box Scroll Direction"),
  (0x00720312, "Image Box Small Scroll Type"),
  (0x00720314, "Image Box Small Scroll Amount"),
  (0x00720316, "Image Box Large Scroll Type"),
  (0x00720318, "Image Box Large Scroll Amount"),
  (0x00720320, "Image Box Overlap Priority"),
  (0x00720330, "Cine Relative to Real-Time"),
  (0x00720400, "Filter Operations Sequence"),
  (0x00720402, "Filter-by Category"),
  (0x00720404, "Filter-by Attribute Presence"),
  (0x00720406, "Filter-by Operator"),
  (0x00720420, "Structured Display Background CIELab Value"),
  (0x00720421, "Empty Image Box CIELab Value"),
  (0x00720422, "Structured Display Image Box Sequence"),
  (0x00720424, "Structured Display Text Box Sequence"),
  (0x00720427, "Referenced First Frame Sequence"),
  (0x00720430, "Image Box Synchronization Sequence"),
  (0x00720432, "Synchronized Image Box List"),
  (0x00720434, "Type of Synchronization"),
  (0x00720500, "Blending Operation Type"),
  (0x00720510, "Reformatting Operation Type"),
  (0x00720512, "Reformatting Thickness"),
  (0x00720514, "Reformatting Interval"),
  (0x00720516, "Reformatting Operation Initial View Direction"),
  (0x00720520, "3D Rendering Type"),
  (0x00720600, "Sorting Operations Sequence"),
  (0x00720602, "Sort-by Category"),
  (0x00720604, "Sorting Direction"),
  (0x00720700, "Display Set Patient Orientation"),
  (0x00720702, "VOI Type"),
  (0x00720704, "Pseudo-Color Type"),
  (0x00720705, "Pseudo-Color Palette Instance Reference Sequence"),
  (0x00720706, "Show Grayscale Inverted"),
  (0x00720710, "Show Image True Size Flag"),
  (0x00720712, "Show Graphic Annotation Flag"),
  (0x00720714, "Show Patient Demographics Flag"),
  (0x00720716, "Show Acquisition Techniques Flag"),
  (0x00720717, "Display Set Horizontal Justification"),
  (0x00720718, "Display Set Vertical Justification"),
  (0x00740120, "Continuation Start Meterset"),
  (0x00740121, "Continuation End Meterset"),
  (0x00741000, "Procedure Step State"),
  (0x00741002, "Procedure Step Progress Information Sequence"),
  (0x00741004, "Procedure Step Progress"),
  (0x00741006, "Procedure Step Progress Description"),
  (0x00741007, "Procedure Step Progress Parameters Sequence"),
  (0x00741008, "Procedure Step Communications URI Sequence"),
  (0x0074100A, "Contact URI"),
  (0x0074100C, "Contact Display Name"),
  (0x0074100E, "Procedure Step Discontinuation Reason Code Sequence"),
  (0x00741020, "Beam Task Sequence"),
  (0x00741022, "Beam Task Type"),
  (0x00741024, "Beam Order Index (Trial)"),
  (0x00741025, "Autosequence Flag"),
  (0x00741026, "Table Top Vertical Adjusted Position"),
  (0x00741027, "Table Top Longitudinal Adjusted Position"),
  (0x00741028, "Table Top Lateral Adjusted Position"),
  (0x0074102A, "Patient Support Adjusted Angle"),
  (0x0074102B, "Table Top Eccentric Adjusted Angle"),
  (0x0074102C, "Table Top Pitch Adjusted Angle"),
  (0x0074102D, "Table Top Roll Adjusted Angle"),
  (0x00741030, "Delivery Verification Image Sequence"),
  (0x00741032, "Verification Image Timing"),
  (0x00741034, "Double Exposure Flag"),
  (0x00741036, "Double Exposure Ordering"),
  (0x00741038, "Double Exposure Meterset (Trial)"),
  (0x0074103A, "Double Exposure Field Delta (Trial)"),
  (0x00741040, "Related Reference RT Image Sequence"),
  (0x00741042, "General Machine Verification Sequence"),
  (0x00741044, "Conventional Machine Verification Sequence"),
  (0x00741046, "Ion Machine Verification Sequence"),
  (0x00741048, "Failed Attributes Sequence"),
  (0x0074104A, "Overridden Attributes Sequence"),
  (0x0074104C, "Conventional Control Point Verification Sequence"),
  (0x0074104E, "Ion Control Point Verification Sequence"),
  (0x00741050, "Attribute Occurrence Sequence"),
  (0x00741052, "Attribute Occurrence Pointer"),
  (0x00741054, "Attribute Item Selector"),
  (0x00741056, "Attribute Occurrence Private Creator"),
  (0x00741057, "Selector Sequence Pointer Items"),
  (0x00741200, "Scheduled Procedure Step Priority"),
  (0x00741202, "Worklist Label"),
  (0x00741204, "Procedure Step Label"),
  (0x00741210, "Scheduled Processing Parameters Sequence"),
  (0x00741212, "Performed Processing Parameters Sequence"),
  (0x00741216, "Unified Procedure Step Performed Procedure Sequence"),
  (0x00741220, "Related Procedure Step Sequence"),
  (0x00741222, "Procedure Step Relationship Type"),
  (0x00741224, "Replaced Procedure Step Sequence"),
  (0x00741230, "Deletion Lock"),
  (0x00741234, "Receiving AE"),
  (0x00741236, "Requesting AE"),
  (0x00741238, "Reason for Cancellation"),
  (0x00741242, "SCP Status"),
  (0x00741244, "Subscription List Status"),
  (0x00741246, "Unified Procedure Step List Status"),
  (0x00741324, "Beam Order Index"),
  (0x00741338, "Double Exposure Meterset"),
  (0x0074133A, "Double Exposure Field Delta"),
  (0x00741401, "Brachy Task Sequence"),
  (0x00741402, "Continuation Start Total Reference Air Kerma"),
  (0x00741403, "Continuation End Total Reference Air Kerma"),
  (0x00741404, "Continuation Pulse Number"),
  (0x00741405, "Channel Delivery Order Sequence"),
  (0x00741406, "Referenced Channel Number"),
  (0x00741407, "Start Cumulative Time Weight"),
  (0x00741408, "End Cumulative Time Weight"),
  (0x00741409, "Omitted Channel Sequence"),
  (0x0074140A, "Reason for Channel Omission"),
  (0x0074140B, "Reason for Channel Omission Description"),
  (0x0074140C, "Channel Delivery Order Index"),
  (0x0074140D, "Channel Delivery Continuation Sequence"),
  (0x0074140E, "Omitted Application Setup Sequence"),
  (0x00760001, "Implant Assembly Template Name"),
  (0x00760003, "Implant Assembly Template Issuer"),
  (0x00760006, "Implant Assembly Template Version"),
  (0x00760008, "Replaced Implant Assembly Template Sequence"),
  (0x0076000A, "Implant Assembly Template Type"),
  (0x0076000C, "Original Implant Assembly Template Sequence"),
  (0x0076000E, "Derivation Implant Assembly Template Sequence"),
  (0x00760010, "Implant Assembly Template Target Anatomy Sequence"),
  (0x00760020, "Procedure Type Code Sequence"),
  (0x00760030, "Surgical Technique"),
  (0x00760032, "Component Types Sequence"),
  (0x00760034, "Component Type Code Sequence"),
  (0x00760036, "Exclusive Component Type"),
  (0x00760038, "Mandatory Component Type"),
  (0x00760040, "Component Sequence"),
  (0x00760055, "Component ID"),
  (0x00760060, "Component Assembly Sequence"),
  (0x00760070, "Component 1 Referenced ID"),
  (0x00760080, "Component 1 Referenced Mating Feature Set ID"),
  (0x00760090, "Component 1 Referenced Mating Feature ID"),
  (0x007600A0, "Component 2 Referenced ID"),
  (0x007600B0, "Component 2 Referenced Mating Feature Set ID"),
  (0x007600C0, "Component 2 Referenced Mating Feature ID"),
  (0x00780001, "Implant Template Group Name"),
  (0x00780010, "Implant Template Group Description"),
  (0x00780020, "Implant Template Group Issuer"),
  (0x00780024, "Implant Template Group Version"),
  (0x00780026, "Replaced Implant Template Group Sequence"),
  (0x00780028, "Implant Template Group Target Anatomy Sequence"),
  (0x0078002A, "Implant Template Group Members Sequence"),
  (0x0078002E, "Implant Template Group Member ID"),
  (0x00780050, "3D Implant Template Group Member Matching Point"),
  (0x00780060, "3D Implant Template Group Member Matching Axes"),
  (0x00780070, "Implant Template Group Member Matching 2D Coordinates Sequence"),
  (0x00780090, "2D Implant Template Group Member Matching Point"),
  (0x007800A0, "2D Implant Template Group Member Matching Axes"),
  (0x007800B0, "Implant Template Group Variation Dimension Sequence"),
  (0x007800B2, "Implant Template Group Variation Dimension Name"),
  (0x007800B4, "Implant Template Group Variation Dimension Rank Sequence"),
  (0x007800B6, "Referenced Implant Template Group Member ID"),
  (0x007800B8, "Implant Template Group Variation Dimension Rank"),
  (0x00800001, "Surface Scan Acquisition Type Code Sequence"),
  (0x00800002, "Surface Scan Mode Code Sequence"),
  (0x00800003, "Registration Method Code Sequence"),
  (0x00800004, "Shot Duration Time"),
  (0x00800005, "Shot Offset Time"),
  (0x00800006, "Surface Point Presentation Value Data"),
  (0x00800007, "Surface Point Color CIELab Value Data"),
  (0x00800008, "UV Mapping Sequence"),
  (0x00800009, "Texture Label"),
  (0x00800010, "U Value Data"),
  (0x00800011, "V Value Data"),
  (0x00800012, "Referenced Texture Sequence"),
  (0x00800013, "Referenced Surface Data Sequence"),
  (0x00820001, "Assessment Summary"),
  (0x00820003, "Assessment Summary Description"),
  (0x00820004, "Assessed SOP Instance Sequence"),
  (0x00820005, "Referenced Comparison SOP Instance Sequence"),
  (0x00820006, "Number of Assessment Observations"),
  (0x00820007, "Assessment Observations Sequence"),
  (0x00820008, "Observation Significance"),
  (0x0082000A, "Observation Description"),
  (0x0082000C, "Structured Constraint Observation Sequence"),
  (0x00820010, "Assessed Attribute Value Sequence"),
  (0x00820016, "Assessment Set ID"),
  (0x00820017, "Assessment Requester Sequence"),
  (0x00820018, "Selector Attribute Name"),
  (0x00820019, "Selector Attribute Keyword"),
  (0x00820021, "Assessment Type Code Sequence"),
  (0x00820022, "Observation Basis Code Sequence"),
  (0x00820023, "Assessment Label"),
  (0x00820032, "Constraint Type"),
  (0x00820033, "Specification Selection Guidance"),
  (0x00820034, "Constraint Value Sequence"),
  (0x00820035, "Recommended Default Value Sequence"),
  (0x00820036, "Constraint Violation Significance"),
  (0x00820037, "Constraint Violation Condition"),
  (0x00820038, "Modifiable Constraint Flag"),
  (0x00880130, "Storage Media File-set ID"),
  (0x00880140, "Storage Media File-set UID"),
  (0x00880200, "Icon Image Sequence"),
  (0x00880904, "Topic Title"),
  (0x00880906, "Topic Subject"),
  (0x00880910, "Topic Author"),
  (0x00880912, "Topic Keywords"),
  (0x01000410, "SOP Instance Status"),
  (0x01000420, "SOP Authorization DateTime"),
  (0x01000424, "SOP Authorization Comment"),
  (0x01000426, "Authorization Equipment Certification Number"),
  (0x04000005, "MAC ID Number"),
  (0x04000010, "MAC Calculation Transfer Syntax UID"),
  (0x04000015, "MAC Algorithm"),
  (0x04000020, "Data Elements Signed"),
  (0x04000100, "Digital Signature UID"),
  (0x04000105, "Digital Signature DateTime"),
  (0x04000110, "Certificate Type"),
  (0x04000115, "Certificate of Signer"),
  (0x04000120, "Signature"),
  (0x04000305, "Certified Timestamp Type"),
  (0x04000310, "Certified Timestamp"),
  (0x04000315, "Signature Purpose"),
  (0x04000401, "Digital Signature Purpose Code Sequence"),
  (0x04000402, "Referenced Digital Signature Sequence"),
  (0x04000403, "Referenced SOP Instance MAC Sequence"),
  (0x04000404, "MAC"),
  (0x04000500, "Encrypted Attributes Sequence"),
  (0x04000510, "Encrypted Content Transfer Syntax UID"),
  (0x04000520, "Encrypted Content"),
  (0x04000550, "Modified Attributes Sequence"),
  (0x04000551, "Nonconforming Modified Attributes Sequence"),
  (0x04000552, "Nonconforming Data Element Value"),
  (0x04000561, "Original Attributes Sequence"),
  (0x04000562, "Attribute Modification DateTime"),
  (0x04000563, "Modifying System"),
  (0x04000564, "Source of Previous Values"),
  (0x04000565, "Reason for the Attribute Modification"),
  (0x04000600, "Instance Origin Status"),
  (0x20000010, "Number of Copies"),
  (0x2000001E, "Printer Configuration Sequence"),
  (0x20000020, "Print Priority"),
  (0x20000030, "Medium Type"),
  (0x20000040, "Film Destination"),
  (0x20000050, "Film Session Label"),
  (0x20000060, "Memory Allocation"),
  (0x20000061, "Maximum Memory Allocation"),
  (0x20000062, "Color Image Printing Flag"),
  (0x20000063, "Collation Flag"),
  (0x20000065, "Annotation Flag"),
  (0x20000067, "Image Overlay Flag"),
  (0x20000069, "Presentation LUT Flag"),
  (0x2000006A, "Image Box Presentation LUT Flag"),
  (0x200000A0, "Memory Bit Depth"),
  (0x200000A1, "Printing Bit Depth"),
  (0x200000A2, "Media Installed Sequence"),
  (0x200000A4, "Other Media Available Sequence"),
  (0x200000A8, "Supported Image Display Formats Sequence"),
  (0x20000500, "Referenced Film Box Sequence"),
  (0x20000510, "Referenced Stored Print Sequence"),
  (0x20100010, "Image Display Format"),
  (0x20100030, "Annotation Display Format ID"),
  (0x20100040, "Film Orientation"),
  (0x20100050, "Film Size ID"),
  (0x20100052, "Printer Resolution ID"),
  (0x20100054, "Default Printer Resolution ID"),
  (0x20100060, "Magnification Type"),
  (0x20100080, "Smoothing Type"),
  (0x201000A6, "Default Magnification Type"),
  (0x201000A7, "Other Magnification Types Available"),
  (0x201000A8, "Default Smoothing Type"),
  (0x201000A9, "Other Smoothing Types Available"),
  (0x20100100, "Border Density"),
  (0x20100110, "Empty Image Density"),
  (0x20100120, "Min Density"),
  (0x20100130, "Max Density"),
  (0x20100140, "Trim"),
  (0x20100150, "Configuration Information"),
  (0x20100152, "Configuration Information Description"),
  (0x20100154, "Maximum Collated Films"),
  (0x2010015E, "Illumination"),
  (0x20100160, "Reflected Ambient Light"),
  (0x20100376, "Printer Pixel Spacing"),
  (0x20100500, "Referenced Film Session Sequence"),
  (0x20100510, "Referenced Image Box Sequence"),
  (0x20100520, "Referenced Basic Annotation Box Sequence"),
  (0x20200010, "Image Box Position"),
  (0x20200020, "Polarity"),
  (0x20200030, "Requested Image Size"),
  (0x20200040, "Requested Decimate/Crop Behavior"),
  (0x20200050, "Requested Resolution ID"),
  (0x202000A0, "Requested Image Size Flag"),
  (0x202000A2, "Decimate/Crop Result"),
  (0x20200110, "Basic Grayscale Image Sequence"),
  (0x20200111, "Basic Color Image Sequence"),
  (0x20200130, "Referenced Image Overlay Box Sequence"),
  (0x20200140, "Referenced VOI LUT Box Sequence"),
  (0x20300010, "Annotation Position"),
  (0x20300020, "Text String"),
  (0x20400010, "Referenced Overlay Plane Sequence"),
  (0x20400011, "Referenced Overlay Plane Groups"),
  (0x20400020, "Overlay Pixel Data Sequence"),
  (0x20400060, "Overlay Magnification Type"),
  (0x20400070, "Overlay Smoothing Type"),
  (0x20400072, "Overlay or Image Magnification"),
  (0x20400074, "Magnify to Number of Columns"),
  (0x20400080, "Overlay Foreground Density"),
  (0x20400082, "Overlay Background Density"),
  (0x20400090, "Overlay Mode"),
  (0x20400100, "Threshold Density"),
  (0x20400500, "Referenced Image Box Sequence (Retired)"),
  (0x20500010, "Presentation LUT Sequence"),
  (0x20500020, "Presentation LUT Shape"),
  (0x20500500, "Referenced Presentation LUT Sequence"),
  (0x21000010, "Print Job ID"),
  (0x21000020, "Execution Status"),
  (0x21000030, "Execution Status Info"),
  (0x21000040, "Creation Date"),
  (0x21000050, "Creation Time"),
  (0x21000070, "Originator"),
  (0x21000140, "Destination AE"),
  (0x21000160, "Owner ID"),
  (0x21000170, "Number of Films"),
  (0x21000500, "Referenced Print Job Sequence (Pull Stored Print)"),
  (0x21100010, "Printer Status"),
  (0x21100020, "Printer Status Info"),
  (0x21100030, "Printer Name"),
  (0x21100099, "Print Queue ID"),
  (0x21200010, "Queue Status"),
  (0x21200050, "Print Job Description Sequence"),
  (0x21200070, "Referenced Print Job Sequence"),
  (0x21300010, "Print Management Capabilities Sequence"),
  (0x21300015, "Printer Characteristics Sequence"),
  (0x21300030, "Film Box Content Sequence"),
  (0x21300040, "Image Box Content Sequence"),
  (0x21300050, "Annotation Content Sequence"),
  (0x21300060, "Image Overlay Box Content Sequence"),
  (0x21300080, "Presentation LUT Content Sequence"),
  (0x213000A0, "Proposed Study Sequence"),
  (0x213000C0, "Original Image Sequence"),
  (0x22000001, "Label Using Information Extracted From Instances"),
  (0x22000002, "Label Text"),
  (0x22000003, "Label Style Selection"),
  (0x22000004, "Media Disposition"),
  (0x22000005, "Barcode Value"),
  (0x22000006, "Barcode Symbology"),
  (0x22000007, "Allow Media Splitting"),
  (0x22000008, "Include Non-DICOM Objects"),
  (0x22000009, "Include Display Application"),
  (0x2200000A, "Preserve Composite Instances After Media Creation"),
  (0x2200000B, "Total Number of Pieces of Media Created"),
  (0x2200000C, "Requested Media Application Profile"),
  (0x2200000D, "Referenced Storage Media Sequence"),
  (0x2200000E, "Failure Attributes"),
  (0x2200000F, "Allow Lossy Compression"),
  (0x22000020, "Request Priority"),
  (0x30020002, "RT Image Label"),
  (0x30020003, "RT Image Name"),
  (0x30020004, "RT Image Description"),
  (0x3002000A, "Reported Values Origin"),
  (0x3002000C, "RT Image Plane"),
  (0x3002000D, "X-Ray Image Receptor Translation"),
  (0x3002000E, "X-Ray Image Receptor Angle"),
  (0x30020010, "RT Image Orientation"),
  (0x30020011, "Image Plane Pixel Spacing"),
  (0x30020012, "RT Image Position"),
  (0x30020020, "Radiation Machine Name"),
  (0x30020022, "Radiation Machine SAD"),
  (0x30020024, "Radiation Machine SSD"),
  (0x30020026, "RT Image SID"),
  (0x30020028, "Source to Reference Object Distance"),
  (0x30020029, "Fraction Number"),
  (0x30020030, "Exposure Sequence"),
  (0x30020032, "Meterset Exposure"),
  (0x30020034, "Diaphragm Position"),
  (0x30020040, "Fluence Map Sequence"),
  (0x30020041, "Fluence Data Source"),
  (0x30020042, "Fluence Data Scale"),
  (0x30020050, "Primary Fluence Mode Sequence"),
  (0x30020051, "Fluence Mode"),
  (0x30020052, "Fluence Mode ID"),
  (0x30020100, "Selected Frame Number"),
  (0x30020101, "Selected Frame Functional Group Sequence"),
  (0x30020102, "RT Image Frame General Content Sequence"),
  (0x30020103, "RT Image Frame Context Sequence"),
  (0x30020104, "RT Image Scope Sequence"),
  (0x30020105, "Beam Modifier Coordinates Presence Flag"),
  (0x30020106, "Start Cumulative Meterset"),
  (0x30020107, "Stop Cumulative Meterset"),
  (0x30020108, "RT Acquisition Patient Position Sequence"),
  (0x30020109, "RT Image Frame Imaging Device Position Sequence"),
  (0x3002010A, "RT Image Frame kV Radiation Acquisition Sequence"),
  (0x3002010B, "RT Image Frame MV Radiation Acquisition Sequence"),
  (0x3002010C, "RT Image Frame Radiation Acquisition Sequence"),
  (0x3002010D, "Imaging Source Position Sequence"),
  (0x3002010E, "Image Receptor Position Sequence"),
  (0x3002010F, "Device Position to Equipment Mapping Matrix"),
  (0x30020110, "Device Position Parameter Sequence"),
  (0x30040001, "DVH Type"),
  (0x30040002, "Dose Units"),
  (0x30040004, "Dose Type"),
  (0x30040005, "Spatial Transform of Dose"),
  (0x30040006, "Dose Comment"),
  (0x30040008, "Normalization Point"),
  (0x3004000A, "Dose Summation Type"),
  (0x3004000C, "Grid Frame Offset Vector"),
  (0x3004000E, "Dose Grid Scaling"),
  (0x30040010, "RT Dose ROI Sequence"),
  (0x30040012, "Dose Value"),
  (0x30040014, "Tissue Heterogeneity Correction"),
  (0x30040016, "Recommended Isodose Level Sequence"),
  (0x30040040, "DVH Normalization Point"),
  (0x30040042, "DVH Normalization Dose Value"),
  (0x30040050, "DVH Sequence"),
  (0x30040052, "DVH Dose Scaling"),
  (0x30040054, "DVH Volume Units"),
  (0x30040056, "DVH Number of Bins"),
  (0x30040058, "DVH Data"),
  (0x30040060, "DVH Referenced ROI Sequence"),
  (0x30040062, "DVH ROI Contribution Type"),
  (0x30040070, "DVH Minimum Dose"),
  (0x30040072, "DVH Maximum Dose"),
  (0x30040074, "DVH Mean Dose"),
  (0x30060002, "Structure Set Label"),
  (0x30060004, "Structure Set Name"),
  (0x30060006, "Structure Set Description"),
  (0x30060008, "Structure Set Date"),
  (0x30060009, "Structure Set Time"),
  (0x30060010, "Referenced Frame of Reference Sequence"),
  (0x30060012, "RT Referenced Study Sequence"),
  (0x30060014, "RT Referenced Series Sequence"),
  (0x30060016, "Contour Image Sequence"),
  (0x30060018, "Predecessor Structure Set Sequence"),
  (0x30060020, "Structure Set ROI Sequence"),
  (0x30060022, "ROI Number"),
  (0x30060024, "Referenced Frame of Reference UID"),
  (0x30060026, "ROI Name"),
  (0x30060028, "ROI Description"),
  (0x3006002A, "ROI Display Color"),
  (0x3006002C, "ROI Volume"),
  (0x3006002D, "ROI DateTime"),
  (0x3006002E, "ROI Observation DateTime"),
  (0x30060030, "RT Related ROI Sequence"),
  (0x30060033, "RT ROI Relationship"),
  (0x30060036, "ROI Generation Algorithm"),
  (0x30060037, "ROI Derivation Algorithm Identification Sequence"),
  (0x30060038, "ROI Generation Description"),
  (0x30060039, "ROI Contour Sequence"),
  (0x30060040, "Contour Sequence"),
  (0x30060042, "Contour Geometric Type"),
  (0x30060044, "Contour Slab Thickness"),
  (0x30060045, "Contour Offset Vector"),
  (0x30060046, "Number of Contour Points"),
  (0x30060048, "Contour Number"),
  (0x30060049, "Attached Contours"),
  (0x3006004A, "Source Pixel Planes Characteristics Sequence"),
  (0x3006004B, "Source Series Sequence"),
  (0x3006004C, "Source Series Information Sequence"),
  (0x3006004D, "ROI Creator Sequence"),
  (0x3006004E, "ROI Interpreter Sequence"),
  (0x3006004F, "ROI Observation Context Code Sequence"),
  (0x30060050, "Contour Data"),
  (0x30060080, "RT ROI Observations Sequence"),
  (0x30060082, "Observation Number"),
  (0x30060084, "Referenced ROI Number"),
  (0x30060085, "ROI Observation Label"),
  (0x30060086, "RT ROI Identification Code Sequence"),
  (0x30060088, "ROI Observation Description"),
  (0x300600A0, "Related RT ROI Observations Sequence"),
  (0x300600A4, "RT ROI Interpreted Type"),
  (0x300600A6, "ROI Interpreter"),
  (0x300600B0, "ROI Physical Properties Sequence"),
  (0x300600B2, "ROI Physical Property"),
  (0x300600B4, "ROI Physical Property Value"),
  (0x300600B6, "ROI Elemental Composition Sequence"),
  (0x300600B7, "ROI Elemental Composition Atomic Number"),
  (0x300600B8, "ROI Elemental Composition Atomic Mass Fraction"),
  (0x300600B9, "Additional RT ROI Identification Code Sequence"),
  (0x300600C0, "Frame of Reference Relationship Sequence"),
  (0x300600C2, "Related Frame of Reference UID"),
  (0x300600C4, "Frame of Reference Transformation Type"),
  (0x300600C6, "Frame of Reference Transformation Matrix"),
  (0x300600C8, "Frame of Reference Transformation Comment"),
  (0x300600C9, "Patient Location Coordinates Sequence"),
  (0x300600CA, "Patient Location Coordinates Code Sequence"),
  (0x300600CB, "Patient Support Position Sequence"),
  (0x30080010, "Measured Dose Reference Sequence"),
  (0x30080012, "Measured Dose Description"),
  (0x30080014, "Measured Dose Type"),
  (0x30080016, "Measured Dose Value"),
  (0x30080020, "Treatment Session Beam Sequence"),
  (0x30080021, "Treatment Session Ion Beam Sequence"),
  (0x30080022, "Current Fraction Number"),
  (0x30080024, "Treatment Control Point Date"),
  (0x30080025, "Treatment Control Point Time"),
  (0x3008002A, "Treatment Termination Status"),
  (0x3008002B, "Treatment Termination Code"),
  (0x3008002C, "Treatment Verification Status"),
  (0x30080030, "Referenced Treatment Record Sequence"),
  (0x30080032, "Specified Primary Meterset"),
  (0x30080033, "Specified Secondary Meterset"),
  (0x30080036, "Delivered Primary Meterset"),
  (0x30080037, "Delivered Secondary Meterset"),
  (0x3008003A, "Specified Treatment Time"),
  (0x3008003B, "Delivered Treatment Time"),
  (0x30080040, "Control Point Delivery Sequence"),
  (0x30080041, "Ion Control Point Delivery Sequence"),
  (0x30080042, "Specified Meterset"),
  (0x30080044, "Delivered Meterset"),
  (0x30080045, "Meterset Rate Set"),
  (0x30080046, "Meterset Rate Delivered"),
  (0x30080047, "Scan Spot Metersets Delivered"),
  (0x30080048, "Dose Rate Delivered"),
  (0x30080050, "Treatment Summary Calculated Dose Reference Sequence"),
  (0x30080052, "Cumulative Dose to Dose Reference"),
  (0x30080054, "First Treatment Date"),
  (0x30080056, "Most Recent Treatment Date"),
  (0x3008005A, "Number of Fractions Delivered"),
  (0x30080060, "Override Sequence"),
  (0x30080061, "Parameter Sequence Pointer"),
  (0x30080062, "Override Parameter Pointer"),
  (0x30080063, "Parameter Item Index"),
  (0x30080064, "Measured Dose Reference Number"),
  (0x30080065, "Parameter Pointer"),
  (0x30080066, "Override Reason"),
  (0x30080067, "Parameter Value Number"),
  (0x30080068, "Corrected Parameter Sequence"),
  (0x3008006A, "Correction Value"),
  (0x30080070, "Calculated Dose Reference Sequence"),
  (0x30080072, "Calculated Dose Reference Number"),
  (0x30080074, "Calculated Dose Reference Description"),
  (0x30080076, "Calculated Dose Reference Dose Value"),
  (0x30080078, "Start Meterset"),
  (0x3008007A, "End Meterset"),
  (0x30080080, "Referenced Measured Dose Reference Sequence"),
  (0x30080082, "Referenced Measured Dose Reference Number"),
  (0x30080090, "Referenced Calculated Dose Reference Sequence"),
  (0x30080092, "Referenced Calculated Dose Reference Number"),
  (0x300800A0, "Beam Limiting Device Leaf Pairs Sequence"),
  (0x300800A1, "Enhanced RT Beam Limiting Device Sequence"),
  (0x300800A2, "Enhanced RT Beam Limiting Opening Sequence"),
  (0x300800A3, "Enhanced RT Beam Limiting Device Definition Flag"),
  (0x300800A4, "Parallel RT Beam Delimiter Opening Extents"),
  (0x300800B0, "Recorded Wedge Sequence"),
  (0x300800C0, "Recorded Compensator Sequence"),
  (0x300800D0, "Recorded Block Sequence"),
  (0x300800D1, "Recorded Block Slab Sequence"),
  (0x300800E0, "Treatment Summary Measured Dose Reference Sequence"),
  (0x300800F0, "Recorded Snout Sequence"),
  (0x300800F2, "Recorded Range Shifter Sequence"),
  (0x300800F4, "Recorded Lateral Spreading Device Sequence"),
  (0x300800F6, "Recorded Range Modulator Sequence"),
  (0x30080100, "Recorded Source Sequence"),
  (0x30080105, "Source Serial Number"),
  (0x30080110, "Treatment Session Application Setup Sequence"),
  (0x30080116, "Application Setup Check"),
  (0x30080120, "Recorded Brachy Accessory Device Sequence"),
  (0x30080122, "Referenced Brachy Accessory Device Number"),
  (0x30080130, "Recorded Channel Sequence"),
  (0x30080132, "Specified Channel Total Time"),
  (0x30080134, "Delivered Channel Total Time"),
  (0x30080136, "Specified Number of Pulses"),
  (0x30080138, "Delivered Number of Pulses"),
  (0x3008013A, "Specified Pulse Repetition Interval"),
  (0x3008013C, "Delivered Pulse Repetition Interval"),
  (0x30080140, "Recorded Source Applicator Sequence"),
  (0x30080142, "Referenced Source Applicator Number"),
  (0x30080150, "Recorded Channel Shield Sequence"),
  (0x30080152, "Referenced Channel Shield Number"),
  (0x30080160, "Brachy Control Point Delivered Sequence"),
  (0x30080162, "Safe Position Exit Date"),
  (0x30080164, "Safe Position Exit Time"),
  (0x30080166, "Safe Position Return Date"),
  (0x30080168, "Safe Position Return Time"),
  (0x30080171, "Pulse Specific Brachy Control Point Delivered Sequence"),
  (0x30080172, "Pulse Number"),
  (0x30080173, "Brachy Pulse Control Point Delivered Sequence"),
  (0x30080200, "Current Treatment Status"),
  (0x30080202, "Treatment Status Comment"),
  (0x30080220, "Fraction Group Summary Sequence"),
  (0x30080223, "Referenced Fraction Number"),
  (0x30080224, "Fraction Group Type"),
  (0x30080230, "Beam Stopper Position"),
  (0x30080240, "Fraction Status Summary Sequence"),
  (0x30080250, "Treatment Date"),
  (0x30080251, "Treatment Time"),
  (0x300A0002, "RT Plan Label"),
  (0x300A0003, "RT Plan Name"),
  (0x300A0004, "RT Plan Description"),
  (0x300A0006, "RT Plan Date"),
  (0x300A0007, "RT Plan Time"),
  (0x300A0009, "Treatment Protocols"),
  (0x300A000A, "Plan Intent"),
  (0x300A000B, "Treatment Sites"),
  (0x300A000C, "RT Plan Geometry"),
  (0x300A000E, "Prescription Description"),
  (0x300A0010, "Dose Reference Sequence"),
  (0x300A0012, "Dose Reference Number"),
  (0x300A0013, "Dose Reference UID"),
  (0x300A0014, "Dose Reference Structure Type"),
  (0x300A0015, "Nominal Beam Energy Unit"),
  (0x300A0016, "Dose Reference Description"),
  (0x300A0018, "Dose Reference Point Coordinates"),
  (0x300A001A, "Nominal Prior Dose"),
  (0x300A0020, "Dose Reference Type"),
  (0x300A0021, "Constraint Weight"),
  (0x300A0022, "Delivery Warning Dose"),
  (0x300A0023, "Delivery Maximum Dose"),
  (0x300A0025, "Target Minimum Dose"),
  (0x300A0026, "Target Prescription Dose"),
  (0x300A0027, "Target Maximum Dose"),
  (0x300A0028, "Target Underdose Volume Fraction"),
  (0x300A002A, "Organ at Risk Full-volume Dose"),
  (0x300A002B, "Organ at Risk Limit Dose"),
  (0x300A002C, "Organ at Risk Maximum Dose"),
  (0x300A002D, "Organ at Risk Overdose Volume Fraction"),
  (0x300A0040, "Tolerance Table Sequence"),
  (0x300A0042, "Tolerance Table Number"),
  (0x300A0043, "Tolerance Table Label"),
  (0x300A0044, "Gantry Angle Tolerance"),
  (0x300A0046, "Beam Limiting Device Angle Tolerance"),
  (0x300A0048, "Beam Limiting Device Tolerance Sequence"),
  (0x300A004A, "Beam Limiting Device Position Tolerance"),
  (0x300A004B, "Snout Position Tolerance"),
  (0x300A004C, "Patient Support Angle Tolerance"),
  (0x300A004E, "Table Top Eccentric Angle Tolerance"),
  (0x300A004F, "Table Top Pitch Angle Tolerance"),
  (0x300A0050, "Table Top Roll Angle Tolerance"),
  (0x300A0051, "Table Top Vertical Position Tolerance"),
  (0x300A0052, "Table Top Longitudinal Position Tolerance"),
  (0x300A0053, "Table Top Lateral Position Tolerance"),
  (0x300A0055, "RT Plan Relationship"),
  (0x300A0070, "Fraction Group Sequence"),
  (0x300A0071, "Fraction Group Number"),
  (0x300A0072, "Fraction Group Description"),
  (0x300A0078, "Number of Fractions Planned"),
  (0x300A0079, "Number of Fraction Pattern Digits Per Day"),
  (0x300A007A, "Repeat Fraction Cycle Length"),
  (0x300A007B, "Fraction Pattern"),
  (0x300A0080, "Number of Beams"),
  (0x300A0082, "Beam Dose Specification Point"),
  (0x300A0083, "Referenced Dose Reference UID"),
  (0x300A0084, "Beam Dose"),
  (0x300A0086, "Beam Meterset"),
  (0x300A0088, "Beam Dose Point Depth"),
  (0x300A0089, "Beam Dose Point Equivalent Depth"),
  (0x300A008A, "Beam Dose Point SSD"),
  (0x300A008B, "Beam Dose Meaning"),
  (0x300A008C, "Beam Dose Verification Control Point Sequence"),
  (0x300A008D, "Average Beam Dose Point Depth"),
  (0x300A008E, "Average Beam Dose Point Equivalent Depth"),
  (0x300A008F, "Average Beam Dose Point SSD"),
  (0x300A0090, "Beam Dose Type"),
  (0x300A0091, "Alternate Beam Dose"),
  (0x300A0092, "Alternate Beam Dose Type"),
  (0x300A0093, "Depth Value Averaging Flag"),
  (0x300A0094, "Beam Dose Point Source to External Contour Distance"),
  (0x300A00A0, "Number of Brachy Application Setups"),
  (0x300A00A2, "Brachy Application Setup Dose Specification Point"),
  (0x300A00A4, "Brachy Application Setup Dose"),
  (0x300A00B0, "Beam Sequence"),
  (0x300A00B2, "Treatment Machine Name"),
  (0x300A00B3, "Primary Dosimeter Unit"),
  (0x300A00B4, "Source-Axis Distance"),
  (0x300A00B6, "Beam Limiting Device Sequence"),
  (0x300A00B8, "RT Beam Limiting Device Type"),
  (0x300A00BA, "Source to Beam Limiting Device Distance"),
  (0x300A00BB, "Isocenter to Beam Limiting Device Distance"),
  (0x300A00BC, "Number of Leaf/Jaw Pairs"),
  (0x300A00BE, "Leaf Position Boundaries"),
  (0x300A00C0, "Beam Number"),
  (0x300A00C2, "Beam Name"),
  (0x300A00C3, "Beam Description"),
  (0x300A00C4, "Beam Type"),
  (0x300A00C5, "Beam Delivery Duration Limit"),
  (0x300A00C6, "Radiation Type"),
  (0x300A00C7, "High-Dose Technique Type"),
  (0x300A00C8, "Reference Image Number"),
  (0x300A00CA, "Planned Verification Image Sequence"),
  (0x300A00CC, "Imaging Device-Specific Acquisition Parameters"),
  (0x300A00CE, "Treatment Delivery Type"),
  (0x300A00D0, "Number of Wedges"),
  (0x300A00D1, "Wedge Sequence"),
  (0x300A00D2, "Wedge Number"),
  (0x300A00D3, "Wedge Type"),
  (0x300A00D4, "Wedge ID"),
  (0x300A00D5, "Wedge Angle"),
  (0x300A00D6, "Wedge Factor"),
  (0x300A00D7, "Total Wedge Tray Water-Equivalent Thickness"),
  (0x300A00D8, "Wedge Orientation"),
  (0x300A00D9, "Isocenter to Wedge Tray Distance"),
  (0x300A00DA, "Source to Wedge Tray Distance"),
  (0x300A00DB, "Wedge Thin Edge Position"),
  (0x300A00DC, "Bolus ID"),
  (0x300A00DD, "Bolus Description"),
  (0x300A00DE, "Effective Wedge Angle"),
  (0x300A00E0, "Number of Compensators"),
  (0x300A00E1, "Material ID"),
  (0x300A00E2, "Total Compensator Tray Factor"),
  (0x300A00E3, "Compensator Sequence"),
  (0x300A00E4, "Compensator Number"),
  (0x300A00E5, "Compensator ID"),
  (0x300A00E6, "Source to Compensator Tray Distance"),
  (0x300A00E7, "Compensator Rows"),
  (0x300A00E8, "Compensator Columns"),
  (0x300A00E9, "Compensator Pixel Spacing"),
  (0x300A00EA, "Compensator Position"),
  (0x300A00EB, "Compensator Transmission Data"),
  (0x300A00EC, "Compensator Thickness Data"),
  (0x300A00ED, "Number of Boli"),
  (0x300A00EE, "Compensator Type"),
  (0x300A00EF, "Compensator Tray ID"),
  (0x300A00F0, "Number of Blocks"),
  (0x300A00F2, "Total Block Tray Factor"),
  (0x300A00F3, "Total Block Tray Water-Equivalent Thickness"),
  (0x300A00F4, "Block Sequence"),
  (0x300A00F5, "Block Tray ID"),
  (0x300A00F6, "Source to Block Tray Distance"),
  (0x300A00F7, "Isocenter to Block Tray Distance"),
  (0x300A00F8, "Block Type"),
  (0x300A00F9, "Accessory Code"),
  (0x300A00FA, "Block Divergence"),
  (0x300A00FB, "Block Mounting Position"),
  (0x300A00FC, "Block Number"),
  (0x300A00FE, "Block Name"),
  (0x300A0100, "Block Thickness"),
  (0x300A0102, "Block Transmission"),
  (0x300A0104, "Block Number of Points"),
  (0x300A0106, "Block Data"),
  (0x300A0107, "Applicator Sequence"),
  (0x300A0108, "Applicator ID"),
  (0x300A0109, "Applicator Type"),
  (0x300A010A, "Applicator Description"),
  (0x300A010C, "Cumulative Dose Reference Coefficient"),
  (0x300A010E, "Final Cumulative Meterset Weight"),
  (0x300A0110, "Number of Control Points"),
  (0x300A0111, "Control Point Sequence"),
  (0x300A0112, "Control Point Index"),
  (0x300A0114, "Nominal Beam Energy"),
  (0x300A0115, "Dose Rate Set"),
  (0x300A0116, "Wedge Position Sequence"),
  (0x300A0118, "Wedge Position"),
  (0x300A011A, "Beam Limiting Device Position Sequence"),
  (0x300A011C, "Leaf/Jaw Positions"),
  (0x300A011E, "Gantry Angle"),
  (0x300A011F, "Gantry Rotation Direction"),
  (0x300A0120, "Beam Limiting Device Angle"),
  (0x300A0121, "Beam Limiting Device Rotation Direction"),
  (0x300A0122, "Patient Support Angle"),
  (0x300A0123, "Patient Support Rotation Direction"),
  (0x300A0124, "Table Top Eccentric Axis Distance"),
  (0x300A0125, "Table Top Eccentric Angle"),
  (0x300A0126, "Table Top Eccentric Rotation Direction"),
  (0x300A0128, "Table Top Vertical Position"),
  (0x300A0129, "Table Top Longitudinal Position"),
  (0x300A012A, "Table Top Lateral Position"),
  (0x300A012C, "Isocenter Position"),
  (0x300A012E, "Surface Entry Point"),
  (0x300A0130, "Source to Surface Distance"),
  (0x300A0131, "Source to External Contour Distance"),
  (0x300A0132, "External Contour Entry Point"),
  (0x300A0134, "Cumulative Meterset Weight"),
  (0x300A0140, "Table Top Pitch Angle"),
  (0x300A0142, "Table Top Pitch Rotation Direction"),
  (0x300A0144, "Table Top Roll Angle"),
  (0x300A0146, "Table Top Roll Rotation Direction"),
  (0x300A0148, "Head Fixation Angle"),
  (0x300A014A, "Gantry Pitch Angle"),
  (0x300A014C, "Gantry Pitch Rotation Direction"),
  (0x300A014E, "Gantry Pitch Angle Tolerance"),
  (0x300A0150, "Fixation Eye"),
  (0x300A0151, "Chair Head Frame Position"),
  (0x300A0152, "Head Fixation Angle Tolerance"),
  (0x300A0153, "Chair Head Frame Position Tolerance"),
  (0x300A0154, "Fixation Light Azimuthal Angle Tolerance"),
  (0x300A0155, "Fixation Light Polar Angle Tolerance"),
  (0x300A0180, "Patient Setup Sequence"),
  (0x300A0182, "Patient Setup Number"),
  (0x300A0183, "Patient Setup Label"),
  (0x300A0184, "Patient Additional Position"),
  (0x300A0190, "Fixation Device Sequence"),
  (0x300A0192, "Fixation Device Type"),
  (0x300A0194, "Fixation Device Label"),
  (0x300A0196, "Fixation Device Description"),
  (0x300A0198, "Fixation Device Position"),
  (0x300A0199, "Fixation Device Pitch Angle"),
  (0x300A019A, "Fixation Device Roll Angle"),
  (0x300A01A0, "Shielding Device Sequence"),
  (0x300A01A2, "Shielding Device Type"),
  (0x300A01A4, "Shielding Device Label"),
  (0x300A01A6, "Shielding Device Description"),
  (0x300A01A8, "Shielding Device Position"),
  (0x300A01B0, "Setup Technique"),
  (0x300A01B2, "Setup Technique Description"),
  (0x300A01B4, "Setup Device Sequence"),
  (0x300A01B6, "Setup Device Type"),
  (0x300A01B8, "Setup Device Label"),
  (0x300A01BA, "Setup Device Description"),
  (0x300A01BC, "Setup Device Parameter"),
  (0x300A01D0, "Setup Reference Description"),
  (0x300A01D2, "Table Top Vertical Setup Displacement"),
  (0x300A01D4, "Table Top Longitudinal Setup Displacement"),
  (0x300A01D6, "Table Top Lateral Setup Displacement"),
  (0x300A0200, "Brachy Treatment Technique"),
  (0x300A0202, "Brachy Treatment Type"),
  (0x300A0206, "Treatment Machine Sequence"),
  (0x300A0210, "Source Sequence"),
  (0x300A0212, "Source Number"),
  (0x300A0214, "Source Type"),
  (0x300A0216, "Source Manufacturer"),
  (0x300A0218, "Active Source Diameter"),
  (0x300A021A, "Active Source Length"),
  (0x300A021B, "Source Model ID"),
  (0x300A021C, "Source Description"),
  (0x300A0222, "Source Encapsulation Nominal Thickness"),
  (0x300A0224, "Source Encapsulation Nominal Transmission"),
  (0x300A0226, "Source Isotope Name"),
  (0x300A0228, "Source Isotope Half Life"),
  (0x300A0229, "Source Strength Units"),
  (0x300A022A, "Reference Air Kerma Rate"),
  (0x300A022B, "Source Strength"),
  (0x300A022C, "Source Strength Reference Date"),
  (0x300A022E, "Source Strength Reference Time"),
  (0x300A0230, "Application Setup Sequence"),
  (0x300A0232, "Application Setup Type"),
  (0x300A0234, "Application Setup Number"),
  (0x300A0236, "Application Setup Name"),
  (0x300A0238, "Application Setup Manufacturer"),
  (0x300A0240, "Template Number"),
  (0x300A0242, "Template Type"),
  (0x300A0244, "Template Name"),
  (0x300A0250, "Total Reference Air Kerma"),
  (0x300A0260, "Brachy Accessory Device Sequence"),
  (0x300A0262, "Brachy Accessory Device Number"),
  (0x300A0263, "Brachy Accessory Device ID"),
  (0x300A0264, "Brachy Accessory Device Type"),
  (0x300A0266, "Brachy Accessory Device Name"),
  (0x300A026A, "Brachy Accessory Device Nominal Thickness"),
  (0x300A026C, "Brachy Accessory Device Nominal Transmission"),
  (0x300A0271, "Channel Effective Length"),
  (0x300A0272, "Channel Inner Length"),
  (0x300A0273, "Afterloader Channel ID"),
  (0x300A0274, "Source Applicator Tip Length"),
  (0x300A0280, "Channel Sequence"),
  (0x300A0282, "Channel Number"),
  (0x300A0284, "Channel Length"),
  (0x300A0286, "Channel Total Time"),
  (0x300A0288, "Source Movement Type"),
  (0x300A028A, "Number of Pulses"),
  (0x300A028C, "Pulse Repetition Interval"),
  (0x300A0290, "Source Applicator Number"),
  (0x300A0291, "Source Applicator ID"),
  (0x300A0292, "Source Applicator Type"),
  (0x300A0294, "Source Applicator Name"),
  (0x300A0296, "Source Applicator Length"),
  (0x300A0298, "Source Applicator Manufacturer"),
  (0x300A029C, "Source Applicator Wall Nominal Thickness"),
  (0x300A029E, "Source Applicator Wall Nominal Transmission"),
  (0x300A02A0, "Source Applicator Step Size"),
  (0x300A02A1, "Applicator Shape Referenced ROI Number"),
  (0x300A02A2, "Transfer Tube Number"),
  (0x300A02A4, "Transfer Tube Length"),
  (0x300A02B0, "Channel Shield Sequence"),
  (0x300A02B2, "Channel Shield Number"),
  (0x300A02B3, "Channel Shield ID"),
  (0x300A02B4, "Channel Shield Name"),
  (0x300A02B8, "Channel Shield Nominal Thickness"),
  (0x300A02BA, "Channel Shield Nominal Transmission"),
  (0x300A02C8, "Final Cumulative Time Weight"),
  (0x300A02D0, "Brachy Control Point Sequence"),
  (0x300A02D2, "Control Point Relative Position"),
  (0x300A02D4, "Control Point 3D Position"),
  (0x300A02D6, "Cumulative Time Weight"),
  (0x300A02E0, "Compensator Divergence"),
  (0x300A02E1, "Compensator Mounting Position"),
  (0x300A02E2, "Source to Compensator Distance"),
  (0x300A02E3, "Total Compensator Tray Water-Equivalent Thickness"),
  (0x300A02E4, "Isocenter to Compensator Tray Distance"),
  (0x300A02E5, "Compensator Column Offset"),
  (0x300A02E6, "Isocenter to Compensator Distances"),
  (0x300A02E7, "Compensator Relative Stopping Power Ratio"),
  (0x300A02E8, "Compensator Milling Tool Diameter"),
  (0x300A02EA, "Ion Range Compensator Sequence"),
  (0x300A02EB, "Compensator Description"),
  (0x300A0302, "Radiation Mass Number"),
  (0x300A0304, "Radiation Atomic Number"),
  (0x300A0306, "Radiation Charge State"),
  (0x300A0308, "Scan Mode"),
  (0x300A0309, "Modulated Scan Mode Type"),
  (0x300A030A, "Virtual Source-Axis Distances"),
  (0x300A030C, "Snout Sequence"),
  (0x300A030D, "Snout Position"),
  (0x300A030F, "Snout ID"),
  (0x300A0312, "Number of Range Shifters"),
  (0x300A0314, "Range Shifter Sequence"),
  (0x300A0316, "Range Shifter Number"),
  (0x300A0318, "Range Shifter ID"),
  (0x300A0320, "Range Shifter Type"),
  (0x300A0322, "Range Shifter Description"),
  (0x300A0330, "Number of Lateral Spreading Devices"),
  (0x300A0332, "Lateral Spreading Device Sequence"),
  (0x300A0334, "Lateral Spreading Device Number"),
  (0x300A0336, "Lateral Spreading Device ID"),
  (0x300A0338, "Lateral Spreading Device Type"),
  (0x300A033A, "Lateral Spreading Device Description"),
  (0x300A033C, "Lateral Spreading Device Water Equivalent Thickness"),
  (0x300A0340, "Number of Range Modulators"),
  (0x300A0342, "Range Modulator Sequence"),
  (0x300A0344, "Range Modulator Number"),
  (0x300A0346, "Range Modulator ID"),
  (0x300A0348, "Range Modulator Type"),
  (0x300A034A, "Range Modulator Description"),
  (0x300A034C, "Beam Current Modulation ID"),
  (0x300A0350, "Patient Support Type"),
  (0x300A0352, "Patient Support ID"),
  (0x300A0354, "Patient Support Accessory Code"),
  (0x300A0355, "Tray Accessory Code"),
  (0x300A0356, "Fixation Light Azimuthal Angle"),
  (0x300A0358, "Fixation Light Polar Angle"),
  (0x300A035A, "Meterset Rate"),
  (0x300A0360, "Range Shifter Settings Sequence"),
  (0x300A0362, "Range Shifter Setting"),
  (0x300A0364, "Isocenter to Range Shifter Distance"),
  (0x300A0366, "Range Shifter Water Equivalent Thickness"),
  (0x300A0370, "Lateral Spreading Device Settings Sequence"),
  (0x300A0372, "Lateral Spreading Device Setting"),
  (0x300A0374, "Isocenter to Lateral Spreading Device Distance"),
  (0x300A0380, "Range Modulator Settings Sequence"),
  (0x300A0382, "Range Modulator Gating Start Value"),
  (0x300A0384, "Range Modulator Gating Stop Value"),
  (0x300A0386, "Range Modulator Gating Start Water Equivalent Thickness"),
  (0x300A0388, "Range Modulator Gating Stop Water Equivalent Thickness"),
  (0x300A038A, "Isocenter to Range Modulator Distance"),
  (0x300A038F, "Scan Spot Time Offset"),
  (0x300A0390, "Scan Spot Tune ID"),
  (0x300A0391, "Scan Spot Prescribed Indices"),
  (0x300A0392, "Number of Scan Spot Positions"),
  (0x300A0393, "Scan Spot Reordered"),
  (0x300A0394, "Scan Spot Position Map"),
  (0x300A0395, "Scan Spot Reordering Allowed"),
  (0x300A0396, "Scan Spot Meterset Weights"),
  (0x300A0398, "Scanning Spot Size"),
  (0x300A0399, "Scan Spot Sizes Delivered"),
  (0x300A039A, "Number of Paintings"),
  (0x300A03A0, "Ion Tolerance Table Sequence"),
  (0x300A03A2, "Ion Beam Sequence"),
  (0x300A03A4, "Ion Beam Limiting Device Sequence"),
  (0x300A03A6, "Ion Block Sequence"),
  (0x300A03A8, "Ion Control Point Sequence"),
  (0x300A03AA, "Ion Wedge Sequence"),
  (0x300A03AC, "Ion Wedge Position Sequence"),
  (0x300A0401, "Referenced Setup Image Sequence"),
  (0x300A0402, "Setup Image Comment"),
  (0x300A0410, "Motion Synchronization Sequence"),
  (0x300A0412, "Control Point Orientation"),
  (0x300A0420, "General Accessory Sequence"),
  (0x300A0421, "General Accessory ID"),
  (0x300A0422, "General Accessory Description"),
  (0x300A0423, "General Accessory Type"),
  (0x300A0424, "General Accessory Number"),
  (0x300A0425, "Source to General Accessory Distance"),
  (0x300A0426, "Isocenter to General Accessory Distance"),
  (0x300A0431, "Applicator Geometry Sequence"),
  (0x300A0432, "Applicator Aperture Shape"),
  (0x300A0433, "Applicator Opening"),
  (0x300A0434, "Applicator Opening X"),
  (0x300A0435, "Applicator Opening Y"),
  (0x300A0436, "Source to Applicator Mounting Position Distance"),
  (0x300A0440, "Number of Block Slab Items"),
  (0x300A0441, "Block Slab Sequence"),
  (0x300A0442, "Block Slab Thickness"),
  (0x300A0443, "Block Slab Number"),
  (0x300A0450, "Device Motion Control Sequence"),
  (0x300A0451, "Device Motion Execution Mode"),
  (0x300A0452, "Device Motion Observation Mode"),
  (0x300A0453, "Device Motion Parameter Code Sequence"),
  (0x300A0501, "Distal Depth Fraction"),
  (0x300A0502, "Distal Depth"),
  (0x300A0503, "Nominal Range Modulation Fractions"),
  (0x300A0504, "Nominal Range Modulated Region Depths"),
  (0x300A0505, "Depth Dose Parameters Sequence"),
  (0x300A0506, "Delivered Depth Dose Parameters Sequence"),
  (0x300A0507, "Delivered Distal Depth Fraction"),
  (0x300A0508, "Delivered Distal Depth"),
  (0x300A0509, "Delivered Nominal Range Modulation Fractions"),
  (0x300A0510, "Delivered Nominal Range Modulated Region Depths"),
  (0x300A0511, "Delivered Reference Dose Definition"),
  (0x300A0512, "Reference Dose Definition"),
  (0x300A0600, "RT Control Point Index"),
  (0x300A0601, "Radiation Generation Mode Index"),
  (0x300A0602, "Referenced Defined Device Index"),
  (0x300A0603, "Radiation Dose Identification Index"),
  (0x300A0604, "Number of RT Control Points"),
  (0x300A0605, "Referenced Radiation Generation Mode Index"),
  (0x300A0606, "Treatment Position Index"),
  (0x300A0607, "Referenced Device Index"),
  (0x300A0608, "Treatment Position Group Label"),
  (0x300A0609, "Treatment Position Group UID"),
  (0x300A060A, "Treatment Position Group Sequence"),
  (0x300A060B, "Referenced Treatment Position Index"),
  (0x300A060C, "Referenced Radiation Dose Identification Index"),
  (0x300A060D, "RT Accessory Holder Water-Equivalent Thickness"),
  (0x300A060E, "Referenced RT Accessory Holder Device Index"),
  (0x300A060F, "RT Accessory Holder Slot Existence Flag"),
  (0x300A0610, "RT Accessory Holder Slot Sequence"),
  (0x300A0611, "RT Accessory Holder Slot ID"),
  (0x300A0612, "RT Accessory Holder Slot Distance"),
  (0x300A0613, "RT Accessory Slot Distance"),
  (0x300A0614, "RT Accessory Holder Definition Sequence"),
  (0x300A0615, "RT Accessory Device Slot ID"),
  (0x300A0616, "RT Radiation Sequence"),
  (0x300A0617, "Radiation Dose Sequence"),
  (0x300A0618, "Radiation Dose Identification Sequence"),
  (0x300A0619, "Radiation Dose Identification Label"),
  (0x300A061A, "Reference Dose Type"),
  (0x300A061B, "Primary Dose Value Indicator"),
  (0x300A061C, "Dose Values Sequence"),
  (0x300A061D, "Dose Value Purpose"),
  (0x300A061E, "Reference Dose Point Coordinates"),
  (0x300A061F, "Radiation Dose Values Parameters Sequence"),
  (0x300A0620, "Meterset to Dose Mapping Sequence"),
  (0x300A0621, "Expected In-Vivo Measurement Values Sequence"),
  (0x300A0622, "Expected In-Vivo Measurement Value Index"),
  (0x300A0623, "Radiation Dose In-Vivo Measurement Label"),
  (0x300A0624, "Radiation Dose Central Axis Displacement"),
  (0x300A0625, "Radiation Dose Value"),
  (0x300A0626, "Radiation Dose Source to Skin Distance"),
  (0x300A0627, "Radiation Dose Measurement Point Coordinates"),
  (0x300A0628, "Radiation Dose Source to External Contour Distance"),
  (0x300A0629, "RT Tolerance Set Sequence"),
  (0x300A062A, "RT Tolerance Set Label"),
  (0x300A062B, "Attribute Tolerance Values Sequence"),
  (0x300A062C, "Tolerance Value"),
  (0x300A062D, "Patient Support Position Tolerance Sequence"),
  (0x300A062E, "Treatment Time Limit"),
  (0x300A062F, "C-Arm Photon-Electron Control Point Sequence"),
  (0x300A0630, "Referenced RT Radiation Record Sequence"),
  (0x300A0631, "Referenced RT Radiation Set Storage Sequence"),
  (0x300A0632, "Referenced RT Radiation Storage Sequence"),
  (0x300A0633, "Referenced RT Radiation Instance Sequence"),
  (0x300A0634, "Referenced RT Radiation Record Instance Sequence"),
  (0x300A0635, "Referenced RT Radiation Storage Instance Sequence"),
  (0x300A0636, "Referenced RT Radiation Set Storage Instance Sequence"),
  (0x300A0637, "Referenced RT Radiation Set Record Instance Sequence"),
  (0x300A0638, "Total Number of Fractions"),
  (0x300A0639, "Total Number of Fractions Delivered"),
  (0x300A063A, "Fraction-Specific Meterset Sequence"),
  (0x300A063B, "Fraction-Specific Meterset Data Sequence"),
  (0x300A063C, "Fraction Number"),
  (0x300A063D, "Cumulative Meterset"),
  (0x300A063E, "Fraction-Specific Meterset Data Sequence"),
  (0x300A0640, "Radiation Delivery Device Sequence"),
  (0x300A0641, "Radiation Delivery Device Index"),
  (0x300A0642, "Device Class Code Sequence"),
  (0x300A0643, "Device Class Specific Parameters Sequence"),
  (0x300A0644, "Beam Modifier Definition Sequence"),
  (0x300A0645, "Beam Modifier Identification Sequence"),
  (0x300A0646, "Beam Modifier Number"),
  (0x300A0647, "Beam Modifier Label"),
  (0x300A0648, "Beam Modifier ID"),
  (0x300A0649, "Beam Modifier Description"),
  (0x300A064A, "Beam Modifier Type Code Sequence"),
  (0x300A064B, "Beam Modifier Type Code Sequence Manufacturer Specific"),
  (0x300A064C, "Radiation Generation Mode Sequence"),
  (0x300A064D, "Radiation Generation Mode Label"),
  (0x300A064E, "Radiation Generation Mode Description"),
  (0x300A064F, "Radiation Generation Mode Machine Code Sequence"),
  (0x300A0650, "Radiation Type Code Sequence"),
  (0x300A0651, "Nominal Energy"),
  (0x300A0652, "Minimum Nominal Energy"),
  (0x300A0653, "Maximum Nominal Energy"),
  (0x300A0654, "Radiation Fluence Modifier Code Sequence"),
  (0x300A0655, "Energy Unit Code Sequence"),
  (0x300C0002, "Referenced RT Plan Sequence"),
  (0x300C0004, "Referenced Beam Sequence"),
  (0x300C0006, "Referenced Beam Number"),
  (0x300C0007, "Referenced Reference Image Number"),
  (0x300C0008, "Start Cumulative Meterset Weight"),
  (0x300C0009, "End Cumulative Meterset Weight"),
  (0x300C000A, "Referenced Brachy Application Setup Sequence"),
  (0x300C000C, "Referenced Brachy Application Setup Number"),
  (0x300C000E, "Referenced Source Number"),
  (0x300C0020, "Referenced Fraction Group Sequence"),
  (0x300C0022, "Referenced Fraction Group Number"),
  (0x300C0040, "Referenced Verification Image Sequence"),
  (0x300C0042, "Referenced Reference Image Sequence"),
  (0x300C0050, "Referenced Dose Reference Sequence"),
  (0x300C0051, "Referenced Dose Reference Number"),
  (0x300C0055, "Brachy Referenced Dose Reference Sequence"),
  (0x300C0060, "Referenced Structure Set Sequence"),
  (0x300C006A, "Referenced Patient Setup Number"),
  (0x300C0080, "Referenced Dose Sequence"),
  (0x300C00A0, "Referenced Tolerance Table Number"),
  (0x300C00B0, "Referenced Bolus Sequence"),
  (0x300C00C0, "Referenced Wedge Number"),
  (0x300C00D0, "Referenced Compensator Number"),
  (0x300C00E0, "Referenced Block Number"),
  (0x300C00F0, "Referenced Control Point Index"),
  (0x300C00F2, "Referenced Control Point Sequence"),
  (0x300C00F4, "Referenced Start Control Point Index"),
  (0x300C00F6, "Referenced Stop Control Point Index"),
  (0x300C0100, "Referenced Range Shifter Number"),
  (0x300C0102, "Referenced Lateral Spreading Device Number"),
  (0x300C0104, "Referenced Range Modulator Number"),
  (0x300C0111, "Omitted Beam Task Sequence"),
  (0x300C0112, "Reason for Omission"),
  (0x300C0113, "Reason for Omission Description"),
  (0x300C0114, "Prescription Overview Sequence"),
  (0x300C0115, "Total Prescription Dose"),
  (0x300C0116, "Plan Overview Sequence"),
  (0x300C0117, "Plan Overview Index"),
  (0x300C0118, "Referenced Plan Overview Index"),
  (0x300C0119, "Number of Fractions Included"),
  (0x300E0002, "Approval Status"),
  (0x300E0004, "Review Date"),
  (0x300E0005, "Review Time"),
  (0x300E0008, "Reviewer Name"),
  (0x30100001, "Radiobiological Dose Effect Sequence"),
  (0x30100002, "Radiobiological Dose Effect Flag"),
  (0x30100003, "Effective Dose Calculation Method Category Code Sequence"),
  (0x30100004, "Effective Dose Calculation Method Code Sequence"),
  (0x30100005, "Effective Dose Calculation Method Description"),
  (0x30100006, "Conceptual Volume UID"),
  (0x30100007, "Originating SOP Instance Reference Sequence"),
  (0x30100008, "Conceptual Volume Constituent Sequence"),
  (0x30100009, "Equivalent Conceptual Volume Instance Reference Sequence"),
  (0x3010000A, "Equivalent Conceptual Volumes Sequence"),
  (0x3010000B, "Referenced Conceptual Volume UID"),
  (0x3010000C, "Conceptual Volume Combination Expression"),
  (0x3010000D, "Conceptual Volume Constituent Index"),
  (0x3010000E, "Conceptual Volume Combination Flag"),
  (0x3010000F, "Conceptual Volume Combination Description"),
  (0x30100010, "Conceptual Volume Segmentation Defined Flag"),
  (0x30100011, "Conceptual Volume Segmentation Reference Sequence"),
  (0x30100012, "Conceptual Volume Constituent Segmentation Reference Sequence"),
  (0x30100013, "Constituent Conceptual Volume UID"),
  (0x30100014, "Derivation Conceptual Volume Sequence"),
  (0x30100015, "Source Conceptual Volume UID"),
  (0x30100016, "Conceptual Volume Derivation Algorithm Sequence"),
  (0x30100017, "Conceptual Volume Description"),
  (0x30100018, "Source Conceptual Volume Sequence"),
  (0x30100019, "Author Identification Sequence"),
  (0x3010001A, "Manufacturer's Model Version"),
  (0x3010001B, "Device Alternate Identifier"),
  (0x3010001C, "Device Alternate Identifier Type"),
  (0x3010001D, "Device Alternate Identifier Format"),
  (0x3010001E, "Segmentation Creation Template Label"),
  (0x3010001F, "Segmentation Template UID"),
  (0x30100020, "Referenced Segment Reference Index"),
  (0x30100021, "Segment Reference Sequence"),
  (0x30100022, "Segment Reference Index"),
  (0x30100023, "Direct Segment Reference Sequence"),
  (0x30100024, "Combination Segment Reference Sequence"),
  (0x30100025, "Conceptual Volume Sequence"),
  (0x30100026, "Segmented RT Accessory Device Sequence"),
  (0x30100027, "Segment Characteristics Sequence"),
  (0x30100028, "Related Segment Characteristics Sequence"),
  (0x30100029, "Segment Characteristics Precedence"),
  (0x3010002A, "RT Segment Annotation Sequence"),
  (0x3010002B, "Segment Annotation Category Code Sequence"),
  (0x3010002C, "Segment Annotation Type Code Sequence"),
  (0x3010002D, "Device Label"),
  (0x3010002E, "Device Type Code Sequence"),
  (0x3010002F, "Segment Annotation Type Modifier Code Sequence"),
  (0x30100030, "Patient Equipment Relationship Code Sequence"),
  (0x30100031, "Referenced Fiducials UID"),
  (0x30100032, "Patient Treatment Orientation Sequence"),
  (0x30100033, "User Content Label"),
  (0x30100034, "User Content Long Label"),
  (0x30100035, "Entity Label"),
  (0x30100036, "Entity Name"),
  (0x30100037, "Entity Description"),
  (0x30100038, "Entity Long Label"),
  (0x30100039, "Device Index"),
  (0x3010003A, "RT Treatment Phase Index"),
  (0x3010003B, "RT Treatment Phase UID"),
  (0x3010003C, "RT Prescription Index"),
  (0x3010003D, "RT Segment Annotation Index"),
  (0x3010003E, "Basis RT Treatment Phase Index"),
  (0x3010003F, "Related RT Treatment Phase Index"),
  (0x30100040, "Referenced RT Treatment Phase Index"),
  (0x30100041, "Referenced RT Prescription Index"),
  (0x30100042, "Referenced Parent RT Prescription Index"),
  (0x30100043, "Manufacturer's Device Identifier"),
  (0x30100044, "Instance-Level Referenced Performed Procedure Step Sequence"),
  (0x30100045, "RT Treatment Phase Intent Presence Flag"),
  (0x30100046, "Radiotherapy Treatment Type"),
  (0x30100047, "Teletherapy Radiation Type"),
  (0x30100048, "Brachytherapy Source Type"),
  (0x30100049, "Referenced RT Treatment Phase Sequence"),
  (0x3010004A, "Referenced Direct Segment Instance Sequence"),
  (0x3010004B, "Intended RT Treatment Phase Sequence"),
  (0x3010004C, "Intended Phase Start Date"),
  (0x3010004D, "Intended Phase End Date"),
  (0x3010004E, "RT Treatment Phase Interval Sequence"),
  (0x3010004F, "Temporal Relationship Interval Anchor"),
  (0x30100050, "Minimum Number of Interval Days"),
  (0x30100051, "Maximum Number of Interval Days"),
  (0x30100052, "Pertinent SOP Classes in Study"),
  (0x30100053, "Pertinent SOP Classes in Series"),
  (0x30100054, "RT Prescription Label"),
  (0x30100055, "RT Physician Intent Predecessor Sequence"),
  (0x30100056, "RT Treatment Approach Label"),
  (0x30100057, "RT Physician Intent Sequence"),
  (0x30100058, "RT Physician Intent Index"),
  (0x30100059, "RT Treatment Intent Type"),
  (0x3010005A, "RT Physician Intent Narrative"),
  (0x3010005B, "RT Protocol Code Sequence"),
  (0x3010005C, "Reason for Superseding"),
  (0x3010005D, "RT Diagnosis Code Sequence"),
  (0x3010005E, "Referenced RT Physician Intent Index"),
  (0x3010005F, "RT Physician Intent Input Instance Sequence"),
  (0x30100060, "RT Anatomic Prescription Sequence"),
  (0x30100061, "Prior Treatment Dose Description"),
  (0x30100062, "Prior Treatment Reference Sequence"),
  (0x30100063, "Dosimetric Objective Evaluation Scope"),
  (0x30100064, "Therapeutic Role Category Code Sequence"),
  (0x30100065, "Therapeutic Role Type Code Sequence"),
  (0x30100066, "Conceptual Volume Optimization Precedence"),
  (0x30100067, "Conceptual Volume Category Code Sequence"),
  (0x30100068, "Conceptual Volume Blocking Constraint"),
  (0x30100069, "Conceptual Volume Type Code Sequence"),
  (0x3010006A, "Conceptual Volume Type Modifier Code Sequence"),
  (0x3010006B, "RT Prescription Sequence"),
  (0x3010006C, "Dosimetric Objective Sequence"),
  (0x3010006D, "Dosimetric Objective Type Code Sequence"),
  (0x3010006E, "Dosimetric Objective UID"),
  (0x3010006F, "Referenced Dosimetric Objective UID"),
  (0x30100070, "Dosimetric Objective Parameter Sequence"),
  (0x30100071, "Referenced Dosimetric Objectives Sequence"),
  (0x30100073, "Absolute Dosimetric Objective Flag"),
  (0x30100074, "Dosimetric Objective Weight"),
  (0x30100075, "Dosimetric Objective Purpose"),
  (0x30100076, "Planning Input Information Sequence"),
  (0x30100077, "Treatment Site"),
  (0x30100078, "Treatment Site Code Sequence"),
  (0x30100079, "Fraction Pattern Sequence"),
  (0x3010007A, "Treatment Technique Notes"),
  (0x3010007B, "Prescription Notes"),
  (0x3010007C, "Number of Interval Fractions"),
  (0x3010007D, "Number of Fractions"),
  (0x3010007E, "Intended Delivery Duration"),
  (0x3010007F, "Fractionation Notes"),
  (0x30100080, "RT Treatment Technique Code Sequence"),
  (0x30100081, "Prescription Notes Sequence"),
  (0x30100082, "Fraction-Based Relationship Sequence"),
  (0x30100083, "Fraction-Based Relationship Interval Anchor"),
  (0x30100084, "Minimum Hours between Fractions"),
  (0x30100085, "Intended Fraction Start Time"),
  (0x30100086, "Intended Start Day of Week"),
  (0x30100087, "Weekday Fraction Pattern Sequence"),
  (0x30100088, "Delivery Time Structure Code Sequence"),
  (0x30100089, "Treatment Site Modifier Code Sequence"),
  (0x40000010, "Arbitrary"),
  (0x40004000, "Text Comments"),
  (0x40080040, "Results ID"),
  (0x40080042, "Results ID Issuer"),
  (0x40080050, "Referenced Interpretation Sequence"),
  (0x400800FF, "Report Production Status (Trial)"),
  (0x40080100, "Interpretation Recorded Date"),
  (0x40080101, "Interpretation Recorded Time"),
  (0x40080102, "Interpretation Recorder"),
  (0x40080103, "Reference to Recorded Sound"),
  (0x40080108, "Interpretation Transcription Date"),
  (0x40080109, "Interpretation Transcription Time"),
  (0x4008010A, "Interpretation Transcriber"),
  (0x4008010B, "Interpretation Text"),
  (0x4008010C, "Interpretation Author"),
  (0x40080111, "Interpretation Approver Sequence"),
  (0x40080112, "Interpretation Approval Date"),
  (0x40080113, "Interpretation Approval Time"),
  (0x40080114, "Physician Approving Interpretation"),
  (0x40080115, "Interpretation Diagnosis Description"),
  (0x40080117, "Interpretation Diagnosis Code Sequence"),
  (0x40080118, "Results Distribution List Sequence"),
  (0x40080119, "Distribution Name"),
  (0x4008011A, "Distribution Address"),
  (0x40080200, "Interpretation ID"),
  (0x40080202, "Interpretation ID Issuer"),
  (0x40080210, "Interpretation Type ID"),
  (0x40080212, "Interpretation Status ID"),
  (0x40080300, "Impressions"),
  (0x40084000, "Results Comments"),
  (0x40100001, "Low Energy Detectors"),
  (0x40100002, "High Energy Detectors"),
  (0x40100004, "Detector Geometry Sequence"),
  (0x40101001, "Threat ROI Voxel Sequence"),
  (0x40101004, "Threat ROI Base"),
  (0x40101005, "Threat ROI Extents"),
  (0x40101006, "Threat ROI Bitmap"),
  (0x40101007, "Route Segment ID"),
  (0x40101008, "Gantry Type"),
  (0x40101009, "OOI Owner Type"),
  (0x4010100A, "Route Segment Sequence"),
  (0x40101010, "Potential Threat Object ID"),
  (0x40101011, "Threat Sequence"),
  (0x40101012, "Threat Category"),
  (0x40101013, "Threat Category Description"),
  (0x40101014, "ATD Ability Assessment"),
  (0x40101015, "ATD Assessment Flag"),
  (0x40101016, "ATD Assessment Probability"),
  (0x40101017, "Mass"),
  (0x40101018, "Density"),
  (0x40101019, "Z Effective"),
  (0x4010101A, "Boarding Pass ID"),
  (0x4010101B, "Center of Mass"),
  (0x4010101C, "Center of PTO"),
  (0x4010101D, "Bounding Polygon"),
  (0x4010101E, "Route Segment Start Location ID"),
  (0x4010101F, "Route Segment End Location ID"),
  (0x40101020, "Route Segment Location ID Type"),
  (0x40101021, "Abort Reason"),
  (0x40101023, "Volume of PTO"),
  (0x40101024, "Abort Flag"),
  (0x40101025, "Route Segment Start Time"),
  (0x40101026, "Route Segment End Time"),
  (0x40101027, "TDR Type"),
  (0x40101028, "International Route Segment"),
  (0x40101029, "Threat Detection Algorithm and Version"),
  (0x4010102A, "Assigned Location"),
  (0x4010102B, "Alarm Decision Time"),
  (0x40101031, "Alarm Decision"),
  (0x40101033, "Number of Total Objects"),
  (0x40101034, "Number of Alarm Objects"),
  (0x40101037, "PTO Representation Sequence"),
  (0x40101038, "ATD Assessment Sequence"),
  (0x40101039, "TIP Type"),
  (0x4010103A, "DICOS Version"),
  (0x40101041, "OOI Owner Creation Time"),
  (0x40101042, "OOI Type"),
  (0x40101043, "OOI Size"),
  (0x40101044, "Acquisition Status"),
  (0x40101045, "Basis Materials Code Sequence"),
  (0x40101046, "Phantom Type"),
  (0x40101047, "OOI Owner Sequence"),
  (0x40101048, "Scan Type"),
  (0x40101051, "Itinerary ID"),
  (0x40101052, "Itinerary ID Type"),
  (0x40101053, "Itinerary ID Assigning Authority"),
  (0x40101054, "Route ID"),
  (0x40101055, "Route ID Assigning Authority"),
  (0x40101056, "Inbound Arrival Type"),
  (0x40101058, "Carrier ID"),
  (0x40101059, "Carrier ID Assigning Authority"),
  (0x40101060, "Source Orientation"),
  (0x40101061, "Source Position"),
  (0x40101062, "Belt Height"),
  (0x40101064, "Algorithm Routing Code Sequence"),
  (0x40101067, "Transport Classification"),
  (0x40101068, "OOI Type Descriptor"),
  (0x40101069, "Total Processing Time"),
  (0x4010106C, "Detector Calibration Data"),
  (0x4010106D, "Additional Screening Performed"),
  (0x4010106E, "Additional Inspection Selection Criteria"),
  (0x4010106F, "Additional Inspection Method Sequence"),
  (0x40101070, "AIT Device Type"),
  (0x40101071, "QR Measurements Sequence"),
  (0x40101072, "Target Material Sequence"),
  (0x40101073, "SNR Threshold"),
  (0x40101075, "Image Scale Representation"),
  (0x40101076, "Referenced PTO Sequence"),
  (0x40101077, "Referenced TDR Instance Sequence"),
  (0x40101078, "PTO Location Description"),
  (0x40101079, "Anomaly Locator Indicator Sequence"),
  (0x4010107A, "Anomaly Locator Indicator"),
  (0x4010107B, "PTO Region Sequence"),
  (0x4010107C, "Inspection Selection Criteria"),
  (0x4010107D, "Secondary Inspection Method Sequence"),
  (0x4010107E, "PRCS to RCS Orientation"),
  (0x4FFE0001, "MAC Parameters Sequence"),
  (0x52009229, "Shared Functional Groups Sequence"),
  (0x52009230, "Per-Frame Functional Groups Sequence"),
  (0x54000100, "Waveform Sequence"),
  (0x54000110, "Channel Minimum Value"),
  (0x54000112, "Channel Maximum Value"),
  (0x54001004, "Waveform Bits Allocated"),
  (0x54001006, "Waveform Sample Interpretation"),
  (0x5400100A, "Waveform Padding Value"),
  (0x54001010, "Waveform Data"),
  (0x56000010, "First Order Phase Correction Angle"),
  (0x56000020, "Spectroscopy Data"),
  (0x7FE00001, "Extended Offset Table"),
  (0x7FE00002, "Extended Offset Table Lengths"),
  (0x7FE00003, "Encapsulated Pixel Data Value Total Length"),
  (0x7FE00008, "Float Pixel Data"),
  (0x7FE00009, "Double Float Pixel Data"),
  (0x7FE00010, "Pixel Data"),
  (0x7FE00020, "Coefficients SDVN"),
  (0x7FE00030, "Coefficients SDHN"),
  (0x7FE00040, "Coefficients SDDN"),
  (0xFFFAFFFA, "Digital Signatures Sequence"),
  (0xFFFCFFFC, "Data Set Trailing Padding"),
  (0xFFFEE000, "Item"),
  (0xFFFEE00D, "Item Delimitation Item"),
  (0xFFFEE0DD, "Sequence Delimitation Item"),
];
