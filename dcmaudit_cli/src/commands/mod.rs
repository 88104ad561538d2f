pub mod list_sop_classes_command;
pub mod validate_command;
