use clap::{Args, ValueEnum};
use dcmaudit::validate::supported_sop_classes::{
  SUPPORTED_SOP_CLASSES, SopClass,
};

pub const ABOUT: &str =
  "Lists the SOP classes whose anonymization can be validated";

#[derive(Args)]
pub struct ListSopClassesArgs {
  #[arg(
    long,
    short,
    help = "The format used to print the supported SOP classes.",
    default_value_t = Format::Table
  )]
  format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Format {
  /// Output a table of SOP Class UIDs and names.
  Table,

  /// Output each SOP class as a single line of JSON.
  JsonLines,
}

impl core::fmt::Display for Format {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Table => write!(f, "table"),
      Self::JsonLines => write!(f, "json-lines"),
    }
  }
}

pub fn run(args: &ListSopClassesArgs) -> Result<(), ()> {
  match args.format {
    Format::Table => println!("{}", sop_classes_table(&SUPPORTED_SOP_CLASSES)),

    Format::JsonLines => {
      for sop_class in SUPPORTED_SOP_CLASSES.iter() {
        let mut output = serde_json::Map::new();

        output.insert("uid".to_string(), sop_class.uid.into());
        output.insert("name".to_string(), sop_class.name.into());

        println!("{}", serde_json::Value::Object(output));
      }
    }
  }

  Ok(())
}

fn sop_classes_table(sop_classes: &[SopClass]) -> comfy_table::Table {
  use comfy_table::{Attribute, Cell, Table, presets::UTF8_FULL};

  let mut table = Table::new();
  table.load_preset(UTF8_FULL);

  table.set_header(
    ["SOP Class UID", "Name"]
      .iter()
      .map(|text| Cell::new(text).add_attribute(Attribute::Bold))
      .collect::<Vec<_>>(),
  );

  for sop_class in sop_classes {
    table.add_row([sop_class.uid, sop_class.name]);
  }

  table
}
