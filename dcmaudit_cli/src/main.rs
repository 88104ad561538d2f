//! Entry point for dcmaudit's CLI tool.

mod commands;
mod logging;
mod utils;

use clap::{ArgAction, Parser, Subcommand};

use commands::{list_sop_classes_command, validate_command};

#[derive(Parser)]
#[command(
  name = "dcmaudit",
  bin_name = "dcmaudit",
  version = env!("CARGO_PKG_VERSION"),
  about = "dcmaudit is a CLI tool for auditing the anonymization of DICOM \
    JSON metadata",
  max_term_width = 80
)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  #[arg(
    long,
    short,
    global = true,
    action = ArgAction::Count,
    help = "Increase the verbosity of diagnostic logging written to stderr. \
      Specify once for debug output and twice for trace output. The RUST_LOG \
      environment variable takes precedence when set."
  )]
  verbose: u8,

  #[arg(
    long,
    short,
    global = true,
    default_value_t = false,
    help = "Only log errors to stderr."
  )]
  quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
  #[command(about = validate_command::ABOUT)]
  Validate(validate_command::ValidateArgs),

  #[command(about = list_sop_classes_command::ABOUT)]
  ListSopClasses(list_sop_classes_command::ListSopClassesArgs),
}

fn main() -> Result<(), ()> {
  let cli = Cli::parse();

  if let Err(e) = logging::init_logging(cli.verbose, cli.quiet) {
    eprintln!("Error: {e}");
    return Err(());
  }

  match cli.command {
    Commands::Validate(args) => validate_command::run(&args),
    Commands::ListSopClasses(args) => list_sop_classes_command::run(&args),
  }
}
