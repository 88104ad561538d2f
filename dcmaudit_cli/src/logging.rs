//! Diagnostic logging for the CLI, written to stderr.

use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Installs the global `tracing` subscriber.
///
/// The level is chosen by the verbosity count: 0 is WARN, 1 is DEBUG, and 2 or
/// more is TRACE. Quiet mode only shows errors. A `RUST_LOG` environment
/// variable overrides the chosen level.
///
pub fn init_logging(verbose: u8, quiet: bool) -> Result<(), String> {
  let level = log_level(verbose, quiet);

  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::from_level(level).into())
    .from_env_lossy();

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .with_thread_ids(false)
    .with_file(false)
    .with_line_number(false)
    .try_init()
    .map_err(|e| format!("Failed to initialize logging: {e}"))
}

fn log_level(verbose: u8, quiet: bool) -> Level {
  match (quiet, verbose) {
    (true, _) => Level::ERROR,
    (false, 0) => Level::WARN,
    (false, 1) => Level::DEBUG,
    (false, _) => Level::TRACE,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn log_level_test() {
    let test_cases = [
      ((true, 0), Level::ERROR),
      ((true, 5), Level::ERROR),
      ((false, 0), Level::WARN),
      ((false, 1), Level::DEBUG),
      ((false, 2), Level::TRACE),
      ((false, 10), Level::TRACE),
    ];

    for ((quiet, verbose), expected) in test_cases {
      assert_eq!(log_level(verbose, quiet), expected);
    }
  }
}
