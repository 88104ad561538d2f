use std::path::{Path, PathBuf};

/// Creates a Rayon thread pool with the specified number of threads.
///
pub fn create_thread_pool(threads: usize) -> Result<rayon::ThreadPool, String> {
  rayon::ThreadPoolBuilder::new()
    .num_threads(threads)
    .build()
    .map_err(|e| e.to_string())
}

/// Expands the given inputs into a list of DICOM JSON files. Files are passed
/// through as-is, and directories are searched recursively for files with a
/// `.json` extension. The extension check is not case sensitive.
///
/// Files found in each directory are sorted so that output order is stable.
///
pub fn collect_json_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
  let mut files = vec![];

  for input in inputs {
    if !input.is_dir() {
      files.push(input.clone());
      continue;
    }

    let mut directory_files = vec![];

    for entry in walkdir::WalkDir::new(input) {
      let entry = entry.map_err(|e| e.to_string())?;

      if entry.file_type().is_file() && has_json_extension(entry.path()) {
        directory_files.push(entry.into_path());
      }
    }

    directory_files.sort();
    files.extend(directory_files);
  }

  Ok(files)
}

fn has_json_extension(path: &Path) -> bool {
  path
    .extension()
    .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn has_json_extension_test() {
    assert!(has_json_extension(Path::new("a/b.json")));
    assert!(has_json_extension(Path::new("a/b.JSON")));
    assert!(!has_json_extension(Path::new("a/b.dcm")));
    assert!(!has_json_extension(Path::new("a/json")));
  }
}
