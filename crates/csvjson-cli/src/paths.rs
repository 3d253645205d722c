//! Output path derivation and directory scanning.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory name used for directory output when `--output` is absent.
pub const DEFAULT_OUTPUT_DIR: &str = "jsons";

/// JSON path for a single input file.
///
/// An existing directory as `output` receives `<stem>.json`; any other
/// `output` is used as given; no `output` puts the JSON next to the input.
pub fn file_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(out) if out.is_dir() => out.join(json_file_name(input)),
        Some(out) => out.to_path_buf(),
        None => input.with_extension("json"),
    }
}

/// Output directory for a directory input. `.` resolves to the working directory.
pub fn directory_output_dir(input: &Path, output: Option<&Path>) -> io::Result<PathBuf> {
    match output {
        Some(out) if out == Path::new(".") => std::env::current_dir(),
        Some(out) => Ok(out.to_path_buf()),
        None => Ok(input.join(DEFAULT_OUTPUT_DIR)),
    }
}

/// `<stem>.json` for an input file.
pub fn json_file_name(input: &Path) -> String {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    format!("{}.json", stem)
}

/// Regular files directly inside `dir` whose name ends in `.csv`, sorted.
pub fn csv_files_in(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_csv = entry.file_name().to_string_lossy().ends_with(".csv");
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
