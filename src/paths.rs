//! File names derived from the input path
//!
//! Everything here works on `OsStr` so names that are not valid UTF-8 come
//! out byte for byte.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Suffix appended to the input stem for the output document
pub const OUTPUT_SUFFIX: &str = "_deembedded.pdf";

/// Prefix marker for the intermediate sanitized file
pub const INTERMEDIATE_MARKER: &str = "_inter";

/// Literal, case-sensitive extension check on the path string
pub fn has_pdf_extension(path: &Path) -> bool {
    path.as_os_str().as_encoded_bytes().ends_with(b".pdf")
}

/// File name of `path` without its trailing `.pdf`.
///
/// A file named exactly `.pdf` has an empty stem.
fn pdf_stem(path: &Path) -> OsString {
    match path.extension() {
        Some(ext) if ext == "pdf" => path.file_stem().unwrap_or_default().to_os_string(),
        _ if path.file_name() == Some(OsStr::new(".pdf")) => OsString::new(),
        _ => path.file_name().unwrap_or_default().to_os_string(),
    }
}

/// Directory holding `path`, `.` for a bare file name
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// `<input_without_ext>_deembedded.pdf`
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = pdf_stem(input);
    name.push(OUTPUT_SUFFIX);
    input.with_file_name(name)
}

/// Directory and file name prefix for the intermediate file.
///
/// The temporary file is created in the input's directory with a name
/// starting with `<input_file_stem>_inter`.
pub fn intermediate_location(input: &Path) -> (PathBuf, OsString) {
    let mut prefix = pdf_stem(input);
    prefix.push(INTERMEDIATE_MARKER);
    (parent_dir(input), prefix)
}
