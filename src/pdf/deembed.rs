//! The deembed workflow: sanitize, scan, wrap, write

use std::path::{Path, PathBuf};

use lopdf::Document;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::paths::{has_pdf_extension, output_path};
use crate::pdf::sanitize::sanitize;
use crate::pdf::scan::{find_embedded_objects, FORM, PLACEHOLDER};
use crate::pdf::wrap::{wrap_object, WrapGeometry, WrappedPage};
use crate::pdf::write::write_pages;

/// Options for extracting embedded pages
#[derive(Debug, Clone)]
pub struct DeembedOptions {
    /// XObject subtypes that are turned into pages
    pub subtypes: Vec<Vec<u8>>,
    /// Page geometry for objects without a bounding box
    pub geometry: WrapGeometry,
}

impl Default for DeembedOptions {
    fn default() -> Self {
        Self {
            subtypes: vec![FORM.to_vec(), PLACEHOLDER.to_vec()],
            geometry: WrapGeometry::default(),
        }
    }
}

/// Outcome of one deembed run.
///
/// `output_path` is empty unless `success`, `error` is empty if it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeembedReport {
    pub success: bool,
    pub output_path: String,
    pub error: String,
}

impl From<Result<PathBuf>> for DeembedReport {
    fn from(result: Result<PathBuf>) -> Self {
        match result {
            Ok(path) => Self {
                success: true,
                output_path: path.display().to_string(),
                error: String::new(),
            },
            Err(e) => Self {
                success: false,
                output_path: String::new(),
                error: e.to_string(),
            },
        }
    }
}

/// Extract the embedded pages of `path` with the default options.
///
/// Never fails; the outcome is reported through the returned record.
///
/// # Example
///
/// ```no_run
/// use pdfu::pdf::deembed;
/// use std::path::Path;
///
/// let report = deembed(Path::new("slides.pdf"));
/// assert!(report.success, "{}", report.error);
/// ```
pub fn deembed(path: &Path) -> DeembedReport {
    deembed_pdf(path, &DeembedOptions::default()).into()
}

/// Extract the embedded pages of `input` into `<input>_deembedded.pdf`.
///
/// The input is first re-saved into a temporary `_inter` file, which is
/// removed again on every return path. The output file is only written when
/// at least one embedded object was found.
pub fn deembed_pdf(input: &Path, options: &DeembedOptions) -> Result<PathBuf> {
    if !has_pdf_extension(input) {
        return Err(Error::NotPdf);
    }

    let intermediate = sanitize(input)?;

    let doc = Document::load_mem(&std::fs::read(intermediate.path())?)?;
    let found = find_embedded_objects(&doc, &options.subtypes);
    info!(input = %input.display(), found = found.len(), "scanned document");

    if found.is_empty() {
        return Err(Error::NoEmbeddedPages);
    }

    let pages = found
        .iter()
        .map(|embedded| wrap_object(&doc, embedded, &options.geometry))
        .collect::<Result<Vec<WrappedPage>>>()?;

    let output = output_path(input);
    write_pages(doc, pages, &output)?;

    if let Err(e) = intermediate.close() {
        warn!(error = %e, "failed to remove intermediate file");
    }

    Ok(output)
}
