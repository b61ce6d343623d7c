//! Normalizing re-save of the input document
//!
//! Loading a PDF with lopdf and writing it back out rebuilds the object table
//! and emits a fresh cross-reference section, which makes the later scan
//! independent of whatever damage the original xref carried.

use std::io::{BufWriter, Write};
use std::path::Path;

use lopdf::Document;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::Result;
use crate::paths::intermediate_location;

/// Re-save `input` into a temporary file next to it.
///
/// The returned guard owns the intermediate file: dropping it removes the
/// file from disk. The source document is released before this returns.
pub fn sanitize(input: &Path) -> Result<NamedTempFile> {
    let (dir, prefix) = intermediate_location(input);

    let bytes = std::fs::read(input)?;
    let mut doc = Document::load_mem(&bytes)?;
    drop(bytes);
    let pruned = doc.prune_objects();
    debug!(
        path = %input.display(),
        objects = doc.objects.len(),
        pruned = pruned.len(),
        "loaded source document"
    );

    let mut intermediate = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".pdf")
        .tempfile_in(&dir)?;

    {
        let mut writer = BufWriter::new(intermediate.as_file_mut());
        doc.save_to(&mut writer)?;
        writer.flush()?;
    }
    drop(doc);

    info!(intermediate = %intermediate.path().display(), "normalized document");
    Ok(intermediate)
}
