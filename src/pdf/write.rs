//! Writing the deembedded pages into a fresh document using lopdf

use std::io::{BufWriter, Write};
use std::path::Path;

use lopdf::{Dictionary, Document, Object};
use tracing::info;

use crate::error::{Error, Result};
use crate::paths::parent_dir;
use crate::pdf::wrap::WrappedPage;

/// Build a new document holding one page per wrapper and save it to `output`.
///
/// `source` is the document the wrappers were taken from; its objects are
/// moved into the new document so the wrappers' resource references stay
/// valid. Anything not reachable from the new page tree is pruned before
/// saving. The document is staged in a temporary file beside `output` and
/// only renamed into place once fully written. Returns the number of pages
/// written.
pub fn write_pages(source: Document, pages: Vec<WrappedPage>, output: &Path) -> Result<usize> {
    if pages.is_empty() {
        return Err(Error::NoEmbeddedPages);
    }

    let mut out = Document::with_version(source.version.clone());

    // Bring the source objects along FIRST, then allocate new ids above them
    out.objects = source.objects;
    out.max_id = source.max_id;

    let pages_id = out.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());

    for page in pages {
        let contents_id = out.add_object(page.contents);

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(pages_id));
        page_dict.set("MediaBox", Object::Array(page.media_box));
        page_dict.set("Resources", page.resources);
        page_dict.set("Contents", Object::Reference(contents_id));

        let page_id = out.add_object(Object::Dictionary(page_dict));
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len();

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(page_count as i64));
    pages_object.set("Kids", Object::Array(kids));
    out.objects.insert(pages_id, Object::Dictionary(pages_object));

    let catalog_id = out.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    out.objects.insert(catalog_id, Object::Dictionary(catalog));

    // Only the new catalog survives; the old page tree becomes unreachable
    out.trailer = Dictionary::new();
    out.trailer.set("Root", Object::Reference(catalog_id));

    out.prune_objects();
    out.renumber_objects();
    out.compress();

    let mut staged = tempfile::Builder::new()
        .prefix(".pdfu-")
        .suffix(".pdf")
        .tempfile_in(parent_dir(output))?;
    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        out.save_to(&mut writer)?;
        writer.flush()?;
    }
    staged.persist(output).map_err(|e| Error::Io(e.error))?;

    info!(output = %output.display(), pages = page_count, "wrote deembedded document");
    Ok(page_count)
}
