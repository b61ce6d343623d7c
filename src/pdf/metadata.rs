//! Page information read back from a written PDF

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::Result;

/// Count pages by reading the Count field from the Pages dictionary
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog = doc.catalog()?;
    let pages_id = catalog.get(b"Pages")?.as_reference()?;
    let pages_dict = doc.get_dictionary(pages_id)?;
    let count = pages_dict.get(b"Count")?.as_i64()?;
    Ok(count.max(0) as usize)
}

/// Count the number of pages in a PDF file
pub fn count_pages(path: &Path) -> Result<usize> {
    let doc = Document::load_mem(&std::fs::read(path)?)?;
    count_pages_from_catalog(&doc)
}

/// `[llx, lly, urx, ury]` of every page's own `/MediaBox`, in page order
pub fn page_boxes(path: &Path) -> Result<Vec<[f32; 4]>> {
    let doc = Document::load_mem(&std::fs::read(path)?)?;
    let mut boxes = Vec::new();

    for page_id in doc.get_pages().into_values() {
        let page = doc.get_dictionary(page_id)?;
        let (_, media_box) = doc.dereference(page.get(b"MediaBox")?)?;
        let mut corners = [0.0f32; 4];
        for (corner, value) in corners.iter_mut().zip(media_box.as_array()?) {
            *corner = match value {
                Object::Integer(i) => *i as f32,
                Object::Real(r) => *r,
                _ => 0.0,
            };
        }
        boxes.push(corners);
    }

    Ok(boxes)
}
