//! PDF fixtures generated with lopdf for the integration tests

#![allow(dead_code)]

use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::path::{Path, PathBuf};

/// Form XObject with a square bounding box of `size` points
pub fn add_form(doc: &mut Document, size: i64, resources: Dictionary) -> ObjectId {
    let content = format!("0 0 m {} {} l S", size, size);
    doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => vec![0.into(), 0.into(), size.into(), size.into()],
            "Resources" => resources,
        },
        content.into_bytes(),
    ))
}

/// Add a page tree with one page per entry, each page listing the given
/// XObjects in its resources and drawing them.
pub fn finish(doc: &mut Document, page_xobjects: Vec<Dictionary>) {
    let pages_id = doc.new_object_id();
    let mut kids = Vec::new();

    for xobjects in page_xobjects {
        let mut content = String::new();
        for (name, _) in xobjects.iter() {
            content.push_str(&format!("q /{} Do Q\n", String::from_utf8_lossy(name)));
        }
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! { "XObject" => xobjects },
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
}

/// One page per size, each drawing its own form of that size
pub fn write_pdf_with_forms(dir: &Path, name: &str, sizes: &[i64]) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let mut pages = Vec::new();
    for &size in sizes {
        let form_id = add_form(&mut doc, size, Dictionary::new());
        pages.push(dictionary! { "Fm0" => form_id });
    }
    finish(&mut doc, pages);
    save(doc, dir, name)
}

/// Two plain pages without any XObject
pub fn write_pdf_without_forms(dir: &Path, name: &str) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    finish(&mut doc, vec![Dictionary::new(), Dictionary::new()]);
    save(doc, dir, name)
}

pub fn save(mut doc: Document, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    doc.save(&path).expect("Failed to save fixture PDF");
    path
}

/// File names in `dir` containing `marker`
pub fn files_containing(dir: &Path, marker: &str) -> Vec<String> {
    std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.contains(marker))
        .collect()
}
