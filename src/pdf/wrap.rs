//! Wrapping a discovered XObject into a standalone page

use lopdf::{Dictionary, Document, Object, Stream};

use crate::error::{Error, Result};
use crate::pdf::scan::{EmbeddedObject, IMAGE};

/// Page geometry used when an XObject has no bounding box of its own
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapGeometry {
    /// Page width in points
    pub width: f32,
    /// Margin around the drawing, in points
    pub margin: f32,
}

impl Default for WrapGeometry {
    fn default() -> Self {
        Self {
            width: 1000.0,
            margin: 0.5 * 72.0,
        }
    }
}

/// Everything needed to emit one output page
#[derive(Debug, Clone)]
pub struct WrappedPage {
    /// `/MediaBox` of the new page
    pub media_box: Vec<Object>,
    /// `/Resources` of the new page, references still point into the source
    pub resources: Object,
    /// Content stream of the new page
    pub contents: Stream,
}

/// Turn one embedded object into a page wrapper.
///
/// Forms (and placeholder-tagged objects shaped like forms) keep their own
/// bounding box and encoded content. Images are scaled into a page of
/// `geometry.width` with `geometry.margin` on every side.
pub fn wrap_object(
    doc: &Document,
    embedded: &EmbeddedObject,
    geometry: &WrapGeometry,
) -> Result<WrappedPage> {
    let stream = match &embedded.object {
        Object::Stream(stream) => stream,
        _ => {
            return Err(Error::UnsupportedStructure(format!(
                "{} is not a stream",
                embedded.describe()
            )))
        }
    };

    if embedded.subtype == IMAGE {
        wrap_image(doc, embedded, stream, geometry)
    } else {
        wrap_form(doc, embedded, stream)
    }
}

fn wrap_form(doc: &Document, embedded: &EmbeddedObject, stream: &Stream) -> Result<WrappedPage> {
    let bbox = stream.dict.get(b"BBox").map_err(|_| {
        Error::UnsupportedStructure(format!("{} has no /BBox", embedded.describe()))
    })?;
    let (_, bbox) = doc.dereference(bbox)?;
    let media_box = match bbox {
        Object::Array(items) if items.len() == 4 && items.iter().all(|o| number(o).is_some()) => {
            items.clone()
        }
        _ => {
            return Err(Error::UnsupportedStructure(format!(
                "{} has an invalid /BBox",
                embedded.describe()
            )))
        }
    };

    let resources = stream
        .dict
        .get(b"Resources")
        .cloned()
        .unwrap_or_else(|_| Object::Dictionary(Dictionary::new()));

    // The content keeps its original encoding, so carry the filter along
    let mut dict = Dictionary::new();
    let mut encoded = false;
    for key in [b"Filter".as_slice(), b"DecodeParms".as_slice()] {
        if let Ok(value) = stream.dict.get(key) {
            dict.set(key.to_vec(), value.clone());
            encoded = true;
        }
    }
    let mut contents = Stream::new(dict, stream.content.clone());
    contents.allows_compression = !encoded;

    Ok(WrappedPage {
        media_box,
        resources,
        contents,
    })
}

fn wrap_image(
    doc: &Document,
    embedded: &EmbeddedObject,
    stream: &Stream,
    geometry: &WrapGeometry,
) -> Result<WrappedPage> {
    let id = embedded.id.ok_or_else(|| {
        Error::UnsupportedStructure(format!("{} cannot be referenced", embedded.describe()))
    })?;

    let dimension = |key: &[u8]| -> Result<f32> {
        let value = stream.dict.get(key).map_err(|_| {
            Error::UnsupportedStructure(format!(
                "{} has no /{}",
                embedded.describe(),
                String::from_utf8_lossy(key)
            ))
        })?;
        let (_, value) = doc.dereference(value)?;
        match number(value) {
            Some(n) if n > 0.0 => Ok(n),
            _ => Err(Error::UnsupportedStructure(format!(
                "{} has an invalid /{}",
                embedded.describe(),
                String::from_utf8_lossy(key)
            ))),
        }
    };
    let image_width = dimension(b"Width".as_slice())?;
    let image_height = dimension(b"Height".as_slice())?;

    let draw_width = geometry.width - 2.0 * geometry.margin;
    let draw_height = draw_width * image_height / image_width;
    let page_height = draw_height + 2.0 * geometry.margin;

    let content = format!(
        "q {} 0 0 {} {} {} cm /Im0 Do Q",
        draw_width, draw_height, geometry.margin, geometry.margin
    );

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    Ok(WrappedPage {
        media_box: vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(geometry.width),
            Object::Real(page_height),
        ],
        resources: Object::Dictionary(resources),
        contents: Stream::new(Dictionary::new(), content.into_bytes()),
    })
}

fn number(object: &Object) -> Option<f32> {
    match object {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
