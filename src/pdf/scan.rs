//! Discovery of embedded XObjects reachable from the page tree

use std::collections::HashSet;

use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::debug;

/// Subtype of a form XObject
pub const FORM: &[u8] = b"Form";

/// Placeholder subtype some producers put on form-like objects
pub const PLACEHOLDER: &[u8] = b"Dummy";

/// Subtype of an image XObject
pub const IMAGE: &[u8] = b"Image";

/// One XObject found while walking the document
#[derive(Debug, Clone)]
pub struct EmbeddedObject {
    /// Object number, `None` for a direct object
    pub id: Option<ObjectId>,
    /// Value of the `/Subtype` entry
    pub subtype: Vec<u8>,
    /// The object itself (normally a stream)
    pub object: Object,
}

impl EmbeddedObject {
    pub fn describe(&self) -> String {
        let subtype = String::from_utf8_lossy(&self.subtype);
        match self.id {
            Some((num, gen)) => format!("/{} object {} {} R", subtype, num, gen),
            None => format!("direct /{} object", subtype),
        }
    }
}

enum Pending<'a> {
    Indirect(ObjectId),
    Direct(&'a Object),
}

impl<'a> From<&'a Object> for Pending<'a> {
    fn from(object: &'a Object) -> Self {
        match object {
            Object::Reference(id) => Pending::Indirect(*id),
            other => Pending::Direct(other),
        }
    }
}

/// Walk every page in order and collect the XObjects whose subtype is in
/// `subtypes`.
///
/// The walk is depth-first, visits each indirect object once, takes
/// dictionary entries in sorted key order and never follows `/Parent`.
/// Matches are descended into as well, so a form nested inside another form
/// is reported right after its parent.
pub fn find_embedded_objects(doc: &Document, subtypes: &[Vec<u8>]) -> Vec<EmbeddedObject> {
    let mut stack: Vec<Pending> = doc
        .get_pages()
        .values()
        .rev()
        .map(|id| Pending::Indirect(*id))
        .collect();
    let mut visited: HashSet<ObjectId> = HashSet::new();
    let mut found = Vec::new();

    while let Some(next) = stack.pop() {
        let (id, object) = match next {
            Pending::Indirect(id) => {
                if !visited.insert(id) {
                    continue;
                }
                match doc.get_object(id) {
                    Ok(object) => (Some(id), object),
                    Err(e) => {
                        debug!(object = ?id, error = %e, "skipping unresolvable reference");
                        continue;
                    }
                }
            }
            Pending::Direct(object) => (None, object),
        };

        let dict = match object {
            Object::Dictionary(dict) => dict,
            Object::Stream(stream) => &stream.dict,
            Object::Array(items) => {
                stack.extend(items.iter().rev().map(Pending::from));
                continue;
            }
            Object::Reference(target) => {
                stack.push(Pending::Indirect(*target));
                continue;
            }
            _ => continue,
        };

        if let Some(subtype) = matching_subtype(dict, subtypes) {
            let embedded = EmbeddedObject {
                id,
                subtype: subtype.to_vec(),
                object: object.clone(),
            };
            debug!(found = %embedded.describe(), "embedded object");
            found.push(embedded);
        }

        let mut entries: Vec<(&Vec<u8>, &Object)> = dict
            .iter()
            .filter(|(key, _)| key.as_slice() != b"Parent")
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        stack.extend(entries.into_iter().rev().map(|(_, value)| Pending::from(value)));
    }

    found
}

/// `/Type` must be `/XObject` or absent, `/Subtype` one of `subtypes`
fn matching_subtype<'a>(dict: &'a Dictionary, subtypes: &[Vec<u8>]) -> Option<&'a [u8]> {
    match dict.get(b"Type") {
        Ok(Object::Name(name)) if name.as_slice() == b"XObject" => {}
        Ok(_) => return None,
        Err(_) => {}
    }

    match dict.get(b"Subtype") {
        Ok(Object::Name(name)) if subtypes.iter().any(|s| s == name) => Some(name.as_slice()),
        _ => None,
    }
}
