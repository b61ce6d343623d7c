//! PDF deembedding module

pub mod deembed;
pub mod metadata;
pub mod sanitize;
pub mod scan;
pub mod wrap;
pub mod write;

// Re-export commonly used items
pub use deembed::{deembed, deembed_pdf, DeembedOptions, DeembedReport};
pub use metadata::{count_pages, page_boxes};
pub use sanitize::sanitize;
pub use scan::{find_embedded_objects, EmbeddedObject};
pub use wrap::{wrap_object, WrapGeometry, WrappedPage};
pub use write::write_pages;
