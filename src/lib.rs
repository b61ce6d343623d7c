//! pdfu library
//!
//! Extracts the form XObjects embedded in a PDF and writes each of them as a
//! standalone page of a new PDF next to the input file.
//! This library provides functionality to:
//! - Normalize a PDF through a sanitizing re-save
//! - Find form XObjects reachable from the document's pages
//! - Wrap each one into a page and write the result
//!
//! # Example
//!
//! ```no_run
//! use pdfu::pdf::deembed;
//! use std::path::Path;
//!
//! let report = deembed(Path::new("slides.pdf"));
//! if report.success {
//!     println!("written to {}", report.output_path);
//! } else {
//!     println!("failed: {}", report.error);
//! }
//! ```

pub mod error;
pub mod paths;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, ErrorKind, Result};
