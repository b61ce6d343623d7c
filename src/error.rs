//! Error types for the deembed library

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the deembed library
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not end in `.pdf`
    #[error("File is not a .pdf file.")]
    NotPdf,

    /// Scan finished without a single form XObject
    #[error("No embedded pages found.")]
    NoEmbeddedPages,

    /// PDF processing error (parse failure, broken object graph)
    #[error("Malformed document: {0}")]
    Malformed(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An embedded object that cannot be turned into a page
    #[error("Unsupported structure: {0}")]
    UnsupportedStructure(String),
}

/// Flat classification of [`Error`], used by the CLI for exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotPdf,
    NoEmbeddedPages,
    Malformed,
    Io,
    UnsupportedStructure,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotPdf => ErrorKind::NotPdf,
            Error::NoEmbeddedPages => ErrorKind::NoEmbeddedPages,
            Error::Malformed(_) => ErrorKind::Malformed,
            Error::Io(_) => ErrorKind::Io,
            Error::UnsupportedStructure(_) => ErrorKind::UnsupportedStructure,
        }
    }
}

impl ErrorKind {
    /// Process exit status for this kind of failure.
    ///
    /// 0 is success and 2/3 are taken by the CLI for usage and missing files.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::NotPdf => 4,
            ErrorKind::NoEmbeddedPages => 5,
            ErrorKind::Malformed => 6,
            ErrorKind::UnsupportedStructure => 7,
            ErrorKind::Io => 8,
        }
    }
}
