//! Error types for the cardstmt-core library.

use thiserror::Error;

/// Main error type for the cardstmt library.
#[derive(Error, Debug)]
pub enum CardstmtError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Statement extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to statement field extraction.
///
/// A field whose pattern does not match is not an error; it is simply absent
/// from the resulting record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The caller asked for an issuer format that is not registered.
    #[error("unsupported dialect '{requested}' (supported: {supported})")]
    UnsupportedDialect { requested: String, supported: String },

    /// A token shaped like a number could not be parsed as one.
    #[error("failed to parse {field}: {value}")]
    Parse { field: String, value: String },
}

impl ExtractionError {
    /// Whether this error was raised because of the dialect identifier
    /// rather than the statement text.
    pub fn is_unsupported_dialect(&self) -> bool {
        matches!(self, Self::UnsupportedDialect { .. })
    }
}

/// Result type for the cardstmt library.
pub type Result<T> = std::result::Result<T, CardstmtError>;
