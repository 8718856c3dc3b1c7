//! PDF processing module.
//!
//! Turns a statement PDF into the single text blob the statement engine
//! consumes. Text recovery is lossy: pages without extractable text are
//! skipped silently.

mod extractor;

pub use extractor::{PdfContent, PdfExtractor, PdfPage};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF, one page after another.
    fn extract_text(&self) -> Result<String>;
}
