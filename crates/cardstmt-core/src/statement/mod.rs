//! Credit-card statement extraction module.

pub mod dialect;
pub mod lines;
mod parser;
pub mod rules;

pub use dialect::{Dialect, DialectRegistry};
pub use lines::LineStream;
pub use parser::{ExtractionResult, StatementParser};

use crate::error::ExtractionError;
use crate::models::statement::StatementRecord;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for statement extractors.
pub trait StatementExtractor {
    /// Extract statement data from plain text.
    fn extract_from_text(&self, text: &str) -> Result<StatementRecord>;
}

/// Parse `text` with the dialect registered under `dialect_id`.
///
/// An unknown identifier fails with
/// [`ExtractionError::UnsupportedDialect`] before any text is examined.
pub fn parse_statement(dialect_id: &str, text: &str) -> Result<StatementRecord> {
    StatementParser::new(dialect_id)?.extract_from_text(text)
}
