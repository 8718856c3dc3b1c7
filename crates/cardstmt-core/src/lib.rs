//! Core library for credit-card statement parsing.
//!
//! This crate provides:
//! - PDF text extraction (the text source for statements)
//! - A rule-based extraction engine with one dialect per issuing bank
//! - Statement data models and configuration

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{CardstmtError, ExtractionError, PdfError, Result};
pub use models::config::CardstmtConfig;
pub use models::statement::{FieldName, FieldValue, StatementRecord, Transaction, TransactionType};
pub use pdf::{PdfContent, PdfExtractor, PdfProcessor};
pub use statement::{
    parse_statement, Dialect, DialectRegistry, ExtractionResult, StatementExtractor,
    StatementParser,
};
