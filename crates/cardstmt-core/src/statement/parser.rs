//! Dialect-driven statement parser.

use std::time::Instant;

use tracing::{debug, info};

use super::dialect::{Dialect, DialectRegistry};
use super::lines::LineStream;
use super::rules::{HeaderRowResolver, Slot};
use super::{Result, StatementExtractor};
use crate::models::statement::StatementRecord;

/// Result of statement extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted statement data.
    pub record: StatementRecord,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Fields the dialect knows about that were not found.
    pub missing_fields: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Parser for one issuer dialect.
///
/// Holds no state between calls; one parser can be shared across threads.
#[derive(Clone, Copy)]
pub struct StatementParser {
    dialect: &'static dyn Dialect,
}

impl StatementParser {
    /// Create a parser for the dialect registered under `id`.
    pub fn new(id: &str) -> Result<Self> {
        DialectRegistry::get(id).map(Self::with_dialect)
    }

    /// Create a parser for a known dialect.
    pub fn with_dialect(dialect: &'static dyn Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &'static dyn Dialect {
        self.dialect
    }

    /// Parse statement text.
    pub fn parse(&self, text: &str) -> Result<ExtractionResult> {
        let start = Instant::now();
        let dialect = self.dialect;
        let stream = LineStream::new(text);
        let mut record = StatementRecord::new(dialect.bank_name());
        let mut warnings = Vec::new();
        let mut missing_fields = Vec::new();

        info!(
            "Parsing {} statement from {} characters of text",
            dialect.bank_name(),
            text.len()
        );

        for rule in dialect.scalar_rules() {
            let found = rule.apply(text, &mut record)?;
            if !found {
                let slot = rule.slot();
                debug!("No match for {}", slot.name());
                if !matches!(slot, Slot::Field(_)) {
                    warnings.push(format!("Could not extract {}", slot.name().replace('_', " ")));
                }
                missing_fields.push(slot.name().to_string());
            }
        }

        let header_rows = dialect.header_rows();
        let resolved = HeaderRowResolver::new(header_rows).resolve(&stream.filtered_lines())?;
        for row in header_rows {
            for field in row.fields {
                if !resolved.contains_key(field) {
                    missing_fields.push(field.as_str().to_string());
                }
            }
        }
        record.fields.extend(resolved);

        record.transactions = dialect.transaction_strategy().scan(stream)?;
        if record.transactions.is_empty() {
            warnings.push("No transactions found".to_string());
        }

        debug!(
            "Extracted {} fields and {} transactions ({} missing)",
            record.fields.len(),
            record.transactions.len(),
            missing_fields.len()
        );

        Ok(ExtractionResult {
            record,
            warnings,
            missing_fields,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl std::fmt::Debug for StatementParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatementParser")
            .field("dialect", &self.dialect.id())
            .finish()
    }
}

impl StatementExtractor for StatementParser {
    fn extract_from_text(&self, text: &str) -> Result<StatementRecord> {
        self.parse(text).map(|r| r.record)
    }
}
