//! Statement loading and dialect selection shared by process and batch.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use cardstmt_core::models::config::CardstmtConfig;
use cardstmt_core::pdf::{PdfExtractor, PdfProcessor};
use cardstmt_core::statement::{DialectRegistry, StatementParser};

/// Dialect identifier that asks for marker-based detection.
pub const AUTO_DIALECT: &str = "auto";

/// Dialect selection, settled before any input is read.
#[derive(Debug, Clone, Copy)]
pub enum DialectChoice {
    /// A registered dialect named on the command line or in the config.
    Fixed(StatementParser),
    /// Detect per statement from marker phrases.
    Detect,
}

impl DialectChoice {
    /// Resolve `requested`, falling back to the configured default.
    ///
    /// Unknown identifiers fail here, before any file is touched.
    pub fn resolve(requested: Option<&str>, config: &CardstmtConfig) -> anyhow::Result<Self> {
        let id = requested
            .or(config.extraction.default_dialect.as_deref())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No dialect given. Use --dialect with one of: {}, {}",
                    DialectRegistry::supported().join(", "),
                    AUTO_DIALECT
                )
            })?;

        if id.trim().eq_ignore_ascii_case(AUTO_DIALECT) {
            return Ok(Self::Detect);
        }

        Ok(Self::Fixed(StatementParser::new(id)?))
    }

    /// The parser to use for `text`.
    pub fn parser_for(&self, text: &str) -> anyhow::Result<StatementParser> {
        match self {
            Self::Fixed(parser) => Ok(*parser),
            Self::Detect => {
                let dialect = DialectRegistry::detect(text).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Could not detect the statement's issuer (supported: {})",
                        DialectRegistry::supported().join(", ")
                    )
                })?;
                info!("Detected dialect: {}", dialect.id());
                Ok(StatementParser::with_dialect(dialect))
            }
        }
    }
}

/// Read statement text from a PDF or an already-extracted text file.
///
/// Short or empty text is only warned about; parsing it yields an empty record.
pub fn read_statement_text(path: &Path, config: &CardstmtConfig) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = if extension == "pdf" {
        let data = fs::read(path)?;
        let mut extractor = PdfExtractor::new().with_max_pages(config.pdf.max_pages);
        extractor.load(&data)?;

        let content = extractor.extract_all()?;
        debug!(
            "PDF has {} pages, {} with text",
            extractor.page_count(),
            content.pages.len()
        );
        for page in &content.pages {
            debug!("Page {}: {} chars", page.number, page.text.len());
        }
        content.text
    } else {
        fs::read_to_string(path)?
    };

    if text.trim().len() < config.pdf.min_text_length {
        warn!(
            "Only {} characters of text recovered from {}",
            text.trim().len(),
            path.display()
        );
    }

    Ok(text)
}
