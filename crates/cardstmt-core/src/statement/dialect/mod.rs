//! Issuer dialects and their registry.
//!
//! A dialect bundles the bank name, single-field rules, header/value-row
//! registrations and the transaction strategy for one issuer's layout.
//! Supporting a new issuer means adding a module here and one entry to
//! [`DIALECTS`]; the extraction framework stays untouched.

mod chase;
mod hdfc;

pub use chase::ChaseDialect;
pub use hdfc::HdfcDialect;

use tracing::debug;

use super::rules::{HeaderRow, ScalarRule, TransactionStrategy};
use super::Result;
use crate::error::ExtractionError;

/// Extraction rules for one issuer.
pub trait Dialect: Send + Sync {
    /// Identifier callers select the dialect with (lower-case).
    fn id(&self) -> &'static str;

    /// Bank name stored in every record this dialect produces.
    fn bank_name(&self) -> &'static str;

    /// Single-field rules, applied to the whole text.
    fn scalar_rules(&self) -> Vec<ScalarRule>;

    /// Label lines whose following line holds positional values.
    fn header_rows(&self) -> &'static [HeaderRow] {
        &[]
    }

    fn transaction_strategy(&self) -> TransactionStrategy;

    /// Lower-case phrases that suggest a text belongs to this issuer.
    fn markers(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Registered dialects, in detection tie-break order.
static DIALECTS: &[&dyn Dialect] = &[&HdfcDialect, &ChaseDialect];

/// Lookup of the registered dialects.
pub struct DialectRegistry;

impl DialectRegistry {
    /// All registered dialects.
    pub fn all() -> &'static [&'static dyn Dialect] {
        DIALECTS
    }

    /// Identifiers of all registered dialects.
    pub fn supported() -> Vec<&'static str> {
        DIALECTS.iter().map(|d| d.id()).collect()
    }

    /// Find a dialect by identifier, ignoring case and surrounding space.
    pub fn get(id: &str) -> Result<&'static dyn Dialect> {
        let wanted = id.trim().to_lowercase();
        DIALECTS
            .iter()
            .copied()
            .find(|d| d.id() == wanted)
            .ok_or_else(|| ExtractionError::UnsupportedDialect {
                requested: id.trim().to_string(),
                supported: Self::supported().join(", "),
            })
    }

    /// Guess the dialect of `text` from marker phrases.
    ///
    /// The dialect with the most distinct markers present wins; ties go to
    /// the earlier registration. Returns `None` when nothing matches.
    pub fn detect(text: &str) -> Option<&'static dyn Dialect> {
        let haystack = text.to_lowercase();
        let mut best: Option<(&'static dyn Dialect, usize)> = None;

        for dialect in DIALECTS.iter().copied() {
            let hits = dialect
                .markers()
                .iter()
                .filter(|marker| haystack.contains(*marker))
                .count();
            debug!("Dialect {} matched {} markers", dialect.id(), hits);

            if hits > 0 && best.is_none_or(|(_, top)| hits > top) {
                best = Some((dialect, hits));
            }
        }

        best.map(|(dialect, _)| dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_supported_dialects() {
        assert_eq!(DialectRegistry::supported(), vec!["hdfc", "chase"]);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        assert_eq!(DialectRegistry::get("HDFC").unwrap().bank_name(), "HDFC");
        assert_eq!(DialectRegistry::get(" Chase ").unwrap().bank_name(), "Chase");
    }

    #[test]
    fn test_get_unknown() {
        let err = DialectRegistry::get("citibank").err().unwrap();
        assert!(err.is_unsupported_dialect());
        assert_eq!(
            err.to_string(),
            "unsupported dialect 'citibank' (supported: hdfc, chase)"
        );
    }

    #[test]
    fn test_detect() {
        let hdfc = "HDFC Bank Credit Card Statement\nTotal Dues\nMinimum Amount Due";
        assert_eq!(DialectRegistry::detect(hdfc).map(|d| d.id()), Some("hdfc"));

        let chase = "CHASE\nOpening/Closing Date 04/01/24 - 04/30/24\nCash Access Line: $1,000";
        assert_eq!(DialectRegistry::detect(chase).map(|d| d.id()), Some("chase"));

        assert!(DialectRegistry::detect("grocery list").is_none());
    }
}
