//! Labeled single-field extraction and token coercion.

use regex::Regex;
use tracing::trace;

use super::amounts::{parse_grouped_decimal, parse_grouped_integer};
use crate::error::ExtractionError;
use crate::models::statement::{FieldName, FieldValue, StatementRecord};
use crate::statement::Result;

/// Coerce a matched token by its shape.
///
/// Tokens containing `/` are dates and stay as written. Tokens containing
/// `.` become decimals, everything else an integer, both after removing
/// grouping commas. A token that has a numeric shape but does not parse is
/// an error, never an absent field. That includes figures beyond the range of
/// `i64` or the 28 significant digits of `Decimal`.
pub fn coerce(token: &str, field: &str) -> Result<FieldValue> {
    let malformed = || ExtractionError::Parse {
        field: field.to_string(),
        value: token.to_string(),
    };

    if token.contains('/') {
        Ok(FieldValue::Date(token.to_string()))
    } else if token.contains('.') {
        parse_grouped_decimal(token)
            .map(FieldValue::Decimal)
            .ok_or_else(malformed)
    } else {
        parse_grouped_integer(token)
            .map(FieldValue::Integer)
            .ok_or_else(malformed)
    }
}

/// Capture `group` of the first match of `pattern`, trimmed.
///
/// Returns `None` when the pattern does not match or the capture is blank.
pub fn extract_text(text: &str, pattern: &Regex, group: usize) -> Option<String> {
    let caps = pattern.captures(text)?;
    let value = caps.get(group)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Capture `group` of the first match of `pattern` and coerce it.
pub fn extract_value(
    text: &str,
    pattern: &Regex,
    group: usize,
    field: FieldName,
) -> Result<Option<FieldValue>> {
    extract_text(text, pattern, group)
        .map(|token| coerce(&token, field.as_str()))
        .transpose()
}

/// Record slot a scalar rule fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    CardholderName,
    StatementDate,
    AccountLast4,
    Field(FieldName),
}

impl Slot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CardholderName => "cardholder_name",
            Self::StatementDate => "statement_date",
            Self::AccountLast4 => "account_last4",
            Self::Field(field) => field.as_str(),
        }
    }
}

/// A single-field rule: a slot plus one or more `(pattern, group)`
/// alternatives, tried in order until one matches.
#[derive(Debug, Clone)]
pub struct ScalarRule {
    slot: Slot,
    alternatives: Vec<(&'static Regex, usize)>,
}

impl ScalarRule {
    /// Create a rule from its primary pattern.
    pub fn new(slot: Slot, pattern: &'static Regex, group: usize) -> Self {
        Self {
            slot,
            alternatives: vec![(pattern, group)],
        }
    }

    /// Add a fallback pattern, used only when the earlier ones do not match.
    pub fn or_else(mut self, pattern: &'static Regex, group: usize) -> Self {
        self.alternatives.push((pattern, group));
        self
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Apply the rule to `text`, storing the value in `record`.
    ///
    /// Returns whether a value was found.
    pub fn apply(&self, text: &str, record: &mut StatementRecord) -> Result<bool> {
        for (pattern, group) in &self.alternatives {
            let Some(token) = extract_text(text, pattern, *group) else {
                continue;
            };
            trace!("{} matched {:?}", self.slot.name(), token);

            match self.slot {
                Slot::CardholderName => record.cardholder_name = Some(token),
                Slot::StatementDate => record.statement_date = Some(token),
                Slot::AccountLast4 => record.account_last4 = Some(token),
                Slot::Field(field) => {
                    let value = coerce(&token, field.as_str())?;
                    record.fields.insert(field, value);
                }
            }
            return Ok(true);
        }

        Ok(false)
    }
}
