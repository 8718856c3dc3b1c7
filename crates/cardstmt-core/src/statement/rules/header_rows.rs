//! Header/value-row resolution.
//!
//! Some issuers print a label line ("Payment Due Date  Total Dues ...")
//! and put the values on the next line. The values are assigned to the
//! label's declared fields by position.

use std::collections::BTreeMap;

use tracing::debug;

use super::fields::coerce;
use super::patterns::{VALUE_ROW_TOKEN, WHITESPACE_RUN};
use crate::models::statement::{FieldName, FieldValue};
use crate::statement::Result;

/// A label and the fields its value row fills, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRow {
    pub label: &'static str,
    pub fields: &'static [FieldName],
}

/// Forward-only scanner over filtered lines.
pub struct HeaderRowResolver<'a> {
    rows: &'a [HeaderRow],
}

impl<'a> HeaderRowResolver<'a> {
    pub fn new(rows: &'a [HeaderRow]) -> Self {
        Self { rows }
    }

    /// Resolve all header rows in `lines`.
    ///
    /// Tokens are zipped with the declared fields and the shorter side
    /// wins: a value row with fewer columns leaves the trailing fields
    /// absent, extra tokens are ignored. A label that appears again later
    /// overwrites the earlier values.
    pub fn resolve(&self, lines: &[&str]) -> Result<BTreeMap<FieldName, FieldValue>> {
        let mut values = BTreeMap::new();
        if self.rows.is_empty() {
            return Ok(values);
        }

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];

            if let Some(row) = self.rows.iter().find(|row| line.contains(row.label)) {
                match lines.get(i + 1) {
                    Some(value_line) => {
                        let collapsed = WHITESPACE_RUN.replace_all(value_line, " ");
                        let tokens: Vec<&str> = VALUE_ROW_TOKEN
                            .find_iter(&collapsed)
                            .map(|m| m.as_str())
                            .collect();

                        debug!(
                            "Header '{}' at line {}: {} values for {} fields",
                            row.label,
                            i,
                            tokens.len(),
                            row.fields.len()
                        );

                        for (field, token) in row.fields.iter().zip(&tokens) {
                            values.insert(*field, coerce(token, field.as_str())?);
                        }

                        // The value line is consumed
                        i += 1;
                    }
                    None => debug!("Header '{}' on the last line has no values", row.label),
                }
            }

            i += 1;
        }

        Ok(values)
    }
}
