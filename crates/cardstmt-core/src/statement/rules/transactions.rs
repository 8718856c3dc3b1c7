//! Transaction scanning.
//!
//! Patterns must provide the named groups `date`, `desc` and `amount`;
//! marker-based patterns also provide `marker`.

use regex::{Captures, Regex};
use rust_decimal::Decimal;
use tracing::debug;

use super::amounts::parse_grouped_decimal;
use crate::error::ExtractionError;
use crate::models::statement::{Transaction, TransactionType};
use crate::statement::lines::LineStream;
use crate::statement::Result;

/// How a dialect finds its transaction records.
#[derive(Debug, Clone, Copy)]
pub enum TransactionStrategy {
    /// Records are found anywhere in the continuous text and may span line
    /// breaks. A `marker` equal to `credit_marker` makes a credit; a
    /// missing or different marker makes a debit.
    InlineTimestamp {
        pattern: &'static Regex,
        credit_marker: &'static str,
    },

    /// Each physical line is matched on its own. A negative amount is a
    /// debit, anything else a credit.
    SignedLine { pattern: &'static Regex },
}

impl TransactionStrategy {
    /// Find every transaction in document order.
    pub fn scan(&self, stream: LineStream<'_>) -> Result<Vec<Transaction>> {
        let transactions = match *self {
            Self::InlineTimestamp {
                pattern,
                credit_marker,
            } => scan_inline(stream.text(), pattern, credit_marker)?,
            Self::SignedLine { pattern } => scan_lines(stream, pattern)?,
        };

        debug!("Found {} transactions", transactions.len());
        Ok(transactions)
    }
}

fn scan_inline(text: &str, pattern: &Regex, credit_marker: &str) -> Result<Vec<Transaction>> {
    let mut out = Vec::new();

    for caps in pattern.captures_iter(text) {
        let amount = parse_amount(&caps)?;
        let kind = match caps.name("marker") {
            Some(m) if m.as_str() == credit_marker => TransactionType::Credit,
            _ => TransactionType::Debit,
        };

        out.push(build(&caps, amount.abs(), kind));
    }

    Ok(out)
}

fn scan_lines(stream: LineStream<'_>, pattern: &Regex) -> Result<Vec<Transaction>> {
    let mut out = Vec::new();

    for line in stream.raw() {
        let Some(caps) = pattern.captures(line.trim()) else {
            continue;
        };

        let amount = parse_amount(&caps)?;
        let kind = if amount < Decimal::ZERO {
            TransactionType::Debit
        } else {
            TransactionType::Credit
        };

        out.push(build(&caps, amount.abs(), kind));
    }

    Ok(out)
}

fn parse_amount(caps: &Captures<'_>) -> Result<Decimal> {
    let token = &caps["amount"];
    parse_grouped_decimal(token).ok_or_else(|| ExtractionError::Parse {
        field: "transaction amount".to_string(),
        value: token.to_string(),
    })
}

fn build(caps: &Captures<'_>, amount: Decimal, kind: TransactionType) -> Transaction {
    Transaction {
        date: caps["date"].to_string(),
        description: caps["desc"].trim().to_string(),
        amount,
        kind,
    }
}
