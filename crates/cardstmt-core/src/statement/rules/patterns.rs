//! Common regex patterns for statement extraction.
//!
//! Transaction patterns use the named groups `date`, `desc`, `amount` and,
//! for marker-based formats, `marker`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Shared by the header/value-row resolver
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    /// Full date, decimal amount or bare integer, in that priority.
    pub static ref VALUE_ROW_TOKEN: Regex = Regex::new(
        r"\d{2}/\d{2}/\d{4}|[\d,]+\.\d{2}|[\d,]+"
    ).unwrap();

    // HDFC
    pub static ref HDFC_NAME: Regex = Regex::new(
        r"Name\s*:\s*(.+)"
    ).unwrap();

    pub static ref HDFC_STATEMENT_DATE: Regex = Regex::new(
        r"Statement Date\s*:\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    /// Date, time of day, description, amount and optional Cr/Dr suffix.
    /// Applied to the whole text, so a record may straddle a line break.
    pub static ref HDFC_TRANSACTION: Regex = Regex::new(concat!(
        r"(?P<date>\d{2}/\d{2}/\d{4})\s+\d{2}:\d{2}:\d{2}\s+",
        r"(?P<desc>.+?)\s+",
        r"(?P<amount>[\d,]+\.\d{2})(?P<marker>Cr|Dr)?"
    )).unwrap();

    // Chase
    /// Upper-case name on the line right above an "APT" street address.
    pub static ref CHASE_CARDHOLDER: Regex = Regex::new(
        r"\r?\n([A-Z][A-Z ]+)\r?\n\d{1,5} [A-Z ]+ APT \d+"
    ).unwrap();

    pub static ref CHASE_STATEMENT_DATE: Regex = Regex::new(
        r"Statement Date[: ]+(\d{2}/\d{2}/\d{2,4})"
    ).unwrap();

    pub static ref CHASE_OPENING_CLOSING: Regex = Regex::new(
        r"Opening/Closing Date (\d{2}/\d{2}/\d{2,4}) - (\d{2}/\d{2}/\d{2,4})"
    ).unwrap();

    pub static ref CHASE_ACCOUNT_NUMBER: Regex = Regex::new(
        r"Account Number:\s+XXXX XXXX XXXX (\d{4})"
    ).unwrap();

    pub static ref CHASE_PAYMENT_DUE_DATE: Regex = Regex::new(
        r"Payment Due Date[: ]+(\d{2}/\d{2}/\d{2,4})"
    ).unwrap();

    pub static ref CHASE_NEW_BALANCE: Regex = Regex::new(
        r"New Balance[: ]+\$?([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref CHASE_MINIMUM_PAYMENT: Regex = Regex::new(
        r"Minimum Payment Due[: ]+\$?([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref CHASE_CREDIT_LINES: Regex = Regex::new(concat!(
        r"Credit Limit[: ]+\$?([\d,]+)\s+",
        r"Available Credit[: ]+\$?([\d,]+)\s+",
        r"Cash Access Line[: ]+\$?([\d,]+)"
    )).unwrap();

    /// MM/DD, description, signed amount; anchored to a whole trimmed line.
    pub static ref CHASE_TRANSACTION: Regex = Regex::new(concat!(
        r"^(?P<date>\d{2}/\d{2})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?P<amount>-?\d[\d,]*\.\d{2})$"
    )).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_row_token_priority() {
        let tokens: Vec<&str> = VALUE_ROW_TOKEN
            .find_iter("15/06/2023 4,500.00 500")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(tokens, vec!["15/06/2023", "4,500.00", "500"]);
    }

    #[test]
    fn test_chase_credit_lines_requires_all_three() {
        let text = "Credit Limit: $5,000 Available Credit: $4,200 Cash Access Line: $1,000";
        assert!(CHASE_CREDIT_LINES.is_match(text));
        assert!(!CHASE_CREDIT_LINES.is_match("Credit Limit: $5,000 Available Credit: $4,200"));
    }

    #[test]
    fn test_chase_transaction_is_line_anchored() {
        assert!(CHASE_TRANSACTION.is_match("03/04 COFFEE SHOP -4.50"));
        assert!(!CHASE_TRANSACTION.is_match("03/04 COFFEE SHOP -4.50 extra"));
        assert!(!CHASE_TRANSACTION.is_match("ref 03/04 COFFEE SHOP -4.50"));
    }
}
