//! Amount parsing for statement figures written with comma grouping
//! (e.g. "1,23,456.00" or "4,500").

use rust_decimal::Decimal;
use std::str::FromStr;

/// Remove grouping separators from a numeric token.
pub fn strip_grouping(s: &str) -> String {
    s.chars().filter(|c| *c != ',').collect()
}

/// Parse a decimal amount such as "1,234.56" or "-4.50".
pub fn parse_grouped_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(&strip_grouping(s.trim())).ok()
}

/// Parse a whole amount such as "1,234".
pub fn parse_grouped_integer(s: &str) -> Option<i64> {
    strip_grouping(s.trim()).parse().ok()
}

/// Format an amount with two decimals and comma thousand separators.
pub fn format_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount.abs());
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();
    if amount.is_sign_negative() && !amount.is_zero() {
        formatted.push('-');
    }

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    format!("{}.{}", formatted, decimal_part)
}
