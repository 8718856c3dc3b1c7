//! Rule-based building blocks shared by all dialects.

pub mod amounts;
pub mod fields;
pub mod header_rows;
pub mod patterns;
pub mod transactions;

pub use amounts::{format_amount, parse_grouped_decimal, parse_grouped_integer};
pub use fields::{coerce, extract_text, extract_value, ScalarRule, Slot};
pub use header_rows::{HeaderRow, HeaderRowResolver};
pub use transactions::TransactionStrategy;
