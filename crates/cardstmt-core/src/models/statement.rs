//! Credit-card statement data models.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured data extracted from one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRecord {
    /// Cardholder name as printed on the statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,

    /// Issuing bank, taken from the dialect rather than the text.
    pub bank_name: String,

    /// Statement date in the issuer's own notation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_date: Option<String>,

    /// Last four digits of the card number, where the issuer prints them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_last4: Option<String>,

    /// Dialect-specific scalar fields that were found in the text.
    #[serde(default)]
    pub fields: BTreeMap<FieldName, FieldValue>,

    /// Transactions in order of appearance.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl StatementRecord {
    /// Create an empty record for the given bank.
    pub fn new(bank_name: impl Into<String>) -> Self {
        Self {
            cardholder_name: None,
            bank_name: bank_name.into(),
            statement_date: None,
            account_last4: None,
            fields: BTreeMap::new(),
            transactions: Vec::new(),
        }
    }

    /// Look up a scalar field.
    pub fn field(&self, name: FieldName) -> Option<&FieldValue> {
        self.fields.get(&name)
    }

    /// Flat key/value view of everything except transactions.
    ///
    /// Only present values are listed.
    pub fn card_info(&self) -> Vec<(String, String)> {
        let mut rows = Vec::with_capacity(4 + self.fields.len());

        if let Some(name) = &self.cardholder_name {
            rows.push(("cardholder_name".to_string(), name.clone()));
        }
        rows.push(("bank_name".to_string(), self.bank_name.clone()));
        if let Some(date) = &self.statement_date {
            rows.push(("statement_date".to_string(), date.clone()));
        }
        if let Some(last4) = &self.account_last4 {
            rows.push(("account_last4".to_string(), last4.clone()));
        }

        for (name, value) in &self.fields {
            rows.push((name.as_str().to_string(), value.to_string()));
        }

        rows
    }

    /// Sum of all debit amounts.
    pub fn debit_total(&self) -> Decimal {
        self.total_of(TransactionType::Debit)
    }

    /// Sum of all credit amounts.
    pub fn credit_total(&self) -> Decimal {
        self.total_of(TransactionType::Credit)
    }

    fn total_of(&self, kind: TransactionType) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }
}

/// Names of the dialect-specific scalar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    PaymentDueDate,
    TotalDues,
    MinimumAmountDue,
    NewBalance,
    MinimumPaymentDue,
    CreditLimit,
    AvailableCredit,
    AvailableCashLimit,
    CashAccessLine,
}

impl FieldName {
    /// Snake-case key used in serialized output and tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentDueDate => "payment_due_date",
            Self::TotalDues => "total_dues",
            Self::MinimumAmountDue => "minimum_amount_due",
            Self::NewBalance => "new_balance",
            Self::MinimumPaymentDue => "minimum_payment_due",
            Self::CreditLimit => "credit_limit",
            Self::AvailableCredit => "available_credit",
            Self::AvailableCashLimit => "available_cash_limit",
            Self::CashAccessLine => "cash_access_line",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed scalar value.
///
/// The variant is decided by the shape of the matched token: dates keep
/// their raw text, amounts with a decimal point become `Decimal`, whole
/// amounts become `Integer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Decimal(Decimal),
    Date(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::Date(s) => f.write_str(s),
        }
    }
}

/// A single statement line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date in the issuer's notation (the year may be missing).
    pub date: String,

    /// Merchant or payment description, trimmed.
    pub description: String,

    /// Absolute amount; the direction lives in `kind`.
    pub amount: Decimal,

    /// Credit or debit.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn txn(amount: &str, kind: TransactionType) -> Transaction {
        Transaction {
            date: "03/04".to_string(),
            description: "TEST".to_string(),
            amount: Decimal::from_str(amount).unwrap(),
            kind,
        }
    }

    #[test]
    fn test_card_info_lists_present_fields_only() {
        let mut record = StatementRecord::new("HDFC");
        record.statement_date = Some("12/05/2023".to_string());
        record
            .fields
            .insert(FieldName::CreditLimit, FieldValue::Integer(100000));
        record.fields.insert(
            FieldName::PaymentDueDate,
            FieldValue::Date("15/06/2023".to_string()),
        );

        let info = record.card_info();
        let keys: Vec<&str> = info.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["bank_name", "statement_date", "payment_due_date", "credit_limit"]
        );
        assert_eq!(info[3].1, "100000");
    }

    #[test]
    fn test_totals_by_type() {
        let mut record = StatementRecord::new("Chase");
        record.transactions = vec![
            txn("4.50", TransactionType::Debit),
            txn("10.00", TransactionType::Credit),
            txn("1.25", TransactionType::Debit),
        ];

        assert_eq!(record.debit_total(), Decimal::from_str("5.75").unwrap());
        assert_eq!(record.credit_total(), Decimal::from_str("10.00").unwrap());
    }

    #[test]
    fn test_serialized_shape() {
        let mut record = StatementRecord::new("Chase");
        record
            .fields
            .insert(FieldName::CashAccessLine, FieldValue::Integer(500));
        record.transactions.push(txn("4.50", TransactionType::Debit));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["bank_name"], "Chase");
        assert!(json.get("cardholder_name").is_none());
        assert_eq!(json["fields"]["cash_access_line"], 500);
        assert_eq!(json["transactions"][0]["type"], "debit");
    }
}
