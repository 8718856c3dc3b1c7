//! HDFC Bank credit-card statements.
//!
//! Expected text after PDF-to-text:
//!   Name : JOHN DOE
//!   Statement Date : 12/05/2023
//!   Payment Due Date   Total Dues   Minimum Amount Due
//!   15/06/2023   4,500.00   500.00
//!   Credit Limit   Available Credit Limit   Available Cash Limit
//!   1,00,000   95,500   40,000
//!   01/05/2023 13:45:00 AMAZON RETAIL 1,999.00
//!   03/05/2023 09:10:11 PAYMENT RECEIVED 4,000.00Cr

use super::Dialect;
use crate::models::statement::FieldName;
use crate::statement::rules::patterns::{HDFC_NAME, HDFC_STATEMENT_DATE, HDFC_TRANSACTION};
use crate::statement::rules::{HeaderRow, ScalarRule, Slot, TransactionStrategy};

const HEADER_ROWS: &[HeaderRow] = &[
    HeaderRow {
        label: "Payment Due Date",
        fields: &[
            FieldName::PaymentDueDate,
            FieldName::TotalDues,
            FieldName::MinimumAmountDue,
        ],
    },
    HeaderRow {
        label: "Credit Limit",
        fields: &[
            FieldName::CreditLimit,
            FieldName::AvailableCredit,
            FieldName::AvailableCashLimit,
        ],
    },
];

/// HDFC layout: header/value rows and timestamped Cr/Dr transactions.
pub struct HdfcDialect;

impl Dialect for HdfcDialect {
    fn id(&self) -> &'static str {
        "hdfc"
    }

    fn bank_name(&self) -> &'static str {
        "HDFC"
    }

    fn scalar_rules(&self) -> Vec<ScalarRule> {
        vec![
            ScalarRule::new(Slot::CardholderName, &HDFC_NAME, 1),
            ScalarRule::new(Slot::StatementDate, &HDFC_STATEMENT_DATE, 1),
        ]
    }

    fn header_rows(&self) -> &'static [HeaderRow] {
        HEADER_ROWS
    }

    fn transaction_strategy(&self) -> TransactionStrategy {
        TransactionStrategy::InlineTimestamp {
            pattern: &HDFC_TRANSACTION,
            credit_marker: "Cr",
        }
    }

    fn markers(&self) -> &'static [&'static str] {
        &["hdfc", "total dues", "minimum amount due", "available cash limit"]
    }
}
