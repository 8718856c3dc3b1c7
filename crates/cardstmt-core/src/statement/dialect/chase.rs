//! Chase credit-card statements.
//!
//! Expected text after PDF-to-text:
//!   Opening/Closing Date 04/01/24 - 04/30/24
//!   Account Number: XXXX XXXX XXXX 1234
//!   JANE Q PUBLIC
//!   123 MAIN ST APT 4
//!   New Balance: $1,234.56
//!   04/03     COFFEE SHOP                    -4.50
//!   04/05     PAYMENT THANK YOU              200.00

use super::Dialect;
use crate::models::statement::FieldName;
use crate::statement::rules::patterns::{
    CHASE_ACCOUNT_NUMBER, CHASE_CARDHOLDER, CHASE_CREDIT_LINES, CHASE_MINIMUM_PAYMENT,
    CHASE_NEW_BALANCE, CHASE_OPENING_CLOSING, CHASE_PAYMENT_DUE_DATE, CHASE_STATEMENT_DATE,
    CHASE_TRANSACTION,
};
use crate::statement::rules::{ScalarRule, Slot, TransactionStrategy};

/// Chase layout: inline labels and one signed-amount transaction per line.
pub struct ChaseDialect;

impl Dialect for ChaseDialect {
    fn id(&self) -> &'static str {
        "chase"
    }

    fn bank_name(&self) -> &'static str {
        "Chase"
    }

    fn scalar_rules(&self) -> Vec<ScalarRule> {
        vec![
            ScalarRule::new(Slot::CardholderName, &CHASE_CARDHOLDER, 1),
            // Fall back to the closing date of the statement period
            ScalarRule::new(Slot::StatementDate, &CHASE_STATEMENT_DATE, 1)
                .or_else(&CHASE_OPENING_CLOSING, 2),
            ScalarRule::new(Slot::AccountLast4, &CHASE_ACCOUNT_NUMBER, 1),
            ScalarRule::new(
                Slot::Field(FieldName::PaymentDueDate),
                &CHASE_PAYMENT_DUE_DATE,
                1,
            ),
            ScalarRule::new(Slot::Field(FieldName::NewBalance), &CHASE_NEW_BALANCE, 1),
            ScalarRule::new(
                Slot::Field(FieldName::MinimumPaymentDue),
                &CHASE_MINIMUM_PAYMENT,
                1,
            ),
            ScalarRule::new(Slot::Field(FieldName::CreditLimit), &CHASE_CREDIT_LINES, 1),
            ScalarRule::new(Slot::Field(FieldName::AvailableCredit), &CHASE_CREDIT_LINES, 2),
            ScalarRule::new(Slot::Field(FieldName::CashAccessLine), &CHASE_CREDIT_LINES, 3),
        ]
    }

    fn transaction_strategy(&self) -> TransactionStrategy {
        TransactionStrategy::SignedLine {
            pattern: &CHASE_TRANSACTION,
        }
    }

    fn markers(&self) -> &'static [&'static str] {
        &[
            "chase",
            "opening/closing date",
            "cash access line",
            "minimum payment due",
        ]
    }
}
