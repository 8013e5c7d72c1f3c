use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status detail set when a small shortfall is covered by the payment.
pub const AMOUNT_SUBSIDIZED: &str = "amount_subsidized";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[default]
    ToProcess,
    Cancelled,
    InvalidAmount,
}

/// The record a payment chain validates and rewrites.
///
/// Rules never mutate a shared instance: each transform takes the value and
/// returns the updated one.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Transaction {
    pub amount: Decimal,
    pub status: TransactionStatus,
    #[serde(default)]
    pub status_detail: String,
}

impl Transaction {
    pub fn new(amount: Decimal, status: TransactionStatus) -> Self {
        Self {
            amount,
            status,
            status_detail: String::new(),
        }
    }
}
