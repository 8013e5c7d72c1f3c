use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::transaction::{Transaction, TransactionStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// One input row: a payment and the transaction to validate against it.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub id: u32,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub payment_amount: Decimal,
    pub payment_status: PaymentStatus,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
    /// Empty or missing means `to_process`.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
}

// Parsed from the raw text so amounts beyond the integer range csv infers
// for bare numbers still reach `Decimal`.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Decimal::from_str(&raw).map_err(serde::de::Error::custom)
}

impl PaymentRecord {
    pub fn into_parts(self) -> (u32, Payment, Transaction) {
        (
            self.id,
            Payment::new(self.payment_amount, self.payment_status),
            Transaction::new(self.amount, self.status.unwrap_or_default()),
        )
    }
}

/// One output row: the transaction as left by the chain.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ProcessedRecord {
    pub id: u32,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub status_detail: String,
}

impl ProcessedRecord {
    pub fn new(id: u32, trx: Transaction) -> Self {
        Self {
            id,
            amount: trx.amount,
            status: trx.status,
            status_detail: trx.status_detail,
        }
    }
}
