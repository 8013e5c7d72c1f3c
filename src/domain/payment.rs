use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Approved,
    Cancelled,
}

/// The payment a transaction is checked against.
///
/// Read-only for every rule of a chain.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub amount: Decimal,
    pub status: PaymentStatus,
}

impl Payment {
    pub fn new(amount: Decimal, status: PaymentStatus) -> Self {
        Self { amount, status }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == PaymentStatus::Cancelled
    }
}
