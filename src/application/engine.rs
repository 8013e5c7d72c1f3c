use crate::config::RuleConfig;
use crate::domain::payment::Payment;
use crate::domain::rules::{PaymentChain, payment_validation_chain};
use crate::domain::transaction::Transaction;
use crate::error::Result;
use tracing::debug;

/// The main entry point for validating transactions against their payments.
///
/// `ValidationEngine` owns one built chain and holds no other state, so a
/// single engine can be shared between threads and run concurrently.
pub struct ValidationEngine {
    chain: PaymentChain,
}

impl ValidationEngine {
    /// Creates an engine around an already built chain.
    pub fn new(chain: PaymentChain) -> Self {
        Self { chain }
    }

    /// Creates an engine running the standard payment validation chain.
    pub fn with_config(config: &RuleConfig) -> Self {
        Self::new(payment_validation_chain(config))
    }

    pub fn rule_count(&self) -> usize {
        self.chain.len()
    }

    /// Runs `trx` through the chain and returns the updated transaction.
    ///
    /// Rule failures are returned unchanged.
    pub fn process(&self, payment: &Payment, trx: Transaction) -> Result<Transaction> {
        debug!(
            payment_amount = %payment.amount,
            payment_status = ?payment.status,
            amount = %trx.amount,
            status = ?trx.status,
            "validating transaction"
        );

        let processed = self.chain.execute(payment, trx)?;

        debug!(
            amount = %processed.amount,
            status = ?processed.status,
            status_detail = %processed.status_detail,
            "transaction validated"
        );
        Ok(processed)
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_config(&RuleConfig::default())
    }
}
