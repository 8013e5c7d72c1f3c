//! Payment predicates and transforms plugged into a [`PaymentChain`].

use super::payment::Payment;
use super::transaction::{AMOUNT_SUBSIDIZED, Transaction, TransactionStatus};
use crate::chain::{ChainBuilder, Handler};
use crate::config::RuleConfig;
use crate::error::{Result, RuleError};
use rust_decimal::Decimal;

pub type PaymentChain = Handler<Payment, Transaction, RuleError>;

pub fn is_payment_cancelled(payment: &Payment, _trx: &Transaction) -> Result<bool> {
    Ok(payment.is_cancelled())
}

/// Compares the payment with a bare total instead of a transaction.
pub fn is_amount_valid(payment: &Payment, total: &Decimal) -> Result<bool> {
    Ok(payment.amount == *total)
}

pub fn is_transaction_amount_valid(payment: &Payment, trx: &Transaction) -> Result<bool> {
    Ok(payment.amount == trx.amount)
}

pub fn is_transaction_amount_insufficient(payment: &Payment, trx: &Transaction) -> Result<bool> {
    Ok(payment.amount > trx.amount)
}

pub fn is_amount_subsidisable(payment: &Payment, trx: &Transaction) -> Result<bool> {
    shortfall_below(payment, trx, RuleConfig::DEFAULT_SUBSIDY_THRESHOLD)
}

/// Like [`is_amount_subsidisable`] with a configurable threshold.
pub fn amount_subsidisable_within(
    threshold: Decimal,
) -> impl Fn(&Payment, &Transaction) -> Result<bool> + Clone + Send + Sync + 'static {
    move |payment, trx| shortfall_below(payment, trx, threshold)
}

fn shortfall_below(payment: &Payment, trx: &Transaction, threshold: Decimal) -> Result<bool> {
    if trx.amount >= payment.amount {
        return Ok(false);
    }
    let shortfall = payment.amount.checked_sub(trx.amount).ok_or_else(|| {
        RuleError::Overflow(format!(
            "shortfall between {} and {}",
            payment.amount, trx.amount
        ))
    })?;
    Ok(shortfall < threshold)
}

pub fn subsidize_transaction(payment: &Payment, mut trx: Transaction) -> Result<Transaction> {
    trx.amount = payment.amount;
    trx.status_detail = AMOUNT_SUBSIDIZED.to_string();
    Ok(trx)
}

pub fn set_transaction_status_cancelled(
    _payment: &Payment,
    mut trx: Transaction,
) -> Result<Transaction> {
    trx.status = TransactionStatus::Cancelled;
    Ok(trx)
}

pub fn set_transaction_status_invalid_amount(
    _payment: &Payment,
    mut trx: Transaction,
) -> Result<Transaction> {
    trx.status = TransactionStatus::InvalidAmount;
    Ok(trx)
}

/// Builds the standard validation chain:
///
/// 1. a cancelled payment cancels the transaction and stops;
/// 2. a shortfall under the subsidy threshold is covered, then checks go on;
/// 3. a remaining shortfall marks the amount invalid and stops.
pub fn payment_validation_chain(config: &RuleConfig) -> PaymentChain {
    ChainBuilder::new(is_payment_cancelled, set_transaction_status_cancelled, true)
        .add_next(
            amount_subsidisable_within(config.subsidy_threshold),
            subsidize_transaction,
            false,
        )
        .add_next(
            is_transaction_amount_insufficient,
            set_transaction_status_invalid_amount,
            true,
        )
        .build()
}
