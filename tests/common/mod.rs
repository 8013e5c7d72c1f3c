#![allow(dead_code)]

use rulechain::domain::payment::{Payment, PaymentStatus};
use rulechain::domain::transaction::{Transaction, TransactionStatus};
use rust_decimal::Decimal;
use std::io::Error;
use std::path::Path;

pub fn payment(amount: Decimal, status: PaymentStatus) -> Payment {
    Payment::new(amount, status)
}

pub fn to_process(amount: Decimal) -> Transaction {
    Transaction::new(amount, TransactionStatus::ToProcess)
}

pub fn write_records(path: &Path, rows: &[[&str; 5]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["id", "payment_amount", "payment_status", "amount", "status"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
