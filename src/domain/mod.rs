//! Payment domain: the records a validation chain reads and rewrites, and the
//! rules plugged into it.

pub mod payment;
pub mod rules;
pub mod transaction;
