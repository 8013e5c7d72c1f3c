//! Application layer wrapping the payment validation chain.
//!
//! This module defines the `ValidationEngine` which acts as the primary entry
//! point for validating transactions. It owns a built chain and adds the
//! logging the chain itself does not do.

pub mod engine;
