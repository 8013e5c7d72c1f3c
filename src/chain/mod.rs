//! Generic rule-chain primitive.
//!
//! A chain is an ordered list of steps, each pairing a predicate with the
//! transform it guards. Steps are declared through [`ChainBuilder`] and run
//! front to back by [`Handler::execute`] until a short-circuit step matches
//! or the list is exhausted. The module knows nothing about the subject it
//! carries and never logs; plug-in errors are handed back untouched.

pub mod builder;
pub mod handler;
pub mod rule;

pub use builder::ChainBuilder;
pub use handler::Handler;
pub use rule::{Predicate, Rule, Transform};
