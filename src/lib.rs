pub mod application;
pub mod chain;
pub mod config;
pub mod domain;
pub mod error;
pub mod interfaces;
