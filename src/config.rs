use crate::error::{Result, RuleError};
use rust_decimal::Decimal;

/// Tunables of the payment validation chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleConfig {
    /// A transaction short of the payment by less than this is subsidized.
    pub subsidy_threshold: Decimal,
}

impl RuleConfig {
    pub const DEFAULT_SUBSIDY_THRESHOLD: Decimal = Decimal::ONE;

    pub fn new(subsidy_threshold: Decimal) -> Result<Self> {
        if subsidy_threshold > Decimal::ZERO {
            Ok(Self { subsidy_threshold })
        } else {
            Err(RuleError::ValidationError(
                "Subsidy threshold must be positive".to_string(),
            ))
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            subsidy_threshold: Self::DEFAULT_SUBSIDY_THRESHOLD,
        }
    }
}
