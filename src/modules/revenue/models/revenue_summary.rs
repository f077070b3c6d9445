use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{AppError, Currency, Result};

/// All-time revenue for one property within one tenant.
///
/// `total` keeps the decimal's own scale as a string for JSON precision, so a
/// live sum of `DECIMAL(10,3)` values renders as e.g. `"2250.000"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub property_id: String,
    pub tenant_id: String,
    pub total: String,
    pub currency: Currency,
    pub count: i64,
}

impl RevenueSummary {
    pub fn new(
        property_id: impl Into<String>,
        tenant_id: impl Into<String>,
        total: Decimal,
        count: i64,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            tenant_id: tenant_id.into(),
            total: total.to_string(),
            currency: Currency::REPORTING,
            count,
        }
    }

    /// Parse `total` back into an exact decimal
    pub fn total_amount(&self) -> Result<Decimal> {
        Decimal::from_str(&self.total)
            .map_err(|e| AppError::internal(format!("Invalid revenue total '{}': {}", self.total, e)))
    }
}
