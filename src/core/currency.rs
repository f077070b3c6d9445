use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting currency for revenue figures.
///
/// Revenue is reported in a single currency; amounts are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Currency {
    /// US Dollar (2 decimal places)
    USD,
}

impl Currency {
    /// Currency every revenue figure is reported in
    pub const REPORTING: Currency = Currency::USD;

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    /// Returns the display scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::USD => 2,
        }
    }

    /// Zero amount carrying this currency's display scale ("0.00" for USD)
    pub fn zero(&self) -> Decimal {
        Decimal::new(0, self.scale())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Unsupported reporting currency: {}", s)),
        }
    }
}
