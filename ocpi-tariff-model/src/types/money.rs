use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::number::Number;

/// A monetary amount, the currency is dependant on the tariff that contains it.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Money(Number);

impl Money {
    /// Round this amount to the given amount of decimals.
    #[must_use]
    pub fn with_scale(self, scale: u32) -> Self {
        Self(self.0.with_scale(scale))
    }
}

impl From<rust_decimal::Decimal> for Money {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value.into())
    }
}

impl From<Money> for rust_decimal::Decimal {
    fn from(value: Money) -> Self {
        value.0.into()
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A VAT percentage.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Vat(Number);

impl From<rust_decimal::Decimal> for Vat {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value.into())
    }
}

impl Display for Vat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}
