use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::number::Number;

/// A value of kilo watt hours.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Kwh(Number);

impl From<rust_decimal::Decimal> for Kwh {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value.into())
    }
}

impl Display for Kwh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kWh", self.0.normalize())
    }
}

/// A value of kilo watts.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Kw(Number);

impl From<rust_decimal::Decimal> for Kw {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value.into())
    }
}

impl Display for Kw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kW", self.0.normalize())
    }
}

/// A value of amperes.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Ampere(Number);

impl From<rust_decimal::Decimal> for Ampere {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value.into())
    }
}

impl Display for Ampere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} A", self.0.normalize())
    }
}
