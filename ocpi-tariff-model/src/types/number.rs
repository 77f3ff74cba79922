use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Decimal number as it appears on the wire.
///
/// The scale of the decimal is kept as given, so a value decoded from `2.50` encodes back to
/// `2.50` and not `2.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub(crate) struct Number(rust_decimal::Decimal);

impl Number {
    /// Strip trailing zeros, used when displaying.
    pub(crate) fn normalize(self) -> Self {
        Self(self.0.normalize())
    }

    pub(crate) fn with_scale(mut self, scale: u32) -> Self {
        self.0.rescale(scale);
        self
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let decimal = rust_decimal::serde::arbitrary_precision::deserialize(deserializer)?;
        Ok(Self(decimal))
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&self.0, serializer)
    }
}

impl From<rust_decimal::Decimal> for Number {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value)
    }
}

impl From<Number> for rust_decimal::Decimal {
    fn from(value: Number) -> Self {
        value.0
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
