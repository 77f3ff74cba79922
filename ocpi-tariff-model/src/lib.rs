//! # OCPI tariff model
//!
//! Types describing the structure of an OCPI tariff and their canonical JSON encoding. The
//! central type is [`ocpi::tariff::OcpiTariffElement`], a validated set of price components and
//! the restrictions under which they apply.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// OCPI specific structures for defining tariffs.
pub mod ocpi;

/// Module for generating human readable tariff elements.
pub mod explain;

/// Module for normalizing tariff elements.
pub mod normalize;

/// Module for detecting structural issues in tariff elements.
pub mod lint;

/// OCPI specific numeric types used for serializing and deserializing.
pub mod types;

pub type Result<T> = std::result::Result<T, Error>;

/// Possible errors when constructing, encoding or decoding tariff values.
#[derive(Debug)]
pub enum Error {
    /// A required argument was missing or empty.
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// A value could not be encoded to JSON.
    Encoding(serde_json::Error),
    /// The JSON input does not describe a valid value.
    Decoding(serde_json::Error),
    /// A name or ordinal that does not belong to any variant of an enumeration.
    UnknownVariant {
        /// The enumeration that was decoded.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encoding(err) | Self::Decoding(err) => Some(err),
            Self::InvalidArgument { .. } | Self::UnknownVariant { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, reason } => {
                write!(f, "Invalid argument `{name}`: {reason}")
            }
            Self::Encoding(err) => write!(f, "Could not encode value: {err}"),
            Self::Decoding(err) => write!(f, "Could not decode value: {err}"),
            Self::UnknownVariant { kind, value } => write!(f, "Unknown {kind} `{value}`"),
        }
    }
}

fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
