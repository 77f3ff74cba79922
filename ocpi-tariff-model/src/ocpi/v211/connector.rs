//! Electrical characteristics of a connector.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The way a connector delivers power.
///
/// Encodes by name (`"AC_1_PHASE"`) by default. Use the [`ordinal`] module with
/// `#[serde(with = "...")]` where a document expects the numeric form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PowerType {
    /// AC single phase.
    #[serde(rename = "AC_1_PHASE")]
    Ac1Phase,
    /// AC three phases.
    #[serde(rename = "AC_3_PHASE")]
    Ac3Phase,
    /// Direct current.
    #[serde(rename = "DC")]
    Dc,
}

/// Every power type with its ordinal and name.
const POWER_TYPES: [(PowerType, u8, &str); 3] = [
    (PowerType::Ac1Phase, 1, "AC_1_PHASE"),
    (PowerType::Ac3Phase, 2, "AC_3_PHASE"),
    (PowerType::Dc, 3, "DC"),
];

impl PowerType {
    fn entry(self) -> (PowerType, u8, &'static str) {
        match self {
            Self::Ac1Phase => POWER_TYPES[0],
            Self::Ac3Phase => POWER_TYPES[1],
            Self::Dc => POWER_TYPES[2],
        }
    }

    /// The fixed wire ordinal of this power type.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        self.entry().1
    }

    /// The symbolic name of this power type.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().2
    }
}

impl TryFrom<u8> for PowerType {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        POWER_TYPES
            .iter()
            .find(|(_, candidate, _)| *candidate == ordinal)
            .map(|&(power_type, _, _)| power_type)
            .ok_or_else(|| Error::UnknownVariant {
                kind: "power type",
                value: ordinal.to_string(),
            })
    }
}

impl FromStr for PowerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        POWER_TYPES
            .iter()
            .find(|(_, _, name)| *name == s)
            .map(|&(power_type, _, _)| power_type)
            .ok_or_else(|| Error::UnknownVariant {
                kind: "power type",
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for PowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encode a [`PowerType`] as its ordinal.
///
/// ```
/// use ocpi_tariff_model::ocpi::v211::connector::{ordinal, PowerType};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Connector {
///     #[serde(with = "ordinal")]
///     power_type: PowerType,
/// }
///
/// let json = serde_json::to_string(&Connector { power_type: PowerType::Dc }).unwrap();
/// assert_eq!(json, r#"{"power_type":3}"#);
/// ```
pub mod ordinal {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::PowerType;

    pub fn serialize<S>(power_type: &PowerType, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(power_type.ordinal())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<PowerType, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let ordinal = u8::deserialize(deserializer)?;
        PowerType::try_from(ordinal).map_err(D::Error::custom)
    }
}
