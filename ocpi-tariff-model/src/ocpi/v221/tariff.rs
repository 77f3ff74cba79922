//! The tariff element and the values it is built from.

use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::{
    null_default,
    types::{
        electricity::{Ampere, Kw, Kwh},
        money::{Money, Vat},
        time::{DayOfWeek, OcpiDate, OcpiTime, SecondsRound},
    },
    Error, Result,
};

/// Component of a tariff price.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OcpiPriceComponent {
    /// Type of tariff dimension
    #[serde(rename = "type")]
    pub component_type: TariffDimensionType,

    /// Price per unit (excluding VAT) for this tariff dimension
    pub price: Money,

    /// Optionally specify a VAT percentage for this component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<Vat>,

    /// Minimum amount to be billed. This unit will be billed in this `step_size`
    /// blocks. For example: if type is time and `step_size` is 300, then time will
    /// be billed in blocks of 5 minutes, so if 6 minutes is used, 10 minutes (2
    /// blocks of `step_size`) will be billed
    pub step_size: u64,
}

impl OcpiPriceComponent {
    /// A component of the given dimension, billed per single unit and without VAT.
    #[must_use]
    pub fn new(component_type: TariffDimensionType, price: Money) -> Self {
        Self {
            component_type,
            price,
            vat: None,
            step_size: 1,
        }
    }

    /// Price per kWh.
    #[must_use]
    pub fn energy(price: Money) -> Self {
        Self::new(TariffDimensionType::Energy, price)
    }

    /// Flat fee.
    #[must_use]
    pub fn flat(price: Money) -> Self {
        Self::new(TariffDimensionType::Flat, price)
    }

    /// Price per hour of charging.
    #[must_use]
    pub fn time(price: Money) -> Self {
        Self::new(TariffDimensionType::Time, price)
    }

    /// Price per hour of not charging.
    #[must_use]
    pub fn parking_time(price: Money) -> Self {
        Self::new(TariffDimensionType::ParkingTime, price)
    }

    #[must_use]
    pub fn with_step_size(self, step_size: u64) -> Self {
        Self { step_size, ..self }
    }

    #[must_use]
    pub fn with_vat(self, vat: Vat) -> Self {
        Self {
            vat: Some(vat),
            ..self
        }
    }
}

/// Type of tariff component
#[derive(Debug, Copy, PartialEq, Eq, Clone, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TariffDimensionType {
    /// Defined in kWh, `step_size` multiplier: 1 Wh
    Energy,
    /// Flat fee, no unit for `step_size`
    Flat,
    /// Time not charging: defined in hours, `step_size` multiplier: 1 second
    ParkingTime,
    /// Time charging: defined in hours, `step_size` multiplier: 1 second
    Time,
}

/// Indicates when a tariff applies
///
/// Fields that are not set are left out of the encoded object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OcpiTariffRestriction {
    /// Start time of day, for example 13:30, valid from this time of the day.
    /// Must be in 24h format with leading zeros. Hour/Minute separator: “:”
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<OcpiTime>,

    /// End time of day, for example 19:45, valid until this
    /// time of the day. Same syntax as `start_time`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<OcpiTime>,

    /// Start date, for example: 2015-12-24, valid from this day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<OcpiDate>,

    /// End date, for example: 2015-12-27, valid until this day (excluding this day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<OcpiDate>,

    /// Minimum used energy in kWh, for example 20, valid from this amount of energy is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_kwh: Option<Kwh>,

    /// Maximum used energy in kWh, for example 50, valid until this amount of energy is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_kwh: Option<Kwh>,

    /// The minimum current in A.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_current: Option<Ampere>,

    /// The maximum current in A.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_current: Option<Ampere>,

    /// Minimum power in kW, for example 0, valid from this charging speed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_power: Option<Kw>,

    /// Maximum power in kW, for example 20, valid up to this charging speed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_power: Option<Kw>,

    /// Minimum duration in seconds, valid for a duration from x seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<SecondsRound>,

    /// Maximum duration in seconds, valid for a duration up to x seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<SecondsRound>,

    /// Which day(s) of the week this tariff is valid
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub day_of_week: Vec<DayOfWeek>,

    /// Whether this tariff applies for reservation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationRestrictionType>,
}

impl OcpiTariffRestriction {
    /// A restriction without any field set applies always.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }

    /// Whether this restriction uses `start_date` or `end_date`.
    #[must_use]
    pub fn uses_dates(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }
}

/// The type of reservation a tariff applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationRestrictionType {
    /// The tariff applies when the charge session is reserved.
    Reservation,
    /// The tariff applies when the reservation expires.
    ReservationExpires,
}

/// Describes part of a tariff: a set of price components and the conditions under which they
/// apply.
///
/// An element always has at least one price component. The restrictions are optional, when
/// they are absent or empty the `restrictions` field is left out of the encoded object.
///
/// ```
/// use ocpi_tariff_model::ocpi::tariff::{OcpiPriceComponent, OcpiTariffElement};
/// use rust_decimal_macros::dec;
///
/// let element = OcpiTariffElement::from_components([OcpiPriceComponent::flat(dec!(2.50).into())])?;
///
/// assert_eq!(
///     element.to_json_string()?,
///     r#"{"price_components":[{"type":"FLAT","price":2.50,"step_size":1}]}"#
/// );
/// # Ok::<(), ocpi_tariff_model::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTariffElement")]
pub struct OcpiTariffElement {
    price_components: Vec<OcpiPriceComponent>,
    restrictions: Option<Vec<OcpiTariffRestriction>>,
}

impl OcpiTariffElement {
    /// Create an element from one or more price components, without restrictions.
    pub fn from_components(
        price_components: impl IntoIterator<Item = OcpiPriceComponent>,
    ) -> Result<Self> {
        Self::new(price_components.into_iter().collect(), Some(Vec::new()))
    }

    /// Create an element from one or more price components and optional restrictions.
    ///
    /// Absent restrictions are kept absent, they are not replaced by an empty list.
    pub fn from_components_and_restrictions(
        price_components: Vec<OcpiPriceComponent>,
        restrictions: Option<Vec<OcpiTariffRestriction>>,
    ) -> Result<Self> {
        Self::new(price_components, restrictions)
    }

    /// Create an element from a single price component that applies under a single restriction.
    #[must_use]
    pub fn from_single(
        price_component: OcpiPriceComponent,
        restriction: OcpiTariffRestriction,
    ) -> Self {
        Self {
            price_components: vec![price_component],
            restrictions: Some(vec![restriction]),
        }
    }

    fn new(
        price_components: Vec<OcpiPriceComponent>,
        restrictions: Option<Vec<OcpiTariffRestriction>>,
    ) -> Result<Self> {
        if price_components.is_empty() {
            debug!("rejecting tariff element without price components");

            return Err(Error::InvalidArgument {
                name: "price_components",
                reason: "must not be empty",
            });
        }

        Ok(Self {
            price_components,
            restrictions,
        })
    }

    /// Decode an element from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Decoding)
    }

    /// The price components in the order they apply, never empty.
    #[must_use]
    pub fn price_components(&self) -> &[OcpiPriceComponent] {
        &self.price_components
    }

    /// The restrictions, `None` if they were never given.
    #[must_use]
    pub fn restrictions(&self) -> Option<&[OcpiTariffRestriction]> {
        self.restrictions.as_deref()
    }

    /// Take the price components and restrictions out of this element.
    #[must_use]
    pub fn into_parts(self) -> (Vec<OcpiPriceComponent>, Option<Vec<OcpiTariffRestriction>>) {
        (self.price_components, self.restrictions)
    }

    /// Encode this element into its canonical JSON object.
    pub fn encode(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Error::Encoding)
    }

    /// Encode this element into its canonical JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encoding)
    }
}

impl Serialize for OcpiTariffElement {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let restrictions = self
            .restrictions
            .as_deref()
            .filter(|restrictions| !restrictions.is_empty());

        let len = if restrictions.is_some() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("OcpiTariffElement", len)?;

        state.serialize_field("price_components", &self.price_components)?;

        if let Some(restrictions) = restrictions {
            state.serialize_field("restrictions", restrictions)?;
        }

        state.end()
    }
}

/// The shape of a tariff element as it is received, before validation.
#[derive(Deserialize)]
struct RawTariffElement {
    price_components: Option<Vec<OcpiPriceComponent>>,
    restrictions: Option<Vec<OcpiTariffRestriction>>,
}

impl TryFrom<RawTariffElement> for OcpiTariffElement {
    type Error = Error;

    fn try_from(raw: RawTariffElement) -> Result<Self> {
        let price_components = raw.price_components.ok_or(Error::InvalidArgument {
            name: "price_components",
            reason: "must not be null",
        })?;

        Self::new(price_components, raw.restrictions)
    }
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use super::{
        OcpiPriceComponent, OcpiTariffElement, OcpiTariffRestriction,
        ReservationRestrictionType, TariffDimensionType,
    };
    use crate::{types::time::SecondsRound, Error};

    fn min_duration(seconds: u32) -> OcpiTariffRestriction {
        OcpiTariffRestriction {
            min_duration: Some(SecondsRound::from_seconds(seconds)),
            ..OcpiTariffRestriction::default()
        }
    }

    #[test]
    fn should_encode_flat_fee_without_restrictions() {
        let element =
            OcpiTariffElement::from_components([OcpiPriceComponent::flat(dec!(2.50).into())])
                .unwrap();

        assert_eq!(
            element.to_json_string().unwrap(),
            r#"{"price_components":[{"type":"FLAT","price":2.50,"step_size":1}]}"#
        );
    }

    #[test]
    fn should_encode_energy_with_min_duration() {
        let element = OcpiTariffElement::from_components_and_restrictions(
            vec![OcpiPriceComponent::energy(dec!(0.30).into())],
            Some(vec![min_duration(600)]),
        )
        .unwrap();

        assert_eq!(
            element.to_json_string().unwrap(),
            r#"{"price_components":[{"type":"ENERGY","price":0.30,"step_size":1}],"restrictions":[{"min_duration":600}]}"#
        );
    }

    #[test]
    fn should_reject_empty_components() {
        let err = OcpiTariffElement::from_components(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                name: "price_components",
                ..
            }
        ));

        let err = OcpiTariffElement::from_components_and_restrictions(
            Vec::new(),
            Some(vec![min_duration(600)]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn should_keep_absent_restrictions_absent() {
        let component = OcpiPriceComponent::time(dec!(1.20).into());

        let absent =
            OcpiTariffElement::from_components_and_restrictions(vec![component.clone()], None)
                .unwrap();
        assert_eq!(absent.restrictions(), None);

        let empty = OcpiTariffElement::from_components([component]).unwrap();
        assert_eq!(empty.restrictions(), Some(&[][..]));

        assert_eq!(
            absent.to_json_string().unwrap(),
            empty.to_json_string().unwrap()
        );
        assert!(absent.encode().unwrap().get("restrictions").is_none());
        assert!(empty.encode().unwrap().get("restrictions").is_none());
    }

    #[test]
    fn should_emit_one_entry_per_restriction() {
        let element = OcpiTariffElement::from_components_and_restrictions(
            vec![OcpiPriceComponent::energy(dec!(0.25).into())],
            Some(vec![
                min_duration(600),
                OcpiTariffRestriction {
                    reservation: Some(ReservationRestrictionType::Reservation),
                    ..OcpiTariffRestriction::default()
                },
            ]),
        )
        .unwrap();

        let value = element.encode().unwrap();
        let restrictions = value["restrictions"].as_array().unwrap();
        assert_eq!(restrictions.len(), 2);
        assert_eq!(restrictions[1]["reservation"], "RESERVATION");
    }

    #[test]
    fn should_preserve_component_order() {
        let element = OcpiTariffElement::from_components([
            OcpiPriceComponent::time(dec!(2.00).into()),
            OcpiPriceComponent::energy(dec!(0.25).into()),
            OcpiPriceComponent::flat(dec!(1.00).into()),
        ])
        .unwrap();

        let value = element.encode().unwrap();
        let types: Vec<_> = value["price_components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|component| component["type"].as_str().unwrap())
            .collect();

        assert_eq!(types, ["TIME", "ENERGY", "FLAT"]);
    }

    #[test]
    fn should_place_components_before_restrictions() {
        let element = OcpiTariffElement::from_single(
            OcpiPriceComponent::parking_time(dec!(5.00).into()),
            min_duration(3600),
        );

        let json = element.to_json_string().unwrap();
        let components = json.find("\"price_components\"").unwrap();
        let restrictions = json.find("\"restrictions\"").unwrap();

        assert!(components < restrictions);
    }

    #[test]
    fn should_encode_identically_twice() {
        let element = OcpiTariffElement::from_single(
            OcpiPriceComponent::energy(dec!(0.30).into())
                .with_step_size(1000)
                .with_vat(dec!(21.0).into()),
            min_duration(600),
        );

        assert_eq!(
            element.to_json_string().unwrap(),
            element.to_json_string().unwrap()
        );
        assert_eq!(element.encode().unwrap(), element.encode().unwrap());
    }

    #[test]
    fn should_wrap_singletons() {
        let element = OcpiTariffElement::from_single(
            OcpiPriceComponent::flat(dec!(0.50).into()),
            min_duration(60),
        );

        assert_eq!(element.price_components().len(), 1);
        assert_eq!(element.restrictions().map(<[_]>::len), Some(1));
    }

    #[test]
    fn should_decode_canonical_json() {
        let json = r#"{"price_components":[{"type":"ENERGY","price":0.30,"vat":21.0,"step_size":1000}],"restrictions":[{"min_duration":600}]}"#;
        let element = OcpiTariffElement::from_json_str(json).unwrap();

        let component = &element.price_components()[0];
        assert_eq!(component.component_type, TariffDimensionType::Energy);
        assert_eq!(component.step_size, 1000);
        assert!(component.vat.is_some());

        assert_eq!(element.to_json_string().unwrap(), json);
    }

    #[test]
    fn should_reject_decoding_without_components() {
        let missing = OcpiTariffElement::from_json_str(r#"{"restrictions":[]}"#);
        assert!(matches!(missing, Err(Error::Decoding(_))));

        let null = OcpiTariffElement::from_json_str(r#"{"price_components":null}"#);
        assert!(matches!(null, Err(Error::Decoding(_))));

        let empty = OcpiTariffElement::from_json_str(r#"{"price_components":[]}"#);
        let err = empty.unwrap_err().to_string();
        assert!(err.contains("must not be empty"), "{err}");
    }

    #[test]
    fn should_decode_null_and_empty_restrictions() {
        let component = r#"{"type":"FLAT","price":1,"step_size":1}"#;

        let null = OcpiTariffElement::from_json_str(&format!(
            r#"{{"price_components":[{component}],"restrictions":null}}"#
        ))
        .unwrap();
        assert_eq!(null.restrictions(), None);

        let empty = OcpiTariffElement::from_json_str(&format!(
            r#"{{"price_components":[{component}],"restrictions":[]}}"#
        ))
        .unwrap();
        assert_eq!(empty.restrictions(), Some(&[][..]));

        assert_eq!(
            empty.to_json_string().unwrap(),
            format!(r#"{{"price_components":[{component}]}}"#)
        );
    }

    #[test]
    fn should_omit_empty_restrictions_when_nested() {
        let elements = vec![
            OcpiTariffElement::from_components([OcpiPriceComponent::flat(dec!(1.00).into())])
                .unwrap(),
            OcpiTariffElement::from_single(
                OcpiPriceComponent::energy(dec!(0.30).into()),
                min_duration(600),
            ),
        ];

        let value = serde_json::to_value(&elements).unwrap();
        let keys: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|element| element.as_object().unwrap().keys().cloned().collect::<Vec<_>>())
            .collect();

        assert_eq!(
            keys,
            [
                vec!["price_components".to_owned()],
                vec!["price_components".to_owned(), "restrictions".to_owned()],
            ]
        );
    }

    #[test]
    fn should_detect_unrestricted() {
        assert!(OcpiTariffRestriction::default().is_unrestricted());
        assert!(!min_duration(1).is_unrestricted());
    }
}
