use std::fmt::Display;

use crate::ocpi::tariff::{OcpiTariffElement, TariffDimensionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// An earlier component in the same element already prices this dimension.
    ComponentIsRedundant {
        component_index: usize,
        ty: TariffDimensionType,
    },
    /// The restrictions are present but empty, which encodes the same as leaving them out.
    ///
    /// Every element built with [`OcpiTariffElement::from_components`] carries an empty list and
    /// gets this warning. Build it with [`OcpiTariffElement::from_components_and_restrictions`]
    /// and `None` restrictions to avoid it.
    RestrictionsAreEmpty,
    /// A restriction without any field set.
    RestrictionIsUnrestricted { restriction_index: usize },
    /// A restriction using `start_date` or `end_date`, the validity period of the tariff is
    /// better suited for that.
    UsesDateRestrictions { restriction_index: usize },
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ComponentIsRedundant {
                component_index,
                ty,
            } => write!(
                f,
                "Component at `$.price_components[{component_index}]` is redundant, \
                   an earlier component already prices {ty:?}, consider removing it."
            ),
            Self::RestrictionsAreEmpty => write!(
                f,
                "Element has an empty `$.restrictions` list, consider removing it."
            ),
            Self::RestrictionIsUnrestricted { restriction_index } => write!(
                f,
                "Restriction at `$.restrictions[{restriction_index}]` does not restrict anything, \
                   consider removing it."
            ),
            Self::UsesDateRestrictions { restriction_index } => write!(
                f,
                "Restriction at `$.restrictions[{restriction_index}]` uses `start_date` or `end_date`, \
                   consider using the tariff level `start_date_time` and `end_date_time`."
            ),
        }
    }
}

/// Lint the provided tariff element and produce a set of relevant warnings.
#[must_use]
pub fn lint(element: &OcpiTariffElement) -> Vec<Warning> {
    let mut warnings = Vec::new();

    let mut has_energy = false;
    let mut has_flat = false;
    let mut has_time = false;
    let mut has_parking_time = false;

    // Only the first component of every dimension is used when pricing, so any
    // following component of the same dimension is redundant.
    for (component_index, component) in element.price_components().iter().enumerate() {
        let seen = match component.component_type {
            TariffDimensionType::Energy => &mut has_energy,
            TariffDimensionType::Flat => &mut has_flat,
            TariffDimensionType::Time => &mut has_time,
            TariffDimensionType::ParkingTime => &mut has_parking_time,
        };

        if *seen {
            warnings.push(Warning::ComponentIsRedundant {
                component_index,
                ty: component.component_type,
            });
        }

        *seen = true;
    }

    match element.restrictions() {
        Some([]) => warnings.push(Warning::RestrictionsAreEmpty),
        Some(restrictions) => {
            for (restriction_index, restriction) in restrictions.iter().enumerate() {
                if restriction.is_unrestricted() {
                    warnings.push(Warning::RestrictionIsUnrestricted { restriction_index });
                }

                if restriction.uses_dates() {
                    warnings.push(Warning::UsesDateRestrictions { restriction_index });
                }
            }
        }
        None => {}
    }

    warnings
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::{lint, Warning};
    use crate::ocpi::tariff::{
        OcpiPriceComponent, OcpiTariffElement, OcpiTariffRestriction, TariffDimensionType,
    };

    #[test]
    fn should_not_warn_on_clean_element() {
        let element = OcpiTariffElement::from_components_and_restrictions(
            vec![
                OcpiPriceComponent::energy(dec!(0.30).into()),
                OcpiPriceComponent::time(dec!(1.00).into()),
            ],
            None,
        )
        .unwrap();

        assert!(lint(&element).is_empty());
    }

    #[test]
    fn should_mark_second_component_of_dimension_redundant() {
        let element = OcpiTariffElement::from_components([
            OcpiPriceComponent::energy(dec!(0.30).into()),
            OcpiPriceComponent::flat(dec!(1.00).into()),
            OcpiPriceComponent::energy(dec!(0.40).into()),
        ])
        .unwrap();

        assert_eq!(
            lint(&element),
            [
                Warning::ComponentIsRedundant {
                    component_index: 2,
                    ty: TariffDimensionType::Energy
                },
                Warning::RestrictionsAreEmpty,
            ]
        );
    }

    #[test]
    fn should_warn_on_empty_restrictions_only_when_present() {
        let component = OcpiPriceComponent::flat(dec!(1.00).into());

        let empty = OcpiTariffElement::from_components([component.clone()]).unwrap();
        assert_eq!(lint(&empty), [Warning::RestrictionsAreEmpty]);

        let absent =
            OcpiTariffElement::from_components_and_restrictions(vec![component], None).unwrap();
        assert!(lint(&absent).is_empty());
    }

    #[test]
    fn should_warn_on_restriction_contents() {
        let element = OcpiTariffElement::from_components_and_restrictions(
            vec![OcpiPriceComponent::flat(dec!(1.00).into())],
            Some(vec![
                OcpiTariffRestriction::default(),
                OcpiTariffRestriction {
                    end_date: NaiveDate::from_ymd_opt(2015, 12, 27).map(Into::into),
                    ..OcpiTariffRestriction::default()
                },
            ]),
        )
        .unwrap();

        let warnings = lint(&element);
        assert_eq!(
            warnings,
            [
                Warning::RestrictionIsUnrestricted {
                    restriction_index: 0
                },
                Warning::UsesDateRestrictions {
                    restriction_index: 1
                },
            ]
        );
        assert_eq!(
            warnings[0].to_string(),
            "Restriction at `$.restrictions[0]` does not restrict anything, consider removing it."
        );
    }
}
