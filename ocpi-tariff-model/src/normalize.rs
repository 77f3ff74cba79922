use tracing::debug;

use crate::{
    lint::{lint, Warning},
    ocpi::tariff::OcpiTariffElement,
};

/// Produce an element without the parts that [`lint`] marks as redundant.
///
/// The result encodes to the same pricing as the input. An empty restriction list becomes an
/// absent one.
#[must_use]
pub fn normalize(element: &OcpiTariffElement) -> OcpiTariffElement {
    let warns = lint(element);

    let mut remove_components = Vec::new();
    let mut remove_restrictions = Vec::new();

    for warn in warns {
        match warn {
            Warning::ComponentIsRedundant {
                component_index, ..
            } => remove_components.push(component_index),
            Warning::RestrictionIsUnrestricted { restriction_index } => {
                remove_restrictions.push(restriction_index);
            }
            Warning::RestrictionsAreEmpty | Warning::UsesDateRestrictions { .. } => {}
        }
    }

    let (mut components, mut restrictions) = element.clone().into_parts();

    remove_components.sort_unstable();
    remove_restrictions.sort_unstable();

    // Remove them in sorted reverse order for the indices to stay intact.
    for &index in remove_components.iter().rev() {
        debug!(index, "removing redundant price component");
        components.remove(index);
    }

    if let Some(restrictions) = &mut restrictions {
        for &index in remove_restrictions.iter().rev() {
            debug!(index, "removing unrestricted restriction");
            restrictions.remove(index);
        }
    }

    let restrictions = restrictions.filter(|restrictions| !restrictions.is_empty());

    match OcpiTariffElement::from_components_and_restrictions(components, restrictions) {
        Ok(normalized) => normalized,
        Err(err) => unreachable!("the first component of an element is never redundant: {err}"),
    }
}
