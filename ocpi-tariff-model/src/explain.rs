use crate::{
    ocpi::tariff::{
        OcpiTariffElement, OcpiTariffRestriction, ReservationRestrictionType, TariffDimensionType,
    },
    types::money::Money,
};

#[derive(Debug)]
pub struct ExplainElement {
    /// One entry per restriction, every entry lists the clauses of that restriction.
    pub restrictions: Vec<Vec<String>>,
    pub components: ExplainComponents,
}

#[derive(Debug, Default)]
pub struct ExplainComponents {
    pub energy: Option<Money>,
    pub flat: Option<Money>,
    pub time: Option<Money>,
    pub parking_time: Option<Money>,
}

/// Explain the given tariff element.
///
/// Only the first component of every dimension is reported, as that is the one that applies.
#[must_use]
pub fn explain(element: &OcpiTariffElement) -> ExplainElement {
    let mut components = ExplainComponents::default();

    for component in element.price_components() {
        let slot = match component.component_type {
            TariffDimensionType::Flat => &mut components.flat,
            TariffDimensionType::Time => &mut components.time,
            TariffDimensionType::Energy => &mut components.energy,
            TariffDimensionType::ParkingTime => &mut components.parking_time,
        };

        slot.get_or_insert(component.price.with_scale(2));
    }

    let restrictions = element
        .restrictions()
        .unwrap_or_default()
        .iter()
        .map(explain_restriction)
        .collect();

    ExplainElement {
        restrictions,
        components,
    }
}

/// Explain the given restriction.
#[must_use]
pub fn explain_restriction(restr: &OcpiTariffRestriction) -> Vec<String> {
    let mut explains = Vec::new();

    if let Some((min_kwh, max_kwh)) = restr.min_kwh.zip(restr.max_kwh) {
        explains.push(format!("total energy is between {min_kwh} and {max_kwh}"));
    } else if let Some(min_kwh) = restr.min_kwh {
        explains.push(format!("total energy exceeds {min_kwh}"));
    } else if let Some(max_kwh) = restr.max_kwh {
        explains.push(format!("total energy is less than {max_kwh}"));
    }

    if let Some((min_current, max_current)) = restr.min_current.zip(restr.max_current) {
        explains.push(format!("current is between {min_current} and {max_current}"));
    } else if let Some(min_current) = restr.min_current {
        explains.push(format!("current exceeds {min_current}"));
    } else if let Some(max_current) = restr.max_current {
        explains.push(format!("current is less than {max_current}"));
    }

    if let Some((min_power, max_power)) = restr.min_power.zip(restr.max_power) {
        explains.push(format!("power is between {min_power} and {max_power}"));
    } else if let Some(min_power) = restr.min_power {
        explains.push(format!("power exceeds {min_power}"));
    } else if let Some(max_power) = restr.max_power {
        explains.push(format!("power is less than {max_power}"));
    }

    if let Some((start_time, end_time)) = restr.start_time.zip(restr.end_time) {
        explains.push(format!("between {start_time} and {end_time}"));
    } else if let Some(start_time) = restr.start_time {
        explains.push(format!("after {start_time}"));
    } else if let Some(end_time) = restr.end_time {
        explains.push(format!("before {end_time}"));
    }

    if let Some((min_duration, max_duration)) = restr.min_duration.zip(restr.max_duration) {
        explains.push(format!(
            "session duration is between {min_duration} and {max_duration}"
        ));
    } else if let Some(min_duration) = restr.min_duration {
        explains.push(format!("session duration exceeds {min_duration}"));
    } else if let Some(max_duration) = restr.max_duration {
        explains.push(format!("session duration is less than {max_duration}"));
    }

    if let Some((start_date, end_date)) = restr.start_date.zip(restr.end_date) {
        explains.push(format!("between {start_date} and {end_date}"));
    } else if let Some(start_date) = restr.start_date {
        explains.push(format!("after {start_date}"));
    } else if let Some(end_date) = restr.end_date {
        explains.push(format!("before {end_date}"));
    }

    if !restr.day_of_week.is_empty() {
        let days: Vec<_> = restr
            .day_of_week
            .iter()
            .map(|day| format!("{day:?}"))
            .collect();

        explains.push(format!("on {}", days.join(", ")));
    }

    match restr.reservation {
        Some(ReservationRestrictionType::Reservation) => {
            explains.push("during a reservation".to_owned());
        }
        Some(ReservationRestrictionType::ReservationExpires) => {
            explains.push("when a reservation expires".to_owned());
        }
        None => {}
    }

    explains
}
