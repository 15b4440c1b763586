use crate::core::breakdown::{Breakdown, MANUAL_REVIEW_NOTE};
use crate::domain::catalog::{add_on_key, base_price, discount_percent, find_add_on};
use crate::domain::model::LeadIntake;
use crate::domain::money::Money;
use crate::domain::options::{AddOnFrequency, ServiceType};
use crate::domain::quote::{AddOnLine, PendingQuote, PricedQuote, Quote, RecurringPrice};
use std::collections::HashSet;

/// Prices a lead.
///
/// Pure and deterministic: the same intake always yields an identical
/// quote. Move-out / heavy cleans are never auto-priced and always come back
/// as [`Quote::PendingManualReview`].
pub fn calculate_quote(intake: &LeadIntake) -> Quote {
    let add_ons = resolve_add_ons(&intake.add_ons);

    let unpriced = add_ons.iter().filter(|line| line.price().is_none()).count();
    if unpriced > 0 {
        tracing::warn!(
            "{} add-on(s) not in catalog, quoted without price: {:?}",
            unpriced,
            add_ons
                .iter()
                .filter(|line| line.price().is_none())
                .map(AddOnLine::name)
                .collect::<Vec<_>>()
        );
    }

    match intake.service_type {
        ServiceType::MoveOutHeavyClean => {
            quote_move_out(intake.preferred_service_date.clone(), add_ons)
        }
        ServiceType::StandardCleaning => quote_standard(intake, add_ons),
    }
}

/// One line per distinct add-on, in selection order. A repeated selection
/// (same catalog item under another spelling included) is charged once.
pub fn resolve_add_ons(selected: &[String]) -> Vec<AddOnLine> {
    let mut seen = HashSet::new();
    selected
        .iter()
        .filter(|key| !key.trim().is_empty() && seen.insert(add_on_key(key)))
        .map(|key| match find_add_on(key) {
            Some(add_on) => AddOnLine::Priced {
                id: add_on.id,
                name: add_on.name,
                price: add_on.price,
            },
            None => AddOnLine::Unpriced {
                id: key.trim().to_string(),
            },
        })
        .collect()
}

fn quote_move_out(preferred_service_date: Option<String>, add_ons: Vec<AddOnLine>) -> Quote {
    let breakdown = Breakdown::new(ServiceType::MoveOutHeavyClean)
        .preferred_date(preferred_service_date.as_deref())
        .add_ons(&add_ons)
        .note(MANUAL_REVIEW_NOTE)
        .render();

    tracing::debug!("Move-out lead routed to manual review");

    Quote::PendingManualReview(PendingQuote {
        service: ServiceType::MoveOutHeavyClean,
        preferred_service_date,
        add_ons,
        breakdown,
    })
}

fn quote_standard(intake: &LeadIntake, add_ons: Vec<AddOnLine>) -> Quote {
    let base = base_price(intake.square_footage);
    let frequency = intake.cleaning_frequency;
    let discounted = discount_percent(frequency).map(|pct| base.discounted(pct));

    let add_ons_total: Money = add_ons.iter().filter_map(AddOnLine::price).sum();
    let first_clean_price = base + add_ons_total;

    let add_on_frequency = intake.add_on_frequency.filter(|_| !add_ons.is_empty());
    let recurring = discounted.map(|price| {
        let price = if add_on_frequency == Some(AddOnFrequency::EveryCleaning) {
            price + add_ons_total
        } else {
            price
        };
        RecurringPrice { frequency, price }
    });

    let mut breakdown = Breakdown::new(ServiceType::StandardCleaning)
        .first_cleaning(first_clean_price)
        .recurring(recurring)
        .add_ons(&add_ons);
    if recurring.is_some() {
        breakdown = breakdown.add_on_schedule(add_on_frequency);
    }

    tracing::debug!(
        "Standard cleaning quoted: base={}, add-ons={}, first={}, recurring={:?}",
        base,
        add_ons_total,
        first_clean_price,
        recurring.map(|r| r.price.to_string())
    );

    Quote::Ready(PricedQuote {
        service: ServiceType::StandardCleaning,
        frequency,
        first_clean_price,
        recurring,
        add_ons,
        add_on_frequency,
        breakdown: breakdown.render(),
    })
}
