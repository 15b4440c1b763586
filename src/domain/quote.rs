use crate::domain::catalog::discount_percent;
use crate::domain::money::Money;
use crate::domain::options::{AddOnFrequency, CleaningFrequency, FormOption, ServiceType};
use serde::{Deserialize, Serialize};

/// One selected add-on as it appears on the quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOnLine {
    Priced {
        id: &'static str,
        name: &'static str,
        price: Money,
    },
    /// Not in the catalog. Shown to the visitor but contributes nothing to
    /// the totals, so a quote containing one needs a manual reconcile.
    Unpriced { id: String },
}

impl AddOnLine {
    pub fn name(&self) -> &str {
        match self {
            AddOnLine::Priced { name, .. } => name,
            AddOnLine::Unpriced { id } => id,
        }
    }

    pub fn price(&self) -> Option<Money> {
        match self {
            AddOnLine::Priced { price, .. } => Some(*price),
            AddOnLine::Unpriced { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurringPrice {
    pub frequency: CleaningFrequency,
    /// Discounted base plus any add-ons that repeat every visit.
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedQuote {
    pub service: ServiceType,
    pub frequency: CleaningFrequency,
    pub first_clean_price: Money,
    pub recurring: Option<RecurringPrice>,
    pub add_ons: Vec<AddOnLine>,
    pub add_on_frequency: Option<AddOnFrequency>,
    pub breakdown: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuote {
    pub service: ServiceType,
    pub preferred_service_date: Option<String>,
    pub add_ons: Vec<AddOnLine>,
    pub breakdown: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quote {
    Ready(PricedQuote),
    PendingManualReview(PendingQuote),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Ready,
    PendingManualReview,
}

impl Quote {
    pub fn status(&self) -> QuoteStatus {
        match self {
            Quote::Ready(_) => QuoteStatus::Ready,
            Quote::PendingManualReview(_) => QuoteStatus::PendingManualReview,
        }
    }

    pub fn service(&self) -> ServiceType {
        match self {
            Quote::Ready(q) => q.service,
            Quote::PendingManualReview(q) => q.service,
        }
    }

    pub fn first_clean_price(&self) -> Option<Money> {
        match self {
            Quote::Ready(q) => Some(q.first_clean_price),
            Quote::PendingManualReview(_) => None,
        }
    }

    pub fn recurring_price(&self) -> Option<Money> {
        match self {
            Quote::Ready(q) => q.recurring.map(|r| r.price),
            Quote::PendingManualReview(_) => None,
        }
    }

    pub fn add_ons(&self) -> &[AddOnLine] {
        match self {
            Quote::Ready(q) => &q.add_ons,
            Quote::PendingManualReview(q) => &q.add_ons,
        }
    }

    pub fn breakdown(&self) -> &str {
        match self {
            Quote::Ready(q) => &q.breakdown,
            Quote::PendingManualReview(q) => &q.breakdown,
        }
    }

    pub fn has_unpriced_add_ons(&self) -> bool {
        self.add_ons().iter().any(|line| line.price().is_none())
    }

    pub fn summary(&self) -> QuoteSummary {
        let (frequency_label, discount_label) = match self {
            Quote::Ready(q) => (
                Some(q.frequency.label().to_string()),
                discount_percent(q.frequency).map(|pct| format!("{}% off", pct)),
            ),
            Quote::PendingManualReview(_) => (None, None),
        };

        QuoteSummary {
            status: self.status(),
            service: self.service().label().to_string(),
            first_clean_price: self.first_clean_price(),
            recurring_price: self.recurring_price(),
            frequency_label,
            discount_label,
            add_on_lines: self
                .add_ons()
                .iter()
                .map(|line| AddOnLineSummary {
                    name: line.name().to_string(),
                    price: line.price(),
                })
                .collect(),
            price_breakdown: self.breakdown().to_string(),
        }
    }
}

/// Flat view of a quote for storage and the lead payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub status: QuoteStatus,
    pub service: String,
    pub first_clean_price: Option<Money>,
    pub recurring_price: Option<Money>,
    pub frequency_label: Option<String>,
    pub discount_label: Option<String>,
    pub add_on_lines: Vec<AddOnLineSummary>,
    pub price_breakdown: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnLineSummary {
    pub name: String,
    pub price: Option<Money>,
}
