use crate::domain::catalog::discount_percent;
use crate::domain::money::Money;
use crate::domain::options::{AddOnFrequency, FormOption, ServiceType};
use crate::domain::quote::{AddOnLine, RecurringPrice};

pub const MANUAL_REVIEW_NOTE: &str = "Pricing: pending manual review of submitted photos";

/// Multi-line text shown under the quote.
#[derive(Debug)]
pub struct Breakdown {
    lines: Vec<String>,
}

impl Breakdown {
    pub fn new(service: ServiceType) -> Self {
        Self {
            lines: vec![format!("Service: {}", service.label())],
        }
    }

    pub fn first_cleaning(mut self, price: Money) -> Self {
        self.lines.push(format!("First cleaning: {}", price));
        self
    }

    pub fn recurring(mut self, recurring: Option<RecurringPrice>) -> Self {
        if let Some(r) = recurring {
            let discount = discount_percent(r.frequency).unwrap_or(0);
            self.lines.push(format!(
                "{}: {} per visit ({}% discount)",
                r.frequency.label(),
                r.price,
                discount
            ));
        }
        self
    }

    pub fn preferred_date(mut self, date: Option<&str>) -> Self {
        if let Some(date) = date.map(str::trim).filter(|d| !d.is_empty()) {
            self.lines.push(format!("Preferred date: {}", date));
        }
        self
    }

    pub fn add_ons(mut self, add_ons: &[AddOnLine]) -> Self {
        if !add_ons.is_empty() {
            let items: Vec<String> = add_ons.iter().map(describe_add_on).collect();
            self.lines.push(format!("Add-ons: {}", items.join(", ")));
        }
        self
    }

    pub fn add_on_schedule(mut self, frequency: Option<AddOnFrequency>) -> Self {
        if let Some(frequency) = frequency {
            self.lines.push(format!("Add-ons apply to: {}", frequency.label()));
        }
        self
    }

    pub fn note(mut self, note: &str) -> Self {
        self.lines.push(note.to_string());
        self
    }

    pub fn render(self) -> String {
        self.lines.join("\n")
    }
}

fn describe_add_on(line: &AddOnLine) -> String {
    match line {
        AddOnLine::Priced { name, price, .. } => format!("{} ({})", name, price),
        AddOnLine::Unpriced { id } => format!("{} (price TBD)", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::CleaningFrequency;

    #[test]
    fn test_render_standard_lines() {
        let text = Breakdown::new(ServiceType::StandardCleaning)
            .first_cleaning(Money::from_dollars(220))
            .recurring(Some(RecurringPrice {
                frequency: CleaningFrequency::Weekly,
                price: Money::from_dollars(193),
            }))
            .add_ons(&[
                AddOnLine::Priced {
                    id: "fridge",
                    name: "Fridge",
                    price: Money::from_dollars(40),
                },
                AddOnLine::Unpriced {
                    id: "garage".to_string(),
                },
            ])
            .render();

        assert_eq!(
            text,
            "Service: Standard Cleaning\n\
             First cleaning: $220.00\n\
             Weekly (15% Off): $193.00 per visit (15% discount)\n\
             Add-ons: Fridge ($40.00), garage (price TBD)"
        );
    }

    #[test]
    fn test_blank_date_is_skipped() {
        let text = Breakdown::new(ServiceType::MoveOutHeavyClean)
            .preferred_date(Some("   "))
            .render();
        assert_eq!(text, "Service: Move-Out / Heavy Clean");
    }
}
