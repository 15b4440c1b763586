//! Wire shapes exchanged with the lead-intake backend.

use crate::domain::model::LeadIntake;
use crate::domain::money::Money;
use crate::domain::options::FormOption;
use crate::domain::quote::{Quote, QuoteSummary};
use crate::utils::error::{FieldViolation, QuoteError, Result};
use crate::utils::validation::{is_valid_email, normalize_phone};
use serde::{Deserialize, Serialize};

/// Body of `POST /leads/cleaning`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    pub home_type: String,
    pub home_size: String,
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_service_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_on_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub quote: QuoteSummary,
}

impl LeadSubmission {
    pub fn new(intake: &LeadIntake, quote: &Quote) -> Self {
        let contact = &intake.contact;
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            address: contact.address.clone(),
            city: contact.city.clone(),
            zip: contact.postal_code.clone(),
            home_type: intake.home_type.label().to_string(),
            home_size: intake.square_footage.label().to_string(),
            service_type: intake.service_type.label().to_string(),
            preferred_frequency: (!intake.is_move_out())
                .then(|| intake.cleaning_frequency.label().to_string()),
            preferred_service_date: intake.preferred_service_date.clone(),
            add_ons: intake.add_ons.clone(),
            add_on_frequency: intake.add_on_frequency.map(|f| f.label().to_string()),
            photos: intake.photos.clone(),
            notes: contact.notes.clone(),
            quote: quote.summary(),
        }
    }
}

/// Body of `POST /leads/pros`: a cleaner applying to join the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsApplication {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProsApplication {
    /// Checks and normalizes the applicant's details, reporting every bad
    /// field at once like the lead form does.
    pub fn validated(self) -> Result<Self> {
        let mut violations = Vec::new();
        let name = self.name.trim().to_string();
        if name.is_empty() {
            violations.push(FieldViolation::new("name", "is required"));
        }
        let phone = normalize_phone(&self.phone);
        if phone.is_none() {
            violations.push(FieldViolation::new(
                "phone",
                "must be a 10-digit US phone number",
            ));
        }
        let email = self.email.trim().to_string();
        if !is_valid_email(&email) {
            violations.push(FieldViolation::new("email", "is not a valid email address"));
        }

        match phone {
            Some(phone) if violations.is_empty() => Ok(Self {
                name,
                phone,
                email,
                experience: non_blank(self.experience),
                notes: non_blank(self.notes),
            }),
            _ => Err(QuoteError::InvalidLead { violations }),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Successful reply to a lead submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadReceipt {
    #[serde(default)]
    pub ok: bool,
    pub contact_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Answer of `GET /quote/cleaning?phone=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RemoteQuote {
    NotFound,
    Pending,
    Ready {
        estimated_price: Money,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        price_breakdown: Option<String>,
    },
}

impl RemoteQuote {
    pub fn is_settled(&self) -> bool {
        !matches!(self, RemoteQuote::Pending)
    }
}
