//! Form layer: raw browser submission -> validated [`LeadIntake`].

use crate::domain::catalog::{add_on_key, ADD_ON_CATALOG};
use crate::domain::model::{Contact, LeadIntake};
use crate::domain::options::{
    AddOnFrequency, CleaningFrequency, FormOption, HomeType, ServiceType, SquareFootage,
};
use crate::utils::error::{FieldViolation, QuoteError, Result};
use crate::utils::validation::{is_valid_email, is_valid_zip, normalize_phone};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The lead form exactly as submitted: every field a string, any of them
/// possibly missing or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub home_type: Option<String>,
    pub service_type: Option<String>,
    pub square_footage: Option<String>,
    pub cleaning_frequency: Option<String>,
    pub preferred_service_date: Option<String>,
    pub photos: Vec<String>,
    pub add_ons: Vec<String>,
    pub add_on_frequency: Option<String>,
}

impl LeadForm {
    /// Reads a form dump, JSON or TOML by file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            other => Err(QuoteError::InvalidConfigValueError {
                field: "intake".to_string(),
                value: path.display().to_string(),
                reason: format!(
                    "Unsupported intake file extension {:?}; use .json or .toml",
                    other.unwrap_or("")
                ),
            }),
        }
    }

    /// Applies the form rules and returns the typed intake.
    ///
    /// Every violation is collected so the visitor sees all of them at once.
    /// A choice that matches no known option is reported per field; it never
    /// falls back to a default.
    pub fn into_intake(self) -> Result<LeadIntake> {
        let mut violations = Vec::new();

        let name = required(&mut violations, "name", &self.name);
        let phone = required(&mut violations, "phone", &self.phone).and_then(|raw| {
            let normalized = normalize_phone(&raw);
            if normalized.is_none() {
                violations.push(FieldViolation::new(
                    "phone",
                    "must be a 10-digit US phone number",
                ));
            }
            normalized
        });
        let email = required(&mut violations, "email", &self.email).and_then(|raw| {
            if is_valid_email(&raw) {
                Some(raw)
            } else {
                violations.push(FieldViolation::new("email", "is not a valid email address"));
                None
            }
        });

        let postal_code = present(&self.postal_code);
        if let Some(zip) = &postal_code {
            if !is_valid_zip(zip) {
                violations.push(FieldViolation::new(
                    "postalCode",
                    "must be a 5-digit ZIP code",
                ));
            }
        }

        let home_type = choice::<HomeType>(&mut violations, &self.home_type);
        let service_type = choice::<ServiceType>(&mut violations, &self.service_type);
        let square_footage = match exact_square_feet(&self.square_footage) {
            Some(square_feet) => Some(SquareFootage::for_square_feet(square_feet)),
            None => choice::<SquareFootage>(&mut violations, &self.square_footage),
        };
        let move_out = service_type == Some(ServiceType::MoveOutHeavyClean);

        let cleaning_frequency = if move_out {
            Some(CleaningFrequency::OneTime)
        } else {
            choice::<CleaningFrequency>(&mut violations, &self.cleaning_frequency)
        };

        let preferred_service_date = present(&self.preferred_service_date);
        if move_out {
            if preferred_service_date.is_none() {
                violations.push(FieldViolation::new(
                    "preferredServiceDate",
                    "is required for move-out cleaning",
                ));
            }
            if self.photos.iter().all(|p| p.trim().is_empty()) {
                violations.push(FieldViolation::new(
                    "photos",
                    "at least one photo is required for move-out cleaning",
                ));
            }
        }

        let add_ons: Vec<String> = self
            .add_ons
            .iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        if add_ons.len() > ADD_ON_CATALOG.len() {
            violations.push(FieldViolation::new(
                "addOns",
                format!("at most {} add-ons can be selected", ADD_ON_CATALOG.len()),
            ));
        }
        let mut seen = HashSet::new();
        if !add_ons.iter().all(|a| seen.insert(add_on_key(a))) {
            violations.push(FieldViolation::new("addOns", "contains duplicates"));
        }

        let add_on_frequency = if add_ons.is_empty() {
            None
        } else {
            choice::<AddOnFrequency>(&mut violations, &self.add_on_frequency)
        };

        if !violations.is_empty() {
            tracing::debug!("Lead form rejected with {} violation(s)", violations.len());
            return Err(QuoteError::InvalidLead { violations });
        }

        match (
            name,
            phone,
            email,
            home_type,
            service_type,
            square_footage,
            cleaning_frequency,
        ) {
            (
                Some(name),
                Some(phone),
                Some(email),
                Some(home_type),
                Some(service_type),
                Some(square_footage),
                Some(cleaning_frequency),
            ) => Ok(LeadIntake {
                contact: Contact {
                    name,
                    phone,
                    email,
                    postal_code,
                    address: present(&self.address),
                    city: present(&self.city),
                    notes: present(&self.notes),
                },
                home_type,
                service_type,
                square_footage,
                cleaning_frequency,
                preferred_service_date,
                photos: self
                    .photos
                    .into_iter()
                    .filter(|p| !p.trim().is_empty())
                    .collect(),
                add_ons,
                add_on_frequency,
            }),
            // Every None above has pushed a violation.
            _ => Err(QuoteError::InvalidLead { violations }),
        }
    }
}

/// `"1,850"` or `"1850 sq ft"` -> 1850. Bucket labels are not numbers.
fn exact_square_feet(value: &Option<String>) -> Option<u32> {
    let raw = value.as_deref()?.trim().to_lowercase();
    let digits = raw.trim_end_matches("sq ft").trim_end().replace(',', "");
    digits.parse().ok()
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: &Option<String>,
) -> Option<String> {
    let value = present(value);
    if value.is_none() {
        violations.push(FieldViolation::new(field, "is required"));
    }
    value
}

fn choice<T: FormOption>(
    violations: &mut Vec<FieldViolation>,
    value: &Option<String>,
) -> Option<T> {
    let raw = required(violations, T::FIELD, value)?;
    match T::parse_option(&raw) {
        Ok(option) => Some(option),
        Err(_) => {
            let allowed: Vec<&str> = T::ALL.iter().map(|o| o.label()).collect();
            violations.push(FieldViolation::new(
                T::FIELD,
                format!("'{}' is not one of: {}", raw, allowed.join(", ")),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_form() -> LeadForm {
        LeadForm {
            name: Some("Jane Doe".to_string()),
            phone: Some("(541) 555-0100".to_string()),
            email: Some("jane@example.com".to_string()),
            postal_code: Some("97701".to_string()),
            home_type: Some("Single-Family Home".to_string()),
            service_type: Some("Standard Cleaning".to_string()),
            square_footage: Some("Under 1500 sq ft".to_string()),
            cleaning_frequency: Some("Weekly (15% Off)".to_string()),
            add_ons: vec!["Fridge".to_string()],
            add_on_frequency: Some("Every cleaning".to_string()),
            ..Default::default()
        }
    }

    fn fields(err: QuoteError) -> Vec<String> {
        match err {
            QuoteError::InvalidLead { violations } => {
                violations.into_iter().map(|v| v.field).collect()
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_valid_standard_form() {
        let intake = standard_form().into_intake().unwrap();
        assert_eq!(intake.contact.phone, "+15415550100");
        assert_eq!(intake.square_footage, SquareFootage::Under1500);
        assert_eq!(intake.cleaning_frequency, CleaningFrequency::Weekly);
        assert_eq!(intake.add_on_frequency, Some(AddOnFrequency::EveryCleaning));
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let err = LeadForm::default().into_intake().unwrap_err();
        assert_eq!(
            fields(err),
            vec![
                "name",
                "phone",
                "email",
                "homeType",
                "serviceType",
                "squareFootage",
                "cleaningFrequency"
            ]
        );
    }

    #[test]
    fn test_frequency_required_unless_move_out() {
        let mut form = standard_form();
        form.cleaning_frequency = None;
        assert_eq!(fields(form.into_intake().unwrap_err()), vec!["cleaningFrequency"]);

        let mut move_out = standard_form();
        move_out.service_type = Some("move-out-heavy-clean".to_string());
        move_out.cleaning_frequency = Some("Weekly (15% Off)".to_string());
        move_out.preferred_service_date = Some("2025-06-01".to_string());
        move_out.photos = vec!["kitchen.jpg".to_string()];
        let intake = move_out.into_intake().unwrap();
        assert_eq!(intake.cleaning_frequency, CleaningFrequency::OneTime);
    }

    #[test]
    fn test_move_out_requires_date_and_photos() {
        let mut form = standard_form();
        form.service_type = Some("Move-Out / Heavy Clean".to_string());
        form.photos = vec!["  ".to_string()];
        assert_eq!(
            fields(form.into_intake().unwrap_err()),
            vec!["preferredServiceDate", "photos"]
        );
    }

    #[test]
    fn test_add_on_frequency_required_with_add_ons() {
        let mut form = standard_form();
        form.add_on_frequency = None;
        assert_eq!(fields(form.into_intake().unwrap_err()), vec!["addOnFrequency"]);

        let mut no_add_ons = standard_form();
        no_add_ons.add_ons.clear();
        let intake = no_add_ons.into_intake().unwrap();
        assert_eq!(intake.add_on_frequency, None);
    }

    #[test]
    fn test_unknown_choice_and_bad_contact_details() {
        let mut form = standard_form();
        form.square_footage = Some("mansion".to_string());
        form.phone = Some("555-0100".to_string());
        form.email = Some("jane@".to_string());
        form.postal_code = Some("ABCDE".to_string());
        assert_eq!(
            fields(form.into_intake().unwrap_err()),
            vec!["phone", "email", "postalCode", "squareFootage"]
        );
    }

    #[test]
    fn test_exact_square_feet_maps_to_bucket() {
        let mut form = standard_form();
        form.square_footage = Some("2,000 sq ft".to_string());
        assert_eq!(
            form.into_intake().unwrap().square_footage,
            SquareFootage::From1500To2000
        );

        let mut form = standard_form();
        form.square_footage = Some("5501".to_string());
        assert_eq!(form.into_intake().unwrap().square_footage, SquareFootage::Over5500);
    }

    #[test]
    fn test_duplicate_add_ons_rejected() {
        let mut form = standard_form();
        form.add_ons = vec!["Fridge".to_string(), "fridge".to_string()];
        assert_eq!(fields(form.into_intake().unwrap_err()), vec!["addOns"]);
    }

    #[test]
    fn test_same_add_on_spelled_two_ways_rejected() {
        let mut form = standard_form();
        form.add_ons = vec!["windows-blinds".to_string(), "Windows & Blinds".to_string()];
        assert_eq!(fields(form.into_intake().unwrap_err()), vec!["addOns"]);

        let mut form = standard_form();
        form.add_ons = vec!["Garage".to_string(), " garage ".to_string()];
        assert_eq!(fields(form.into_intake().unwrap_err()), vec!["addOns"]);
    }

    #[test]
    fn test_add_on_count_limit() {
        let full_catalog: Vec<String> = ADD_ON_CATALOG.iter().map(|a| a.name.to_string()).collect();

        let mut form = standard_form();
        form.add_ons = full_catalog.clone();
        assert_eq!(form.into_intake().unwrap().add_ons.len(), 6);

        let mut form = standard_form();
        form.add_ons = full_catalog;
        form.add_ons.push("Garage".to_string());
        assert_eq!(fields(form.into_intake().unwrap_err()), vec!["addOns"]);
    }

    #[test]
    fn test_unknown_add_on_passes_validation() {
        let mut form = standard_form();
        form.add_ons = vec!["Garage".to_string()];
        let intake = form.into_intake().unwrap();
        assert_eq!(intake.add_ons, vec!["Garage".to_string()]);
    }
}
