//! The fixed choice lists offered by the lead form.
//!
//! Each option has a stable machine id (what gets serialized) and the label
//! the visitor sees. Parsing accepts either, ignoring case, commas and
//! surrounding whitespace. A value that matches nothing is rejected rather
//! than mapped to a default, since a silent default would misprice a lead.

use crate::utils::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};

pub trait FormOption: Copy + Sized + 'static {
    /// Form field name used in error messages.
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn id(self) -> &'static str;
    fn label(self) -> &'static str;

    /// Legacy spellings still accepted from older form builds.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    fn parse_option(raw: &str) -> Result<Self> {
        let wanted = normalize(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|option| {
                normalize(option.id()) == wanted
                    || normalize(option.label()) == wanted
                    || option.aliases().iter().any(|alias| normalize(alias) == wanted)
            })
            .ok_or_else(|| QuoteError::UnknownOption {
                field: Self::FIELD.to_string(),
                value: raw.to_string(),
            })
    }
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != ',')
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum HomeType {
    ApartmentCondo,
    SingleFamilyHome,
    Townhome,
    Other,
}

impl FormOption for HomeType {
    const FIELD: &'static str = "homeType";
    const ALL: &'static [Self] = &[
        HomeType::ApartmentCondo,
        HomeType::SingleFamilyHome,
        HomeType::Townhome,
        HomeType::Other,
    ];

    fn id(self) -> &'static str {
        match self {
            HomeType::ApartmentCondo => "apartment-condo",
            HomeType::SingleFamilyHome => "single-family-home",
            HomeType::Townhome => "townhome",
            HomeType::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            HomeType::ApartmentCondo => "Apartment/Condo",
            HomeType::SingleFamilyHome => "Single-Family Home",
            HomeType::Townhome => "Townhome",
            HomeType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ServiceType {
    StandardCleaning,
    MoveOutHeavyClean,
}

impl FormOption for ServiceType {
    const FIELD: &'static str = "serviceType";
    const ALL: &'static [Self] = &[ServiceType::StandardCleaning, ServiceType::MoveOutHeavyClean];

    fn id(self) -> &'static str {
        match self {
            ServiceType::StandardCleaning => "standard-cleaning",
            ServiceType::MoveOutHeavyClean => "move-out-heavy-clean",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ServiceType::StandardCleaning => "Standard Cleaning",
            ServiceType::MoveOutHeavyClean => "Move-Out / Heavy Clean",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ServiceType::StandardCleaning => &["Standard Home Cleaning", "standard"],
            ServiceType::MoveOutHeavyClean => &["Move-Out Cleaning", "Heavy Clean", "move-out"],
        }
    }
}

/// Home size buckets. Boundaries are inclusive and leave no gaps: every
/// square footage falls in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SquareFootage {
    Under1500,
    From1500To2000,
    From2001To2500,
    From2501To3000,
    From3001To4000,
    From4001To5500,
    Over5500,
}

impl SquareFootage {
    /// Bucket for an exact measurement.
    pub fn for_square_feet(square_feet: u32) -> Self {
        match square_feet {
            0..=1499 => SquareFootage::Under1500,
            1500..=2000 => SquareFootage::From1500To2000,
            2001..=2500 => SquareFootage::From2001To2500,
            2501..=3000 => SquareFootage::From2501To3000,
            3001..=4000 => SquareFootage::From3001To4000,
            4001..=5500 => SquareFootage::From4001To5500,
            _ => SquareFootage::Over5500,
        }
    }
}

impl FormOption for SquareFootage {
    const FIELD: &'static str = "squareFootage";
    const ALL: &'static [Self] = &[
        SquareFootage::Under1500,
        SquareFootage::From1500To2000,
        SquareFootage::From2001To2500,
        SquareFootage::From2501To3000,
        SquareFootage::From3001To4000,
        SquareFootage::From4001To5500,
        SquareFootage::Over5500,
    ];

    fn id(self) -> &'static str {
        match self {
            SquareFootage::Under1500 => "under-1500",
            SquareFootage::From1500To2000 => "1500-2000",
            SquareFootage::From2001To2500 => "2001-2500",
            SquareFootage::From2501To3000 => "2501-3000",
            SquareFootage::From3001To4000 => "3001-4000",
            SquareFootage::From4001To5500 => "4001-5500",
            SquareFootage::Over5500 => "over-5500",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SquareFootage::Under1500 => "Under 1,500 sq ft",
            SquareFootage::From1500To2000 => "1,500-2,000 sq ft",
            SquareFootage::From2001To2500 => "2,001-2,500 sq ft",
            SquareFootage::From2501To3000 => "2,501-3,000 sq ft",
            SquareFootage::From3001To4000 => "3,001-4,000 sq ft",
            SquareFootage::From4001To5500 => "4,001-5,500 sq ft",
            SquareFootage::Over5500 => "Over 5,500 sq ft",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            // Older form builds shipped this bucket as "4,0001-5,500 sq ft".
            SquareFootage::From4001To5500 => &["4,0001-5,500 sq ft"],
            SquareFootage::Over5500 => &["5,500+ sq ft"],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CleaningFrequency {
    OneTime,
    Weekly,
    BiWeekly,
    Monthly,
}

impl FormOption for CleaningFrequency {
    const FIELD: &'static str = "cleaningFrequency";
    const ALL: &'static [Self] = &[
        CleaningFrequency::OneTime,
        CleaningFrequency::Weekly,
        CleaningFrequency::BiWeekly,
        CleaningFrequency::Monthly,
    ];

    fn id(self) -> &'static str {
        match self {
            CleaningFrequency::OneTime => "one-time",
            CleaningFrequency::Weekly => "weekly",
            CleaningFrequency::BiWeekly => "bi-weekly",
            CleaningFrequency::Monthly => "monthly",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CleaningFrequency::OneTime => "One-time",
            CleaningFrequency::Weekly => "Weekly (15% Off)",
            CleaningFrequency::BiWeekly => "Bi-weekly (10% Off)",
            CleaningFrequency::Monthly => "Monthly (5% Off)",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            CleaningFrequency::OneTime => &["One time", "once"],
            CleaningFrequency::BiWeekly => &["biweekly", "Every other week"],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AddOnFrequency {
    FirstCleaningOnly,
    EveryCleaning,
    NotSureYet,
}

impl FormOption for AddOnFrequency {
    const FIELD: &'static str = "addOnFrequency";
    const ALL: &'static [Self] = &[
        AddOnFrequency::FirstCleaningOnly,
        AddOnFrequency::EveryCleaning,
        AddOnFrequency::NotSureYet,
    ];

    fn id(self) -> &'static str {
        match self {
            AddOnFrequency::FirstCleaningOnly => "first-cleaning-only",
            AddOnFrequency::EveryCleaning => "every-cleaning",
            AddOnFrequency::NotSureYet => "not-sure-yet",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AddOnFrequency::FirstCleaningOnly => "First cleaning only",
            AddOnFrequency::EveryCleaning => "Every cleaning",
            AddOnFrequency::NotSureYet => "Not sure yet",
        }
    }
}

// serde glue: ids out, ids or labels in.

impl TryFrom<String> for HomeType {
    type Error = QuoteError;
    fn try_from(value: String) -> Result<Self> {
        Self::parse_option(&value)
    }
}

impl From<HomeType> for &'static str {
    fn from(value: HomeType) -> Self {
        value.id()
    }
}

impl TryFrom<String> for ServiceType {
    type Error = QuoteError;
    fn try_from(value: String) -> Result<Self> {
        Self::parse_option(&value)
    }
}

impl From<ServiceType> for &'static str {
    fn from(value: ServiceType) -> Self {
        value.id()
    }
}

impl TryFrom<String> for SquareFootage {
    type Error = QuoteError;
    fn try_from(value: String) -> Result<Self> {
        Self::parse_option(&value)
    }
}

impl From<SquareFootage> for &'static str {
    fn from(value: SquareFootage) -> Self {
        value.id()
    }
}

impl TryFrom<String> for CleaningFrequency {
    type Error = QuoteError;
    fn try_from(value: String) -> Result<Self> {
        Self::parse_option(&value)
    }
}

impl From<CleaningFrequency> for &'static str {
    fn from(value: CleaningFrequency) -> Self {
        value.id()
    }
}

impl TryFrom<String> for AddOnFrequency {
    type Error = QuoteError;
    fn try_from(value: String) -> Result<Self> {
        Self::parse_option(&value)
    }
}

impl From<AddOnFrequency> for &'static str {
    fn from(value: AddOnFrequency) -> Self {
        value.id()
    }
}
