use crate::domain::options::{
    AddOnFrequency, CleaningFrequency, HomeType, ServiceType, SquareFootage,
};
use serde::{Deserialize, Serialize};

/// Who to call back. Carried through to the CRM, never priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    /// E.164, e.g. `+15415550100`. Doubles as the booking correlation key.
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A validated lead, one per form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadIntake {
    #[serde(flatten)]
    pub contact: Contact,
    pub home_type: HomeType,
    pub service_type: ServiceType,
    pub square_footage: SquareFootage,
    /// Always `OneTime` for move-out jobs.
    pub cleaning_frequency: CleaningFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_service_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    /// Catalog ids or names as submitted; unknown entries are kept.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_on_frequency: Option<AddOnFrequency>,
}

impl LeadIntake {
    pub fn is_move_out(&self) -> bool {
        self.service_type == ServiceType::MoveOutHeavyClean
    }
}
