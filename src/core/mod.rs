pub mod breakdown;
pub mod calculator;
pub mod handoff;
pub mod intake;
pub mod submission;

pub use crate::domain::model::LeadIntake;
pub use crate::domain::ports::{ConfigProvider, LeadGateway, Storage};
pub use crate::domain::quote::{Quote, QuoteSummary};
pub use crate::utils::error::Result;
