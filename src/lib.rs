pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::AppConfig};

pub use adapters::http::HttpLeadGateway;
pub use self::core::{
    calculator::calculate_quote,
    handoff::SessionHandoff,
    intake::LeadForm,
    submission::{poll_remote_quote, submit_best_effort, Submission, SubmissionOutcome},
};
pub use domain::{
    lead::{LeadSubmission, ProsApplication, RemoteQuote},
    model::LeadIntake,
    money::Money,
    quote::{Quote, QuoteStatus, QuoteSummary},
};
pub use utils::error::{QuoteError, Result};
