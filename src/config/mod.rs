pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lead-quote")]
#[command(about = "Price a cleaning lead and hand it off to booking")]
pub struct CliConfig {
    /// Lead form to quote (.json or .toml)
    #[arg(long)]
    pub intake: String,

    /// TOML configuration; replaces the backend/session flags below
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "http://localhost:8000")]
    pub backend_endpoint: String,

    #[arg(long, default_value = "./.lead-quote")]
    pub storage_path: String,

    #[arg(long, default_value = "5")]
    pub timeout_seconds: u64,

    #[arg(long)]
    pub booking_widget_url: Option<String>,

    /// Save the quote for the booking step under this session id
    #[arg(long)]
    pub session_id: Option<String>,

    /// POST the lead to the backend (best effort)
    #[arg(long)]
    pub submit: bool,

    /// Print the quote as JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn backend_endpoint(&self) -> &str {
        &self.backend_endpoint
    }

    fn session_storage_path(&self) -> &str {
        &self.storage_path
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn poll_attempts(&self) -> u32 {
        1
    }

    fn poll_interval(&self) -> Duration {
        Duration::ZERO
    }

    fn booking_widget_url(&self) -> Option<&str> {
        self.booking_widget_url.as_deref()
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::{validate_path, validate_range, validate_url};

        validate_path("intake", &self.intake)?;
        validate_url("backend_endpoint", &self.backend_endpoint)?;
        validate_path("storage_path", &self.storage_path)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 60)?;
        if let Some(url) = &self.booking_widget_url {
            validate_url("booking_widget_url", url)?;
        }
        if let Some(session_id) = &self.session_id {
            crate::utils::validation::validate_session_id(session_id)?;
        }
        Ok(())
    }
}
