use crate::core::ConfigProvider;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
const DEFAULT_POLL_ATTEMPTS: u32 = 10;
const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub booking: Option<BookingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub poll_attempts: Option<u32>,
    pub poll_interval_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub storage_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    pub widget_url: String,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LEAD_BACKEND_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend.endpoint", &self.backend.endpoint)?;
        validate_path("session.storage_path", &self.session.storage_path)?;

        if let Some(timeout) = self.backend.timeout_seconds {
            validate_range("backend.timeout_seconds", timeout, 1, 60)?;
        }
        if let Some(attempts) = self.backend.poll_attempts {
            validate_range("backend.poll_attempts", attempts, 1, 100)?;
        }
        if let Some(booking) = &self.booking {
            validate_url("booking.widget_url", &booking.widget_url)?;
        }

        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn backend_endpoint(&self) -> &str {
        &self.backend.endpoint
    }

    fn session_storage_path(&self) -> &str {
        &self.session.storage_path
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn poll_attempts(&self) -> u32 {
        self.backend.poll_attempts.unwrap_or(DEFAULT_POLL_ATTEMPTS)
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_secs(
            self.backend
                .poll_interval_seconds
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECONDS),
        )
    }

    fn booking_widget_url(&self) -> Option<&str> {
        self.booking.as_ref().map(|b| b.widget_url.as_str())
    }
}
