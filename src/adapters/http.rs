use crate::core::LeadGateway;
use crate::domain::lead::{LeadReceipt, LeadSubmission, ProsApplication, RemoteQuote};
use crate::utils::error::{QuoteError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

const LEADS_PATH: &str = "leads/cleaning";
const PROS_PATH: &str = "leads/pros";
const QUOTE_PATH: &str = "quote/cleaning";

/// reqwest client for the lead-intake backend.
pub struct HttpLeadGateway {
    client: Client,
    base_url: Url,
}

impl HttpLeadGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| QuoteError::InvalidConfigValueError {
            field: "backend.endpoint".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| QuoteError::ConfigError {
                message: format!("Cannot build backend URL for {}: {}", path, e),
            })
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<LeadReceipt> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        tracing::debug!("{} responded {}", path, response.status());
        read_json(response).await
    }
}

/// Decodes a success body, or turns an error status into
/// [`QuoteError::BackendRejected`] carrying the backend's own `detail`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(QuoteError::BackendRejected {
        status: status.as_u16(),
        detail: rejection_detail(status.canonical_reason(), &body),
    })
}

/// FastAPI puts its message under `detail`; anything else is passed through.
fn rejection_detail(reason: Option<&str>, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| match json.get("detail") {
            Some(serde_json::Value::String(detail)) => Some(detail.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        });

    match detail {
        Some(detail) => detail,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => reason.unwrap_or("no response body").to_string(),
    }
}

#[async_trait]
impl LeadGateway for HttpLeadGateway {
    async fn submit_lead(&self, submission: &LeadSubmission) -> Result<LeadReceipt> {
        self.post_json(LEADS_PATH, submission).await
    }

    async fn submit_pros_application(&self, application: &ProsApplication) -> Result<LeadReceipt> {
        self.post_json(PROS_PATH, application).await
    }

    async fn fetch_quote(&self, phone: &str) -> Result<RemoteQuote> {
        let url = self.endpoint(QUOTE_PATH)?;
        tracing::debug!("Fetching server quote from {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("phone", phone)])
            .send()
            .await?;

        read_json(response).await
    }
}
