use crate::domain::lead::{LeadReceipt, LeadSubmission, ProsApplication, RemoteQuote};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn backend_endpoint(&self) -> &str;
    fn session_storage_path(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn poll_attempts(&self) -> u32;
    fn poll_interval(&self) -> Duration;
    fn booking_widget_url(&self) -> Option<&str>;
}

/// The external lead-intake backend.
#[async_trait]
pub trait LeadGateway: Send + Sync {
    async fn submit_lead(&self, submission: &LeadSubmission) -> Result<LeadReceipt>;
    async fn submit_pros_application(&self, application: &ProsApplication) -> Result<LeadReceipt>;
    async fn fetch_quote(&self, phone: &str) -> Result<RemoteQuote>;
}
