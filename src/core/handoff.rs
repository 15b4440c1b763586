//! Quote hand-off between the intake step and the booking step.

use crate::core::Storage;
use crate::domain::model::LeadIntake;
use crate::domain::quote::{Quote, QuoteSummary};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::validate_session_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffRecord {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub intake: LeadIntake,
    pub quote: QuoteSummary,
}

pub struct SessionHandoff<S: Storage> {
    storage: S,
}

impl<S: Storage> SessionHandoff<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn path_for(session_id: &str) -> Result<String> {
        validate_session_id(session_id)?;
        Ok(format!("sessions/{}.json", session_id))
    }

    pub async fn save(
        &self,
        session_id: &str,
        intake: &LeadIntake,
        quote: &Quote,
    ) -> Result<HandoffRecord> {
        let path = Self::path_for(session_id)?;
        let record = HandoffRecord {
            session_id: session_id.to_string(),
            created_at: Utc::now(),
            intake: intake.clone(),
            quote: quote.summary(),
        };

        let data = serde_json::to_vec_pretty(&record)?;
        tracing::debug!("Writing hand-off record ({} bytes) to {}", data.len(), path);
        self.storage.write_file(&path, &data).await?;

        Ok(record)
    }

    pub async fn load(&self, session_id: &str) -> Result<HandoffRecord> {
        let path = Self::path_for(session_id)?;
        let data = match self.storage.read_file(&path).await {
            Ok(data) => data,
            Err(QuoteError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(QuoteError::SessionNotFound {
                    session_id: session_id.to_string(),
                })
            }
            Err(e) => return Err(e),
        };

        Ok(serde_json::from_slice(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::calculate_quote;
    use crate::core::intake::LeadForm;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                QuoteError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn sample_intake() -> LeadIntake {
        LeadForm {
            name: Some("Sam Lee".to_string()),
            phone: Some("541-555-0199".to_string()),
            email: Some("sam@example.com".to_string()),
            home_type: Some("Townhome".to_string()),
            service_type: Some("Standard Cleaning".to_string()),
            square_footage: Some("2,001-2,500 sq ft".to_string()),
            cleaning_frequency: Some("Monthly (5% Off)".to_string()),
            ..Default::default()
        }
        .into_intake()
        .unwrap()
    }

    #[test]
    fn test_save_then_load() {
        tokio_test::block_on(async {
            let storage = MockStorage::default();
            let handoff = SessionHandoff::new(storage.clone());
            let intake = sample_intake();
            let quote = calculate_quote(&intake);

            let saved = handoff.save("sess-42", &intake, &quote).await.unwrap();
            assert!(storage.files.lock().await.contains_key("sessions/sess-42.json"));

            let loaded = handoff.load("sess-42").await.unwrap();
            assert_eq!(loaded, saved);
            assert_eq!(loaded.quote.first_clean_price, quote.first_clean_price());
            assert_eq!(loaded.quote.recurring_price, quote.recurring_price());
        });
    }

    #[tokio::test]
    async fn test_missing_session() {
        let handoff = SessionHandoff::new(MockStorage::default());
        let err = handoff.load("nope").await.unwrap_err();
        assert!(matches!(err, QuoteError::SessionNotFound { .. }));
    }

    #[tokio::test]
    async fn test_rejects_path_like_session_ids() {
        let handoff = SessionHandoff::new(MockStorage::default());
        let intake = sample_intake();
        let quote = calculate_quote(&intake);
        assert!(handoff.save("../escape", &intake, &quote).await.is_err());
    }
}
