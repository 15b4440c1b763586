use crate::core::LeadGateway;
use crate::domain::lead::{LeadSubmission, ProsApplication, RemoteQuote};
use crate::utils::error::{QuoteError, Result};
use std::time::Duration;

/// How a fire-and-forget lead submission ended. Never an error: the local
/// quote stands whatever happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted { contact_id: Option<String> },
    Rejected { status: Option<u16>, detail: String },
    TimedOut,
    Failed { reason: String },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }
}

/// The two website forms the backend takes.
#[derive(Debug, Clone, Copy)]
pub enum Submission<'a> {
    CleaningLead(&'a LeadSubmission),
    ProsApplication(&'a ProsApplication),
}

impl Submission<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Submission::CleaningLead(_) => "Lead",
            Submission::ProsApplication(_) => "Pros application",
        }
    }
}

impl<'a> From<&'a LeadSubmission> for Submission<'a> {
    fn from(lead: &'a LeadSubmission) -> Self {
        Submission::CleaningLead(lead)
    }
}

impl<'a> From<&'a ProsApplication> for Submission<'a> {
    fn from(application: &'a ProsApplication) -> Self {
        Submission::ProsApplication(application)
    }
}

pub async fn submit_best_effort<'a, G, S>(
    gateway: &G,
    submission: S,
    timeout: Duration,
) -> SubmissionOutcome
where
    G: LeadGateway + ?Sized,
    S: Into<Submission<'a>>,
{
    let submission = submission.into();
    let request = async {
        match submission {
            Submission::CleaningLead(lead) => gateway.submit_lead(lead).await,
            Submission::ProsApplication(application) => {
                gateway.submit_pros_application(application).await
            }
        }
    };

    let outcome = match tokio::time::timeout(timeout, request).await {
        Err(_) => SubmissionOutcome::TimedOut,
        Ok(Ok(receipt)) if receipt.ok => SubmissionOutcome::Accepted {
            contact_id: receipt.contact_id,
        },
        Ok(Ok(receipt)) => SubmissionOutcome::Rejected {
            status: None,
            detail: receipt
                .message
                .unwrap_or_else(|| "backend reported ok=false".to_string()),
        },
        Ok(Err(QuoteError::ApiError(e))) if e.is_timeout() => SubmissionOutcome::TimedOut,
        Ok(Err(QuoteError::BackendRejected { status, detail })) => SubmissionOutcome::Rejected {
            status: Some(status),
            detail,
        },
        Ok(Err(e)) => SubmissionOutcome::Failed {
            reason: e.to_string(),
        },
    };

    let kind = submission.kind();
    match &outcome {
        SubmissionOutcome::Accepted { contact_id } => {
            tracing::info!("{} submitted, contact_id={:?}", kind, contact_id)
        }
        SubmissionOutcome::TimedOut => {
            tracing::warn!("{} submission timed out after {:?}", kind, timeout)
        }
        other => tracing::warn!("{} submission did not go through: {:?}", kind, other),
    }

    outcome
}

/// Polls the backend for the server-side quote until it is ready, known to
/// be missing, or `attempts` run out (then the last `Pending` is returned).
pub async fn poll_remote_quote<G: LeadGateway + ?Sized>(
    gateway: &G,
    phone: &str,
    attempts: u32,
    interval: Duration,
) -> Result<RemoteQuote> {
    let attempts = attempts.max(1);
    let mut last = RemoteQuote::Pending;

    for attempt in 1..=attempts {
        last = gateway.fetch_quote(phone).await?;
        tracing::debug!("Quote poll {}/{} for {}: {:?}", attempt, attempts, phone, last);

        if last.is_settled() {
            break;
        }
        if attempt < attempts {
            tokio::time::sleep(interval).await;
        }
    }

    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lead::LeadReceipt;
    use crate::domain::money::Money;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct ScriptedGateway {
        receipt_delay: Duration,
        ready_after: u32,
        polls: AtomicU32,
    }

    #[async_trait]
    impl LeadGateway for ScriptedGateway {
        async fn submit_lead(&self, _submission: &LeadSubmission) -> Result<LeadReceipt> {
            tokio::time::sleep(self.receipt_delay).await;
            Ok(LeadReceipt {
                ok: true,
                contact_id: Some("c-123".to_string()),
                message: None,
            })
        }

        async fn submit_pros_application(
            &self,
            _application: &ProsApplication,
        ) -> Result<LeadReceipt> {
            Err(QuoteError::BackendRejected {
                status: 500,
                detail: "Failed to submit application.".to_string(),
            })
        }

        async fn fetch_quote(&self, _phone: &str) -> Result<RemoteQuote> {
            let n = self.polls.fetch_add(1, Ordering::SeqCst) + 1;
            if n >= self.ready_after {
                Ok(RemoteQuote::Ready {
                    estimated_price: Money::from_dollars(220),
                    price_breakdown: None,
                })
            } else {
                Ok(RemoteQuote::Pending)
            }
        }
    }

    fn gateway(receipt_delay: Duration, ready_after: u32) -> ScriptedGateway {
        ScriptedGateway {
            receipt_delay,
            ready_after,
            polls: AtomicU32::new(0),
        }
    }

    fn submission() -> LeadSubmission {
        serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "+15415550100",
            "home_type": "Townhome",
            "home_size": "Under 1,500 sq ft",
            "service_type": "Standard Cleaning",
            "quote": {
                "status": "ready",
                "service": "Standard Cleaning",
                "firstCleanPrice": 180.0,
                "recurringPrice": null,
                "frequencyLabel": "One-time",
                "discountLabel": null,
                "addOnLines": [],
                "priceBreakdown": "Service: Standard Cleaning"
            }
        }))
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_backend_times_out() {
        let gw = gateway(Duration::from_secs(30), 1);
        let outcome = submit_best_effort(&gw, &submission(), Duration::from_secs(5)).await;
        assert_eq!(outcome, SubmissionOutcome::TimedOut);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_backend_accepted() {
        let gw = gateway(Duration::from_millis(10), 1);
        let outcome = submit_best_effort(&gw, &submission(), Duration::from_secs(5)).await;
        assert_eq!(
            outcome,
            SubmissionOutcome::Accepted {
                contact_id: Some("c-123".to_string())
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_rejection_keeps_detail() {
        let gw = gateway(Duration::ZERO, 1);
        let application = ProsApplication {
            name: "Maria Lopez".to_string(),
            phone: "+15415550142".to_string(),
            email: "maria@example.com".to_string(),
            experience: None,
            notes: None,
        };
        let outcome = submit_best_effort(&gw, &application, Duration::from_secs(5)).await;
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                status: Some(500),
                detail: "Failed to submit application.".to_string(),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_stops_when_ready() {
        let gw = gateway(Duration::ZERO, 3);
        let quote = poll_remote_quote(&gw, "+15415550100", 10, Duration::from_secs(2))
            .await
            .unwrap();
        assert!(matches!(quote, RemoteQuote::Ready { .. }));
        assert_eq!(gw.polls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_gives_up_pending() {
        let gw = gateway(Duration::ZERO, 100);
        let quote = poll_remote_quote(&gw, "+15415550100", 4, Duration::from_secs(2))
            .await
            .unwrap();
        assert_eq!(quote, RemoteQuote::Pending);
        assert_eq!(gw.polls.load(Ordering::SeqCst), 4);
    }
}
