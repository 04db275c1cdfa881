use contracts::shared::config::{FormConfig, SimulatedFailure};
use contracts::usecases::u101_contact_form::{ContactRequest, SubmitError};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::pin::Pin;

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// Where a validated contact request goes.
///
/// A real backend call replaces [`SimulatedSubmitter`] here; whatever it
/// resolves to drives the success/failure notice.
pub trait ContactSubmitter {
    fn submit(&self, request: ContactRequest) -> SubmitFuture;
}

/// Stand-in backend: waits `latency_ms`, then accepts the request or fails
/// the way `failure` says
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    pub latency_ms: u32,
    pub failure: SimulatedFailure,
}

impl SimulatedSubmitter {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            latency_ms: config.submit_delay_ms,
            failure: config.simulate_failure,
        }
    }

    fn outcome(&self) -> Result<(), SubmitError> {
        match self.failure {
            SimulatedFailure::None => Ok(()),
            SimulatedFailure::Rejected => Err(SubmitError::Rejected {
                reason: "simulated rejection".to_string(),
            }),
            SimulatedFailure::Unavailable => Err(SubmitError::Unavailable),
        }
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, request: ContactRequest) -> SubmitFuture {
        let latency_ms = self.latency_ms;
        let outcome = self.outcome();
        Box::pin(async move {
            log::debug!(
                "u101: simulated submit {}",
                serde_json::to_string(&request).unwrap_or_default()
            );
            TimeoutFuture::new(latency_ms).await;
            outcome
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitter(failure: SimulatedFailure) -> SimulatedSubmitter {
        SimulatedSubmitter {
            latency_ms: 0,
            failure,
        }
    }

    #[test]
    fn test_outcome_follows_configured_failure() {
        assert_eq!(submitter(SimulatedFailure::None).outcome(), Ok(()));
        assert!(matches!(
            submitter(SimulatedFailure::Rejected).outcome(),
            Err(SubmitError::Rejected { .. })
        ));
        assert_eq!(
            submitter(SimulatedFailure::Unavailable).outcome(),
            Err(SubmitError::Unavailable)
        );
    }

    #[test]
    fn test_from_config() {
        let mut config = FormConfig::default();
        config.simulate_failure = SimulatedFailure::Rejected;
        let s = SimulatedSubmitter::from_config(&config);
        assert_eq!(s.latency_ms, 900);
        assert_eq!(s.failure, SimulatedFailure::Rejected);
    }
}
