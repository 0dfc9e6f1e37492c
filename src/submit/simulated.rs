//! Stand-in submitter that only waits

use super::traits::{AccountSubmitter, SubmitError};
use crate::state::FormRecord;
use async_trait::async_trait;
use std::time::Duration;

/// Submitter that sleeps for a fixed latency and then succeeds
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

#[async_trait]
impl AccountSubmitter for SimulatedSubmitter {
    async fn create_account(&self, record: FormRecord) -> Result<(), SubmitError> {
        tracing::debug!(
            username = %record.username,
            latency_ms = self.latency.as_millis() as u64,
            "simulating account creation"
        );
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}
