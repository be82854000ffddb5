//! Simulated submission client
//!
//! Stands in for a real transport: waits a configured delay, then
//! resolves. The default configuration always delivers; rejection can be
//! switched on to exercise the failure path.

use super::traits::SubmitClientTrait;
use super::SubmitError;
use crate::state::FormSnapshot;
use async_trait::async_trait;
use std::time::Duration;

/// In-process client that simulates delivery with a fixed delay
pub struct SimulatedClient {
    delay: Duration,
    reject: bool,
}

impl SimulatedClient {
    pub fn new(delay: Duration, reject: bool) -> Self {
        Self { delay, reject }
    }
}

#[async_trait]
impl SubmitClientTrait for SimulatedClient {
    async fn submit(&mut self, snapshot: &FormSnapshot) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        if self.reject {
            return Err(SubmitError::Rejected);
        }
        tracing::info!(
            from = %snapshot.email,
            subject = %snapshot.subject,
            "simulated delivery"
        );
        Ok(())
    }
}
