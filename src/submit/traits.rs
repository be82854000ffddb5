//! Trait abstraction for the submission collaborator to enable mocking
//! in tests

use super::SubmitError;
use crate::state::FormSnapshot;
use async_trait::async_trait;

/// Delivers one captured form to wherever submissions go.
///
/// The contract is two-outcome: the snapshot is either delivered or
/// rejected. The form enforces no timeout of its own; a real transport
/// must bring its own policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitClientTrait: Send + Sync {
    /// Deliver a snapshot, exactly once per submission attempt
    async fn submit(&mut self, snapshot: &FormSnapshot) -> Result<(), SubmitError>;
}
