//! Submission collaborator: trait seam plus the simulated reference client

mod client;
mod traits;

use thiserror::Error;

pub use client::SimulatedClient;
pub use traits::SubmitClientTrait;

#[cfg(test)]
pub use traits::MockSubmitClientTrait;

/// Failure reported by the submission collaborator. Recoverable by
/// resubmission; surfaced to the user only as a generic notice.
#[allow(dead_code)] // Transport is for real integrations, not the simulation
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    #[error("delivery was rejected")]
    Rejected,
    #[error("transport failed: {0}")]
    Transport(String),
}
