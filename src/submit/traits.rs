//! Trait abstraction for account submission to enable mocking in tests

use crate::state::FormRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by an account submitter
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("account creation rejected: {0}")]
    Rejected(String),
    #[error("account service unavailable")]
    Unavailable,
}

/// Receives a validated record and creates the account
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountSubmitter: Send + Sync {
    async fn create_account(&self, record: FormRecord) -> Result<(), SubmitError>;
}
