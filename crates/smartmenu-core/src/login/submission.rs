//! Stub sign-in backend.
//!
//! Sleeps for the configured delay and then accepts the credentials. There is
//! no failure branch; `SubmissionError` is the slot a real backend would map
//! its network and auth failures into.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::credentials::Credentials;

/// Failure reported by the sign-in backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The backend refused the credentials.
    #[error("sign-in rejected: {0}")]
    Rejected(String),
    /// The backend could not be reached.
    #[error("sign-in service unavailable: {0}")]
    Unavailable(String),
}

pub type SubmissionResult = Result<Credentials, SubmissionError>;

/// Runs one stub sign-in attempt.
///
/// Returns `None` when `cancel` fires before the delay elapses.
pub async fn stub_sign_in(
    credentials: Credentials,
    delay: Duration,
    cancel: CancellationToken,
) -> Option<SubmissionResult> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            tracing::debug!("sign-in attempt cancelled");
            None
        }
        () = tokio::time::sleep(delay) => Some(Ok(credentials)),
    }
}
