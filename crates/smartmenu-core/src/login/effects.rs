//! Login effect types.
//!
//! Effects are commands returned by the controller that the session executes.
//! The controller only mutates form state and returns effects; spawning the
//! submission task, calling the host and cancelling tokens all happen in
//! `LoginSession`.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::credentials::Credentials;
use super::task::TaskId;

/// Title of the password-recovery notice.
pub const RECOVERY_TITLE: &str = "Password recovery";
/// Body of the password-recovery notice.
pub const RECOVERY_MESSAGE: &str = "a recovery link has been sent";

/// A fire-and-forget message for the platform's alert facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    pub const fn password_recovery() -> Self {
        Self {
            title: RECOVERY_TITLE,
            message: RECOVERY_MESSAGE,
        }
    }
}

/// Effects returned by the controller for the session to execute.
#[derive(Debug)]
pub enum LoginEffect {
    /// Start the delayed sign-in attempt.
    SpawnSubmission {
        task: TaskId,
        cancel: CancellationToken,
        credentials: Credentials,
        delay: Duration,
    },

    /// Hand successful credentials to the host (`on_login`).
    DeliverCredentials(Credentials),

    /// Show a notice through the host.
    Notify(Notice),

    /// Cancel an in-flight submission.
    CancelTask { token: CancellationToken },
}
